//! Character encoding detection and transcoding for saved snapshots.
//!
//! Saved result pages are usually UTF-8, but pages stored by older browsers
//! or proxies may be in a legacy charset. The charset is taken from a byte
//! order mark if present, else from the first `<meta ... charset=...>`
//! declaration near the top of the document, else UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes examined for a charset declaration.
const SNIFF_LEN: usize = 4096;

/// `charset=` inside a `<meta>` tag. Covers both `<meta charset="...">` and
/// the `http-equiv` content form.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?([A-Za-z0-9._:-]+)"#).expect("valid regex")
});

/// Detect the character encoding of a snapshot.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label from the first meta declaration, as written.
fn declared_charset(head: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode snapshot bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than failing, and a leading BOM
/// is dropped.
///
/// # Examples
///
/// ```
/// use rs_kc_carousel::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><div>Caf\xE9</div>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _had_errors) = encoding.decode_with_bom_removal(html);
    decoded.into_owned()
}
