//! `\xNN` escape decoding.
//!
//! Inline image payloads arrive as script string literals in which some
//! characters were written as `\xNN` hex escapes (`\x3d` for `=`, `\x2F`
//! for `/`). Decoding is one left-to-right pass; every token is exactly four
//! characters so matches never overlap.

use std::borrow::Cow;

use crate::patterns::HEX_ESCAPE;

/// Replace every `\xNN` token with the byte `0xNN`.
///
/// Text outside the tokens is copied through as its UTF-8 bytes. Tokens that
/// are not followed by two hex digits (`\xZ1`, a trailing `\x4`) are kept
/// verbatim.
///
/// # Example
///
/// ```rust
/// use rs_kc_carousel::escape::decode_hex_escapes_to_bytes;
///
/// assert_eq!(decode_hex_escapes_to_bytes(r"\x00\xff/"), vec![0x00, 0xff, b'/']);
/// ```
#[must_use]
pub fn decode_hex_escapes_to_bytes(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut last = 0;

    for caps in HEX_ESCAPE.captures_iter(input) {
        let (Some(token), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        out.extend_from_slice(&input.as_bytes()[last..token.start()]);
        match u8::from_str_radix(digits.as_str(), 16) {
            Ok(byte) => out.push(byte),
            Err(_) => out.extend_from_slice(token.as_str().as_bytes()),
        }
        last = token.end();
    }

    out.extend_from_slice(&input.as_bytes()[last..]);
    out
}

/// Decode `\xNN` escapes into a string.
///
/// The decoded bytes are read back as UTF-8, so an escaped multi-byte
/// sequence (`\xc3\xa9`) becomes its character. Bytes that do not form valid
/// UTF-8 become U+FFFD. Input without any escape is borrowed unchanged.
#[must_use]
pub fn decode_hex_escapes(input: &str) -> Cow<'_, str> {
    if !HEX_ESCAPE.is_match(input) {
        return Cow::Borrowed(input);
    }

    match String::from_utf8(decode_hex_escapes_to_bytes(input)) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(err) => Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned()),
    }
}
