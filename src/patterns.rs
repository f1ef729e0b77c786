//! Compiled regex patterns and CSS selectors for carousel extraction.
//!
//! Static patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::options::DEFAULT_IMAGE_DATA_PREFIX;

// =============================================================================
// Candidate Selection
// =============================================================================

/// Carousel thumbnails: images inside a search link inside a knowledge card
/// block. Only semantic attributes are used because class names in this
/// markup are generated and change between page versions. The `search?`
/// filter drops ad links and the `img` step drops caption-only overview links.
pub const CAROUSEL_IMAGE_SELECTOR: &str = r#"div[data-attrid^="kc:"] a[href*="search?"] img"#;

/// Nested text containers inside a carousel anchor (name first, then year).
pub const CAROUSEL_TEXT_SELECTOR: &str = "div > div";

/// Every script block, whatever its type.
pub const SCRIPT_SELECTOR: &str = "script";

// =============================================================================
// Escape Decoding
// =============================================================================

/// A single `\xNN` escape token.
pub static HEX_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\x([0-9a-fA-F]{2})").expect("HEX_ESCAPE regex"));

// =============================================================================
// Script Image Injection
// =============================================================================

/// Build the head pattern for script blocks that inject an inline image, e.g.
///
/// ```text
/// (function(){var s='data:image/jpeg;base64,/9j/4AAQ...\x3d';var ii=['dimg_t7aU_5'];_setImagesSrc(ii,s);})();
/// ```
///
/// Anchored at a line start. Capture groups: `data_var`, `data`, and `rest`
/// (the remainder of that line, searched with [`SCRIPT_IMAGE_BINDING`]).
pub fn script_image_data_regex(prefix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?m)^\(function\(\)\{{var (?<data_var>\w+)\s*=\s*'(?<data>{prefix},[^']+)';(?<rest>.*)",
        prefix = regex::escape(prefix)
    ))
}

/// [`script_image_data_regex`] for the default `data:image/jpeg;base64` prefix.
pub static SCRIPT_IMAGE_DATA: LazyLock<Regex> = LazyLock::new(|| {
    script_image_data_regex(DEFAULT_IMAGE_DATA_PREFIX).expect("SCRIPT_IMAGE_DATA regex")
});

/// A single-element id list followed by a two-argument call:
/// `var ii=['dimg_1'];_setImagesSrc(ii,s)`.
///
/// Capture groups: `list_var`, `id`, `arg_list`, `arg_data`. The regex crate
/// has no backreferences, so checking that the call names the list and the
/// data variable is left to the caller.
pub static SCRIPT_IMAGE_BINDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"var (?<list_var>\w+)\s*=\s*\[\s*'(?<id>[^']+)'\s*\];\s*[\w.$]+\(\s*(?<arg_list>\w+)\s*,\s*(?<arg_data>\w+)\s*\)",
    )
    .expect("SCRIPT_IMAGE_BINDING regex")
});
