//! # rs-kc-carousel
//!
//! Extracts knowledge carousel entries from saved search result pages.
//!
//! A knowledge carousel is the horizontal strip of cards (paintings, dog
//! breeds, albums, cast members) shown above the results. Each card becomes a
//! [`CarouselResult`] with its name, optional extensions (usually a year),
//! absolute link, and image. Images are either a `data-src` URL on the
//! thumbnail or a base64 payload injected by a script block elsewhere in the
//! page.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_kc_carousel::extract;
//!
//! let html = r#"<div data-attrid="kc:/biology/domesticated_animal:breeds">
//!   <a href="/search?q=labrador"><div><div>Labrador</div><div></div></div>
//!   <img id="dimg_1"></a></div>
//! <script>(function(){var s='data:image/jpeg;base64,/9j\x2F';var ii=['dimg_1'];_setImagesSrc(ii,s);})();</script>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.results[0].name, "Labrador");
//! assert_eq!(result.results[0].link, "https://www.google.com/search?q=labrador");
//! assert_eq!(result.results[0].image, "data:image/jpeg;base64,/9j/");
//! assert!(result.results[0].extensions.is_none());
//! # Ok::<(), rs_kc_carousel::Error>(())
//! ```

use std::path::Path;

use tracing::info;

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Compiled regex patterns and CSS selectors.
pub mod patterns;

/// `\xNN` escape decoding.
pub mod escape;

/// Script-injected image payload index.
pub mod payload;

/// Carousel candidate selection.
pub mod selector;

/// Per-candidate record assembly and normalization.
pub mod record;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Input resolution, byte reading and artifact writing.
pub mod storage;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_BASE_URL, DEFAULT_IMAGE_DATA_PREFIX, DEFAULT_OUTPUT_SUFFIX};
pub use result::{CarouselResult, ExtractResult};

/// Extracts carousel entries from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_kc_carousel::extract;
///
/// let result = extract("<html><body><p>No carousel here</p></body></html>")?;
/// assert!(result.results.is_empty());
/// # Ok::<(), rs_kc_carousel::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts carousel entries from an HTML document with custom options.
///
/// Fails with [`Error::MissingImageData`] if any selected thumbnail has no
/// resolvable image; no partial result is returned in that case.
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_carousel(html, options)
}

/// Extracts carousel entries from raw snapshot bytes, detecting the
/// character encoding first.
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// [`extract_bytes`] with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Extracts carousel entries from a saved snapshot on disk.
///
/// Relative paths resolve against `options.files_dir` when set. When
/// `options.write_output` is true the records are also written as pretty
/// JSON next to the input (`dog-breeds.html` -> `dog-breeds-actual.json`).
///
/// # Errors
///
/// [`Error::DocumentNotFound`] when the snapshot does not exist, plus any
/// extraction or I/O error. Nothing is written when extraction fails.
pub fn extract_file(path: &Path, options: &Options) -> Result<ExtractResult> {
    let input = storage::resolve_input(path, options.files_dir.as_deref())?;
    let bytes = storage::read_bytes(&input)?;
    let result = extract_bytes_with_options(&bytes, options)?;

    if options.write_output {
        let output = storage::output_path_for(&input, &options.output_suffix);
        storage::write_text(&output, &result.to_json_pretty()?)?;
        info!(
            input = %input.display(),
            output = %output.display(),
            records = result.len(),
            "wrote carousel results"
        );
    }

    Ok(result)
}
