//! Configuration options for carousel extraction.
//!
//! The `Options` struct holds the constants the extraction engine depends on
//! (site origin, inline image prefix) along with the file-handling settings
//! used by [`extract_file`](crate::extract_file).

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

/// Canonical origin prepended to root-relative carousel links.
pub const DEFAULT_BASE_URL: &str = "https://www.google.com";

/// Prefix of the inline image payloads injected by script blocks.
pub const DEFAULT_IMAGE_DATA_PREFIX: &str = "data:image/jpeg;base64";

/// Suffix appended to the input's base name for the JSON artifact.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-actual";

/// Configuration options for carousel extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_kc_carousel::Options;
///
/// let options = Options {
///     write_output: false,
///     ..Options::default()
/// };
/// assert_eq!(options.base_url, "https://www.google.com");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Origin prepended to links that do not already start with it.
    ///
    /// Default: `"https://www.google.com"`
    pub base_url: String,

    /// Literal prefix an injected image payload must start with. The pattern
    /// expects this prefix to be followed by a comma and the encoded data.
    ///
    /// Default: `"data:image/jpeg;base64"`
    pub image_data_prefix: String,

    /// Suffix added to the input's base name when naming the JSON artifact.
    ///
    /// Default: `"-actual"` (so `dog-breeds.html` becomes `dog-breeds-actual.json`)
    pub output_suffix: String,

    /// Directory that relative input paths resolve against.
    ///
    /// Default: `None` (resolve against the working directory)
    pub files_dir: Option<PathBuf>,

    /// Write the JSON artifact next to the input in `extract_file`.
    ///
    /// Default: `true`
    pub write_output: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_data_prefix: DEFAULT_IMAGE_DATA_PREFIX.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            files_dir: None,
            write_output: true,
        }
    }
}

impl Options {
    /// Check that the configured constants are usable.
    ///
    /// `base_url` must be an absolute http(s) URL with a host, and
    /// `image_data_prefix` must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidOption(format!("base_url '{}': {e}", self.base_url)))?;

        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            return Err(Error::InvalidOption(format!(
                "base_url '{}' must be an absolute http(s) origin",
                self.base_url
            )));
        }

        if self.image_data_prefix.is_empty() {
            return Err(Error::InvalidOption(
                "image_data_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether the image prefix is the built-in one, so the precompiled
    /// script pattern can be reused.
    pub(crate) fn uses_default_image_prefix(&self) -> bool {
        self.image_data_prefix == DEFAULT_IMAGE_DATA_PREFIX
    }
}
