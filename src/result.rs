//! Result types for extraction output.
//!
//! One [`CarouselResult`] per carousel entry, collected in document order
//! into an [`ExtractResult`] together with any non-fatal warnings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One carousel entry.
///
/// Serializes to `{"name", "extensions"?, "link", "image"}`. The
/// `extensions` key is omitted entirely when there is no secondary text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselResult {
    /// Display title of the entry.
    pub name: String,

    /// Secondary text such as a year. Never `Some` with an empty vector or
    /// with empty strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Absolute URL of the entry's search link.
    pub link: String,

    /// Image URL or decoded inline image payload.
    pub image: String,
}

/// Result of carousel extraction from one document.
#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    /// Extracted entries in document order.
    pub results: Vec<CarouselResult>,

    /// Warnings encountered during extraction.
    ///
    /// Candidates skipped because they had no enclosing link are reported
    /// here (and through `tracing`) instead of failing the run.
    pub warnings: Vec<String>,
}

impl ExtractResult {
    /// Pretty-printed JSON array of the records. Warnings are not included.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.results)?)
    }

    /// Number of extracted entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when the document held no carousel entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
