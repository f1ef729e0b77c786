//! Error types for rs-kc-carousel.
//!
//! Fatal conditions abort a whole extraction. Per-entry anomalies (a candidate
//! with no enclosing link) are not errors; they end up in
//! [`ExtractResult::warnings`](crate::ExtractResult::warnings).

use std::path::PathBuf;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document could not be located.
    #[error("File {} not found", .0.display())]
    DocumentNotFound(PathBuf),

    /// A selected carousel image has neither a `data-src` attribute nor a
    /// script-injected payload.
    #[error("No image data found for carousel image '{image_id}'")]
    MissingImageData {
        /// The `id` attribute of the offending image (empty if it had none).
        image_id: String,
    },

    /// Configuration rejected by [`Options::validate`](crate::Options::validate).
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Reading the document or writing the result artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the results to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
