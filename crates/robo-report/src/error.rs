//! Error types for report rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a report from being produced.
///
/// Missing record values and image failures are not errors: they render as
/// placeholders.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The PDF document could not be serialized.
    #[error("failed to write PDF: {0}")]
    Pdf(String),

    /// The image client could not be built.
    #[error(transparent)]
    Image(#[from] crate::image::ImageError),

    /// Failed to write the report file.
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
