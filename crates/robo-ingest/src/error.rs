//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

use robo_model::{Field, ModelError};

/// Errors that can occur while loading a catalog.
///
/// Only structural problems are errors. Malformed cell values degrade to
/// absent values and never surface here.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the input.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// The source has no header row after skipping title rows.
    #[error("CSV source is empty: {origin}")]
    EmptyCsv { origin: String },

    // === Schema Errors ===
    /// A required column could not be located; the catalog cannot load.
    #[error("required column '{field}' not found (headers: {})", headers.join(", "))]
    MissingRequiredColumn { field: Field, headers: Vec<String> },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
