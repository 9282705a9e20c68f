//! Error types for dataset ingestion.

use std::path::PathBuf;

use tabstat_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading or cleaning a dataset.
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
    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header record.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Cleaning Errors ===
    /// A clean rule names a column that is not in the header.
    #[error("clean rule '{rule}' refers to unknown column '{column}'")]
    UnknownColumn { rule: &'static str, column: String },

    /// A clean rule cannot be applied as written.
    #[error("invalid clean rule '{rule}': {reason}")]
    InvalidCleanRule { rule: &'static str, reason: String },

    /// The loaded or cleaned rows do not form a valid dataset.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
