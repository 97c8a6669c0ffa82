//! Error types for metadata scanning

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning metadata files
#[derive(Error, Debug)]
pub enum ScanError {
    /// I/O error reading a metadata file
    #[error("Failed to read metadata file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error
    #[error("Failed to walk metadata directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Malformed JSON in a metadata file
    #[error("Malformed metadata in {path}: {source}")]
    Json {
        /// File that failed to parse
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ScanError> for lingup_common::LingupError {
    fn from(err: ScanError) -> Self {
        lingup_common::LingupError::scan_with_source("metadata scan failed", err)
    }
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
