//! Error types for catalog operations

use thiserror::Error;

/// Errors that can occur while loading, merging or writing a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error reading or writing a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML in a catalog file
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed XML attribute in a catalog file
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Structurally invalid TS document
    #[error("Invalid TS document: {message}")]
    Format {
        /// Description of the structural problem
        message: String,
    },
}

impl CatalogError {
    /// Create a new format error
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format {
            message: msg.into(),
        }
    }
}

impl From<CatalogError> for lingup_common::LingupError {
    fn from(err: CatalogError) -> Self {
        lingup_common::LingupError::catalog_with_source("catalog operation failed", err)
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
