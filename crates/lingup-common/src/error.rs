//! Error types and utilities for lingup

use thiserror::Error;

/// Result type alias for lingup operations
pub type Result<T> = std::result::Result<T, LingupError>;

/// Main error type for lingup operations
#[derive(Error, Debug)]
pub enum LingupError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Translation catalog related errors
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Filesystem scanning errors
    #[error("Scan error: {message}")]
    Scan {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LingupError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new catalog error with source
    pub fn catalog_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Catalog {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new scan error
    pub fn scan(msg: impl Into<String>) -> Self {
        Self::Scan {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new scan error with source
    pub fn scan_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Scan {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = LingupError::new("test message");
        assert!(error.to_string().contains("test message"));

        let catalog_error = LingupError::catalog("bad catalog");
        assert!(catalog_error.to_string().contains("Catalog error"));
        assert!(catalog_error.to_string().contains("bad catalog"));

        let scan_error = LingupError::scan("walk failed");
        assert!(scan_error.to_string().contains("Scan error"));

        let config_error = LingupError::config("missing directory");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("missing directory"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped = LingupError::with_source("Failed to read file", io_error);

        assert!(wrapped.to_string().contains("Failed to read file"));
        assert!(wrapped.source().is_some());

        let catalog = LingupError::catalog_with_source(
            "Catalog load failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(catalog.to_string().contains("Catalog error"));
        assert!(catalog.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lingup_error: LingupError = io_error.into();

        assert!(lingup_error.to_string().contains("I/O error"));
        assert!(lingup_error.source().is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(LingupError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
