//! Error types and error handling for sitedex.
//!
//! This module defines the error types used throughout the application.
//! The key distinction is fatal vs recoverable: unreadable input roots and
//! index open/commit failures abort the run, while per-document extraction
//! or submission failures are caught at document granularity and the batch
//! continues.

use thiserror::Error;

/// Result type alias for sitedex operations
pub type Result<T> = std::result::Result<T, SitedexError>;

/// Main error type for sitedex
#[derive(Error, Debug)]
pub enum SitedexError {
    #[error("Invalid docs path: {0}")]
    InvalidPath(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SitedexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error is recoverable at document granularity
    ///
    /// Recoverable errors are logged and the offending document is
    /// skipped; the ingest run continues. Everything else is fatal
    /// to the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SitedexError::ExtractionFailed(_))
    }

    /// Check if this is an invalid-input error (bad path or config)
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            SitedexError::InvalidPath(_) | SitedexError::ConfigError(_)
        )
    }
}
