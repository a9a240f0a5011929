//! Error types and handling infrastructure for prizeline.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary layers `anyhow` on top for context at the boundary.
//!
//! Only loading, configuration and the terminal can fail. The record filter, the
//! category aggregator and the highlighter are total functions and never return
//! these errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for prizeline operations.
#[derive(Error, Debug)]
pub enum PrizelineError {
    /// File system related errors while reading the dataset or config
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset resource is missing
    #[error("Dataset not found: {path}")]
    DatasetNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Dataset file exists but holds no bytes
    #[error("Dataset file is empty: {path}")]
    EmptyDataset { path: PathBuf },

    /// Dataset document could not be decoded
    #[error("Malformed dataset: {message}")]
    MalformedDataset {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Gzip decompression failed
    #[error("Compression error: {message}")]
    CompressionError { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for prizeline operations.
pub type Result<T> = std::result::Result<T, PrizelineError>;

impl PrizelineError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a MalformedDataset error from a decoder failure
    pub fn malformed(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedDataset {
            message: message.into(),
            source,
        }
    }

    /// Create a CompressionError with a descriptive message
    pub fn compression(message: impl Into<String>) -> Self {
        Self::CompressionError {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether this error came from resolving the dataset.
    ///
    /// The presentation layer degrades to an empty dataset on these and keeps running.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::FileError { .. }
                | Self::DatasetNotFound { .. }
                | Self::NotAFile { .. }
                | Self::EmptyDataset { .. }
                | Self::MalformedDataset { .. }
                | Self::CompressionError { .. }
        )
    }
}

impl From<std::io::Error> for PrizelineError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

impl From<serde_json::Error> for PrizelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(format!("line {}, column {}", err.line(), err.column()), err)
    }
}
