//! Custom error types for Kimberlynet
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for Kimberlynet operations
#[derive(Error, Debug)]
pub enum ListingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A data file is in the wrong format
    #[error("{file} is in the wrong format (line {line}): {message}")]
    Format {
        file: String,
        line: usize,
        message: String,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The console input stream ended while a prompt was waiting
    #[error("Input closed: {0}")]
    Input(String),
}

impl ListingError {
    /// Create a format error for a line of a data file
    pub fn format(file: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            file: file.display().to_string(),
            line,
            message: message.into(),
        }
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ListingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Kimberlynet operations
pub type ListingResult<T> = Result<T, ListingError>;
