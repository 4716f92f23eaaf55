//! Error handling module for the ravt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the ravt CLI application.
#[derive(Error, Debug)]
pub enum RavtError {
    /// Error when configuration is missing, unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading or writing a file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using RavtError.
pub type Result<T> = std::result::Result<T, RavtError>;
