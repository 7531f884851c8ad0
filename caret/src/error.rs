//! Error handling module for the caret CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use caret_lex::LexError;
use thiserror::Error;

/// Main error type for the caret CLI application.
#[derive(Error, Debug)]
pub enum CaretError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading an input fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when an argument or configuration value is invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lexical error in one of the inputs.
    #[error("Lexing error in {origin}: {source}")]
    Lex {
        /// Name of the input that failed (file path, `<expr>` or `<stdin>`).
        origin: String,
        /// The error reported by the lexer.
        source: LexError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CaretError.
pub type Result<T> = std::result::Result<T, CaretError>;
