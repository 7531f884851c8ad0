//! Error types for the Caret lexer.

use thiserror::Error;

/// A fatal lexical error.
///
/// Scanning cannot continue past one of these: the token stream ends at
/// the point the error was reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The character does not start any token of the grammar.
    #[error("unknown character -> {ch:?} at {line}:{column}")]
    UnknownCharacter {
        /// The offending character.
        ch: char,
        /// Line of the character (1-based).
        line: u32,
        /// Column of the character (1-based).
        column: u32,
    },

    /// A string literal hit a carriage return, newline or tab before its
    /// closing `^`.
    #[error("illegal character in string -> {ch:?} at {line}:{column}")]
    UnterminatedOrIllegalString {
        /// The carriage return, newline or tab found inside the literal.
        ch: char,
        /// Line of the character (1-based).
        line: u32,
        /// Column of the character (1-based).
        column: u32,
    },
}

impl LexError {
    /// Returns the offending character.
    pub fn character(&self) -> char {
        match self {
            LexError::UnknownCharacter { ch, .. }
            | LexError::UnterminatedOrIllegalString { ch, .. } => *ch,
        }
    }

    /// Returns the 1-based line of the offending character.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnknownCharacter { line, .. }
            | LexError::UnterminatedOrIllegalString { line, .. } => *line,
        }
    }

    /// Returns the 1-based column of the offending character.
    pub fn column(&self) -> u32 {
        match self {
            LexError::UnknownCharacter { column, .. }
            | LexError::UnterminatedOrIllegalString { column, .. } => *column,
        }
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
