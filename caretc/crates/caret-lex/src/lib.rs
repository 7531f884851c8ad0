//! caret-lex - Lexical Analyzer for the Caret Scripting Language
//!
//! This crate turns Caret source text into a stream of tokens for a
//! downstream parser. It is a hand-written, single-pass scanner with one
//! character of lookahead.
//!
//! # Example Usage
//!
//! ```
//! use caret_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("IF a >= b THEN\n");
//!
//! // Get tokens one at a time until EOF
//! loop {
//!     let token = lexer.next_token().expect("valid input");
//!     if token.kind() == TokenKind::Eof {
//!         break;
//!     }
//!     println!("{}", token);
//! }
//!
//! // Or collect everything before EOF
//! let tokens = caret_lex::tokenize("PRINT ^hi^").unwrap();
//! assert_eq!(tokens.len(), 2);
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - ASCII identifier character classes
//! - [`token`] - Token kinds, tokens and the keyword table
//! - [`cursor`] - Forward-only cursor over the source buffer
//! - [`lexer`] - The scanner
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `LABEL`, `GOTO`, `PRINT`, `INPUT`, `LET`, `IF`, `THEN`, `ENDIF`, `WHILE`,
//! `REPEAT`, `ENDWHILE`. Matching is exact and case-sensitive.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z][a-zA-Z0-9]*`
//!
//! ## Strings
//!
//! `^text^`, on a single line and without tabs. The token text excludes the
//! delimiters.
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Assignment**: `=`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//!
//! ## Special
//!
//! - **Newline**: line breaks are significant
//! - **Comment**: `//` marker; the rest of the line is discarded
//! - **EOF**: end of input, returned again on every later call

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use classify::{is_ident_continue, is_ident_start};
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind, KEYWORDS};

/// Scans `source` completely and returns every token before EOF.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered; no tokens are returned in
/// that case.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).collect()
}
