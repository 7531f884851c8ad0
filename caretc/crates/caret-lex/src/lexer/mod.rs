//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Lexer struct, dispatch and iteration
//! - `identifier` - Identifier and keyword lexing
//! - `operator` - Operator lexing with one character of lookahead
//! - `string` - Caret-delimited string literals
//! - `comment` - Whitespace and line comment skipping

mod comment;
mod core;
mod identifier;
mod operator;
mod string;

pub use self::core::Lexer;
