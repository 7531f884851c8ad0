//! Common types and utilities for caret commands.
//!
//! This module provides the output format, input reading and token
//! rendering shared by the command implementations.

use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use caret_lex::Token;

use crate::error::{CaretError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One token per line: `KIND<TAB>"text"`.
    #[default]
    Text,
    /// A JSON array of `{"kind": ..., "text": ...}` objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CaretError;

    /// Parse a format name (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CaretError::Validation(format!("Unknown format: {}", other))),
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Name used for sources given with `--expr`.
pub const EXPR_ORIGIN: &str = "<expr>";

/// Name used for sources read from standard input.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// A source text together with the name used to report errors in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// File path, [`EXPR_ORIGIN`] or [`STDIN_ORIGIN`].
    pub origin: String,
    /// The text to scan.
    pub text: String,
}

impl Source {
    /// Read a source file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CaretError::FileOperation(format!(
                "Input path is not a file: {}",
                path.display()
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            CaretError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(Self {
            origin: path.display().to_string(),
            text,
        })
    }

    /// Wrap text given on the command line.
    pub fn from_expr(expr: &str) -> Self {
        Self {
            origin: EXPR_ORIGIN.to_string(),
            text: expr.to_string(),
        }
    }

    /// Read all of `reader` as the source text.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self {
            origin: STDIN_ORIGIN.to_string(),
            text,
        })
    }
}

// ============================================================================
// Output
// ============================================================================

/// Render `tokens` to `out` in the requested format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}\t{:?}", token.kind(), token.text())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
