//! Demo command implementation.
//!
//! Lexes a fixed sample that exercises the two-character operators and a
//! comment, printing every token up to EOF.

use crate::commands::common::OutputFormat;
use crate::commands::lex::{run_lex, LexArgs};
use crate::error::Result;

/// Built-in sample input.
pub const DEMO_SOURCE: &str = "==!=>>// This is a comment!  \n  =<=<";

/// Run the demo command.
pub fn run_demo(format: OutputFormat, verbose: bool) -> Result<()> {
    run_lex(LexArgs {
        verbose,
        expr: Some(DEMO_SOURCE.to_string()),
        format,
        show_eof: true,
        ..LexArgs::default()
    })
}
