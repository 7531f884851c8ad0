//! Command modules for the caret CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod demo;
pub mod lex;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use common::OutputFormat;
pub use demo::run_demo;
pub use lex::{run_lex, LexArgs};
