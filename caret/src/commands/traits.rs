//! Command trait and common types for the caret CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to keep construction and execution uniform.

use crate::error::Result;

/// Standard command trait that all caret commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its report to standard output.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Command execution result with per-input counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult<T = ()> {
    /// The command output data.
    pub data: T,

    /// Number of inputs processed.
    pub items_processed: usize,

    /// Number of inputs that failed.
    pub items_failed: usize,
}

impl<T> CommandResult<T> {
    /// Create a new result carrying `data`.
    pub fn new(data: T) -> Self {
        Self {
            data,
            items_processed: 0,
            items_failed: 0,
        }
    }

    /// Returns true if no input failed.
    pub fn success(&self) -> bool {
        self.items_failed == 0
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self
    }
}
