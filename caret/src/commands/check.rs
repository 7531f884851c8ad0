//! Check command implementation.
//!
//! Scans each input file to EOF and reports whether it lexes cleanly.

use std::io::Write;
use std::path::{Path, PathBuf};

use caret_lex::Lexer;
use tracing::{debug, info, warn};

use crate::commands::common::Source;
use crate::commands::traits::{Command, CommandResult};
use crate::error::{CaretError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Scan one file, returning the number of tokens before EOF.
    fn check_file(path: &Path) -> Result<usize> {
        let source = Source::from_file(path)?;
        let mut count = 0;
        for token in Lexer::new(&source.text) {
            token.map_err(|error| CaretError::Lex {
                origin: source.origin.clone(),
                source: error,
            })?;
            count += 1;
        }
        Ok(count)
    }

    /// Check every file and write one report line per file to `out`.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<CommandResult<usize>> {
        let mut total_tokens = 0;
        let mut failed = 0;

        for path in &self.args.files {
            match Self::check_file(path) {
                Ok(count) => {
                    debug!(file = %path.display(), tokens = count, "file ok");
                    writeln!(out, "ok {} ({} tokens)", path.display(), count)?;
                    total_tokens += count;
                }
                Err(e) => {
                    warn!(file = %path.display(), "check failed");
                    writeln!(out, "error {}", e)?;
                    failed += 1;
                }
            }
        }

        Ok(CommandResult::new(total_tokens)
            .with_items_processed(self.args.files.len())
            .with_items_failed(failed))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult<usize>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        if self.args.files.is_empty() {
            return Err(CaretError::Validation("No input files given".to_string()));
        }
        if self.args.verbose {
            info!(command = Self::name(), files = self.args.files.len(), "checking");
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let result = self.run_with(&mut out)?;
        out.flush()?;

        if !result.success() {
            return Err(CaretError::Validation(format!(
                "{} of {} file(s) failed",
                result.items_failed, result.items_processed
            )));
        }
        Ok(result)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    CheckCommand::new(args).execute().map(|_| ())
}
