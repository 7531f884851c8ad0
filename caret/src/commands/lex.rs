//! Lex command implementation.
//!
//! Drives the lexer over one source until EOF and prints the tokens.

use std::io::Write;
use std::path::PathBuf;

use caret_lex::{Lexer, Token, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{write_tokens, OutputFormat, Source};
use crate::commands::traits::{Command, CommandResult};
use crate::error::{CaretError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source file; `-` or `None` reads standard input.
    pub input: Option<PathBuf>,
    /// Source text given on the command line. Takes precedence over `input`.
    pub expr: Option<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Print the terminal EOF token.
    pub show_eof: bool,
    /// Print COMMENT marker tokens.
    pub show_comments: bool,
}

impl Default for LexArgs {
    fn default() -> Self {
        Self {
            verbose: false,
            input: None,
            expr: None,
            format: OutputFormat::Text,
            show_eof: false,
            show_comments: true,
        }
    }
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Resolve the source to scan from the arguments.
    fn read_source(&self) -> Result<Source> {
        if let Some(expr) = &self.args.expr {
            return Ok(Source::from_expr(expr));
        }

        match &self.args.input {
            Some(path) if path.as_os_str() != "-" => Source::from_file(path),
            _ => Source::from_reader(std::io::stdin().lock()),
        }
    }

    /// Scan `source` and write the tokens to `out`.
    ///
    /// Tokens scanned before a lexical error are still written; the error
    /// is returned afterwards.
    ///
    /// # Returns
    /// * `Result<usize>` - The number of tokens written
    pub fn run_with<W: Write>(&self, source: &Source, out: &mut W) -> Result<usize> {
        let mut lexer = Lexer::new(&source.text);
        let mut tokens: Vec<Token> = Vec::new();

        let failure = loop {
            match lexer.next_token() {
                Ok(token) if token.is_eof() => {
                    if self.args.show_eof {
                        tokens.push(token);
                    }
                    break None;
                }
                Ok(token) if token.kind() == TokenKind::Comment && !self.args.show_comments => {}
                Ok(token) => tokens.push(token),
                Err(error) => break Some(error),
            }
        };

        write_tokens(out, &tokens, self.args.format)?;

        if let Some(error) = failure {
            return Err(CaretError::Lex {
                origin: source.origin.clone(),
                source: error,
            });
        }

        debug!(origin = %source.origin, tokens = tokens.len(), "lexed source");
        Ok(tokens.len())
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = CommandResult<usize>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let source = self.read_source()?;
        if self.args.verbose {
            info!(command = Self::name(), origin = %source.origin, "scanning");
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let count = self.run_with(&source, &mut out)?;
        out.flush()?;

        Ok(CommandResult::new(count).with_items_processed(1))
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<()> {
    LexCommand::new(args).execute().map(|_| ())
}
