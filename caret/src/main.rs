//! Caret CLI - Command-line driver for the Caret lexer.
//!
//! This is the main entry point for the caret CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_demo, run_lex, CheckArgs, LexArgs, OutputFormat};
use config::Config;
use error::{CaretError, Result};

/// Caret - Tokenize Caret source programs
///
/// Caret scans source text into tokens, checks files for lexical errors,
/// and prints the token stream of a built-in demo input.
#[derive(Parser, Debug)]
#[command(name = "caret")]
#[command(author = "Caret Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Caret source programs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CARET_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CARET_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CARET_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the caret CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source
    ///
    /// Scans a file, an inline expression or standard input and prints
    /// one token per line (or a JSON array) up to end of input.
    Lex(LexCommand),

    /// Check files for lexical errors
    ///
    /// Scans every file to end of input and reports the first error in
    /// each one.
    Check(CheckCommand),

    /// Print the tokens of the built-in demo input
    Demo(DemoCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file (`-` or omitted: standard input)
    file: Option<PathBuf>,

    /// Source text to scan instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Print the terminal EOF token
    #[arg(long)]
    show_eof: bool,

    /// Omit COMMENT tokens from the output
    #[arg(long)]
    hide_comments: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the demo subcommand.
#[derive(Parser, Debug)]
struct DemoCommand {
    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Main entry point for the caret CLI.
///
/// Runs the selected command and turns any error into a diagnostic on
/// stderr and a non-zero exit status.
fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parse arguments, load configuration, initialize logging and dispatch.
fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Initialize logging
    init_logging(verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token output on stdout stays machine-readable.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CaretError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Resolve the output format: the flag wins over the configuration.
fn resolve_format(flag: Option<String>, config: &Config) -> Result<OutputFormat> {
    flag.as_deref()
        .unwrap_or(config.output.format.as_str())
        .parse()
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Check(args) => run_check(CheckArgs {
            files: args.files,
            verbose,
        }),
        Commands::Demo(args) => run_demo(resolve_format(args.format, &config)?, verbose),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        input: args.file,
        expr: args.expr,
        format: resolve_format(args.format, &config)?,
        show_eof: args.show_eof || config.output.show_eof,
        show_comments: !args.hide_comments && config.output.show_comments,
    };
    run_lex(lex_args)
}
