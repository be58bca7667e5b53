//! # QuoteForge CLI
//!
//! Command-line front end for the pricing engine. Reads a quote document
//! (JSON, camelCase) and prints totals, per-line breakdowns or a validation
//! report.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           quoteforge (bin)                              │
//! │                                                                         │
//! │  main.rs ────► tracing, parse args, exit code                          │
//! │                                                                         │
//! │  lib.rs ─────► Cli / Command, config layering, dispatch                 │
//! │                                                                         │
//! │  commands/ ──► totals, lines, validate                                  │
//! │                                                                         │
//! │  render.rs ──► text tables and JSON                                     │
//! └─────────────────────────────────┬───────────────────────────────────────┘
//!                                   ▼
//!                          quoteforge-core (pure)
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// Price quotes from the command line.
#[derive(Debug, Parser)]
#[command(name = "quoteforge", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (overrides QUOTEFORGE_FORMAT and the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Validate the quote before pricing it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print subtotal, discount, tax and grand total
    Totals {
        /// Quote document (JSON)
        file: PathBuf,
    },
    /// Print the breakdown of every line
    Lines {
        /// Quote document (JSON)
        file: PathBuf,
    },
    /// Check a quote document against the validation rules
    Validate {
        /// Quote document (JSON)
        file: PathBuf,
    },
}

/// Resolves configuration and runs the selected command.
///
/// Returns the text to print on stdout.
pub fn run(cli: Cli) -> Result<String, CliError> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    apply_flags(&mut config, cli.format, cli.strict);
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Totals { file } => commands::totals::run(&file, &config),
        Command::Lines { file } => commands::lines::run(&file, &config),
        Command::Validate { file } => commands::validate::run(&file, &config),
    }
}

/// Writes a command's result and picks the exit code.
///
/// Output goes to `stdout`. An error is reported once, on `stderr`.
pub fn finish<O, E>(result: Result<String, CliError>, stdout: &mut O, stderr: &mut E) -> ExitCode
where
    O: Write,
    E: Write,
{
    match result {
        Ok(output) => match stdout.write_all(output.as_bytes()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        Err(e) => {
            let _ = writeln!(stderr, "error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Flags win over every other source. `--strict` can only switch it on.
fn apply_flags(config: &mut CliConfig, format: Option<OutputFormat>, strict: bool) {
    if let Some(format) = format {
        config.format = format;
    }
    if strict {
        config.strict = true;
    }
}
