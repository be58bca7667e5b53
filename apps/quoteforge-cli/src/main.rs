//! # QuoteForge Entry Point
//!
//! ## Exit Codes
//! - `0` - command succeeded, output on stdout
//! - `1` - unreadable input, bad config or a failed validation (message on stderr)

use std::io;
use std::process::ExitCode;

use clap::Parser;
use quoteforge_cli::{finish, run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    finish(run(cli), &mut io::stdout(), &mut io::stderr())
}

/// Initializes the tracing subscriber. Logs go to stderr so stdout stays
/// clean for piping.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=quoteforge_core=trace` - Show skipped multiplier entries
/// - Default: INFO
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
