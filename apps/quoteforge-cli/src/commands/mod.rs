//! # Commands
//!
//! One module per subcommand. Each exposes `run(path, config)` for the
//! binary and a file-free `output(quote, config)` the tests drive directly.
//!
//! ```text
//! quoteforge totals   <FILE>  ──► totals.rs   ──► compute_quote_totals
//! quoteforge lines    <FILE>  ──► lines.rs    ──► Quote::line_breakdowns
//! quoteforge validate <FILE>  ──► validate.rs ──► validation::validate_quote
//! ```

pub mod lines;
pub mod totals;
pub mod validate;

use std::fs;
use std::path::Path;

use quoteforge_core::validation::validate_quote;
use quoteforge_core::Quote;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliError;

/// Reads and parses a quote document.
pub fn load_quote(path: &Path) -> Result<Quote, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let quote: Quote = serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        quote_id = %quote.id,
        items = quote.items.len(),
        "Quote document loaded"
    );
    Ok(quote)
}

/// Loads a quote and, in strict mode, rejects it on the first violation.
fn prepare(path: &Path, config: &CliConfig) -> Result<Quote, CliError> {
    let quote = load_quote(path)?;
    if config.strict {
        validate_quote(&quote)?;
        debug!(quote_id = %quote.id, "Strict validation passed");
    }
    Ok(quote)
}
