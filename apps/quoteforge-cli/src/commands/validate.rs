//! # Validate Command
//!
//! Runs the validation rules over a quote document and reports notes for
//! input the engine tolerates but an editor may want to tidy up:
//! - partial quantities for multipliers no longer on the line (ignored)
//! - partial quantities above the line quantity (clamped)

use std::path::Path;

use quoteforge_core::validation::validate_quote;
use quoteforge_core::Quote;
use serde_json::json;
use tracing::{info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::render;

pub fn run(path: &Path, config: &CliConfig) -> Result<String, CliError> {
    let quote = super::load_quote(path)?;
    output(&quote, config)
}

pub fn output(quote: &Quote, config: &CliConfig) -> Result<String, CliError> {
    validate_quote(quote)?;

    let notes = notes(quote);
    for note in &notes {
        warn!(quote_id = %quote.id, "{note}");
    }
    info!(quote_id = %quote.id, notes = notes.len(), "Quote is valid");

    match config.format {
        OutputFormat::Text => {
            let mut out = format!("Quote {} is valid ({} items)\n", quote.id, quote.items.len());
            for note in &notes {
                out.push_str("  note: ");
                out.push_str(note);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => render::json(&json!({
            "quoteId": quote.id,
            "valid": true,
            "items": quote.items.len(),
            "notes": notes,
        })),
    }
}

/// Tolerated oddities, one message per partial-quantity entry.
pub fn notes(quote: &Quote) -> Vec<String> {
    let mut notes = Vec::new();

    for (index, item) in quote.items.iter().enumerate() {
        let line = index + 1;
        for (multiplier_id, &partial) in &item.partial_multiplier_quantities {
            match item.applied_multiplier(multiplier_id) {
                None => notes.push(format!(
                    "line {line}: partial quantity for '{multiplier_id}' has no applied multiplier and is ignored"
                )),
                Some(applied) if partial > item.quantity => notes.push(format!(
                    "line {line}: '{}' covers {partial} units but the line has {}; {} are charged",
                    applied.name, item.quantity, item.quantity
                )),
                Some(_) => {}
            }
        }
    }

    notes
}
