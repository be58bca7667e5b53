//! # Totals Command
//!
//! Prints subtotal, discount, discounted subtotal, tax and grand total.

use std::path::Path;

use quoteforge_core::{compute_quote_totals, Quote};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::render;

pub fn run(path: &Path, config: &CliConfig) -> Result<String, CliError> {
    let quote = super::prepare(path, config)?;
    output(&quote, config)
}

pub fn output(quote: &Quote, config: &CliConfig) -> Result<String, CliError> {
    let totals = compute_quote_totals(quote);

    info!(
        quote_id = %quote.id,
        items = quote.items.len(),
        grand_total = totals.grand_total.amount(),
        "Quote priced"
    );

    match config.format {
        OutputFormat::Text => Ok(render::totals_text(&totals, config)),
        OutputFormat::Json => render::json(&totals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoteforge_core::{Money, Percent, Product, QuoteItem};

    fn quote() -> Quote {
        let product = Product::new("Audit", "job", Money::from_amount(100.0), "Services");
        let mut quote = Quote::new("Grace", "").with_tax_rate(Percent::from_points(8.0));
        quote.add_item(QuoteItem::from_product(&product, 1));
        quote
    }

    #[test]
    fn test_text_output() {
        let out = output(&quote(), &CliConfig::default()).unwrap();
        assert!(out.contains("$108.00"));
        assert!(out.contains("$8.00"));
    }

    #[test]
    fn test_json_output_is_unrounded_engine_value() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let out = output(&quote(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let grand = value["grandTotal"].as_f64().unwrap();
        assert!((grand - 108.0).abs() < 1e-9);
    }
}
