//! # Lines Command
//!
//! Prints every line's breakdown: base cost, each multiplier adjustment with
//! its effective (clamped) quantity, discount and line total.

use std::path::Path;

use quoteforge_core::Quote;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::render;

pub fn run(path: &Path, config: &CliConfig) -> Result<String, CliError> {
    let quote = super::prepare(path, config)?;
    output(&quote, config)
}

pub fn output(quote: &Quote, config: &CliConfig) -> Result<String, CliError> {
    let lines = quote.line_breakdowns();
    info!(quote_id = %quote.id, lines = lines.len(), "Line breakdown computed");

    match config.format {
        OutputFormat::Text => Ok(render::lines_text(&lines, config)),
        OutputFormat::Json => render::json(&lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoteforge_core::{Money, Multiplier, Percent, Product, QuoteItem};

    #[test]
    fn test_json_lists_clamped_quantity() {
        let product = Product::new("Countertop", "m", Money::from_amount(100.0), "Stone");
        let rush = Multiplier::percentage("Rush", 10.0);
        let mut item = QuoteItem::from_product(&product, 2);
        item.apply_multiplier(&rush, 9);

        let mut quote = Quote::new("Grace", "").with_global_discount_rate(Percent::from_points(10.0));
        quote.add_item(item);

        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let out = output(&quote, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["adjustments"][0]["effectiveQuantity"], 2);
        assert_eq!(value[0]["adjustments"][0]["type"], "PERCENTAGE");
        let after = value[0]["lineTotalAfterDiscount"].as_f64().unwrap();
        assert!((after - 198.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_quote_renders_nothing() {
        let out = output(&Quote::new("Grace", ""), &CliConfig::default()).unwrap();
        assert!(out.is_empty());
    }
}
