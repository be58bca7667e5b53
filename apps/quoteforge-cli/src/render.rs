//! # Output Rendering
//!
//! Turns engine values into stdout text. Rounding happens here and only
//! here, through [`Money::format_with`].

use std::fmt::Write;

use quoteforge_core::{LineBreakdown, Money, QuoteTotals};
use serde::Serialize;

use crate::config::CliConfig;
use crate::error::CliError;

const LABEL_WIDTH: usize = 18;
const AMOUNT_WIDTH: usize = 16;

fn money(config: &CliConfig, amount: Money) -> String {
    amount.format_with(&config.currency_symbol, config.currency_decimals)
}

fn row(out: &mut String, config: &CliConfig, label: &str, amount: Money) {
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        label,
        money(config, amount)
    );
}

/// Pretty JSON of any engine value.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// The five totals as an aligned table.
///
/// ```text
/// Subtotal                   $220.00
/// Discount                   -$22.00
/// After discount             $198.00
/// Tax                          $0.00
/// Grand total                $198.00
/// ```
pub fn totals_text(totals: &QuoteTotals, config: &CliConfig) -> String {
    let mut out = String::new();
    row(&mut out, config, "Subtotal", totals.subtotal_before_discount);
    row(&mut out, config, "Discount", -totals.total_discount);
    row(&mut out, config, "After discount", totals.subtotal_after_discount);
    row(&mut out, config, "Tax", totals.tax_amount);
    row(&mut out, config, "Grand total", totals.grand_total);
    out
}

/// One block per line: header, base cost, each adjustment, discount, total.
pub fn lines_text(lines: &[LineBreakdown], config: &CliConfig) -> String {
    let mut out = String::new();

    for (index, line) in lines.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({} {} × {})",
            index + 1,
            line.product_name,
            line.quantity,
            line.unit,
            money(config, line.unit_price)
        );
        row(&mut out, config, "   base", line.base_total);

        for adjustment in &line.adjustments {
            let label = format!(
                "   {} ×{}{}",
                adjustment.name,
                adjustment.effective_quantity,
                if adjustment.is_discountable { "" } else { " *" }
            );
            row(&mut out, config, &label, adjustment.amount);
        }

        if !line.discount_amount.is_zero() {
            row(&mut out, config, "   discount", -line.discount_amount);
        }
        row(&mut out, config, "   line total", line.line_total_after_discount);
    }

    if lines
        .iter()
        .any(|line| line.adjustments.iter().any(|a| !a.is_discountable))
    {
        out.push_str("* not discountable\n");
    }

    out
}
