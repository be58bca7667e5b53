//! # Quote Aggregator
//!
//! Sums priced lines into quote-level totals.
//!
//! ## Order of Operations
//! ```text
//! subtotal_before_discount = Σ line_total_before_discount
//!            │
//!            ▼
//! total_discount_amount    = 0                          if rate <= 0
//!                          = Σ line.discount_amount(rate) otherwise
//!            │
//!            ▼
//! subtotal_after_discount  = subtotal − discount        (not clamped)
//!            │
//!            ▼
//! tax_amount               = subtotal_after_discount × tax_rate / 100
//!            │
//!            ▼
//! grand_total              = subtotal_after_discount + tax_amount
//! ```
//!
//! Discount always comes before tax. Nothing is cached: every call walks the
//! items again.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::LineBreakdown;
use crate::money::Money;
use crate::types::Quote;

/// The five derived quote totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub subtotal_before_discount: Money,
    pub total_discount: Money,
    pub subtotal_after_discount: Money,
    pub tax_amount: Money,
    pub grand_total: Money,
}

impl Quote {
    /// Σ line totals, zero for an empty quote.
    pub fn subtotal_before_discount(&self) -> Money {
        self.items
            .iter()
            .map(|item| item.line_total_before_discount())
            .sum()
    }

    /// Σ per-line discounts at the quote's global rate.
    pub fn total_discount_amount(&self) -> Money {
        let rate = self.global_discount_rate;
        if rate.points() <= 0.0 {
            return Money::zero();
        }
        self.items
            .iter()
            .map(|item| item.discount_amount(rate))
            .sum()
    }

    pub fn subtotal_after_discount(&self) -> Money {
        self.subtotal_before_discount() - self.total_discount_amount()
    }

    /// Tax on the discounted subtotal.
    pub fn tax_amount(&self) -> Money {
        self.subtotal_after_discount().percentage(self.tax_rate)
    }

    pub fn grand_total(&self) -> Money {
        self.subtotal_after_discount() + self.tax_amount()
    }

    /// All five totals from a single pass over the formulas.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::{Money, Percent, Product, Quote, QuoteItem};
    ///
    /// let product = Product::new("Consulting", "hour", Money::from_amount(100.0), "Services");
    /// let mut quote = Quote::new("Ada", "Analytical Ltd").with_tax_rate(Percent::from_points(8.0));
    /// quote.add_item(QuoteItem::from_product(&product, 1));
    ///
    /// let totals = quote.totals();
    /// assert!((totals.tax_amount.amount() - 8.0).abs() < 1e-9);
    /// assert!((totals.grand_total.amount() - 108.0).abs() < 1e-9);
    /// ```
    pub fn totals(&self) -> QuoteTotals {
        let subtotal_before_discount = self.subtotal_before_discount();
        let total_discount = self.total_discount_amount();
        let subtotal_after_discount = subtotal_before_discount - total_discount;
        let tax_amount = subtotal_after_discount.percentage(self.tax_rate);

        QuoteTotals {
            subtotal_before_discount,
            total_discount,
            subtotal_after_discount,
            tax_amount,
            grand_total: subtotal_after_discount + tax_amount,
        }
    }

    /// One breakdown per line at the quote's global discount rate.
    pub fn line_breakdowns(&self) -> Vec<LineBreakdown> {
        self.items
            .iter()
            .map(|item| item.breakdown(self.global_discount_rate))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
