//! # Line Item Calculator
//!
//! Prices one [`QuoteItem`]: its total, the part of that total eligible for
//! the quote-wide discount, and the discount itself.
//!
//! ## Line Total
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base_total = base_price × quantity                                     │
//! │                                                                         │
//! │  for (multiplier_id, partial) in partial_multiplier_quantities:         │
//! │      partial <= 0                 → skip                                │
//! │      no applied snapshot for id   → skip (stale entry)                  │
//! │      effective = min(partial, quantity)                                 │
//! │      PERCENTAGE     → base_price × (applied_value / 100) × effective    │
//! │      FIXED_PER_UNIT → applied_value × effective                         │
//! │                                                                         │
//! │  multiplier_adjustment = Σ adjustments                                  │
//! │  line_total            = base_total + multiplier_adjustment             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each multiplier clamps against `quantity` on its own. Two multipliers may
//! together cover more units than the line has; nothing here reserves units.
//!
//! ## Discountable Amount
//! Same walk, but the base cost counts only when `is_base_item_discountable`
//! and each adjustment only when its snapshot `is_discountable`.
//!
//! Everything here is total: no input is rejected, and NaN/infinity flow
//! through unchanged.

use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{AppliedMultiplier, MultiplierType, Percent, QuoteItem};

// =============================================================================
// Adjustment Line
// =============================================================================

/// One multiplier's contribution to a line, as priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentLine {
    pub multiplier_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub multiplier_type: MultiplierType,
    /// `min(partial, quantity)`.
    pub effective_quantity: i64,
    pub amount: Money,
    pub is_discountable: bool,
}

// =============================================================================
// Line Breakdown
// =============================================================================

/// Every derived figure for one line at a given discount rate.
///
/// Export and display collaborators render this directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineBreakdown {
    pub product_name: String,
    pub unit: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub base_total: Money,
    pub multiplier_adjustment: Money,
    pub line_total: Money,
    pub discountable_amount: Money,
    pub discount_amount: Money,
    pub line_total_after_discount: Money,
    pub adjustments: Vec<AdjustmentLine>,
}

// =============================================================================
// Calculations
// =============================================================================

/// Clamp a stored partial quantity to the units on the line.
#[inline]
pub fn effective_quantity(partial_quantity: i64, line_quantity: i64) -> i64 {
    partial_quantity.min(line_quantity)
}

impl QuoteItem {
    /// Base cost alone: `base_price × quantity`.
    pub fn base_total(&self) -> Money {
        self.product.base_price.multiply_quantity(self.quantity)
    }

    /// Sum of all matched multiplier adjustments.
    pub fn multiplier_adjustment(&self) -> Money {
        self.matched_multipliers()
            .map(|(applied, effective)| self.adjustment_for(applied, effective))
            .sum()
    }

    /// `base_total + multiplier_adjustment`.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::{Money, Multiplier, Product, QuoteItem};
    ///
    /// let product = Product::new("Tile", "m²", Money::from_amount(100.0), "Flooring");
    /// let mut item = QuoteItem::from_product(&product, 2);
    /// item.apply_multiplier(&Multiplier::percentage("Rush", 10.0), 2);
    ///
    /// assert!((item.line_total_before_discount().amount() - 220.0).abs() < 1e-9);
    /// ```
    pub fn line_total_before_discount(&self) -> Money {
        self.base_total() + self.multiplier_adjustment()
    }

    /// The part of the line total the global discount may touch.
    pub fn discountable_amount(&self) -> Money {
        let base = if self.is_base_item_discountable {
            self.base_total()
        } else {
            Money::zero()
        };

        let adjustments: Money = self
            .matched_multipliers()
            .filter(|(applied, _)| applied.is_discountable)
            .map(|(applied, effective)| self.adjustment_for(applied, effective))
            .sum();

        base + adjustments
    }

    /// Discount for this line at `global_rate`.
    ///
    /// Zero when the rate is zero or negative. A NaN rate is not `<= 0` and
    /// therefore propagates.
    pub fn discount_amount(&self, global_rate: Percent) -> Money {
        if global_rate.points() <= 0.0 {
            return Money::zero();
        }
        self.discountable_amount().percentage(global_rate)
    }

    /// Priced contribution of every matched multiplier, in mapping order.
    pub fn adjustment_lines(&self) -> Vec<AdjustmentLine> {
        self.matched_multipliers()
            .map(|(applied, effective)| AdjustmentLine {
                multiplier_id: applied.multiplier_id.clone(),
                name: applied.name.clone(),
                multiplier_type: applied.multiplier_type,
                effective_quantity: effective,
                amount: self.adjustment_for(applied, effective),
                is_discountable: applied.is_discountable,
            })
            .collect()
    }

    /// All derived figures for this line at `global_rate`.
    pub fn breakdown(&self, global_rate: Percent) -> LineBreakdown {
        let line_total = self.line_total_before_discount();
        let discount_amount = self.discount_amount(global_rate);

        LineBreakdown {
            product_name: self.product.name.clone(),
            unit: self.product.unit.clone(),
            quantity: self.quantity,
            unit_price: self.product.base_price,
            base_total: self.base_total(),
            multiplier_adjustment: self.multiplier_adjustment(),
            line_total,
            discountable_amount: self.discountable_amount(),
            discount_amount,
            line_total_after_discount: line_total - discount_amount,
            adjustments: self.adjustment_lines(),
        }
    }

    /// Lookup-and-clamp walk over `partial_multiplier_quantities`.
    ///
    /// Yields each applied snapshot with its effective quantity. Entries with
    /// a non-positive partial quantity or no matching snapshot are dropped.
    fn matched_multipliers(&self) -> impl Iterator<Item = (&AppliedMultiplier, i64)> + '_ {
        self.partial_multiplier_quantities
            .iter()
            .filter(|(_, partial)| **partial > 0)
            .filter_map(move |(multiplier_id, &partial)| {
                let Some(applied) = self.applied_multiplier(multiplier_id) else {
                    trace!(
                        multiplier_id = %multiplier_id,
                        product = %self.product.name,
                        "skipping partial quantity with no applied multiplier"
                    );
                    return None;
                };
                Some((applied, effective_quantity(partial, self.quantity)))
            })
    }

    fn adjustment_for(&self, applied: &AppliedMultiplier, effective: i64) -> Money {
        match applied.multiplier_type {
            MultiplierType::Percentage => self
                .product
                .base_price
                .percentage(Percent::from_points(applied.applied_value))
                .multiply_quantity(effective),
            MultiplierType::FixedPerUnit => {
                Money::from_amount(applied.applied_value).multiply_quantity(effective)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
