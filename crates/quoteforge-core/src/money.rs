//! # Money Module
//!
//! Provides the `Money` type for monetary values flowing through the engine.
//!
//! ## Why Decimal Floats Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QUOTES ARE NOT LEDGERS                                                 │
//! │                                                                         │
//! │  Catalog prices arrive as decimal currency units (e.g. 12.5)           │
//! │  Multipliers are percentage points or currency-per-unit                │
//! │                                                                         │
//! │  The engine must recompute a stored total bit-for-bit from the         │
//! │  quote fields, so every step is plain IEEE-754 arithmetic in a         │
//! │  fixed order. Rounding happens ONLY at display time.                   │
//! │                                                                         │
//! │  NaN / infinity are not masked: they propagate to the totals.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quoteforge_core::money::Money;
//! use quoteforge_core::types::Percent;
//!
//! let price = Money::from_amount(100.0);
//! let line = price.multiply_quantity(2);          // 200.00
//! let surcharge = price.percentage(Percent::from_points(10.0));
//!
//! assert_eq!(line.amount(), 200.0);
//! assert_eq!(surcharge.amount(), 10.0);
//! assert_eq!(line.to_string(), "$200.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Percent;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in decimal currency units (e.g. dollars, not cents).
///
/// ## Design Decisions
/// - **f64**: matches the catalog's decimal prices; every formula is a
///   fixed-order product/sum so results are reproducible
/// - **Single field tuple struct**: zero-cost, serializes as a bare number
/// - **No rounding in arithmetic**: see [`Money::rounded`] for display
///
/// ## Where Money is Used
/// ```text
/// Product.base_price ──► QuoteItem line total ──► Quote subtotal
///                                                      │
///                        discount ◄────────────────────┤
///                        tax      ◄────────────────────┤
///                        grand total ◄─────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from decimal currency units.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::money::Money;
    ///
    /// let price = Money::from_amount(10.99);
    /// assert_eq!(price.amount(), 10.99);
    /// ```
    #[inline]
    pub const fn from_amount(amount: f64) -> Self {
        Money(amount)
    }

    /// Returns the raw decimal amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::money::Money;
    ///
    /// let unit_price = Money::from_amount(2.5);
    /// assert_eq!(unit_price.multiply_quantity(3).amount(), 7.5);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty as f64)
    }

    /// Returns `rate` percent of this amount: `amount × (points / 100)`.
    ///
    /// Used for percentage multipliers, the global discount and tax. The
    /// division happens on the rate first so every caller multiplies in the
    /// same order.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::money::Money;
    /// use quoteforge_core::types::Percent;
    ///
    /// let subtotal = Money::from_amount(100.0);
    /// let tax = subtotal.percentage(Percent::from_points(8.0));
    /// assert!((tax.amount() - 8.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn percentage(&self, rate: Percent) -> Self {
        Money(self.0 * rate.fraction())
    }

    /// Rounds half away from zero to `decimals` places.
    ///
    /// ## Note
    /// Display helper only. The engine never rounds intermediate values.
    /// Amounts too large to scale are returned unchanged.
    pub fn rounded(&self, decimals: u8) -> Self {
        let factor = 10f64.powi(i32::from(decimals));
        let scaled = self.0 * factor;
        if !scaled.is_finite() {
            return *self;
        }
        Money(scaled.round() / factor)
    }

    /// Formats with a currency symbol and a fixed number of decimals.
    ///
    /// ## Example
    /// ```rust
    /// use quoteforge_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(1234.5).format_with("€", 2), "€1234.50");
    /// assert_eq!(Money::from_amount(-5.5).format_with("$", 2), "-$5.50");
    /// assert_eq!(Money::from_amount(99.6).format_with("¥", 0), "¥100");
    /// ```
    pub fn format_with(&self, symbol: &str, decimals: u8) -> String {
        let rounded = self.rounded(decimals);
        let sign = if rounded.0 < 0.0 { "-" } else { "" };
        format!(
            "{}{}{:.*}",
            sign,
            symbol,
            usize::from(decimals),
            rounded.0.abs()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows two decimals with a dollar sign.
///
/// ## Note
/// This is for debugging. Consumers should use [`Money::format_with`] with
/// their configured currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$", 2))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Sums left to right starting from `+0.0`.
///
/// Empty input yields exactly zero (not `-0.0`).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
