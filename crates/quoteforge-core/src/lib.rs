//! # quoteforge-core: Pure Pricing Engine for QuoteForge
//!
//! This crate is the **heart** of QuoteForge. It turns a quote (product
//! snapshots, quantities, applied multipliers, quote-wide rates) into line
//! totals and a grand total, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        QuoteForge Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Mobile app (catalog, quote editor, PDF export)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Quote / QuoteItem values               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ quoteforge-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ calculator │  │  totals   │  │validation │  │   │
//! │  │   │  Product  │  │ line total │  │ subtotal  │  │  rules    │  │   │
//! │  │   │ Multiplier│  │ discountbl │  │ tax/grand │  │  checks   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         Consumers: display, export, quoteforge-cli              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Multiplier, QuoteItem, Quote, Percent)
//! - [`money`] - Money type
//! - [`calculator`] - Line item calculator
//! - [`totals`] - Quote aggregator
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation for the editing layer
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same quote in, same totals out, bit for bit
//! 2. **Snapshots**: lines copy products and multipliers, never reference them
//! 3. **Total**: odd input is clamped or skipped, never rejected
//! 4. **Derived, Not Stored**: totals are recomputed on every call
//!
//! ## Example Usage
//!
//! ```rust
//! use quoteforge_core::{compute_quote_totals, Money, Multiplier, Percent, Product, Quote, QuoteItem};
//!
//! let product = Product::new("Tile", "m²", Money::from_amount(100.0), "Flooring");
//! let rush = Multiplier::percentage("Rush", 10.0);
//!
//! let mut item = QuoteItem::from_product(&product, 2);
//! item.apply_multiplier(&rush, 2);
//!
//! let mut quote = Quote::new("Ada", "Analytical Ltd")
//!     .with_global_discount_rate(Percent::from_points(10.0));
//! quote.add_item(item);
//!
//! let totals = compute_quote_totals(&quote);
//! assert!((totals.subtotal_before_discount.amount() - 220.0).abs() < 1e-9);
//! assert!((totals.total_discount.amount() - 22.0).abs() < 1e-9);
//! assert!((totals.grand_total.amount() - 198.0).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{AdjustmentLine, LineBreakdown};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::QuoteTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines on a single quote (validation only).
pub const MAX_QUOTE_ITEMS: usize = 500;

/// Maximum quantity on a single line (validation only).
///
/// ## Business Reason
/// Catches typos like 100000 instead of 100 in the quote editor.
pub const MAX_ITEM_QUANTITY: i64 = 99_999;

// =============================================================================
// Engine API
// =============================================================================

/// Line total before any quote-wide discount.
pub fn compute_line_total(item: &QuoteItem) -> Money {
    item.line_total_before_discount()
}

/// The part of a line eligible for the quote-wide discount.
pub fn compute_line_discountable_amount(item: &QuoteItem) -> Money {
    item.discountable_amount()
}

/// A line's discount at `global_rate` (zero for rates <= 0).
pub fn compute_line_discount(item: &QuoteItem, global_rate: Percent) -> Money {
    item.discount_amount(global_rate)
}

/// Subtotal, discount, discounted subtotal, tax and grand total.
pub fn compute_quote_totals(quote: &Quote) -> QuoteTotals {
    quote.totals()
}
