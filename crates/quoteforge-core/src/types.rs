//! # Domain Types
//!
//! Core domain types used throughout QuoteForge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │   Multiplier    │   │  AppliedMultiplier  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  multiplier_id      │   │
//! │  │  name, unit     │   │  name           │──►│  name (copied)      │   │
//! │  │  base_price     │   │  type, value    │   │  applied_value      │   │
//! │  │  is_discountable│   │  is_discountable│   │  is_discountable    │   │
//! │  └────────┬────────┘   └─────────────────┘   └──────────┬──────────┘   │
//! │           │ snapshot                                    │ snapshots    │
//! │           ▼                                             ▼              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  QuoteItem                                                      │   │
//! │  │  product, quantity, applied_multipliers,                        │   │
//! │  │  partial_multiplier_quantities, is_base_item_discountable       │   │
//! │  └──────────────────────────────┬──────────────────────────────────┘   │
//! │                                 │ owned by value                       │
//! │                                 ▼                                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Quote: customer fields, items, tax_rate, global_discount_rate  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A quote line stores a *copy* of the product and of every multiplier at the
//! moment it was attached. Editing the catalog afterwards never changes a
//! historical quote. Ids on snapshots are for display and lookup only.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_quantity;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Percent
// =============================================================================

/// A rate expressed in percentage points (`8.25` = 8.25%).
///
/// Used for tax, the global discount and percentage multipliers. Values are
/// not clamped; negative or >100 rates flow through the formulas as given.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(f64);

impl Percent {
    /// Creates a rate from percentage points.
    #[inline]
    pub const fn from_points(points: f64) -> Self {
        Percent(points)
    }

    /// Returns the rate in percentage points.
    #[inline]
    pub const fn points(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a fraction (`points / 100`).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0.0)
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry that can be priced on a quote line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4 for products created on-device).
    pub id: String,

    /// Display name shown on the quote.
    pub name: String,

    /// Unit label ("m²", "hour", "pcs").
    pub unit: String,

    /// Price per unit in decimal currency units.
    pub base_price: Money,

    /// Catalog category, display only.
    pub category: String,

    /// Default eligibility of the base cost for the global discount.
    pub is_discountable: bool,

    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Creates a discountable product with a fresh id.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        base_price: Money,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: new_id(),
            name: name.into(),
            unit: unit.into(),
            base_price,
            category: category.into(),
            is_discountable: true,
            description: None,
        }
    }
}

// =============================================================================
// Multiplier
// =============================================================================

/// How a multiplier's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiplierType {
    /// Value is percentage points of the product's base price, per unit.
    Percentage,
    /// Value is a currency amount added per unit.
    FixedPerUnit,
}

/// A catalog-level adjustment definition (surcharge or discount).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Multiplier {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub multiplier_type: MultiplierType,
    /// Percentage points or currency-per-unit, depending on the type.
    pub value: f64,
    pub is_discountable: bool,
}

impl Multiplier {
    /// Creates a discountable percentage multiplier with a fresh id.
    pub fn percentage(name: impl Into<String>, points: f64) -> Self {
        Self::with_type(name, MultiplierType::Percentage, points)
    }

    /// Creates a discountable fixed-per-unit multiplier with a fresh id.
    pub fn fixed_per_unit(name: impl Into<String>, amount: f64) -> Self {
        Self::with_type(name, MultiplierType::FixedPerUnit, amount)
    }

    fn with_type(name: impl Into<String>, multiplier_type: MultiplierType, value: f64) -> Self {
        Multiplier {
            id: new_id(),
            name: name.into(),
            multiplier_type,
            value,
            is_discountable: true,
        }
    }
}

// =============================================================================
// Applied Multiplier
// =============================================================================

/// A multiplier frozen onto one quote line.
///
/// ## Snapshot Semantics
/// `multiplier_id` points back at the catalog definition for display only.
/// Name, type, value and discountability are copies taken at attach time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedMultiplier {
    pub multiplier_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub multiplier_type: MultiplierType,
    /// May differ from the catalog value when overridden on the line.
    pub applied_value: f64,
    pub is_discountable: bool,
}

impl AppliedMultiplier {
    /// Snapshots a catalog multiplier with its current value.
    pub fn from_multiplier(multiplier: &Multiplier) -> Self {
        Self::with_value(multiplier, multiplier.value)
    }

    /// Snapshots a catalog multiplier with an overridden value.
    pub fn with_value(multiplier: &Multiplier, applied_value: f64) -> Self {
        AppliedMultiplier {
            multiplier_id: multiplier.id.clone(),
            name: multiplier.name.clone(),
            multiplier_type: multiplier.multiplier_type,
            applied_value,
            is_discountable: multiplier.is_discountable,
        }
    }
}

// =============================================================================
// Quote Item
// =============================================================================

/// One priced line of a quote.
///
/// ## Partial Quantities
/// `partial_multiplier_quantities` maps a multiplier id to the number of the
/// line's units that multiplier applies to. Entries are independent of each
/// other and need not sum to `quantity`. The calculator clamps each one to
/// `quantity` and skips ids with no applied snapshot.
///
/// Entries keep the order they were attached in (or the order of the quote
/// document), and the calculator walks them in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", from = "QuoteItemRecord")]
pub struct QuoteItem {
    /// Product snapshot taken when the line was created.
    pub product: Product,

    pub quantity: i64,

    pub applied_multipliers: Vec<AppliedMultiplier>,

    pub partial_multiplier_quantities: IndexMap<String, i64>,

    /// Defaults from `product.is_discountable`, overridable per line.
    pub is_base_item_discountable: bool,
}

/// Wire form of a [`QuoteItem`]. Everything but the product snapshot and the
/// quantity may be left out of a quote document.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteItemRecord {
    product: Product,
    quantity: i64,
    #[serde(default)]
    applied_multipliers: Vec<AppliedMultiplier>,
    #[serde(default)]
    partial_multiplier_quantities: IndexMap<String, i64>,
    #[serde(default)]
    is_base_item_discountable: Option<bool>,
}

impl From<QuoteItemRecord> for QuoteItem {
    fn from(record: QuoteItemRecord) -> Self {
        let is_base_item_discountable = record
            .is_base_item_discountable
            .unwrap_or(record.product.is_discountable);

        QuoteItem {
            product: record.product,
            quantity: record.quantity,
            applied_multipliers: record.applied_multipliers,
            partial_multiplier_quantities: record.partial_multiplier_quantities,
            is_base_item_discountable,
        }
    }
}

impl QuoteItem {
    /// Creates a line from a product snapshot with no multipliers.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        QuoteItem {
            product: product.clone(),
            quantity,
            applied_multipliers: Vec::new(),
            partial_multiplier_quantities: IndexMap::new(),
            is_base_item_discountable: product.is_discountable,
        }
    }

    /// Snapshots `multiplier` onto this line for `partial_quantity` units.
    pub fn apply_multiplier(&mut self, multiplier: &Multiplier, partial_quantity: i64) {
        self.apply_snapshot(AppliedMultiplier::from_multiplier(multiplier), partial_quantity);
    }

    /// Attaches a prepared snapshot for `partial_quantity` units.
    ///
    /// Re-applying an id already on the line replaces that snapshot in place,
    /// so the line never carries two snapshots for one multiplier.
    pub fn apply_snapshot(&mut self, applied: AppliedMultiplier, partial_quantity: i64) {
        self.partial_multiplier_quantities
            .insert(applied.multiplier_id.clone(), partial_quantity);

        match self
            .applied_multipliers
            .iter_mut()
            .find(|m| m.multiplier_id == applied.multiplier_id)
        {
            Some(existing) => *existing = applied,
            None => self.applied_multipliers.push(applied),
        }
    }

    /// Removes a multiplier snapshot and its partial quantity.
    pub fn detach_multiplier(&mut self, multiplier_id: &str) -> CoreResult<AppliedMultiplier> {
        let index = self
            .applied_multipliers
            .iter()
            .position(|m| m.multiplier_id == multiplier_id)
            .ok_or_else(|| CoreError::MultiplierNotApplied {
                multiplier_id: multiplier_id.to_string(),
            })?;

        self.partial_multiplier_quantities.shift_remove(multiplier_id);
        Ok(self.applied_multipliers.remove(index))
    }

    /// Changes how many units an applied multiplier covers.
    pub fn set_partial_quantity(&mut self, multiplier_id: &str, quantity: i64) -> CoreResult<()> {
        if self.applied_multiplier(multiplier_id).is_none() {
            return Err(CoreError::MultiplierNotApplied {
                multiplier_id: multiplier_id.to_string(),
            });
        }

        self.partial_multiplier_quantities
            .insert(multiplier_id.to_string(), quantity);
        Ok(())
    }

    /// Looks up the first applied snapshot with the given id.
    pub fn applied_multiplier(&self, multiplier_id: &str) -> Option<&AppliedMultiplier> {
        self.applied_multipliers
            .iter()
            .find(|m| m.multiplier_id == multiplier_id)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A customer quote: descriptive fields, lines, and quote-wide rates.
///
/// Totals are never stored here. See [`crate::totals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,

    pub customer_name: String,

    #[serde(default)]
    pub company_name: String,

    #[serde(default)]
    pub customer_email: Option<String>,

    #[serde(default)]
    pub customer_phone: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub items: Vec<QuoteItem>,

    /// Applied to the discounted subtotal.
    #[serde(default)]
    pub tax_rate: Percent,

    /// Applied uniformly to the discountable part of every line.
    #[serde(default)]
    pub global_discount_rate: Percent,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Creates an empty quote with zero rates.
    pub fn new(customer_name: impl Into<String>, company_name: impl Into<String>) -> Self {
        Quote {
            id: new_id(),
            customer_name: customer_name.into(),
            company_name: company_name.into(),
            customer_email: None,
            customer_phone: None,
            notes: None,
            items: Vec::new(),
            tax_rate: Percent::zero(),
            global_discount_rate: Percent::zero(),
            created_at: Utc::now(),
        }
    }

    pub fn with_tax_rate(mut self, rate: Percent) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn with_global_discount_rate(mut self, rate: Percent) -> Self {
        self.global_discount_rate = rate;
        self
    }

    /// Appends a line.
    pub fn add_item(&mut self, item: QuoteItem) {
        self.items.push(item);
    }

    /// Removes and returns the line at `index`.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<QuoteItem> {
        if index >= self.items.len() {
            return Err(CoreError::ItemIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn item(&self, index: usize) -> Option<&QuoteItem> {
        self.items.get(index)
    }

    /// Changes the quantity of the line at `index`.
    ///
    /// Partial quantities are left alone; they clamp against the new value.
    ///
    /// ## Errors
    /// - `Validation` if the quantity is negative or above `MAX_ITEM_QUANTITY`
    /// - `ItemIndexOutOfRange` if there is no such line
    pub fn set_item_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CoreError::ItemIndexOutOfRange { index, len })?;
        item.quantity = quantity;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
