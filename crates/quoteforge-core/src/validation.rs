//! # Validation Module
//!
//! Input validation for the quote-editing layer.
//!
//! ## Where Validation Lives
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: App UI                                                        │
//! │  ├── Immediate user feedback ("invalid price")                          │
//! │  └── THIS MODULE: business rule checks before a quote is saved         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculator / Aggregator                                       │
//! │  ├── Never calls this module                                            │
//! │  └── Clamps or skips anything odd instead of rejecting it               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A partial quantity larger than the line quantity, or a partial entry for
//! a multiplier that is no longer applied, is NOT a violation: the engine
//! clamps the first and skips the second.
//!
//! ## Usage
//! ```rust
//! use quoteforge_core::validation::{validate_quantity, validate_rate};
//! use quoteforge_core::Percent;
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_rate("tax_rate", Percent::from_points(120.0)).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{AppliedMultiplier, Multiplier, MultiplierType, Percent, Product, Quote, QuoteItem};
use crate::{MAX_ITEM_QUANTITY, MAX_QUOTE_ITEMS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_text(field: &str, value: &str, required: bool, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if required && value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, true, 200)
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a catalog base price.
///
/// ## Rules
/// - Finite
/// - Zero or greater (free items are allowed)
///
/// ## Example
/// ```rust
/// use quoteforge_core::validation::validate_base_price;
/// use quoteforge_core::Money;
///
/// assert!(validate_base_price(Money::from_amount(10.99)).is_ok());
/// assert!(validate_base_price(Money::zero()).is_ok());
/// assert!(validate_base_price(Money::from_amount(-1.0)).is_err());
/// ```
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    validate_finite("base_price", price.amount())?;

    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "base_price".to_string(),
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Zero or greater (a zero line is a placeholder, priced at zero)
/// - At most MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 || qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0.0,
            max: MAX_ITEM_QUANTITY as f64,
        });
    }

    Ok(())
}

/// Validates a partial multiplier quantity.
///
/// Only negatives are rejected; values above the line quantity are clamped
/// by the calculator.
pub fn validate_partial_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "partial_quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a tax or discount rate.
///
/// ## Rules
/// - Finite
/// - Between 0 and 100 percent
pub fn validate_rate(field: &str, rate: Percent) -> ValidationResult<()> {
    validate_finite(field, rate.points())?;

    if !(0.0..=100.0).contains(&rate.points()) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

fn validate_multiplier_value(multiplier_type: MultiplierType, value: f64) -> ValidationResult<()> {
    validate_finite("multiplier value", value)?;

    // A percentage below -100 would turn the unit price negative.
    if multiplier_type == MultiplierType::Percentage && value < -100.0 {
        return Err(ValidationError::OutOfRange {
            field: "multiplier value".to_string(),
            min: -100.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a catalog product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_text("unit", &product.unit, false, 20)?;
    validate_text("category", &product.category, false, 100)?;
    validate_base_price(product.base_price)
}

/// Validates a catalog multiplier definition.
pub fn validate_multiplier(multiplier: &Multiplier) -> ValidationResult<()> {
    validate_text("multiplier name", &multiplier.name, true, 100)?;
    validate_multiplier_value(multiplier.multiplier_type, multiplier.value)
}

fn validate_applied(applied: &AppliedMultiplier) -> ValidationResult<()> {
    if applied.multiplier_id.trim().is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "multiplier_id".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    validate_text("multiplier name", &applied.name, true, 100)?;
    validate_multiplier_value(applied.multiplier_type, applied.applied_value)
}

/// Validates one quote line.
///
/// ## Rules
/// - Product snapshot and quantity are valid
/// - Every applied snapshot is valid and appears once
/// - Every partial quantity is non-negative
pub fn validate_quote_item(item: &QuoteItem) -> ValidationResult<()> {
    validate_product(&item.product)?;
    validate_quantity(item.quantity)?;

    let mut seen = HashSet::new();
    for applied in &item.applied_multipliers {
        validate_applied(applied)?;
        if !seen.insert(applied.multiplier_id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "multiplier".to_string(),
                value: applied.multiplier_id.clone(),
            });
        }
    }

    for &qty in item.partial_multiplier_quantities.values() {
        validate_partial_quantity(qty)?;
    }

    Ok(())
}

/// Validates a whole quote, stopping at the first violation.
pub fn validate_quote(quote: &Quote) -> ValidationResult<()> {
    if quote.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    validate_text("customer_name", &quote.customer_name, false, 200)?;
    validate_text("company_name", &quote.company_name, false, 200)?;

    if quote.items.len() > MAX_QUOTE_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 0.0,
            max: MAX_QUOTE_ITEMS as f64,
        });
    }

    validate_rate("tax_rate", quote.tax_rate)?;
    validate_rate("global_discount_rate", quote.global_discount_rate)?;

    quote.items.iter().try_for_each(validate_quote_item)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("Tile", "m²", Money::from_amount(25.0), "Flooring")
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Oak floor").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(Money::from_amount(0.0)).is_ok());
        assert!(validate_base_price(Money::from_amount(10.99)).is_ok());
        assert_eq!(
            validate_base_price(Money::from_amount(-0.01)),
            Err(ValidationError::MustBeNonNegative {
                field: "base_price".to_string()
            })
        );
        assert!(matches!(
            validate_base_price(Money::from_amount(f64::INFINITY)),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());

        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("tax_rate", Percent::zero()).is_ok());
        assert!(validate_rate("tax_rate", Percent::from_points(8.25)).is_ok());
        assert!(validate_rate("tax_rate", Percent::from_points(100.0)).is_ok());
        assert!(validate_rate("tax_rate", Percent::from_points(100.01)).is_err());
        assert!(validate_rate("tax_rate", Percent::from_points(-1.0)).is_err());
        assert!(validate_rate("tax_rate", Percent::from_points(f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_multiplier() {
        assert!(validate_multiplier(&Multiplier::percentage("Rush", 15.0)).is_ok());
        assert!(validate_multiplier(&Multiplier::percentage("Promo", -20.0)).is_ok());
        assert!(validate_multiplier(&Multiplier::percentage("Broken", -150.0)).is_err());
        assert!(validate_multiplier(&Multiplier::fixed_per_unit("", 5.0)).is_err());
        assert!(validate_multiplier(&Multiplier::fixed_per_unit("Nan", f64::NAN)).is_err());
    }

    #[test]
    fn test_oversized_partial_and_stale_entries_are_allowed() {
        let m = Multiplier::percentage("Rush", 10.0);
        let mut item = QuoteItem::from_product(&product(), 2);
        item.apply_multiplier(&m, 10);
        item.partial_multiplier_quantities
            .insert("detached".to_string(), 1);

        assert!(validate_quote_item(&item).is_ok());
    }

    #[test]
    fn test_negative_partial_quantity_is_rejected() {
        let m = Multiplier::percentage("Rush", 10.0);
        let mut item = QuoteItem::from_product(&product(), 2);
        item.apply_multiplier(&m, -1);

        assert!(matches!(
            validate_quote_item(&item),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_duplicate_applied_multiplier_is_rejected() {
        let m = Multiplier::fixed_per_unit("Delivery", 4.0);
        let mut item = QuoteItem::from_product(&product(), 2);
        item.applied_multipliers
            .push(AppliedMultiplier::from_multiplier(&m));
        item.applied_multipliers
            .push(AppliedMultiplier::from_multiplier(&m));

        assert!(matches!(
            validate_quote_item(&item),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_validate_quote() {
        let mut quote = Quote::new("Ada", "Analytical Ltd").with_tax_rate(Percent::from_points(8.0));
        quote.add_item(QuoteItem::from_product(&product(), 3));
        assert!(validate_quote(&quote).is_ok());

        quote.global_discount_rate = Percent::from_points(120.0);
        assert!(validate_quote(&quote).is_err());

        quote.global_discount_rate = Percent::zero();
        quote.id = String::new();
        assert!(matches!(
            validate_quote(&quote),
            Err(ValidationError::Required { .. })
        ));
    }
}
