//! Property tests for the calculator and aggregator invariants.
//!
//! Inputs are built from small integers so every generated price, rate and
//! multiplier value is finite.

use quickcheck_macros::quickcheck;
use quoteforge_core::{Money, Multiplier, Percent, Product, Quote, QuoteItem};

/// (is_percentage, value in tenths, partial quantity, is_discountable)
type MultiplierSpec = (bool, i16, u8, bool);

fn build_item(price_cents: u32, quantity: u8, base_discountable: bool, specs: &[MultiplierSpec]) -> QuoteItem {
    let product = Product::new(
        "Generated",
        "pcs",
        Money::from_amount(f64::from(price_cents) / 100.0),
        "Test",
    );
    let mut item = QuoteItem::from_product(&product, i64::from(quantity));
    item.is_base_item_discountable = base_discountable;

    for &(is_percentage, value, partial, discountable) in specs.iter().take(6) {
        let value = f64::from(value) / 10.0;
        let mut multiplier = if is_percentage {
            Multiplier::percentage("Generated", value)
        } else {
            Multiplier::fixed_per_unit("Generated", value)
        };
        multiplier.is_discountable = discountable;
        item.apply_multiplier(&multiplier, i64::from(partial));
    }
    item
}

#[quickcheck]
fn zero_quantity_prices_to_zero(price_cents: u32, base_discountable: bool, specs: Vec<MultiplierSpec>) -> bool {
    let item = build_item(price_cents, 0, base_discountable, &specs);
    item.line_total_before_discount().amount() == 0.0 && item.discountable_amount().amount() == 0.0
}

#[quickcheck]
fn decomposition_is_exact(price_cents: u32, quantity: u8, specs: Vec<MultiplierSpec>) -> bool {
    let item = build_item(price_cents, quantity, true, &specs);
    item.base_total() + item.multiplier_adjustment() == item.line_total_before_discount()
}

#[quickcheck]
fn quote_totals_chain(
    lines: Vec<(u32, u8, bool, Vec<MultiplierSpec>)>,
    tax_points: u8,
    discount_points: u8,
) -> bool {
    let mut quote = Quote::new("Generated", "")
        .with_tax_rate(Percent::from_points(f64::from(tax_points)))
        .with_global_discount_rate(Percent::from_points(f64::from(discount_points)));
    for (price, qty, discountable, specs) in lines.iter().take(8) {
        quote.add_item(build_item(*price, *qty, *discountable, specs));
    }

    let totals = quote.totals();
    totals.subtotal_after_discount == totals.subtotal_before_discount - totals.total_discount
        && totals.grand_total == totals.subtotal_after_discount + totals.tax_amount
}

#[quickcheck]
fn totals_are_idempotent(lines: Vec<(u32, u8, bool, Vec<MultiplierSpec>)>, discount_points: u8) -> bool {
    let mut quote = Quote::new("Generated", "")
        .with_tax_rate(Percent::from_points(8.25))
        .with_global_discount_rate(Percent::from_points(f64::from(discount_points)));
    for (price, qty, discountable, specs) in lines.iter().take(8) {
        quote.add_item(build_item(*price, *qty, *discountable, specs));
    }

    quote.totals() == quote.totals()
}

#[quickcheck]
fn partial_quantity_clamps_to_line_quantity(
    price_cents: u32,
    quantity: u8,
    excess: u8,
    is_percentage: bool,
    value: i16,
) -> bool {
    let clamped = build_item(
        price_cents,
        quantity,
        true,
        &[(is_percentage, value, quantity.saturating_add(excess), true)],
    );
    let exact = build_item(price_cents, quantity, true, &[(is_percentage, value, quantity, true)]);

    clamped.multiplier_adjustment() == exact.multiplier_adjustment()
}

#[quickcheck]
fn non_discountable_base_is_never_discounted(price_cents: u32, quantity: u8, specs: Vec<MultiplierSpec>) -> bool {
    let item = build_item(price_cents, quantity, false, &specs);
    let rate = Percent::from_points(50.0);

    let discountable_adjustments: Money = item
        .adjustment_lines()
        .iter()
        .filter(|line| line.is_discountable)
        .map(|line| line.amount)
        .sum();

    item.discountable_amount() == Money::zero() + discountable_adjustments
        && item.discount_amount(rate) == item.discountable_amount().percentage(rate)
}

#[quickcheck]
fn non_positive_rate_means_no_discount(price_cents: u32, quantity: u8, specs: Vec<MultiplierSpec>, rate: u8) -> bool {
    let item = build_item(price_cents, quantity, true, &specs);
    item.discount_amount(Percent::from_points(-f64::from(rate))).is_zero()
}
