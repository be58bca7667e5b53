//! End-to-end pricing scenarios through the crate-root API.

use quoteforge_core::{
    compute_line_discount, compute_line_discountable_amount, compute_line_total,
    compute_quote_totals, Money, Multiplier, Percent, Product, Quote, QuoteItem, QuoteTotals,
};

const EPS: f64 = 1e-9;

fn assert_money(actual: Money, expected: f64) {
    assert!(
        (actual.amount() - expected).abs() < EPS,
        "expected {expected}, got {}",
        actual.amount()
    );
}

fn rush_line(base_discountable: bool) -> QuoteItem {
    let product = Product::new("Countertop", "m", Money::from_amount(100.0), "Stone");
    let rush = Multiplier::percentage("Rush", 10.0);

    let mut item = QuoteItem::from_product(&product, 2);
    item.apply_multiplier(&rush, 2);
    item.is_base_item_discountable = base_discountable;
    item
}

#[test]
fn percentage_multiplier_on_discountable_line() {
    let item = rush_line(true);

    assert_money(compute_line_total(&item), 220.0);
    assert_money(compute_line_discountable_amount(&item), 220.0);
    assert_money(compute_line_discount(&item, Percent::from_points(10.0)), 22.0);

    let mut quote = Quote::new("Grace", "Hopper & Co")
        .with_global_discount_rate(Percent::from_points(10.0));
    quote.add_item(item);

    let totals = compute_quote_totals(&quote);
    assert_money(totals.subtotal_after_discount, 198.0);
}

#[test]
fn base_cost_excluded_from_discount() {
    let item = rush_line(false);

    assert_money(compute_line_total(&item), 220.0);
    assert_money(compute_line_discountable_amount(&item), 20.0);
    assert_money(compute_line_discount(&item, Percent::from_points(10.0)), 2.0);
}

#[test]
fn base_cost_survives_half_off_discount() {
    let item = rush_line(false);
    let base = item.base_total();

    let mut quote = Quote::new("Grace", "").with_global_discount_rate(Percent::from_points(50.0));
    quote.add_item(item);

    let totals = compute_quote_totals(&quote);
    // Only the 20.00 rush surcharge is halved.
    assert_money(totals.total_discount, 10.0);
    assert_money(totals.subtotal_after_discount - base, 10.0);
}

#[test]
fn empty_quote_totals_are_zero() {
    for (tax, discount) in [(0.0, 0.0), (8.0, 0.0), (20.0, 35.0), (100.0, 100.0)] {
        let quote = Quote::new("Grace", "")
            .with_tax_rate(Percent::from_points(tax))
            .with_global_discount_rate(Percent::from_points(discount));
        assert_eq!(compute_quote_totals(&quote), QuoteTotals::default());
    }
}

#[test]
fn tax_on_undiscounted_subtotal() {
    let product = Product::new("Audit", "job", Money::from_amount(100.0), "Services");
    let mut quote = Quote::new("Grace", "").with_tax_rate(Percent::from_points(8.0));
    quote.add_item(QuoteItem::from_product(&product, 1));

    let totals = compute_quote_totals(&quote);
    assert_money(totals.subtotal_before_discount, 100.0);
    assert_money(totals.tax_amount, 8.0);
    assert_money(totals.grand_total, 108.0);
}

#[test]
fn catalog_edits_do_not_change_existing_quote() {
    let mut product = Product::new("Panel", "pcs", Money::from_amount(40.0), "Hardware");
    let mut delivery = Multiplier::fixed_per_unit("Delivery", 5.0);

    let mut item = QuoteItem::from_product(&product, 3);
    item.apply_multiplier(&delivery, 3);
    let mut quote = Quote::new("Grace", "");
    quote.add_item(item);

    let before = compute_quote_totals(&quote);

    product.base_price = Money::from_amount(400.0);
    delivery.value = 50.0;

    assert_eq!(compute_quote_totals(&quote), before);
    assert_money(before.grand_total, 135.0);
}

#[test]
fn detached_multiplier_leaves_stale_entry_harmless() {
    let product = Product::new("Panel", "pcs", Money::from_amount(40.0), "Hardware");
    let delivery = Multiplier::fixed_per_unit("Delivery", 5.0);

    let mut item = QuoteItem::from_product(&product, 3);
    item.apply_multiplier(&delivery, 3);
    item.detach_multiplier(&delivery.id).unwrap();
    // Simulate an older document that kept the partial entry around.
    item.partial_multiplier_quantities
        .insert(delivery.id.clone(), 3);

    assert_money(compute_line_total(&item), 120.0);
}

#[test]
fn quote_document_from_app_layer() {
    let json = r#"{
        "id": "7d0b5f5e-2f1c-4c1e-9a0a-4b1f1c2d3e4f",
        "customerName": "Grace",
        "companyName": "Hopper & Co",
        "taxRate": 8,
        "globalDiscountRate": 10,
        "createdAt": "2026-03-01T09:30:00Z",
        "items": [
            {
                "product": {
                    "id": "p-1",
                    "name": "Countertop",
                    "unit": "m",
                    "basePrice": 100,
                    "category": "Stone",
                    "isDiscountable": true
                },
                "quantity": 2,
                "appliedMultipliers": [
                    {
                        "multiplierId": "m-rush",
                        "name": "Rush",
                        "type": "PERCENTAGE",
                        "appliedValue": 10,
                        "isDiscountable": true
                    },
                    {
                        "multiplierId": "m-permit",
                        "name": "Permit",
                        "type": "FIXED_PER_UNIT",
                        "appliedValue": 15,
                        "isDiscountable": false
                    }
                ],
                "partialMultiplierQuantities": { "m-rush": 5, "m-permit": 1, "m-old": 2 },
                "isBaseItemDiscountable": true
            }
        ]
    }"#;

    let quote: Quote = serde_json::from_str(json).unwrap();
    let totals = compute_quote_totals(&quote);

    // 200 base + 20 rush (clamped to 2 units) + 15 permit; m-old is stale.
    assert_money(totals.subtotal_before_discount, 235.0);
    assert_money(totals.total_discount, 22.0);
    assert_money(totals.subtotal_after_discount, 213.0);
    assert_money(totals.tax_amount, 17.04);
    assert_money(totals.grand_total, 230.04);
}
