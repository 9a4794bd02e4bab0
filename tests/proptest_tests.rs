//! Property-based tests for the money engines and the contrast resolver.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use qrfaktura::core::*;
use qrfaktura::theme::{Rgb, relative_luminance, resolve_text_color};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Any amount with up to 4 fraction digits, roughly ±10 million.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

/// A non-negative price (0.00 to 99999.99).
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Quantity with up to 3 fraction digits (0 to 1000).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (0u32..=1_000_000u32).prop_map(|milli| Decimal::new(i64::from(milli), 3))
}

/// Swiss VAT rates in use.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![Just(dec!(0)), Just(dec!(2.6)), Just(dec!(3.8)), Just(dec!(8.1))]
}

fn arb_percent() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000u32).prop_map(|basis| Decimal::new(i64::from(basis), 2))
}

fn arb_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Chf), Just(Currency::Eur)]
}

fn arb_lines() -> impl Strategy<Value = Vec<TotalsLine>> {
    prop::collection::vec(
        (arb_price(), arb_quantity(), arb_rate()).prop_map(|(price, qty, rate)| TotalsLine {
            subtotal_after_discount: compute_line_discount(price, qty, None, Currency::Chf)
                .subtotal_after_discount,
            tva_rate: rate,
        }),
        0..=12,
    )
}

fn arb_global_discount() -> impl Strategy<Value = Option<Discount>> {
    prop_oneof![
        Just(None),
        arb_percent().prop_map(|p| Some(Discount::percent(p))),
        arb_price().prop_map(|a| Some(Discount::amount(a))),
    ]
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Rounding twice is rounding once.
    #[test]
    fn rounding_is_idempotent(x in arb_amount(), currency in arb_currency()) {
        let once = round_to_currency_grid(x, currency.grid());
        prop_assert_eq!(round_to_currency_grid(once, currency.grid()), once);
    }

    /// Rounded amounts sit on the grid and within half a step of the input.
    #[test]
    fn rounding_stays_close(x in arb_amount()) {
        let rounded = round_chf(x);
        prop_assert!((rounded - x).abs() <= dec!(0.025));
        prop_assert!((rounded / dec!(0.05)).fract().is_zero());
    }

    /// A valid percentage never takes more than the base.
    #[test]
    fn percent_discount_bounded(base in arb_price(), percent in arb_percent(), currency in arb_currency()) {
        prop_assert!(validate_discount(percent, DiscountType::Percent, base).is_ok());
        let amount = discount_amount(base, Some(&Discount::percent(percent)), currency);
        prop_assert!(amount >= Decimal::ZERO);
        prop_assert!(amount <= currency.round(base));
    }

    /// Line subtotals never go negative, whatever the discount.
    #[test]
    fn line_subtotal_non_negative(
        price in arb_price(),
        qty in arb_quantity(),
        off in arb_price(),
    ) {
        let d = compute_line_discount(price, qty, Some(&Discount::amount(off)), Currency::Chf);
        prop_assert!(d.subtotal_after_discount >= Decimal::ZERO);
        prop_assert!(d.subtotal_after_discount <= d.subtotal_before_discount);
    }

    /// subtotal after discount + VAT reconstructs the total exactly.
    #[test]
    fn totals_conservation(
        lines in arb_lines(),
        discount in arb_global_discount(),
        currency in arb_currency(),
    ) {
        let t = compute_invoice_totals(&lines, discount.as_ref(), currency);
        prop_assert_eq!(t.subtotal_after_global_discount + t.tva_amount, t.total);
        prop_assert!(t.total >= Decimal::ZERO);
        prop_assert!(t.subtotal_after_global_discount <= t.lines_subtotal);
    }

    /// Per-rate VAT lines add up to the reported VAT within one CHF grid step
    /// per rate.
    #[test]
    fn vat_bucket_sum_within_tolerance(lines in arb_lines(), discount in arb_global_discount()) {
        let t = compute_invoice_totals(&lines, discount.as_ref(), Currency::Chf);
        let sum: Decimal = t.vat_breakdown.iter().map(|b| b.tva_amount).sum();
        let tolerance = dec!(0.05) * Decimal::from(t.vat_breakdown.len());
        prop_assert!((sum - t.tva_amount).abs() <= tolerance,
            "sum {} vs total {} (tolerance {})", sum, t.tva_amount, tolerance);
    }

    /// Dark candidate on light backgrounds, light candidate on dark ones.
    #[test]
    fn contrast_follows_luminance(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let bg = Rgb::new(r, g, b);
        let chosen = resolve_text_color(bg, Rgb::BLACK, Rgb::WHITE);
        if relative_luminance(bg) >= 0.5 {
            prop_assert_eq!(chosen, Rgb::BLACK);
        } else {
            prop_assert_eq!(chosen, Rgb::WHITE);
        }
    }

    /// Hex formatting parses back to the same color.
    #[test]
    fn hex_parse_accepts_own_output(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let color = Rgb::new(r, g, b);
        prop_assert_eq!(Rgb::from_hex(&color.to_hex()).unwrap(), color);
    }
}
