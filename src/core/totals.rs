//! Document totals: global discount, VAT per rate, grand total.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::currencies::Currency;
use super::discount::{Discount, discount_amount};

/// The two numbers of a line the totals engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsLine {
    /// Line subtotal after its own discount.
    pub subtotal_after_discount: Decimal,
    /// VAT rate in percent (e.g. 8.1).
    pub tva_rate: Decimal,
}

/// VAT attributable to one rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBucket {
    /// Rate in percent.
    pub rate: Decimal,
    /// Share of the discounted subtotal taxed at this rate.
    pub taxable_amount: Decimal,
    /// VAT for this rate, rounded on its own.
    pub tva_amount: Decimal,
}

/// Result of [`compute_invoice_totals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub lines_subtotal: Decimal,
    pub global_discount_amount: Decimal,
    pub subtotal_after_global_discount: Decimal,
    pub tva_amount: Decimal,
    /// `subtotal_after_global_discount + tva_amount`.
    pub total: Decimal,
    /// One bucket per distinct rate, ascending by rate.
    ///
    /// Buckets are rounded individually, so their sum may differ from
    /// `tva_amount` by up to one grid step per bucket.
    pub vat_breakdown: Vec<VatBucket>,
}

impl InvoiceTotals {
    /// Buckets with a positive rate, the ones itemized on a document.
    pub fn taxed_buckets(&self) -> impl Iterator<Item = &VatBucket> {
        self.vat_breakdown.iter().filter(|b| b.rate > Decimal::ZERO)
    }
}

/// Aggregate already line-discounted amounts into document totals.
///
/// VAT is computed per line after re-basing each line onto the globally
/// discounted subtotal, so a single document discount is spread across VAT
/// rates in proportion to each line's weight. Per-line VAT is accumulated
/// unrounded and rounded once.
///
/// ```
/// use qrfaktura::core::*;
/// use rust_decimal_macros::dec;
///
/// let lines = [TotalsLine { subtotal_after_discount: dec!(30.00), tva_rate: dec!(8.1) }];
/// let totals = compute_invoice_totals(&lines, Some(&Discount::percent(dec!(10))), Currency::Chf);
/// assert_eq!(totals.subtotal_after_global_discount, dec!(27.00));
/// assert_eq!(totals.tva_amount, dec!(2.20));
/// assert_eq!(totals.total, dec!(29.20));
/// ```
pub fn compute_invoice_totals(
    lines: &[TotalsLine],
    global_discount: Option<&Discount>,
    currency: Currency,
) -> InvoiceTotals {
    let lines_subtotal = currency.round(
        lines
            .iter()
            .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.subtotal_after_discount)),
    );
    let global_discount_amount = discount_amount(lines_subtotal, global_discount, currency);
    let subtotal_after_global_discount = currency.round(
        lines_subtotal
            .saturating_sub(global_discount_amount)
            .max(Decimal::ZERO),
    );

    let mut tva = Decimal::ZERO;
    let mut per_rate: BTreeMap<Decimal, (Decimal, Decimal)> = BTreeMap::new();
    for line in lines {
        let proportion = if lines_subtotal.is_zero() {
            Decimal::ZERO
        } else {
            line.subtotal_after_discount
                .checked_div(lines_subtotal)
                .unwrap_or(Decimal::ZERO)
        };
        let line_after_global = subtotal_after_global_discount.saturating_mul(proportion);
        let line_tva = line_after_global.saturating_mul(line.tva_rate) / dec!(100);
        tva = tva.saturating_add(line_tva);

        let bucket = per_rate
            .entry(line.tva_rate.normalize())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        bucket.0 = bucket.0.saturating_add(line_after_global);
        bucket.1 = bucket.1.saturating_add(line_tva);
    }

    let tva_amount = currency.round(tva.max(Decimal::ZERO));
    let total = currency.round(subtotal_after_global_discount.saturating_add(tva_amount));

    let vat_breakdown = per_rate
        .into_iter()
        .map(|(rate, (taxable, amount))| VatBucket {
            rate,
            taxable_amount: currency.round(taxable),
            tva_amount: currency.round(amount.max(Decimal::ZERO)),
        })
        .collect();

    InvoiceTotals {
        lines_subtotal,
        global_discount_amount,
        subtotal_after_global_discount,
        tva_amount,
        total,
        vat_breakdown,
    }
}
