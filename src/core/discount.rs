//! Per-line and whole-document discounts.
//!
//! These are pure functions: they never look at a document or a page and can
//! be called by the persistence layer before a `DocumentData` exists.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::currencies::Currency;
use super::error::ValidationError;

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// `value` is a percentage of the base amount (0–100).
    Percent,
    /// `value` is a fixed amount in the document currency.
    Amount,
}

/// A discount as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: DiscountType,
}

impl Discount {
    pub fn percent(value: Decimal) -> Self {
        Self {
            value,
            kind: DiscountType::Percent,
        }
    }

    pub fn amount(value: Decimal) -> Self {
        Self {
            value,
            kind: DiscountType::Amount,
        }
    }
}

/// Result of [`compute_line_discount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiscount {
    /// `quantity * unit_price`, rounded.
    pub subtotal_before_discount: Decimal,
    /// Discount deducted from the line, rounded.
    pub discount_amount: Decimal,
    /// `max(0, before - discount)`, rounded.
    pub subtotal_after_discount: Decimal,
}

/// Discount amount for `base` under `discount`, rounded to the currency grid.
///
/// Percentages are taken of the base; fixed amounts are returned as entered
/// (callers validate them against the base with [`validate_discount`]).
pub fn discount_amount(base: Decimal, discount: Option<&Discount>, currency: Currency) -> Decimal {
    let Some(discount) = discount else {
        return Decimal::ZERO;
    };
    let raw = match discount.kind {
        DiscountType::Percent => base.saturating_mul(discount.value) / dec!(100),
        DiscountType::Amount => discount.value,
    };
    currency.round(raw)
}

/// Compute the discounted subtotal of a single line.
///
/// ```
/// use qrfaktura::core::*;
/// use rust_decimal_macros::dec;
///
/// let d = compute_line_discount(dec!(10), dec!(2), Some(&Discount::amount(dec!(5))), Currency::Chf);
/// assert_eq!(d.subtotal_before_discount, dec!(20.00));
/// assert_eq!(d.subtotal_after_discount, dec!(15.00));
/// ```
pub fn compute_line_discount(
    unit_price: Decimal,
    quantity: Decimal,
    discount: Option<&Discount>,
    currency: Currency,
) -> LineDiscount {
    let subtotal_before_discount = currency.round(unit_price.saturating_mul(quantity));
    let discount_amount = discount_amount(subtotal_before_discount, discount, currency);
    let subtotal_after_discount = currency.round(
        subtotal_before_discount
            .saturating_sub(discount_amount)
            .max(Decimal::ZERO),
    );

    LineDiscount {
        subtotal_before_discount,
        discount_amount,
        subtotal_after_discount,
    }
}

/// Check a discount before it is persisted.
///
/// Fails when the value is negative, a percentage exceeds 100, or a fixed
/// amount exceeds `base_amount`. The engine never clamps silently, so the
/// caller has to surface the error.
pub fn validate_discount(
    value: Decimal,
    kind: DiscountType,
    base_amount: Decimal,
) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::new(
            "value",
            format!("discount must not be negative (got {value})"),
        ));
    }
    match kind {
        DiscountType::Percent if value > dec!(100) => Err(ValidationError::new(
            "value",
            format!("percentage discount must be between 0 and 100 (got {value})"),
        )),
        DiscountType::Amount if value > base_amount => Err(ValidationError::new(
            "value",
            format!("discount amount {value} exceeds the amount it applies to ({base_amount})"),
        )),
        _ => Ok(()),
    }
}
