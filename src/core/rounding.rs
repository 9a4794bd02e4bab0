//! Cash rounding of monetary values to a currency grid.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Swiss franc cash rounding step (5 Rappen).
pub const CHF_GRID: Decimal = dec!(0.05);

/// Round `amount` to the nearest multiple of `grid`, half away from zero.
///
/// Every displayed or summed monetary value passes through this function so
/// that a printed total can always be reproduced from printed line values.
/// A non-positive grid leaves the amount untouched; values so large that the
/// division would overflow are returned unrounded rather than panicking.
///
/// ```
/// use qrfaktura::core::*;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to_currency_grid(dec!(2.43), CHF_GRID), dec!(2.45));
/// assert_eq!(round_to_currency_grid(dec!(2.42), CHF_GRID), dec!(2.40));
/// assert_eq!(round_to_currency_grid(dec!(-2.425), CHF_GRID), dec!(-2.45));
/// ```
pub fn round_to_currency_grid(amount: Decimal, grid: Decimal) -> Decimal {
    if grid <= Decimal::ZERO {
        return amount;
    }
    let Some(steps) = amount.checked_div(grid) else {
        return amount;
    };
    let steps = steps.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    match steps.checked_mul(grid) {
        Some(rounded) => rounded.round_dp(grid.scale()),
        None => amount,
    }
}

/// Round to the CHF grid.
pub fn round_chf(amount: Decimal) -> Decimal {
    round_to_currency_grid(amount, CHF_GRID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_chf(dec!(0.025)), dec!(0.05));
        assert_eq!(round_chf(dec!(0.024)), dec!(0.00));
        assert_eq!(round_chf(dec!(-0.025)), dec!(-0.05));
        assert_eq!(round_chf(dec!(2.187)), dec!(2.20));
    }

    #[test]
    fn keeps_grid_scale() {
        assert_eq!(round_chf(dec!(30)).to_string(), "30.00");
        assert_eq!(round_to_currency_grid(dec!(1.005), dec!(0.01)).to_string(), "1.01");
    }

    #[test]
    fn degenerate_grid_is_identity() {
        assert_eq!(round_to_currency_grid(dec!(1.234), Decimal::ZERO), dec!(1.234));
        assert_eq!(round_to_currency_grid(dec!(1.234), dec!(-1)), dec!(1.234));
    }

    #[test]
    fn huge_values_do_not_panic() {
        let _ = round_chf(Decimal::MAX);
        let _ = round_chf(Decimal::MIN);
    }
}
