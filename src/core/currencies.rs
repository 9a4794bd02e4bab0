//! Supported document currencies and their cash rounding grids.
//!
//! Only CHF and EUR are issued on Swiss QR-bills, so the lookup table is
//! deliberately small.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::rounding::round_to_currency_grid;

/// Document currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Swiss franc, rounded to 0.05 (Rappen cash rounding).
    #[default]
    Chf,
    /// Euro, rounded to the cent.
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chf => "CHF",
            Self::Eur => "EUR",
        }
    }

    /// Parse from an ISO 4217 code (case-sensitive, as printed on the slip).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CHF" => Some(Self::Chf),
            "EUR" => Some(Self::Eur),
            _ => None,
        }
    }

    /// Minor-unit rounding step.
    pub fn grid(&self) -> Decimal {
        match self {
            Self::Chf => dec!(0.05),
            Self::Eur => dec!(0.01),
        }
    }

    /// Round `amount` to this currency's grid.
    pub fn round(&self, amount: Decimal) -> Decimal {
        round_to_currency_grid(amount, self.grid())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Currency::from_code("CHF"), Some(Currency::Chf));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::Eur));
        assert_eq!(Currency::from_code("USD"), None);
        assert_eq!(Currency::from_code("chf"), None);
    }

    #[test]
    fn grids() {
        assert_eq!(Currency::Chf.round(dec!(2.43)), dec!(2.45));
        assert_eq!(Currency::Eur.round(dec!(2.434)), dec!(2.43));
    }

    #[test]
    fn serde_uses_iso_codes() {
        assert_eq!(serde_json::to_string(&Currency::Chf).unwrap(), "\"CHF\"");
        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::Eur);
    }
}
