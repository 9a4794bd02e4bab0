use rust_decimal::Decimal;
use thiserror::Error;

/// Why a payment slip could not be produced.
///
/// Every variant is rendered verbatim on the diagnostic page, so messages
/// are written for the person who has to fix the data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SlipError {
    /// Required creditor fields are absent or blank.
    #[error("missing creditor field(s): {}", .0.join(", "))]
    MissingCreditorFields(Vec<String>),

    #[error("invalid IBAN '{iban}': {reason}")]
    InvalidIban { iban: String, reason: String },

    #[error("invalid payment reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    /// Reference type does not fit the account (QR-IBAN ⇔ QR reference).
    #[error("reference type mismatch: {0}")]
    ReferenceMismatch(String),

    #[error("amount {0} is outside the payable range 0.01 to 999999999.99")]
    InvalidAmount(Decimal),

    #[error("field '{field}' exceeds {max} characters")]
    FieldTooLong { field: String, max: usize },

    #[error("invalid country code '{0}'")]
    InvalidCountry(String),

    /// The slip renderer failed after mapping succeeded.
    #[error("payment slip rendering failed: {0}")]
    Render(String),
}
