//! Swiss QR-bill payment data and the payment slip payload mapper.
//!
//! [`map_payment_data`] turns [`QrPaymentData`] into a [`SlipPayload`] or a
//! [`SlipError`] that the layout engine prints on a diagnostic page. The
//! drawing of the slip itself lives behind the `SlipRenderer` trait in the
//! layout module.

mod error;
pub mod iban;
mod mapper;
mod payload;
pub mod reference;

pub use error::SlipError;
pub use iban::{format_iban, is_qr_iban, normalize_iban, validate_iban};
pub use mapper::map_payment_data;
pub use payload::*;
pub use reference::{
    ReferenceType, format_reference, qr_reference_check_digit, validate_creditor_reference,
    validate_qr_reference,
};
