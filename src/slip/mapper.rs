use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use super::error::SlipError;
use super::iban::{is_qr_iban, validate_iban};
use super::payload::*;
use super::reference::{ReferenceType, validate_creditor_reference, validate_qr_reference};
use crate::core::countries::is_known_country_code;

const MAX_NAME: usize = 70;
const MAX_STREET: usize = 70;
const MAX_BUILDING_NUMBER: usize = 16;
const MAX_POSTAL_CODE: usize = 16;
const MAX_CITY: usize = 35;
const MAX_MESSAGE: usize = 140;
const MAX_AMOUNT: Decimal = dec!(999999999.99);
const MIN_AMOUNT: Decimal = dec!(0.01);

/// Map internal payment data onto the payload a slip renderer accepts.
///
/// Creditor name, address, postal code, city, country and account are
/// mandatory; every missing one is listed in
/// [`SlipError::MissingCreditorFields`]. An incomplete debtor is dropped (the
/// payer fills in the blank box by hand). Amount, currency, reference and
/// message are copied as given, never defaulted.
pub fn map_payment_data(data: &QrPaymentData) -> Result<SlipPayload, SlipError> {
    let c = &data.creditor;
    let name = present(&c.name);
    let street = present(&c.address);
    let postal_code = present(&c.postal_code);
    let city = present(&c.city);
    let country = present(&c.country);
    let account = present(&c.account);

    let missing: Vec<String> = [
        ("creditor.name", name.is_none()),
        ("creditor.address", street.is_none()),
        ("creditor.postal_code", postal_code.is_none()),
        ("creditor.city", city.is_none()),
        ("creditor.country", country.is_none()),
        ("creditor.account", account.is_none()),
    ]
    .into_iter()
    .filter(|(_, absent)| *absent)
    .map(|(field, _)| field.to_string())
    .collect();

    let (Some(name), Some(street), Some(postal_code), Some(city), Some(country), Some(account)) =
        (name, street, postal_code, city, country, account)
    else {
        return Err(SlipError::MissingCreditorFields(missing));
    };

    let creditor = SlipAddress {
        name: name.to_string(),
        street: street.to_string(),
        building_number: present(&c.building_number).map(str::to_string),
        postal_code: postal_code.to_string(),
        city: city.to_string(),
        country: country.to_ascii_uppercase(),
    };
    check_address(&creditor, "creditor")?;

    let account = validate_iban(account)?;
    check_reference(&account, data.reference.as_deref(), data.reference_type)?;

    if let Some(amount) = data.amount {
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
            return Err(SlipError::InvalidAmount(amount));
        }
    }
    if let Some(message) = &data.message {
        check_len("message", message, MAX_MESSAGE)?;
    }

    Ok(SlipPayload {
        account,
        creditor,
        debtor: data.debtor.as_ref().and_then(map_debtor),
        amount: data.amount,
        currency: data.currency,
        reference: data.reference.clone(),
        reference_type: data.reference_type,
        message: data.message.clone(),
    })
}

fn map_debtor(debtor: &QrDebtor) -> Option<SlipAddress> {
    let address = match (
        present(&debtor.name),
        present(&debtor.address),
        present(&debtor.postal_code),
        present(&debtor.city),
        present(&debtor.country),
    ) {
        (Some(name), Some(street), Some(postal_code), Some(city), Some(country)) => SlipAddress {
            name: name.to_string(),
            street: street.to_string(),
            building_number: present(&debtor.building_number).map(str::to_string),
            postal_code: postal_code.to_string(),
            city: city.to_string(),
            country: country.to_ascii_uppercase(),
        },
        _ => {
            warn!("debtor address incomplete, leaving payable-by block blank");
            return None;
        }
    };

    match check_address(&address, "debtor") {
        Ok(()) => Some(address),
        Err(e) => {
            warn!(error = %e, "debtor address unusable, leaving payable-by block blank");
            None
        }
    }
}

fn check_address(address: &SlipAddress, prefix: &str) -> Result<(), SlipError> {
    check_len(&format!("{prefix}.name"), &address.name, MAX_NAME)?;
    check_len(&format!("{prefix}.address"), &address.street, MAX_STREET)?;
    if let Some(nr) = &address.building_number {
        check_len(&format!("{prefix}.building_number"), nr, MAX_BUILDING_NUMBER)?;
    }
    check_len(&format!("{prefix}.postal_code"), &address.postal_code, MAX_POSTAL_CODE)?;
    check_len(&format!("{prefix}.city"), &address.city, MAX_CITY)?;
    if !is_known_country_code(&address.country) {
        return Err(SlipError::InvalidCountry(address.country.clone()));
    }
    Ok(())
}

fn check_reference(
    account: &str,
    reference: Option<&str>,
    kind: ReferenceType,
) -> Result<(), SlipError> {
    let qr_iban = is_qr_iban(account);
    match (kind, qr_iban) {
        (ReferenceType::Qrr, false) => {
            return Err(SlipError::ReferenceMismatch(
                "a QR reference requires a QR-IBAN".into(),
            ));
        }
        (ReferenceType::Scor | ReferenceType::Non, true) => {
            return Err(SlipError::ReferenceMismatch(
                "a QR-IBAN requires a QR reference".into(),
            ));
        }
        _ => {}
    }

    let reference = reference.map(str::trim).filter(|r| !r.is_empty());
    match (kind, reference) {
        (ReferenceType::Qrr, Some(r)) => validate_qr_reference(r).map(|_| ()),
        (ReferenceType::Scor, Some(r)) => validate_creditor_reference(r).map(|_| ()),
        (ReferenceType::Qrr | ReferenceType::Scor, None) => Err(SlipError::InvalidReference {
            reference: String::new(),
            reason: format!("reference type {} requires a reference", kind.code()),
        }),
        (ReferenceType::Non, Some(r)) => Err(SlipError::InvalidReference {
            reference: r.to_string(),
            reason: "reference type NON must not carry a reference".into(),
        }),
        (ReferenceType::Non, None) => Ok(()),
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), SlipError> {
    if value.chars().count() > max {
        return Err(SlipError::FieldTooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
