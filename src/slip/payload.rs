use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reference::ReferenceType;
use crate::core::Currency;

/// Payment data for one QR-bill, built fresh per render from the invoice
/// and the creditor's account settings.
///
/// Every address field is optional so that incomplete data can be
/// represented and reported instead of rejected at deserialization time.
/// Currency and reference type have no default and must always be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrPaymentData {
    pub creditor: QrCreditor,
    pub debtor: Option<QrDebtor>,
    /// Open amount when omitted: the payer fills it in by hand.
    pub amount: Option<Decimal>,
    pub currency: Currency,
    pub reference: Option<String>,
    pub reference_type: ReferenceType,
    /// Unstructured message printed under "Additional information".
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QrCreditor {
    pub name: Option<String>,
    /// Street name.
    pub address: Option<String>,
    pub building_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2.
    pub country: Option<String>,
    /// IBAN or QR-IBAN.
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QrDebtor {
    pub name: Option<String>,
    pub address: Option<String>,
    pub building_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Structured ("S") address as required by the payment slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipAddress {
    pub name: String,
    pub street: String,
    pub building_number: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl SlipAddress {
    /// Lines as printed in the slip's address blocks.
    pub fn lines(&self) -> Vec<String> {
        let street = match &self.building_number {
            Some(nr) => format!("{} {}", self.street, nr),
            None => self.street.clone(),
        };
        vec![
            self.name.clone(),
            street,
            format!("{}-{} {}", self.country, self.postal_code, self.city),
        ]
    }
}

/// The payload handed to a slip renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipPayload {
    /// Normalized IBAN (no spaces).
    pub account: String,
    pub creditor: SlipAddress,
    pub debtor: Option<SlipAddress>,
    pub amount: Option<Decimal>,
    pub currency: Currency,
    pub reference: Option<String>,
    pub reference_type: ReferenceType,
    pub message: Option<String>,
}

impl SlipPayload {
    /// Swiss Payments Code text encoded in the QR code (version 2.0,
    /// structured addresses, no ultimate creditor, no billing information).
    pub fn to_qr_text(&self) -> String {
        let mut fields: Vec<String> = vec!["SPC".into(), "0200".into(), "1".into()];
        fields.push(self.account.clone());
        push_address(&mut fields, Some(&self.creditor));
        // Ultimate creditor: reserved, always empty.
        fields.extend(std::iter::repeat_n(String::new(), 7));
        fields.push(
            self.amount
                .map(|a| format!("{:.2}", a.round_dp(2)))
                .unwrap_or_default(),
        );
        fields.push(self.currency.code().into());
        push_address(&mut fields, self.debtor.as_ref());
        fields.push(self.reference_type.code().into());
        fields.push(
            self.reference
                .as_deref()
                .map(|r| r.chars().filter(|c| !c.is_whitespace()).collect())
                .unwrap_or_default(),
        );
        fields.push(self.message.clone().unwrap_or_default());
        fields.push("EPD".into());
        fields.join("\n")
    }
}

fn push_address(fields: &mut Vec<String>, address: Option<&SlipAddress>) {
    match address {
        Some(a) => fields.extend([
            "S".to_string(),
            a.name.clone(),
            a.street.clone(),
            a.building_number.clone().unwrap_or_default(),
            a.postal_code.clone(),
            a.city.clone(),
            a.country.clone(),
        ]),
        None => fields.extend(std::iter::repeat_n(String::new(), 7)),
    }
}
