use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currencies::Currency;
use super::discount::{Discount, DiscountType};
use super::totals::{InvoiceTotals, TotalsLine, compute_invoice_totals};
use crate::slip::QrPaymentData;
use crate::theme::RenderSettings;

/// The input of one render: an invoice or a quote with everything already
/// computed. Immutable for the duration of a render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentData {
    pub kind: DocumentKind,
    /// Document number as printed (e.g. "RE-2026-0042").
    pub number: String,
    pub issue_date: NaiveDate,
    /// Payment due date (invoices).
    pub due_date: Option<NaiveDate>,
    /// Offer validity (quotes).
    pub valid_until: Option<NaiveDate>,
    pub currency: Currency,
    /// Sum of line totals, before the global discount.
    pub subtotal: Decimal,
    /// Total VAT.
    pub tva_amount: Decimal,
    /// Grand total including VAT.
    pub total: Decimal,
    pub language: Language,
    pub lines: Vec<LineItem>,
    pub global_discount: Option<GlobalDiscount>,
    pub sender: Party,
    pub recipient: Party,
    #[serde(default)]
    pub settings: RenderSettings,
    /// QR-bill data; only meaningful on invoices.
    pub payment: Option<QrPaymentData>,
}

impl DocumentData {
    /// Recompute the full totals (including the per-rate VAT breakdown)
    /// from the lines and the global discount.
    pub fn totals(&self) -> InvoiceTotals {
        let lines: Vec<TotalsLine> = self.lines.iter().map(LineItem::totals_line).collect();
        let discount = self.global_discount.as_ref().map(GlobalDiscount::discount);
        compute_invoice_totals(&lines, discount.as_ref(), self.currency)
    }

    /// The date printed next to the issue date: due date for invoices,
    /// validity for quotes.
    pub fn secondary_date(&self) -> Option<NaiveDate> {
        match self.kind {
            DocumentKind::Invoice => self.due_date,
            DocumentKind::Quote => self.valid_until,
        }
    }
}

/// Invoice or quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    Invoice,
    Quote,
}

/// Document language. Also selects the payment slip labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    Fr,
    It,
    En,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::De => "de",
            Self::Fr => "fr",
            Self::It => "it",
            Self::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "de" => Some(Self::De),
            "fr" => Some(Self::Fr),
            "it" => Some(Self::It),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

/// One position of the item table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Bold label of the row.
    pub description: String,
    /// Secondary, smaller text below the label.
    pub detail: Option<String>,
    /// Quantity; printed with 2 or 3 fraction digits.
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// VAT rate in percent.
    pub tva_rate: Decimal,
    /// Unit label, e.g. "h", "Stk.".
    pub unit: String,
    /// `max(0, quantity * unit_price - discount)` on the currency grid.
    pub line_total: Decimal,
    pub discount: Option<Discount>,
}

impl LineItem {
    pub fn totals_line(&self) -> TotalsLine {
        TotalsLine {
            subtotal_after_discount: self.line_total,
            tva_rate: self.tva_rate,
        }
    }
}

/// Discount applied to the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDiscount {
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: DiscountType,
    /// Free text printed next to the discount line.
    pub note: Option<String>,
}

impl GlobalDiscount {
    pub fn discount(&self) -> Discount {
        Discount {
            value: self.value,
            kind: self.kind,
        }
    }
}

/// Sender or recipient as printed on the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Company name, or first and last name.
    pub name: String,
    pub address: Address,
    /// UID / MWST number (e.g. "CHE-123.456.789 MWST").
    pub vat_number: Option<String>,
    pub iban: Option<String>,
    /// Logo reference resolved through the asset loader.
    pub logo: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub building_number: Option<String>,
    /// Additional line (c/o, PO box).
    pub additional: Option<String>,
    pub postal_code: String,
    pub city: String,
    /// ISO 3166-1 alpha-2.
    pub country_code: String,
}

impl Address {
    /// "Street 12", when a street is known.
    pub fn street_line(&self) -> Option<String> {
        let street = self.street.as_deref()?.trim();
        if street.is_empty() {
            return None;
        }
        match self.building_number.as_deref().map(str::trim) {
            Some(nr) if !nr.is_empty() => Some(format!("{street} {nr}")),
            _ => Some(street.to_string()),
        }
    }

    /// "8001 Zürich", prefixed with the country for addresses abroad.
    pub fn locality_line(&self) -> String {
        let locality = format!("{} {}", self.postal_code.trim(), self.city.trim());
        let locality = locality.trim().to_string();
        if self.country_code.is_empty() || self.country_code.eq_ignore_ascii_case("CH") {
            locality
        } else {
            format!("{}-{}", self.country_code.to_ascii_uppercase(), locality)
        }
    }

    /// Lines as printed in an address block, without the name.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(street) = self.street_line() {
            lines.push(street);
        }
        if let Some(additional) = self.additional.as_deref().map(str::trim) {
            if !additional.is_empty() {
                lines.push(additional.to_string());
            }
        }
        let locality = self.locality_line();
        if !locality.is_empty() {
            lines.push(locality);
        }
        lines
    }
}
