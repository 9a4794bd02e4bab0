use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::currencies::Currency;
use super::discount::{Discount, DiscountType, compute_line_discount};
use super::error::{FakturaError, join_errors};
use super::types::*;
use super::validation;
use crate::slip::QrPaymentData;
use crate::theme::RenderSettings;

/// Builder for invoices and quotes.
///
/// Line totals and document totals are computed by the discount and totals
/// engines; callers never set them by hand.
///
/// ```
/// use qrfaktura::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let doc = DocumentBuilder::invoice("RE-2026-001", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .sender(PartyBuilder::new("Atelier Muster GmbH", AddressBuilder::new("8001", "Zürich", "CH").build()).build())
///     .recipient(PartyBuilder::new("Kunde AG", AddressBuilder::new("3011", "Bern", "CH").build()).build())
///     .add_line(LineItemBuilder::new("Beratung", dec!(3), "h", dec!(10.00)).tva_rate(dec!(8.1)).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.subtotal, dec!(30.00));
/// assert_eq!(doc.tva_amount, dec!(2.45));
/// assert_eq!(doc.total, dec!(32.45));
/// ```
pub struct DocumentBuilder {
    kind: DocumentKind,
    number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    valid_until: Option<NaiveDate>,
    currency: Currency,
    language: Language,
    lines: Vec<LineItem>,
    global_discount: Option<GlobalDiscount>,
    sender: Option<Party>,
    recipient: Option<Party>,
    settings: RenderSettings,
    payment: Option<QrPaymentData>,
}

impl DocumentBuilder {
    pub fn new(kind: DocumentKind, number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            kind,
            number: number.into(),
            issue_date,
            due_date: None,
            valid_until: None,
            currency: Currency::Chf,
            language: Language::De,
            lines: Vec::new(),
            global_discount: None,
            sender: None,
            recipient: None,
            settings: RenderSettings::default(),
            payment: None,
        }
    }

    pub fn invoice(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self::new(DocumentKind::Invoice, number, issue_date)
    }

    pub fn quote(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self::new(DocumentKind::Quote, number, issue_date)
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn valid_until(mut self, date: NaiveDate) -> Self {
        self.valid_until = Some(date);
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    pub fn global_discount(
        mut self,
        value: Decimal,
        kind: DiscountType,
        note: Option<String>,
    ) -> Self {
        self.global_discount = Some(GlobalDiscount { value, kind, note });
        self
    }

    pub fn sender(mut self, party: Party) -> Self {
        self.sender = Some(party);
        self
    }

    pub fn recipient(mut self, party: Party) -> Self {
        self.recipient = Some(party);
        self
    }

    pub fn settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn payment(mut self, payment: QrPaymentData) -> Self {
        self.payment = Some(payment);
        self
    }

    /// Build the document, computing line and document totals and running
    /// validation. Returns all validation errors (not just the first).
    pub fn build(self) -> Result<DocumentData, FakturaError> {
        let doc = self.assemble()?;

        let errors = validation::validate_document(&doc);
        if !errors.is_empty() {
            return Err(FakturaError::Validation(join_errors(&errors)));
        }

        Ok(doc)
    }

    /// Build without validation, e.g. when importing external data.
    pub fn build_unchecked(self) -> Result<DocumentData, FakturaError> {
        self.assemble()
    }

    fn assemble(self) -> Result<DocumentData, FakturaError> {
        let sender = self
            .sender
            .ok_or_else(|| FakturaError::Builder("sender is required".into()))?;
        let recipient = self
            .recipient
            .ok_or_else(|| FakturaError::Builder("recipient is required".into()))?;

        if self.lines.len() > 10_000 {
            return Err(FakturaError::Builder(
                "document cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(FakturaError::Builder(
                "document number cannot exceed 200 characters".into(),
            ));
        }

        let currency = self.currency;
        let lines: Vec<LineItem> = self
            .lines
            .into_iter()
            .map(|mut line| {
                line.line_total = compute_line_discount(
                    line.unit_price,
                    line.quantity,
                    line.discount.as_ref(),
                    currency,
                )
                .subtotal_after_discount;
                line
            })
            .collect();

        let mut doc = DocumentData {
            kind: self.kind,
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            valid_until: self.valid_until,
            currency,
            subtotal: Decimal::ZERO,
            tva_amount: Decimal::ZERO,
            total: Decimal::ZERO,
            language: self.language,
            lines,
            global_discount: self.global_discount,
            sender,
            recipient,
            settings: self.settings,
            payment: self.payment,
        };

        let totals = doc.totals();
        doc.subtotal = totals.lines_subtotal;
        doc.tva_amount = totals.tva_amount;
        doc.total = totals.total;
        Ok(doc)
    }
}

/// Builder for Party (sender/recipient).
pub struct PartyBuilder {
    name: String,
    address: Address,
    vat_number: Option<String>,
    iban: Option<String>,
    logo: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    website: Option<String>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
            vat_number: None,
            iban: None,
            logo: None,
            email: None,
            phone: None,
            website: None,
        }
    }

    pub fn vat_number(mut self, number: impl Into<String>) -> Self {
        self.vat_number = Some(number.into());
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn logo(mut self, reference: impl Into<String>) -> Self {
        self.logo = Some(reference.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            vat_number: self.vat_number,
            iban: self.iban,
            logo: self.logo,
            email: self.email,
            phone: self.phone,
            website: self.website,
        }
    }
}

/// Builder for Address.
pub struct AddressBuilder {
    street: Option<String>,
    building_number: Option<String>,
    additional: Option<String>,
    postal_code: String,
    city: String,
    country_code: String,
}

impl AddressBuilder {
    pub fn new(
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            street: None,
            building_number: None,
            additional: None,
            postal_code: postal_code.into(),
            city: city.into(),
            country_code: country_code.into(),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn building_number(mut self, number: impl Into<String>) -> Self {
        self.building_number = Some(number.into());
        self
    }

    pub fn additional(mut self, additional: impl Into<String>) -> Self {
        self.additional = Some(additional.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            building_number: self.building_number,
            additional: self.additional,
            postal_code: self.postal_code,
            city: self.city,
            country_code: self.country_code,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    description: String,
    detail: Option<String>,
    quantity: Decimal,
    unit: String,
    unit_price: Decimal,
    tva_rate: Decimal,
    discount: Option<Discount>,
}

impl LineItemBuilder {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            detail: None,
            quantity,
            unit: unit.into(),
            unit_price,
            tva_rate: Decimal::new(81, 1),
            discount: None,
        }
    }

    pub fn tva_rate(mut self, rate: Decimal) -> Self {
        self.tva_rate = rate;
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Build the line with its total on the CHF grid. [`DocumentBuilder`]
    /// recomputes the total for the document currency.
    pub fn build(self) -> LineItem {
        let line_total = compute_line_discount(
            self.unit_price,
            self.quantity,
            self.discount.as_ref(),
            Currency::Chf,
        )
        .subtotal_after_discount;

        LineItem {
            description: self.description,
            detail: self.detail,
            quantity: self.quantity,
            unit_price: self.unit_price,
            tva_rate: self.tva_rate,
            unit: self.unit,
            line_total,
            discount: self.discount,
        }
    }
}
