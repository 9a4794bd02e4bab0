//! Printed labels per document language.

use crate::core::{DocumentKind, Language};

#[derive(Debug)]
pub struct Labels {
    pub invoice: &'static str,
    pub quote: &'static str,
    pub number: &'static str,
    pub date: &'static str,
    pub due_date: &'static str,
    pub valid_until: &'static str,
    pub vat_number: &'static str,
    pub description: &'static str,
    pub quantity: &'static str,
    pub unit_price: &'static str,
    pub line_total: &'static str,
    pub discount: &'static str,
    pub subtotal: &'static str,
    pub vat: &'static str,
    pub vat_total: &'static str,
    pub total: &'static str,
    pub page: &'static str,
    pub courtesy: &'static str,
    pub missing_slip: &'static str,
    pub diagnostic_title: &'static str,
    pub diagnostic_intro: &'static str,
    pub diagnostic_cause: &'static str,
    pub diagnostic_payload: &'static str,
    pub receipt: &'static str,
    pub payment_part: &'static str,
    pub account_payable_to: &'static str,
    pub reference: &'static str,
    pub additional_information: &'static str,
    pub payable_by: &'static str,
    pub payable_by_blank: &'static str,
    pub currency: &'static str,
    pub amount: &'static str,
    pub acceptance_point: &'static str,
    pub separate: &'static str,
}

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::De => &DE,
            Language::Fr => &FR,
            Language::It => &IT,
            Language::En => &EN,
        }
    }

    pub fn title(&self, kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Invoice => self.invoice,
            DocumentKind::Quote => self.quote,
        }
    }

    pub fn secondary_date(&self, kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Invoice => self.due_date,
            DocumentKind::Quote => self.valid_until,
        }
    }
}

static DE: Labels = Labels {
    invoice: "Rechnung",
    quote: "Offerte",
    number: "Nr.",
    date: "Datum",
    due_date: "Zahlbar bis",
    valid_until: "Gültig bis",
    vat_number: "MWST-Nr.",
    description: "Beschreibung",
    quantity: "Menge",
    unit_price: "Preis",
    line_total: "Total",
    discount: "Rabatt",
    subtotal: "Zwischentotal",
    vat: "MWST",
    vat_total: "MWST Total",
    total: "Total",
    page: "Seite",
    courtesy: "Vielen Dank für Ihr Vertrauen.",
    missing_slip: "Kein QR-Zahlteil: Zahlungsangaben fehlen.",
    diagnostic_title: "QR-Zahlteil konnte nicht erstellt werden",
    diagnostic_intro: "Die Rechnung ist gültig, aber der Zahlteil fehlt. Bitte korrigieren Sie die Zahlungsangaben.",
    diagnostic_cause: "Ursache",
    diagnostic_payload: "Technische Daten",
    receipt: "Empfangsschein",
    payment_part: "Zahlteil",
    account_payable_to: "Konto / Zahlbar an",
    reference: "Referenz",
    additional_information: "Zusätzliche Informationen",
    payable_by: "Zahlbar durch",
    payable_by_blank: "Zahlbar durch (Name/Adresse)",
    currency: "Währung",
    amount: "Betrag",
    acceptance_point: "Annahmestelle",
    separate: "Vor der Einzahlung abzutrennen",
};

static FR: Labels = Labels {
    invoice: "Facture",
    quote: "Offre",
    number: "N°",
    date: "Date",
    due_date: "Payable jusqu'au",
    valid_until: "Valable jusqu'au",
    vat_number: "N° TVA",
    description: "Description",
    quantity: "Quantité",
    unit_price: "Prix",
    line_total: "Total",
    discount: "Rabais",
    subtotal: "Sous-total",
    vat: "TVA",
    vat_total: "Total TVA",
    total: "Total",
    page: "Page",
    courtesy: "Merci de votre confiance.",
    missing_slip: "Pas de section paiement QR : données de paiement manquantes.",
    diagnostic_title: "La section paiement QR n'a pas pu être générée",
    diagnostic_intro: "La facture reste valable, mais la section paiement manque. Veuillez corriger les données de paiement.",
    diagnostic_cause: "Cause",
    diagnostic_payload: "Données techniques",
    receipt: "Récépissé",
    payment_part: "Section paiement",
    account_payable_to: "Compte / Payable à",
    reference: "Référence",
    additional_information: "Informations supplémentaires",
    payable_by: "Payable par",
    payable_by_blank: "Payable par (nom/adresse)",
    currency: "Monnaie",
    amount: "Montant",
    acceptance_point: "Point de dépôt",
    separate: "A détacher avant le versement",
};

static IT: Labels = Labels {
    invoice: "Fattura",
    quote: "Offerta",
    number: "N.",
    date: "Data",
    due_date: "Pagabile entro",
    valid_until: "Valida fino al",
    vat_number: "N. IVA",
    description: "Descrizione",
    quantity: "Quantità",
    unit_price: "Prezzo",
    line_total: "Totale",
    discount: "Sconto",
    subtotal: "Subtotale",
    vat: "IVA",
    vat_total: "Totale IVA",
    total: "Totale",
    page: "Pagina",
    courtesy: "Grazie per la fiducia.",
    missing_slip: "Nessuna sezione pagamento QR: mancano i dati di pagamento.",
    diagnostic_title: "Impossibile generare la sezione pagamento QR",
    diagnostic_intro: "La fattura è valida, ma manca la sezione pagamento. Correggere i dati di pagamento.",
    diagnostic_cause: "Causa",
    diagnostic_payload: "Dati tecnici",
    receipt: "Ricevuta",
    payment_part: "Sezione pagamento",
    account_payable_to: "Conto / Pagabile a",
    reference: "Riferimento",
    additional_information: "Informazioni supplementari",
    payable_by: "Pagabile da",
    payable_by_blank: "Pagabile da (nome/indirizzo)",
    currency: "Valuta",
    amount: "Importo",
    acceptance_point: "Punto di accettazione",
    separate: "Da staccare prima del versamento",
};

static EN: Labels = Labels {
    invoice: "Invoice",
    quote: "Quote",
    number: "No.",
    date: "Date",
    due_date: "Due date",
    valid_until: "Valid until",
    vat_number: "VAT no.",
    description: "Description",
    quantity: "Qty",
    unit_price: "Unit price",
    line_total: "Total",
    discount: "Discount",
    subtotal: "Subtotal",
    vat: "VAT",
    vat_total: "VAT Total",
    total: "Total",
    page: "Page",
    courtesy: "Thank you for your business.",
    missing_slip: "No payment slip: payment details are missing.",
    diagnostic_title: "Payment slip could not be generated",
    diagnostic_intro: "This invoice is valid, but its payment part is missing. Please correct the payment details.",
    diagnostic_cause: "What failed",
    diagnostic_payload: "Technical payload",
    receipt: "Receipt",
    payment_part: "Payment part",
    account_payable_to: "Account / Payable to",
    reference: "Reference",
    additional_information: "Additional information",
    payable_by: "Payable by",
    payable_by_blank: "Payable by (name/address)",
    currency: "Currency",
    amount: "Amount",
    acceptance_point: "Acceptance point",
    separate: "Separate before paying in",
};
