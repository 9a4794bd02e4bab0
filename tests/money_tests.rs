use chrono::NaiveDate;
use qrfaktura::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sender() -> Party {
    PartyBuilder::new(
        "Atelier Muster GmbH",
        AddressBuilder::new("8001", "Zürich", "CH")
            .street("Bahnhofstrasse")
            .building_number("12")
            .build(),
    )
    .vat_number("CHE-123.456.789 MWST")
    .build()
}

fn recipient() -> Party {
    PartyBuilder::new(
        "Kunde AG",
        AddressBuilder::new("3011", "Bern", "CH")
            .street("Marktgasse 1")
            .build(),
    )
    .build()
}

fn consulting(quantity: rust_decimal::Decimal) -> LineItem {
    LineItemBuilder::new("Beratung", quantity, "h", dec!(10.00))
        .tva_rate(dec!(8.1))
        .build()
}

// --- Rounding ---

#[test]
fn chf_grid_rounds_half_away_from_zero() {
    assert_eq!(round_chf(dec!(2.43)), dec!(2.45));
    assert_eq!(round_chf(dec!(2.42)), dec!(2.40));
    assert_eq!(round_chf(dec!(2.425)), dec!(2.45));
    assert_eq!(round_chf(dec!(2.175)), dec!(2.20));
    assert_eq!(round_chf(dec!(-2.425)), dec!(-2.45));
    assert_eq!(round_to_currency_grid(dec!(1.005), dec!(0.01)), dec!(1.01));
}

#[test]
fn non_positive_grid_returns_amount() {
    assert_eq!(round_to_currency_grid(dec!(1.234), dec!(0)), dec!(1.234));
    assert_eq!(round_to_currency_grid(dec!(1.234), dec!(-0.05)), dec!(1.234));
}

#[test]
fn currency_grids() {
    assert_eq!(Currency::Chf.grid(), dec!(0.05));
    assert_eq!(Currency::Eur.grid(), dec!(0.01));
    assert_eq!(Currency::Eur.round(dec!(2.187)), dec!(2.19));
}

// --- Discounts ---

#[test]
fn line_amount_discount() {
    // 2 × 10.00 with 5.00 off
    let d = compute_line_discount(
        dec!(10.00),
        dec!(2),
        Some(&Discount::amount(dec!(5))),
        Currency::Chf,
    );
    assert_eq!(d.subtotal_before_discount, dec!(20.00));
    assert_eq!(d.discount_amount, dec!(5.00));
    assert_eq!(d.subtotal_after_discount, dec!(15.00));
}

#[test]
fn line_percent_discount_is_rounded() {
    let d = compute_line_discount(
        dec!(33.30),
        dec!(1),
        Some(&Discount::percent(dec!(7.5))),
        Currency::Chf,
    );
    // 2.4975 → 2.50
    assert_eq!(d.discount_amount, dec!(2.50));
    assert_eq!(d.subtotal_after_discount, dec!(30.80));
}

#[test]
fn oversized_discount_clamps_to_zero() {
    let d = compute_line_discount(
        dec!(10),
        dec!(2),
        Some(&Discount::amount(dec!(25))),
        Currency::Chf,
    );
    assert_eq!(d.subtotal_after_discount, dec!(0));
}

#[test]
fn discount_validation() {
    assert!(validate_discount(dec!(5), DiscountType::Amount, dec!(20.00)).is_ok());
    assert!(validate_discount(dec!(100), DiscountType::Percent, dec!(20.00)).is_ok());

    let err = validate_discount(dec!(25), DiscountType::Amount, dec!(20.00)).unwrap_err();
    assert_eq!(err.field, "value");
    assert!(err.message.contains("exceeds"));

    assert!(validate_discount(dec!(100.01), DiscountType::Percent, dec!(20)).is_err());
    assert!(validate_discount(dec!(-1), DiscountType::Percent, dec!(20)).is_err());
    assert!(validate_discount(dec!(-1), DiscountType::Amount, dec!(20)).is_err());
}

// --- Totals ---

#[test]
fn single_line_totals() {
    let lines = [TotalsLine {
        subtotal_after_discount: dec!(30.00),
        tva_rate: dec!(8.1),
    }];
    let t = compute_invoice_totals(&lines, None, Currency::Chf);
    assert_eq!(t.lines_subtotal, dec!(30.00));
    assert_eq!(t.global_discount_amount, dec!(0));
    assert_eq!(t.tva_amount, dec!(2.45));
    assert_eq!(t.total, dec!(32.45));
}

#[test]
fn global_percent_discount_rebases_vat() {
    let lines = [TotalsLine {
        subtotal_after_discount: dec!(30.00),
        tva_rate: dec!(8.1),
    }];
    let t = compute_invoice_totals(&lines, Some(&Discount::percent(dec!(10))), Currency::Chf);
    assert_eq!(t.global_discount_amount, dec!(3.00));
    assert_eq!(t.subtotal_after_global_discount, dec!(27.00));
    assert_eq!(t.tva_amount, dec!(2.20));
    assert_eq!(t.total, dec!(29.20));
}

#[test]
fn global_discount_spreads_over_rates() {
    let lines = [
        TotalsLine {
            subtotal_after_discount: dec!(100.00),
            tva_rate: dec!(8.1),
        },
        TotalsLine {
            subtotal_after_discount: dec!(100.00),
            tva_rate: dec!(2.6),
        },
    ];
    let t = compute_invoice_totals(&lines, Some(&Discount::amount(dec!(50))), Currency::Chf);
    assert_eq!(t.subtotal_after_global_discount, dec!(150.00));
    // 75 × 8.1% + 75 × 2.6% = 6.075 + 1.95 = 8.025
    assert_eq!(t.tva_amount, dec!(8.05));
    assert_eq!(t.total, dec!(158.05));

    let rates: Vec<_> = t.vat_breakdown.iter().map(|b| b.rate).collect();
    assert_eq!(rates, vec![dec!(2.6), dec!(8.1)]);
    assert_eq!(t.vat_breakdown[0].taxable_amount, dec!(75.00));
    assert_eq!(t.vat_breakdown[1].tva_amount, dec!(6.10));
}

#[test]
fn zero_rate_lines_form_one_bucket() {
    let lines = [
        TotalsLine {
            subtotal_after_discount: dec!(12.00),
            tva_rate: dec!(0),
        },
        TotalsLine {
            subtotal_after_discount: dec!(8.00),
            tva_rate: dec!(0.0),
        },
    ];
    let t = compute_invoice_totals(&lines, None, Currency::Chf);
    assert_eq!(t.vat_breakdown.len(), 1);
    assert_eq!(t.taxed_buckets().count(), 0);
    assert_eq!(t.tva_amount, dec!(0));
    assert_eq!(t.total, dec!(20.00));
}

#[test]
fn empty_document_totals_are_zero() {
    let t = compute_invoice_totals(&[], Some(&Discount::percent(dec!(10))), Currency::Chf);
    assert_eq!(t.total, dec!(0));
    assert!(t.vat_breakdown.is_empty());
}

// --- Builder and validation ---

#[test]
fn builder_computes_totals() {
    let doc = DocumentBuilder::invoice("RE-2026-001", date(2026, 3, 2))
        .due_date(date(2026, 4, 1))
        .sender(sender())
        .recipient(recipient())
        .add_line(consulting(dec!(3)))
        .global_discount(dec!(10), DiscountType::Percent, Some("Stammkunde".into()))
        .build()
        .unwrap();

    assert_eq!(doc.subtotal, dec!(30.00));
    assert_eq!(doc.tva_amount, dec!(2.20));
    assert_eq!(doc.total, dec!(29.20));
    assert_eq!(doc.lines[0].line_total, dec!(30.00));
    assert_eq!(doc.secondary_date(), Some(date(2026, 4, 1)));
}

#[test]
fn builder_recomputes_line_total_in_document_currency() {
    let doc = DocumentBuilder::invoice("RE-2026-002", date(2026, 3, 2))
        .currency(Currency::Eur)
        .sender(sender())
        .recipient(recipient())
        .add_line(
            LineItemBuilder::new("Lizenz", dec!(1), "Stk.", dec!(10.02))
                .tva_rate(dec!(0))
                .build(),
        )
        .build()
        .unwrap();
    assert_eq!(doc.lines[0].line_total, dec!(10.02));
    assert_eq!(doc.total, dec!(10.02));
}

#[test]
fn builder_rejects_oversized_line_discount() {
    let line = LineItemBuilder::new("Beratung", dec!(2), "h", dec!(10.00))
        .discount(Discount::amount(dec!(25)))
        .build();
    let err = DocumentBuilder::invoice("RE-2026-003", date(2026, 3, 2))
        .sender(sender())
        .recipient(recipient())
        .add_line(line)
        .build()
        .unwrap_err();
    match err {
        FakturaError::Validation(msg) => assert!(msg.contains("lines[0].discount.value"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn builder_requires_parties() {
    let err = DocumentBuilder::quote("OF-1", date(2026, 3, 2))
        .add_line(consulting(dec!(1)))
        .build()
        .unwrap_err();
    assert!(matches!(err, FakturaError::Builder(_)));
}

#[test]
fn validation_reports_every_finding() {
    let mut doc = DocumentBuilder::invoice("", date(2026, 3, 2))
        .due_date(date(2026, 3, 1))
        .sender(sender())
        .recipient(recipient())
        .add_line(consulting(dec!(3)))
        .build_unchecked()
        .unwrap();
    doc.total = dec!(99);
    doc.lines[0].quantity = dec!(-1);

    let fields: Vec<String> = validate_document(&doc).into_iter().map(|e| e.field).collect();
    for expected in ["number", "lines[0].quantity", "lines[0].line_total", "due_date", "total"] {
        assert!(fields.iter().any(|f| f == expected), "missing {expected} in {fields:?}");
    }
}

#[test]
fn quote_validity_date() {
    let doc = DocumentBuilder::quote("OF-2026-007", date(2026, 3, 2))
        .valid_until(date(2026, 4, 2))
        .sender(sender())
        .recipient(recipient())
        .add_line(consulting(dec!(1)))
        .build()
        .unwrap();
    assert_eq!(doc.kind, DocumentKind::Quote);
    assert_eq!(doc.secondary_date(), Some(date(2026, 4, 2)));
}

#[test]
fn document_data_json_round_trip_keeps_amounts() {
    let doc = DocumentBuilder::invoice("RE-2026-004", date(2026, 3, 2))
        .sender(sender())
        .recipient(recipient())
        .add_line(consulting(dec!(3)))
        .build()
        .unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains("\"INVOICE\""));
    let back: DocumentData = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total, dec!(32.45));
    assert!(validate_document(&back).is_empty());
}
