use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use qrfaktura::core::*;
use qrfaktura::layout::DocumentRenderer;
use qrfaktura::slip::*;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn payment(amount: rust_decimal::Decimal) -> QrPaymentData {
    QrPaymentData {
        creditor: QrCreditor {
            name: Some("Benchmark AG".into()),
            address: Some("Bahnhofstrasse".into()),
            building_number: Some("1".into()),
            postal_code: Some("8001".into()),
            city: Some("Zürich".into()),
            country: Some("CH".into()),
            account: Some("CH4431999123000889012".into()),
        },
        debtor: None,
        amount: Some(amount),
        currency: Currency::Chf,
        reference: Some("210000000003139471430009017".into()),
        reference_type: ReferenceType::Qrr,
        message: None,
    }
}

fn build_invoice(lines: usize) -> DocumentData {
    let mut builder = DocumentBuilder::invoice(format!("BENCH-{lines}"), test_date())
        .due_date(test_date())
        .sender(
            PartyBuilder::new(
                "Benchmark AG",
                AddressBuilder::new("8001", "Zürich", "CH")
                    .street("Bahnhofstrasse")
                    .building_number("1")
                    .build(),
            )
            .vat_number("CHE-123.456.789 MWST")
            .build(),
        )
        .recipient(
            PartyBuilder::new("Kunde AG", AddressBuilder::new("3011", "Bern", "CH").build()).build(),
        );

    for i in 1..=lines {
        let mut line = LineItemBuilder::new(format!("Service item {i}"), dec!(1.5), "h", dec!(120))
            .tva_rate(if i % 4 == 0 { dec!(2.6) } else { dec!(8.1) })
            .detail("Remote");
        if i % 7 == 0 {
            line = line.discount(Discount::percent(dec!(10)));
        }
        builder = builder.add_line(line.build());
    }

    let mut invoice = builder.build().unwrap();
    invoice.payment = Some(payment(invoice.total));
    invoice
}

fn bench_totals(c: &mut Criterion) {
    let lines: Vec<TotalsLine> = (1..=1000)
        .map(|i| TotalsLine {
            subtotal_after_discount: dec!(9.95) * rust_decimal::Decimal::from(i),
            tva_rate: if i % 3 == 0 { dec!(2.6) } else { dec!(8.1) },
        })
        .collect();
    let discount = Discount::percent(dec!(5));
    c.bench_function("totals_1000_lines", |b| {
        b.iter(|| {
            black_box(compute_invoice_totals(
                black_box(&lines),
                Some(&discount),
                Currency::Chf,
            ))
        });
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_invoice_10_lines", |b| {
        b.iter(|| black_box(build_invoice(10)));
    });
}

fn bench_render(c: &mut Criterion) {
    let renderer = DocumentRenderer::new();
    let short = build_invoice(10);
    let long = build_invoice(60);

    c.bench_function("render_10_lines", |b| {
        b.iter(|| black_box(renderer.render(black_box(&short))));
    });
    c.bench_function("render_60_lines", |b| {
        b.iter(|| black_box(renderer.render(black_box(&long))));
    });

    let rendered = renderer.render(&long);
    c.bench_function("pdf_60_lines", |b| {
        b.iter(|| black_box(rendered.to_pdf()));
    });
}

criterion_group!(benches, bench_totals, bench_build, bench_render);
criterion_main!(benches);
