//! Render a sample invoice with a QR-bill to `invoice.pdf`.
//!
//! ```sh
//! cargo run --example render_invoice -- [theme] [assets-dir]
//! ```
//!
//! With an assets directory, `logo.png` inside it is printed in the header.

use chrono::NaiveDate;
use qrfaktura::core::*;
use qrfaktura::layout::{DocumentRenderer, FsAssetLoader};
use qrfaktura::slip::*;
use qrfaktura::theme::{RenderSettings, ThemeName};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qrfaktura=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let theme = args
        .next()
        .and_then(|name| ThemeName::from_name(&name))
        .unwrap_or_default();
    let assets_dir = args.next();

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).ok_or("invalid date");

    let mut sender = PartyBuilder::new(
        "Robert Schneider AG",
        AddressBuilder::new("2501", "Biel", "CH")
            .street("Rue du Lac")
            .building_number("1268")
            .build(),
    )
    .vat_number("CHE-123.456.789 MWST")
    .iban("CH44 3199 9123 0008 8901 2")
    .email("billing@schneider.ch")
    .website("www.schneider.ch");
    if assets_dir.is_some() {
        sender = sender.logo("logo.png");
    }

    let mut invoice = DocumentBuilder::invoice("RE-2026-0042", date(2026, 3, 2)?)
        .due_date(date(2026, 4, 1)?)
        .language(Language::De)
        .settings(RenderSettings {
            theme,
            ..Default::default()
        })
        .sender(sender.build())
        .recipient(
            PartyBuilder::new(
                "Pia-Maria Rutschmann-Schnyder",
                AddressBuilder::new("9400", "Rorschach", "CH")
                    .street("Grosse Marktgasse")
                    .building_number("28")
                    .build(),
            )
            .build(),
        )
        .add_line(
            LineItemBuilder::new("Beratung", dec!(12.5), "h", dec!(140))
                .tva_rate(dec!(8.1))
                .detail("Konzept und Workshops, März 2026")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Fachliteratur", dec!(3), "Stk.", dec!(48.90))
                .tva_rate(dec!(2.6))
                .discount(Discount::percent(dec!(10)))
                .build(),
        )
        .global_discount(dec!(5), DiscountType::Percent, Some("Treuerabatt".into()))
        .build()?;

    invoice.payment = Some(QrPaymentData {
        creditor: QrCreditor {
            name: Some("Robert Schneider AG".into()),
            address: Some("Rue du Lac".into()),
            building_number: Some("1268".into()),
            postal_code: Some("2501".into()),
            city: Some("Biel".into()),
            country: Some("CH".into()),
            account: Some("CH44 3199 9123 0008 8901 2".into()),
        },
        debtor: Some(QrDebtor {
            name: Some("Pia-Maria Rutschmann-Schnyder".into()),
            address: Some("Grosse Marktgasse".into()),
            building_number: Some("28".into()),
            postal_code: Some("9400".into()),
            city: Some("Rorschach".into()),
            country: Some("CH".into()),
        }),
        amount: Some(invoice.total),
        currency: Currency::Chf,
        reference: Some("210000000003139471430009017".into()),
        reference_type: ReferenceType::Qrr,
        message: Some(format!("Rechnung {}", invoice.number)),
    });

    let mut renderer = DocumentRenderer::new();
    if let Some(dir) = assets_dir {
        renderer = renderer.with_assets(FsAssetLoader::new(dir));
    }
    let rendered = renderer.render(&invoice);

    for notice in &rendered.report.notices {
        eprintln!("notice: {notice}");
    }
    println!("Total:  {} {}", invoice.total, invoice.currency.code());
    println!("Pages:  {}", rendered.page_count());
    println!("Slip:   {:?}", rendered.report.slip);

    std::fs::write("invoice.pdf", rendered.to_pdf()?)?;
    println!("Wrote invoice.pdf");
    Ok(())
}
