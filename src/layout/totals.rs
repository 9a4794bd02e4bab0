//! Totals phase: the right-aligned summary block.

use rust_decimal::Decimal;

use super::RenderContext;
use super::cursor::LayoutCursor;
use super::format::{format_amount, format_rate};
use super::metrics::{FontWeight, line_height, truncate_to_width};
use super::page::PageStream;
use super::report::LayoutReport;
use crate::core::DiscountType;
use crate::theme::{Rgb, resolve_text_color};

/// Share of the content width taken by the block.
const BLOCK_SHARE: f32 = 0.45;
const BAND_PAD: f32 = 6.0;

/// One label/value pair of the block, as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsEntry {
    pub label: String,
    pub value: String,
}

/// The lines above the grand total, in print order.
pub(crate) fn totals_entries(ctx: &RenderContext<'_>) -> Vec<TotalsEntry> {
    let data = ctx.data;
    let labels = ctx.labels;
    let totals = data.totals();
    let mut entries = vec![TotalsEntry {
        label: labels.subtotal.to_string(),
        value: format_amount(data.subtotal),
    }];

    if let Some(discount) = &data.global_discount {
        let mut label = labels.discount.to_string();
        if discount.kind == DiscountType::Percent {
            label = format!("{label} {}", format_rate(discount.value));
        }
        if let Some(note) = discount.note.as_deref().map(str::trim) {
            if !note.is_empty() {
                label = format!("{label} ({note})");
            }
        }
        entries.push(TotalsEntry {
            label,
            value: format!("-{}", format_amount(totals.global_discount_amount)),
        });
    }

    let taxed: Vec<_> = totals.taxed_buckets().collect();
    if taxed.is_empty() {
        entries.push(TotalsEntry {
            label: format!("{} {}", labels.vat, format_rate(Decimal::ZERO)),
            value: format_amount(Decimal::ZERO),
        });
    } else {
        for bucket in &taxed {
            entries.push(TotalsEntry {
                label: format!("{} {}", labels.vat, format_rate(bucket.rate)),
                value: format_amount(bucket.tva_amount),
            });
        }
    }
    if totals.vat_breakdown.len() > 1 {
        entries.push(TotalsEntry {
            label: labels.vat_total.to_string(),
            value: format_amount(data.tva_amount),
        });
    }
    entries
}

pub(crate) fn draw_totals(
    cursor: LayoutCursor,
    ctx: &RenderContext<'_>,
    stream: &mut PageStream,
    report: &mut LayoutReport,
) -> LayoutCursor {
    let theme = ctx.theme;
    let geo = &theme.layout;
    let fonts = &theme.fonts;
    let palette = &theme.palette;

    let entries = totals_entries(ctx);
    let lh = line_height(fonts.body);
    let band_height = line_height(fonts.total) + 2.0 * BAND_PAD;
    let block_height = entries.len() as f32 * lh + 4.0 + band_height;

    let mut cursor = cursor;
    if !cursor.fits(block_height, theme) {
        cursor = cursor.next_page(stream, theme);
    }

    let right = geo.content_right();
    let width = geo.content_width() * BLOCK_SHARE;
    let left = right - width;
    let label_width = width * 0.6;

    let mut y = cursor.y;
    for entry in &entries {
        let label = truncate_to_width(&entry.label, FontWeight::Regular, fonts.body, label_width);
        stream.text(left, y + fonts.body, &label, FontWeight::Regular, fonts.body, palette.text);
        stream.text_right(right, y + fonts.body, &entry.value, FontWeight::Regular, fonts.body, palette.text);
        y += lh;
    }
    y += 2.0;
    stream.hline(left, right, y, 0.8, palette.border);
    y += 2.0;

    let band = palette.primary;
    let ink = resolve_text_color(band, palette.text, Rgb::WHITE);
    stream.fill_rect(left, y, width, band_height, band);
    let baseline = y + BAND_PAD + fonts.total;
    let label = format!("{} {}", ctx.labels.total, ctx.data.currency);
    stream.text(left + BAND_PAD, baseline, &label, FontWeight::Bold, fonts.total, ink);
    stream.text_right(
        right - BAND_PAD,
        baseline,
        &format_amount(ctx.data.total),
        FontWeight::Bold,
        fonts.total,
        ink,
    );

    report.totals_page = Some(cursor.page);
    cursor.at_y(y + band_height + 16.0)
}
