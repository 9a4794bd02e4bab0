//! FooterOrSlip phase: payment slip, diagnostic page, or a footer line.

use tracing::{debug, warn};

use super::RenderContext;
use super::cursor::LayoutCursor;
use super::metrics::{FontWeight, line_height, text_width, wrap_text};
use super::page::PageStream;
use super::qrbill::SlipArea;
use super::report::{LayoutReport, SlipOutcome};
use crate::core::DocumentKind;
use crate::slip::{QrPaymentData, SlipError, map_payment_data};
use crate::theme::Rgb;

/// Space kept free above the slip for the separation label.
const SLIP_CLEARANCE: f32 = 12.0;

pub(crate) fn draw_footer_or_slip(
    cursor: LayoutCursor,
    ctx: &RenderContext<'_>,
    stream: &mut PageStream,
    report: &mut LayoutReport,
) -> LayoutCursor {
    let data = ctx.data;
    if data.kind == DocumentKind::Quote {
        report.slip = SlipOutcome::NotApplicable;
        footer_line(ctx, stream, ctx.labels.courtesy, false);
        return cursor;
    }
    if !data.settings.payment_slip {
        report.slip = SlipOutcome::Disabled;
        footer_line(ctx, stream, ctx.labels.courtesy, false);
        return cursor;
    }
    let Some(payment) = &data.payment else {
        warn!(number = %data.number, "invoice has no payment data, slip omitted");
        report.slip = SlipOutcome::MissingData;
        report.notices.push(ctx.labels.missing_slip.to_string());
        footer_line(ctx, stream, ctx.labels.missing_slip, true);
        return cursor;
    };

    let area = SlipArea::bottom_of_page(stream.width(), stream.height());
    let rendered = map_payment_data(payment)
        .and_then(|payload| ctx.slip.render(&payload, data.language, area));
    match rendered {
        Ok(ops) => {
            let mut cursor = cursor;
            if cursor.y > area.y - SLIP_CLEARANCE {
                cursor = cursor.next_page(stream, ctx.theme);
            }
            stream.extend(ops);
            debug!(page = cursor.page, "payment slip attached");
            report.slip = SlipOutcome::Attached { page: cursor.page };
            cursor.at_y(area.y + area.height)
        }
        Err(error) => {
            warn!(number = %data.number, %error, "payment slip failed, adding diagnostic page");
            diagnostic_page(cursor, ctx, stream, report, payment, &error)
        }
    }
}

/// Single centered line in the page footer area.
fn footer_line(ctx: &RenderContext<'_>, stream: &mut PageStream, text: &str, warning: bool) {
    let theme = ctx.theme;
    let geo = &theme.layout;
    let color = if warning {
        theme.palette.warning
    } else {
        theme.palette.muted_text
    };
    let weight = if warning {
        FontWeight::Bold
    } else {
        FontWeight::Regular
    };
    let y = geo.safe_bottom() + 20.0;
    stream.text_centered(geo.page_width / 2.0, y, text, weight, theme.fonts.small, color);
}

/// A page that tells the issuer what went wrong and shows the raw data.
fn diagnostic_page(
    cursor: LayoutCursor,
    ctx: &RenderContext<'_>,
    stream: &mut PageStream,
    report: &mut LayoutReport,
    payment: &QrPaymentData,
    error: &SlipError,
) -> LayoutCursor {
    let theme = ctx.theme;
    let geo = &theme.layout;
    let fonts = &theme.fonts;
    let palette = &theme.palette;
    let labels = ctx.labels;
    let width = geo.content_width();

    let mut cursor = cursor.next_page(stream, theme);
    let page = cursor.page;

    let mut write = |cursor: LayoutCursor,
                     text: &str,
                     weight: FontWeight,
                     size: f32,
                     color: Rgb|
     -> LayoutCursor {
        let indent = text_width(&text[..text.len() - text.trim_start().len()], weight, size);
        let mut cursor = cursor;
        for line in wrap_text(text, weight, size, width - indent) {
            if !cursor.fits(line_height(size), theme) {
                cursor = cursor.next_page(stream, theme);
            }
            stream.text(cursor.x + indent, cursor.y + size, &line, weight, size, color);
            cursor = cursor.down(line_height(size));
        }
        cursor
    };

    cursor = write(cursor, labels.diagnostic_title, FontWeight::Bold, fonts.title, palette.warning);
    cursor = write(cursor.down(6.0), labels.diagnostic_intro, FontWeight::Regular, fonts.body, palette.text);

    cursor = write(cursor.down(10.0), labels.diagnostic_cause, FontWeight::Bold, fonts.heading, palette.text);
    cursor = write(cursor, &error.to_string(), FontWeight::Regular, fonts.body, palette.text);
    if let SlipError::MissingCreditorFields(fields) = error {
        for field in fields {
            cursor = write(cursor, &format!("- {field}"), FontWeight::Regular, fonts.body, palette.text);
        }
    }

    let payload = serde_json::to_string_pretty(payment).unwrap_or_else(|e| format!("{payment:#?} ({e})"));
    cursor = write(cursor.down(10.0), labels.diagnostic_payload, FontWeight::Bold, fonts.heading, palette.text);
    for line in payload.lines() {
        cursor = write(cursor, line, FontWeight::Regular, fonts.small, palette.muted_text);
    }

    report
        .notices
        .push(format!("{}: {error}", labels.diagnostic_title));
    report.slip = SlipOutcome::Failed {
        page,
        error: error.to_string(),
    };
    cursor
}
