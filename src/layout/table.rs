//! Item table phase.
//!
//! Every row is measured before anything is drawn, so the drawn height is
//! the wrapped height and the page-break decision is made on real numbers.

use tracing::debug;

use super::RenderContext;
use super::cursor::LayoutCursor;
use super::format::{format_amount, format_quantity, format_rate};
use super::metrics::{FontWeight, line_height, wrap_text};
use super::page::PageStream;
use super::report::{LayoutReport, RowPlacement};
use crate::core::{DiscountType, LineItem, compute_line_discount};
use crate::theme::{Rgb, Theme, resolve_text_color};

/// Column share of the content width: description, quantity, unit price,
/// line total.
pub const COLUMN_SHARES: [f32; 4] = [0.5, 0.1, 0.2, 0.2];
const PAD: f32 = 5.0;

#[derive(Debug, Clone, Copy)]
struct Columns {
    x: [f32; 4],
    width: [f32; 4],
}

impl Columns {
    fn new(theme: &Theme) -> Self {
        let total = theme.layout.content_width();
        let mut x = [0.0; 4];
        let mut width = [0.0; 4];
        let mut left = theme.layout.margin_left;
        for (i, share) in COLUMN_SHARES.iter().enumerate() {
            x[i] = left;
            width[i] = total * share;
            left += width[i];
        }
        Self { x, width }
    }

    fn right(&self, column: usize) -> f32 {
        self.x[column] + self.width[column] - PAD
    }

    fn inner(&self, column: usize) -> f32 {
        self.width[column] - 2.0 * PAD
    }
}

/// A row measured and ready to draw.
struct MeasuredRow {
    description: Vec<String>,
    detail: Vec<String>,
    quantity: Vec<String>,
    unit_price: String,
    total: String,
    discount: Option<(String, String)>,
    main_height: f32,
    height: f32,
}

fn measure_row(line: &LineItem, ctx: &RenderContext<'_>, cols: &Columns) -> MeasuredRow {
    let fonts = &ctx.theme.fonts;
    let body_lh = line_height(fonts.body);
    let small_lh = line_height(fonts.small);

    let description = wrap_text(&line.description, FontWeight::Bold, fonts.body, cols.inner(0));
    let detail = line
        .detail
        .as_deref()
        .map(|d| wrap_text(d, FontWeight::Regular, fonts.small, cols.inner(0)))
        .unwrap_or_default();
    let quantity_text = format!(
        "{} {}",
        format_quantity(line.quantity, ctx.data.settings.quantity_decimals()),
        line.unit
    );
    let quantity = wrap_text(quantity_text.trim(), FontWeight::Regular, fonts.body, cols.inner(1));

    let label_height = (description.len().max(1)) as f32 * body_lh + detail.len() as f32 * small_lh;
    let main_height = label_height.max(quantity.len() as f32 * body_lh) + 2.0 * PAD;

    let discount = line.discount.as_ref().map(|d| {
        let amounts = compute_line_discount(
            line.unit_price,
            line.quantity,
            Some(d),
            ctx.data.currency,
        );
        let label = match d.kind {
            DiscountType::Percent => format!("{} {}", ctx.labels.discount, format_rate(d.value)),
            DiscountType::Amount => ctx.labels.discount.to_string(),
        };
        (label, format!("-{}", format_amount(amounts.discount_amount)))
    });
    let discount_height = if discount.is_some() {
        small_lh + PAD
    } else {
        0.0
    };

    MeasuredRow {
        description,
        detail,
        quantity,
        unit_price: format_amount(line.unit_price),
        total: format_amount(line.line_total),
        discount,
        main_height,
        height: main_height + discount_height,
    }
}

fn header_height(theme: &Theme) -> f32 {
    line_height(theme.fonts.table_header) + 2.0 * PAD
}

fn draw_table_header(
    cursor: LayoutCursor,
    ctx: &RenderContext<'_>,
    cols: &Columns,
    stream: &mut PageStream,
    report: &mut LayoutReport,
) -> LayoutCursor {
    let theme = ctx.theme;
    let size = theme.fonts.table_header;
    let height = header_height(theme);
    let background = theme.palette.table_header_background;
    let ink = resolve_text_color(background, theme.palette.text, Rgb::WHITE);

    stream.fill_rect(
        theme.layout.margin_left,
        cursor.y,
        theme.layout.content_width(),
        height,
        background,
    );
    if background == Rgb::WHITE {
        stream.hline(
            theme.layout.margin_left,
            theme.layout.content_right(),
            cursor.y + height,
            0.8,
            theme.palette.primary,
        );
    }

    let baseline = cursor.y + PAD + size;
    let labels = ctx.labels;
    stream.text(cols.x[0] + PAD, baseline, labels.description, FontWeight::Bold, size, ink);
    stream.text_right(cols.right(1), baseline, labels.quantity, FontWeight::Bold, size, ink);
    stream.text_right(cols.right(2), baseline, labels.unit_price, FontWeight::Bold, size, ink);
    stream.text_right(cols.right(3), baseline, labels.line_total, FontWeight::Bold, size, ink);

    report.table_header_pages.push(cursor.page);
    cursor.down(height)
}

/// Draw the header row and every line item, breaking pages between rows.
pub(crate) fn draw_item_table(
    cursor: LayoutCursor,
    ctx: &RenderContext<'_>,
    stream: &mut PageStream,
    report: &mut LayoutReport,
) -> LayoutCursor {
    let theme = ctx.theme;
    let palette = &theme.palette;
    let fonts = &theme.fonts;
    let cols = Columns::new(theme);
    let zebra = palette.alt_row_background != palette.row_background;

    let mut cursor = cursor;
    let first_row = ctx
        .data
        .lines
        .first()
        .map_or(0.0, |l| measure_row(l, ctx, &cols).height);
    if !cursor.fits(header_height(theme) + first_row, theme) {
        cursor = cursor.next_page(stream, theme);
    }
    cursor = draw_table_header(cursor, ctx, &cols, stream, report);
    let fresh_page_y = theme.layout.margin_top + header_height(theme);

    for (index, line) in ctx.data.lines.iter().enumerate() {
        let row = measure_row(line, ctx, &cols);

        // A row taller than a whole page is drawn where it starts.
        if !cursor.fits(row.height, theme) && cursor.y > fresh_page_y {
            cursor = cursor.next_page(stream, theme);
            debug!(row = index, page = cursor.page, "item table continues");
            cursor = draw_table_header(cursor, ctx, &cols, stream, report);
        }

        let top = cursor.y;
        let background = if zebra && index % 2 == 1 {
            palette.alt_row_background
        } else {
            palette.row_background
        };
        if background != Rgb::WHITE {
            stream.fill_rect(
                theme.layout.margin_left,
                top,
                theme.layout.content_width(),
                row.height,
                background,
            );
        }

        let body_lh = line_height(fonts.body);
        let small_lh = line_height(fonts.small);
        let mut y = top + PAD;
        for text in &row.description {
            stream.text(cols.x[0] + PAD, y + fonts.body, text, FontWeight::Bold, fonts.body, palette.text);
            y += body_lh;
        }
        for text in &row.detail {
            stream.text(
                cols.x[0] + PAD,
                y + fonts.small,
                text,
                FontWeight::Regular,
                fonts.small,
                palette.muted_text,
            );
            y += small_lh;
        }

        let first_baseline = top + PAD + fonts.body;
        for (i, text) in row.quantity.iter().enumerate() {
            stream.text_right(
                cols.right(1),
                first_baseline + i as f32 * body_lh,
                text,
                FontWeight::Regular,
                fonts.body,
                palette.text,
            );
        }
        stream.text_right(cols.right(2), first_baseline, &row.unit_price, FontWeight::Regular, fonts.body, palette.text);
        stream.text_right(cols.right(3), first_baseline, &row.total, FontWeight::Bold, fonts.body, palette.text);

        if let Some((label, amount)) = &row.discount {
            let baseline = top + row.main_height + fonts.small;
            stream.text(cols.x[0] + PAD, baseline, label, FontWeight::Regular, fonts.small, palette.warning);
            stream.text_right(cols.right(3), baseline, amount, FontWeight::Regular, fonts.small, palette.warning);
        }

        let bottom = top + row.height;
        stream.hline(
            theme.layout.margin_left,
            theme.layout.content_right(),
            bottom,
            0.5,
            palette.border,
        );
        report.rows.push(RowPlacement {
            index,
            page: cursor.page,
            top,
            bottom,
        });
        cursor = cursor.at_y(bottom);
    }

    cursor.down(14.0)
}
