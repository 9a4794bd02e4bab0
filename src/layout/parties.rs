//! Parties phase: recipient on the left, dates on the right.

use super::RenderContext;
use super::cursor::LayoutCursor;
use super::format::format_date;
use super::metrics::{FontWeight, line_height, truncate_to_width};
use super::page::PageStream;

const DATE_COLUMN_WIDTH: f32 = 180.0;

/// Returns a cursor below whichever column ended lower.
pub(crate) fn draw_parties(
    cursor: LayoutCursor,
    ctx: &RenderContext<'_>,
    stream: &mut PageStream,
) -> LayoutCursor {
    let theme = ctx.theme;
    let geo = &theme.layout;
    let size = theme.fonts.body;
    let lh = line_height(size);
    let text = theme.palette.text;
    let muted = theme.palette.muted_text;

    let left_width = geo.content_width() - DATE_COLUMN_WIDTH - 20.0;
    let recipient = &ctx.data.recipient;
    let mut left_y = cursor.y;
    let mut lines = vec![(recipient.name.clone(), FontWeight::Bold)];
    lines.extend(
        recipient
            .address
            .lines()
            .into_iter()
            .map(|l| (l, FontWeight::Regular)),
    );
    if let Some(vat) = &recipient.vat_number {
        lines.push((format!("{} {vat}", ctx.labels.vat_number), FontWeight::Regular));
    }
    for (line, weight) in &lines {
        let line = truncate_to_width(line, *weight, size, left_width);
        stream.text(cursor.x, left_y + size, &line, *weight, size, text);
        left_y += lh;
    }

    let label_x = geo.content_right() - DATE_COLUMN_WIDTH;
    let mut right_y = cursor.y;
    let mut dates = vec![(ctx.labels.date, ctx.data.issue_date)];
    if let Some(date) = ctx.data.secondary_date() {
        dates.push((ctx.labels.secondary_date(ctx.data.kind), date));
    }
    for (label, date) in dates {
        stream.text(label_x, right_y + size, label, FontWeight::Regular, size, muted);
        stream.text_right(
            geo.content_right(),
            right_y + size,
            &format_date(date),
            FontWeight::Bold,
            size,
            text,
        );
        right_y += lh;
    }

    cursor.at_y(left_y.max(right_y) + 20.0)
}
