//! Header phase: background band, logo, title and sender block.

use tracing::{debug, warn};

use super::RenderContext;
use super::assets::decode_image;
use super::cursor::LayoutCursor;
use super::metrics::{FontWeight, line_height, text_width, truncate_to_width};
use super::page::{DrawOp, PageStream};
use super::report::LayoutReport;
use crate::slip::format_iban;
use crate::theme::{LogoPosition, Rgb, resolve_text_color};

const GAP: f32 = 12.0;

struct PlacedLogo {
    x: f32,
    width: f32,
}

pub(crate) fn draw_header(
    cursor: LayoutCursor,
    ctx: &RenderContext<'_>,
    stream: &mut PageStream,
    report: &mut LayoutReport,
) -> LayoutCursor {
    let theme = ctx.theme;
    let geo = &theme.layout;
    let palette = &theme.palette;
    let header_bottom = geo.margin_top + geo.header_height;

    if palette.header_background != Rgb::WHITE {
        stream.fill_rect(0.0, 0.0, geo.page_width, header_bottom, palette.header_background);
    }
    let ink = resolve_text_color(palette.header_background, palette.text, Rgb::WHITE);
    let muted = resolve_text_color(
        palette.header_background,
        palette.muted_text,
        Rgb::new(0xE2, 0xE8, 0xF0),
    );

    let logo = place_logo(ctx, stream, report);

    // Title goes to the side the logo does not occupy.
    let title_left = geo.logo_position == LogoPosition::Right;
    let title = ctx.labels.title(ctx.data.kind);
    let number = format!("{} {}", ctx.labels.number, ctx.data.number);
    let title_size = theme.fonts.title;
    let number_size = theme.fonts.body;
    let title_y = geo.margin_top + title_size;
    let number_y = title_y + line_height(number_size) + 2.0;
    if title_left {
        stream.text(geo.margin_left, title_y, title, FontWeight::Bold, title_size, ink);
        stream.text(geo.margin_left, number_y, &number, FontWeight::Regular, number_size, muted);
    } else {
        let right = geo.content_right();
        stream.text_right(right, title_y, title, FontWeight::Bold, title_size, ink);
        stream.text_right(right, number_y, &number, FontWeight::Regular, number_size, muted);
    }
    let title_width = text_width(title, FontWeight::Bold, title_size)
        .max(text_width(&number, FontWeight::Regular, number_size));

    // Sender column: beside a left logo, otherwise top-left (below the
    // title when the title is on the left too).
    let (sender_x, sender_top) = match (&logo, geo.logo_position) {
        (Some(l), LogoPosition::Left) => (l.x + l.width + GAP, geo.margin_top),
        _ if title_left => (geo.margin_left, number_y + GAP),
        _ => (geo.margin_left, geo.margin_top),
    };
    let sender_right = if title_left {
        logo.as_ref()
            .map_or(geo.content_right(), |l| l.x - GAP)
    } else {
        let centered_logo_left = match (&logo, geo.logo_position) {
            (Some(l), LogoPosition::Center) => l.x - GAP,
            _ => f32::MAX,
        };
        (geo.content_right() - title_width - GAP).min(centered_logo_left)
    };
    let sender_width = (sender_right - sender_x).max(40.0);

    let dropped = draw_sender(
        ctx,
        stream,
        sender_x,
        sender_top,
        sender_width,
        header_bottom,
        (ink, muted),
    );
    if dropped > 0 {
        debug!(dropped, "sender lines cut to header height");
    }
    report.sender_lines_dropped = dropped;

    cursor.at_y(header_bottom + GAP * 1.5)
}

fn place_logo(
    ctx: &RenderContext<'_>,
    stream: &mut PageStream,
    report: &mut LayoutReport,
) -> Option<PlacedLogo> {
    let reference = ctx.data.sender.logo.as_deref()?;
    let Some(bytes) = ctx.assets.load(reference) else {
        warn!(reference, "logo not found, rendering without it");
        return None;
    };
    let raster = match decode_image(&bytes) {
        Ok(raster) => raster,
        Err(e) => {
            warn!(reference, error = %e, "logo not decodable, rendering without it");
            return None;
        }
    };

    let geo = &ctx.theme.layout;
    let mut height = geo.logo_size.height().min(geo.header_height);
    let mut width = height * raster.width as f32 / raster.height as f32;
    let max_width = geo.content_width() * 0.4;
    if width > max_width {
        height *= max_width / width;
        width = max_width;
    }
    let x = match geo.logo_position {
        LogoPosition::Left => geo.margin_left,
        LogoPosition::Center => (geo.page_width - width) / 2.0,
        LogoPosition::Right => geo.content_right() - width,
    };

    let image = stream.add_image(raster);
    stream.push(DrawOp::Image {
        x,
        y: geo.margin_top,
        width,
        height,
        image,
    });
    report.logo_drawn = true;
    Some(PlacedLogo { x, width })
}

/// Draw as many sender lines as fit above `bottom`; returns how many were
/// left out.
fn draw_sender(
    ctx: &RenderContext<'_>,
    stream: &mut PageStream,
    x: f32,
    top: f32,
    width: f32,
    bottom: f32,
    (ink, muted): (Rgb, Rgb),
) -> usize {
    let sender = &ctx.data.sender;
    let fonts = &ctx.theme.fonts;

    let mut lines: Vec<(String, FontWeight, f32, Rgb)> =
        vec![(sender.name.clone(), FontWeight::Bold, fonts.heading, ink)];
    for line in sender.address.lines() {
        lines.push((line, FontWeight::Regular, fonts.small, muted));
    }
    let contacts = [
        sender
            .vat_number
            .as_ref()
            .map(|v| format!("{} {v}", ctx.labels.vat_number)),
        sender
            .iban
            .as_deref()
            .map(|iban| format!("IBAN {}", format_iban(iban))),
        sender.email.clone(),
        sender.phone.clone(),
        sender.website.clone(),
    ];
    for contact in contacts.into_iter().flatten() {
        lines.push((contact, FontWeight::Regular, fonts.small, muted));
    }

    let mut y = top;
    for (index, (text, weight, size, color)) in lines.iter().enumerate() {
        let height = line_height(*size);
        if y + height > bottom {
            return lines.len() - index;
        }
        let text = truncate_to_width(text, *weight, *size, width);
        stream.text(x, y + size, &text, *weight, *size, *color);
        y += height;
    }
    0
}
