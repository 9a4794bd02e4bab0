//! Document layout engine.
//!
//! A render runs the phases Header, Parties, ItemTable, Totals,
//! FooterOrSlip and Finalize in that order. Each phase receives the
//! [`LayoutCursor`] left by the previous one and returns the next, drawing
//! into an append-only [`PageStream`]. Finalize consumes the stream.
//!
//! ```no_run
//! use qrfaktura::layout::DocumentRenderer;
//! # fn doc() -> qrfaktura::core::DocumentData { unimplemented!() }
//!
//! let rendered = DocumentRenderer::new().render(&doc());
//! let pdf = rendered.to_pdf().unwrap();
//! std::fs::write("invoice.pdf", pdf).unwrap();
//! ```

mod assets;
mod cursor;
mod footer;
pub mod format;
mod header;
mod labels;
mod metrics;
mod page;
mod parties;
mod pdf;
mod qrbill;
mod report;
mod table;
mod totals;

pub use assets::{AssetLoader, FsAssetLoader, MemoryAssets, NoAssets, decode_image};
pub use cursor::{LayoutCursor, Phase};
pub use labels::Labels;
pub use metrics::{FontWeight, LINE_SPACING, line_height, text_width, truncate_to_width, wrap_text};
pub use page::{DrawOp, Page, PageStream, RasterImage, RenderedDocument};
pub use qrbill::{MM, RECEIPT_WIDTH, SLIP_HEIGHT, SlipArea, SlipRenderer, SwissQrBillRenderer};
pub use report::{LayoutReport, RowPlacement, SlipOutcome};
pub use table::COLUMN_SHARES;
pub use totals::TotalsEntry;

use tracing::{debug, info};

use crate::core::DocumentData;
use crate::theme::{Rgb, Theme};

/// Everything a phase reads. Phases never mutate it.
pub(crate) struct RenderContext<'a> {
    pub data: &'a DocumentData,
    pub theme: &'a Theme,
    pub labels: &'static Labels,
    pub assets: &'a dyn AssetLoader,
    pub slip: &'a dyn SlipRenderer,
}

/// Renders documents with a fixed set of collaborators. Holds no
/// per-document state and can be shared between threads.
pub struct DocumentRenderer {
    assets: Box<dyn AssetLoader>,
    slip: Box<dyn SlipRenderer>,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer {
    /// No assets, built-in Swiss QR-bill renderer.
    pub fn new() -> Self {
        Self {
            assets: Box::new(NoAssets),
            slip: Box::new(SwissQrBillRenderer),
        }
    }

    pub fn with_assets(mut self, assets: impl AssetLoader + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    pub fn with_slip_renderer(mut self, slip: impl SlipRenderer + 'static) -> Self {
        self.slip = Box::new(slip);
        self
    }

    /// Render with the theme resolved from the document's own settings.
    pub fn render(&self, data: &DocumentData) -> RenderedDocument {
        let theme = Theme::from_settings(&data.settings);
        self.render_with_theme(data, &theme)
    }

    pub fn render_with_theme(&self, data: &DocumentData, theme: &Theme) -> RenderedDocument {
        render_document(data, theme, self.assets.as_ref(), self.slip.as_ref())
    }
}

/// Lay out `data` with an already resolved `theme`.
///
/// Never fails: a missing logo renders without it, and payment slip
/// problems end up as readable text in the document.
#[tracing::instrument(skip_all, fields(number = %data.number, kind = ?data.kind))]
pub fn render_document(
    data: &DocumentData,
    theme: &Theme,
    assets: &dyn AssetLoader,
    slip: &dyn SlipRenderer,
) -> RenderedDocument {
    let labels = Labels::for_language(data.language);
    let ctx = RenderContext {
        data,
        theme,
        labels,
        assets,
        slip,
    };
    let mut stream = PageStream::new(theme.layout.page_width, theme.layout.page_height);
    let mut report = LayoutReport::default();

    let mut cursor = LayoutCursor::origin(theme);
    let mut next = Some(Phase::Header);
    while let Some(phase) = next {
        debug!(?phase, page = cursor.page, y = cursor.y, "entering phase");
        report.phases.push(phase);
        cursor = match phase {
            Phase::Header => header::draw_header(cursor, &ctx, &mut stream, &mut report),
            Phase::Parties => parties::draw_parties(cursor, &ctx, &mut stream),
            Phase::ItemTable => table::draw_item_table(cursor, &ctx, &mut stream, &mut report),
            Phase::Totals => totals::draw_totals(cursor, &ctx, &mut stream, &mut report),
            Phase::FooterOrSlip => {
                footer::draw_footer_or_slip(cursor, &ctx, &mut stream, &mut report)
            }
            Phase::Finalize => break,
        };
        next = phase.next();
    }

    let title = format!("{} {}", labels.title(data.kind), data.number);
    let stamp = page_number_stamp(&ctx, report.slip.slip_page());
    let rendered = stream.finalize(title, report, stamp);
    info!(pages = rendered.page_count(), "document rendered");
    rendered
}

/// "Page n / m" at the bottom right of every page except the one carrying
/// the payment slip.
fn page_number_stamp(
    ctx: &RenderContext<'_>,
    slip_page: Option<usize>,
) -> impl Fn(usize, usize) -> Vec<DrawOp> {
    let enabled = ctx.data.settings.page_numbers;
    let label = ctx.labels.page;
    let geo = ctx.theme.layout.clone();
    let size = ctx.theme.fonts.small;
    let color: Rgb = ctx.theme.palette.muted_text;

    move |index, count| {
        if !enabled || slip_page == Some(index) {
            return Vec::new();
        }
        let text = format!("{label} {} / {count}", index + 1);
        let x = geo.content_right() - text_width(&text, FontWeight::Regular, size);
        vec![DrawOp::Text {
            x,
            y: geo.page_height - geo.margin_bottom / 2.0,
            text,
            weight: FontWeight::Regular,
            size,
            color,
        }]
    }
}
