//! The append-only page stream every phase draws into.
//!
//! Coordinates are PDF points with the origin at the top-left corner of the
//! page and y growing downwards; text `y` is the baseline. The PDF writer
//! flips the axis.

use super::metrics::{FontWeight, text_width};
use super::report::LayoutReport;
use crate::core::FakturaError;
use crate::theme::Rgb;

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        weight: FontWeight,
        size: f32,
        color: Rgb,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        stroke: Option<Rgb>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb,
        dashed: bool,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        /// Index into [`RenderedDocument::images`].
        image: usize,
    },
}

impl DrawOp {
    /// Lowest y this op touches.
    pub fn bottom(&self) -> f32 {
        match self {
            Self::Text { y, size, .. } => y + size * 0.25,
            Self::Rect { y, height, .. } | Self::Image { y, height, .. } => y + height,
            Self::Line { y1, y2, .. } => y1.max(*y2),
        }
    }
}

/// An RGB raster ready to be embedded (8 bits per channel, row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// All text on the page in drawing order, one op per line.
    pub fn text(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pages under construction. Ops are only ever appended to the last page;
/// [`PageStream::finalize`] consumes the stream, so nothing can be drawn
/// once a document is finished.
#[derive(Debug)]
pub struct PageStream {
    width: f32,
    height: f32,
    pages: Vec<Page>,
    images: Vec<RasterImage>,
}

impl PageStream {
    /// A stream holding one empty page.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: vec![Page::default()],
            images: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the page being drawn on.
    pub fn current_page(&self) -> usize {
        self.pages.len() - 1
    }

    /// Start a new page and return its index.
    pub fn new_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.current_page()
    }

    pub fn add_image(&mut self, image: RasterImage) -> usize {
        self.images.push(image);
        self.images.len() - 1
    }

    pub fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    pub fn extend(&mut self, ops: impl IntoIterator<Item = DrawOp>) {
        for op in ops {
            self.push(op);
        }
    }

    pub fn text(&mut self, x: f32, y: f32, text: &str, weight: FontWeight, size: f32, color: Rgb) {
        if text.is_empty() {
            return;
        }
        self.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            weight,
            size,
            color,
        });
    }

    /// Text whose right edge sits at `right`.
    pub fn text_right(
        &mut self,
        right: f32,
        y: f32,
        text: &str,
        weight: FontWeight,
        size: f32,
        color: Rgb,
    ) {
        let x = right - text_width(text, weight, size);
        self.text(x, y, text, weight, size, color);
    }

    pub fn text_centered(
        &mut self,
        center: f32,
        y: f32,
        text: &str,
        weight: FontWeight,
        size: f32,
        color: Rgb,
    ) {
        let x = center - text_width(text, weight, size) / 2.0;
        self.text(x, y, text, weight, size, color);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgb) {
        self.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill: Some(fill),
            stroke: None,
        });
    }

    pub fn hline(&mut self, x1: f32, x2: f32, y: f32, width: f32, color: Rgb) {
        self.push(DrawOp::Line {
            x1,
            y1: y,
            x2,
            y2: y,
            width,
            color,
            dashed: false,
        });
    }

    /// Close the stream. `stamp` may append final ops (page numbers) to each
    /// page; it receives the page index and the page count.
    pub fn finalize(
        mut self,
        title: String,
        report: LayoutReport,
        stamp: impl Fn(usize, usize) -> Vec<DrawOp>,
    ) -> RenderedDocument {
        let count = self.pages.len();
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.ops.extend(stamp(index, count));
        }
        RenderedDocument {
            title,
            width: self.width,
            height: self.height,
            pages: self.pages,
            images: self.images,
            report,
        }
    }
}

/// A finished document. Page count, text and figures are stable for
/// identical input.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Document title for the PDF metadata, e.g. "Invoice RE-2026-001".
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
    pub images: Vec<RasterImage>,
    pub report: LayoutReport,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_text(&self, index: usize) -> Option<String> {
        self.pages.get(index).map(Page::text)
    }

    /// Text of all pages, pages separated by a blank line.
    pub fn text(&self) -> String {
        self.pages
            .iter()
            .map(Page::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Serialize to PDF bytes.
    pub fn to_pdf(&self) -> Result<Vec<u8>, FakturaError> {
        super::pdf::write_pdf(self)
    }
}
