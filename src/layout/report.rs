use serde::Serialize;

use super::cursor::Phase;

/// Where things ended up during a render. Returned with every
/// [`RenderedDocument`](super::RenderedDocument) so callers and tests can
/// inspect pagination without parsing the PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Phases in the order they ran.
    pub phases: Vec<Phase>,
    /// One entry per item-table row, in document order.
    pub rows: Vec<RowPlacement>,
    /// Pages on which the item-table header was drawn.
    pub table_header_pages: Vec<usize>,
    /// Page carrying the totals block.
    pub totals_page: Option<usize>,
    /// Reader-facing notices that were printed (missing slip, diagnostics).
    pub notices: Vec<String>,
    pub slip: SlipOutcome,
    /// Sender lines that did not fit the fixed header height.
    pub sender_lines_dropped: usize,
    /// Whether a logo was drawn.
    pub logo_drawn: bool,
}

/// Vertical extent of one item-table row (discount sub-row included).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowPlacement {
    /// Index into `DocumentData::lines`.
    pub index: usize,
    pub page: usize,
    pub top: f32,
    pub bottom: f32,
}

/// What happened to the payment slip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlipOutcome {
    /// Quotes never carry a slip.
    #[default]
    NotApplicable,
    /// Switched off in the render settings.
    Disabled,
    /// Invoice without payment data; a footer warning was printed.
    MissingData,
    /// Slip drawn at the bottom of `page`.
    Attached { page: usize },
    /// Mapping or drawing failed; a diagnostic page was appended at `page`.
    Failed { page: usize, error: String },
}

impl SlipOutcome {
    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached { .. })
    }

    /// Page holding the slip, if one was drawn.
    pub fn slip_page(&self) -> Option<usize> {
        match self {
            Self::Attached { page } => Some(*page),
            _ => None,
        }
    }
}
