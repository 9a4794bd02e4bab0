//! The layout cursor and the phase sequence.
//!
//! Every phase takes the cursor left by the previous one and returns the
//! next: `cursor' = phase(cursor, ...)`. Nothing else carries position.

use serde::Serialize;
use tracing::debug;

use super::page::PageStream;
use crate::theme::Theme;

/// Render phases in their only legal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Phase {
    Header,
    Parties,
    ItemTable,
    Totals,
    FooterOrSlip,
    Finalize,
}

impl Phase {
    pub const ORDER: [Phase; 6] = [
        Phase::Header,
        Phase::Parties,
        Phase::ItemTable,
        Phase::Totals,
        Phase::FooterOrSlip,
        Phase::Finalize,
    ];

    /// The phase that must follow this one.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Header => Some(Phase::Parties),
            Phase::Parties => Some(Phase::ItemTable),
            Phase::ItemTable => Some(Phase::Totals),
            Phase::Totals => Some(Phase::FooterOrSlip),
            Phase::FooterOrSlip => Some(Phase::Finalize),
            Phase::Finalize => None,
        }
    }
}

/// Current drawing position: `x`/`y` in points (top-left origin) on page
/// `page`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub x: f32,
    pub y: f32,
    pub page: usize,
}

impl LayoutCursor {
    /// Top-left corner of the content area on the first page.
    pub fn origin(theme: &Theme) -> Self {
        Self {
            x: theme.layout.margin_left,
            y: theme.layout.margin_top,
            page: 0,
        }
    }

    pub fn down(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    pub fn at_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Whether a block of `height` starting at the cursor stays above the
    /// bottom safety margin.
    pub fn fits(self, height: f32, theme: &Theme) -> bool {
        self.y + height <= theme.layout.safe_bottom()
    }

    /// Open a fresh page and return a cursor at its top margin.
    pub fn next_page(self, stream: &mut PageStream, theme: &Theme) -> Self {
        let page = stream.new_page();
        debug!(page, from_y = self.y, "page break");
        Self {
            x: theme.layout.margin_left,
            y: theme.layout.margin_top,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeName;

    #[test]
    fn phase_sequence_is_linear() {
        let mut phase = Phase::Header;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            seen.push(next);
            phase = next;
        }
        assert_eq!(seen, Phase::ORDER);
    }

    #[test]
    fn next_page_resets_to_top_margin() {
        let theme = ThemeName::Classic.base();
        let mut stream = PageStream::new(theme.layout.page_width, theme.layout.page_height);
        let cursor = LayoutCursor::origin(&theme).down(500.0);
        let next = cursor.next_page(&mut stream, &theme);
        assert_eq!(next.page, 1);
        assert_eq!(next.y, theme.layout.margin_top);
        assert_eq!(stream.page_count(), 2);
    }

    #[test]
    fn fits_respects_safety_margin() {
        let theme = ThemeName::Classic.base();
        let bottom = theme.layout.safe_bottom();
        let cursor = LayoutCursor::origin(&theme).at_y(bottom - 10.0);
        assert!(cursor.fits(10.0, &theme));
        assert!(!cursor.fits(10.5, &theme));
    }
}
