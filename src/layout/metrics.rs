//! Text measurement for the built-in Helvetica faces.
//!
//! Row heights are derived from these widths, so wrapping here must match
//! what ends up on the page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Line height as a multiple of the font size.
pub const LINE_SPACING: f32 = 1.25;

/// Advance widths (1/1000 em) for ASCII 32..=126, Helvetica.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

/// Advance widths (1/1000 em) for ASCII 32..=126, Helvetica-Bold.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Accented Latin letters measure like their base letter.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        '\u{a0}' => ' ',
        _ => return None,
    };
    Some(base)
}

fn char_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    let c = base_letter(c).unwrap_or(c);
    match c {
        ' '..='~' => table[c as usize - 32],
        'ß' => 611,
        '€' | '«' | '»' | '–' => 556,
        '—' | '…' => 1000,
        '‘' | '’' | '‚' => table[7],
        '•' => 350,
        _ => 556,
    }
}

/// Width of `text` in points.
pub fn text_width(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, weight))).sum();
    units as f32 * size / 1000.0
}

pub fn line_height(size: f32) -> f32 {
    size * LINE_SPACING
}

/// Greedy word wrap into lines no wider than `max_width`.
///
/// Explicit newlines start a new line; words wider than a whole line are
/// broken between characters. Empty input yields no lines.
pub fn wrap_text(text: &str, weight: FontWeight, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    if text.trim().is_empty() {
        return lines;
    }

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width(&candidate, weight, size) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if text_width(word, weight, size) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = break_word(word, weight, size, max_width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        lines.push(current);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn break_word(word: &str, weight: FontWeight, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if text_width(&current, weight, size) > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Cut `text` so it fits `max_width`, ending in an ellipsis when shortened.
pub fn truncate_to_width(text: &str, weight: FontWeight, size: f32, max_width: f32) -> String {
    if text_width(text, weight, size) <= max_width {
        return text.to_string();
    }
    let ellipsis = '…';
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        out.push(ellipsis);
        let fits = text_width(&out, weight, size) <= max_width;
        out.pop();
        if !fits {
            out.pop();
            break;
        }
    }
    out.push(ellipsis);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_printable_ascii() {
        assert_eq!(HELVETICA.len(), ('~' as usize) - (' ' as usize) + 1);
        assert_eq!(char_width('A', FontWeight::Regular), 667);
        assert_eq!(char_width('A', FontWeight::Bold), 722);
        assert_eq!(char_width('~', FontWeight::Regular), 584);
    }

    #[test]
    fn accented_letters_measure_like_base() {
        assert_eq!(
            text_width("Zürich", FontWeight::Regular, 10.0),
            text_width("Zurich", FontWeight::Regular, 10.0)
        );
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("alpha beta gamma delta", FontWeight::Regular, 10.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, FontWeight::Regular, 10.0) <= 60.0, "{line}");
        }
        assert_eq!(lines.join(" "), "alpha beta gamma delta");
    }

    #[test]
    fn breaks_overlong_words() {
        let lines = wrap_text(&"W".repeat(40), FontWeight::Bold, 10.0, 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "W".repeat(40));
    }

    #[test]
    fn keeps_explicit_newlines() {
        let lines = wrap_text("one\ntwo", FontWeight::Regular, 10.0, 500.0);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text("  ", FontWeight::Regular, 10.0, 100.0).is_empty());
    }

    #[test]
    fn truncates_with_ellipsis() {
        let out = truncate_to_width("Bahnhofstrasse 100000", FontWeight::Regular, 10.0, 40.0);
        assert!(out.ends_with('…'));
        assert!(text_width(&out, FontWeight::Regular, 10.0) <= 40.0);
        assert_eq!(truncate_to_width("ok", FontWeight::Regular, 10.0, 40.0), "ok");
    }
}
