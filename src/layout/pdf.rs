//! PDF serialization of a [`RenderedDocument`] with `lopdf`.
//!
//! Fonts are the standard Type1 Helvetica faces with WinAnsiEncoding, so no
//! font program is embedded.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

use super::metrics::FontWeight;
use super::page::{DrawOp, RenderedDocument};
use crate::core::FakturaError;
use crate::theme::Rgb;

const PRODUCER: &str = concat!("qrfaktura ", env!("CARGO_PKG_VERSION"));

pub(crate) fn write_pdf(rendered: &RenderedDocument) -> Result<Vec<u8>, FakturaError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular = doc.add_object(type1_font("Helvetica"));
    let bold = doc.add_object(type1_font("Helvetica-Bold"));

    let mut xobjects = lopdf::Dictionary::new();
    for (index, image) in rendered.images.iter().enumerate() {
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => Object::Integer(i64::from(image.width)),
                "Height" => Object::Integer(i64::from(image.height)),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => Object::Integer(8),
            },
            image.rgb.clone(),
        );
        let id = doc.add_object(stream);
        xobjects.set(image_name(index), Object::Reference(id));
    }

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(regular),
            "F2" => Object::Reference(bold),
        },
        "XObject" => xobjects,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(rendered.pages.len());
    for page in &rendered.pages {
        let mut operations = Vec::new();
        for op in &page.ops {
            encode_op(op, rendered.height, &mut operations);
        }
        let content = Content { operations }
            .encode()
            .map_err(|e| FakturaError::Pdf(format!("failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(lopdf::Dictionary::new(), content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Reference(resources_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                real(rendered.width),
                real(rendered.height),
            ],
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    let info_id = info_dictionary(&mut doc, &rendered.title);
    doc.trailer.set("Info", Object::Reference(info_id));

    doc.compress();
    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| FakturaError::Pdf(format!("failed to save PDF: {e}")))?;
    Ok(output)
}

fn type1_font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Object::Name(base.as_bytes().to_vec()),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn info_dictionary(doc: &mut Document, title: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
    })
}

fn image_name(index: usize) -> String {
    format!("Im{index}")
}

fn real(value: f32) -> Object {
    value.into()
}

fn rgb(color: Rgb) -> Vec<Object> {
    color.to_unit().into_iter().map(real).collect()
}

fn encode_op(op: &DrawOp, page_height: f32, out: &mut Vec<Operation>) {
    match op {
        DrawOp::Text {
            x,
            y,
            text,
            weight,
            size,
            color,
        } => {
            let font = match weight {
                FontWeight::Regular => "F1",
                FontWeight::Bold => "F2",
            };
            out.push(Operation::new("BT", vec![]));
            out.push(Operation::new("Tf", vec![font.into(), real(*size)]));
            out.push(Operation::new("rg", rgb(*color)));
            out.push(Operation::new("Td", vec![real(*x), real(page_height - y)]));
            out.push(Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ));
            out.push(Operation::new("ET", vec![]));
        }
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            let paint = match (fill, stroke) {
                (Some(_), Some(_)) => "B",
                (Some(_), None) => "f",
                (None, Some(_)) => "S",
                (None, None) => return,
            };
            out.push(Operation::new("q", vec![]));
            if let Some(fill) = fill {
                out.push(Operation::new("rg", rgb(*fill)));
            }
            if let Some(stroke) = stroke {
                out.push(Operation::new("RG", rgb(*stroke)));
            }
            out.push(Operation::new(
                "re",
                vec![real(*x), real(page_height - y - height), real(*width), real(*height)],
            ));
            out.push(Operation::new(paint, vec![]));
            out.push(Operation::new("Q", vec![]));
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
            dashed,
        } => {
            out.push(Operation::new("q", vec![]));
            out.push(Operation::new("w", vec![real(*width)]));
            out.push(Operation::new("RG", rgb(*color)));
            if *dashed {
                out.push(Operation::new(
                    "d",
                    vec![vec![real(3.0), real(3.0)].into(), Object::Integer(0)],
                ));
            }
            out.push(Operation::new("m", vec![real(*x1), real(page_height - y1)]));
            out.push(Operation::new("l", vec![real(*x2), real(page_height - y2)]));
            out.push(Operation::new("S", vec![]));
            out.push(Operation::new("Q", vec![]));
        }
        DrawOp::Image {
            x,
            y,
            width,
            height,
            image,
        } => {
            out.push(Operation::new("q", vec![]));
            out.push(Operation::new(
                "cm",
                vec![
                    real(*width),
                    real(0.0),
                    real(0.0),
                    real(*height),
                    real(*x),
                    real(page_height - y - height),
                ],
            ));
            out.push(Operation::new(
                "Do",
                vec![Object::Name(image_name(*image).into_bytes())],
            ));
            out.push(Operation::new("Q", vec![]));
        }
    }
}

/// Encode text for a WinAnsiEncoding font. Characters outside the code
/// page become `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_covers_swiss_text() {
        assert_eq!(encode_win_ansi("Zürich"), b"Z\xfcrich".to_vec());
        assert_eq!(encode_win_ansi("Gültig …"), b"G\xfcltig \x85".to_vec());
        assert_eq!(encode_win_ansi("€ 5"), b"\x80 5".to_vec());
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }
}
