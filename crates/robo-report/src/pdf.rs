//! Serializes a planned layout to PDF bytes.
//!
//! Output depends only on the layout and image pixels: no timestamps or
//! random document IDs are written, so equal inputs give equal bytes.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

use crate::error::{ReportError, Result};
use crate::image::DecodedImage;
use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH, ReportLayout, Shape, TextRun};
use crate::metrics::Font;

const IMAGE_RESOURCE: &str = "Im1";
const STROKE_WIDTH: f32 = 0.75;

/// Writes the one-page document.
pub fn write_pdf(layout: &ReportLayout, image: Option<&DecodedImage>, title: &str) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold] {
        let id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), id);
    }

    let mut resources = dictionary! { "Font" => fonts };
    let image_placed = layout.blocks.iter().any(|block| block.image.is_some());
    if let Some(image) = image.filter(|_| image_placed) {
        let id = add_image(&mut doc, image);
        resources.set("XObject", dictionary! { IMAGE_RESOURCE => id });
    }
    let resources_id = doc.add_object(resources);

    let content = Content {
        operations: page_operations(layout),
    };
    let encoded = content
        .encode()
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => reals(&[0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT]),
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(win_ansi(title), StringFormat::Literal),
        "Producer" => Object::string_literal("robot-guide"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    Ok(bytes)
}

fn add_image(doc: &mut Document, image: &DecodedImage) -> ObjectId {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(image.width),
        "Height" => i64::from(image.height),
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };
    doc.add_object(Stream::new(dict, image.rgb.clone()))
}

fn page_operations(layout: &ReportLayout) -> Vec<Operation> {
    let mut ops = Vec::new();
    for block in &layout.blocks {
        // Fills before strokes so grid lines stay visible.
        for shape in &block.shapes {
            if let Shape::Fill { rect, color } = shape {
                let (r, g, b) = color.rgb();
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new("rg", reals(&[r, g, b])));
                ops.push(Operation::new("re", reals(&[rect.x, rect.y, rect.width, rect.height])));
                ops.push(Operation::new("f", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
        for shape in &block.shapes {
            if let Shape::Stroke { rect } = shape {
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new("w", reals(&[STROKE_WIDTH])));
                ops.push(Operation::new("RG", reals(&[0.0, 0.0, 0.0])));
                ops.push(Operation::new("re", reals(&[rect.x, rect.y, rect.width, rect.height])));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
        for run in block.text.iter().filter(|run| !run.text.is_empty()) {
            push_text(&mut ops, run);
        }
        if let Some(rect) = block.image {
            ops.push(Operation::new("q", vec![]));
            ops.push(Operation::new(
                "cm",
                reals(&[rect.width, 0.0, 0.0, rect.height, rect.x, rect.y]),
            ));
            ops.push(Operation::new("Do", vec![Object::Name(IMAGE_RESOURCE.as_bytes().to_vec())]));
            ops.push(Operation::new("Q", vec![]));
        }
    }
    ops
}

fn push_text(ops: &mut Vec<Operation>, run: &TextRun) {
    let (r, g, b) = run.color.rgb();
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![
            Object::Name(run.font.resource_name().as_bytes().to_vec()),
            Object::Real(run.size),
        ],
    ));
    ops.push(Operation::new("rg", reals(&[r, g, b])));
    ops.push(Operation::new("Td", reals(&[run.x, run.baseline])));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(win_ansi(&run.text), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn reals(values: &[f32]) -> Vec<Object> {
    values.iter().map(|&value| Object::Real(value)).collect()
}

/// Encodes text for the WinAnsi-encoded standard fonts. Characters with no
/// WinAnsi code become '?'.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            ch if u32::from(ch) < 0x80 || ('\u{A0}'..='\u{FF}').contains(&ch) => ch as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_ansi() {
        assert_eq!(win_ansi("Bee-Bot"), b"Bee-Bot".to_vec());
        assert_eq!(win_ansi("\u{2022} Touch"), vec![0x95, b' ', b'T', b'o', b'u', b'c', b'h']);
        assert_eq!(win_ansi("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(win_ansi("\u{4e2d}"), vec![b'?']);
    }
}
