//! PDF text-extraction seam.
//!
//! The parsers never read PDF binary structure; they consume positioned
//! text fragments produced by a [`PdfTextSource`]. The bundled
//! implementation walks content streams with `lopdf`.

use anyhow::{Context, Result};
use lopdf::content::Content;
use lopdf::{Document, Object};

use crate::layout::TextFragment;

/// External text-extraction collaborator: a raw PDF buffer in, positioned
/// text fragments per page out (page coordinate space, origin bottom-left).
pub trait PdfTextSource {
    fn pages(&self, buffer: &[u8]) -> Result<Vec<Vec<TextFragment>>>;
}

/// `lopdf`-backed source.
///
/// Tracks only the translation part of the text matrix; glyph widths are
/// approximated from the font size, which is enough to keep fragments on a
/// row in left-to-right order. Statement PDFs in scope use simple Latin
/// encodings, so strings decode byte-per-char (UTF-16BE handled when the
/// BOM is present).
pub struct LopdfTextSource;

impl PdfTextSource for LopdfTextSource {
    fn pages(&self, buffer: &[u8]) -> Result<Vec<Vec<TextFragment>>> {
        let doc = Document::load_mem(buffer).context("loading statement PDF")?;
        let mut pages = Vec::new();
        for (number, page_id) in doc.get_pages() {
            let data = doc
                .get_page_content(page_id)
                .with_context(|| format!("reading content of page {number}"))?;
            let content = Content::decode(&data)
                .with_context(|| format!("decoding content of page {number}"))?;
            pages.push(page_fragments(&content));
        }
        Ok(pages)
    }
}

const APPROX_CHAR_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
struct TextCursor {
    x: f32,
    y: f32,
    line_x: f32,
    line_y: f32,
    leading: f32,
    font_size: f32,
}

impl Default for TextCursor {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            line_x: 0.0,
            line_y: 0.0,
            leading: 0.0,
            font_size: 12.0,
        }
    }
}

impl TextCursor {
    fn translate_line(&mut self, tx: f32, ty: f32) {
        self.line_x += tx;
        self.line_y += ty;
        self.x = self.line_x;
        self.y = self.line_y;
    }

    fn next_line(&mut self) {
        self.translate_line(0.0, -self.leading);
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

fn decode_string(obj: &Object) -> Option<String> {
    let Object::String(bytes, _) = obj else {
        return None;
    };
    Some(if bytes.starts_with(&[0xFE, 0xFF]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    })
}

fn emit(fragments: &mut Vec<TextFragment>, cursor: &mut TextCursor, text: String) {
    let advance = text.chars().count() as f32 * cursor.font_size * APPROX_CHAR_WIDTH;
    if !text.trim().is_empty() {
        fragments.push(TextFragment::new(text, cursor.x, cursor.y));
    }
    cursor.x += advance;
}

fn page_fragments(content: &Content) -> Vec<TextFragment> {
    let mut cursor = TextCursor::default();
    let mut fragments = Vec::new();

    for op in &content.operations {
        let operands = &op.operands;
        match op.operator.as_str() {
            "BT" => {
                // Font size and leading are text state, not text-object
                // state; only the cursor position resets here.
                cursor = TextCursor {
                    font_size: cursor.font_size,
                    leading: cursor.leading,
                    ..TextCursor::default()
                };
            }
            "Tf" => {
                if let Some(size) = operands.get(1).and_then(number) {
                    cursor.font_size = size;
                }
            }
            "TL" => {
                if let Some(leading) = operands.first().and_then(number) {
                    cursor.leading = leading;
                }
            }
            "Td" => {
                if let (Some(tx), Some(ty)) = (
                    operands.first().and_then(number),
                    operands.get(1).and_then(number),
                ) {
                    cursor.translate_line(tx, ty);
                }
            }
            "TD" => {
                if let (Some(tx), Some(ty)) = (
                    operands.first().and_then(number),
                    operands.get(1).and_then(number),
                ) {
                    cursor.leading = -ty;
                    cursor.translate_line(tx, ty);
                }
            }
            "Tm" => {
                if let (Some(e), Some(f)) = (
                    operands.get(4).and_then(number),
                    operands.get(5).and_then(number),
                ) {
                    cursor.line_x = e;
                    cursor.line_y = f;
                    cursor.x = e;
                    cursor.y = f;
                }
            }
            "T*" => cursor.next_line(),
            "Tj" => {
                if let Some(text) = operands.first().and_then(decode_string) {
                    emit(&mut fragments, &mut cursor, text);
                }
            }
            "'" => {
                cursor.next_line();
                if let Some(text) = operands.first().and_then(decode_string) {
                    emit(&mut fragments, &mut cursor, text);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = operands.first() {
                    let text: String = items.iter().filter_map(decode_string).collect();
                    emit(&mut fragments, &mut cursor, text);
                }
            }
            _ => {}
        }
    }
    fragments
}
