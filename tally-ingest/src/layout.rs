//! Layout reconstruction: positioned page fragments into ordered text lines.
//!
//! PDF text extraction yields fragments in content-stream order, which is
//! not reading order. Fragments are bucketed into rows by rounded y,
//! ordered top of page first (PDF origin is bottom-left, so higher y comes
//! first), and left to right within a row.

use std::collections::BTreeMap;

/// A single run of text at a position on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Reconstruct one page's fragments into reading-order lines.
///
/// Rows whose true y differs by less than one unit collapse into the same
/// bucket after rounding; that absorbs sub-pixel jitter between renderers.
/// Rounded values one apart stay separate rows even when visually on the
/// same baseline.
pub fn page_lines(fragments: &[TextFragment]) -> Vec<String> {
    let mut rows: BTreeMap<i64, Vec<&TextFragment>> = BTreeMap::new();
    for frag in fragments {
        if frag.text.trim().is_empty() {
            continue;
        }
        rows.entry(frag.y.round() as i64).or_default().push(frag);
    }

    let mut lines = Vec::with_capacity(rows.len());
    for (_, mut row) in rows.into_iter().rev() {
        row.sort_by(|a, b| a.x.total_cmp(&b.x));
        let line = row
            .iter()
            .map(|f| f.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line);
    }
    lines
}

/// Full document text: every page's lines in order, one line per `\n`.
pub fn document_text(pages: &[Vec<TextFragment>]) -> String {
    let mut out = String::new();
    for page in pages {
        for line in page_lines(page) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}
