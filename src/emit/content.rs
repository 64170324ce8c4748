//! Content stream synthesis.
//!
//! Each page gets one content stream: a single text object that selects the
//! base font, sets the leading, moves the cursor to the top-left writing
//! position, and then walks the page's lines top to bottom. `T*` advances
//! the cursor one leading before every line except the first; empty lines
//! advance the cursor but draw nothing.

use crate::layout::PageGeometry;
use crate::model::Page;

/// The resource name content streams select the shared font under.
pub const FONT_RESOURCE: &str = "F1";

/// Escape a line for use as a PDF string-literal operand.
///
/// Exactly three characters are special inside `(...)`: backslash and the
/// two parentheses. Backslash goes first so the escapes it introduces are
/// not escaped again. Nothing else is altered.
pub fn escape_text(line: &str) -> String {
    line.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Format a point value without a trailing fraction when it is whole.
pub(crate) fn fmt_pt(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Build the content stream for one page.
pub fn build_content_stream(page: &Page, geometry: &PageGeometry) -> Vec<u8> {
    let (x, y) = geometry.text_origin();

    let mut stream = String::new();
    stream.push_str("BT\n");
    stream.push_str(&format!(
        "/{} {} Tf\n",
        FONT_RESOURCE,
        fmt_pt(geometry.font_size)
    ));
    stream.push_str(&format!("{} TL\n", fmt_pt(geometry.leading)));
    stream.push_str(&format!("{} {} Td\n", fmt_pt(x), fmt_pt(y)));

    for (i, line) in page.lines.iter().enumerate() {
        if i > 0 {
            stream.push_str("T*\n");
        }
        if !line.is_empty() {
            stream.push_str(&format!("({}) Tj\n", escape_text(line)));
        }
    }

    stream.push_str("ET");
    stream.into_bytes()
}
