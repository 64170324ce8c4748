//! Page geometry and text layout.
//!
//! Layout is a single pass: normalize the input into logical lines, then
//! chunk the line sequence into pages. Every constant of the default
//! geometry (US Letter, 50pt margins, 10pt Helvetica on a 14pt leading) can
//! be overridden through the builder; the line capacity of a page is always
//! derived from the geometry, never hard-coded.

use crate::error::{Error, Result};
use crate::model::{Document, Page};
use serde::{Deserialize, Serialize};

/// Default page width in points (US Letter, 8.5 inches).
pub const DEFAULT_PAGE_WIDTH: f32 = 612.0;
/// Default page height in points (US Letter, 11 inches).
pub const DEFAULT_PAGE_HEIGHT: f32 = 792.0;
/// Default margin in points, applied on all four sides.
pub const DEFAULT_MARGIN: f32 = 50.0;
/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;
/// Default text leading (line height) in points.
pub const DEFAULT_LEADING: f32 = 14.0;

/// The base font selected in every content stream.
///
/// One of the fourteen standard faces every PDF renderer ships, so nothing
/// is embedded.
pub const BASE_FONT: &str = "Helvetica";

/// Page geometry for layout and emission.
///
/// `Default` gives the fixed reference geometry: 612x792 points with 50pt
/// margins, 10pt type on a 14pt leading, which fits 49 lines per page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in points (1 point = 1/72 inch)
    pub page_width: f32,

    /// Page height in points
    pub page_height: f32,

    /// Margin in points, applied on all sides
    pub margin: f32,

    /// Font size in points
    pub font_size: f32,

    /// Text leading (vertical distance between baselines) in points
    pub leading: f32,
}

impl PageGeometry {
    /// Create the default geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// US Letter geometry (612 x 792 points). Same as the default.
    pub fn letter() -> Self {
        Self::default()
    }

    /// A4 geometry (595 x 842 points), other settings unchanged.
    pub fn a4() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            ..Self::default()
        }
    }

    /// Set the page size in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the margin in points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text leading in points.
    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    /// Height of the writable area in points.
    pub fn writable_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Number of text lines that fit on one page.
    ///
    /// `floor(writable_height / leading)` -- 49 for the default geometry.
    pub fn lines_per_page(&self) -> usize {
        (self.writable_height() / self.leading).floor() as usize
    }

    /// The top-left writing position, where the text cursor starts.
    pub fn text_origin(&self) -> (f32, f32) {
        (self.margin, self.page_height - self.margin)
    }

    /// Check that the geometry can hold text.
    ///
    /// The default geometry always validates; this only fires for
    /// caller-supplied values.
    pub fn validate(&self) -> Result<()> {
        if !(self.page_width.is_finite()
            && self.page_height.is_finite()
            && self.margin.is_finite()
            && self.font_size.is_finite()
            && self.leading.is_finite())
        {
            return Err(Error::InvalidGeometry(
                "all dimensions must be finite".to_string(),
            ));
        }
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "page size {}x{} is not positive",
                self.page_width, self.page_height
            )));
        }
        if self.margin < 0.0 {
            return Err(Error::InvalidGeometry("margin is negative".to_string()));
        }
        if self.font_size <= 0.0 || self.leading <= 0.0 {
            return Err(Error::InvalidGeometry(
                "font size and leading must be positive".to_string(),
            ));
        }
        if self.page_width - 2.0 * self.margin <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "margins ({}) leave no horizontal writing area",
                self.margin
            )));
        }
        if self.lines_per_page() == 0 {
            return Err(Error::InvalidGeometry(format!(
                "writable height {} fits no line at leading {}",
                self.writable_height(),
                self.leading
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            margin: DEFAULT_MARGIN,
            font_size: DEFAULT_FONT_SIZE,
            leading: DEFAULT_LEADING,
        }
    }
}

/// Split input text into logical lines.
///
/// Carriage returns are stripped and the text splits on `\n`. Empty lines
/// are preserved; they still occupy a line slot on the page. Empty input
/// yields a single empty line, so layout never produces zero pages.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace('\r', "")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Lay text out into pages under the given geometry.
///
/// Partitions the logical-line sequence into contiguous chunks of at most
/// [`PageGeometry::lines_per_page`] lines. Line order is preserved; no line
/// is dropped or reordered.
pub fn paginate(text: &str, geometry: &PageGeometry) -> Result<Document> {
    geometry.validate()?;

    let lines = split_lines(text);
    let per_page = geometry.lines_per_page();

    let pages: Vec<Page> = lines
        .chunks(per_page)
        .enumerate()
        .map(|(i, chunk)| Page::new(i as u32 + 1, chunk.to_vec()))
        .collect();

    log::debug!(
        "laid out {} lines into {} pages ({} lines per page)",
        lines.len(),
        pages.len(),
        per_page
    );

    Ok(Document::new(*geometry, pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.lines_per_page(), 49);
        assert_eq!(geometry.text_origin(), (50.0, 742.0));
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn test_a4_capacity() {
        let geometry = PageGeometry::a4();
        // floor((842 - 100) / 14) = 53
        assert_eq!(geometry.lines_per_page(), 53);
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let geometry = PageGeometry::new()
            .with_page_size(500.0, 500.0)
            .with_margin(20.0)
            .with_font_size(12.0)
            .with_leading(16.0);

        assert_eq!(geometry.lines_per_page(), 28);
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_cramped_geometry() {
        let no_height = PageGeometry::new().with_margin(400.0);
        assert!(matches!(
            no_height.validate(),
            Err(Error::InvalidGeometry(_))
        ));

        let huge_leading = PageGeometry::new().with_leading(10_000.0);
        assert!(matches!(
            huge_leading.validate(),
            Err(Error::InvalidGeometry(_))
        ));

        let negative = PageGeometry::new().with_font_size(-1.0);
        assert!(matches!(negative.validate(), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_paginate_chunks() {
        let geometry = PageGeometry::default();
        let text = (0..120)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let doc = paginate(&text, &geometry).unwrap();
        assert_eq!(doc.page_count(), 3); // 49 + 49 + 22
        assert_eq!(doc.get_page(1).unwrap().line_count(), 49);
        assert_eq!(doc.get_page(2).unwrap().line_count(), 49);
        assert_eq!(doc.get_page(3).unwrap().line_count(), 22);
        assert_eq!(doc.line_count(), 120);
        assert_eq!(doc.get_page(2).unwrap().lines[0], "line 49");
    }

    #[test]
    fn test_paginate_empty_input() {
        let doc = paginate("", &PageGeometry::default()).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.get_page(1).unwrap().lines, vec![String::new()]);
        assert!(doc.is_blank());
    }

    #[test]
    fn test_paginate_exact_boundary() {
        let geometry = PageGeometry::default();
        let text = vec!["x"; 49].join("\n");
        let doc = paginate(&text, &geometry).unwrap();
        assert_eq!(doc.page_count(), 1);

        let text = vec!["x"; 50].join("\n");
        let doc = paginate(&text, &geometry).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.get_page(2).unwrap().line_count(), 1);
    }
}
