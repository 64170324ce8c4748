//! Document-level types.

use super::Page;
use crate::layout::PageGeometry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A laid-out document, ready for PDF emission.
///
/// Built in one pass by [`layout_text`](crate::layout_text) and consumed by
/// [`emit::to_bytes`](crate::emit::to_bytes); nothing is mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Page geometry the lines were laid out against
    pub geometry: PageGeometry,

    /// Pages in reading order
    pub pages: Vec<Page>,

    /// Optional document metadata (title, author, etc.)
    pub metadata: Metadata,
}

impl Document {
    /// Create a document from laid-out pages.
    pub fn new(geometry: PageGeometry, pages: Vec<Page>) -> Self {
        Self {
            geometry,
            pages,
            metadata: Metadata::default(),
        }
    }

    /// Get the number of pages in the document.
    ///
    /// Always at least 1: empty input lays out as one page holding a single
    /// empty line.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Total number of logical lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|page| page.line_count()).sum()
    }

    /// Get plain text content of the entire document.
    ///
    /// This is the normalized input: carriage returns stripped, line order
    /// preserved.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the document holds no visible text.
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|page| page.is_blank())
    }

    /// Number of PDF objects the emitter will produce for this document.
    ///
    /// Catalog, page tree, one content stream and one page object per page,
    /// the shared font, and an info dictionary when metadata is set.
    pub fn object_count(&self) -> usize {
        let base = 3 + 2 * self.pages.len();
        if self.metadata.is_empty() {
            base
        } else {
            base + 1
        }
    }
}

/// Document metadata written to the PDF info dictionary.
///
/// All fields are optional. When every field is `None` the emitter writes no
/// info dictionary at all, keeping the minimal object layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Check whether any field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.creator.is_none()
            && self.producer.is_none()
            && self.created.is_none()
    }

    /// Format a timestamp in PDF date form (`D:YYYYMMDDHHMMSSZ`).
    pub fn pdf_date(date: &DateTime<Utc>) -> String {
        date.format("D:%Y%m%d%H%M%SZ").to_string()
    }
}
