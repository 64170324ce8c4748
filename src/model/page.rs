//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page of laid-out text.
///
/// A page is an ordered chunk of logical lines, at most
/// [`PageGeometry::lines_per_page`](crate::layout::PageGeometry::lines_per_page)
/// of them. Empty lines are kept: they consume a line slot and advance the
/// text cursor without drawing anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Logical lines on this page, top to bottom
    pub lines: Vec<String>,
}

impl Page {
    /// Create a new page from a chunk of lines.
    pub fn new(number: u32, lines: Vec<String>) -> Self {
        Self { number, lines }
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the page holds no visible text.
    ///
    /// A page always holds at least one line slot, but all of its lines may
    /// be empty strings.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.lines.join("\n")
    }
}
