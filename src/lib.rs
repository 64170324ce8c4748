//! # topdf
//!
//! Minimal plain-text to PDF document emitter for Rust.
//!
//! This library lays a text string out into fixed-geometry pages and
//! serializes them as a small, single-revision PDF 1.4 file that any
//! standard renderer can open. One built-in Helvetica face, no compression,
//! no encryption — just text on pages.
//!
//! ## Quick Start
//!
//! ```
//! use topdf::emit_text;
//!
//! fn main() -> topdf::Result<()> {
//!     let pdf = emit_text("Alice Doe\nSoftware Engineer")?;
//!     assert!(pdf.starts_with(b"%PDF-1.4"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Deterministic output**: same text, same bytes, in one synchronous pass
//! - **Naive pagination**: lines chunk into pages by a capacity computed
//!   from the page geometry (49 lines per page at the defaults)
//! - **Configurable geometry**: page size, margin, font size, and leading
//!   default to the reference constants but can be overridden
//! - **Optional metadata**: title/author/date become a PDF info dictionary
//! - **Layout plan as JSON**: inspect the pagination before emitting

pub mod emit;
pub mod error;
pub mod layout;
pub mod model;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use emit::{escape_text, to_json, JsonFormat, ObjectWriter};
pub use error::{Error, Result};
pub use layout::{paginate, split_lines, PageGeometry, BASE_FONT};
pub use model::{Document, Metadata, Page};

use std::path::Path;

/// Lay text out and emit it as PDF bytes, using the default geometry.
///
/// This is the whole pipeline in one call: normalize, paginate, serialize.
/// Pure function of its input; empty text still produces a one-page
/// document.
///
/// # Example
///
/// ```
/// let pdf = topdf::emit_text("Hello, world!").unwrap();
/// assert!(pdf.ends_with(b"%%EOF\n"));
/// ```
pub fn emit_text(text: &str) -> Result<Vec<u8>> {
    emit_text_with_geometry(text, &PageGeometry::default())
}

/// Lay text out and emit it as PDF bytes under a custom geometry.
///
/// # Errors
///
/// Fails with [`Error::InvalidGeometry`] when the geometry fits no line of
/// text; the default geometry never does.
pub fn emit_text_with_geometry(text: &str, geometry: &PageGeometry) -> Result<Vec<u8>> {
    let doc = paginate(text, geometry)?;
    emit::to_bytes(&doc)
}

/// Lay out raw bytes that are expected to hold UTF-8 text.
///
/// This is the byte-boundary entry point: invalid UTF-8 is rejected with
/// [`Error::InvalidInput`] before any layout happens.
pub fn layout_bytes(data: &[u8], geometry: &PageGeometry) -> Result<Document> {
    let text = std::str::from_utf8(data)?;
    paginate(text, geometry)
}

/// Lay text out into a [`Document`] without emitting it.
///
/// Useful for inspecting the pagination plan (page count, line placement)
/// or serializing it with [`to_json`].
pub fn layout_text(text: &str, geometry: &PageGeometry) -> Result<Document> {
    paginate(text, geometry)
}

/// Emit text as a PDF file on disk, using the default geometry.
///
/// # Example
///
/// ```no_run
/// topdf::emit_to_file("resume.pdf", "Alice Doe\nSoftware Engineer").unwrap();
/// ```
pub fn emit_to_file<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let bytes = emit_text(text)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Builder for laying out and emitting documents.
///
/// # Example
///
/// ```
/// use topdf::Topdf;
///
/// let pdf = Topdf::new()
///     .with_title("Resume")
///     .with_author("Alice Doe")
///     .a4()
///     .layout("Alice Doe\nSoftware Engineer")?
///     .to_bytes()?;
/// # Ok::<(), topdf::Error>(())
/// ```
pub struct Topdf {
    geometry: PageGeometry,
    metadata: Metadata,
}

impl Topdf {
    /// Create a new builder with the default geometry and no metadata.
    pub fn new() -> Self {
        Self {
            geometry: PageGeometry::default(),
            metadata: Metadata::default(),
        }
    }

    /// Use A4 pages instead of US Letter.
    pub fn a4(mut self) -> Self {
        let base = PageGeometry::a4();
        self.geometry.page_width = base.page_width;
        self.geometry.page_height = base.page_height;
        self
    }

    /// Replace the whole geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the margin in points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.geometry = self.geometry.with_margin(margin);
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.geometry = self.geometry.with_font_size(size);
        self
    }

    /// Set the text leading in points.
    pub fn with_leading(mut self, leading: f32) -> Self {
        self.geometry = self.geometry.with_leading(leading);
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.metadata.author = Some(author.into());
        self
    }

    /// Set the creation date stamped into the info dictionary.
    pub fn with_created(mut self, created: chrono::DateTime<chrono::Utc>) -> Self {
        self.metadata.created = Some(created);
        self
    }

    /// Replace the whole metadata block.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Lay text out and return a result wrapper.
    pub fn layout(self, text: &str) -> Result<TopdfResult> {
        let mut document = paginate(text, &self.geometry)?;
        document.metadata = self.metadata;
        Ok(TopdfResult { document })
    }

    /// Lay out raw UTF-8 bytes.
    pub fn layout_bytes(self, data: &[u8]) -> Result<TopdfResult> {
        let text = std::str::from_utf8(data)?;
        self.layout(text)
    }
}

impl Default for Topdf {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of laying out a document.
pub struct TopdfResult {
    /// The laid-out document
    pub document: Document,
}

impl TopdfResult {
    /// Emit the PDF byte stream.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        emit::to_bytes(&self.document)
    }

    /// Emit straight to a file.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize the layout plan to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
