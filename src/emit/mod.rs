//! PDF emission for laid-out documents.
//!
//! Object numbering is fixed and deterministic: Catalog (1), the page tree
//! (2), then for each page its content stream followed by the page object,
//! and finally the single shared font. When metadata is present an info
//! dictionary follows the font. Content streams are independent of one
//! another, so they are built in parallel before the sequential
//! serialization pass that fixes byte offsets.

mod content;
mod json;
mod objects;

pub use content::{build_content_stream, escape_text, FONT_RESOURCE};
pub use json::{to_json, JsonFormat};
pub use objects::ObjectWriter;

use crate::error::Result;
use crate::model::{Document, Metadata};
use content::fmt_pt;
use rayon::prelude::*;

/// Serialize a document into a complete PDF byte stream.
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>> {
    doc.geometry.validate()?;

    let streams: Vec<Vec<u8>> = doc
        .pages
        .par_iter()
        .map(|page| build_content_stream(page, &doc.geometry))
        .collect();

    let page_count = doc.pages.len();
    // Object numbers are known before anything is written: Catalog 1,
    // Pages 2, content i at 3+2i, page i at 4+2i, font after the last page.
    let pages_id = 2u32;
    let page_id = |i: usize| 4 + 2 * i as u32;
    let font_id = 3 + 2 * page_count as u32;

    let mut writer = ObjectWriter::new();

    writer.add_object(&format!("<< /Type /Catalog /Pages {} 0 R >>", pages_id));

    let kids = (0..page_count)
        .map(|i| format!("{} 0 R", page_id(i)))
        .collect::<Vec<_>>()
        .join(" ");
    writer.add_object(&format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids, page_count
    ));

    let media_box = format!(
        "[0 0 {} {}]",
        fmt_pt(doc.geometry.page_width),
        fmt_pt(doc.geometry.page_height)
    );
    for (i, stream) in streams.iter().enumerate() {
        let content_id = writer.add_stream(stream);
        let id = writer.add_object(&format!(
            "<< /Type /Page /Parent {} 0 R /MediaBox {} /Resources << /Font << /{} {} 0 R >> >> /Contents {} 0 R >>",
            pages_id, media_box, FONT_RESOURCE, font_id, content_id
        ));
        debug_assert_eq!(id, page_id(i));
    }

    let id = writer.add_object(&format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
        crate::layout::BASE_FONT
    ));
    debug_assert_eq!(id, font_id);

    let info_id = if doc.metadata.is_empty() {
        None
    } else {
        Some(writer.add_object(&info_dict(&doc.metadata)))
    };

    let bytes = writer.finish(1, info_id);
    log::debug!(
        "emitted {} bytes, {} pages, {} objects",
        bytes.len(),
        page_count,
        doc.object_count()
    );
    Ok(bytes)
}

fn info_dict(metadata: &Metadata) -> String {
    let mut dict = String::from("<<");
    let mut push = |key: &str, value: &str| {
        dict.push_str(&format!(" /{} ({})", key, escape_text(value)));
    };

    if let Some(ref title) = metadata.title {
        push("Title", title);
    }
    if let Some(ref author) = metadata.author {
        push("Author", author);
    }
    if let Some(ref subject) = metadata.subject {
        push("Subject", subject);
    }
    if let Some(ref creator) = metadata.creator {
        push("Creator", creator);
    }
    if let Some(ref producer) = metadata.producer {
        push("Producer", producer);
    }
    if let Some(ref created) = metadata.created {
        push("CreationDate", &Metadata::pdf_date(created));
    }
    dict.push_str(" >>");
    dict
}
