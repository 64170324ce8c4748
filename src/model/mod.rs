//! Document model types for laid-out text.
//!
//! This module defines the intermediate representation (IR) that bridges
//! text layout and PDF emission. A [`Document`] is the pagination plan for
//! one input string: an ordered list of pages, each holding the logical
//! lines that fit it under the document's geometry.

mod document;
mod page;

pub use document::{Document, Metadata};
pub use page::Page;
