//! Error types for the topdf library.

use std::io;
use thiserror::Error;

/// Result type alias for topdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or emitting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input text or writing the PDF file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The caller handed us something that is not text.
    ///
    /// `&str` input is valid by construction; this surfaces at the byte
    /// boundaries (raw buffers, FFI, files read by the CLI) when the data
    /// is not valid UTF-8.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The page geometry cannot hold any text.
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// Error serializing the layout plan (JSON output).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidInput(format!("not valid UTF-8 text: {}", err))
    }
}
