//! Error types for quotation assembly and rendering.

use std::io;
use thiserror::Error;

/// Errors that can occur while producing a quotation document.
///
/// Rendering works on an already-computed snapshot, so a failure here never
/// touches the calculation state the caller displays.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The renderer could not serialize the document.
    #[error("Failed to render quotation: {0}")]
    Render(String),

    /// A resource the renderer depends on is missing.
    #[error("Missing renderer resource: {0}")]
    MissingResource(String),

    /// I/O error while writing the document.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;
