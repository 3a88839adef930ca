//! Document renderer boundary.
//!
//! A quotation serializes through a narrow byte-stream interface, so the
//! concrete document format stays replaceable without touching the core.

use rebarkit_drafting::{ShapeLayout, Viewport};

use crate::document::Quotation;
use crate::error::Result;

/// Serializes a quotation plus its shape drawing into a downloadable
/// byte stream.
pub trait QuotationRenderer {
    /// Produces the document bytes. The drawing layout comes from the same
    /// geometry mapper output the preview used.
    fn render(
        &self,
        quotation: &Quotation,
        layout: &ShapeLayout,
        viewport: &Viewport,
    ) -> Result<Vec<u8>>;

    /// File extension of the produced format, without the dot.
    fn file_extension(&self) -> &str;
}
