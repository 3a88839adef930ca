//! # Rebarkit Quote
//!
//! Assembles priced client quotations from the cost engine's output and the
//! drafting crate's shape drawing, and serializes them through a narrow,
//! format-agnostic renderer interface.

pub mod document;
pub mod error;
pub mod html;
pub mod identity;
pub mod renderer;
pub mod text;

pub use document::{format_money, price_rows, PriceRow, Quotation, DEFAULT_VALIDITY_DAYS};
pub use error::{QuoteError, Result};
pub use html::HtmlRenderer;
pub use identity::{ClientIdentity, IssuerIdentity};
pub use renderer::QuotationRenderer;
pub use text::TextRenderer;
