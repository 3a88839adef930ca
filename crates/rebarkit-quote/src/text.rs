//! Plain-text quotation renderer.

use std::fmt::Write;

use tracing::info;

use rebarkit_drafting::{ShapeLayout, Viewport};

use crate::document::{format_money, Quotation};
use crate::error::Result;
use crate::renderer::QuotationRenderer;

/// Renders the quotation as a plain-text offer letter.
///
/// The shape drawing has no text representation and is skipped; everything
/// else mirrors the paginated document.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl QuotationRenderer for TextRenderer {
    fn render(
        &self,
        quotation: &Quotation,
        _layout: &ShapeLayout,
        _viewport: &Viewport,
    ) -> Result<Vec<u8>> {
        info!(number = %quotation.number, "rendering text quotation");
        let mut out = String::new();

        let _ = writeln!(
            out,
            "PRICE QUOTATION - {}",
            quotation.issue_date.format("%Y-%m-%d")
        );
        let _ = writeln!(out, "Quotation no. {}", quotation.number);
        let _ = writeln!(out);

        let issuer = &quotation.issuer;
        let _ = writeln!(out, "{}", issuer.name);
        let _ = writeln!(out, "{}", issuer.address_line1);
        if issuer.region.is_empty() {
            let _ = writeln!(out, "{}", issuer.address_line2);
        } else {
            let _ = writeln!(out, "{}, {}", issuer.address_line2, issuer.region);
        }
        if !issuer.phone.is_empty() {
            let _ = writeln!(out, "Tel: {}", issuer.phone);
        }
        if !issuer.email.is_empty() {
            let _ = writeln!(out, "Email: {}", issuer.email);
        }
        if !issuer.tax_id.is_empty() {
            let _ = writeln!(out, "{}", issuer.tax_id);
        }
        if !issuer.registry_id.is_empty() {
            let _ = writeln!(out, "{}", issuer.registry_id);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Dear {},", quotation.client.display_name());
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Thank you for your interest in our offer. Below is the detailed \
             quotation for {} pcs:",
            quotation.pricing.effective_quantity()
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "ORDER SPECIFICATION:");
        for line in quotation.spec_lines() {
            let _ = writeln!(out, "- {}", line);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "COSTS:");
        for (index, row) in quotation.price_rows().iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {}: {} (per piece: {})",
                index + 1,
                row.label,
                format_money(row.total_amount, &quotation.currency),
                format_money(row.unit_amount, &quotation.currency),
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "This quotation is valid for {} days from the issue date (until {}).",
            quotation.validity_days,
            quotation.valid_until().format("%Y-%m-%d")
        );

        Ok(out.into_bytes())
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}
