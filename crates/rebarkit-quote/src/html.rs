//! Printable HTML quotation renderer.
//!
//! Produces a self-contained A4-styled page: issuer header, client block,
//! order specification, the embedded shape drawing, the price table, and a
//! validity footer. The drawing is the drafting crate's SVG output embedded
//! verbatim.

use std::fmt::Write;

use tracing::info;

use rebarkit_drafting::{render_svg, ShapeLayout, Viewport};

use crate::document::{format_money, Quotation};
use crate::error::Result;
use crate::renderer::QuotationRenderer;

/// Renders the quotation as a printable HTML document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

const PAGE_STYLE: &str = "\
@page { size: A4; margin: 20mm; }
body { font-family: 'Lato', 'Helvetica Neue', Arial, sans-serif; color: #1f2937; font-size: 10pt; }
header { display: flex; justify-content: space-between; border-bottom: 1px solid #cccccc; padding-bottom: 10px; margin-bottom: 20px; }
.issuer { max-width: 55%; font-size: 9pt; line-height: 1.4; }
.client { max-width: 45%; font-size: 9pt; line-height: 1.4; text-align: right; }
h1 { text-align: center; font-size: 16pt; margin-bottom: 20px; }
section { margin-bottom: 15px; }
h2 { font-size: 12pt; color: #333333; margin-bottom: 8px; }
ul.spec { list-style: none; padding: 0; margin: 0; }
ul.spec li { margin-bottom: 4px; }
figure.drawing { text-align: center; margin: 10px 0 20px; padding: 10px; border: 1px solid #e0e0e0; border-radius: 3px; }
table.prices { width: 100%; border-collapse: collapse; margin-bottom: 10px; }
table.prices th, table.prices td { border: 1px solid #bfbfbf; padding: 5px; }
table.prices th { background: #f2f2f2; text-align: left; }
table.prices td.amount, table.prices th.amount { text-align: right; }
tr.emphasis td { font-weight: bold; background: #e8e8e8; }
footer { border-top: 1px solid #cccccc; padding-top: 10px; margin-top: 30px; text-align: center; font-size: 8pt; color: #666666; }";

impl QuotationRenderer for HtmlRenderer {
    fn render(
        &self,
        quotation: &Quotation,
        layout: &ShapeLayout,
        viewport: &Viewport,
    ) -> Result<Vec<u8>> {
        info!(number = %quotation.number, "rendering html quotation");
        let issuer = &quotation.issuer;
        let mut out = String::new();

        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, r#"<html lang="en">"#);
        let _ = writeln!(out, "<head>");
        let _ = writeln!(out, r#"<meta charset="utf-8"/>"#);
        let _ = writeln!(
            out,
            "<title>Quotation for {} - {}</title>",
            escape_html(quotation.client.display_name()),
            quotation.issue_date.format("%Y-%m-%d")
        );
        let _ = writeln!(out, "<style>{}</style>", PAGE_STYLE);
        let _ = writeln!(out, "</head>");
        let _ = writeln!(out, "<body>");

        // Header: issuer left, client and date right.
        let _ = writeln!(out, "<header>");
        let _ = writeln!(out, r#"<div class="issuer">"#);
        let _ = writeln!(out, "<strong>{}</strong><br/>", escape_html(&issuer.name));
        let _ = writeln!(out, "{}<br/>", escape_html(&issuer.address_line1));
        if issuer.region.is_empty() {
            let _ = writeln!(out, "{}<br/>", escape_html(&issuer.address_line2));
        } else {
            let _ = writeln!(
                out,
                "{}, {}<br/>",
                escape_html(&issuer.address_line2),
                escape_html(&issuer.region)
            );
        }
        if !issuer.phone.is_empty() {
            let _ = writeln!(out, "Tel: {}<br/>", escape_html(&issuer.phone));
        }
        if !issuer.email.is_empty() {
            let _ = writeln!(out, "Email: {}<br/>", escape_html(&issuer.email));
        }
        if !issuer.tax_id.is_empty() {
            let _ = writeln!(out, "{}<br/>", escape_html(&issuer.tax_id));
        }
        if !issuer.registry_id.is_empty() {
            let _ = writeln!(out, "{}<br/>", escape_html(&issuer.registry_id));
        }
        let _ = writeln!(out, "</div>");
        let _ = writeln!(out, r#"<div class="client">"#);
        let _ = writeln!(out, "<strong>Client:</strong><br/>");
        let _ = writeln!(out, "{}<br/>", escape_html(quotation.client.display_name()));
        if !quotation.client.email.is_empty() {
            let _ = writeln!(out, "{}<br/>", escape_html(&quotation.client.email));
        }
        let _ = writeln!(out, "<strong>Issue date:</strong><br/>");
        let _ = writeln!(out, "{}", quotation.issue_date.format("%Y-%m-%d"));
        let _ = writeln!(out, "</div>");
        let _ = writeln!(out, "</header>");

        let _ = writeln!(out, "<h1>PRICE QUOTATION</h1>");
        let _ = writeln!(
            out,
            "<p>Thank you for your interest in our offer. Below is the \
             detailed quotation for {} pcs.</p>",
            quotation.pricing.effective_quantity()
        );

        let _ = writeln!(out, "<section>");
        let _ = writeln!(out, "<h2>Order specification</h2>");
        let _ = writeln!(out, r#"<ul class="spec">"#);
        for line in quotation.spec_lines() {
            let _ = writeln!(out, "<li>{}</li>", escape_html(&line));
        }
        let _ = writeln!(out, "</ul>");
        let _ = writeln!(out, "</section>");

        // The drawing is the same SVG the preview shows.
        let _ = writeln!(out, r#"<figure class="drawing">"#);
        out.push_str(&render_svg(layout, viewport));
        let _ = writeln!(out, "<figcaption>Shape preview (1 pc)</figcaption>");
        let _ = writeln!(out, "</figure>");

        let _ = writeln!(out, "<section>");
        let _ = writeln!(out, "<h2>Cost breakdown</h2>");
        let _ = writeln!(out, r#"<table class="prices">"#);
        let _ = writeln!(
            out,
            r#"<tr><th>Description</th><th class="amount">Per piece ({0})</th><th class="amount">Total ({0})</th></tr>"#,
            escape_html(&quotation.currency)
        );
        for row in quotation.price_rows() {
            let class = if row.emphasis { r#" class="emphasis""# } else { "" };
            let _ = writeln!(
                out,
                r#"<tr{}><td>{}</td><td class="amount">{:.2}</td><td class="amount">{:.2}</td></tr>"#,
                class,
                escape_html(&row.label),
                row.unit_amount,
                row.total_amount
            );
        }
        let _ = writeln!(out, "</table>");
        let _ = writeln!(
            out,
            "<p><strong>Total due: {}</strong></p>",
            escape_html(&format_money(
                quotation.result.total_gross_cost,
                &quotation.currency
            ))
        );
        let _ = writeln!(out, "</section>");

        let _ = writeln!(
            out,
            "<footer>Quotation no. {} · valid for {} days from the issue date \
             (until {}).</footer>",
            quotation.number,
            quotation.validity_days,
            quotation.valid_until().format("%Y-%m-%d")
        );

        let _ = writeln!(out, "</body>");
        let _ = writeln!(out, "</html>");
        Ok(out.into_bytes())
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// Escapes text for HTML text nodes and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"Bolt & Nut <Ltd> "quoted""#),
            "Bolt &amp; Nut &lt;Ltd&gt; &quot;quoted&quot;"
        );
    }
}
