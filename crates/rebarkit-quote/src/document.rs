//! Quotation document model.
//!
//! A `Quotation` is assembled from an already-computed cost breakdown and
//! never recomputes any numeric field, so the on-screen preview and the
//! rendered file cannot disagree.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use rebarkit_core::{BendShape, CalculationResult, PricingInputs};

use crate::identity::{ClientIdentity, IssuerIdentity};

/// Default validity period of a quotation, in days.
pub const DEFAULT_VALIDITY_DAYS: u32 = 14;

/// One row of the price breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub label: String,
    pub unit_amount: f64,
    pub total_amount: f64,
    /// Rendered with visual emphasis (the gross line).
    pub emphasis: bool,
}

/// A fully assembled quotation, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub number: Uuid,
    pub issue_date: NaiveDate,
    pub issuer: IssuerIdentity,
    pub client: ClientIdentity,
    pub shape: BendShape,
    pub diameter_mm: u32,
    pub pricing: PricingInputs,
    /// The cost engine's output, stored verbatim.
    pub result: CalculationResult,
    pub currency: String,
    pub validity_days: u32,
}

impl Quotation {
    /// Builds the document model around an existing cost breakdown.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        issuer: IssuerIdentity,
        client: ClientIdentity,
        shape: BendShape,
        diameter_mm: u32,
        pricing: PricingInputs,
        result: CalculationResult,
        issue_date: NaiveDate,
    ) -> Self {
        debug!(client = %client.display_name(), %issue_date, "assembling quotation");
        Self {
            number: Uuid::new_v4(),
            issue_date,
            issuer,
            client,
            shape,
            diameter_mm,
            pricing,
            result,
            currency: "PLN".to_string(),
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_validity_days(mut self, days: u32) -> Self {
        self.validity_days = days;
        self
    }

    /// Last day the quoted prices hold.
    pub fn valid_until(&self) -> NaiveDate {
        self.issue_date
            .checked_add_days(Days::new(u64::from(self.validity_days)))
            .unwrap_or(self.issue_date)
    }

    /// One-line description of the quoted shape with its dimensions.
    pub fn shape_description(&self) -> String {
        let dims: Vec<String> = self
            .shape
            .dimensions()
            .into_iter()
            .map(|(field, value)| format!("{}: {} cm", dimension_label(field), value))
            .collect();
        format!("{} ({})", self.shape.kind().label(), dims.join(", "))
    }

    /// Specification block lines for the document body.
    pub fn spec_lines(&self) -> Vec<String> {
        let quantity = self.pricing.effective_quantity();
        vec![
            format!("Shape: {}", self.shape_description()),
            format!("Bar diameter: Φ{} mm", self.diameter_mm),
            format!("Total bar length per piece: {:.2} m", self.result.length_m),
            format!("Piece count: {}", quantity),
            format!("Weight per piece: {:.2} kg", self.result.weight_kg),
            format!(
                "Total weight ({} pcs): {:.2} kg",
                quantity, self.result.total_weight_kg
            ),
            format!(
                "Gross price per piece: {}",
                format_money(self.result.gross_cost, &self.currency)
            ),
        ]
    }

    /// Price table rows, per-unit and total columns.
    pub fn price_rows(&self) -> Vec<PriceRow> {
        price_rows(&self.result, self.pricing.margin_percent)
    }

    /// Download file name: client slug plus issue date.
    pub fn output_file_name(&self, extension: &str) -> String {
        format!(
            "quote-{}-{}.{}",
            slugify(self.client.display_name()),
            self.issue_date.format("%Y-%m-%d"),
            extension
        )
    }
}

/// Price table rows derived from a cost breakdown.
///
/// The on-screen table and every document renderer build their rows here,
/// from the same stored result.
pub fn price_rows(result: &CalculationResult, margin_percent: f64) -> Vec<PriceRow> {
    vec![
        PriceRow {
            label: "Net cost (before margin)".to_string(),
            unit_amount: result.net_cost,
            total_amount: result.total_net_cost,
            emphasis: false,
        },
        PriceRow {
            label: format!("Margin ({}%)", margin_percent),
            unit_amount: result.margin_amount,
            total_amount: result.total_margin_amount,
            emphasis: false,
        },
        PriceRow {
            label: "Net cost with margin".to_string(),
            unit_amount: result.net_with_margin,
            total_amount: result.total_net_with_margin,
            emphasis: false,
        },
        PriceRow {
            label: "VAT (23%)".to_string(),
            unit_amount: result.vat_amount(),
            total_amount: result.total_vat_amount(),
            emphasis: false,
        },
        PriceRow {
            label: "Gross cost".to_string(),
            unit_amount: result.gross_cost,
            total_amount: result.total_gross_cost,
            emphasis: true,
        },
    ]
}

/// Money formatting shared by all renderers.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

fn dimension_label(field: &'static str) -> &'static str {
    match field {
        "width" => "width",
        "height" => "height",
        "overlap_length" => "overlap",
        "arm1_length" => "arm 1",
        "arm2_length" => "arm 2",
        "arm3_length" => "arm 3",
        other => other,
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "client".to_string()
    } else {
        slug
    }
}
