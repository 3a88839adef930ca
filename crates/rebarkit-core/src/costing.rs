//! The cost engine.
//!
//! Pure mapping from shape parameters, a bar specification, and pricing
//! inputs to a full cost breakdown. Deterministic and free of side effects,
//! so callers can re-run it on every parameter change.
//!
//! Margin and VAT apply multiplicatively in a fixed order:
//! net → +margin → +VAT. Weight and every cost field scale linearly with
//! quantity.

use serde::{Deserialize, Serialize};

use crate::catalog::{RebarCatalog, RebarSpec};
use crate::error::Result;
use crate::pricing::{PricingInputs, VAT_RATE};
use crate::shape::BendShape;

/// Cost breakdown for one shape: per-unit figures plus quantity totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Straightened bar length of a single piece, in meters.
    pub length_m: f64,
    /// Weight of a single piece, in kilograms.
    pub weight_kg: f64,
    /// Material cost of a single piece before margin.
    pub net_cost: f64,
    /// Margin amount for a single piece.
    pub margin_amount: f64,
    /// Net cost with margin for a single piece.
    pub net_with_margin: f64,
    /// Tax-inclusive cost of a single piece.
    pub gross_cost: f64,

    /// Weight of all quoted pieces.
    pub total_weight_kg: f64,
    /// Net cost of all quoted pieces before margin.
    pub total_net_cost: f64,
    /// Margin amount for all quoted pieces.
    pub total_margin_amount: f64,
    /// Net cost with margin for all quoted pieces.
    pub total_net_with_margin: f64,
    /// Tax-inclusive cost of all quoted pieces.
    pub total_gross_cost: f64,
}

impl CalculationResult {
    /// VAT amount for a single piece.
    pub fn vat_amount(&self) -> f64 {
        self.gross_cost - self.net_with_margin
    }

    /// VAT amount for all quoted pieces.
    pub fn total_vat_amount(&self) -> f64 {
        self.total_gross_cost - self.total_net_with_margin
    }
}

/// Computes the cost breakdown for `shape` cut from `rebar` stock.
///
/// Inputs are validated first; no partial result is ever produced.
pub fn compute_cost(
    shape: &BendShape,
    rebar: &RebarSpec,
    pricing: &PricingInputs,
) -> Result<CalculationResult> {
    shape.validate()?;
    pricing.validate()?;

    let length_m = shape.total_length_m();
    let weight_kg = length_m * rebar.weight_per_meter;
    let net_cost = weight_kg * rebar.price_per_kg;
    let margin_amount = net_cost * pricing.margin_percent / 100.0;
    let net_with_margin = net_cost + margin_amount;
    let gross_cost = net_with_margin * (1.0 + VAT_RATE);

    let quantity = f64::from(pricing.effective_quantity());
    Ok(CalculationResult {
        length_m,
        weight_kg,
        net_cost,
        margin_amount,
        net_with_margin,
        gross_cost,
        total_weight_kg: weight_kg * quantity,
        total_net_cost: net_cost * quantity,
        total_margin_amount: margin_amount * quantity,
        total_net_with_margin: net_with_margin * quantity,
        total_gross_cost: gross_cost * quantity,
    })
}

/// Looks up the bar specification in `catalog` and computes the breakdown.
pub fn compute_cost_with_catalog(
    shape: &BendShape,
    catalog: &RebarCatalog,
    diameter_mm: u32,
    pricing: &PricingInputs,
) -> Result<CalculationResult> {
    let rebar = catalog.get(diameter_mm)?;
    compute_cost(shape, rebar, pricing)
}
