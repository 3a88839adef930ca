//! # Rebarkit Core
//!
//! Core types and the cost engine for the rebar quotation calculator.
//! Provides the bent-bar shape model, the diameter-keyed stock catalog,
//! pricing inputs, and the pure cost computation shared by every surface.

pub mod catalog;
pub mod costing;
pub mod error;
pub mod pricing;
pub mod shape;

pub use catalog::{RebarCatalog, RebarSpec};
pub use costing::{compute_cost, compute_cost_with_catalog, CalculationResult};
pub use error::{CostingError, Result};
pub use pricing::{margin_steps, PricingInputs, MARGIN_STEP, VAT_RATE};
pub use shape::{BendShape, ShapeKind, DEFAULT_OVERLAP_CM};
