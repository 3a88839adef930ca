//! Error handling for the cost engine.
//!
//! Invalid inputs are rejected before any arithmetic runs, so a
//! `CalculationResult` is only ever produced from a fully valid parameter
//! set. All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised while validating cost-engine inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostingError {
    /// A shape dimension is negative.
    #[error("Dimension '{field}' must not be negative, got {value}")]
    NegativeDimension {
        /// Name of the offending shape field.
        field: &'static str,
        /// The rejected value in centimeters.
        value: f64,
    },

    /// Margin percentage outside the accepted range.
    #[error("Margin must be between 0 and 100 percent, got {margin}")]
    MarginOutOfRange {
        /// The rejected margin percentage.
        margin: f64,
    },

    /// Quantity below the minimum of one piece.
    #[error("Quantity must be at least 1, got {quantity}")]
    QuantityTooSmall {
        /// The rejected quantity.
        quantity: u32,
    },

    /// No catalog entry matches the requested bar diameter.
    #[error("No rebar specification for diameter {diameter_mm}mm")]
    UnknownDiameter {
        /// The requested diameter in millimeters.
        diameter_mm: u32,
    },

    /// A shape family name could not be parsed.
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),
}

/// Result type using CostingError
pub type Result<T> = std::result::Result<T, CostingError>;
