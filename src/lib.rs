//! # Rebarkit
//!
//! A rebar bending cost calculator: computes the material cost of bent
//! reinforcement-bar elements, draws a schematic preview of the bent shape,
//! and generates priced client quotation documents.
//!
//! ## Architecture
//!
//! Rebarkit is organized as a workspace with multiple crates:
//!
//! 1. **rebarkit-core** - Shape model, rebar catalog, pricing, cost engine
//! 2. **rebarkit-drafting** - Drawing primitives, shape layout, SVG emission
//! 3. **rebarkit-quote** - Quotation assembly and document renderers
//! 4. **rebarkit-settings** - Configuration management
//! 5. **rebarkit** - Main binary exposing the CLI
//!
//! Every surface computes through the same pure functions: the price table,
//! the shape preview, and the downloadable quotation are different views of
//! one parameter snapshot.

pub use rebarkit_core::{
    compute_cost, compute_cost_with_catalog, margin_steps, BendShape, CalculationResult,
    CostingError, PricingInputs, RebarCatalog, RebarSpec, ShapeKind, DEFAULT_OVERLAP_CM,
    MARGIN_STEP, VAT_RATE,
};

pub use rebarkit_drafting::{
    layout_shape, render_svg, DimensionAnnotation, DrawingPrimitive, LabelSide, Point, Segment,
    ShapeLayout, Viewport,
};

pub use rebarkit_quote::{
    format_money, price_rows, ClientIdentity, HtmlRenderer, IssuerIdentity, PriceRow, Quotation,
    QuotationRenderer, QuoteError, TextRenderer, DEFAULT_VALIDITY_DAYS,
};

pub use rebarkit_settings::{
    config_dir, default_config_path, CalculatorSettings, Config, DocumentSettings, SettingsError,
};

/// Build timestamp injected by build.rs.
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging for the binary.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // Results go to stdout; keep diagnostics on stderr.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
