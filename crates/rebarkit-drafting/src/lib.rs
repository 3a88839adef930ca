//! # Rebarkit Drafting
//!
//! Maps parametric bend shapes to drawing primitives and emits them as SVG.
//! One layout function and one label-placement function serve every
//! rendering surface, so the on-screen preview and the printed quotation
//! can never disagree about the drawing.

pub mod layout;
pub mod primitives;
pub mod svg;
pub mod viewport;

pub use layout::{layout_shape, ShapeLayout};
pub use primitives::{DimensionAnnotation, DrawingPrimitive, LabelSide, Point, Segment};
pub use svg::render_svg;
pub use viewport::Viewport;
