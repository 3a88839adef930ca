//! SVG emission for shape layouts.
//!
//! Writes the drawing primitives as a standalone `<svg>` element. The
//! preview surface and the quotation document both embed this exact output,
//! which keeps the two renderings in lockstep by construction.

use std::fmt::Write;

use crate::layout::ShapeLayout;
use crate::primitives::{DimensionAnnotation, DrawingPrimitive, LabelSide, Segment};
use crate::viewport::Viewport;

const OUTLINE_STROKE: &str = "#2563eb";
const SPLICE_STROKE: &str = "#dc2626";
const DIMENSION_STROKE: &str = "#6b7280";
const LABEL_FILL: &str = "#4b5563";
const LABEL_FONT_SIZE: f64 = 10.0;

/// Renders a laid-out shape as an SVG document string.
pub fn render_svg(layout: &ShapeLayout, viewport: &Viewport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        viewport.width, viewport.height, viewport.width, viewport.height
    );

    for primitive in &layout.primitives {
        match primitive {
            DrawingPrimitive::Segment(segment) => {
                write_line(&mut out, segment, OUTLINE_STROKE, 2.0, None);
            }
            DrawingPrimitive::Splice(segment) => {
                write_line(&mut out, segment, SPLICE_STROKE, 2.0, None);
            }
            DrawingPrimitive::Dimension(dim) => write_dimension(&mut out, dim),
            DrawingPrimitive::Placeholder(text) => {
                let center = viewport.center();
                let _ = writeln!(
                    out,
                    r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
                    center.x, center.y, LABEL_FONT_SIZE, LABEL_FILL, text
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_line(out: &mut String, segment: &Segment, stroke: &str, width: f64, dash: Option<&str>) {
    let dash_attr = match dash {
        Some(pattern) => format!(r#" stroke-dasharray="{}""#, pattern),
        None => String::new(),
    };
    let _ = writeln!(
        out,
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"{}/>"#,
        segment.start.x, segment.start.y, segment.end.x, segment.end.y, stroke, width, dash_attr
    );
}

fn write_dimension(out: &mut String, dim: &DimensionAnnotation) {
    let line = Segment::new(dim.start, dim.end);
    write_line(out, &line, DIMENSION_STROKE, 1.0, Some("4 2"));
    for tick in dim.tick_marks() {
        write_line(out, &tick, DIMENSION_STROKE, 1.0, None);
    }

    let anchor = dim.label_anchor();
    let text_anchor = match dim.side {
        LabelSide::Right => "start",
        LabelSide::Left => "end",
        LabelSide::Above | LabelSide::Below => "middle",
    };
    let _ = writeln!(
        out,
        r#"  <text x="{:.2}" y="{:.2}" text-anchor="{}" font-size="{}" fill="{}">{}</text>"#,
        anchor.x, anchor.y, text_anchor, LABEL_FONT_SIZE, LABEL_FILL, dim.text
    );
}
