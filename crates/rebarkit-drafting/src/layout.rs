//! Shape-to-drawing mapping.
//!
//! Maps a parametric bend shape into scaled drawing primitives that fit a
//! target viewport. The interactive preview and the printed quotation both
//! consume the same layout; only the viewport differs between them.

use std::f64::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rebarkit_core::BendShape;

use crate::primitives::{DimensionAnnotation, DrawingPrimitive, LabelSide, Point, Segment};
use crate::viewport::Viewport;

/// Half the gap between the two splice indicator lines, in shape units (cm).
const SPLICE_HALF_GAP_CM: f64 = 1.0;

/// Offset of dimension lines from the measured edge, in viewport units.
const DIM_EDGE_OFFSET: f64 = 5.0;

/// Marker text for shapes with no positive dimensions.
const PLACEHOLDER_TEXT: &str = "no dimensions";

/// A shape scaled and positioned for one viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLayout {
    pub primitives: Vec<DrawingPrimitive>,
    /// Viewport units per centimeter of shape.
    pub scale: f64,
}

impl ShapeLayout {
    /// Layout for a shape with no drawable dimensions.
    pub fn placeholder() -> Self {
        Self {
            primitives: vec![DrawingPrimitive::Placeholder(PLACEHOLDER_TEXT.to_string())],
            scale: 1.0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(
            self.primitives.as_slice(),
            [DrawingPrimitive::Placeholder(_)]
        )
    }

    /// Outline and splice segments of the drawing.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.primitives.iter().filter_map(|p| match p {
            DrawingPrimitive::Segment(s) | DrawingPrimitive::Splice(s) => Some(s),
            _ => None,
        })
    }

    /// Dimension annotations of the drawing.
    pub fn dimensions(&self) -> impl Iterator<Item = &DimensionAnnotation> {
        self.primitives.iter().filter_map(|p| match p {
            DrawingPrimitive::Dimension(d) => Some(d),
            _ => None,
        })
    }
}

/// Lays out `shape` to fit `viewport`.
///
/// Returns the placeholder layout when no dimension is positive, so callers
/// never see divide-by-zero coordinates.
pub fn layout_shape(shape: &BendShape, viewport: &Viewport) -> ShapeLayout {
    let positive: Vec<f64> = shape
        .dimensions()
        .into_iter()
        .map(|(_, value)| value)
        .filter(|&value| value > 0.0)
        .collect();
    if positive.is_empty() {
        debug!(kind = %shape.kind(), "degenerate shape, emitting placeholder layout");
        return ShapeLayout::placeholder();
    }

    let mut max_dimension = positive.iter().fold(0.0f64, |a, &b| a.max(b));
    if max_dimension <= 0.0 {
        max_dimension = 1.0;
    }
    let scale = viewport.draw_width().min(viewport.draw_height()) / max_dimension;

    // Logical footprint used to center the drawing; zero extents fall back
    // to the dominant dimension so the anchor stays inside the viewport.
    let (logical_w, logical_h) = match *shape {
        BendShape::Rectangle { width, height, .. } => (width, height),
        BendShape::LBar {
            arm1_length,
            arm2_length,
        } => (arm1_length, arm2_length),
        BendShape::UBar {
            arm1_length, width, ..
        } => (width, arm1_length),
    };
    let logical_w = if logical_w > 0.0 { logical_w } else { max_dimension };
    let logical_h = if logical_h > 0.0 { logical_h } else { max_dimension };

    let origin = Point::new(
        viewport.padding + (viewport.draw_width() - logical_w * scale) / 2.0,
        viewport.padding + (viewport.draw_height() - logical_h * scale) / 2.0,
    );

    let primitives = match *shape {
        BendShape::Rectangle {
            width,
            height,
            overlap_length,
        } => rectangle_primitives(origin, width, height, overlap_length, scale),
        BendShape::LBar {
            arm1_length,
            arm2_length,
        } => l_primitives(origin, arm1_length, arm2_length, scale),
        BendShape::UBar {
            arm1_length,
            width,
            arm3_length,
        } => u_primitives(origin, arm1_length, width, arm3_length, scale),
    };

    ShapeLayout { primitives, scale }
}

/// Closed box outline with the splice indicator in the top-right corner.
fn rectangle_primitives(
    origin: Point,
    width: f64,
    height: f64,
    overlap_length: f64,
    scale: f64,
) -> Vec<DrawingPrimitive> {
    let w = width * scale;
    let h = height * scale;
    let (x, y) = (origin.x, origin.y);

    let corners = [
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ];
    let mut primitives: Vec<DrawingPrimitive> = (0..4)
        .map(|i| DrawingPrimitive::Segment(Segment::new(corners[i], corners[(i + 1) % 4])))
        .collect();

    if overlap_length > 0.0 {
        // Lap splice drawn as two parallel 45° strokes running inward from
        // the top-right corner, separated perpendicular to the diagonal.
        let (sin, cos) = FRAC_PI_4.sin_cos();
        let run = overlap_length * scale;
        let tip = Point::new(x + w, y);
        let heel = Point::new(tip.x - run * cos, tip.y + run * sin);
        let gap = SPLICE_HALF_GAP_CM * scale;
        let (dx, dy) = (gap * sin, gap * cos);

        primitives.push(DrawingPrimitive::Splice(Segment::new(
            Point::new(tip.x + dx, tip.y + dy),
            Point::new(heel.x + dx, heel.y + dy),
        )));
        primitives.push(DrawingPrimitive::Splice(Segment::new(
            Point::new(tip.x - dx, tip.y - dy),
            Point::new(heel.x - dx, heel.y - dy),
        )));
        primitives.push(DrawingPrimitive::Dimension(DimensionAnnotation::new(
            tip,
            heel,
            18.0,
            LabelSide::Below,
            format_dimension(overlap_length),
        )));
    }

    primitives.push(DrawingPrimitive::Dimension(DimensionAnnotation::new(
        Point::new(x, y - DIM_EDGE_OFFSET),
        Point::new(x + w, y - DIM_EDGE_OFFSET),
        8.0,
        LabelSide::Above,
        format_dimension(width),
    )));
    primitives.push(DrawingPrimitive::Dimension(DimensionAnnotation::new(
        Point::new(x - DIM_EDGE_OFFSET, y),
        Point::new(x - DIM_EDGE_OFFSET, y + h),
        12.0,
        LabelSide::Left,
        format_dimension(height),
    )));

    primitives
}

/// Two perpendicular arms: across, then down.
fn l_primitives(origin: Point, arm1: f64, arm2: f64, scale: f64) -> Vec<DrawingPrimitive> {
    let a1 = arm1 * scale;
    let a2 = arm2 * scale;
    let (x, y) = (origin.x, origin.y);
    let elbow = Point::new(x + a1, y);

    vec![
        DrawingPrimitive::Segment(Segment::new(Point::new(x, y), elbow)),
        DrawingPrimitive::Segment(Segment::new(elbow, Point::new(x + a1, y + a2))),
        DrawingPrimitive::Dimension(DimensionAnnotation::new(
            Point::new(x, y - DIM_EDGE_OFFSET),
            Point::new(x + a1, y - DIM_EDGE_OFFSET),
            8.0,
            LabelSide::Above,
            format_dimension(arm1),
        )),
        DrawingPrimitive::Dimension(DimensionAnnotation::new(
            Point::new(x + a1 + DIM_EDGE_OFFSET, y),
            Point::new(x + a1 + DIM_EDGE_OFFSET, y + a2),
            10.0,
            LabelSide::Right,
            format_dimension(arm2),
        )),
    ]
}

/// Open channel: down, across, back up.
fn u_primitives(
    origin: Point,
    arm1: f64,
    width: f64,
    arm3: f64,
    scale: f64,
) -> Vec<DrawingPrimitive> {
    let a1 = arm1 * scale;
    let w = width * scale;
    let a3 = arm3 * scale;
    let (x, y) = (origin.x, origin.y);

    let left_top = Point::new(x, y);
    let left_bottom = Point::new(x, y + a1);
    let right_bottom = Point::new(x + w, y + a1);
    let right_top = Point::new(x + w, y + a1 - a3);

    vec![
        DrawingPrimitive::Segment(Segment::new(left_top, left_bottom)),
        DrawingPrimitive::Segment(Segment::new(left_bottom, right_bottom)),
        DrawingPrimitive::Segment(Segment::new(right_bottom, right_top)),
        DrawingPrimitive::Dimension(DimensionAnnotation::new(
            Point::new(x - DIM_EDGE_OFFSET, y),
            Point::new(x - DIM_EDGE_OFFSET, y + a1),
            7.0,
            LabelSide::Left,
            format_dimension(arm1),
        )),
        DrawingPrimitive::Dimension(DimensionAnnotation::new(
            Point::new(x, y + a1 + DIM_EDGE_OFFSET),
            Point::new(x + w, y + a1 + DIM_EDGE_OFFSET),
            8.0,
            LabelSide::Below,
            format_dimension(width),
        )),
        DrawingPrimitive::Dimension(DimensionAnnotation::new(
            Point::new(x + w + DIM_EDGE_OFFSET, y + a1 - a3),
            Point::new(x + w + DIM_EDGE_OFFSET, y + a1),
            10.0,
            LabelSide::Right,
            format_dimension(arm3),
        )),
    ]
}

/// Dimension label text, e.g. "20 cm" or "12.5 cm".
fn format_dimension(value_cm: f64) -> String {
    if (value_cm - value_cm.round()).abs() < 1e-9 {
        format!("{:.0} cm", value_cm)
    } else {
        format!("{} cm", value_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_outline_closes() {
        let shape = BendShape::Rectangle {
            width: 20.0,
            height: 10.0,
            overlap_length: 5.0,
        };
        let layout = layout_shape(&shape, &Viewport::default());
        let outline: Vec<&Segment> = layout
            .primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::Segment(s) => Some(s),
                _ => None,
            })
            .collect();
        assert_eq!(outline.len(), 4);
        for window in outline.windows(2) {
            assert!(window[0].end.distance_to(&window[1].start) < 1e-9);
        }
        assert!(outline[3].end.distance_to(&outline[0].start) < 1e-9);
    }

    #[test]
    fn test_rectangle_has_splice_pair_and_three_dimensions() {
        let shape = BendShape::Rectangle {
            width: 20.0,
            height: 20.0,
            overlap_length: 10.0,
        };
        let layout = layout_shape(&shape, &Viewport::default());
        let splices: Vec<&Segment> = layout
            .primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::Splice(s) => Some(s),
                _ => None,
            })
            .collect();
        assert_eq!(splices.len(), 2);
        // The two indicator strokes are parallel and equally long.
        assert!((splices[0].length() - splices[1].length()).abs() < 1e-9);
        assert!((splices[0].angle() - splices[1].angle()).abs() < 1e-9);
        assert_eq!(layout.dimensions().count(), 3);
    }

    #[test]
    fn test_zero_overlap_suppresses_splice() {
        let shape = BendShape::Rectangle {
            width: 20.0,
            height: 20.0,
            overlap_length: 0.0,
        };
        let layout = layout_shape(&shape, &Viewport::default());
        assert!(!layout
            .primitives
            .iter()
            .any(|p| matches!(p, DrawingPrimitive::Splice(_))));
        assert_eq!(layout.dimensions().count(), 2);
    }

    #[test]
    fn test_all_zero_dimensions_yield_placeholder() {
        let shape = BendShape::UBar {
            arm1_length: 0.0,
            width: 0.0,
            arm3_length: 0.0,
        };
        let layout = layout_shape(&shape, &Viewport::default());
        assert!(layout.is_placeholder());
        assert_eq!(layout.scale, 1.0);
    }

    #[test]
    fn test_layout_fits_inside_viewport() {
        let viewport = Viewport::new(280.0, 180.0, 30.0);
        let shape = BendShape::UBar {
            arm1_length: 90.0,
            width: 45.0,
            arm3_length: 60.0,
        };
        let layout = layout_shape(&shape, &viewport);
        for segment in layout.segments() {
            for point in [segment.start, segment.end] {
                assert!(point.x >= 0.0 && point.x <= viewport.width);
                assert!(point.y >= 0.0 && point.y <= viewport.height);
            }
        }
    }

    #[test]
    fn test_no_nan_coordinates_for_partial_zero_shapes() {
        let shapes = [
            BendShape::LBar {
                arm1_length: 0.0,
                arm2_length: 30.0,
            },
            BendShape::Rectangle {
                width: 10.0,
                height: 0.0,
                overlap_length: 0.0,
            },
        ];
        for shape in shapes {
            let layout = layout_shape(&shape, &Viewport::default());
            assert!(layout.scale.is_finite());
            for segment in layout.segments() {
                assert!(segment.start.x.is_finite() && segment.start.y.is_finite());
                assert!(segment.end.x.is_finite() && segment.end.y.is_finite());
            }
            for dim in layout.dimensions() {
                let anchor = dim.label_anchor();
                assert!(anchor.x.is_finite() && anchor.y.is_finite());
            }
        }
    }

    #[test]
    fn test_uniform_dimension_scaling_is_geometry_invariant() {
        // Doubling every dimension halves the fit scale, so the drawn
        // geometry is identical; only the label text changes.
        let viewport = Viewport::default();
        let base = BendShape::UBar {
            arm1_length: 30.0,
            width: 20.0,
            arm3_length: 25.0,
        };
        let doubled = BendShape::UBar {
            arm1_length: 60.0,
            width: 40.0,
            arm3_length: 50.0,
        };
        let a = layout_shape(&base, &viewport);
        let b = layout_shape(&doubled, &viewport);

        assert!((a.scale - 2.0 * b.scale).abs() < 1e-9);
        let seg_a: Vec<&Segment> = a.segments().collect();
        let seg_b: Vec<&Segment> = b.segments().collect();
        assert_eq!(seg_a.len(), seg_b.len());
        for (sa, sb) in seg_a.iter().zip(&seg_b) {
            assert!(sa.start.distance_to(&sb.start) < 1e-9);
            assert!(sa.end.distance_to(&sb.end) < 1e-9);
        }
    }

    #[test]
    fn test_dimension_labels_carry_values() {
        let shape = BendShape::LBar {
            arm1_length: 20.0,
            arm2_length: 12.5,
        };
        let layout = layout_shape(&shape, &Viewport::default());
        let texts: Vec<&str> = layout.dimensions().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["20 cm", "12.5 cm"]);
    }
}
