//! Cross-surface consistency checks: the preview and the document consume
//! the same layout, so their geometry must match up to uniform scaling.

use rebarkit_core::BendShape;
use rebarkit_drafting::{layout_shape, render_svg, DrawingPrimitive, Point, Viewport};

fn outline_points(layout: &rebarkit_drafting::ShapeLayout) -> Vec<Point> {
    layout
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawingPrimitive::Segment(s) => Some([s.start, s.end]),
            _ => None,
        })
        .flatten()
        .collect()
}

#[test]
fn test_outline_similar_across_viewports() {
    // Preview-sized and document-sized viewports draw geometrically similar
    // outlines: all pairwise distance ratios equal the scale ratio.
    let shape = BendShape::Rectangle {
        width: 40.0,
        height: 25.0,
        overlap_length: 10.0,
    };
    let preview = Viewport::new(240.0, 240.0, 40.0);
    let document = Viewport::new(280.0, 180.0, 30.0);

    let a = layout_shape(&shape, &preview);
    let b = layout_shape(&shape, &document);
    let ratio = a.scale / b.scale;

    let points_a = outline_points(&a);
    let points_b = outline_points(&b);
    assert_eq!(points_a.len(), points_b.len());

    for i in 0..points_a.len() {
        for j in (i + 1)..points_a.len() {
            let da = points_a[i].distance_to(&points_a[j]);
            let db = points_b[i].distance_to(&points_b[j]);
            if db > 1e-9 {
                assert!((da / db - ratio).abs() < 1e-9);
            } else {
                assert!(da < 1e-9);
            }
        }
    }
}

#[test]
fn test_same_inputs_same_svg_for_both_surfaces() {
    // Both call sites go through layout_shape + render_svg; with identical
    // inputs the emitted documents are byte-identical.
    let shape = BendShape::LBar {
        arm1_length: 35.0,
        arm2_length: 20.0,
    };
    let viewport = Viewport::new(280.0, 180.0, 30.0);

    let preview_svg = render_svg(&layout_shape(&shape, &viewport), &viewport);
    let document_svg = render_svg(&layout_shape(&shape, &viewport), &viewport);
    assert_eq!(preview_svg, document_svg);
}

#[test]
fn test_layout_serializes_for_snapshotting() {
    let shape = BendShape::UBar {
        arm1_length: 30.0,
        width: 20.0,
        arm3_length: 30.0,
    };
    let layout = layout_shape(&shape, &Viewport::default());
    let json = serde_json::to_string(&layout).unwrap();
    let back: rebarkit_drafting::ShapeLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(layout, back);
}
