//! Drawing primitive definitions: Point, Segment, DimensionAnnotation,
//! LabelSide, DrawingPrimitive.

use serde::{Deserialize, Serialize};

/// Half-length of a dimension-line tick mark, in viewport units.
const TICK_HALF_LEN: f64 = 2.0;

/// Drawing coordinates in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Direction angle in radians, `atan2(dy, dx)`.
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }
}

/// Which side of the measured edge the label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSide {
    Above,
    Below,
    Left,
    Right,
}

/// A dimension line with tick marks and a measurement label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionAnnotation {
    pub start: Point,
    pub end: Point,
    /// Label distance from the dimension line, in viewport units.
    pub offset: f64,
    pub side: LabelSide,
    pub text: String,
}

impl DimensionAnnotation {
    pub fn new(
        start: Point,
        end: Point,
        offset: f64,
        side: LabelSide,
        text: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            offset,
            side,
            text: text.into(),
        }
    }

    fn line(&self) -> Segment {
        Segment::new(self.start, self.end)
    }

    /// Label anchor point, computed by rotating a perpendicular offset
    /// vector by the dimension line's angle.
    ///
    /// Every rendering surface places labels through this one function, so
    /// the interactive preview and the printed document cannot drift apart.
    pub fn label_anchor(&self) -> Point {
        let mid = self.line().midpoint();
        let angle = self.line().angle();
        let (sin, cos) = angle.sin_cos();
        match self.side {
            LabelSide::Above => Point::new(mid.x - self.offset * sin, mid.y + self.offset * cos),
            LabelSide::Below => Point::new(mid.x + self.offset * sin, mid.y - self.offset * cos),
            LabelSide::Right => Point::new(mid.x + self.offset * cos, mid.y + self.offset * sin),
            LabelSide::Left => Point::new(mid.x - self.offset * cos, mid.y - self.offset * sin),
        }
    }

    /// Perpendicular tick marks at both endpoints of the dimension line.
    pub fn tick_marks(&self) -> [Segment; 2] {
        let (sin, cos) = self.line().angle().sin_cos();
        let tick = |p: Point| {
            Segment::new(
                Point::new(p.x - TICK_HALF_LEN * sin, p.y + TICK_HALF_LEN * cos),
                Point::new(p.x + TICK_HALF_LEN * sin, p.y - TICK_HALF_LEN * cos),
            )
        };
        [tick(self.start), tick(self.end)]
    }
}

/// One element of a shape drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawingPrimitive {
    /// Outline segment of the bent bar.
    Segment(Segment),
    /// Splice/overlap indicator segment, rendered in a contrasting stroke.
    Splice(Segment),
    /// Dimension line with tick marks and a measurement label.
    Dimension(DimensionAnnotation),
    /// Marker shown when the shape has no positive dimensions.
    Placeholder(String),
}
