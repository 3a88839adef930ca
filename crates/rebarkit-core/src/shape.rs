//! Parametric bent-bar shapes.
//!
//! Three bend families are supported: a closed rectangular stirrup, an
//! L-shaped bar, and a U-shaped channel. Each variant carries only the
//! dimensions its family uses, so invalid combinations are
//! unrepresentable. All lengths are centimeters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CostingError, Result};

/// Default splice/overlap allowance for closed rectangular stirrups, in cm.
pub const DEFAULT_OVERLAP_CM: f64 = 10.0;

/// A bent reinforcement-bar shape with its bending dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum BendShape {
    /// Closed rectangular stirrup with a lap splice where the two bent
    /// ends meet.
    Rectangle {
        width: f64,
        height: f64,
        overlap_length: f64,
    },
    /// Two perpendicular arms.
    #[serde(rename = "l")]
    LBar { arm1_length: f64, arm2_length: f64 },
    /// Open channel: two upright arms joined by a base.
    #[serde(rename = "u")]
    UBar {
        arm1_length: f64,
        width: f64,
        arm3_length: f64,
    },
}

impl BendShape {
    /// Rectangle with the standard overlap allowance.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::Rectangle {
            width,
            height,
            overlap_length: DEFAULT_OVERLAP_CM,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::LBar { .. } => ShapeKind::LBar,
            Self::UBar { .. } => ShapeKind::UBar,
        }
    }

    /// Named dimensions of this shape, in declaration order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Rectangle {
                width,
                height,
                overlap_length,
            } => vec![
                ("width", width),
                ("height", height),
                ("overlap_length", overlap_length),
            ],
            Self::LBar {
                arm1_length,
                arm2_length,
            } => vec![("arm1_length", arm1_length), ("arm2_length", arm2_length)],
            Self::UBar {
                arm1_length,
                width,
                arm3_length,
            } => vec![
                ("arm1_length", arm1_length),
                ("width", width),
                ("arm3_length", arm3_length),
            ],
        }
    }

    /// Rejects any negative dimension.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.dimensions() {
            if value < 0.0 {
                return Err(CostingError::NegativeDimension { field, value });
            }
        }
        Ok(())
    }

    /// Total straightened bar length in centimeters.
    ///
    /// The length is always derived from the shape parameters, never stored
    /// independently.
    pub fn total_length_cm(&self) -> f64 {
        match *self {
            Self::Rectangle {
                width,
                height,
                overlap_length,
            } => 2.0 * width + 2.0 * height + overlap_length,
            Self::LBar {
                arm1_length,
                arm2_length,
            } => arm1_length + arm2_length,
            Self::UBar {
                arm1_length,
                width,
                arm3_length,
            } => arm1_length + width + arm3_length,
        }
    }

    /// Total straightened bar length in meters.
    pub fn total_length_m(&self) -> f64 {
        self.total_length_cm() / 100.0
    }
}

impl Default for BendShape {
    fn default() -> Self {
        Self::rectangle(20.0, 20.0)
    }
}

/// Shape family discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    #[serde(rename = "l")]
    LBar,
    #[serde(rename = "u")]
    UBar,
}

impl ShapeKind {
    /// Human-readable family name for documents and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::LBar => "L shape",
            Self::UBar => "U shape",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "rectangle"),
            Self::LBar => write!(f, "l"),
            Self::UBar => write!(f, "u"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "l" | "lbar" => Ok(Self::LBar),
            "u" | "ubar" => Ok(Self::UBar),
            other => Err(CostingError::UnknownShapeKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_length_includes_overlap() {
        let shape = BendShape::Rectangle {
            width: 20.0,
            height: 20.0,
            overlap_length: 5.0,
        };
        assert!((shape.total_length_cm() - 85.0).abs() < 1e-12);
        assert!((shape.total_length_m() - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_l_and_u_lengths() {
        let l = BendShape::LBar {
            arm1_length: 20.0,
            arm2_length: 20.0,
        };
        assert!((l.total_length_m() - 0.40).abs() < 1e-12);

        let u = BendShape::UBar {
            arm1_length: 15.0,
            width: 10.0,
            arm3_length: 15.0,
        };
        assert!((u.total_length_m() - 0.40).abs() < 1e-12);
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let shape = BendShape::LBar {
            arm1_length: -1.0,
            arm2_length: 20.0,
        };
        assert_eq!(
            shape.validate(),
            Err(CostingError::NegativeDimension {
                field: "arm1_length",
                value: -1.0,
            })
        );
    }

    #[test]
    fn test_shape_kind_parsing() {
        assert_eq!("rectangle".parse::<ShapeKind>(), Ok(ShapeKind::Rectangle));
        assert_eq!("L".parse::<ShapeKind>(), Ok(ShapeKind::LBar));
        assert_eq!("u".parse::<ShapeKind>(), Ok(ShapeKind::UBar));
        assert!("hexagon".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_default_rectangle_uses_standard_overlap() {
        match BendShape::default() {
            BendShape::Rectangle { overlap_length, .. } => {
                assert_eq!(overlap_length, DEFAULT_OVERLAP_CM)
            }
            other => panic!("unexpected default shape: {:?}", other),
        }
    }
}
