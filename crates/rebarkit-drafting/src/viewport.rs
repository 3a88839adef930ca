//! Target drawing viewport.

use serde::{Deserialize, Serialize};

use crate::primitives::Point;

/// Rectangular drawing target with uniform padding, in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Usable drawing width inside the padding.
    pub fn draw_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    /// Usable drawing height inside the padding.
    pub fn draw_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(240.0, 240.0, 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_area_subtracts_padding() {
        let viewport = Viewport::new(280.0, 180.0, 30.0);
        assert_eq!(viewport.draw_width(), 220.0);
        assert_eq!(viewport.draw_height(), 120.0);
    }

    #[test]
    fn test_oversized_padding_clamps_to_zero() {
        let viewport = Viewport::new(50.0, 50.0, 40.0);
        assert_eq!(viewport.draw_width(), 0.0);
        assert_eq!(viewport.draw_height(), 0.0);
    }
}
