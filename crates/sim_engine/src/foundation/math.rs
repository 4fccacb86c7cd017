//! Math utilities and types
//!
//! Provides fundamental math types for 2D simulation.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Axis-aligned rectangular bounds for the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: Vec2,

    /// Maximum corner
    pub max: Vec2,
}

impl Bounds {
    /// Create bounds from two corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Width of the bounded region
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the bounded region
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the bounded region
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check whether a point lies inside the bounds (inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Vec2::new(20.0, 20.0),
            max: Vec2::new(580.0, 380.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_bounds_dimensions() {
        let bounds = Bounds::default();
        assert_relative_eq!(bounds.width(), 560.0);
        assert_relative_eq!(bounds.height(), 360.0);
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::default();
        assert!(bounds.contains(Vec2::new(300.0, 200.0)));
        assert!(bounds.contains(Vec2::new(20.0, 20.0)));
        assert!(!bounds.contains(Vec2::new(10.0, 200.0)));
        assert!(!bounds.contains(Vec2::new(300.0, 400.0)));
    }

    #[test]
    fn test_center() {
        let bounds = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0));
        assert_relative_eq!(bounds.center(), Vec2::new(50.0, 25.0));
    }
}
