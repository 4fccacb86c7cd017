//! Transform component for entities with a position in the playfield

use crate::foundation::math::Vec2;

/// Position, rotation, and uniform scale in 2D
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in playfield coordinates
    pub position: Vec2,

    /// Rotation in radians
    pub rotation: f32,

    /// Uniform scale factor
    pub scale: f32,
}

impl Transform {
    /// Create a transform at the given position with no rotation and unit scale
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Set the rotation, consuming and returning the transform
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the scale, consuming and returning the transform
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Move the position by the given delta
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec2::new(0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_transform() {
        let transform = Transform::default();
        assert_relative_eq!(transform.position, Vec2::new(0.0, 0.0));
        assert_relative_eq!(transform.rotation, 0.0);
        assert_relative_eq!(transform.scale, 1.0);
    }

    #[test]
    fn test_translate() {
        let mut transform = Transform::at(Vec2::new(10.0, 20.0));
        transform.translate(Vec2::new(-5.0, 5.0));
        assert_relative_eq!(transform.position, Vec2::new(5.0, 25.0));
    }

    #[test]
    fn test_builders() {
        let transform = Transform::at(Vec2::new(1.0, 1.0))
            .with_rotation(1.5)
            .with_scale(2.0);
        assert_relative_eq!(transform.rotation, 1.5);
        assert_relative_eq!(transform.scale, 2.0);
    }
}
