//! Velocity component for entities that move

use crate::foundation::math::Vec2;

/// Linear velocity with multiplicative friction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Linear velocity in units per second
    pub linear: Vec2,

    /// Friction coefficient the movement stage multiplies the velocity by
    /// each step (1.0 = frictionless)
    pub friction: f32,
}

impl Velocity {
    /// Create a frictionless velocity
    pub fn new(linear: Vec2) -> Self {
        Self {
            linear,
            friction: 1.0,
        }
    }

    /// Set the friction coefficient, consuming and returning the velocity
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Current speed in units per second
    pub fn speed(&self) -> f32 {
        self.linear.norm()
    }

    /// Stop all movement
    pub fn stop(&mut self) {
        self.linear = Vec2::new(0.0, 0.0);
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, 0.0))
    }
}
