//! Collider component for circle-vs-circle collision

/// Circular collision volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Collision radius in playfield units
    pub radius: f32,

    /// Whether the entity overlapped another collider this step
    ///
    /// Transient: the collision stage recomputes this flag every step.
    pub is_colliding: bool,
}

impl Collider {
    /// Create a collider with the given radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            is_colliding: false,
        }
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::new(10.0)
    }
}
