//! Particle component
//!
//! Tracks particle age for automatic despawning by the particle stage.

/// Lifetime tracking for short-lived entities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// How long the particle should live, in seconds
    pub lifetime: f32,

    /// Accumulated age in seconds
    pub age: f32,
}

impl Particle {
    /// Create a particle with the given lifetime and zero age
    pub fn new(lifetime: f32) -> Self {
        Self { lifetime, age: 0.0 }
    }

    /// Age the particle by one step
    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
    }

    /// Check if the particle's lifetime has run out
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Fraction of lifetime remaining, clamped to [0, 1]
    pub fn remaining_fraction(&self) -> f32 {
        if self.lifetime <= 0.0 {
            0.0
        } else {
            (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
        }
    }
}
