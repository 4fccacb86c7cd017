//! Particle system
//!
//! Ages particles, fades their sprites, and deactivates them at end of life.

use crate::ecs::{ComponentKind, Entity, System};

const REQUIRED: [ComponentKind; 1] = [ComponentKind::Particle];

/// System that ages particles and retires expired ones
///
/// An expired particle's entity is deactivated here and purged by the store
/// at the start of the next step. When the entity also carries a sprite, its
/// alpha channel tracks the remaining lifetime fraction.
pub struct ParticleSystem;

impl ParticleSystem {
    /// Create a particle system
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for ParticleSystem {
    fn name(&self) -> &'static str {
        "particle"
    }

    fn required(&self) -> &'static [ComponentKind] {
        &REQUIRED
    }

    fn process(&mut self, entities: &mut [Entity], matched: &[usize], dt: f32) {
        for &index in matched {
            let entity = &mut entities[index];
            let Some(particle) = entity.particle.as_mut() else {
                continue;
            };

            particle.advance(dt);
            let fraction = particle.remaining_fraction();
            let expired = particle.is_expired();

            if let Some(sprite) = entity.sprite.as_mut() {
                sprite.color.a = fraction;
            }

            if expired {
                entity.deactivate();
            }
        }
    }
}
