//! AI system
//!
//! Applies wander, seek, and flee steering to entity velocities.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ecs::components::AiBehavior;
use crate::ecs::{ComponentKind, Entity, System};

const REQUIRED: [ComponentKind; 3] = [
    ComponentKind::Transform,
    ComponentKind::Ai,
    ComponentKind::Velocity,
];

/// Per-frame probability of a wander impulse
const WANDER_CHANCE: f32 = 0.02;

/// Wander impulse range on each velocity axis
const WANDER_IMPULSE: f32 = 50.0;

/// Seek acceleration in units per second squared
const SEEK_ACCEL: f32 = 50.0;

/// Flee acceleration in units per second squared
const FLEE_ACCEL: f32 = 100.0;

/// Flee only reacts to targets inside this distance band
const FLEE_NEAR: f32 = 1.0;
const FLEE_FAR: f32 = 100.0;

/// System that steers AI entities by nudging their velocities
///
/// Seek applies a constant-magnitude pull with no damping near the target,
/// so seekers overshoot and oscillate around it rather than settling. That
/// oscillation is intended behavior, not an integration bug.
pub struct AiSystem {
    rng: SmallRng,
}

impl AiSystem {
    /// Create an AI system with an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create an AI system with a fixed seed, for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for AiSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for AiSystem {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn required(&self) -> &'static [ComponentKind] {
        &REQUIRED
    }

    fn process(&mut self, entities: &mut [Entity], matched: &[usize], dt: f32) {
        for &index in matched {
            let entity = &mut entities[index];
            let (Some(transform), Some(ai), Some(velocity)) = (
                entity.transform.as_ref(),
                entity.ai.as_ref(),
                entity.velocity.as_mut(),
            ) else {
                continue;
            };

            match ai.behavior {
                AiBehavior::Wander => {
                    if self.rng.gen::<f32>() < WANDER_CHANCE {
                        velocity.linear.x += self.rng.gen_range(-WANDER_IMPULSE..=WANDER_IMPULSE);
                        velocity.linear.y += self.rng.gen_range(-WANDER_IMPULSE..=WANDER_IMPULSE);
                    }
                }
                AiBehavior::Seek => {
                    if let Some(target) = ai.target {
                        let to_target = target - transform.position;
                        let distance = to_target.norm();
                        if distance > f32::EPSILON {
                            velocity.linear += to_target / distance * (SEEK_ACCEL * dt);
                        }
                    }
                }
                AiBehavior::Flee => {
                    if let Some(target) = ai.target {
                        let away = transform.position - target;
                        let distance = away.norm();
                        if distance > FLEE_NEAR && distance < FLEE_FAR {
                            velocity.linear += away / distance * (FLEE_ACCEL * dt);
                        }
                    }
                }
            }
        }
    }
}
