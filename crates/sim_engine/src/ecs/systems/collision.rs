//! Collision system
//!
//! Circle-vs-circle overlap testing with naive positional correction. Every
//! unordered pair is tested (O(n²)); acceptable at the tens of entities this
//! engine targets. A spatial partition is the extension point if that ever
//! changes.

use crate::ecs::{ComponentKind, Entity, System};

const REQUIRED: [ComponentKind; 2] = [ComponentKind::Transform, ComponentKind::Collider];

/// System that detects and separates overlapping circle colliders
///
/// Two phases per step: every matched collider's `is_colliding` flag is
/// reset, then each overlapping pair is flagged and pushed apart by half the
/// overlap each along the line between centers. The correction is positional
/// only: not impulse-based and not mass-weighted.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Create a collision system
    pub fn new() -> Self {
        Self
    }

    /// Test one pair, flagging and separating on overlap
    fn resolve_pair(a: &mut Entity, b: &mut Entity) {
        let (Some(transform_a), Some(collider_a)) = (a.transform.as_mut(), a.collider.as_mut())
        else {
            return;
        };
        let (Some(transform_b), Some(collider_b)) = (b.transform.as_mut(), b.collider.as_mut())
        else {
            return;
        };

        let delta = transform_b.position - transform_a.position;
        let distance = delta.norm();
        let combined = collider_a.radius + collider_b.radius;
        if distance >= combined {
            return;
        }

        collider_a.is_colliding = true;
        collider_b.is_colliding = true;

        // Coincident centers have no separation direction; flag the overlap
        // and leave both positions untouched.
        if distance <= f32::EPSILON {
            return;
        }

        let direction = delta / distance;
        let correction = direction * ((combined - distance) * 0.5);
        transform_a.position -= correction;
        transform_b.position += correction;
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn required(&self) -> &'static [ComponentKind] {
        &REQUIRED
    }

    fn process(&mut self, entities: &mut [Entity], matched: &[usize], _dt: f32) {
        // Phase 1: clear last step's flags
        for &index in matched {
            if let Some(collider) = entities[index].collider.as_mut() {
                collider.is_colliding = false;
            }
        }

        // Phase 2: every unordered pair; matched indices are ascending, so
        // splitting at the second index yields two disjoint borrows
        for (slot, &first) in matched.iter().enumerate() {
            for &second in &matched[slot + 1..] {
                let (head, tail) = entities.split_at_mut(second);
                Self::resolve_pair(&mut head[first], &mut tail[0]);
            }
        }
    }
}
