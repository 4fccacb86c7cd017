//! Movement system
//!
//! Integrates positions from velocities, applies friction, and bounces
//! entities off the playfield bounds.

use crate::ecs::{ComponentKind, Entity, System};
use crate::foundation::math::Bounds;

const REQUIRED: [ComponentKind; 2] = [ComponentKind::Transform, ComponentKind::Velocity];

/// System that moves entities and keeps them inside the playfield
///
/// The boundary response is an inelastic one-axis bounce: the position is
/// clamped to the bound and that axis's velocity sign is flipped inward.
pub struct MovementSystem {
    bounds: Bounds,
}

impl MovementSystem {
    /// Create a movement system confined to the given bounds
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// The playfield bounds this system confines entities to
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn required(&self) -> &'static [ComponentKind] {
        &REQUIRED
    }

    fn process(&mut self, entities: &mut [Entity], matched: &[usize], dt: f32) {
        for &index in matched {
            let entity = &mut entities[index];
            let (Some(transform), Some(velocity)) =
                (entity.transform.as_mut(), entity.velocity.as_mut())
            else {
                continue;
            };

            transform.position += velocity.linear * dt;
            velocity.linear *= velocity.friction;

            if transform.position.x < self.bounds.min.x {
                transform.position.x = self.bounds.min.x;
                velocity.linear.x = velocity.linear.x.abs();
            } else if transform.position.x > self.bounds.max.x {
                transform.position.x = self.bounds.max.x;
                velocity.linear.x = -velocity.linear.x.abs();
            }

            if transform.position.y < self.bounds.min.y {
                transform.position.y = self.bounds.min.y;
                velocity.linear.y = velocity.linear.y.abs();
            } else if transform.position.y > self.bounds.max.y {
                transform.position.y = self.bounds.max.y;
                velocity.linear.y = -velocity.linear.y.abs();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Transform, Velocity};
    use crate::ecs::{Component, World};
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    fn world_with_mover(position: Vec2, velocity: Velocity) -> (World, crate::ecs::EntityId) {
        let mut world = World::new();
        let entity = world.spawn();
        entity.attach(Component::Transform(Transform::at(position)));
        entity.attach(Component::Velocity(velocity));
        let id = entity.id();
        (world, id)
    }

    #[test]
    fn test_integration_and_friction() {
        let (mut world, id) =
            world_with_mover(Vec2::new(100.0, 100.0), Velocity::new(Vec2::new(30.0, -20.0)).with_friction(0.9));
        let mut system = MovementSystem::new(Bounds::default());

        system.update(world.entities_mut(), 0.5);

        let entity = world.entity(id).unwrap();
        let transform = entity.transform.as_ref().unwrap();
        let velocity = entity.velocity.as_ref().unwrap();
        assert_relative_eq!(transform.position, Vec2::new(115.0, 90.0));
        assert_relative_eq!(velocity.linear, Vec2::new(27.0, -18.0));
    }

    #[test]
    fn test_boundary_clamp_and_bounce() {
        // Starting outside the low x bound with inward-pointing progress:
        // the position clamps to the bound and vx flips positive.
        let (mut world, id) =
            world_with_mover(Vec2::new(10.0, 100.0), Velocity::new(Vec2::new(-5.0, 0.0)));
        let mut system = MovementSystem::new(Bounds::default());

        system.update(world.entities_mut(), 0.016);

        let entity = world.entity(id).unwrap();
        assert_relative_eq!(entity.transform.as_ref().unwrap().position.x, 20.0);
        assert_relative_eq!(entity.velocity.as_ref().unwrap().linear.x, 5.0);
    }

    #[test]
    fn test_high_bound_bounce() {
        let (mut world, id) =
            world_with_mover(Vec2::new(579.0, 379.0), Velocity::new(Vec2::new(200.0, 200.0)));
        let mut system = MovementSystem::new(Bounds::default());

        system.update(world.entities_mut(), 0.1);

        let entity = world.entity(id).unwrap();
        let transform = entity.transform.as_ref().unwrap();
        let velocity = entity.velocity.as_ref().unwrap();
        assert_relative_eq!(transform.position, Vec2::new(580.0, 380.0));
        assert!(velocity.linear.x < 0.0);
        assert!(velocity.linear.y < 0.0);
    }

    #[test]
    fn test_entities_without_velocity_are_skipped() {
        let mut world = World::new();
        let entity = world.spawn();
        entity.attach(Component::Transform(Transform::at(Vec2::new(5.0, 5.0))));
        let id = entity.id();

        let mut system = MovementSystem::new(Bounds::default());
        system.update(world.entities_mut(), 1.0);

        // Outside the bounds, but invisible to the system without a velocity
        let entity = world.entity(id).unwrap();
        assert_relative_eq!(entity.transform.as_ref().unwrap().position, Vec2::new(5.0, 5.0));
    }
}
