//! Archetype factories
//!
//! Creation templates for the demo's entity kinds. The engine does not
//! validate archetype shape; a system only ever sees the entities that hold
//! its required components, whatever else they carry.

use rand::Rng;
use sim_engine::prelude::*;

/// Spawn the player: a cyan triangle with health, movement, and a collider
pub fn spawn_player(world: &mut World, position: Vec2) -> EntityId {
    let entity = world.spawn();
    entity.attach(Component::Transform(Transform::at(position)));
    entity.attach(Component::Velocity(
        Velocity::new(Vec2::new(0.0, 0.0)).with_friction(0.95),
    ));
    entity.attach(Component::Health(Health::new(100)));
    entity.attach(Component::Sprite(Sprite::new(
        Shape::Triangle,
        12.0,
        Color::opaque(0.2, 0.9, 0.9),
    )));
    entity.attach(Component::Collider(Collider::new(12.0)));
    entity.id()
}

/// Spawn a seeking enemy: a red circle that chases its target
pub fn spawn_enemy(world: &mut World, position: Vec2) -> EntityId {
    let entity = world.spawn();
    entity.attach(Component::Transform(Transform::at(position)));
    entity.attach(Component::Velocity(
        Velocity::new(Vec2::new(0.0, 0.0)).with_friction(0.98),
    ));
    entity.attach(Component::Health(Health::new(30)));
    entity.attach(Component::Sprite(Sprite::new(
        Shape::Circle,
        10.0,
        Color::opaque(0.9, 0.2, 0.2),
    )));
    entity.attach(Component::Collider(Collider::new(10.0)));
    entity.attach(Component::Ai(Ai::new(AiBehavior::Seek)));
    entity.id()
}

/// Spawn a wandering enemy: an orange circle drifting on random impulses
pub fn spawn_wanderer(world: &mut World, position: Vec2) -> EntityId {
    let entity = world.spawn();
    entity.attach(Component::Transform(Transform::at(position)));
    entity.attach(Component::Velocity(
        Velocity::new(Vec2::new(0.0, 0.0)).with_friction(0.99),
    ));
    entity.attach(Component::Health(Health::new(20)));
    entity.attach(Component::Sprite(Sprite::new(
        Shape::Circle,
        8.0,
        Color::opaque(0.9, 0.6, 0.1),
    )));
    entity.attach(Component::Collider(Collider::new(8.0)));
    entity.attach(Component::Ai(Ai::new(AiBehavior::Wander)));
    entity.id()
}

/// Spawn a powerup: a small static square with a collider and no velocity
pub fn spawn_powerup(world: &mut World, position: Vec2) -> EntityId {
    let entity = world.spawn();
    entity.attach(Component::Transform(Transform::at(position)));
    entity.attach(Component::Sprite(Sprite::new(
        Shape::Rect,
        6.0,
        Color::opaque(0.9, 0.9, 0.2),
    )));
    entity.attach(Component::Collider(Collider::new(6.0)));
    entity.id()
}

/// Spawn a burst of short-lived particles radiating from an origin
pub fn spawn_particle_burst(
    world: &mut World,
    origin: Vec2,
    count: u32,
    lifetime: f32,
    rng: &mut impl Rng,
) {
    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(20.0..80.0);
        let direction = Vec2::new(angle.cos(), angle.sin());

        let entity = world.spawn();
        entity.attach(Component::Transform(Transform::at(origin)));
        entity.attach(Component::Velocity(
            Velocity::new(direction * speed).with_friction(0.96),
        ));
        entity.attach(Component::Particle(Particle::new(lifetime)));
        entity.attach(Component::Sprite(Sprite::new(
            Shape::Circle,
            2.0,
            Color::opaque(1.0, 0.8, 0.3),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_player_archetype_shape() {
        let mut world = World::new();
        let id = spawn_player(&mut world, Vec2::new(300.0, 200.0));
        let player = world.entity(id).unwrap();
        assert!(player.has_all(&[
            ComponentKind::Transform,
            ComponentKind::Velocity,
            ComponentKind::Health,
            ComponentKind::Sprite,
            ComponentKind::Collider,
        ]));
        assert!(!player.has(ComponentKind::Ai));
    }

    #[test]
    fn test_enemy_seeks_and_wanderer_wanders() {
        let mut world = World::new();
        let enemy = spawn_enemy(&mut world, Vec2::new(100.0, 100.0));
        let wanderer = spawn_wanderer(&mut world, Vec2::new(200.0, 200.0));

        let enemy_ai = world.entity(enemy).unwrap().ai.as_ref().unwrap();
        assert_eq!(enemy_ai.behavior, AiBehavior::Seek);

        let wanderer_ai = world.entity(wanderer).unwrap().ai.as_ref().unwrap();
        assert_eq!(wanderer_ai.behavior, AiBehavior::Wander);
    }

    #[test]
    fn test_powerup_has_no_velocity() {
        let mut world = World::new();
        let id = spawn_powerup(&mut world, Vec2::new(50.0, 50.0));
        let powerup = world.entity(id).unwrap();
        assert!(powerup.has(ComponentKind::Collider));
        assert!(!powerup.has(ComponentKind::Velocity));
    }

    #[test]
    fn test_burst_spawns_count_particles() {
        let mut world = World::new();
        let mut rng = SmallRng::seed_from_u64(3);
        spawn_particle_burst(&mut world, Vec2::new(300.0, 200.0), 16, 2.0, &mut rng);
        assert_eq!(world.len(), 16);
        assert!(world
            .entities()
            .iter()
            .all(|e| e.has(ComponentKind::Particle)));
    }
}
