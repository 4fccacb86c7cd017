//! Arena demo
//!
//! Headless driver for the simulation pipeline: spawns the demo archetypes,
//! steers enemies at the player, and runs a fixed-timestep loop while
//! collecting draw commands each frame. Set `RUST_LOG=info` (or `debug`) to
//! watch it run.

mod archetypes;
mod config;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sim_engine::prelude::*;

use crate::archetypes::{
    spawn_enemy, spawn_particle_burst, spawn_player, spawn_powerup, spawn_wanderer,
};
use crate::config::ArenaConfig;

/// Default config path next to the binary's working directory
const CONFIG_PATH: &str = "arena.ron";

fn random_position(bounds: &Bounds, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(bounds.min.x..bounds.max.x),
        rng.gen_range(bounds.min.y..bounds.max.y),
    )
}

fn main() {
    env_logger::init();

    let config = ArenaConfig::load_or_default(CONFIG_PATH);
    info!(
        "arena starting: {}x{} playfield, {:.0} ticks/s, {:.1}s run",
        config.simulation.bounds.width(),
        config.simulation.bounds.height(),
        1.0 / config.simulation.timestep,
        config.simulation.duration_seconds,
    );

    let seed = config.simulation.seed.unwrap_or_else(rand::random);
    debug!("rng seed {seed}");
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut world = World::new();
    world.add_system(Box::new(MovementSystem::new(config.simulation.bounds)));
    world.add_system(Box::new(CollisionSystem::new()));
    world.add_system(Box::new(AiSystem::with_seed(seed)));
    world.add_system(Box::new(ParticleSystem::new()));

    // The render stage runs after each step so its command buffer stays
    // readable here; it consumes component state and feeds nothing back.
    let mut renderer = RenderSystem::new(config.render);

    let bounds = config.simulation.bounds;
    let player = spawn_player(&mut world, bounds.center());
    for _ in 0..config.spawn.enemy_count {
        spawn_enemy(&mut world, random_position(&bounds, &mut rng));
    }
    for _ in 0..config.spawn.wanderer_count {
        spawn_wanderer(&mut world, random_position(&bounds, &mut rng));
    }
    for _ in 0..config.spawn.powerup_count {
        spawn_powerup(&mut world, random_position(&bounds, &mut rng));
    }
    info!("spawned {} entities", world.len());

    let dt = config.simulation.timestep;
    let ticks = (config.simulation.duration_seconds / dt).round() as u64;
    for tick in 0..ticks {
        // Steer seekers at the player's current position
        let player_position = world
            .entity(player)
            .and_then(|entity| entity.transform.as_ref())
            .map(|transform| transform.position);
        if let Some(position) = player_position {
            for entity in world.entities_mut() {
                if let Some(ai) = entity.ai.as_mut() {
                    if ai.behavior == AiBehavior::Seek {
                        ai.set_target(position);
                    }
                }
            }
        }

        if config.spawn.burst_interval_ticks > 0
            && tick % u64::from(config.spawn.burst_interval_ticks) == 0
        {
            let origin = random_position(&bounds, &mut rng);
            spawn_particle_burst(
                &mut world,
                origin,
                config.spawn.burst_size,
                config.spawn.particle_lifetime,
                &mut rng,
            );
            debug!("tick {tick}: particle burst at ({:.0}, {:.0})", origin.x, origin.y);
        }

        world.step(dt);
        renderer.update(world.entities_mut(), dt);

        if tick % 60 == 0 {
            let colliding = world
                .entities()
                .iter()
                .filter(|entity| entity.collider.is_some_and(|c| c.is_colliding))
                .count();
            info!(
                "tick {tick}: {} entities, {} draw commands, {colliding} colliding",
                world.len(),
                renderer.commands().len(),
            );
        }
    }

    info!("arena finished after {ticks} ticks with {} entities", world.len());
}
