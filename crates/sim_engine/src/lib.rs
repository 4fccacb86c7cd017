//! # Sim Engine
//!
//! A small 2D entity-component simulation engine.
//!
//! ## Features
//!
//! - **Entity Store**: flat entity list with a closed component set
//! - **System Pipeline**: per-frame processors filtered by required components
//! - **Simulation Stages**: movement, collision, AI, and particle aging
//! - **Render Collection**: draw commands gathered from component state
//! - **Configuration**: TOML/RON file loading for simulation settings
//!
//! ## Quick Start
//!
//! ```rust
//! use sim_engine::prelude::*;
//!
//! let mut world = World::new();
//! world.add_system(Box::new(MovementSystem::new(Bounds::default())));
//! world.add_system(Box::new(CollisionSystem::new()));
//!
//! let entity = world.spawn();
//! entity.attach(Component::Transform(Transform::at(Vec2::new(100.0, 100.0))));
//! entity.attach(Component::Velocity(Velocity::new(Vec2::new(30.0, 0.0))));
//!
//! world.step(1.0 / 60.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod ecs;
pub mod foundation;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{
            components::{
                Ai, AiBehavior, Collider, Color, Health, Particle, Shape, Sprite, Transform,
                Velocity,
            },
            systems::{
                AiSystem, CollisionSystem, DrawCommand, MovementSystem, ParticleSystem,
                RenderConfig, RenderSystem,
            },
            Component, ComponentKind, Entity, EntityId, System, World,
        },
        foundation::math::{Bounds, Vec2},
    };
}
