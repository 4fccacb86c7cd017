//! Simulation pipeline stages
//!
//! The demo pipeline registers these in a fixed order: movement, collision,
//! AI, particle, then render collection.

pub mod ai;
pub mod collision;
pub mod movement;
pub mod particle;
pub mod render;

pub use ai::AiSystem;
pub use collision::CollisionSystem;
pub use movement::MovementSystem;
pub use particle::ParticleSystem;
pub use render::{DrawCommand, RenderConfig, RenderSystem};
