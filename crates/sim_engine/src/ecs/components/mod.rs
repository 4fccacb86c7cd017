//! Component data records
//!
//! Components are plain data with small mutators only; all per-frame behavior
//! lives in the systems.

pub mod ai;
pub mod collider;
pub mod health;
pub mod particle;
pub mod sprite;
pub mod transform;
pub mod velocity;

pub use ai::{Ai, AiBehavior};
pub use collider::Collider;
pub use health::Health;
pub use particle::Particle;
pub use sprite::{Color, Shape, Sprite};
pub use transform::Transform;
pub use velocity::Velocity;
