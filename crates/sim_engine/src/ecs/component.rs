//! Component kinds and the tagged component union

use crate::ecs::components::{Ai, Collider, Health, Particle, Sprite, Transform, Velocity};

/// Closed set of component kinds an entity can carry
///
/// Systems declare their requirements in terms of these tags, which keeps
/// required-component checks exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Position, rotation, and uniform scale
    Transform,

    /// Linear velocity and friction
    Velocity,

    /// Current and maximum hit points
    Health,

    /// Shape, size, and color for the render stage
    Sprite,

    /// Circular collision volume
    Collider,

    /// Steering behavior and target
    Ai,

    /// Lifetime tracking for short-lived entities
    Particle,
}

impl ComponentKind {
    /// All component kinds, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Transform,
        Self::Velocity,
        Self::Health,
        Self::Sprite,
        Self::Collider,
        Self::Ai,
        Self::Particle,
    ];
}

/// A component instance tagged with its kind
///
/// Used to attach and detach components through a single entry point; each
/// entity holds at most one instance per kind.
#[derive(Debug, Clone)]
pub enum Component {
    /// Transform data
    Transform(Transform),

    /// Velocity data
    Velocity(Velocity),

    /// Health data
    Health(Health),

    /// Sprite data
    Sprite(Sprite),

    /// Collider data
    Collider(Collider),

    /// AI data
    Ai(Ai),

    /// Particle data
    Particle(Particle),
}

impl Component {
    /// Kind tag for this component instance
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Transform(_) => ComponentKind::Transform,
            Self::Velocity(_) => ComponentKind::Velocity,
            Self::Health(_) => ComponentKind::Health,
            Self::Sprite(_) => ComponentKind::Sprite,
            Self::Collider(_) => ComponentKind::Collider,
            Self::Ai(_) => ComponentKind::Ai,
            Self::Particle(_) => ComponentKind::Particle,
        }
    }
}
