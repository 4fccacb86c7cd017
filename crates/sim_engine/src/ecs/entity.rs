//! Entity implementation

use super::{Component, ComponentKind};
use crate::ecs::components::{Ai, Collider, Health, Particle, Sprite, Transform, Velocity};

/// Entity identifier
///
/// Identifiers increase monotonically and are never reused, even after the
/// entity they named has been purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Create a new entity id with the given raw value
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value of the id
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// An entity: an identity plus an attached set of components
///
/// Each component kind has one typed slot, so an entity carries at most one
/// instance per kind. The slots are public plain data; systems read and write
/// them directly once the pipeline filter has admitted the entity.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    active: bool,

    /// Transform slot
    pub transform: Option<Transform>,

    /// Velocity slot
    pub velocity: Option<Velocity>,

    /// Health slot
    pub health: Option<Health>,

    /// Sprite slot
    pub sprite: Option<Sprite>,

    /// Collider slot
    pub collider: Option<Collider>,

    /// AI slot
    pub ai: Option<Ai>,

    /// Particle slot
    pub particle: Option<Particle>,
}

impl Entity {
    /// Create a new active entity with no components
    pub(super) fn new(id: EntityId) -> Self {
        Self {
            id,
            active: true,
            transform: None,
            velocity: None,
            health: None,
            sprite: None,
            collider: None,
            ai: None,
            particle: None,
        }
    }

    /// Get the entity id
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Whether the entity is still alive
    ///
    /// Inactive entities are removed from the store at the start of the next
    /// simulation step.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the entity for removal at the next frame boundary
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Attach a component, returning the instance it replaced (if any)
    pub fn attach(&mut self, component: Component) -> Option<Component> {
        match component {
            Component::Transform(c) => self.transform.replace(c).map(Component::Transform),
            Component::Velocity(c) => self.velocity.replace(c).map(Component::Velocity),
            Component::Health(c) => self.health.replace(c).map(Component::Health),
            Component::Sprite(c) => self.sprite.replace(c).map(Component::Sprite),
            Component::Collider(c) => self.collider.replace(c).map(Component::Collider),
            Component::Ai(c) => self.ai.replace(c).map(Component::Ai),
            Component::Particle(c) => self.particle.replace(c).map(Component::Particle),
        }
    }

    /// Detach the component of the given kind, returning it (if present)
    pub fn detach(&mut self, kind: ComponentKind) -> Option<Component> {
        match kind {
            ComponentKind::Transform => self.transform.take().map(Component::Transform),
            ComponentKind::Velocity => self.velocity.take().map(Component::Velocity),
            ComponentKind::Health => self.health.take().map(Component::Health),
            ComponentKind::Sprite => self.sprite.take().map(Component::Sprite),
            ComponentKind::Collider => self.collider.take().map(Component::Collider),
            ComponentKind::Ai => self.ai.take().map(Component::Ai),
            ComponentKind::Particle => self.particle.take().map(Component::Particle),
        }
    }

    /// Whether the entity holds a component of the given kind
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => self.transform.is_some(),
            ComponentKind::Velocity => self.velocity.is_some(),
            ComponentKind::Health => self.health.is_some(),
            ComponentKind::Sprite => self.sprite.is_some(),
            ComponentKind::Collider => self.collider.is_some(),
            ComponentKind::Ai => self.ai.is_some(),
            ComponentKind::Particle => self.particle.is_some(),
        }
    }

    /// Whether the entity holds every one of the given kinds
    pub fn has_all(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|&kind| self.has(kind))
    }
}
