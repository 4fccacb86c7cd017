//! ECS World implementation

use super::{Entity, EntityId, System};
use log::{debug, trace};

/// ECS World containing all entities and the ordered system pipeline
///
/// One call to [`World::step`] is one simulation frame: inactive entities
/// are purged first, then every registered system runs in registration
/// order against the current entity list. Systems mutate component state
/// directly, and a mutation made by one system is visible to the systems
/// that run after it in the same frame.
pub struct World {
    next_entity_id: u64,
    entities: Vec<Entity>,
    systems: Vec<Box<dyn System>>,
}

impl World {
    /// Create an empty world with no systems
    pub fn new() -> Self {
        Self {
            next_entity_id: 0,
            entities: Vec::new(),
            systems: Vec::new(),
        }
    }

    /// Create a new active entity and return it for component attachment
    ///
    /// Ids are handed out monotonically and never reused.
    pub fn spawn(&mut self) -> &mut Entity {
        let id = EntityId::new(self.next_entity_id);
        self.next_entity_id += 1;
        trace!("spawning entity {}", id.raw());

        let index = self.entities.len();
        self.entities.push(Entity::new(id));
        &mut self.entities[index]
    }

    /// Mark an entity for removal at the next frame boundary
    ///
    /// Unknown ids are ignored; the entity may already have been purged.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(entity) = self.entity_mut(id) {
            entity.deactivate();
        }
    }

    /// Look up an entity by id
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Look up an entity by id, mutably
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    /// All entities currently in the store
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// All entities currently in the store, mutably
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Number of entities in the store, including ones marked inactive
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Append a system to the pipeline
    ///
    /// Systems run in registration order on every step.
    pub fn add_system(&mut self, system: Box<dyn System>) {
        debug!("registering system '{}'", system.name());
        self.systems.push(system);
    }

    /// Advance the simulation by one step
    ///
    /// Purging entities whose `active` flag was cleared is the sole
    /// destruction path, and it happens here, before any system runs. `dt`
    /// is taken as given; the frame driver owns clamping policy.
    pub fn step(&mut self, dt: f32) {
        let before = self.entities.len();
        self.entities.retain(Entity::is_active);
        let purged = before - self.entities.len();
        if purged > 0 {
            debug!("purged {purged} inactive entities");
        }

        for system in &mut self.systems {
            trace!("running system '{}'", system.name());
            system.update(&mut self.entities, dt);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
