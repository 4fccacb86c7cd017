//! System trait for per-frame processing

use super::{ComponentKind, Entity};

/// A per-frame processor operating on entities that hold a required
/// component set
///
/// Systems are stateless with respect to which entities exist; persistent
/// simulation state lives in components. System-local scratch (an RNG, a
/// draw buffer) is allowed.
pub trait System {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Component kinds an entity must hold to be visible to this system
    fn required(&self) -> &'static [ComponentKind];

    /// Process the matched entities for one step
    ///
    /// `matched` holds indices into `entities` in ascending order, and every
    /// matched entity holds all required component kinds, so the absence of
    /// a required component is unreachable here.
    fn process(&mut self, entities: &mut [Entity], matched: &[usize], dt: f32);

    /// Filter the entity list against the required set, then process
    ///
    /// The matched set is recomputed on every call; nothing is cached across
    /// frames, so component changes take effect on the very next step.
    fn update(&mut self, entities: &mut [Entity], dt: f32) {
        let matched: Vec<usize> = entities
            .iter()
            .enumerate()
            .filter(|(_, entity)| entity.has_all(self.required()))
            .map(|(index, _)| index)
            .collect();
        self.process(entities, &matched, dt);
    }
}
