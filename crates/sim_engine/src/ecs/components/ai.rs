//! AI component for steered entities

use crate::foundation::math::Vec2;

/// Steering behavior for AI-driven entities
///
/// Behaviors are mutually exclusive: an entity carries a single [`Ai`]
/// component with a single behavior tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiBehavior {
    /// Random velocity impulses at a small per-frame probability
    Wander,

    /// Accelerate toward the target point
    Seek,

    /// Accelerate away from the target point while it is nearby
    Flee,
}

/// Steering behavior, optional target, and a free-form state label
#[derive(Debug, Clone, PartialEq)]
pub struct Ai {
    /// Active behavior
    pub behavior: AiBehavior,

    /// Target point for seek and flee; wander ignores it
    pub target: Option<Vec2>,

    /// State label; stored for external inspection, not interpreted
    pub state: String,
}

impl Ai {
    /// Create an AI component with no target
    pub fn new(behavior: AiBehavior) -> Self {
        Self {
            behavior,
            target: None,
            state: String::new(),
        }
    }

    /// Set the target, consuming and returning the component
    pub fn with_target(mut self, target: Vec2) -> Self {
        self.target = Some(target);
        self
    }

    /// Point the AI at a target
    pub fn set_target(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Remove the target
    pub fn clear_target(&mut self) {
        self.target = None;
    }
}
