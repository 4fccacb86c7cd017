//! Render collection stage
//!
//! Gathers draw commands from component state for a rendering backend to
//! consume. Pure consumer: nothing here feeds back into simulation state.

use serde::{Deserialize, Serialize};

use crate::ecs::components::{Color, Shape};
use crate::ecs::{ComponentKind, Entity, System};
use crate::foundation::math::Vec2;

const REQUIRED: [ComponentKind; 2] = [ComponentKind::Transform, ComponentKind::Sprite];

/// Toggles for optional render output
///
/// Passed in at construction; the stage reads no global display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Emit health bars for entities that carry health
    pub show_health_bars: bool,

    /// Emit collider outlines for entities that carry colliders
    pub show_colliders: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_health_bars: true,
            show_colliders: false,
        }
    }
}

/// A drawing instruction for one frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled sprite shape
    Shape {
        /// Shape to draw
        shape: Shape,
        /// Center position
        position: Vec2,
        /// Rotation in radians
        rotation: f32,
        /// Size after the transform's scale is applied
        size: f32,
        /// Fill color
        color: Color,
    },

    /// Health bar drawn above an entity
    HealthBar {
        /// Entity center position
        position: Vec2,
        /// Fill fraction in [0, 1]
        fraction: f32,
    },

    /// Collider outline
    ColliderOutline {
        /// Collider center position
        position: Vec2,
        /// Collider radius
        radius: f32,
        /// Whether the collider overlapped something this step
        colliding: bool,
    },
}

/// System that collects draw commands from sprites, health, and colliders
///
/// The command buffer is cleared and refilled on every step; callers read it
/// back between steps via [`RenderSystem::commands`].
pub struct RenderSystem {
    config: RenderConfig,
    commands: Vec<DrawCommand>,
}

impl RenderSystem {
    /// Create a render stage with the given toggles
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            commands: Vec::with_capacity(256),
        }
    }

    /// Draw commands collected during the last step
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl System for RenderSystem {
    fn name(&self) -> &'static str {
        "render"
    }

    fn required(&self) -> &'static [ComponentKind] {
        &REQUIRED
    }

    fn process(&mut self, entities: &mut [Entity], matched: &[usize], _dt: f32) {
        self.commands.clear();

        for &index in matched {
            let entity = &entities[index];
            let (Some(transform), Some(sprite)) = (entity.transform.as_ref(), entity.sprite.as_ref())
            else {
                continue;
            };

            self.commands.push(DrawCommand::Shape {
                shape: sprite.shape,
                position: transform.position,
                rotation: transform.rotation,
                size: sprite.size * transform.scale,
                color: sprite.color,
            });

            if self.config.show_health_bars {
                if let Some(health) = entity.health.as_ref() {
                    self.commands.push(DrawCommand::HealthBar {
                        position: transform.position,
                        fraction: health.fraction(),
                    });
                }
            }

            if self.config.show_colliders {
                if let Some(collider) = entity.collider.as_ref() {
                    self.commands.push(DrawCommand::ColliderOutline {
                        position: transform.position,
                        radius: collider.radius,
                        colliding: collider.is_colliding,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Collider, Health, Sprite, Transform};
    use crate::ecs::{Component, World};

    fn sample_world() -> World {
        let mut world = World::new();
        let entity = world.spawn();
        entity.attach(Component::Transform(
            Transform::at(Vec2::new(50.0, 60.0)).with_scale(2.0),
        ));
        entity.attach(Component::Sprite(Sprite::default()));
        entity.attach(Component::Health(Health::new(10)));
        entity.attach(Component::Collider(Collider::new(8.0)));
        world
    }

    #[test]
    fn test_shape_command_uses_scaled_size() {
        let mut world = sample_world();
        let mut system = RenderSystem::new(RenderConfig {
            show_health_bars: false,
            show_colliders: false,
        });

        system.update(world.entities_mut(), 0.016);

        assert_eq!(system.commands().len(), 1);
        match &system.commands()[0] {
            DrawCommand::Shape { size, position, .. } => {
                assert_eq!(*size, 20.0);
                assert_eq!(*position, Vec2::new(50.0, 60.0));
            }
            other => panic!("expected shape command, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_commands_follow_config() {
        let mut world = sample_world();
        let mut system = RenderSystem::new(RenderConfig {
            show_health_bars: true,
            show_colliders: true,
        });

        system.update(world.entities_mut(), 0.016);

        let commands = system.commands();
        assert_eq!(commands.len(), 3);
        assert!(commands
            .iter()
            .any(|c| matches!(c, DrawCommand::HealthBar { fraction, .. } if *fraction == 1.0)));
        assert!(commands
            .iter()
            .any(|c| matches!(c, DrawCommand::ColliderOutline { radius, .. } if *radius == 8.0)));
    }

    #[test]
    fn test_buffer_cleared_between_steps() {
        let mut world = sample_world();
        let mut system = RenderSystem::new(RenderConfig::default());

        system.update(world.entities_mut(), 0.016);
        let first = system.commands().len();
        system.update(world.entities_mut(), 0.016);
        assert_eq!(system.commands().len(), first);
    }

    #[test]
    fn test_spriteless_entities_emit_nothing() {
        let mut world = World::new();
        let entity = world.spawn();
        entity.attach(Component::Transform(Transform::default()));
        entity.attach(Component::Health(Health::new(5)));

        let mut system = RenderSystem::new(RenderConfig::default());
        system.update(world.entities_mut(), 0.016);
        assert!(system.commands().is_empty());
    }
}
