//! Demo configuration

use serde::{Deserialize, Serialize};
use sim_engine::prelude::*;

/// Arena demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArenaConfig {
    /// Simulation settings
    pub simulation: SimulationConfig,

    /// Spawn settings
    pub spawn: SpawnConfig,

    /// Render stage toggles
    pub render: RenderConfig,
}

impl Config for ArenaConfig {}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Playfield bounds
    pub bounds: Bounds,

    /// Fixed timestep in seconds
    pub timestep: f32,

    /// Total simulated duration in seconds
    pub duration_seconds: f32,

    /// Seed for the AI and spawn RNGs; omit for a fresh seed per run
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            timestep: 1.0 / 60.0,
            duration_seconds: 10.0,
            seed: None,
        }
    }
}

/// Spawn settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Number of seeking enemies
    pub enemy_count: u32,

    /// Number of wandering enemies
    pub wanderer_count: u32,

    /// Number of static powerups
    pub powerup_count: u32,

    /// Particles per burst
    pub burst_size: u32,

    /// Particle lifetime in seconds
    pub particle_lifetime: f32,

    /// Ticks between particle bursts
    pub burst_interval_ticks: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            enemy_count: 4,
            wanderer_count: 3,
            powerup_count: 3,
            burst_size: 24,
            particle_lifetime: 2.0,
            burst_interval_ticks: 120,
        }
    }
}
