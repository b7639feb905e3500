//! Demo settings
//!
//! Everything here has a default, so a settings file only needs the values
//! it wants to change.

use capsule_physics::core::config::{Config, ConfigError, SimulationConfig};
use serde::{Deserialize, Serialize};

/// Walking speed in metres per second
pub const MOVEMENT_SPEED: f32 = 1.25;

/// Sprinting is this many times faster than walking
pub const SPRINT_FACTOR: f32 = 2.0;

/// Player body settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Display name
    pub name: String,
    /// Capsule height, base to tip
    pub height: f32,
    /// Capsule radius
    pub radius: f32,
    /// Spawn point for the capsule base
    pub spawn: [f32; 3],
    /// Walking speed (m/s)
    pub movement_speed: f32,
    /// Sprint multiplier
    pub sprint_factor: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            height: 1.6,
            radius: 0.2,
            spawn: [0.0, 0.0, 0.0],
            movement_speed: MOVEMENT_SPEED,
            sprint_factor: SPRINT_FACTOR,
        }
    }
}

/// Top-level demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkaboutConfig {
    /// Engine and physics settings
    pub simulation: SimulationConfig,
    /// Player settings
    pub player: PlayerConfig,
    /// Number of fixed ticks to run
    pub ticks: u32,
    /// Ticks per second
    pub tick_rate: f32,
    /// Walking direction on the ground plane
    pub walk_direction: [f32; 3],
    /// Tick at which the player starts sprinting, if ever
    pub sprint_from_tick: Option<u32>,
}

impl Default for WalkaboutConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            player: PlayerConfig::default(),
            ticks: 300,
            tick_rate: 60.0,
            walk_direction: [1.0, 0.0, 0.0],
            sprint_from_tick: Some(120),
        }
    }
}

impl WalkaboutConfig {
    /// Validate demo and simulation settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;

        let player = &self.player;
        if !(player.radius > 0.0 && player.radius.is_finite()) {
            return Err(ConfigError::Invalid("Player radius must be positive".to_string()));
        }
        if !(player.height > 0.0 && player.height.is_finite()) {
            return Err(ConfigError::Invalid("Player height must be positive".to_string()));
        }
        if !(player.movement_speed >= 0.0 && player.sprint_factor >= 1.0) {
            return Err(ConfigError::Invalid(
                "Movement speed must be non-negative and sprint factor at least 1".to_string(),
            ));
        }
        if !(self.tick_rate > 0.0 && self.tick_rate.is_finite()) {
            return Err(ConfigError::Invalid("Tick rate must be positive".to_string()));
        }
        Ok(())
    }

    /// Seconds per tick
    pub fn tick_seconds(&self) -> f32 {
        self.tick_rate.recip()
    }
}

impl Config for WalkaboutConfig {}
