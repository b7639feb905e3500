//! First-person player actor
//!
//! The player walks on the ground plane only. Each tick the requested step
//! is handed to physics, and whatever survives resolution is applied to the
//! capsule.

use capsule_physics::foundation::math::Vec3;
use capsule_physics::physics::{Capsule, PhysicsEngine};
use log::{debug, info};

use crate::config::PlayerConfig;

/// Player with a capsule collider
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    capsule: Capsule,
    movement_speed: f32,
    sprint_factor: f32,
    sprinting: bool,
}

impl Player {
    /// Spawn a player from its settings
    pub fn new(config: &PlayerConfig) -> Self {
        let [x, y, z] = config.spawn;
        let capsule = Capsule::new(Vec3::new(x, y, z), config.height, config.radius);

        info!("Created player '{}' at ({:.3}, {:.3}, {:.3})", config.name, x, y, z);

        Self {
            name: config.name.clone(),
            capsule,
            movement_speed: config.movement_speed,
            sprint_factor: config.sprint_factor,
            sprinting: false,
        }
    }

    /// Player name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base of the player's capsule
    pub fn position(&self) -> Vec3 {
        self.capsule.base
    }

    /// The player's collider
    pub fn capsule(&self) -> &Capsule {
        &self.capsule
    }

    /// Whether sprint is held
    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Toggle sprint
    pub fn activate_sprint(&mut self, active: bool) {
        if self.sprinting != active {
            debug!("{}: sprint {}", self.name, if active { "on" } else { "off" });
        }
        self.sprinting = active;
    }

    /// Step length for `dt` seconds at the current gait
    pub fn step_length(&self, dt: f32) -> f32 {
        let speed = if self.sprinting {
            self.movement_speed * self.sprint_factor
        } else {
            self.movement_speed
        };
        speed * dt
    }

    /// Walk along `direction` for `dt` seconds, letting physics correct the
    /// step. Returns the displacement actually applied.
    pub fn process_movement(&mut self, direction: Vec3, dt: f32, physics: &PhysicsEngine) -> Vec3 {
        let mut desired = direction * self.step_length(dt);
        // Ground movement only
        desired.y = 0.0;

        let movement = physics.resolve_movement(&mut self.capsule, desired);
        self.capsule.translate(movement);
        movement
    }
}
