//! Walkabout demo application
//!
//! Builds a small walled room, drops a player in it, and walks them into a
//! wall for a fixed number of ticks while logging what physics does.
//!
//! Usage: `walkabout [settings.toml|settings.ron]`

mod config;
mod player;
mod room;

use capsule_physics::core::config::{Config, ConfigError};
use capsule_physics::foundation::{logging, math::Vec3};
use capsule_physics::physics::{PhysicsEngine, PhysicsError};
use log::{debug, info};

use crate::config::WalkaboutConfig;
use crate::player::Player;

/// Demo startup failures
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Level error: {0}")]
    Level(#[from] PhysicsError),
}

fn load_config() -> Result<WalkaboutConfig, ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => WalkaboutConfig::load_from_file(&path)?,
        None => WalkaboutConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn build_world(config: &WalkaboutConfig) -> Result<PhysicsEngine, PhysicsError> {
    let mut physics = PhysicsEngine::new(config.simulation.physics.clone());

    for mesh in room::build_room() {
        let added = physics.add_static_mesh(&mesh)?;
        debug!("Level mesh '{}': {} triangles", mesh.name, added);
    }

    physics.show_static_triangles();
    physics.log_summary();
    Ok(physics)
}

fn run(config: &WalkaboutConfig) -> Result<(), AppError> {
    let physics = build_world(config)?;
    let mut player = Player::new(&config.player);

    let [x, y, z] = config.walk_direction;
    let direction = Vec3::new(x, y, z);
    let dt = config.tick_seconds();

    for tick in 0..config.ticks {
        if config.sprint_from_tick == Some(tick) {
            player.activate_sprint(true);
        }

        let moved = player.process_movement(direction, dt, &physics);
        let position = player.position();
        debug!(
            "tick {:4}: moved ({:.4}, {:.4}, {:.4}) -> base ({:.4}, {:.4}, {:.4})",
            tick, moved.x, moved.y, moved.z, position.x, position.y, position.z
        );
    }

    let position = player.position();
    info!(
        "{} finished {} ticks at ({:.4}, {:.4}, {:.4}), sprinting: {}",
        player.name(),
        config.ticks,
        position.x,
        position.y,
        position.z,
        player.is_sprinting()
    );
    debug!("Final collider: {:?}", player.capsule());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Settings are needed before the logger to pick its filter
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init();
            log::error!("Failed to load settings: {}", e);
            return Err(AppError::from(e).into());
        }
    };

    logging::init_with_filter(&config.simulation.engine.log_level);
    info!("Starting walkabout demo");

    run(&config)?;

    info!("Walkabout demo finished");
    Ok(())
}
