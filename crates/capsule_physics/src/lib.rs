//! # Capsule Physics
//!
//! Narrow-phase collision detection and response for vertical capsules
//! moving through a static triangle world.
//!
//! ## Features
//!
//! - **Static World**: Triangle colliders extracted from level meshes
//! - **Closest Point Queries**: Seven-region point/triangle classification
//! - **Capsule Resolution**: Depenetration plus sliding, once per tick
//! - **Configurable**: TOML/RON settings for tolerances and strategies
//!
//! ## Quick Start
//!
//! ```rust
//! use capsule_physics::prelude::*;
//!
//! fn main() -> Result<(), PhysicsError> {
//!     let floor = StaticMesh::new(
//!         "floor",
//!         vec![
//!             Vec3::new(-10.0, 0.0, -10.0),
//!             Vec3::new(-10.0, 0.0, 30.0),
//!             Vec3::new(30.0, 0.0, -10.0),
//!         ],
//!         vec![0, 1, 2],
//!     );
//!
//!     let mut physics = PhysicsEngine::new(PhysicsConfig::default());
//!     physics.add_static_mesh(&floor)?;
//!
//!     let mut capsule = Capsule::new(Vec3::new(0.0, 0.05, 0.0), 2.0, 0.5);
//!     let movement = physics.resolve_movement(&mut capsule, Vec3::new(0.2, -0.3, 0.0));
//!
//!     // Blocked by the floor, still free to move sideways
//!     assert!(movement.y.abs() < 1e-6);
//!     capsule.translate(movement);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core settings
pub mod core;

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        core::config::{
            Config, ConfigError, DegenerateTrianglePolicy, EngineConfig, PhysicsConfig,
            ResolveStrategy, SimulationConfig,
        },
        foundation::math::Vec3,
        physics::{
            Capsule, CapsuleResolver, Contact, MeshGeometry, PhysicsEngine, PhysicsError,
            Resolution, StaticColliderSet, StaticMesh, Triangle,
        },
    };
}
