//! Physics subsystem facade
//!
//! Owns the static collision world and the physics tunables. Level loading
//! feeds meshes in once; the game loop then calls
//! [`PhysicsEngine::resolve_movement`] for each moving capsule every tick.

use log::info;

use crate::core::config::{ConfigError, PhysicsConfig};
use crate::foundation::math::Vec3;
use crate::physics::collision::{Capsule, MeshGeometry};
use crate::physics::error::PhysicsError;
use crate::physics::resolver::{CapsuleResolver, Resolution};
use crate::physics::static_colliders::StaticColliderSet;

/// Static collision world plus capsule resolution
#[derive(Debug, Clone, Default)]
pub struct PhysicsEngine {
    colliders: StaticColliderSet,
    config: PhysicsConfig,
}

impl PhysicsEngine {
    /// Create an empty physics world. The config is expected to have passed
    /// [`PhysicsConfig::validate`]; see [`PhysicsEngine::try_new`].
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            colliders: StaticColliderSet::new(),
            config,
        }
    }

    /// Create an empty physics world, rejecting configs the resolver cannot use
    pub fn try_new(config: PhysicsConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(Self::new(config))
    }

    /// Current physics configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Static triangles registered so far
    pub fn colliders(&self) -> &StaticColliderSet {
        &self.colliders
    }

    /// Register a static mesh. Returns the number of triangles added.
    pub fn add_static_mesh<M: MeshGeometry + ?Sized>(&mut self, mesh: &M) -> Result<usize, PhysicsError> {
        self.colliders.add_mesh(mesh, self.config.degenerate_triangles)
    }

    /// Log every static triangle (trace) and the total (debug)
    pub fn show_static_triangles(&self) {
        self.colliders.log_triangles();
    }

    /// Resolver borrowing this world
    pub fn resolver(&self) -> CapsuleResolver<'_> {
        CapsuleResolver::new(&self.colliders, &self.config)
    }

    /// Depenetrate `capsule` in place and return the slid displacement
    pub fn resolve_movement(&self, capsule: &mut Capsule, desired_move: Vec3) -> Vec3 {
        self.resolver().resolve(capsule, desired_move)
    }

    /// [`PhysicsEngine::resolve_movement`] with contact details
    pub fn resolve_movement_detailed(&self, capsule: &mut Capsule, desired_move: Vec3) -> Resolution {
        self.resolver().resolve_detailed(capsule, desired_move)
    }

    /// Log a one-line summary of the world
    pub fn log_summary(&self) {
        info!(
            "Physics world ready: {} static triangles, strategy {:?}, epsilon {}",
            self.colliders.len(),
            self.config.strategy,
            self.config.contact_epsilon
        );
    }
}
