//! Physics module for collision detection and response
//!
//! Resolves vertical capsules against an immutable set of static triangles
//! built from level meshes. There is no broad phase: every resolution call
//! scans all triangles, which keeps results order-stable but limits the
//! approach to small levels.

pub mod collision;
pub mod error;
pub mod physics_engine;
pub mod resolver;
pub mod static_colliders;

#[cfg(test)]
mod tests;

pub use collision::{
    ProbeSphere,
    Capsule,
    MeshGeometry,
    StaticMesh,
    Triangle,
};
pub use error::PhysicsError;
pub use physics_engine::PhysicsEngine;
pub use resolver::{CapsuleResolver, Contact, Resolution};
pub use static_colliders::StaticColliderSet;
