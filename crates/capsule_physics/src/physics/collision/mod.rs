//! Narrow-phase collision geometry
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (triangles, capsules, probe spheres)
//! - [`queries`] - Closest point and sphere penetration tests
//! - [`mesh`] - Conversion of render meshes into triangle colliders
//!
//! # Key Types
//!
//! - [`Triangle`] - Immutable static collider with a precomputed normal
//! - [`Capsule`] - Vertical capsule owned by a moving actor
//! - [`MeshGeometry`] - Seam for feeding external mesh data into the world

pub mod primitives;
pub mod queries;
pub mod mesh;

// Re-export commonly used types
pub use primitives::{ProbeSphere, Capsule, Triangle};
pub use queries::{closest_point_on_triangle, sphere_penetration};
pub use mesh::{extract_triangles, MeshGeometry, StaticMesh};
