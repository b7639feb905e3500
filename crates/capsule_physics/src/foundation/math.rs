//! Math utilities and types
//!
//! Provides the fundamental vector types used by the collision code.
//! The coordinate system is right-handed with positive Y pointing up.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// World up axis
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Remove the component of `v` along the unit vector `normal`
    pub fn reject(v: Vec3, normal: Vec3) -> Vec3 {
        v - normal * v.dot(&normal)
    }

    /// Check that every component of a vector is finite
    pub fn is_finite(v: &Vec3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}
