//! Errors raised while building the static collision world

use thiserror::Error;

/// Static mesh ingestion failures
///
/// Every variant aborts ingestion of the offending mesh; no triangles from
/// it are committed to the collider set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// Index list cannot be split into whole triangles
    #[error("Improper mesh formation in '{mesh}', expected multiple of 3 indices, got: {count}")]
    MalformedIndexCount {
        /// Name of the mesh
        mesh: String,
        /// Number of indices supplied
        count: usize,
    },

    /// An index points past the end of the vertex list
    #[error("Mesh '{mesh}' references vertex {index} but only has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Name of the mesh
        mesh: String,
        /// Offending index value
        index: u32,
        /// Number of vertices supplied
        vertex_count: usize,
    },

    /// Zero-area triangle found while the reject policy is active
    #[error("Mesh '{mesh}' contains degenerate triangle #{triangle}")]
    DegenerateTriangle {
        /// Name of the mesh
        mesh: String,
        /// Triangle number within the mesh (index triple / 3)
        triangle: usize,
    },
}
