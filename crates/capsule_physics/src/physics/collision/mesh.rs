//! Static mesh ingestion
//!
//! Turns externally supplied render geometry (vertex positions plus a flat
//! triangle index list) into [`Triangle`] colliders.

use log::{debug, error, warn};

use crate::core::config::DegenerateTrianglePolicy;
use crate::foundation::math::Vec3;
use crate::physics::error::PhysicsError;
use super::primitives::Triangle;

/// Read access to mesh geometry owned by another subsystem
///
/// Loaders and renderers implement this for their own mesh types so the
/// collision world can be built without copying vertex attributes it does
/// not need.
pub trait MeshGeometry {
    /// Human readable mesh name, used in logs and errors
    fn name(&self) -> &str;

    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// Position of vertex `index`, `None` when out of range
    fn vertex_position(&self, index: usize) -> Option<Vec3>;

    /// Flat index list, three entries per triangle
    fn indices(&self) -> &[u32];
}

/// Owned mesh geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticMesh {
    /// Mesh name
    pub name: String,
    /// Vertex positions in world space
    pub positions: Vec<Vec3>,
    /// Triangle corner indices into `positions`
    pub indices: Vec<u32>,
}

impl StaticMesh {
    /// Create a mesh from positions and indices
    pub fn new(name: impl Into<String>, positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            positions,
            indices,
        }
    }
}

impl MeshGeometry for StaticMesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn vertex_position(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }
}

/// Build one triangle per consecutive index triple
///
/// Fails without producing anything if the index count is not a multiple
/// of three, if an index is out of range, or if a degenerate triangle is met
/// under [`DegenerateTrianglePolicy::Reject`].
pub fn extract_triangles<M: MeshGeometry + ?Sized>(
    mesh: &M,
    policy: DegenerateTrianglePolicy,
) -> Result<Vec<Triangle>, PhysicsError> {
    let indices = mesh.indices();

    debug!(
        "Adding static mesh: {}, containing {} vertices and {} indices",
        mesh.name(),
        mesh.vertex_count(),
        indices.len()
    );

    if indices.len() % 3 != 0 {
        let err = PhysicsError::MalformedIndexCount {
            mesh: mesh.name().to_string(),
            count: indices.len(),
        };
        error!("{}", err);
        return Err(err);
    }

    let vertex = |index: u32| -> Result<Vec3, PhysicsError> {
        mesh.vertex_position(index as usize)
            .ok_or_else(|| PhysicsError::IndexOutOfRange {
                mesh: mesh.name().to_string(),
                index,
                vertex_count: mesh.vertex_count(),
            })
    };

    let mut triangles = Vec::with_capacity(indices.len() / 3);

    for (number, corner) in indices.chunks_exact(3).enumerate() {
        let triangle = Triangle::new(vertex(corner[0])?, vertex(corner[1])?, vertex(corner[2])?);

        if triangle.is_degenerate() {
            match policy {
                DegenerateTrianglePolicy::Skip => {
                    warn!("Skipping degenerate triangle #{} in mesh '{}'", number, mesh.name());
                    continue;
                }
                DegenerateTrianglePolicy::Reject => {
                    let err = PhysicsError::DegenerateTriangle {
                        mesh: mesh.name().to_string(),
                        triangle: number,
                    };
                    error!("{}", err);
                    return Err(err);
                }
                DegenerateTrianglePolicy::Keep => {
                    warn!("Keeping degenerate triangle #{} in mesh '{}'", number, mesh.name());
                }
            }
        }

        triangles.push(triangle);
    }

    Ok(triangles)
}
