//! Append-only store of static triangle colliders
//!
//! Built once while a level loads and read-only afterwards. Triangle order
//! follows mesh, then triangle index order, and is preserved because the
//! resolver's output depends on it.

use std::slice;

use log::{debug, trace};

use crate::core::config::DegenerateTrianglePolicy;
use crate::physics::collision::{extract_triangles, MeshGeometry, Triangle};
use crate::physics::error::PhysicsError;

/// Accumulated static collision triangles
#[derive(Debug, Clone, Default)]
pub struct StaticColliderSet {
    triangles: Vec<Triangle>,
}

impl StaticColliderSet {
    /// Create an empty collider set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every triangle of `mesh`
    ///
    /// Returns the number of triangles added. On error the set is left
    /// exactly as it was.
    pub fn add_mesh<M: MeshGeometry + ?Sized>(
        &mut self,
        mesh: &M,
        policy: DegenerateTrianglePolicy,
    ) -> Result<usize, PhysicsError> {
        let triangles = extract_triangles(mesh, policy)?;
        let added = triangles.len();
        self.triangles.extend(triangles);

        debug!(
            "Registered {} static triangles from mesh '{}' ({} total)",
            added,
            mesh.name(),
            self.triangles.len()
        );
        Ok(added)
    }

    /// Number of triangles
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True when no triangles have been added
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangle by insertion index
    pub fn get(&self, index: usize) -> Option<&Triangle> {
        self.triangles.get(index)
    }

    /// All triangles in insertion order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Dump every triangle at trace level and the total at debug level
    pub fn log_triangles(&self) {
        for (index, triangle) in self.triangles.iter().enumerate() {
            trace!("Static triangle #{}:{}", index, triangle);
        }

        debug!("Total static triangles: {}", self.triangles.len());
    }
}

impl<'a> IntoIterator for &'a StaticColliderSet {
    type Item = &'a Triangle;
    type IntoIter = slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
