//! Hard-coded test room
//!
//! Stands in for the level loader: a 10 x 10 floor with four 3 m walls,
//! all facing inward. Geometry is stored the way a renderer would keep it
//! (interleaved vertices) and handed to physics through `MeshGeometry`.

use capsule_physics::foundation::math::{Vec2, Vec3, UP};
use capsule_physics::physics::MeshGeometry;

/// Half the room width
pub const ROOM_HALF_EXTENT: f32 = 5.0;

/// Wall height
pub const WALL_HEIGHT: f32 = 3.0;

/// Render vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in world space
    pub position: Vec3,
    /// Shading normal
    pub normal: Vec3,
    /// Texture coordinates
    pub tex_coords: Vec2,
}

/// A named render mesh
#[derive(Debug, Clone, PartialEq)]
pub struct LevelMesh {
    /// Mesh name
    pub name: String,
    /// Interleaved vertices
    pub vertices: Vec<Vertex>,
    /// Triangle list
    pub indices: Vec<u32>,
}

impl LevelMesh {
    /// Quad from four corners in counter-clockwise order seen from the front
    pub fn quad(name: &str, corners: [Vec3; 4]) -> Self {
        let normal = (corners[1] - corners[0]).cross(&(corners[2] - corners[0])).normalize();
        let uvs = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ];

        let vertices = corners
            .iter()
            .zip(uvs)
            .map(|(&position, tex_coords)| Vertex { position, normal, tex_coords })
            .collect();

        Self {
            name: name.to_string(),
            vertices,
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    /// Vertical wall standing on the floor segment `from -> to`.
    /// Faces the left-hand side of the segment when seen from above.
    pub fn wall(name: &str, from: Vec3, to: Vec3, height: f32) -> Self {
        Self::quad(name, [from, from + UP * height, to + UP * height, to])
    }
}

impl MeshGeometry for LevelMesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_position(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).map(|v| v.position)
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }
}

/// Floor and four walls
pub fn build_room() -> Vec<LevelMesh> {
    let e = ROOM_HALF_EXTENT;
    let at = |x: f32, z: f32| Vec3::new(x, 0.0, z);

    vec![
        LevelMesh::quad("floor", [at(-e, -e), at(-e, e), at(e, e), at(e, -e)]),
        LevelMesh::wall("wall_east", at(e, e), at(e, -e), WALL_HEIGHT),
        LevelMesh::wall("wall_west", at(-e, -e), at(-e, e), WALL_HEIGHT),
        LevelMesh::wall("wall_north", at(e, -e), at(-e, -e), WALL_HEIGHT),
        LevelMesh::wall("wall_south", at(-e, e), at(e, e), WALL_HEIGHT),
    ]
}
