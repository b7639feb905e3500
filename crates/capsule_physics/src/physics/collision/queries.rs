//! Narrow-phase point and sphere queries against triangles

use crate::foundation::math::Vec3;
use super::primitives::Triangle;

/// Closest point on a triangle (interior, edge or vertex) to `p`
///
/// Classifies `p` into one of the seven Voronoi regions of the triangle
/// using dot products of the edge vectors. Regions are tested in a fixed
/// order: vertex A, vertex B, edge AB, vertex C, edge AC, edge BC, then the
/// interior. Comparisons have no tolerance band, so a point on a boundary
/// always lands in the first region that accepts it. Neighbouring triangles
/// rely on that order agreeing at shared edges.
pub fn closest_point_on_triangle(p: Vec3, triangle: &Triangle) -> Vec3 {
    let a = triangle.a();
    let b = triangle.b();
    let c = triangle.c();

    let ab = b - a;
    let ac = c - a;

    let ap = p - a;
    let ab_ap = ab.dot(&ap);
    let ac_ap = ac.dot(&ap);

    // Vertex A
    if ab_ap <= 0.0 && ac_ap <= 0.0 {
        return a;
    }

    let bp = p - b;
    let ab_bp = ab.dot(&bp);
    let ac_bp = ac.dot(&bp);

    // Vertex B
    if ab_bp >= 0.0 && ac_bp <= ab_bp {
        return b;
    }

    // Edge AB
    let vc = ab_ap * ac_bp - ab_bp * ac_ap;
    if vc <= 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
        let t = ab_ap / (ab_ap - ab_bp);
        return a + ab * t;
    }

    let cp = p - c;
    let ab_cp = ab.dot(&cp);
    let ac_cp = ac.dot(&cp);

    // Vertex C
    if ac_cp >= 0.0 && ab_cp <= ac_cp {
        return c;
    }

    // Edge AC
    let vb = ab_cp * ac_ap - ab_ap * ac_cp;
    if vb <= 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
        let t = ac_ap / (ac_ap - ac_cp);
        return a + ac * t;
    }

    // Edge BC
    let va = ab_bp * ac_cp - ab_cp * ac_bp;
    let along_b = ac_bp - ab_bp;
    let along_c = ab_cp - ac_cp;
    if va <= 0.0 && along_b >= 0.0 && along_c >= 0.0 {
        let t = along_b / (along_b + along_c);
        return b + (c - b) * t;
    }

    // Interior: drop onto the plane
    let normal = triangle.normal();
    p - normal * (p - a).dot(&normal)
}

/// Signed distance between a sphere's surface and a triangle
///
/// `distance(closest_point, center) - radius`: positive when separated,
/// zero when tangent, negative when overlapping.
pub fn sphere_penetration(center: Vec3, radius: f32, triangle: &Triangle) -> f32 {
    let closest = closest_point_on_triangle(center, triangle);
    (closest - center).magnitude() - radius
}
