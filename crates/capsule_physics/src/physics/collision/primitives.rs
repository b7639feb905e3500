//! Primitive collision shapes
//!
//! Static triangles, the vertical player capsule, and the probe spheres the
//! resolver places at the capsule's destination.

use std::fmt;

use crate::foundation::math::{utils, Vec3, UP};
use super::queries;

/// Area below which a triangle is considered degenerate
const DEGENERATE_AREA: f32 = 1e-12;

/// A static triangle collider
///
/// Vertices are fixed at construction and the unit face normal is derived
/// once with the right-hand rule, `normalize((b - a) x (c - a))`. Collinear
/// vertices leave the normal NaN; see [`Triangle::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Vec3,
    b: Vec3,
    c: Vec3,
    normal: Vec3,
}

impl Triangle {
    /// Creates a new triangle and derives its normal
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(&(c - a)).normalize();
        Self { a, b, c, normal }
    }

    /// First vertex
    pub fn a(&self) -> Vec3 {
        self.a
    }

    /// Second vertex
    pub fn b(&self) -> Vec3 {
        self.b
    }

    /// Third vertex
    pub fn c(&self) -> Vec3 {
        self.c
    }

    /// Unit face normal
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Edge vectors `(b - a, c - a)`
    pub fn edges(&self) -> (Vec3, Vec3) {
        (self.b - self.a, self.c - self.a)
    }

    /// Surface area
    pub fn area(&self) -> f32 {
        let (ab, ac) = self.edges();
        ab.cross(&ac).magnitude() * 0.5
    }

    /// Calculates the centroid (center point) of the triangle
    pub fn centroid(&self) -> Vec3 {
        (self.a + self.b + self.c) / 3.0
    }

    /// True when the vertices are (nearly) collinear and the normal is unusable
    pub fn is_degenerate(&self) -> bool {
        self.area() <= DEGENERATE_AREA || !utils::is_finite(&self.normal)
    }

    /// Point on the triangle nearest to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        queries::closest_point_on_triangle(point, self)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = |v: Vec3| format!("({:.4}, {:.4}, {:.4})", v.x, v.y, v.z);
        writeln!(f)?;
        writeln!(f, "\tA: {}", v(self.a))?;
        writeln!(f, "\tB: {}", v(self.b))?;
        writeln!(f, "\tC: {}", v(self.c))?;
        write!(f, "\tN: {}", v(self.normal))
    }
}

/// One end sphere of a capsule, placed where the capsule wants to be
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSphere {
    /// Sphere centre in world space
    pub center: Vec3,
    /// Capsule radius
    pub radius: f32,
}

impl ProbeSphere {
    /// Probe at `center` with the given radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Signed gap between the sphere surface and `triangle`.
    /// At or below zero the sphere touches or overlaps it.
    pub fn penetration(&self, triangle: &Triangle) -> f32 {
        queries::sphere_penetration(self.center, self.radius, triangle)
    }
}

/// Vertically oriented capsule collider
///
/// Two end spheres of `radius` joined by a cylinder. `base` is the bottom of
/// the capsule and `tip = base + (0, height, 0)`; the resolver moves both
/// ends together so the capsule never rotates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Bottom point of the capsule
    pub base: Vec3,
    /// Top point of the capsule
    pub tip: Vec3,
    /// Radius of both end spheres
    pub radius: f32,
    /// Distance from base to tip
    pub height: f32,
}

impl Capsule {
    /// Creates a capsule standing on `base`
    pub fn new(base: Vec3, height: f32, radius: f32) -> Self {
        debug_assert!(height > 0.0, "capsule height must be positive");
        debug_assert!(radius > 0.0, "capsule radius must be positive");
        Self {
            base,
            tip: base + UP * height,
            radius,
            height,
        }
    }

    /// Place the capsule base at `base`, keeping height
    pub fn set_base(&mut self, base: Vec3) {
        self.base = base;
        self.tip = base + UP * self.height;
    }

    /// Move both ends by `delta`
    pub fn translate(&mut self, delta: Vec3) {
        self.base += delta;
        self.tip += delta;
    }

    /// Center of the upper end sphere
    pub fn top_sphere_center(&self) -> Vec3 {
        self.tip - UP * self.radius
    }

    /// Center of the lower end sphere
    pub fn bottom_sphere_center(&self) -> Vec3 {
        self.base + UP * self.radius
    }

    /// Upper and lower end spheres after moving by `offset`
    pub fn probes(&self, offset: Vec3) -> (ProbeSphere, ProbeSphere) {
        (
            ProbeSphere::new(self.top_sphere_center() + offset, self.radius),
            ProbeSphere::new(self.bottom_sphere_center() + offset, self.radius),
        )
    }
}
