//! Capsule versus static world resolution
//!
//! Each call probes the capsule's two end spheres at their destination,
//! pushes the capsule out of every triangle they touch and strips the
//! blocked part of the movement so the actor slides along surfaces.
//!
//! The capsule is treated as two spheres only, and the probes sit at the
//! end of the move. Moves longer than the capsule radius can pass through
//! thin geometry.

use log::trace;

use crate::core::config::{PhysicsConfig, ResolveStrategy};
use crate::foundation::math::{utils, Vec3};
use crate::physics::collision::Capsule;
use crate::physics::static_colliders::StaticColliderSet;

/// One triangle contact found during resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the triangle in the collider set
    pub triangle_index: usize,
    /// Pass in which the contact was found (0-based)
    pub pass: u32,
    /// Center of the probe sphere that produced the deeper penetration
    pub probe: Vec3,
    /// Closest point on the triangle to `probe`
    pub closest: Vec3,
    /// Signed penetration of that probe (at most the contact epsilon)
    pub penetration: f32,
    /// Translation applied to the capsule for this contact
    pub push: Vec3,
    /// Normal of the triangle the movement was slid along
    pub normal: Vec3,
}

/// Full result of a resolution call
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Corrected displacement for the caller to apply
    pub movement: Vec3,
    /// Contacts in the order they were handled
    pub contacts: Vec<Contact>,
    /// Number of scans over the collider set
    pub passes: u32,
}

impl Resolution {
    /// True when nothing was touched
    pub fn is_free(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Resolves capsule movement against a static collider set
#[derive(Debug, Clone, Copy)]
pub struct CapsuleResolver<'a> {
    colliders: &'a StaticColliderSet,
    epsilon: f32,
    strategy: ResolveStrategy,
}

impl<'a> CapsuleResolver<'a> {
    /// Create a resolver over `colliders` using the tunables in `config`
    pub fn new(colliders: &'a StaticColliderSet, config: &PhysicsConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid physics config: {:?}",
            config.validate()
        );
        Self {
            colliders,
            epsilon: config.contact_epsilon,
            strategy: config.strategy,
        }
    }

    /// Resolve `desired` against the world
    ///
    /// Mutates `capsule` in place (depenetration) and returns the slid
    /// displacement. The caller applies the returned displacement to the
    /// capsule and to anything it drives; the depenetration already made
    /// here must not be applied a second time.
    pub fn resolve(&self, capsule: &mut Capsule, desired: Vec3) -> Vec3 {
        self.resolve_detailed(capsule, desired).movement
    }

    /// Same as [`CapsuleResolver::resolve`] but also reports contacts
    pub fn resolve_detailed(&self, capsule: &mut Capsule, desired: Vec3) -> Resolution {
        let mut movement = desired;
        let mut contacts = Vec::new();
        let max_passes = self.strategy.max_passes();
        let mut passes = 0;

        while passes < max_passes {
            let largest_push = self.scan(capsule, &mut movement, passes, &mut contacts);
            passes += 1;

            if largest_push <= self.epsilon {
                break;
            }
        }

        Resolution {
            movement,
            contacts,
            passes,
        }
    }

    /// One ordered scan over every triangle. Returns the longest push applied.
    fn scan(
        &self,
        capsule: &mut Capsule,
        movement: &mut Vec3,
        pass: u32,
        contacts: &mut Vec<Contact>,
    ) -> f32 {
        let radius = capsule.radius;
        // Probes are fixed for the whole scan
        let (top, bottom) = capsule.probes(*movement);
        let mut largest_push = 0.0f32;

        for (triangle_index, triangle) in self.colliders.iter().enumerate() {
            // Kept degenerate triangles have no plane to slide along
            if !utils::is_finite(&triangle.normal()) {
                continue;
            }

            let top_pen = top.penetration(triangle);
            let bottom_pen = bottom.penetration(triangle);

            let touching = top_pen <= self.epsilon || bottom_pen <= self.epsilon;
            if !touching {
                continue;
            }

            let (penetration, probe) = if top_pen < bottom_pen {
                (top_pen, top.center)
            } else {
                (bottom_pen, bottom.center)
            };

            let closest = triangle.closest_point(probe);
            let direction = (probe - closest)
                .try_normalize(f32::EPSILON)
                .unwrap_or_else(|| triangle.normal());

            let push = -direction * (penetration + self.epsilon);
            capsule.translate(push);

            trace!("Radius: {}, Penetration: {}", radius, penetration);

            let normal = triangle.normal();
            *movement = utils::reject(*movement, normal);

            largest_push = largest_push.max(push.magnitude());
            contacts.push(Contact {
                triangle_index,
                pass,
                probe,
                closest,
                penetration,
                push,
                normal,
            });
        }

        largest_push
    }
}
