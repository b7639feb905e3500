//! End-to-end capsule resolution scenarios
//!
//! Walls and floors are single large triangles so that the capsule always
//! sits over their interior unless a test says otherwise.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::core::config::{DegenerateTrianglePolicy, PhysicsConfig, ResolveStrategy};
use crate::foundation::math::Vec3;
use crate::foundation::math::utils;
use crate::physics::collision::{sphere_penetration, Capsule, StaticMesh};
use crate::physics::{PhysicsEngine, PhysicsError};

const EPSILON: f32 = 1e-4;
const TOLERANCE: f32 = 1e-5;

fn single_triangle(name: &str, a: Vec3, b: Vec3, c: Vec3) -> StaticMesh {
    StaticMesh::new(name, vec![a, b, c], vec![0, 1, 2])
}

/// Floor at y = 0 facing +Y
fn floor() -> StaticMesh {
    single_triangle(
        "floor",
        Vec3::new(-10.0, 0.0, -10.0),
        Vec3::new(-10.0, 0.0, 30.0),
        Vec3::new(30.0, 0.0, -10.0),
    )
}

/// Wall in the plane x = `x` facing -X
fn wall_facing_neg_x(x: f32) -> StaticMesh {
    single_triangle(
        "wall_east",
        Vec3::new(x, -10.0, -10.0),
        Vec3::new(x, -10.0, 30.0),
        Vec3::new(x, 30.0, -10.0),
    )
}

/// Wall in the plane x = `x` facing +X
fn wall_facing_pos_x(x: f32) -> StaticMesh {
    single_triangle(
        "wall_west",
        Vec3::new(x, -10.0, -10.0),
        Vec3::new(x, 30.0, -10.0),
        Vec3::new(x, -10.0, 30.0),
    )
}

fn engine_with(meshes: &[StaticMesh], config: PhysicsConfig) -> PhysicsEngine {
    let mut engine = PhysicsEngine::new(config);
    for mesh in meshes {
        engine.add_static_mesh(mesh).unwrap();
    }
    engine
}

#[test]
fn test_static_normals_face_expected_directions() {
    let engine = engine_with(
        &[floor(), wall_facing_neg_x(1.0), wall_facing_pos_x(-1.0)],
        PhysicsConfig::default(),
    );
    let normals: Vec<Vec3> = engine.colliders().iter().map(|t| t.normal()).collect();

    assert_relative_eq!(normals[0], Vec3::new(0.0, 1.0, 0.0), epsilon = TOLERANCE);
    assert_relative_eq!(normals[1], Vec3::new(-1.0, 0.0, 0.0), epsilon = TOLERANCE);
    assert_relative_eq!(normals[2], Vec3::new(1.0, 0.0, 0.0), epsilon = TOLERANCE);
}

#[test]
fn test_free_movement_is_untouched() {
    let engine = engine_with(&[floor(), wall_facing_neg_x(5.0)], PhysicsConfig::default());
    let mut capsule = Capsule::new(Vec3::new(0.0, 2.0, 0.0), 2.0, 0.5);
    let before = capsule;
    let desired = Vec3::new(0.5, 0.0, 0.25);

    let resolution = engine.resolve_movement_detailed(&mut capsule, desired);

    assert_eq!(resolution.movement, desired);
    assert!(resolution.is_free());
    assert_eq!(capsule, before);
}

#[test]
fn test_empty_world_returns_desired_move() {
    let engine = PhysicsEngine::default();
    let mut capsule = Capsule::new(Vec3::zeros(), 1.6, 0.2);
    let desired = Vec3::new(0.0, -3.0, 1.0);

    assert_eq!(engine.resolve_movement(&mut capsule, desired), desired);
    assert_eq!(capsule.base, Vec3::zeros());
}

#[test]
fn test_falling_onto_floor_is_pushed_up_and_stops_vertically() {
    let engine = engine_with(&[floor()], PhysicsConfig::default());
    let mut capsule = Capsule::new(Vec3::new(0.0, 0.05, 0.0), 3.0, 1.0);
    let desired = Vec3::new(0.0, -1.0, 0.0);

    let resolution = engine.resolve_movement_detailed(&mut capsule, desired);

    assert_eq!(resolution.contacts.len(), 1);
    let contact = resolution.contacts[0];
    assert_abs_diff_eq!(contact.penetration, -0.95, epsilon = TOLERANCE);

    // Pushed straight up by -(penetration + epsilon)
    let lift = -(contact.penetration + EPSILON);
    assert!(lift > 0.0);
    assert_abs_diff_eq!(capsule.base.y, 0.05 + lift, epsilon = TOLERANCE);
    assert_abs_diff_eq!(capsule.tip.y - capsule.base.y, 3.0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(capsule.base.x, 0.0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(capsule.base.z, 0.0, epsilon = TOLERANCE);

    // No vertical movement left
    assert_relative_eq!(resolution.movement, Vec3::zeros(), epsilon = TOLERANCE);
}

#[test]
fn test_floor_contact_keeps_horizontal_motion() {
    let engine = engine_with(&[floor()], PhysicsConfig::default());
    let mut capsule = Capsule::new(Vec3::new(0.0, 0.05, 0.0), 2.0, 0.5);
    let desired = Vec3::new(0.2, -0.3, -0.1);

    let movement = engine.resolve_movement(&mut capsule, desired);

    assert_abs_diff_eq!(movement.y, 0.0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(movement.x, 0.2, epsilon = TOLERANCE);
    assert_abs_diff_eq!(movement.z, -0.1, epsilon = TOLERANCE);

    // Bottom probe sat at y = 0.25, penetration -0.25
    assert_abs_diff_eq!(capsule.base.y, 0.05 + 0.25 - EPSILON, epsilon = TOLERANCE);
}

#[test]
fn test_wall_contact_slides_along_wall() {
    let engine = engine_with(&[wall_facing_neg_x(1.0)], PhysicsConfig::default());
    let mut capsule = Capsule::new(Vec3::new(0.3, 0.0, 0.0), 2.0, 0.5);

    let resolution = engine.resolve_movement_detailed(&mut capsule, Vec3::new(0.4, 0.0, 0.3));

    assert_relative_eq!(resolution.movement, Vec3::new(0.0, 0.0, 0.3), epsilon = TOLERANCE);
    assert_abs_diff_eq!(capsule.base.x, 0.3 - (0.2 - EPSILON), epsilon = TOLERANCE);
    assert_abs_diff_eq!(capsule.tip.x, capsule.base.x, epsilon = TOLERANCE);

    // Both probes penetrate equally; the bottom one wins the tie
    let contact = resolution.contacts[0];
    assert_abs_diff_eq!(contact.probe.y, 0.5, epsilon = TOLERANCE);
}

#[test]
fn test_corner_contacts_are_handled_in_insertion_order() {
    let engine = engine_with(&[floor(), wall_facing_neg_x(1.0)], PhysicsConfig::default());
    let mut capsule = Capsule::new(Vec3::new(0.3, 0.05, 0.0), 2.0, 0.5);

    let resolution = engine.resolve_movement_detailed(&mut capsule, Vec3::new(0.4, -0.1, 0.0));

    let order: Vec<usize> = resolution.contacts.iter().map(|c| c.triangle_index).collect();
    assert_eq!(order, vec![0, 1]);
    assert_eq!(resolution.passes, 1);

    assert_relative_eq!(resolution.movement, Vec3::zeros(), epsilon = TOLERANCE);
    assert_abs_diff_eq!(capsule.base.y, 0.05 + 0.05 - EPSILON, epsilon = TOLERANCE);
    assert_abs_diff_eq!(capsule.base.x, 0.3 - (0.2 - EPSILON), epsilon = TOLERANCE);
}

#[test]
fn test_edge_contact_pushes_along_separation_not_normal() {
    let ledge = single_triangle(
        "ledge",
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::new(2.0, 0.0, 0.0),
    );
    let engine = engine_with(&[ledge], PhysicsConfig::default());
    let mut capsule = Capsule::new(Vec3::new(-0.3, -0.2, 1.0), 2.0, 0.5);

    let resolution = engine.resolve_movement_detailed(&mut capsule, Vec3::new(0.1, 0.0, 0.0));

    let contact = resolution.contacts[0];
    assert_relative_eq!(contact.closest, Vec3::new(0.0, 0.0, 1.0), epsilon = TOLERANCE);

    let separation = Vec3::new(-0.2, 0.3, 0.0).normalize();
    assert_relative_eq!(contact.push.normalize(), separation, epsilon = 1e-4);
    assert_abs_diff_eq!(contact.push.magnitude(), -(contact.penetration + EPSILON), epsilon = TOLERANCE);

    // Slid along the face normal, which is vertical here
    assert_relative_eq!(resolution.movement, Vec3::new(0.1, 0.0, 0.0), epsilon = TOLERANCE);
}

#[test]
fn test_zero_separation_falls_back_to_triangle_normal() {
    let engine = engine_with(&[floor()], PhysicsConfig::default());
    // Bottom sphere center lies exactly on the floor plane
    let mut capsule = Capsule::new(Vec3::new(0.0, -0.5, 0.0), 2.0, 0.5);

    let movement = engine.resolve_movement(&mut capsule, Vec3::zeros());

    assert!(capsule.base.iter().all(|c| c.is_finite()));
    assert!(movement.iter().all(|c| c.is_finite()));
    assert_abs_diff_eq!(capsule.base.y, -EPSILON, epsilon = TOLERANCE);
}

#[test]
fn test_resting_contact_applies_no_further_push() {
    let engine = engine_with(&[floor()], PhysicsConfig::default());
    // Starts sunk 0.1 into the floor
    let mut capsule = Capsule::new(Vec3::new(0.0, -0.1, 0.0), 2.0, 0.5);

    // First tick lifts it to rest epsilon deep
    engine.resolve_movement(&mut capsule, Vec3::zeros());
    let settled = capsule;
    assert_abs_diff_eq!(settled.base.y, -EPSILON, epsilon = TOLERANCE);

    // Standing still afterwards is a contact with a zero push
    let resolution = engine.resolve_movement_detailed(&mut capsule, Vec3::zeros());

    assert_eq!(resolution.contacts.len(), 1);
    assert_abs_diff_eq!(resolution.contacts[0].push.magnitude(), 0.0, epsilon = TOLERANCE);
    assert_relative_eq!(capsule.base, settled.base, epsilon = TOLERANCE);
}

#[test]
fn test_single_pass_leaves_secondary_overlap() {
    let engine = engine_with(
        &[wall_facing_neg_x(1.0), wall_facing_pos_x(-0.3)],
        PhysicsConfig::default(),
    );
    let mut capsule = Capsule::new(Vec3::new(0.3, 0.0, 0.0), 2.0, 0.5);

    let resolution = engine.resolve_movement_detailed(&mut capsule, Vec3::new(0.4, 0.0, 0.0));

    assert_eq!(resolution.passes, 1);
    assert_eq!(resolution.contacts.len(), 1);
    assert_abs_diff_eq!(capsule.base.x, 0.1001, epsilon = TOLERANCE);

    // The push into the opposite wall is only fixed on a later tick
    let west = engine.colliders().get(1).unwrap();
    let pen = sphere_penetration(capsule.bottom_sphere_center(), capsule.radius, west);
    assert!(pen < -0.09);
}

#[test]
fn test_relaxation_settles_secondary_overlap() {
    let config = PhysicsConfig::default()
        .with_strategy(ResolveStrategy::Relaxation { max_iterations: 8 });
    let engine = engine_with(&[wall_facing_neg_x(1.0), wall_facing_pos_x(-0.3)], config);
    let mut capsule = Capsule::new(Vec3::new(0.3, 0.0, 0.0), 2.0, 0.5);

    let resolution = engine.resolve_movement_detailed(&mut capsule, Vec3::new(0.4, 0.0, 0.0));

    assert_eq!(resolution.passes, 3);
    let order: Vec<(u32, usize)> = resolution
        .contacts
        .iter()
        .map(|c| (c.pass, c.triangle_index))
        .collect();
    assert_eq!(order, vec![(0, 0), (1, 1), (2, 1)]);

    assert_abs_diff_eq!(capsule.base.x, 0.1999, epsilon = TOLERANCE);
    assert_relative_eq!(resolution.movement, Vec3::zeros(), epsilon = TOLERANCE);

    for triangle in engine.colliders() {
        let pen = sphere_penetration(capsule.bottom_sphere_center(), capsule.radius, triangle);
        assert!(pen >= -EPSILON - TOLERANCE);
    }
}

#[test]
fn test_relaxation_with_one_iteration_matches_single_pass() {
    let meshes = [floor(), wall_facing_neg_x(1.0)];
    let single = engine_with(&meshes, PhysicsConfig::default());
    let capped = engine_with(
        &meshes,
        PhysicsConfig::default().with_strategy(ResolveStrategy::Relaxation { max_iterations: 1 }),
    );
    let start = Capsule::new(Vec3::new(0.3, 0.05, 0.0), 2.0, 0.5);
    let desired = Vec3::new(0.4, -0.1, 0.2);

    let mut a = start;
    let mut b = start;
    let move_a = single.resolve_movement(&mut a, desired);
    let move_b = capped.resolve_movement(&mut b, desired);

    assert_eq!(move_a, move_b);
    assert_eq!(a, b);
}

#[test]
fn test_malformed_mesh_is_not_registered() {
    let mut engine = engine_with(&[floor()], PhysicsConfig::default());
    let mut broken = wall_facing_neg_x(1.0);
    broken.indices.push(0);

    let result = engine.add_static_mesh(&broken);

    assert_eq!(
        result,
        Err(PhysicsError::MalformedIndexCount { mesh: "wall_east".to_string(), count: 4 })
    );
    assert_eq!(engine.colliders().len(), 1);
}

#[test]
fn test_kept_degenerate_triangle_is_ignored_by_resolver() {
    let sliver = single_triangle(
        "sliver",
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    );
    let config = PhysicsConfig::default().with_degenerate_triangles(DegenerateTrianglePolicy::Keep);
    let desired = Vec3::new(0.1, 0.0, 0.0);

    let engine = engine_with(&[sliver.clone()], config.clone());
    assert_eq!(engine.colliders().len(), 1);

    let mut capsule = Capsule::new(Vec3::new(-0.3, -0.2, 0.0), 2.0, 0.5);
    let before = capsule;
    let resolution = engine.resolve_movement_detailed(&mut capsule, desired);

    assert!(resolution.is_free());
    assert_eq!(resolution.movement, desired);
    assert_eq!(capsule, before);

    // Triangles after the sliver still resolve normally
    let engine = engine_with(&[sliver, floor()], config);
    let mut capsule = Capsule::new(Vec3::new(-0.3, -0.2, 0.0), 2.0, 0.5);
    let resolution = engine.resolve_movement_detailed(&mut capsule, desired);

    assert_eq!(resolution.contacts.len(), 1);
    assert_eq!(resolution.contacts[0].triangle_index, 1);
    assert!(utils::is_finite(&resolution.movement));
    assert_relative_eq!(resolution.movement, desired, epsilon = TOLERANCE);
    assert_relative_eq!(capsule.base.y, -EPSILON, epsilon = TOLERANCE);
}

#[test]
fn test_try_new_rejects_unusable_config() {
    let nan_epsilon = PhysicsConfig::default().with_contact_epsilon(f32::NAN);
    let no_passes = PhysicsConfig::default().with_strategy(ResolveStrategy::Relaxation { max_iterations: 0 });

    assert!(PhysicsEngine::try_new(nan_epsilon).is_err());
    assert!(PhysicsEngine::try_new(no_passes).is_err());
    assert!(PhysicsEngine::try_new(PhysicsConfig::default()).is_ok());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "invalid physics config")]
fn test_resolving_with_negative_epsilon_panics_in_debug() {
    let engine = PhysicsEngine::new(PhysicsConfig::default().with_contact_epsilon(-1.0));
    let mut capsule = Capsule::new(Vec3::zeros(), 2.0, 0.5);

    engine.resolve_movement(&mut capsule, Vec3::new(1.0, 0.0, 0.0));
}
