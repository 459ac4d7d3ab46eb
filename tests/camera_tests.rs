//! Camera and matrix helper tests
//!
//! Tests for:
//! - look_at view matrix placement
//! - OpenGL-style perspective depth range
//! - Normal matrix under non-uniform scale
//! - Transform wrapper accessors

use glam::{Mat4, Vec3, Vec4};
use orrery::math;
use orrery::scene::{Camera, Transform};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// View
// ============================================================================

#[test]
fn look_at_moves_eye_to_origin_and_target_down_negative_z() {
    let eye = Vec3::new(10.0, 10.0, 25.0);
    let view = math::look_at(eye, Vec3::ZERO, Vec3::Y);

    assert!(view.transform_point3(eye).abs_diff_eq(Vec3::ZERO, EPSILON));

    let target = view.transform_point3(Vec3::ZERO);
    assert!(approx(target.x, 0.0));
    assert!(approx(target.y, 0.0));
    assert!(approx(target.z, -eye.length()));
}

#[test]
fn default_camera_matches_demo_placement() {
    let cam = Camera::default();
    assert_eq!(cam.eye(), Vec3::new(10.0, 10.0, 25.0));
    assert!(approx(cam.aspect(), 1.5));
    assert!(
        cam.view_matrix()
            .abs_diff_eq(math::look_at(cam.eye(), Vec3::ZERO, Vec3::Y), EPSILON)
    );
}

#[test]
fn view_projection_is_projection_times_view() {
    let cam = Camera::default();
    let expected = *cam.projection_matrix() * *cam.view_matrix();
    assert!(cam.view_projection().abs_diff_eq(expected, EPSILON));
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn perspective_maps_near_and_far_to_gl_depth_range() {
    let proj = math::perspective(30.0, 1.5, 1.0, 100.0);

    let near = proj * Vec4::new(0.0, 0.0, -1.0, 1.0);
    let far = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);

    assert!(approx(near.z / near.w, -1.0));
    assert!(approx(far.z / far.w, 1.0));
}

#[test]
fn perspective_top_edge_matches_field_of_view() {
    let fov = 30.0_f32;
    let proj = math::perspective(fov, 1.5, 1.0, 100.0);

    // A point on the top frustum plane at depth 1 lands on NDC y = 1.
    let top = (fov.to_radians() / 2.0).tan();
    let clip = proj * Vec4::new(0.0, top, -1.0, 1.0);
    assert!(approx(clip.y / clip.w, 1.0));

    let right = top * 1.5;
    let clip = proj * Vec4::new(right, 0.0, -1.0, 1.0);
    assert!(approx(clip.x / clip.w, 1.0));
}

#[test]
fn set_aspect_rebuilds_projection() {
    let mut cam = Camera::new_perspective(45.0, 1.0, 0.1, 50.0);
    let before = *cam.projection_matrix();
    cam.set_aspect(2.0);
    assert!(!cam.projection_matrix().abs_diff_eq(before, EPSILON));
    assert!(
        cam.projection_matrix()
            .abs_diff_eq(math::perspective(45.0, 2.0, 0.1, 50.0), EPSILON)
    );
}

// ============================================================================
// Normal Matrix
// ============================================================================

#[test]
fn normal_matrix_keeps_normals_perpendicular_under_scale() {
    let model = Mat4::from_scale(Vec3::new(3.0, 1.0, 1.0));
    let n = math::normal_matrix(&model, &Mat4::IDENTITY).unwrap();

    // Surface spanned by (1, 1, 0) and Z, normal (1, -1, 0).
    let tangent = model.transform_vector3(Vec3::new(1.0, 1.0, 0.0));
    let normal = n * Vec3::new(1.0, -1.0, 0.0);
    assert!(approx(tangent.dot(normal), 0.0));
}

#[test]
fn normal_matrix_includes_view_rotation() {
    let view = math::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let n = math::normal_matrix(&Mat4::IDENTITY, &view).unwrap();
    assert!((n * Vec3::Z).abs_diff_eq(Vec3::Z, EPSILON));
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn transform_defaults_to_identity() {
    let t = Transform::default();
    assert_eq!(*t.matrix(), Mat4::IDENTITY);
    assert_eq!(t.position(), Vec3::ZERO);
}

#[test]
fn transform_apply_right_multiplies() {
    let a = math::translation(1.0, 0.0, 0.0);
    let b = math::rotation_z(90.0);
    let mut t = Transform::from_matrix(a);
    t.apply(b);
    assert!(t.matrix().abs_diff_eq(a * b, EPSILON));
}

#[test]
fn transform_scale_then_inverse_scale_is_identity() {
    let mut t = Transform::new();
    t.scale(Vec3::new(2.0, 1.0 / 3.0, 1.0));
    t.scale(Vec3::new(0.5, 3.0, 1.0));
    assert!(t.matrix().abs_diff_eq(Mat4::IDENTITY, EPSILON));
}
