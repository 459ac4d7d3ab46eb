//! Matrix helpers on top of `glam`.
//!
//! `glam` is the linear-algebra provider; this module only adds the handful
//! of camera and shading formulas the renderers share. All matrices are
//! column-major and act on column vectors (`M * v`).

use glam::{Mat3, Mat4, Vec3};

use crate::errors::{OrreryError, Result};

/// Right-handed view matrix for a camera at `eye` looking at `at`.
#[inline]
#[must_use]
pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, at, up)
}

/// Perspective projection into OpenGL clip space (depth in `[-1, 1]`).
///
/// `fovy_degrees` is the full vertical field of view.
#[inline]
#[must_use]
pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fovy_degrees.to_radians(), aspect, near, far)
}

/// Translation matrix.
#[inline]
#[must_use]
pub fn translation(dx: f32, dy: f32, dz: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(dx, dy, dz))
}

/// Counter-clockwise rotation about +Z, angle in degrees.
#[inline]
#[must_use]
pub fn rotation_z(degrees: f32) -> Mat4 {
    Mat4::from_rotation_z(degrees.to_radians())
}

/// Normal matrix for lighting in eye space.
///
/// Upper-left 3x3 of the inverse transpose of `view * model`. Only an
/// exactly zero or non-finite determinant is rejected; tiny but invertible
/// scales are fine.
pub fn normal_matrix(model: &Mat4, view: &Mat4) -> Result<Mat3> {
    let model_view = Mat3::from_mat4(*view * *model);
    let determinant = model_view.determinant();
    if determinant == 0.0 || !determinant.is_finite() {
        return Err(OrreryError::SingularMatrix { determinant });
    }
    Ok(model_view.inverse().transpose())
}

/// Element-wise comparison with an absolute tolerance.
#[inline]
#[must_use]
pub fn approx_eq(a: &Mat4, b: &Mat4, epsilon: f32) -> bool {
    a.abs_diff_eq(*b, epsilon)
}
