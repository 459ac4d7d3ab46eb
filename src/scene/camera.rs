use glam::{Mat4, Vec3};

use crate::math;

/// Perspective camera described by an eye point, a target and an up vector.
///
/// The view and projection matrices are recomputed whenever one of their
/// inputs changes, so the getters are plain reads.
#[derive(Debug, Clone)]
pub struct Camera {
    // === Placement ===
    pub(crate) eye: Vec3,
    pub(crate) target: Vec3,
    pub(crate) up: Vec3,

    // === Projection (fov stored in degrees) ===
    pub(crate) fov: f32,
    pub(crate) aspect: f32,
    pub(crate) near: f32,
    pub(crate) far: f32,

    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            eye: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: fov_degrees,
            aspect,
            near,
            far,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_view_matrix();
        cam.update_projection_matrix();
        cam
    }

    /// Places the camera at `eye`, looking at `target`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.eye = eye;
        self.target = target;
        self.up = up;
        self.update_view_matrix();
    }

    /// Builder form of [`Camera::look_at`].
    #[must_use]
    pub fn looking_at(mut self, eye: Vec3, target: Vec3, up: Vec3) -> Self {
        self.look_at(eye, target, up);
        self
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    fn update_view_matrix(&mut self) {
        self.view_matrix = math::look_at(self.eye, self.target, self.up);
    }

    fn update_projection_matrix(&mut self) {
        self.projection_matrix = math::perspective(self.fov, self.aspect, self.near, self.far);
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }
}

impl Default for Camera {
    /// 30 degree lens on a 3:2 canvas, eye at (10, 10, 25) looking at the origin.
    fn default() -> Self {
        Self::new_perspective(30.0, 1.5, 1.0, 100.0).looking_at(
            Vec3::new(10.0, 10.0, 25.0),
            Vec3::ZERO,
            Vec3::Y,
        )
    }
}
