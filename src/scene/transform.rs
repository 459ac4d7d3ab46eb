use glam::{Mat4, Vec3};

/// Local transform of a scene node.
///
/// Wraps a single accumulated matrix. Every mutation right-multiplies the
/// current matrix, so each new step is expressed in the node's current local
/// frame: `translate` then `rotate_z` spins the node about its own translated
/// origin, while `rotate_z` then `translate` moves it along its rotated axes.
///
/// Nothing is cached besides the matrix itself; world matrices are derived at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }

    #[must_use]
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    // ========================================================================
    // Accumulating mutations (local frame)
    // ========================================================================

    /// Composes `m` on the right: `matrix = matrix * m`.
    #[inline]
    pub fn apply(&mut self, m: Mat4) {
        self.matrix *= m;
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.apply(Mat4::from_translation(offset));
    }

    /// Rotation about the local X axis, angle in degrees.
    pub fn rotate_x(&mut self, degrees: f32) {
        self.apply(Mat4::from_rotation_x(degrees.to_radians()));
    }

    /// Rotation about the local Y axis, angle in degrees.
    pub fn rotate_y(&mut self, degrees: f32) {
        self.apply(Mat4::from_rotation_y(degrees.to_radians()));
    }

    /// Rotation about the local Z axis, angle in degrees.
    pub fn rotate_z(&mut self, degrees: f32) {
        self.apply(Mat4::from_rotation_z(degrees.to_radians()));
    }

    pub fn scale(&mut self, factors: Vec3) {
        self.apply(Mat4::from_scale(factors));
    }

    // ========================================================================
    // Getters & Helpers
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Replaces the accumulated matrix outright.
    pub fn set_matrix(&mut self, matrix: Mat4) {
        self.matrix = matrix;
    }

    pub fn reset(&mut self) {
        self.matrix = Mat4::IDENTITY;
    }

    /// Translation column of the accumulated matrix.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        Self::from_matrix(matrix)
    }
}
