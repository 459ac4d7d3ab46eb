//! CPU-side vertex data.

/// Non-indexed vertex streams ready for upload.
///
/// Every stream is flat: `positions` holds `position_components` floats per
/// vertex, `colors` four, `normals` three. Empty streams are allowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub position_components: u32,
    pub colors: Vec<f32>,
    pub normals: Vec<f32>,
    pub vertex_count: u32,
}

// Corner positions of the unit cube.
const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
];

// Face order: +Z, +X, -Z, -X, +Y, -Y
const CUBE_FACE_COLORS: [[f32; 4]; 6] = [
    [0.4, 0.4, 1.0, 1.0],
    [1.0, 0.4, 0.4, 1.0],
    [0.0, 0.0, 0.7, 1.0],
    [0.7, 0.0, 0.0, 1.0],
    [0.4, 1.0, 0.4, 1.0],
    [0.0, 0.7, 0.0, 1.0],
];

const CUBE_FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, -1.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
];

// Two counter-clockwise triangles per face.
const CUBE_INDICES: [usize; 36] = [
    0, 1, 2, 0, 2, 3, // +z
    1, 5, 6, 1, 6, 2, // +x
    5, 4, 7, 5, 7, 6, // -z
    4, 0, 3, 4, 3, 7, // -x
    3, 2, 6, 3, 6, 7, // +y
    4, 5, 1, 4, 1, 0, // -y
];

impl MeshData {
    /// Unit cube centred on the origin with flat per-face colors and normals.
    #[must_use]
    pub fn cube() -> Self {
        let mut positions = Vec::with_capacity(36 * 3);
        let mut colors = Vec::with_capacity(36 * 4);
        let mut normals = Vec::with_capacity(36 * 3);

        for (i, &corner) in CUBE_INDICES.iter().enumerate() {
            let face = i / 6;
            positions.extend_from_slice(&CUBE_CORNERS[corner]);
            colors.extend_from_slice(&CUBE_FACE_COLORS[face]);
            normals.extend_from_slice(&CUBE_FACE_NORMALS[face]);
        }

        Self {
            positions,
            position_components: 3,
            colors,
            normals,
            vertex_count: 36,
        }
    }

    /// Flat 2D outline or triangle list from `(x, y)` pairs.
    #[must_use]
    pub fn from_points_2d(points: &[[f32; 2]]) -> Self {
        Self {
            positions: points.iter().flatten().copied().collect(),
            position_components: 2,
            vertex_count: points.len() as u32,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }
}
