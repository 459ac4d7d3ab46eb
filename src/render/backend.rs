//! Graphics backend contract
//!
//! Everything a draw routine needs from the GPU side, expressed as a trait
//! so the scene graph never touches a concrete graphics API. Handles are
//! small `Copy` newtypes owned by whichever component created them.

use std::fmt;

use glam::{Mat3, Mat4, Vec4};

use crate::errors::Result;

/// Linked shader program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramId(pub u32);

/// Vertex buffer living on the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

/// Uniform slot inside a specific program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UniformLocation {
    pub program: ProgramId,
    pub slot: u32,
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Operations a render callback may issue.
pub trait GraphicsBackend {
    /// Compiles and links a vertex/fragment pair.
    fn compile_program(&mut self, vertex_src: &str, fragment_src: &str) -> Result<ProgramId>;

    /// Location of a vertex attribute, if the program declares it.
    fn attribute_location(&self, program: ProgramId, name: &str) -> Option<u32>;

    /// Location of a uniform, if the program declares it.
    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformLocation>;

    /// Copies `data` into a new static buffer.
    fn upload_buffer(&mut self, data: &[u8]) -> Result<BufferId>;

    /// Makes `program` current; `None` unbinds.
    fn use_program(&mut self, program: Option<ProgramId>);

    /// Feeds attribute `location` from `buffer`, `components` floats per vertex.
    fn bind_attribute(&mut self, location: u32, buffer: BufferId, components: u32) -> Result<()>;

    fn set_uniform_matrix4(&mut self, location: UniformLocation, value: &Mat4);

    fn set_uniform_matrix3(&mut self, location: UniformLocation, value: &Mat3);

    fn set_uniform_vec4(&mut self, location: UniformLocation, value: Vec4);

    fn set_uniform_float(&mut self, location: UniformLocation, value: f32);

    /// Draws `count` vertices as a triangle list starting at `first`.
    fn draw_triangles(&mut self, first: u32, count: u32);

    fn clear(&mut self, color: Vec4);
}
