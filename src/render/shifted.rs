use glam::{Vec2, Vec4};

use crate::errors::Result;
use crate::render::backend::{BufferId, GraphicsBackend};
use crate::render::binding::ProgramBindings;
use crate::render::context::RenderContext;
use crate::render::shaders;
use crate::resources::MeshData;

/// Single-color shape moved by the `shiftx` / `shifty` float uniforms
/// instead of a matrix. Shares the unlit fragment shader with
/// [`FlatShape`](crate::render::FlatShape).
#[derive(Debug, Clone)]
pub struct ShiftedShape {
    bindings: ProgramBindings,
    positions: BufferId,
    components: u32,
    vertex_count: u32,
    pub color: Vec4,
}

impl ShiftedShape {
    pub fn new(backend: &mut dyn GraphicsBackend, mesh: &MeshData, color: Vec4) -> Result<Self> {
        let program = backend.compile_program(shaders::SHIFT_VERTEX, shaders::FLAT_FRAGMENT)?;
        let bindings = ProgramBindings::resolve(
            backend,
            program,
            &["a_Position"],
            &["shiftx", "shifty", "color"],
        )?;
        let positions = backend.upload_buffer(bytemuck::cast_slice(&mesh.positions))?;

        Ok(Self {
            bindings,
            positions,
            components: mesh.position_components,
            vertex_count: mesh.vertex_count,
            color,
        })
    }

    /// Draws the shape offset by `shift` in clip space.
    pub fn draw(&self, ctx: &mut RenderContext<'_>, shift: Vec2) -> Result<()> {
        let b = &self.bindings;
        let backend = &mut *ctx.backend;

        backend.use_program(Some(b.program()));
        backend.bind_attribute(b.attribute("a_Position")?, self.positions, self.components)?;
        backend.set_uniform_vec4(b.uniform("color")?, self.color);
        backend.set_uniform_float(b.uniform("shiftx")?, shift.x);
        backend.set_uniform_float(b.uniform("shifty")?, shift.y);
        backend.draw_triangles(0, self.vertex_count);
        backend.use_program(None);
        Ok(())
    }
}
