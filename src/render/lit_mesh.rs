use glam::{Mat4, Vec4};

use crate::errors::{OrreryError, Result};
use crate::math;
use crate::render::backend::{BufferId, GraphicsBackend};
use crate::render::binding::ProgramBindings;
use crate::render::context::RenderContext;
use crate::render::shaders;
use crate::resources::MeshData;

const ATTRIBUTES: [&str; 2] = ["a_Position", "a_Normal"];
const UNIFORMS: [&str; 6] = [
    "model",
    "view",
    "projection",
    "normalMatrix",
    "u_Color",
    "lightPosition",
];

/// A mesh drawn with the diffuse lighting shader.
///
/// Owns its program, bindings and vertex buffers; one instance can back any
/// number of scene nodes, each drawing it under its own world transform.
#[derive(Debug, Clone)]
pub struct LitMesh {
    bindings: ProgramBindings,
    positions: BufferId,
    normals: BufferId,
    vertex_count: u32,
    pub color: Vec4,
    pub light_position: Vec4,
}

impl LitMesh {
    /// Compiles the lighting program and uploads `mesh`.
    ///
    /// The mesh needs 3-component positions and per-vertex normals.
    pub fn new(backend: &mut dyn GraphicsBackend, mesh: &MeshData, color: Vec4) -> Result<Self> {
        if mesh.position_components != 3 || !mesh.has_normals() {
            return Err(OrreryError::InvalidMesh(
                "lit meshes need xyz positions and normals".to_string(),
            ));
        }

        let program = backend.compile_program(shaders::LIGHTING_VERTEX, shaders::LIGHTING_FRAGMENT)?;
        let bindings = ProgramBindings::resolve(backend, program, &ATTRIBUTES, &UNIFORMS)?;

        let positions = backend.upload_buffer(bytemuck::cast_slice(&mesh.positions))?;
        let normals = backend.upload_buffer(bytemuck::cast_slice(&mesh.normals))?;

        Ok(Self {
            bindings,
            positions,
            normals,
            vertex_count: mesh.vertex_count,
            color,
            light_position: Vec4::new(5.0, 10.0, 5.0, 1.0),
        })
    }

    #[must_use]
    pub fn with_light_position(mut self, position: Vec4) -> Self {
        self.light_position = position;
        self
    }

    #[must_use]
    pub fn bindings(&self) -> &ProgramBindings {
        &self.bindings
    }

    /// Issues one draw of the whole mesh under `model`.
    pub fn draw(&self, ctx: &mut RenderContext<'_>, model: &Mat4) -> Result<()> {
        let view = ctx.camera.view_matrix();
        let normal_matrix = math::normal_matrix(model, view)?;
        let b = &self.bindings;
        let backend = &mut *ctx.backend;

        backend.use_program(Some(b.program()));
        backend.bind_attribute(b.attribute("a_Position")?, self.positions, 3)?;
        backend.bind_attribute(b.attribute("a_Normal")?, self.normals, 3)?;

        backend.set_uniform_matrix4(b.uniform("view")?, view);
        backend.set_uniform_matrix4(b.uniform("projection")?, ctx.camera.projection_matrix());
        backend.set_uniform_vec4(b.uniform("u_Color")?, self.color);
        backend.set_uniform_vec4(b.uniform("lightPosition")?, self.light_position);
        backend.set_uniform_matrix4(b.uniform("model")?, model);
        backend.set_uniform_matrix3(b.uniform("normalMatrix")?, &normal_matrix);

        backend.draw_triangles(0, self.vertex_count);
        backend.use_program(None);
        Ok(())
    }
}
