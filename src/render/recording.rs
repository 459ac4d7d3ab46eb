//! Headless recording backend
//!
//! Implements [`GraphicsBackend`] without a GPU. Programs are "compiled" by
//! scanning GLSL declarations, buffers are kept in memory, and every draw is
//! recorded together with the uniform values that were current at the time.
//! Used by the test suite and by the demos.

use glam::{Mat3, Mat4, Vec4};
use rustc_hash::FxHashMap;

use crate::errors::{OrreryError, Result};
use crate::render::backend::{BufferId, GraphicsBackend, ProgramId, UniformLocation};

/// Value last written to a uniform slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Mat3(Mat3),
    Vec4(Vec4),
    Float(f32),
}

/// Snapshot of one `draw_triangles` call.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub program: Option<ProgramId>,
    pub first: u32,
    pub count: u32,
    /// Attribute location -> buffer feeding it.
    pub attributes: FxHashMap<u32, BufferId>,
    /// Uniform name -> value at draw time.
    pub uniforms: FxHashMap<String, UniformValue>,
}

impl DrawCall {
    #[must_use]
    pub fn mat4(&self, name: &str) -> Option<Mat4> {
        match self.uniforms.get(name) {
            Some(UniformValue::Mat4(m)) => Some(*m),
            _ => None,
        }
    }

    #[must_use]
    pub fn mat3(&self, name: &str) -> Option<Mat3> {
        match self.uniforms.get(name) {
            Some(UniformValue::Mat3(m)) => Some(*m),
            _ => None,
        }
    }

    #[must_use]
    pub fn vec4(&self, name: &str) -> Option<Vec4> {
        match self.uniforms.get(name) {
            Some(UniformValue::Vec4(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.uniforms.get(name) {
            Some(UniformValue::Float(v)) => Some(*v),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct RecordedProgram {
    attributes: Vec<String>,
    uniforms: Vec<String>,
    values: FxHashMap<u32, UniformValue>,
}

/// In-memory [`GraphicsBackend`].
#[derive(Debug, Default)]
pub struct RecordingBackend {
    programs: Vec<RecordedProgram>,
    buffers: Vec<Vec<u8>>,
    current_program: Option<ProgramId>,
    bound_attributes: FxHashMap<u32, BufferId>,
    draws: Vec<DrawCall>,
    clears: Vec<Vec4>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All draws recorded so far, in issue order.
    #[must_use]
    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Clear colors recorded so far; one per frame when driven by `Scene`.
    #[must_use]
    pub fn clears(&self) -> &[Vec4] {
        &self.clears
    }

    #[must_use]
    pub fn buffer(&self, id: BufferId) -> Option<&[u8]> {
        self.buffers.get(id.0 as usize).map(Vec::as_slice)
    }

    #[must_use]
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Forgets recorded draws and clears, keeping programs and buffers.
    pub fn reset_frame(&mut self) {
        self.draws.clear();
        self.clears.clear();
    }

    fn program(&self, id: ProgramId) -> Option<&RecordedProgram> {
        self.programs.get(id.0 as usize)
    }

    fn write_uniform(&mut self, location: UniformLocation, value: UniformValue) {
        if self.current_program != Some(location.program) {
            log::warn!(
                "Uniform write to program {} while {:?} is current",
                location.program,
                self.current_program
            );
        }
        if let Some(program) = self.programs.get_mut(location.program.0 as usize) {
            program.values.insert(location.slot, value);
        }
    }
}

/// Collects the names declared by `qualifiers` (e.g. `uniform mat4 model;`).
fn declarations(source: &str, qualifiers: &[&str]) -> Vec<String> {
    let code: String = source
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .map(|line| line.split("//").next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n");

    let mut names = Vec::new();
    for statement in code.split(';') {
        let mut tokens = statement.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };
        if !qualifiers.contains(&first) {
            continue;
        }
        // Skip precision qualifiers and the type; the last token is the name.
        if let Some(name) = tokens.last() {
            let name = name.split('[').next().unwrap_or(name);
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

fn check_stage(stage: &'static str, source: &str) -> Result<()> {
    if source.contains("void main") {
        Ok(())
    } else {
        Err(OrreryError::ShaderCompile {
            stage,
            reason: "no entry point 'void main' found".to_string(),
        })
    }
}

impl GraphicsBackend for RecordingBackend {
    fn compile_program(&mut self, vertex_src: &str, fragment_src: &str) -> Result<ProgramId> {
        check_stage("vertex", vertex_src)?;
        check_stage("fragment", fragment_src)?;

        // Every varying the fragment stage reads has to be written by the vertex stage.
        let vertex_out = declarations(vertex_src, &["varying", "out"]);
        for input in declarations(fragment_src, &["varying", "in"]) {
            if !vertex_out.contains(&input) {
                return Err(OrreryError::ProgramLink(format!(
                    "fragment input '{input}' is not written by the vertex shader"
                )));
            }
        }

        let attributes = declarations(vertex_src, &["attribute", "in"]);
        let mut uniforms = declarations(vertex_src, &["uniform"]);
        for name in declarations(fragment_src, &["uniform"]) {
            if !uniforms.contains(&name) {
                uniforms.push(name);
            }
        }

        let id = ProgramId(self.programs.len() as u32);
        log::debug!(
            "Linked program {id}: attributes {attributes:?}, uniforms {uniforms:?}"
        );
        self.programs.push(RecordedProgram {
            attributes,
            uniforms,
            values: FxHashMap::default(),
        });
        Ok(id)
    }

    fn attribute_location(&self, program: ProgramId, name: &str) -> Option<u32> {
        self.program(program)?
            .attributes
            .iter()
            .position(|a| a == name)
            .map(|i| i as u32)
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformLocation> {
        let slot = self.program(program)?.uniforms.iter().position(|u| u == name)?;
        Some(UniformLocation {
            program,
            slot: slot as u32,
        })
    }

    fn upload_buffer(&mut self, data: &[u8]) -> Result<BufferId> {
        let id = BufferId(self.buffers.len() as u32);
        self.buffers.push(data.to_vec());
        log::debug!("Uploaded buffer {} ({} bytes)", id.0, data.len());
        Ok(id)
    }

    fn use_program(&mut self, program: Option<ProgramId>) {
        if program.is_none() {
            self.bound_attributes.clear();
        }
        self.current_program = program;
    }

    fn bind_attribute(&mut self, location: u32, buffer: BufferId, components: u32) -> Result<()> {
        let Some(data) = self.buffers.get(buffer.0 as usize) else {
            return Err(OrreryError::InvalidBuffer(buffer.0));
        };
        let stride = components as usize * std::mem::size_of::<f32>();
        if stride == 0 || data.len() % stride != 0 {
            log::warn!(
                "Buffer {} length {} is not a multiple of {components} floats",
                buffer.0,
                data.len()
            );
        }
        self.bound_attributes.insert(location, buffer);
        Ok(())
    }

    fn set_uniform_matrix4(&mut self, location: UniformLocation, value: &Mat4) {
        self.write_uniform(location, UniformValue::Mat4(*value));
    }

    fn set_uniform_matrix3(&mut self, location: UniformLocation, value: &Mat3) {
        self.write_uniform(location, UniformValue::Mat3(*value));
    }

    fn set_uniform_vec4(&mut self, location: UniformLocation, value: Vec4) {
        self.write_uniform(location, UniformValue::Vec4(value));
    }

    fn set_uniform_float(&mut self, location: UniformLocation, value: f32) {
        self.write_uniform(location, UniformValue::Float(value));
    }

    fn draw_triangles(&mut self, first: u32, count: u32) {
        let uniforms: FxHashMap<String, UniformValue> = self
            .current_program
            .and_then(|id| self.program(id))
            .map(|program| {
                program
                    .values
                    .iter()
                    .filter_map(|(slot, value)| {
                        program
                            .uniforms
                            .get(*slot as usize)
                            .map(|name| (name.clone(), *value))
                    })
                    .collect()
            })
            .unwrap_or_default();

        self.draws.push(DrawCall {
            program: self.current_program,
            first,
            count,
            attributes: self.bound_attributes.clone(),
            uniforms,
        });
    }

    fn clear(&mut self, color: Vec4) {
        self.clears.push(color);
    }
}
