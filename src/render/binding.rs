//! Shader binding cache
//!
//! Attribute and uniform slots are looked up by name exactly once, right
//! after the program links. Draw routines then read the cached slots
//! instead of querying the backend every frame.

use rustc_hash::FxHashMap;

use crate::errors::{OrreryError, Result};
use crate::render::backend::{GraphicsBackend, ProgramId, UniformLocation};

/// Resolved name-to-slot table for one program.
#[derive(Debug, Clone)]
pub struct ProgramBindings {
    program: ProgramId,
    attributes: FxHashMap<String, u32>,
    uniforms: FxHashMap<String, UniformLocation>,
}

impl ProgramBindings {
    /// Resolves every listed name against `program`.
    ///
    /// Fails on the first name the program does not declare.
    pub fn resolve(
        backend: &dyn GraphicsBackend,
        program: ProgramId,
        attributes: &[&str],
        uniforms: &[&str],
    ) -> Result<Self> {
        let mut resolved_attributes = FxHashMap::default();
        for &name in attributes {
            let location = backend.attribute_location(program, name).ok_or_else(|| {
                OrreryError::MissingAttribute {
                    program: program.0,
                    name: name.to_string(),
                }
            })?;
            resolved_attributes.insert(name.to_string(), location);
        }

        let mut resolved_uniforms = FxHashMap::default();
        for &name in uniforms {
            let location = backend.uniform_location(program, name).ok_or_else(|| {
                OrreryError::MissingUniform {
                    program: program.0,
                    name: name.to_string(),
                }
            })?;
            resolved_uniforms.insert(name.to_string(), location);
        }

        log::debug!(
            "Program {program}: cached {} attributes, {} uniforms",
            resolved_attributes.len(),
            resolved_uniforms.len()
        );

        Ok(Self {
            program,
            attributes: resolved_attributes,
            uniforms: resolved_uniforms,
        })
    }

    #[inline]
    #[must_use]
    pub fn program(&self) -> ProgramId {
        self.program
    }

    pub fn attribute(&self, name: &str) -> Result<u32> {
        self.attributes
            .get(name)
            .copied()
            .ok_or_else(|| OrreryError::MissingAttribute {
                program: self.program.0,
                name: name.to_string(),
            })
    }

    pub fn uniform(&self, name: &str) -> Result<UniformLocation> {
        self.uniforms
            .get(name)
            .copied()
            .ok_or_else(|| OrreryError::MissingUniform {
                program: self.program.0,
                name: name.to_string(),
            })
    }
}
