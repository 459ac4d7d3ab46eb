//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`OrreryError`] covers all failure modes including:
//! - Shader compilation and binding resolution failures
//! - Degenerate matrices met while deriving normal matrices
//! - Render callback failures, tagged with the failing node
//! - Settings loading and validation errors
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, OrreryError>`.
//!
//! ```rust,ignore
//! use orrery::errors::{OrreryError, Result};
//!
//! fn draw() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum OrreryError {
    // ========================================================================
    // Backend & Shader Errors
    // ========================================================================
    /// A shader stage failed to compile.
    #[error("Failed to compile {stage} shader: {reason}")]
    ShaderCompile {
        /// "vertex" or "fragment"
        stage: &'static str,
        reason: String,
    },

    /// The shader pair compiled but could not be linked into a program.
    #[error("Failed to link program: {0}")]
    ProgramLink(String),

    /// A vertex attribute declared by the caller does not exist in the program.
    #[error("Attribute '{name}' not found in program {program}")]
    MissingAttribute { program: u32, name: String },

    /// A uniform declared by the caller does not exist in the program.
    #[error("Uniform '{name}' not found in program {program}")]
    MissingUniform { program: u32, name: String },

    /// A buffer handle does not refer to an uploaded buffer.
    #[error("Invalid buffer handle: {0}")]
    InvalidBuffer(u32),

    /// Vertex data does not match what the draw routine expects.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    // ========================================================================
    // Math Errors
    // ========================================================================
    /// A matrix that must be inverted has a (near) zero determinant.
    #[error("Singular matrix (determinant {determinant})")]
    SingularMatrix { determinant: f32 },

    // ========================================================================
    // Scene Errors
    // ========================================================================
    /// A node's render callback failed; traversal stopped at this node.
    #[error("Render callback failed at node '{node}': {source}")]
    Render {
        node: String,
        #[source]
        source: Box<OrreryError>,
    },

    // ========================================================================
    // Settings & I/O Errors
    // ========================================================================
    /// Settings parsed but hold unusable values.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, OrreryError>`.
pub type Result<T> = std::result::Result<T, OrreryError>;
