//! Rendering glue between the scene graph and a graphics backend.
//!
//! - [`GraphicsBackend`]: the operations draw routines may issue
//! - [`RecordingBackend`]: headless backend that records every draw
//! - [`ProgramBindings`]: attribute/uniform slots resolved once per program
//! - [`RenderContext`]: explicit per-frame state passed to render callbacks
//! - [`LitMesh`] / [`FlatShape`] / [`ShiftedShape`]: ready-made draw routines

pub mod backend;
pub mod binding;
pub mod context;
pub mod flat;
pub mod lit_mesh;
pub mod recording;
pub mod shaders;
pub mod shifted;

pub use backend::{BufferId, GraphicsBackend, ProgramId, UniformLocation};
pub use binding::ProgramBindings;
pub use context::RenderContext;
pub use flat::FlatShape;
pub use lit_mesh::LitMesh;
pub use recording::{DrawCall, RecordingBackend, UniformValue};
pub use shifted::ShiftedShape;
