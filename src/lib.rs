#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod math;
pub mod render;
pub mod resources;
pub mod scene;
pub mod settings;

pub use errors::{OrreryError, Result};
pub use render::{GraphicsBackend, LitMesh, RecordingBackend, RenderContext};
pub use resources::MeshData;
pub use scene::{Camera, Scene, SceneNode, Transform};
pub use settings::DemoSettings;
