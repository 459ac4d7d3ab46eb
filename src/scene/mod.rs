//! Scene graph module
//!
//! - [`SceneNode`]: transformable, drawable node owning its children
//! - [`Transform`]: accumulated local matrix with local-frame mutations
//! - [`Camera`]: view and projection matrices
//! - [`Scene`]: ordered roots plus the active camera

pub mod camera;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::Camera;
pub use node::{RenderFn, SceneNode};
pub use scene::Scene;
pub use transform::Transform;
