use crate::render::backend::GraphicsBackend;
use crate::scene::camera::Camera;

/// Per-frame state handed to every render callback.
///
/// Replaces ambient globals: the active backend and the camera travel with
/// the traversal instead of living in statics.
pub struct RenderContext<'a> {
    pub backend: &'a mut dyn GraphicsBackend,
    pub camera: &'a Camera,
}

impl<'a> RenderContext<'a> {
    #[inline]
    pub fn new(backend: &'a mut dyn GraphicsBackend, camera: &'a Camera) -> Self {
        Self { backend, camera }
    }
}
