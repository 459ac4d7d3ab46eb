use glam::{Mat4, Vec4};

use crate::errors::Result;
use crate::render::{GraphicsBackend, RenderContext};
use crate::scene::camera::Camera;
use crate::scene::node::SceneNode;

/// A frame's worth of drawable hierarchy.
///
/// Holds the root nodes in insertion order, the active camera and the clear
/// color. Callers animate the roots between frames and then call
/// [`Scene::render`] once per frame.
#[derive(Debug)]
pub struct Scene {
    roots: Vec<SceneNode>,
    pub camera: Camera,
    pub background: Vec4,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl Scene {
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            roots: Vec::new(),
            camera,
            background: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Adds a root node and returns its index.
    pub fn add_root(&mut self, node: SceneNode) -> usize {
        self.roots.push(node);
        self.roots.len() - 1
    }

    #[must_use]
    pub fn roots(&self) -> &[SceneNode] {
        &self.roots
    }

    pub fn root_mut(&mut self, index: usize) -> Option<&mut SceneNode> {
        self.roots.get_mut(index)
    }

    pub fn roots_mut(&mut self) -> impl Iterator<Item = &mut SceneNode> {
        self.roots.iter_mut()
    }

    /// Total number of nodes across all roots.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(SceneNode::node_count).sum()
    }

    /// Clears the frame, then renders every root under the identity transform.
    pub fn render(&mut self, backend: &mut dyn GraphicsBackend) -> Result<()> {
        backend.clear(self.background);

        let mut ctx = RenderContext::new(backend, &self.camera);
        for root in &mut self.roots {
            root.render(&mut ctx, &Mat4::IDENTITY)?;
        }
        Ok(())
    }
}
