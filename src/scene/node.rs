use std::fmt;

use glam::{Mat4, Vec3};

use crate::errors::{OrreryError, Result};
use crate::render::RenderContext;
use crate::scene::transform::Transform;

/// Draw routine bound to a node.
///
/// Receives the explicit render context and the node's world transform for
/// this frame. It must not hold on to either beyond the call.
pub type RenderFn = Box<dyn FnMut(&mut RenderContext<'_>, &Mat4) -> Result<()>>;

/// One transformable, drawable unit of the hierarchy.
///
/// # Hierarchy
///
/// A node owns its children outright. [`SceneNode::add_child`] takes the
/// child by value, so a node can only ever have one parent and the graph
/// cannot contain cycles; trying to share a node between two parents is a
/// move error at compile time rather than a runtime failure.
///
/// # Transform
///
/// The local transform starts as identity and accumulates mutations in the
/// node's own frame (see [`Transform`]). The world transform is never
/// stored: [`SceneNode::render`] recomputes it as `parent_world * local` on
/// every call, so mutations show up on the next frame.
pub struct SceneNode {
    name: String,
    transform: Transform,
    children: Vec<SceneNode>,
    render_fn: RenderFn,
}

impl SceneNode {
    /// Creates a node that draws with `render_fn`.
    pub fn new<F>(render_fn: F) -> Self
    where
        F: FnMut(&mut RenderContext<'_>, &Mat4) -> Result<()> + 'static,
    {
        Self {
            name: String::from("node"),
            transform: Transform::new(),
            children: Vec::new(),
            render_fn: Box::new(render_fn),
        }
    }

    /// Creates a node that draws nothing; useful as a pivot for its children.
    #[must_use]
    pub fn group() -> Self {
        Self::new(|_, _| Ok(()))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: impl Into<Transform>) -> Self {
        self.transform = transform.into();
        self
    }

    // ========================================================================
    // Transform mutations
    // ========================================================================

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.transform.translate(Vec3::new(dx, dy, dz));
    }

    #[inline]
    pub fn move_up(&mut self, distance: f32) {
        self.translate(0.0, distance, 0.0);
    }

    #[inline]
    pub fn move_down(&mut self, distance: f32) {
        self.translate(0.0, -distance, 0.0);
    }

    pub fn rotate_x(&mut self, degrees: f32) {
        self.transform.rotate_x(degrees);
    }

    pub fn rotate_y(&mut self, degrees: f32) {
        self.transform.rotate_y(degrees);
    }

    pub fn rotate_z(&mut self, degrees: f32) {
        self.transform.rotate_z(degrees);
    }

    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.transform.scale(Vec3::new(sx, sy, sz));
    }

    /// Right-multiplies an arbitrary matrix into the local transform.
    pub fn apply(&mut self, m: Mat4) {
        self.transform.apply(m);
    }

    pub fn set_local_transform(&mut self, m: Mat4) {
        self.transform.set_matrix(m);
    }

    pub fn reset_transform(&mut self) {
        self.transform.reset();
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Appends `child` after the existing children.
    pub fn add_child(&mut self, child: SceneNode) {
        log::debug!("Attaching '{}' under '{}'", child.name, self.name);
        self.children.push(child);
    }

    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut SceneNode> {
        self.children.get_mut(index)
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn local_transform(&self) -> &Mat4 {
        self.transform.matrix()
    }

    #[inline]
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Draws this subtree in pre-order: self, then each child's full
    /// subtree in insertion order.
    ///
    /// The first failing callback stops the traversal; its error comes back
    /// wrapped in [`OrreryError::Render`] naming the node. Siblings after
    /// the failure are not drawn.
    pub fn render(&mut self, ctx: &mut RenderContext<'_>, parent_world: &Mat4) -> Result<()> {
        let world = *parent_world * *self.transform.matrix();
        log::trace!("Rendering '{}' at {:?}", self.name, world.w_axis);

        (self.render_fn)(ctx, &world).map_err(|source| OrreryError::Render {
            node: self.name.clone(),
            source: Box::new(source),
        })?;

        for child in &mut self.children {
            child.render(ctx, &world)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneNode")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
