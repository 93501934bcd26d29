//! Painting context shared by render nodes.

use core::any::Any;
use std::fmt::Debug;

use crate::scene::{DrawCommand, Scene, SceneBuilder};

/// Context passed to nodes when painting.
#[derive(Debug, Default)]
pub struct RenderCtx {
    builder: SceneBuilder,
}

impl RenderCtx {
    /// Creates a new [`RenderCtx`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            builder: SceneBuilder::new(),
        }
    }

    /// Pushes a draw command into the scene.
    pub fn push(&mut self, command: DrawCommand) {
        self.builder.push(command);
    }

    /// Finalises the recorded scene.
    #[must_use]
    pub fn finish(self) -> Scene {
        self.builder.finish()
    }
}

/// Trait implemented by every node stored in the render tree.
///
/// The `Any` supertrait lets owners recover the concrete node type through
/// [`RenderTree::get_mut`](super::RenderTree::get_mut).
pub trait RenderNode: Debug + Any {
    /// Emits draw commands for this node. Children are painted afterwards,
    /// in child order.
    fn paint(&self, ctx: &mut RenderCtx);

    /// Short name used in log output.
    fn name(&self) -> &'static str {
        "node"
    }
}
