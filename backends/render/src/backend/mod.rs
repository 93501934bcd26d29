//! Backend traits implemented by concrete Quire surfaces.

use std::fmt::Debug;

use crate::texture::TextureAtlas;
use crate::tree::RenderTree;

#[cfg(feature = "cpu")]
pub mod cpu;

#[cfg(feature = "cpu")]
pub use cpu::TinySkiaBackend;

/// Result of rendering a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameResult {
    /// Frame presented successfully.
    Presented,
    /// Rendering skipped because there were no dirty nodes.
    Idle,
}

/// Trait implemented by every backend surface.
pub trait RenderBackend: Debug {
    /// Renders the tree if anything in it changed since the previous frame.
    fn render(&mut self, tree: &mut RenderTree, textures: &TextureAtlas) -> FrameResult;
}
