//! Quire's retained render tree.
//!
//! The crate hosts the infrastructure shape items draw through: an arena
//! [`RenderTree`] of [`RenderNode`]s, the fill, border and texture leaf
//! nodes, a backend-agnostic [`Scene`] of draw commands, and backends that
//! turn scenes into pixels (tiny-skia behind the `cpu` feature).

#![deny(missing_debug_implementations)]

pub mod backend;
pub mod nodes;
pub mod scene;
pub mod texture;
pub mod tree;

pub use backend::{FrameResult, RenderBackend};
#[cfg(feature = "cpu")]
pub use backend::TinySkiaBackend;
pub use nodes::{BorderNode, FillNode, GroupNode, Mirror, TextureNode};
pub use scene::{DrawCommand, Scene};
pub use texture::{Texture, TextureAtlas, TextureId};
pub use tree::{DirtyNode, DirtyReason, NodeId, NodeRole, RenderCtx, RenderNode, RenderTree};
