//! Leaf and group nodes stored in the render tree.
//!
//! Shape primitives ([`FillNode`], [`BorderNode`]) keep the last inputs they
//! were updated with and report whether an update changed anything, so owners
//! can update them every frame without causing redundant repaints.

mod border;
mod fill;
mod group;
mod texture;

pub use border::BorderNode;
pub use fill::FillNode;
pub use group::GroupNode;
pub use texture::{Mirror, TextureNode};
