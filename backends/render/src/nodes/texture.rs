use quire_core::Rect;
use tracing::warn;

use crate::scene::DrawCommand;
use crate::texture::{TextureAtlas, TextureId};
use crate::tree::{RenderCtx, RenderNode};

/// Per-axis mirroring applied when a texture is blitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mirror {
    /// Flip left and right.
    pub horizontal: bool,
    /// Flip top and bottom.
    pub vertical: bool,
}

impl Mirror {
    /// No mirroring.
    pub const NONE: Self = Self::new(false, false);
    /// Flip left and right.
    pub const HORIZONTAL: Self = Self::new(true, false);
    /// Flip top and bottom.
    pub const VERTICAL: Self = Self::new(false, true);
    /// Flip both axes.
    pub const BOTH: Self = Self::new(true, true);

    /// Creates a mirror setting.
    #[must_use]
    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Leaf node blitting a texture into a rectangle.
#[derive(Debug, Default, Clone)]
pub struct TextureNode {
    rect: Rect,
    texture: Option<TextureId>,
    mirrored: Mirror,
}

impl TextureNode {
    /// Creates a node with no texture bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `texture`, drawn into `rect`.
    ///
    /// An id unknown to `atlas` leaves the node null. Returns `true` if
    /// anything changed.
    pub fn set_texture(
        &mut self,
        atlas: &TextureAtlas,
        rect: Rect,
        texture: TextureId,
        mirrored: Mirror,
    ) -> bool {
        let texture = if atlas.contains(texture) {
            Some(texture)
        } else {
            warn!(?texture, "texture is not registered; node stays null");
            None
        };

        let changed = self.rect != rect || self.texture != texture || self.mirrored != mirrored;
        self.rect = rect;
        self.texture = texture;
        self.mirrored = mirrored;
        changed
    }

    /// Returns `true` if no texture is bound.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.texture.is_none()
    }

    /// Destination rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Mirroring applied when drawing.
    #[must_use]
    pub const fn mirrored(&self) -> Mirror {
        self.mirrored
    }

    /// Bound texture.
    #[must_use]
    pub const fn texture(&self) -> Option<TextureId> {
        self.texture
    }
}

impl RenderNode for TextureNode {
    fn paint(&self, ctx: &mut RenderCtx) {
        let Some(texture) = self.texture else {
            return;
        };
        if self.rect.is_empty() {
            return;
        }
        ctx.push(DrawCommand::Texture {
            texture,
            rect: self.rect,
            mirrored: self.mirrored,
        });
    }

    fn name(&self) -> &'static str {
        "texture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_texture_leaves_node_null() {
        let mut atlas = TextureAtlas::new();
        let id = atlas.insert_rgba8(1, 1, vec![255; 4]).unwrap();
        atlas.remove(id);

        let mut node = TextureNode::new();
        node.set_texture(&atlas, Rect::from_xywh(0.0, 0.0, 4.0, 4.0), id, Mirror::NONE);
        assert!(node.is_null());
    }

    #[test]
    fn bound_texture_is_recorded() {
        let mut atlas = TextureAtlas::new();
        let id = atlas.insert_rgba8(1, 1, vec![255; 4]).unwrap();
        let rect = Rect::from_xywh(1.0, 2.0, 3.0, 4.0);

        let mut node = TextureNode::new();
        assert!(node.set_texture(&atlas, rect, id, Mirror::VERTICAL));
        assert!(!node.set_texture(&atlas, rect, id, Mirror::VERTICAL));
        assert!(!node.is_null());
        assert_eq!(node.texture(), Some(id));
        assert_eq!(node.rect(), rect);
        assert_eq!(node.mirrored(), Mirror::VERTICAL);

        let mut ctx = RenderCtx::new();
        node.paint(&mut ctx);
        assert_eq!(ctx.finish().commands().len(), 1);
    }
}
