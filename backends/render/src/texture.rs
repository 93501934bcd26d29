//! Registry of images that texture nodes can reference.

use std::collections::HashMap;

use tracing::{debug, warn};

/// Identifier for a texture registered in a [`TextureAtlas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(u32);

impl TextureId {
    /// Returns the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Premultiplied RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel data, four bytes per pixel, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Owns every texture a backend may blit.
#[derive(Debug, Default)]
pub struct TextureAtlas {
    textures: HashMap<TextureId, Texture>,
    next: u32,
}

impl TextureAtlas {
    /// Creates an empty atlas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers premultiplied RGBA8 pixels.
    ///
    /// Returns `None` if the image is empty or `pixels` does not hold exactly
    /// `width * height * 4` bytes.
    pub fn insert_rgba8(&mut self, width: u32, height: u32, pixels: Vec<u8>) -> Option<TextureId> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if expected == 0 || pixels.len() != expected {
            warn!(width, height, len = pixels.len(), "rejected texture with mismatched size");
            return None;
        }

        self.next += 1;
        let id = TextureId(self.next);
        self.textures.insert(
            id,
            Texture {
                width,
                height,
                pixels,
            },
        );
        debug!(?id, width, height, "registered texture");
        Some(id)
    }

    /// Looks up a texture.
    #[must_use]
    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(&id)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: TextureId) -> bool {
        self.textures.contains_key(&id)
    }

    /// Unregisters a texture, returning its pixels.
    pub fn remove(&mut self, id: TextureId) -> Option<Texture> {
        self.textures.remove(&id)
    }

    /// Number of registered textures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns `true` if no texture is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_never_reused() {
        let mut atlas = TextureAtlas::new();
        let a = atlas.insert_rgba8(1, 1, vec![0; 4]).unwrap();
        atlas.remove(a);
        let b = atlas.insert_rgba8(1, 1, vec![0; 4]).unwrap();
        assert_ne!(a, b);
        assert!(!atlas.contains(a));
        assert!(atlas.contains(b));
    }

    #[test]
    fn rejects_wrong_pixel_count() {
        let mut atlas = TextureAtlas::new();
        assert!(atlas.insert_rgba8(2, 2, vec![0; 12]).is_none());
        assert!(atlas.insert_rgba8(0, 0, Vec::new()).is_none());
        assert!(atlas.is_empty());
    }
}
