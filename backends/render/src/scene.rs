//! Backend-agnostic drawing commands recorded during painting.

use kurbo::{Affine, BezPath};
use quire_core::{FillPaint, Rect, StrokeStyle};

use crate::nodes::Mirror;
use crate::texture::TextureId;

/// A fully recorded scene containing draw commands.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Returns the underlying commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn from_builder(builder: SceneBuilder) -> Self {
        Self {
            commands: builder.commands,
        }
    }
}

/// Builder used by [`RenderCtx`](crate::tree::render::RenderCtx) to capture draw commands.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    commands: Vec<DrawCommand>,
}

impl SceneBuilder {
    /// Creates a new builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Pushes a drawing command into the scene.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Finalises the builder, returning the immutable scene.
    #[must_use]
    pub fn finish(self) -> Scene {
        Scene::from_builder(self)
    }
}

/// Primitive drawing operations understood by Quire backends.
///
/// Paths are stored in their local coordinates together with the transform
/// that maps them into device space.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Fill the interior of a path.
    FillPath {
        /// Path in local coordinates.
        path: BezPath,
        /// Local-to-device transform.
        transform: Affine,
        /// Solid color or gradient, in device coordinates.
        paint: FillPaint,
    },
    /// Stroke the outline of a path.
    StrokePath {
        /// Path in local coordinates.
        path: BezPath,
        /// Local-to-device transform.
        transform: Affine,
        /// Stroke color, caps, joins and dashes.
        stroke: StrokeStyle,
        /// Stroke width in device pixels.
        width: f32,
    },
    /// Blit a texture into a device rectangle.
    Texture {
        /// Texture registered in the [`TextureAtlas`](crate::TextureAtlas).
        texture: TextureId,
        /// Destination rectangle.
        rect: Rect,
        /// Per-axis mirroring.
        mirrored: Mirror,
    },
}
