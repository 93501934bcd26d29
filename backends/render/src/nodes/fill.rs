use kurbo::Affine;
use quire_core::{FillPaint, VectorPath};

use crate::scene::DrawCommand;
use crate::tree::{RenderCtx, RenderNode};

/// Leaf node filling the interior of a path.
///
/// A freshly created node has no paint and records nothing until its first
/// [`update`](Self::update).
#[derive(Debug, Default, Clone)]
pub struct FillNode {
    path: VectorPath,
    transform: Affine,
    paint: Option<FillPaint>,
    revision: u64,
}

impl FillNode {
    /// Creates an empty fill node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the geometry and paint for the next frame.
    ///
    /// Returns `true` if any input differs from what the node already holds.
    pub fn update(&mut self, path: &VectorPath, transform: Affine, paint: FillPaint) -> bool {
        if self.paint == Some(paint) && self.transform == transform && self.path == *path {
            return false;
        }
        if self.path != *path {
            self.path = path.clone();
        }
        self.transform = transform;
        self.paint = Some(paint);
        self.revision += 1;
        true
    }

    /// Path in local coordinates.
    #[must_use]
    pub const fn path(&self) -> &VectorPath {
        &self.path
    }

    /// Local-to-device transform.
    #[must_use]
    pub const fn transform(&self) -> Affine {
        self.transform
    }

    /// Current paint, if the node was ever updated.
    #[must_use]
    pub const fn fill_paint(&self) -> Option<&FillPaint> {
        self.paint.as_ref()
    }

    /// Number of updates that changed the node.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl RenderNode for FillNode {
    fn paint(&self, ctx: &mut RenderCtx) {
        let Some(paint) = self.paint else {
            return;
        };
        if self.path.is_empty() {
            return;
        }
        ctx.push(DrawCommand::FillPath {
            path: self.path.as_bez_path().clone(),
            transform: self.transform,
            paint,
        });
    }

    fn name(&self) -> &'static str {
        "fill"
    }
}
