use kurbo::Affine;
use quire_core::{StrokeStyle, VectorPath};

use crate::scene::DrawCommand;
use crate::tree::{RenderCtx, RenderNode};

/// Leaf node stroking the outline of a path.
#[derive(Debug, Default, Clone)]
pub struct BorderNode {
    path: VectorPath,
    transform: Affine,
    stroke: Option<StrokeStyle>,
    revision: u64,
}

impl BorderNode {
    /// Creates an empty border node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the geometry and stroke for the next frame.
    ///
    /// Returns `true` if any input differs from what the node already holds.
    pub fn update(&mut self, path: &VectorPath, transform: Affine, stroke: &StrokeStyle) -> bool {
        if self.stroke.as_ref() == Some(stroke) && self.transform == transform && self.path == *path
        {
            return false;
        }
        if self.path != *path {
            self.path = path.clone();
        }
        self.transform = transform;
        self.stroke = Some(stroke.clone());
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

    /// Current stroke, if the node was ever updated.
    #[must_use]
    pub const fn stroke(&self) -> Option<&StrokeStyle> {
        self.stroke.as_ref()
    }

    /// Number of updates that changed the node.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Stroke width in device pixels.
    ///
    /// Non-cosmetic strokes follow the smaller axis scale of the transform.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn device_width(&self) -> f32 {
        let Some(stroke) = &self.stroke else {
            return 0.0;
        };
        let [a, b, c, d, _, _] = self.transform.as_coeffs();
        stroke.scaled_width(a.hypot(b) as f32, c.hypot(d) as f32)
    }
}

impl RenderNode for BorderNode {
    fn paint(&self, ctx: &mut RenderCtx) {
        let Some(stroke) = &self.stroke else {
            return;
        };
        let width = self.device_width();
        if self.path.is_empty() || width <= 0.0 {
            return;
        }
        ctx.push(DrawCommand::StrokePath {
            path: self.path.as_bez_path().clone(),
            transform: self.transform,
            stroke: stroke.clone(),
            width,
        });
    }

    fn name(&self) -> &'static str {
        "border"
    }
}

#[cfg(test)]
mod tests {
    use quire_core::{Color, Rect};

    use super::*;

    fn square() -> VectorPath {
        VectorPath::rect(Rect::from_xywh(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn device_width_scales_non_cosmetic_strokes() {
        let mut node = BorderNode::new();
        node.update(
            &square(),
            Affine::scale_non_uniform(0.5, 2.0),
            &StrokeStyle::new(4.0, Color::BLACK),
        );
        assert!((node.device_width() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn device_width_keeps_cosmetic_strokes() {
        let mut node = BorderNode::new();
        node.update(
            &square(),
            Affine::scale_non_uniform(7.0, 3.0),
            &StrokeStyle::new(2.0, Color::BLACK).cosmetic(true),
        );
        assert!((node.device_width() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn records_stroke_command() {
        let mut node = BorderNode::new();
        let stroke = StrokeStyle::new(1.0, Color::RED);
        assert!(node.update(&square(), Affine::IDENTITY, &stroke));
        assert!(!node.update(&square(), Affine::IDENTITY, &stroke));

        let mut ctx = RenderCtx::new();
        node.paint(&mut ctx);
        let scene = ctx.finish();
        assert!(matches!(
            scene.commands(),
            [DrawCommand::StrokePath { width, .. }] if (*width - 1.0).abs() < f32::EPSILON
        ));
    }
}
