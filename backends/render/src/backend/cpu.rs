//! CPU renderer built on top of `tiny-skia`.

use kurbo::{Affine, BezPath, PathEl};
use quire_core::{Color, FillPaint, LineCap, LineJoin, Rect, StrokeStyle};
use tiny_skia::{
    FillRule, FilterQuality, GradientStop, Paint, Path, PathBuilder, Pixmap, PixmapPaint,
    PixmapRef, SpreadMode, Stroke, StrokeDash, Transform,
};
use tracing::{trace, warn};

use crate::{
    backend::{FrameResult, RenderBackend},
    nodes::Mirror,
    scene::{DrawCommand, Scene},
    texture::{TextureAtlas, TextureId},
    tree::{DirtyReason, RenderTree},
};

/// CPU surface that renders into a `tiny-skia` pixmap.
pub struct TinySkiaBackend {
    pixmap: Pixmap,
    clear_color: Color,
}

impl core::fmt::Debug for TinySkiaBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TinySkiaBackend")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("clear_color", &self.clear_color)
            .finish()
    }
}

impl TinySkiaBackend {
    /// Creates a backend rendering into a pixmap of the provided size.
    ///
    /// Returns `None` if either dimension is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let pixmap = Pixmap::new(width, height)?;
        Some(Self {
            pixmap,
            clear_color: Color::TRANSPARENT,
        })
    }

    /// Replaces the surface with a blank one of the new size and schedules
    /// `tree` for a full repaint on the next frame.
    ///
    /// Returns `false`, keeping the current surface, if either dimension is
    /// zero.
    pub fn resize(&mut self, tree: &mut RenderTree, width: u32, height: u32) -> bool {
        let Some(pixmap) = Pixmap::new(width, height) else {
            return false;
        };
        self.pixmap = pixmap;
        if let Some(root) = tree.root() {
            tree.mark_dirty(root, DirtyReason::Paint);
        }
        trace!(width, height, "resized surface");
        true
    }

    /// Returns the pixmap width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Returns the pixmap height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns a reference to the backing pixmap for presenting or copying.
    #[must_use]
    pub const fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Sets the color used to clear the pixmap each frame.
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    fn clear(&mut self) {
        self.pixmap.fill(to_skia_color(self.clear_color));
    }
}

impl RenderBackend for TinySkiaBackend {
    fn render(&mut self, tree: &mut RenderTree, textures: &TextureAtlas) -> FrameResult {
        let dirty = tree.drain_dirty().count();
        if dirty == 0 {
            return FrameResult::Idle;
        }
        trace!(dirty, "rendering frame");

        self.clear();
        if tree.root().is_none() {
            return FrameResult::Idle;
        }

        let scene = tree.paint();
        self.rasterize(&scene, textures);
        FrameResult::Presented
    }
}

impl TinySkiaBackend {
    fn rasterize(&mut self, scene: &Scene, textures: &TextureAtlas) {
        for command in scene.commands() {
            match command {
                DrawCommand::FillPath {
                    path,
                    transform,
                    paint,
                } => self.fill_path(path, *transform, paint),
                DrawCommand::StrokePath {
                    path,
                    transform,
                    stroke,
                    width,
                } => self.stroke_path(path, *transform, stroke, *width),
                DrawCommand::Texture {
                    texture,
                    rect,
                    mirrored,
                } => self.draw_texture(textures, *texture, *rect, *mirrored),
            }
        }
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, fill: &FillPaint) {
        let Some(path) = device_path(path, transform) else {
            return;
        };

        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };
        match fill {
            FillPaint::Solid(color) => {
                paint.set_color(to_skia_color(*color));
            }
            FillPaint::LinearGradient(gradient) => {
                let stops = gradient
                    .stops
                    .iter()
                    .map(|stop| GradientStop::new(stop.offset, to_skia_color(stop.color)))
                    .collect();
                let shader = tiny_skia::LinearGradient::new(
                    tiny_skia::Point::from_xy(gradient.start.x, gradient.start.y),
                    tiny_skia::Point::from_xy(gradient.end.x, gradient.end.y),
                    stops,
                    SpreadMode::Pad,
                    Transform::identity(),
                );
                match shader {
                    Some(shader) => paint.shader = shader,
                    None => {
                        // Coincident endpoints: use the leading color.
                        warn!("degenerate gradient; filling with its first stop");
                        paint.set_color(to_skia_color(gradient.stops[0].color));
                    }
                }
            }
        }

        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_path(&mut self, path: &BezPath, transform: Affine, style: &StrokeStyle, width: f32) {
        let Some(path) = device_path(path, transform) else {
            return;
        };

        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };
        paint.set_color(to_skia_color(style.color));

        let dash = style.dash().and_then(|pattern| {
            let intervals = pattern.intervals.iter().map(|len| len * width).collect();
            let dash = StrokeDash::new(intervals, pattern.offset * width);
            if dash.is_none() {
                warn!(?pattern, "invalid dash pattern; stroking solid");
            }
            dash
        });

        let stroke = Stroke {
            width,
            miter_limit: style.miter_limit,
            line_cap: match style.cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            line_join: match style.join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Round => tiny_skia::LineJoin::Round,
                LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
            },
            dash,
        };

        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_texture(&mut self, atlas: &TextureAtlas, id: TextureId, rect: Rect, mirror: Mirror) {
        let Some(texture) = atlas.get(id) else {
            warn!(?id, "texture vanished before drawing");
            return;
        };
        let Some(source) = PixmapRef::from_bytes(texture.pixels(), texture.width(), texture.height())
        else {
            return;
        };

        let mut sx = rect.width() / texture.width() as f32;
        let mut sy = rect.height() / texture.height() as f32;
        let mut tx = rect.x();
        let mut ty = rect.y();
        if mirror.horizontal {
            sx = -sx;
            tx = rect.max_x();
        }
        if mirror.vertical {
            sy = -sy;
            ty = rect.max_y();
        }

        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            source,
            &paint,
            Transform::from_row(sx, 0.0, 0.0, sy, tx, ty),
            None,
        );
    }
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}

/// Builds a tiny-skia path with every point already mapped into device
/// space, so that strokes are not distorted by non-uniform scales.
#[allow(clippy::cast_possible_truncation)]
fn device_path(path: &BezPath, transform: Affine) -> Option<Path> {
    let map = |p: kurbo::Point| {
        let p = transform * p;
        (p.x as f32, p.y as f32)
    };

    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                let (x, y) = map(p);
                builder.move_to(x, y);
            }
            PathEl::LineTo(p) => {
                let (x, y) = map(p);
                builder.line_to(x, y);
            }
            PathEl::QuadTo(c, p) => {
                let (cx, cy) = map(c);
                let (x, y) = map(p);
                builder.quad_to(cx, cy, x, y);
            }
            PathEl::CurveTo(c1, c2, p) => {
                let (c1x, c1y) = map(c1);
                let (c2x, c2y) = map(c2);
                let (x, y) = map(p);
                builder.cubic_to(c1x, c1y, c2x, c2y, x, y);
            }
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use quire_core::VectorPath;

    use super::*;
    use crate::nodes::{BorderNode, FillNode, GroupNode, TextureNode};

    fn tree_with_fill(paint: FillPaint) -> RenderTree {
        let mut tree = RenderTree::new();
        let root = tree.replace_root(Box::new(GroupNode));
        let mut fill = FillNode::new();
        fill.update(
            &VectorPath::rect(Rect::from_xywh(0.0, 0.0, 10.0, 10.0)),
            Affine::translate((5.0, 5.0)),
            paint,
        );
        tree.append_child(root, Box::new(fill));
        tree
    }

    #[test]
    fn fills_inside_and_leaves_outside_clear() {
        let mut tree = tree_with_fill(FillPaint::Solid(Color::rgb(255, 0, 0)));
        let mut backend = TinySkiaBackend::new(20, 20).unwrap();

        assert_eq!(
            backend.render(&mut tree, &TextureAtlas::new()),
            FrameResult::Presented
        );

        let inside = backend.pixmap().pixel(10, 10).unwrap();
        assert_eq!((inside.red(), inside.alpha()), (255, 255));
        let outside = backend.pixmap().pixel(1, 1).unwrap();
        assert_eq!(outside.alpha(), 0);
    }

    #[test]
    fn second_frame_without_changes_is_idle() {
        let mut tree = tree_with_fill(FillPaint::Solid(Color::RED));
        let mut backend = TinySkiaBackend::new(20, 20).unwrap();
        let atlas = TextureAtlas::new();

        assert_eq!(backend.render(&mut tree, &atlas), FrameResult::Presented);
        assert_eq!(backend.render(&mut tree, &atlas), FrameResult::Idle);
    }

    #[test]
    fn resize_repaints_on_next_frame() {
        let mut tree = tree_with_fill(FillPaint::Solid(Color::rgb(255, 0, 0)));
        let mut backend = TinySkiaBackend::new(20, 20).unwrap();
        let atlas = TextureAtlas::new();
        backend.render(&mut tree, &atlas);

        assert!(backend.resize(&mut tree, 30, 30));
        assert_eq!(backend.render(&mut tree, &atlas), FrameResult::Presented);
        assert_eq!((backend.width(), backend.height()), (30, 30));
        assert_eq!(backend.pixmap().pixel(10, 10).unwrap().alpha(), 255);

        assert!(!backend.resize(&mut tree, 0, 30));
        assert_eq!(backend.width(), 30);
    }

    #[test]
    fn gradient_runs_from_first_to_last_stop() {
        let gradient = quire_core::LinearGradient::two_stop(
            quire_core::Point::new(5.0, 5.0),
            quire_core::Point::new(15.0, 15.0),
            Color::RED,
            Color::BLUE,
        );
        let mut tree = tree_with_fill(FillPaint::LinearGradient(gradient));
        let mut backend = TinySkiaBackend::new(20, 20).unwrap();
        backend.render(&mut tree, &TextureAtlas::new());

        let near_start = backend.pixmap().pixel(5, 5).unwrap();
        let near_end = backend.pixmap().pixel(14, 14).unwrap();
        assert!(near_start.red() > near_start.blue());
        assert!(near_end.blue() > near_end.red());
    }

    #[test]
    fn stroke_stays_on_the_outline() {
        let mut tree = RenderTree::new();
        let root = tree.replace_root(Box::new(GroupNode));
        let mut border = BorderNode::new();
        border.update(
            &VectorPath::rect(Rect::from_xywh(2.0, 2.0, 16.0, 16.0)),
            Affine::IDENTITY,
            &StrokeStyle::new(2.0, Color::rgb(0, 0, 255)),
        );
        tree.append_child(root, Box::new(border));

        let mut backend = TinySkiaBackend::new(20, 20).unwrap();
        backend.render(&mut tree, &TextureAtlas::new());

        let edge = backend.pixmap().pixel(10, 2).unwrap();
        assert_eq!((edge.blue(), edge.alpha()), (255, 255));
        assert_eq!(backend.pixmap().pixel(10, 10).unwrap().alpha(), 0);
    }

    #[test]
    fn mirrored_texture_flips_pixel_order() {
        let mut atlas = TextureAtlas::new();
        let id = atlas
            .insert_rgba8(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255])
            .unwrap();

        let mut tree = RenderTree::new();
        let root = tree.replace_root(Box::new(GroupNode));
        let mut node = TextureNode::new();
        node.set_texture(&atlas, Rect::from_xywh(0.0, 0.0, 2.0, 1.0), id, Mirror::HORIZONTAL);
        tree.append_child(root, Box::new(node));

        let mut backend = TinySkiaBackend::new(2, 1).unwrap();
        backend.render(&mut tree, &atlas);

        let left = backend.pixmap().pixel(0, 0).unwrap();
        let right = backend.pixmap().pixel(1, 0).unwrap();
        assert_eq!((left.red(), left.blue()), (0, 255));
        assert_eq!((right.red(), right.blue()), (255, 0));
    }
}
