//! # Quire
//!
//! Frame-stable vector shapes over a retained render tree.
//!
//! A [`ShapeItem`] describes a filled and stroked [`VectorPath`] placed in a
//! content rectangle. Once per frame, [`ShapeItem::update_node`] maps the
//! path onto that rectangle and keeps exactly the render nodes the shape
//! needs: a fill node when the fill is visible and a border node when the
//! outline is, reusing them across frames while the inputs stay the same.
//!
//! ```
//! use quire::{Color, Rect, ShapeItem, StrokeStyle, VectorPath};
//! use quire::render::{GroupNode, RenderTree};
//!
//! let mut tree = RenderTree::new();
//! let parent = tree.replace_root(Box::new(GroupNode));
//!
//! let mut item = ShapeItem::new();
//! item.set_path(VectorPath::ellipse(Rect::from_xywh(0.0, 0.0, 1.0, 1.0)));
//! item.set_geometry(Rect::from_xywh(0.0, 0.0, 64.0, 32.0));
//! item.set_fill(Color::ORANGE, Color::RED);
//! item.set_stroke(StrokeStyle::new(2.0, Color::BLACK).cosmetic(true));
//! item.update_node(&mut tree, parent);
//!
//! assert_eq!(tree.children(parent).len(), 2);
//! ```
//!
//! The workspace crates are re-exported: geometry and styles from
//! `quire-core`, the render tree and backends as [`render`].

pub mod config;
pub mod error;
pub mod host;
pub mod item;
pub mod logging;
pub mod preset;
pub mod transform;
pub mod visibility;

pub use config::ShapeConfig;
pub use error::{Error, Result};
pub use host::{ItemId, ShapeHost};
pub use item::ShapeItem;
pub use preset::{GradientStop, PresetTable};
pub use transform::{transform_for_rects, try_transform_for_rects};
pub use visibility::{effective_stroke_width, fill_visible, stroke_visible};

pub use quire_core::{
    Color, DashPattern, EdgeInsets, FillPaint, FillStyle, HexColorError, LineCap, LineJoin,
    PenStyle, Point, Rect, Size, StrokeStyle, VectorPath,
};
pub use quire_render as render;
