//! Core value types for Quire.
//!
//! This crate holds the plain data shared between shape items and render
//! nodes: logical-pixel geometry, [`VectorPath`], and the stroke / fill
//! styles that decide what gets painted.

pub mod geometry;
pub mod path;
pub mod style;

pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use path::VectorPath;
pub use style::{
    ColorStop, DashPattern, FillPaint, FillStyle, LineCap, LineJoin, LinearGradient, PenStyle,
    StrokeStyle,
};

pub use kurbo;
pub use quire_color::{Color, HexColorError};
