//! Geometry types shared by shape items and render nodes.
//!
//! All values are **logical pixels**. Rectangles are axis-aligned and
//! described by their top-left origin and size; a rectangle whose width or
//! height is not strictly positive is *empty*, and empty rectangles never
//! produce render primitives.

use kurbo::Affine;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from its left, top, width and height.
    #[must_use]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Point {
        self.origin
    }

    /// Returns the bottom-right corner.
    #[must_use]
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns `true` if the rectangle covers no area.
    ///
    /// A rectangle is empty when its width or height is zero, negative or NaN.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.size.width > 0.0 && self.size.height > 0.0)
    }

    /// Inset the rectangle by the given edge insets, clamping the size at zero.
    #[must_use]
    pub fn inset(&self, insets: EdgeInsets) -> Self {
        Self::new(
            Point::new(self.origin.x + insets.leading, self.origin.y + insets.top),
            Size::new(
                (self.size.width - insets.leading - insets.trailing).max(0.0),
                (self.size.height - insets.top - insets.bottom).max(0.0),
            ),
        )
    }

    /// Converts into a kurbo rectangle.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x()),
            f64::from(self.y()),
            f64::from(self.max_x()),
            f64::from(self.max_y()),
        )
    }

    /// Creates a rectangle from a kurbo rectangle, normalizing its corners.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_kurbo(rect: kurbo::Rect) -> Self {
        let rect = rect.abs();
        Self::from_xywh(
            rect.x0 as f32,
            rect.y0 as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    /// Returns the axis-aligned bounds of this rectangle after `transform`.
    #[must_use]
    pub fn transformed_bounds(&self, transform: Affine) -> Self {
        Self::from_kurbo(transform.transform_rect_bbox(self.to_kurbo()))
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

// ============================================================================
// Point
// ============================================================================

/// Absolute coordinate relative to a parent's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Converts into a kurbo point.
    #[must_use]
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Creates a point from a kurbo point.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_kurbo(point: kurbo::Point) -> Self {
        Self::new(point.x as f32, point.y as f32)
    }
}

// ============================================================================
// EdgeInsets
// ============================================================================

/// Distances subtracted from each edge of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EdgeInsets {
    /// Inset of the top edge.
    pub top: f32,
    /// Inset of the bottom edge.
    pub bottom: f32,
    /// Inset of the leading (left) edge.
    pub leading: f32,
    /// Inset of the trailing (right) edge.
    pub trailing: f32,
}

impl EdgeInsets {
    /// Creates an [`EdgeInsets`] value with explicit edges.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

impl From<f32> for EdgeInsets {
    fn from(value: f32) -> Self {
        Self::all(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.x(), 10.0);
        assert_eq!(rect.y(), 20.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
        assert_eq!(rect.bottom_right(), Point::new(110.0, 70.0));
    }

    #[test]
    fn test_rect_emptiness() {
        assert!(Rect::from_xywh(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Rect::from_xywh(0.0, 0.0, 10.0, -1.0).is_empty());
        assert!(Rect::from_xywh(0.0, 0.0, f32::NAN, 1.0).is_empty());
        assert!(Rect::default().is_empty());
        assert!(!Rect::from_xywh(-5.0, -5.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let inset = rect.inset(EdgeInsets::new(10.0, 10.0, 20.0, 20.0));

        assert_eq!(inset, Rect::from_xywh(20.0, 10.0, 60.0, 80.0));

        let collapsed = rect.inset(EdgeInsets::all(60.0));
        assert_eq!(collapsed.width(), 0.0);
        assert!(collapsed.is_empty());
    }

    #[test]
    fn test_kurbo_round_trip_normalizes() {
        let flipped = kurbo::Rect::new(10.0, 10.0, 0.0, 5.0);
        assert_eq!(Rect::from_kurbo(flipped), Rect::from_xywh(0.0, 5.0, 10.0, 5.0));

        let scaled = Rect::from_xywh(1.0, 2.0, 3.0, 4.0).transformed_bounds(Affine::scale(2.0));
        assert_eq!(scaled, Rect::from_xywh(2.0, 4.0, 6.0, 8.0));
    }
}
