//! Vector path description.
//!
//! [`VectorPath`] uses Quire's geometry types at its surface while wrapping
//! kurbo's `BezPath` for the curve data consumed by render nodes.

use kurbo::{BezPath, PathEl, Shape};

use crate::geometry::{Point, Rect, Size};

/// Tolerance used when flattening arcs and ellipses into Bézier segments.
const CURVE_TOLERANCE: f64 = 0.1;

/// A sequence of sub-paths made of lines and Bézier curves.
///
/// Paths are plain values: shape items store their own copy and compare
/// paths for equality to decide whether anything changed.
///
/// # Example
///
/// ```
/// use quire_core::{Point, VectorPath};
///
/// let mut path = VectorPath::new();
/// path.move_to(Point::new(0.0, 0.0));
/// path.line_to(Point::new(10.0, 0.0));
/// path.line_to(Point::new(10.0, 10.0));
/// path.close();
///
/// assert_eq!(path.bounding_rect().width(), 10.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorPath {
    inner: BezPath,
}

impl VectorPath {
    /// Creates a new empty path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: BezPath::new(),
        }
    }

    /// Wraps an existing kurbo path.
    #[must_use]
    pub const fn from_bez_path(inner: BezPath) -> Self {
        Self { inner }
    }

    /// Parses SVG path data (the `d` attribute).
    ///
    /// # Errors
    ///
    /// Returns the kurbo parse error when the path data is malformed.
    pub fn from_svg(data: &str) -> Result<Self, kurbo::SvgParseError> {
        BezPath::from_svg(data).map(Self::from_bez_path)
    }

    /// Creates a closed rectangular path.
    #[must_use]
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.add_rect(rect);
        path
    }

    /// Creates a closed ellipse inscribed in `bounds`.
    #[must_use]
    pub fn ellipse(bounds: Rect) -> Self {
        let ellipse = kurbo::Ellipse::from_rect(bounds.to_kurbo());
        Self::from_bez_path(ellipse.to_path(CURVE_TOLERANCE))
    }

    /// Starts a new sub-path at `point`.
    pub fn move_to(&mut self, point: Point) {
        self.inner.move_to(point.to_kurbo());
    }

    /// Draws a straight line from the current point to `point`.
    pub fn line_to(&mut self, point: Point) {
        self.inner.line_to(point.to_kurbo());
    }

    /// Draws a quadratic Bézier curve to `end` using `control`.
    pub fn quad_to(&mut self, control: Point, end: Point) {
        self.inner.quad_to(control.to_kurbo(), end.to_kurbo());
    }

    /// Draws a cubic Bézier curve to `end`.
    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.inner
            .curve_to(control1.to_kurbo(), control2.to_kurbo(), end.to_kurbo());
    }

    /// Appends an elliptical arc around `center`, sweeping `sweep` radians
    /// from `start_angle`.
    ///
    /// The arc is joined to the current point with a straight line, or
    /// starts a new sub-path when the path is empty.
    pub fn arc(&mut self, center: Point, radii: Size, start_angle: f32, sweep: f32) {
        let (rx, ry) = (f64::from(radii.width), f64::from(radii.height));
        let (sin, cos) = f64::from(start_angle).sin_cos();
        let start = kurbo::Point::new(
            rx.mul_add(cos, f64::from(center.x)),
            ry.mul_add(sin, f64::from(center.y)),
        );
        if self.is_empty() {
            self.inner.move_to(start);
        } else {
            self.inner.line_to(start);
        }

        let arc = kurbo::Arc::new(
            center.to_kurbo(),
            (rx, ry),
            f64::from(start_angle),
            f64::from(sweep),
            0.0,
        );
        for el in arc.append_iter(CURVE_TOLERANCE) {
            self.inner.push(el);
        }
    }

    /// Adds a closed rectangular sub-path.
    pub fn add_rect(&mut self, rect: Rect) {
        self.inner.move_to((f64::from(rect.x()), f64::from(rect.y())));
        self.inner.line_to((f64::from(rect.max_x()), f64::from(rect.y())));
        self.inner
            .line_to((f64::from(rect.max_x()), f64::from(rect.max_y())));
        self.inner.line_to((f64::from(rect.x()), f64::from(rect.max_y())));
        self.inner.close_path();
    }

    /// Closes the current sub-path with a straight line back to its start.
    pub fn close(&mut self) {
        self.inner.close_path();
    }

    /// Returns `true` if the path has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.elements().is_empty()
    }

    /// Returns the number of path elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.elements().len()
    }

    /// Returns the raw path elements.
    #[must_use]
    pub fn elements(&self) -> &[PathEl] {
        self.inner.elements()
    }

    /// Returns the wrapped kurbo path.
    #[must_use]
    pub const fn as_bez_path(&self) -> &BezPath {
        &self.inner
    }

    /// Returns the rectangle spanned by every point of the path, control
    /// points included, in path-local coordinates.
    ///
    /// This is never smaller than the tight bounds, is cheap to compute and
    /// does not move when a curve bulges differently. An empty path, or one
    /// that degenerates to a line or point, yields an empty rectangle.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        let mut points = self.inner.elements().iter().flat_map(|el| {
            let (slice, len): ([kurbo::Point; 3], usize) = match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => ([p, p, p], 1),
                PathEl::QuadTo(c, p) => ([c, p, p], 2),
                PathEl::CurveTo(c1, c2, p) => ([c1, c2, p], 3),
                PathEl::ClosePath => ([kurbo::Point::ZERO; 3], 0),
            };
            slice.into_iter().take(len)
        });

        let Some(first) = points.next() else {
            return Rect::default();
        };
        let bounds = points.fold(kurbo::Rect::from_points(first, first), |acc, p| {
            acc.union_pt(p)
        });
        Rect::from_kurbo(bounds)
    }

    /// Returns the tight bounds of the rendered curves.
    #[must_use]
    pub fn tight_bounds(&self) -> Rect {
        if self.is_empty() {
            return Rect::default();
        }
        Rect::from_kurbo(self.inner.bounding_box())
    }
}

impl From<BezPath> for VectorPath {
    fn from(inner: BezPath) -> Self {
        Self::from_bez_path(inner)
    }
}
