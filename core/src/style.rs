//! Stroke and fill styles.
//!
//! Styles are plain values compared by equality. [`StrokeStyle`] and
//! [`FillStyle`] describe what a shape item *wants*; [`FillPaint`] is the
//! resolved paint handed to a fill primitive once the content rectangle is
//! known.

use quire_color::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

// ============================================================================
// Line Styling
// ============================================================================

/// Line cap style (end of strokes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum LineCap {
    /// Flat edge at end of line (default).
    #[default]
    Butt,
    /// Rounded end.
    Round,
    /// Square end extending beyond the endpoint.
    Square,
}

impl LineCap {
    /// Converts into the kurbo cap style.
    #[must_use]
    pub const fn to_kurbo(self) -> kurbo::Cap {
        match self {
            Self::Butt => kurbo::Cap::Butt,
            Self::Round => kurbo::Cap::Round,
            Self::Square => kurbo::Cap::Square,
        }
    }
}

/// Line join style (corners).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum LineJoin {
    /// Miter join (sharp corner, default).
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Beveled corner (flattened).
    Bevel,
}

impl LineJoin {
    /// Converts into the kurbo join style.
    #[must_use]
    pub const fn to_kurbo(self) -> kurbo::Join {
        match self {
            Self::Miter => kurbo::Join::Miter,
            Self::Round => kurbo::Join::Round,
            Self::Bevel => kurbo::Join::Bevel,
        }
    }
}

/// Dash intervals, alternating "on" and "off" lengths in stroke widths.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DashPattern {
    /// Alternating dash and gap lengths.
    pub intervals: Vec<f32>,
    /// Distance into the pattern at which the stroke starts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: f32,
}

impl DashPattern {
    /// Creates a dash pattern starting at offset zero.
    #[must_use]
    pub const fn new(intervals: Vec<f32>) -> Self {
        Self {
            intervals,
            offset: 0.0,
        }
    }
}

/// How the outline is painted.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum PenStyle {
    /// No outline at all.
    None,
    /// A continuous outline.
    #[default]
    Solid,
    /// A dashed outline.
    Dashed(DashPattern),
}

// ============================================================================
// Stroke
// ============================================================================

/// Describes how a shape's outline is drawn.
///
/// A *cosmetic* stroke keeps its width in device pixels no matter how the
/// path is scaled; a non-cosmetic stroke scales along with the geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct StrokeStyle {
    /// Stroke width; negative values are treated as zero.
    pub width: f32,
    /// Stroke color.
    pub color: Color,
    /// Cap style for open sub-path ends.
    pub cap: LineCap,
    /// Join style for corners.
    pub join: LineJoin,
    /// Miter limit, in multiples of the stroke width.
    pub miter_limit: f32,
    /// Whether the width is expressed in device pixels.
    pub cosmetic: bool,
    /// Solid, dashed or no outline.
    pub pen: PenStyle,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
            cap: LineCap::default(),
            join: LineJoin::default(),
            miter_limit: 4.0,
            cosmetic: false,
            pen: PenStyle::Solid,
        }
    }
}

impl StrokeStyle {
    /// Creates a solid, non-cosmetic stroke.
    #[must_use]
    pub fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            ..Self::default()
        }
    }

    /// Creates a stroke that draws nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            pen: PenStyle::None,
            ..Self::default()
        }
    }

    /// Sets whether the width is in device pixels.
    #[must_use]
    pub const fn cosmetic(mut self, cosmetic: bool) -> Self {
        self.cosmetic = cosmetic;
        self
    }

    /// Sets the cap style.
    #[must_use]
    pub const fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Sets the join style.
    #[must_use]
    pub const fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Dashes the stroke with the given pattern.
    #[must_use]
    pub fn dashed(mut self, pattern: DashPattern) -> Self {
        self.pen = PenStyle::Dashed(pattern);
        self
    }

    /// Returns the dash pattern, if the stroke is dashed.
    #[must_use]
    pub const fn dash(&self) -> Option<&DashPattern> {
        match &self.pen {
            PenStyle::Dashed(pattern) => Some(pattern),
            PenStyle::None | PenStyle::Solid => None,
        }
    }

    /// Returns the stroke width after applying a geometry scale.
    ///
    /// Cosmetic strokes ignore the scale. Otherwise the width follows the
    /// smaller of the two axis scales, so non-uniform scaling never makes
    /// the outline thicker than the tighter axis allows.
    #[must_use]
    pub fn scaled_width(&self, scale_x: f32, scale_y: f32) -> f32 {
        let width = self.width.max(0.0);
        if self.cosmetic {
            width
        } else {
            width * scale_x.abs().min(scale_y.abs())
        }
    }
}

// ============================================================================
// Fill
// ============================================================================

/// What a shape item's interior should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum FillStyle {
    /// A single color.
    Solid(Color),
    /// A diagonal two-color gradient running from the content rectangle's
    /// top-left corner to its bottom-right corner.
    LinearGradient {
        /// Color at the top-left corner.
        start: Color,
        /// Color at the bottom-right corner.
        end: Color,
    },
}

impl Default for FillStyle {
    fn default() -> Self {
        Self::Solid(Color::TRANSPARENT)
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl FillStyle {
    /// Creates a fill from two colors, collapsing to [`FillStyle::Solid`]
    /// when they are equal.
    #[must_use]
    pub fn from_colors(start: Color, end: Color) -> Self {
        if start == end {
            Self::Solid(start)
        } else {
            Self::LinearGradient { start, end }
        }
    }

    /// Returns the start and end colors; both are the same for solid fills.
    #[must_use]
    pub const fn colors(&self) -> (Color, Color) {
        match *self {
            Self::Solid(color) => (color, color),
            Self::LinearGradient { start, end } => (start, end),
        }
    }

    /// Resolves the style into the paint for a fill primitive covering
    /// `content`. Gradients are anchored at the rectangle's corners.
    #[must_use]
    pub fn paint_for(&self, content: Rect) -> FillPaint {
        match *self {
            Self::Solid(color) => FillPaint::Solid(color),
            Self::LinearGradient { start, end } if start == end => FillPaint::Solid(start),
            Self::LinearGradient { start, end } => FillPaint::LinearGradient(
                LinearGradient::two_stop(content.top_left(), content.bottom_right(), start, end),
            ),
        }
    }
}

// ============================================================================
// Paint
// ============================================================================

/// A color at a position along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorStop {
    /// Position along the gradient (0.0 to 1.0).
    pub offset: f32,
    /// Color at this position.
    pub color: Color,
}

impl ColorStop {
    /// Creates a new color stop.
    #[must_use]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A two-stop gradient along the line from `start` to `end`, in device
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    /// Point where the gradient reaches its first stop.
    pub start: Point,
    /// Point where the gradient reaches its last stop.
    pub end: Point,
    /// The stops at offsets 0 and 1.
    pub stops: [ColorStop; 2],
}

impl LinearGradient {
    /// Creates a gradient from `from` at `start` to `to` at `end`.
    #[must_use]
    pub const fn two_stop(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self {
            start,
            end,
            stops: [ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
        }
    }
}

/// Paint handed to a fill primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillPaint {
    /// Uniform color.
    Solid(Color),
    /// Two-stop linear gradient.
    LinearGradient(LinearGradient),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_colors_collapse_to_solid() {
        let fill = FillStyle::from_colors(Color::RED, Color::RED);
        assert_eq!(fill, FillStyle::Solid(Color::RED));

        let gradient = FillStyle::from_colors(Color::RED, Color::BLUE);
        assert_eq!(gradient.colors(), (Color::RED, Color::BLUE));
    }

    #[test]
    fn gradient_paint_is_anchored_at_content_corners() {
        let content = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
        let paint = FillStyle::from_colors(Color::RED, Color::BLUE).paint_for(content);

        let FillPaint::LinearGradient(gradient) = paint else {
            panic!("expected a gradient, got {paint:?}");
        };
        assert_eq!(gradient.start, Point::new(10.0, 20.0));
        assert_eq!(gradient.end, Point::new(110.0, 70.0));
        assert_eq!(gradient.stops[0], ColorStop::new(0.0, Color::RED));
        assert_eq!(gradient.stops[1], ColorStop::new(1.0, Color::BLUE));
    }

    #[test]
    fn hand_built_uniform_gradient_paints_solid() {
        let fill = FillStyle::LinearGradient {
            start: Color::GREEN,
            end: Color::GREEN,
        };
        assert_eq!(
            fill.paint_for(Rect::from_xywh(0.0, 0.0, 1.0, 1.0)),
            FillPaint::Solid(Color::GREEN)
        );
    }

    #[test]
    fn cosmetic_width_ignores_scale() {
        let stroke = StrokeStyle::new(2.0, Color::BLACK).cosmetic(true);
        assert_eq!(stroke.scaled_width(0.25, 8.0), 2.0);
    }

    #[test]
    fn scaled_width_uses_tighter_axis() {
        let stroke = StrokeStyle::new(4.0, Color::BLACK);
        assert_eq!(stroke.scaled_width(0.5, 2.0), 2.0);
        assert_eq!(stroke.scaled_width(-3.0, 1.5), 6.0);
        assert_eq!(StrokeStyle::new(-1.0, Color::BLACK).scaled_width(1.0, 1.0), 0.0);
    }

    #[test]
    fn dash_accessor_follows_pen() {
        let pattern = DashPattern::new(vec![3.0, 1.0]);
        let stroke = StrokeStyle::default().dashed(pattern.clone());
        assert_eq!(stroke.dash(), Some(&pattern));
        assert_eq!(StrokeStyle::default().dash(), None);
        assert_eq!(StrokeStyle::none().pen, PenStyle::None);
    }
}
