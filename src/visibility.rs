//! Decides which primitives a shape needs and how wide its outline is.

use quire_core::{FillStyle, PenStyle, Rect, StrokeStyle};

/// Returns `true` if at least one fill color has a non-zero alpha.
#[must_use]
pub fn fill_visible(fill: &FillStyle) -> bool {
    let (start, end) = fill.colors();
    start.is_visible() || end.is_visible()
}

/// Returns `true` if the stroke draws a pen with a non-zero alpha.
#[must_use]
pub fn stroke_visible(stroke: &StrokeStyle) -> bool {
    !matches!(stroke.pen, PenStyle::None) && stroke.color.is_visible()
}

/// Width of the stroke once `path_bounds` is mapped onto `content`.
///
/// Cosmetic strokes keep their width. Otherwise the width follows the
/// smaller axis scale of the path-to-content mapping. An empty
/// `path_bounds` yields the unscaled width.
#[must_use]
pub fn effective_stroke_width(stroke: &StrokeStyle, content: Rect, path_bounds: Rect) -> f32 {
    if stroke.cosmetic || path_bounds.is_empty() {
        return stroke.width.max(0.0);
    }
    stroke.scaled_width(
        content.width() / path_bounds.width(),
        content.height() / path_bounds.height(),
    )
}
