//! Rectangle-to-rectangle affine maps.

use kurbo::Affine;
use quire_core::Rect;

/// Returns the map carrying `from` onto `to` without rotation or shear.
///
/// The result translates `from`'s origin to zero, scales each axis by the
/// ratio of the sizes and translates to `to`'s origin, so corners map onto
/// corners and centers onto centers.
///
/// `from` must not be empty. Debug builds assert this; release builds fall
/// back to the pure translation between the two origins.
#[must_use]
pub fn transform_for_rects(from: Rect, to: Rect) -> Affine {
    debug_assert!(!from.is_empty(), "source rectangle must not be empty: {from:?}");
    try_transform_for_rects(from, to).unwrap_or_else(|| {
        Affine::translate((
            f64::from(to.x() - from.x()),
            f64::from(to.y() - from.y()),
        ))
    })
}

/// Like [`transform_for_rects`], returning `None` when `from` is empty.
#[must_use]
pub fn try_transform_for_rects(from: Rect, to: Rect) -> Option<Affine> {
    if from.is_empty() {
        return None;
    }
    let sx = f64::from(to.width()) / f64::from(from.width());
    let sy = f64::from(to.height()) / f64::from(from.height());

    Some(
        Affine::translate((f64::from(to.x()), f64::from(to.y())))
            * Affine::scale_non_uniform(sx, sy)
            * Affine::translate((-f64::from(from.x()), -f64::from(from.y()))),
    )
}
