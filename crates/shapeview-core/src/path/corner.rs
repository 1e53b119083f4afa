//! Rounded-rectangle outline.

use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::Rect;

use super::PathBuilder;

/// Clamp a corner radius so the quarter arcs of opposite corners never
/// self-intersect: the radius may not exceed half the shorter dimension.
pub(super) fn clamp_radius(radius: f64, bounds: Rect) -> f64 {
    radius.clamp(0.0, bounds.width().min(bounds.height()) / 2.0)
}

/// Append a rounded rectangle covering `bounds`, wound clockwise starting
/// on the top edge.
pub(super) fn build(b: &mut PathBuilder, radius: f64, bounds: Rect) {
    let r = clamp_radius(radius, bounds);
    let (x0, y0, x1, y1) = (bounds.x0, bounds.y0, bounds.x1, bounds.y1);

    b.move_to((x0 + r, y0));
    b.line_to((x1 - r, y0));
    b.arc((x1 - r, y0 + r), r, -FRAC_PI_2, 0.0, true);
    b.line_to((x1, y1 - r));
    b.arc((x1 - r, y1 - r), r, 0.0, FRAC_PI_2, true);
    b.line_to((x0 + r, y1));
    b.arc((x0 + r, y1 - r), r, FRAC_PI_2, PI, true);
    b.line_to((x0, y0 + r));
    b.arc((x0 + r, y0 + r), r, PI, PI + FRAC_PI_2, true);
    b.close();
}
