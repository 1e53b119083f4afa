//! Star polygon outline.

use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Rect, Vec2};

use super::PathBuilder;

/// Inner vertex distance as a fraction of the outer radius.
pub const INNER_RADIUS_RATIO: f64 = 0.5;

/// Fewer outer points than this does not read as a star; lower vertex
/// counts clamp up.
pub const MIN_VERTICES: usize = 3;

/// Append a star with `vertices` outer points, centered in `bounds`.
///
/// Outer and inner vertices alternate at angular steps of `pi / vertices`,
/// starting with an outer vertex at the top. The outer radius is half the
/// shorter bound dimension.
pub(super) fn build(b: &mut PathBuilder, vertices: usize, bounds: Rect) {
    let n = vertices.max(MIN_VERTICES);
    let center = bounds.center();
    let outer = bounds.width().min(bounds.height()) / 2.0;
    let inner = outer * INNER_RADIUS_RATIO;
    let step = PI / n as f64;

    for i in 0..2 * n {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = -FRAC_PI_2 + i as f64 * step;
        let vertex = center + Vec2::new(angle.cos(), angle.sin()) * radius;
        if i == 0 {
            b.move_to(vertex);
        } else {
            b.line_to(vertex);
        }
    }
    b.close();
}
