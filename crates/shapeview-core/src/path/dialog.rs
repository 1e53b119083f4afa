//! Speech-bubble outline: a rounded-rectangle body with a triangular
//! arrow interrupting one edge.

use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use super::{PathBuilder, corner};

/// Keeps the notch interruption points strictly off the corner arcs.
const NOTCH_MARGIN: f64 = 1e-3;

/// Which edge carries the arrow.
///
/// `center` is the arrow base center measured along the edge from its
/// lower-coordinate corner (top corner for vertical edges, left corner
/// for horizontal ones), `width` is the base width along the edge, and
/// `height` is how far the apex sticks out of the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArrowPosition {
    Left { center: f64, width: f64, height: f64 },
    Right { center: f64, width: f64, height: f64 },
    Top { center: f64, width: f64, height: f64 },
    Bottom { center: f64, width: f64, height: f64 },
}

impl ArrowPosition {
    pub fn height(&self) -> f64 {
        match *self {
            ArrowPosition::Left { height, .. }
            | ArrowPosition::Right { height, .. }
            | ArrowPosition::Top { height, .. }
            | ArrowPosition::Bottom { height, .. } => height,
        }
    }

    pub fn width(&self) -> f64 {
        match *self {
            ArrowPosition::Left { width, .. }
            | ArrowPosition::Right { width, .. }
            | ArrowPosition::Top { width, .. }
            | ArrowPosition::Bottom { width, .. } => width,
        }
    }

    pub fn center(&self) -> f64 {
        match *self {
            ArrowPosition::Left { center, .. }
            | ArrowPosition::Right { center, .. }
            | ArrowPosition::Top { center, .. }
            | ArrowPosition::Bottom { center, .. } => center,
        }
    }
}

/// Arrow notch on one edge: the two interruption points and the apex,
/// already in absolute coordinates, ordered along the clockwise walk.
struct Notch {
    lead: Point,
    apex: Point,
    trail: Point,
}

/// Append a dialog bubble filling `bounds`: the body is a rounded
/// rectangle inset by the arrow height on the arrow's edge, and the
/// arrow apex points away from the body.
pub(super) fn build(b: &mut PathBuilder, radius: f64, arrow: ArrowPosition, bounds: Rect) {
    // The apex may reach at most halfway across the bounds, so a
    // degenerate arrow never consumes the whole body.
    let extent = match arrow {
        ArrowPosition::Left { .. } | ArrowPosition::Right { .. } => bounds.width(),
        ArrowPosition::Top { .. } | ArrowPosition::Bottom { .. } => bounds.height(),
    };
    let arrow_height = arrow.height().clamp(0.0, extent / 2.0);

    let body = match arrow {
        ArrowPosition::Left { .. } => {
            Rect::new(bounds.x0 + arrow_height, bounds.y0, bounds.x1, bounds.y1)
        }
        ArrowPosition::Right { .. } => {
            Rect::new(bounds.x0, bounds.y0, bounds.x1 - arrow_height, bounds.y1)
        }
        ArrowPosition::Top { .. } => {
            Rect::new(bounds.x0, bounds.y0 + arrow_height, bounds.x1, bounds.y1)
        }
        ArrowPosition::Bottom { .. } => {
            Rect::new(bounds.x0, bounds.y0, bounds.x1, bounds.y1 - arrow_height)
        }
    };
    let r = corner::clamp_radius(radius, body);

    // Clamp the base onto the straight span of the edge, then place the
    // three notch points for the one edge that carries the arrow.
    let mut top = None;
    let mut right = None;
    let mut bottom = None;
    let mut left = None;
    match arrow {
        ArrowPosition::Top { center, width, .. } => {
            top = notch_span(body.x0 + center, width, body.x0 + r, body.x1 - r).map(
                |(lead, apex, trail)| Notch {
                    lead: Point::new(lead, body.y0),
                    apex: Point::new(apex, body.y0 - arrow_height),
                    trail: Point::new(trail, body.y0),
                },
            );
        }
        ArrowPosition::Right { center, width, .. } => {
            right = notch_span(body.y0 + center, width, body.y0 + r, body.y1 - r).map(
                |(lead, apex, trail)| Notch {
                    lead: Point::new(body.x1, lead),
                    apex: Point::new(body.x1 + arrow_height, apex),
                    trail: Point::new(body.x1, trail),
                },
            );
        }
        ArrowPosition::Bottom { center, width, .. } => {
            // The bottom edge is walked right-to-left.
            bottom = notch_span(body.x0 + center, width, body.x0 + r, body.x1 - r).map(
                |(lead, apex, trail)| Notch {
                    lead: Point::new(trail, body.y1),
                    apex: Point::new(apex, body.y1 + arrow_height),
                    trail: Point::new(lead, body.y1),
                },
            );
        }
        ArrowPosition::Left { center, width, .. } => {
            // The left edge is walked bottom-to-top.
            left = notch_span(body.y0 + center, width, body.y0 + r, body.y1 - r).map(
                |(lead, apex, trail)| Notch {
                    lead: Point::new(body.x0, trail),
                    apex: Point::new(body.x0 - arrow_height, apex),
                    trail: Point::new(body.x0, lead),
                },
            );
        }
    }

    b.move_to((body.x0 + r, body.y0));
    if let Some(n) = &top {
        b.line_to(n.lead).line_to(n.apex).line_to(n.trail);
    }
    b.line_to((body.x1 - r, body.y0));
    b.arc((body.x1 - r, body.y0 + r), r, -FRAC_PI_2, 0.0, true);
    if let Some(n) = &right {
        b.line_to(n.lead).line_to(n.apex).line_to(n.trail);
    }
    b.line_to((body.x1, body.y1 - r));
    b.arc((body.x1 - r, body.y1 - r), r, 0.0, FRAC_PI_2, true);
    if let Some(n) = &bottom {
        b.line_to(n.lead).line_to(n.apex).line_to(n.trail);
    }
    b.line_to((body.x0 + r, body.y1));
    b.arc((body.x0 + r, body.y1 - r), r, FRAC_PI_2, PI, true);
    if let Some(n) = &left {
        b.line_to(n.lead).line_to(n.apex).line_to(n.trail);
    }
    b.line_to((body.x0, body.y0 + r));
    b.arc((body.x0 + r, body.y0 + r), r, PI, PI + FRAC_PI_2, true);
    b.close();
}

/// Fit an arrow base of `width` centered at `center` into the straight
/// edge span `(span_min, span_max)`.
///
/// The center is shifted inward first; the width shrinks only when the
/// span itself is too narrow. Returns `(lead, center, trail)` offsets
/// along the edge axis, or `None` when no straight span remains (fully
/// rounded edge) or the arrow is degenerate.
fn notch_span(center: f64, width: f64, span_min: f64, span_max: f64) -> Option<(f64, f64, f64)> {
    let available = span_max - span_min - 2.0 * NOTCH_MARGIN;
    if width <= 0.0 || available <= 0.0 {
        return None;
    }
    let half = width.min(available) / 2.0;
    let center = center.clamp(span_min + NOTCH_MARGIN + half, span_max - NOTCH_MARGIN - half);
    Some((center - half, center, center + half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PathCommand, ShapePath};

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    fn resolve(radius: f64, arrow: ArrowPosition) -> Vec<PathCommand> {
        ShapePath::Dialog { radius, arrow }
            .resolve(BOUNDS)
            .commands()
            .to_vec()
    }

    /// The points introduced by the notch: lead, apex, trail.
    fn notch_points(commands: &[PathCommand], edge: impl Fn(Point) -> bool) -> Vec<Point> {
        commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .filter(|p| edge(*p))
            .collect()
    }

    #[test]
    fn test_bottom_arrow_interrupts_straight_span() {
        let radius = 10.0;
        let arrow = ArrowPosition::Bottom {
            center: 100.0,
            width: 40.0,
            height: 20.0,
        };
        let commands = resolve(radius, arrow);

        // Body bottom edge sits at y = 80; interruption points must lie
        // strictly between the corner arcs at x = 10 and x = 190.
        let on_edge = notch_points(&commands, |p| (p.y - 80.0).abs() < 1e-9);
        let interruptions: Vec<_> = on_edge
            .iter()
            .filter(|p| p.x > 10.0 && p.x < 190.0 && (p.x - 10.0).abs() > 1e-9)
            .collect();
        assert!(interruptions.iter().any(|p| (p.x - 120.0).abs() < 1e-9));
        assert!(interruptions.iter().any(|p| (p.x - 80.0).abs() < 1e-9));

        // Apex points away from the body, through the bounds edge.
        let apex = notch_points(&commands, |p| (p.y - 100.0).abs() < 1e-9);
        assert_eq!(apex.len(), 1);
        assert!((apex[0].x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_arrow_matches_demo_configuration() {
        // The demo uses .dialog(radius: 10, arrowPosition: .right(center: 50, width: 40, height: 20)).
        let commands = resolve(
            10.0,
            ArrowPosition::Right {
                center: 50.0,
                width: 40.0,
                height: 20.0,
            },
        );

        // Body right edge is at x = 180; base runs from y = 30 to y = 70.
        let base = notch_points(&commands, |p| (p.x - 180.0).abs() < 1e-9);
        assert!(base.iter().any(|p| (p.y - 30.0).abs() < 1e-9));
        assert!(base.iter().any(|p| (p.y - 70.0).abs() < 1e-9));

        let apex = notch_points(&commands, |p| (p.x - 200.0).abs() < 1e-9);
        assert_eq!(apex.len(), 1);
        assert!((apex[0].y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_arrow_near_corner_is_shifted_inward() {
        for center in [-50.0, 0.0, 5.0] {
            let commands = resolve(
                15.0,
                ArrowPosition::Top {
                    center,
                    width: 30.0,
                    height: 10.0,
                },
            );
            // Straight span of the top edge (y = 10) is x in (15, 185).
            let base = notch_points(&commands, |p| (p.y - 10.0).abs() < 1e-9);
            for p in base.iter().filter(|p| (p.x - 15.0).abs() > 1e-9 && (p.x - 185.0).abs() > 1e-9) {
                assert!(p.x > 15.0, "interruption at {} overlaps corner arc", p.x);
                assert!(p.x < 185.0, "interruption at {} overlaps corner arc", p.x);
            }
        }
    }

    #[test]
    fn test_arrow_wider_than_span_is_shrunk() {
        let commands = resolve(
            40.0,
            ArrowPosition::Left {
                center: 50.0,
                width: 500.0,
                height: 10.0,
            },
        );
        // Body left edge at x = 10, corners rounded with r = 40 leave the
        // straight span y in (40, 60); every interruption stays inside it.
        let base = notch_points(&commands, |p| (p.x - 10.0).abs() < 1e-9);
        assert!(!base.is_empty());
        for p in &base {
            if (p.y - 40.0).abs() > 1e-9 && (p.y - 60.0).abs() > 1e-9 {
                assert!(p.y > 40.0 && p.y < 60.0);
            }
        }
    }

    #[test]
    fn test_fully_rounded_edge_drops_arrow() {
        // Radius clamps to half the body height, leaving no straight span
        // on the left edge for the notch.
        let arrow = ArrowPosition::Left {
            center: 50.0,
            width: 40.0,
            height: 20.0,
        };
        let commands = resolve(1000.0, arrow);
        // No point escapes the body on the left: the bubble degrades to a
        // plain rounded rect (body starts at x = 20).
        let escaped = notch_points(&commands, |p| p.x < 20.0 - 1e-9);
        assert!(escaped.is_empty(), "unexpected apex points {escaped:?}");
    }

    #[test]
    fn test_dialog_closes_and_stays_in_bounds() {
        let arrow = ArrowPosition::Bottom {
            center: 100.0,
            width: 40.0,
            height: 20.0,
        };
        let resolved = ShapePath::Dialog { radius: 10.0, arrow }.resolve(BOUNDS);
        assert!(resolved.is_closed());

        use kurbo::Shape as KurboShape;
        let bbox = resolved.to_bez_path(0.01).bounding_box();
        assert!(bbox.x0 >= BOUNDS.x0 - 1e-6 && bbox.x1 <= BOUNDS.x1 + 1e-6);
        assert!(bbox.y0 >= BOUNDS.y0 - 1e-6 && bbox.y1 <= BOUNDS.y1 + 1e-6);
    }
}
