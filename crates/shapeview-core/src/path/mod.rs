//! Declarative shape outlines.
//!
//! A [`ShapePath`] names one of a small set of outline kinds; resolving it
//! against the host view's measured bounds produces the concrete
//! [`PathCommand`] sequence. Bounds are never captured at construction
//! time, so resolved geometry always reflects the final view size.

mod corner;
mod dialog;
mod star;

pub use dialog::ArrowPosition;
pub use star::{INNER_RADIUS_RATIO, MIN_VERTICES};

use std::fmt;
use std::sync::Arc;

use kurbo::{BezPath, PathEl, Point, Rect, Vec2};

/// One segment of an outline. An ordered sequence of commands forms a
/// single continuous path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc. Angles follow the screen convention (y-down): with
    /// `clockwise`, the sweep from `start_angle` to `end_angle` runs in
    /// the direction of increasing angle, which appears clockwise.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
    Close,
}

/// Command buffer handed to path builders.
#[derive(Debug, Default, Clone)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: impl Into<Point>) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point.into()));
        self
    }

    pub fn line_to(&mut self, point: impl Into<Point>) -> &mut Self {
        self.commands.push(PathCommand::LineTo(point.into()));
        self
    }

    pub fn arc(
        &mut self,
        center: impl Into<Point>,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> &mut Self {
        self.commands.push(PathCommand::Arc {
            center: center.into(),
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn finish(self) -> ResolvedPath {
        ResolvedPath {
            commands: self.commands,
        }
    }
}

/// Builder closure for free-form outlines. Receives the measured bounds
/// and appends commands into the buffer it is given.
pub type CustomBuilder = Arc<dyn Fn(Rect, &mut PathBuilder) + Send + Sync>;

/// Declarative description of a view's outline.
#[derive(Clone)]
pub enum ShapePath {
    /// Free-form outline appended by the caller's closure.
    Custom(CustomBuilder),
    /// Rectangle with all four corners rounded by `radius`.
    Corner { radius: f64 },
    /// Star polygon with `vertices` outer points (minimum 3).
    Star { vertices: usize },
    /// Rounded-rectangle speech bubble with a triangular arrow on one edge.
    Dialog { radius: f64, arrow: ArrowPosition },
}

impl ShapePath {
    /// Wrap a free-form builder closure.
    pub fn custom<F>(builder: F) -> Self
    where
        F: Fn(Rect, &mut PathBuilder) + Send + Sync + 'static,
    {
        ShapePath::Custom(Arc::new(builder))
    }

    /// Resolve the outline against the view's measured bounds.
    ///
    /// Bounds are taken by value as an immutable snapshot; a bounds change
    /// during resolution cannot mutate the sequence being built. An
    /// unmeasured view (zero-area bounds) legitimately draws nothing yet,
    /// so resolution yields an empty sequence instead of failing.
    pub fn resolve(&self, bounds: Rect) -> ResolvedPath {
        let bounds = bounds.abs();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            log::trace!("resolving against zero-area bounds, empty outline");
            return ResolvedPath::default();
        }

        let mut builder = PathBuilder::new();
        match self {
            ShapePath::Custom(build) => build(bounds, &mut builder),
            ShapePath::Corner { radius } => corner::build(&mut builder, *radius, bounds),
            ShapePath::Star { vertices } => star::build(&mut builder, *vertices, bounds),
            ShapePath::Dialog { radius, arrow } => {
                dialog::build(&mut builder, *radius, *arrow, bounds)
            }
        }
        builder.finish()
    }
}

impl fmt::Debug for ShapePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapePath::Custom(_) => f.write_str("Custom(..)"),
            ShapePath::Corner { radius } => f.debug_struct("Corner").field("radius", radius).finish(),
            ShapePath::Star { vertices } => {
                f.debug_struct("Star").field("vertices", vertices).finish()
            }
            ShapePath::Dialog { radius, arrow } => f
                .debug_struct("Dialog")
                .field("radius", radius)
                .field("arrow", arrow)
                .finish(),
        }
    }
}

/// Outline produced by [`ShapePath::resolve`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResolvedPath {
    commands: Vec<PathCommand>,
}

impl ResolvedPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Flatten into a kurbo path.
    ///
    /// An `Arc` command draws an implicit straight connector from the
    /// current point to the arc's start point, then approximates the sweep
    /// with cubic beziers within `tolerance`.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        let mut current: Option<Point> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    path.move_to(p);
                    current = Some(p);
                }
                PathCommand::LineTo(p) => {
                    if current.is_some() {
                        path.line_to(p);
                    } else {
                        path.move_to(p);
                    }
                    current = Some(p);
                }
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    let start = point_on_circle(center, radius, start_angle);
                    match current {
                        None => path.move_to(start),
                        Some(p) if (p - start).hypot() > 1e-9 => path.line_to(start),
                        Some(_) => {}
                    }
                    let arc = kurbo::Arc {
                        center,
                        radii: Vec2::new(radius, radius),
                        start_angle,
                        sweep_angle: sweep_angle(start_angle, end_angle, clockwise),
                        x_rotation: 0.0,
                    };
                    arc.to_cubic_beziers(tolerance, |p1, p2, p3| path.curve_to(p1, p2, p3));
                    current = Some(point_on_circle(center, radius, end_angle));
                }
                PathCommand::Close => {
                    path.close_path();
                    current = None;
                }
            }
        }
        path
    }

    /// Like [`to_bez_path`](Self::to_bez_path), but guarantees the final
    /// subpath is closed so the result can serve as a mask region.
    pub fn to_closed_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = self.to_bez_path(tolerance);
        match path.elements().last() {
            None | Some(PathEl::ClosePath) => {}
            Some(_) => path.close_path(),
        }
        path
    }
}

fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

/// Signed sweep from `start` to `end`, positive for the screen-clockwise
/// direction (y-down).
fn sweep_angle(start: f64, end: f64, clockwise: bool) -> f64 {
    use std::f64::consts::TAU;

    let mut sweep = (end - start) % TAU;
    if sweep == 0.0 {
        return 0.0;
    }
    if clockwise {
        if sweep < 0.0 {
            sweep += TAU;
        }
    } else if sweep > 0.0 {
        sweep -= TAU;
    }
    sweep
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_custom_passthrough() {
        let shape = ShapePath::custom(|_, b| {
            b.move_to((0.0, 0.0))
                .line_to((10.0, 0.0))
                .line_to((10.0, 10.0))
                .close();
        });
        let expected = vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 10.0)),
            PathCommand::Close,
        ];

        // Same commands regardless of the (valid) bounds passed.
        for bounds in [
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(0.0, 0.0, 7.0, 900.0),
        ] {
            assert_eq!(shape.resolve(bounds).commands(), expected.as_slice());
        }
    }

    #[test]
    fn test_custom_empty_output_accepted() {
        let shape = ShapePath::custom(|_, _| {});
        let resolved = shape.resolve(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(resolved.is_empty());
        assert!(resolved.to_closed_bez_path(0.1).elements().is_empty());
    }

    #[test]
    fn test_zero_area_bounds_resolve_empty() {
        let shapes = [
            ShapePath::custom(|_, b| {
                b.move_to((0.0, 0.0));
            }),
            ShapePath::Corner { radius: 5.0 },
            ShapePath::Star { vertices: 5 },
            ShapePath::Dialog {
                radius: 5.0,
                arrow: ArrowPosition::Bottom {
                    center: 10.0,
                    width: 10.0,
                    height: 10.0,
                },
            },
        ];
        for shape in &shapes {
            assert!(shape.resolve(Rect::ZERO).is_empty());
            assert!(shape.resolve(Rect::new(5.0, 5.0, 5.0, 80.0)).is_empty());
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let bounds = Rect::new(0.0, 0.0, 120.0, 80.0);
        let shapes = [
            ShapePath::Corner { radius: 12.0 },
            ShapePath::Star { vertices: 7 },
            ShapePath::Dialog {
                radius: 10.0,
                arrow: ArrowPosition::Right {
                    center: 50.0,
                    width: 40.0,
                    height: 20.0,
                },
            },
        ];
        for shape in &shapes {
            assert_eq!(shape.resolve(bounds), shape.resolve(bounds));
        }
    }

    #[test]
    fn test_sweep_angle_direction() {
        // Quarter arc from -pi/2 to 0, clockwise on screen.
        assert!((sweep_angle(-FRAC_PI_2, 0.0, true) - FRAC_PI_2).abs() < 1e-12);
        // The same endpoints counterclockwise go the long way around.
        assert!((sweep_angle(-FRAC_PI_2, 0.0, false) + 3.0 * FRAC_PI_2).abs() < 1e-12);
        // Half circle in either direction.
        assert!((sweep_angle(FRAC_PI_2, -FRAC_PI_2, true) - PI).abs() < 1e-12);
        assert_eq!(sweep_angle(PI, PI, true), 0.0);
    }

    #[test]
    fn test_arc_connector_line() {
        // An arc following a move gets a straight connector to its start.
        let mut b = PathBuilder::new();
        b.move_to((0.0, 10.0));
        b.arc((0.0, 0.0), 10.0, 0.0, FRAC_PI_2, true);
        let path = b.finish().to_bez_path(0.01);

        let mut elements = path.elements().iter();
        assert!(matches!(elements.next(), Some(PathEl::MoveTo(_))));
        match elements.next() {
            Some(PathEl::LineTo(p)) => {
                assert!((*p - Point::new(10.0, 0.0)).hypot() < 1e-9);
            }
            other => panic!("expected connector line, got {other:?}"),
        }
    }

    #[test]
    fn test_to_closed_bez_path_auto_closes() {
        let mut b = PathBuilder::new();
        b.move_to((0.0, 0.0)).line_to((10.0, 0.0)).line_to((10.0, 10.0));
        let resolved = b.finish();
        assert!(!resolved.is_closed());

        let path = resolved.to_closed_bez_path(0.1);
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
    }
}
