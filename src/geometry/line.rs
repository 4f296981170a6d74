//! Line segments in parametric and general form.
//!
//! Parametric: `p = p1 + t * (dx, dy)`, with `t` in `[0, 1]` on the segment.
//! General: `A*x + B*y + C == 0`, with `(A, B)` the unit normal, so
//! `A*x + B*y + C` is the signed distance from the infinite line.
//!
//! Coordinates are compared exactly. Callers that want fuzzy horizontality or
//! on-line tests should round their coordinates first.

use std::fmt;

use glam::{DVec2, dvec2};

use super::{Point, Size, cartesian_distance};
use crate::errors::GeometryError;

/// A segment between two points, with the derived terms precomputed.
///
/// A zero-length segment is allowed. Its general-form terms are all zero and
/// every closest-point query answers `p1`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LineSegment {
    p1: Point,
    p2: Point,
    dx: f64,
    dy: f64,
    length: f64,
    a: f64,
    b: f64,
    c: f64,
}

impl LineSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let length = dx.hypot(dy);
        if length == 0.0 {
            crate::log::debug!(x = p1.x, y = p1.y, "degenerate line segment");
            return LineSegment { p1, p2, dx, dy, length, a: 0.0, b: 0.0, c: 0.0 };
        }
        LineSegment {
            p1,
            p2,
            dx,
            dy,
            length,
            a: -dy / length,
            b: dx / length,
            c: -(-dy * p1.x + dx * p1.y) / length,
        }
    }

    /// Like [`LineSegment::new`] but rejects zero-length segments.
    pub fn try_new(p1: Point, p2: Point) -> Result<Self, GeometryError> {
        let segment = LineSegment::new(p1, p2);
        if segment.is_degenerate() {
            return Err(GeometryError::MalformedInput {
                what: "line segment",
                reason: format!("both endpoints are {p1}"),
            });
        }
        Ok(segment)
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0
    }

    /// Center of the bounding box
    pub fn center(&self) -> Point {
        self.p1.midpoint(self.p2)
    }

    /// Size of the bounding box
    pub fn size(&self) -> Size {
        Size::new(self.dx.abs(), self.dy.abs())
    }

    pub fn is_horizontal(&self) -> bool {
        self.dy == 0.0
    }

    pub fn is_vertical(&self) -> bool {
        self.dx == 0.0
    }

    // ------------------------------------------------------------------
    // Infinite line queries
    // ------------------------------------------------------------------

    pub fn is_on_infinite_line(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return p == self.p1;
        }
        self.distance_from_infinite_line(p) == 0.0
    }

    /// Signed distance from the infinite line; zero means on the line.
    ///
    /// The sign says which side `p` is on. For a degenerate segment this is
    /// the plain distance to `p1`.
    pub fn distance_from_infinite_line(&self, p: Point) -> f64 {
        if self.is_degenerate() {
            return cartesian_distance(p, self.p1);
        }
        self.a * p.x + self.b * p.y + self.c
    }

    /// Foot of the perpendicular from `p`.
    pub fn closest_point_on_infinite_line(&self, p: Point) -> Point {
        if self.is_degenerate() {
            return self.p1;
        }
        let normal = dvec2(self.a, self.b);
        let foot = DVec2::from(p) - normal * self.distance_from_infinite_line(p);
        foot.into()
    }

    // ------------------------------------------------------------------
    // Parametric form
    // ------------------------------------------------------------------

    /// Parameter of `p` along the line, solved on the axis with the larger
    /// extent. Below 0 is before `p1`, above 1 is past `p2`.
    ///
    /// Only meaningful for points on the line; project first otherwise.
    pub fn parameter(&self, p: Point) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        if self.dx.abs() >= self.dy.abs() {
            self.parameter_given_x(p.x)
        } else {
            self.parameter_given_y(p.y)
        }
    }

    /// Infinite or NaN for vertical lines.
    pub fn parameter_given_x(&self, x: f64) -> f64 {
        (x - self.p1.x) / self.dx
    }

    /// Infinite or NaN for horizontal lines.
    pub fn parameter_given_y(&self, y: f64) -> f64 {
        (y - self.p1.y) / self.dy
    }

    pub fn x_given_parameter(&self, t: f64) -> f64 {
        self.p1.x + t * self.dx
    }

    pub fn y_given_parameter(&self, t: f64) -> f64 {
        self.p1.y + t * self.dy
    }

    pub fn point_on_line(&self, t: f64) -> Point {
        Point::new(self.x_given_parameter(t), self.y_given_parameter(t))
    }

    // ------------------------------------------------------------------
    // Segment queries
    // ------------------------------------------------------------------

    /// Closest point to `p` between the endpoints: the perpendicular foot if
    /// it falls on the segment, otherwise the nearer endpoint.
    pub fn closest_point_on_segment(&self, p: Point) -> Point {
        if self.is_degenerate() {
            return self.p1;
        }
        let foot = self.closest_point_on_infinite_line(p);
        let t = self.parameter(foot);
        if t <= 0.0 {
            self.p1
        } else if t >= 1.0 {
            self.p2
        } else {
            foot
        }
    }

    pub fn distance_from_segment(&self, p: Point) -> f64 {
        cartesian_distance(p, self.closest_point_on_segment(p))
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> LineSegment {
        LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))
    }

    // ==================== Construction tests ====================

    #[test]
    fn general_form_terms() {
        let seg = LineSegment::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(seg.length(), 5.0);
        assert_eq!(seg.a(), -0.8);
        assert_eq!(seg.b(), 0.6);
        // p1 and p2 both satisfy A*x + B*y + C == 0
        assert!(seg.distance_from_infinite_line(seg.p1()).abs() < 1e-12);
        assert!(seg.distance_from_infinite_line(seg.p2()).abs() < 1e-12);
    }

    #[test]
    fn try_new_rejects_degenerate() {
        let p = Point::new(2.0, 2.0);
        assert!(matches!(
            LineSegment::try_new(p, p),
            Err(GeometryError::MalformedInput { what: "line segment", .. })
        ));
        assert!(LineSegment::try_new(p, Point::new(3.0, 2.0)).is_ok());
    }

    #[test]
    fn bounding_box() {
        let seg = LineSegment::new(Point::new(10.0, 20.0), Point::new(-10.0, -20.0));
        assert_eq!(seg.center(), Point::ORIGIN);
        assert_eq!(seg.size(), Size::new(20.0, 40.0));
    }

    #[test]
    fn orientation_is_exact() {
        assert!(horizontal().is_horizontal());
        assert!(!horizontal().is_vertical());
        let vertical = LineSegment::new(Point::new(3.0, -1.0), Point::new(3.0, 8.0));
        assert!(vertical.is_vertical());
        let nearly = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 1e-12));
        assert!(!nearly.is_horizontal());
    }

    // ==================== Infinite line tests ====================

    #[test]
    fn signed_distance_changes_sign_across_line() {
        let seg = horizontal();
        assert_eq!(seg.distance_from_infinite_line(Point::new(50.0, 3.0)), 3.0);
        assert_eq!(seg.distance_from_infinite_line(Point::new(-50.0, -2.0)), -2.0);
        assert!(seg.is_on_infinite_line(Point::new(-7.0, 0.0)));
    }

    #[test]
    fn projection_onto_diagonal() {
        let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
        let foot = seg.closest_point_on_infinite_line(Point::new(0.0, 4.0));
        assert!((foot.x - 2.0).abs() < 1e-12);
        assert!((foot.y - 2.0).abs() < 1e-12);
    }

    // ==================== Parametric tests ====================

    #[test]
    fn parameter_uses_dominant_axis() {
        let steep = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 100.0));
        assert_eq!(steep.parameter(Point::new(0.5, 50.0)), 0.5);
        assert_eq!(steep.parameter(Point::new(2.0, 200.0)), 2.0);
        let vertical = LineSegment::new(Point::new(3.0, 0.0), Point::new(3.0, 8.0));
        assert_eq!(vertical.parameter(Point::new(3.0, -4.0)), -0.5);
    }

    #[test]
    fn point_on_line_inverts_parameter() {
        let seg = LineSegment::new(Point::new(-2.0, 1.0), Point::new(6.0, 5.0));
        let p = seg.point_on_line(0.25);
        assert_eq!(p, Point::new(0.0, 2.0));
        assert_eq!(seg.parameter(p), 0.25);
    }

    // ==================== Segment tests ====================

    #[test]
    fn closest_point_between_endpoints() {
        let seg = horizontal();
        assert_eq!(seg.closest_point_on_segment(Point::new(5.0, 3.0)), Point::new(5.0, 0.0));
        assert_eq!(seg.distance_from_segment(Point::new(5.0, 3.0)), 3.0);
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let seg = horizontal();
        assert_eq!(seg.closest_point_on_segment(Point::new(-5.0, 0.0)), Point::ORIGIN);
        assert_eq!(seg.distance_from_segment(Point::new(-5.0, 0.0)), 5.0);
        assert_eq!(seg.closest_point_on_segment(Point::new(13.0, 4.0)), Point::new(10.0, 0.0));
        assert_eq!(seg.distance_from_segment(Point::new(13.0, 4.0)), 5.0);
    }

    #[test]
    fn degenerate_segment_answers_shared_point() {
        let p = Point::new(1.0, 1.0);
        let seg = LineSegment::new(p, p);
        assert!(seg.is_degenerate());
        assert_eq!(seg.closest_point_on_segment(Point::new(4.0, 5.0)), p);
        assert_eq!(seg.closest_point_on_infinite_line(Point::new(4.0, 5.0)), p);
        assert_eq!(seg.distance_from_segment(Point::new(4.0, 5.0)), 5.0);
        assert_eq!(seg.distance_from_infinite_line(Point::new(4.0, 5.0)), 5.0);
        assert_eq!(seg.parameter(Point::new(4.0, 5.0)), 0.0);
        assert!(seg.is_on_infinite_line(p));
    }
}
