//! Points, sizes and angle helpers.
//!
//! Units are whatever the caller uses. Angles are radians unless a function
//! name says degrees; 0 degrees points along +x, 90 degrees along +y.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::GeometryError;

/// A position in the plane. Equality is exact per component.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Midpoint between two points
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> DVec2 {
        dvec2(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

/// Formats as `(x, y)` using the shortest round-trip form of each coordinate.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of an axis-aligned extent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Create a Size with validation (rejects NaN, infinite and negative extents)
    pub fn try_new(width: f64, height: f64) -> Result<Size, GeometryError> {
        for (axis, value) in [("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(GeometryError::MalformedInput {
                    what: "size",
                    reason: format!("{axis} is not finite ({value})"),
                });
            }
            if value < 0.0 {
                return Err(GeometryError::MalformedInput {
                    what: "size",
                    reason: format!("{axis} is negative ({value})"),
                });
            }
        }
        Ok(Size { width, height })
    }

    pub(crate) fn half_extents(self) -> DVec2 {
        dvec2(self.width / 2.0, self.height / 2.0)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Distance between two points.
pub fn cartesian_distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

pub fn to_radians(theta_deg: f64) -> f64 {
    theta_deg * std::f64::consts::PI / 180.0
}

pub fn to_degrees(theta_rad: f64) -> f64 {
    theta_rad * 180.0 / std::f64::consts::PI
}

/// Visual angle in degrees of an object of `size_measure` seen from
/// `distance_measure` (same units for both).
pub fn degrees_subtended(size_measure: f64, distance_measure: f64) -> f64 {
    to_degrees(2.0 * (size_measure / 2.0).atan2(distance_measure))
}

/// Degrees subtended by one unit when there are `units_per_measure` units per
/// unit of distance measure, e.g. the visual angle of one pixel.
pub fn degrees_subtended_per_unit(units_per_measure: f64, distance_measure: f64) -> f64 {
    degrees_subtended(1.0 / units_per_measure, distance_measure)
}

/// Inverse of [`degrees_subtended_per_unit`]: given the degrees subtended by
/// one unit, recover how many units there are per unit of distance measure.
pub fn units_per_degree_subtended(degrees_per_unit: f64, distance_measure: f64) -> f64 {
    1.0 / (2.0 * distance_measure * (to_radians(degrees_per_unit) / 2.0).tan())
}
