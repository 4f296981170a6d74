//! Displacements in cartesian and polar form.
//!
//! Point + CartesianVector = Point, Point - Point = CartesianVector.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

use super::Point;

/// A displacement (dx, dy)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CartesianVector {
    pub dx: f64,
    pub dy: f64,
}

impl CartesianVector {
    pub const fn new(dx: f64, dy: f64) -> Self {
        CartesianVector { dx, dy }
    }

    /// The displacement that takes `p1` to `p2`.
    pub fn from_points(p1: Point, p2: Point) -> Self {
        CartesianVector::new(p2.x - p1.x, p2.y - p1.y)
    }

    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

impl From<PolarVector> for CartesianVector {
    fn from(pv: PolarVector) -> Self {
        CartesianVector::new(pv.r * pv.theta.cos(), pv.r * pv.theta.sin())
    }
}

impl From<CartesianVector> for DVec2 {
    fn from(cv: CartesianVector) -> DVec2 {
        dvec2(cv.dx, cv.dy)
    }
}

impl fmt::Display for CartesianVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

/// A displacement (r, theta) with theta in radians
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PolarVector {
    pub r: f64,
    pub theta: f64,
}

impl PolarVector {
    pub const fn new(r: f64, theta: f64) -> Self {
        PolarVector { r, theta }
    }

    /// The displacement that takes `p1` to `p2`.
    pub fn from_points(p1: Point, p2: Point) -> Self {
        CartesianVector::from_points(p1, p2).into()
    }
}

impl From<CartesianVector> for PolarVector {
    fn from(cv: CartesianVector) -> Self {
        PolarVector::new(cv.dx.hypot(cv.dy), cv.dy.atan2(cv.dx))
    }
}

impl fmt::Display for PolarVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {} rad>", self.r, self.theta)
    }
}

impl Add<CartesianVector> for Point {
    type Output = Point;
    fn add(self, rhs: CartesianVector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<CartesianVector> for Point {
    type Output = Point;
    fn sub(self, rhs: CartesianVector) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl Add<PolarVector> for Point {
    type Output = Point;
    fn add(self, rhs: PolarVector) -> Point {
        self + CartesianVector::from(rhs)
    }
}

/// Subtract two points to get the displacement from `rhs` to `self`
impl Sub<Point> for Point {
    type Output = CartesianVector;
    fn sub(self, rhs: Point) -> CartesianVector {
        CartesianVector::from_points(rhs, self)
    }
}

impl Add for CartesianVector {
    type Output = CartesianVector;
    fn add(self, rhs: CartesianVector) -> CartesianVector {
        CartesianVector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for CartesianVector {
    type Output = CartesianVector;
    fn sub(self, rhs: CartesianVector) -> CartesianVector {
        CartesianVector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Mul<f64> for CartesianVector {
    type Output = CartesianVector;
    fn mul(self, rhs: f64) -> CartesianVector {
        CartesianVector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Div<f64> for CartesianVector {
    type Output = CartesianVector;
    fn div(self, rhs: f64) -> CartesianVector {
        CartesianVector::new(self.dx / rhs, self.dy / rhs)
    }
}

impl Neg for CartesianVector {
    type Output = CartesianVector;
    fn neg(self) -> CartesianVector {
        CartesianVector::new(-self.dx, -self.dy)
    }
}
