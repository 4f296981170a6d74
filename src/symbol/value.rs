//! The payloads that the pool interns.
//!
//! A Symbol's string and numeric parts are interned separately, each as one
//! [`AtomValue`]. A numeric part is interned as its point vector only: a
//! scalar `v` is the vector `[(v, v)]`, so a scalar, a point and a one-point
//! sequence with the same coordinates share one entry. The kind lives in the
//! Symbol handle.
//!
//! Floats are stored canonicalized (`-0.0` folded to `0.0`, all NaNs folded
//! to one NaN) so that bitwise equality is value equality and the pool never
//! holds two entries for the same number.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::ValueKind;
use crate::geometry::Point;

/// Which numeric shape a Symbol carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericKind {
    /// One number, stored as the point `(value, value)`
    Scalar,
    /// One point
    Point,
    /// Any number of points
    PointSequence,
}

impl From<NumericKind> for ValueKind {
    fn from(kind: NumericKind) -> ValueKind {
        match kind {
            NumericKind::Scalar => ValueKind::Scalar,
            NumericKind::Point => ValueKind::Point,
            NumericKind::PointSequence => ValueKind::PointSequence,
        }
    }
}

fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

fn canonical_point(p: Point) -> Point {
    Point::new(canonical(p.x), canonical(p.y))
}

#[derive(Debug)]
pub(crate) enum AtomValue {
    Text(Box<str>),
    Numeric(Box<[Point]>),
}

impl AtomValue {
    pub(crate) fn text(text: &str) -> AtomValue {
        AtomValue::Text(text.into())
    }

    pub(crate) fn scalar(value: f64) -> AtomValue {
        let value = canonical(value);
        AtomValue::Numeric(Box::new([Point::new(value, value)]))
    }

    pub(crate) fn point(p: Point) -> AtomValue {
        AtomValue::Numeric(Box::new([canonical_point(p)]))
    }

    pub(crate) fn points(points: Vec<Point>) -> AtomValue {
        AtomValue::Numeric(points.into_iter().map(canonical_point).collect())
    }

    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            AtomValue::Text(text) => Some(text),
            AtomValue::Numeric(_) => None,
        }
    }

    pub(crate) fn as_points(&self) -> Option<&[Point]> {
        match self {
            AtomValue::Text(_) => None,
            AtomValue::Numeric(points) => Some(points),
        }
    }
}

// Floats are canonical, so bit patterns decide equality.
impl PartialEq for AtomValue {
    fn eq(&self, other: &AtomValue) -> bool {
        match (self, other) {
            (AtomValue::Text(a), AtomValue::Text(b)) => a == b,
            (AtomValue::Numeric(pa), AtomValue::Numeric(pb)) => {
                pa.len() == pb.len()
                    && pa.iter().zip(pb.iter()).all(|(a, b)| {
                        a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()
                    })
            }
            _ => false,
        }
    }
}

impl Eq for AtomValue {}

impl Hash for AtomValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            AtomValue::Text(text) => {
                state.write_u8(0);
                text.hash(state);
            }
            AtomValue::Numeric(points) => {
                state.write_u8(1);
                state.write_usize(points.len());
                for p in points.iter() {
                    state.write_u64(p.x.to_bits());
                    state.write_u64(p.y.to_bits());
                }
            }
        }
    }
}

/// Numbers sort before text. Numbers compare point by point (x, then y),
/// then by length.
impl Ord for AtomValue {
    fn cmp(&self, other: &AtomValue) -> Ordering {
        match (self, other) {
            (AtomValue::Text(a), AtomValue::Text(b)) => a.cmp(b),
            (AtomValue::Numeric(_), AtomValue::Text(_)) => Ordering::Less,
            (AtomValue::Text(_), AtomValue::Numeric(_)) => Ordering::Greater,
            (AtomValue::Numeric(pa), AtomValue::Numeric(pb)) => pa
                .iter()
                .zip(pb.iter())
                .map(|(a, b)| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| pa.len().cmp(&pb.len())),
        }
    }
}

impl PartialOrd for AtomValue {
    fn partial_cmp(&self, other: &AtomValue) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A numeric payload rendered as the kind it was built as.
///
/// Canonical text: `42`, `(32, 44)`, `[(0, 0), (1, 2)]`.
pub(crate) struct NumericText<'a> {
    pub(crate) kind: NumericKind,
    pub(crate) points: &'a [Point],
}

impl fmt::Display for NumericText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.points) {
            (NumericKind::Scalar, [p]) => write!(f, "{}", p.x),
            (NumericKind::Point, [p]) => write!(f, "{p}"),
            (_, points) => {
                f.write_str("[")?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{p}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for AtomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomValue::Text(text) => f.write_str(text),
            AtomValue::Numeric(points) => {
                let text = NumericText { kind: NumericKind::PointSequence, points };
                fmt::Display::fmt(&text, f)
            }
        }
    }
}
