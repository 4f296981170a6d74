//! Interned, immutable Symbol values.
//!
//! A Symbol holds a string, a numeric value (a scalar, a point, or a sequence
//! of points), or both at once as a "named value". The string and numeric
//! parts are interned in the [`pool`], so copying a Symbol is a count bump and
//! comparing two Symbols compares slot identities.
//!
//! If a string is present it decides equality and ordering. Numeric parts are
//! only compared when neither Symbol has a string, and then by their point
//! vectors alone: the scalar `5`, the point `(5, 5)` and the sequence
//! `[(5, 5)]` are the same value. Each handle still remembers the kind it was
//! built as, for the kind predicates, accessors and formatting.
//!
//! Extracting a part that is not present fails with
//! [`SymbolError::ValueKindMismatch`]. Formatting with `Display` always
//! succeeds: strings print as-is and numbers in their canonical text form.

pub mod pool;
pub mod utilities;
mod value;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{SymbolError, ValueKind};
use crate::geometry::Point;
use crate::parse::parse_numeric_literal;

use pool::Atom;
use value::{AtomValue, NumericText};

pub use value::NumericKind;

#[derive(Clone)]
enum Repr {
    Text(Atom),
    Numeric { kind: NumericKind, value: Atom },
    Named { text: Atom, value: Atom },
}

#[derive(Clone)]
pub struct Symbol {
    repr: Repr,
}

impl Symbol {
    /// The empty string Symbol.
    pub fn new() -> Symbol {
        Symbol::from_text("", false)
    }

    /// A Symbol from text. With `check_for_number`, text that parses
    /// completely as a decimal number becomes a scalar Symbol instead.
    pub fn from_text(text: &str, check_for_number: bool) -> Symbol {
        if check_for_number {
            if let Some(value) = parse_numeric_literal(text) {
                return Symbol::from_scalar(value);
            }
        }
        Symbol { repr: Repr::Text(Atom::intern(AtomValue::text(text))) }
    }

    pub fn from_scalar(value: f64) -> Symbol {
        Symbol::numeric(NumericKind::Scalar, AtomValue::scalar(value))
    }

    pub fn from_pair(x: f64, y: f64) -> Symbol {
        Symbol::from_point(Point::new(x, y))
    }

    pub fn from_point(p: Point) -> Symbol {
        Symbol::numeric(NumericKind::Point, AtomValue::point(p))
    }

    pub fn from_points(points: impl Into<Vec<Point>>) -> Symbol {
        Symbol::numeric(NumericKind::PointSequence, AtomValue::points(points.into()))
    }

    fn numeric(kind: NumericKind, value: AtomValue) -> Symbol {
        Symbol { repr: Repr::Numeric { kind, value: Atom::intern(value) } }
    }

    /// A named value: the text decides equality, the points ride along.
    pub fn named(text: &str, points: impl Into<Vec<Point>>) -> Symbol {
        Symbol {
            repr: Repr::Named {
                text: Atom::intern(AtomValue::text(text)),
                value: Atom::intern(AtomValue::points(points.into())),
            },
        }
    }

    /// Exchange the values bound to two handles.
    pub fn swap(&mut self, other: &mut Symbol) {
        std::mem::swap(self, other);
    }

    fn text_atom(&self) -> Option<&Atom> {
        match &self.repr {
            Repr::Text(text) | Repr::Named { text, .. } => Some(text),
            Repr::Numeric { .. } => None,
        }
    }

    fn numeric_atom(&self) -> Option<&Atom> {
        match &self.repr {
            Repr::Numeric { value, .. } | Repr::Named { value, .. } => Some(value),
            Repr::Text(_) => None,
        }
    }

    /// The atom that decides equality, ordering and hashing.
    fn identity(&self) -> &Atom {
        match &self.repr {
            Repr::Text(text) | Repr::Named { text, .. } => text,
            Repr::Numeric { value, .. } => value,
        }
    }

    fn numeric_payload(&self) -> Option<(NumericKind, &[Point])> {
        let (kind, atom) = match &self.repr {
            Repr::Numeric { kind, value } => (*kind, value),
            Repr::Named { value, .. } => (NumericKind::PointSequence, value),
            Repr::Text(_) => return None,
        };
        atom.value().as_points().map(|points| (kind, points))
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    pub fn has_string_value(&self) -> bool {
        self.text_atom().is_some()
    }

    pub fn has_numeric_value(&self) -> bool {
        self.numeric_atom().is_some()
    }

    pub fn numeric_kind(&self) -> Option<NumericKind> {
        self.numeric_payload().map(|(kind, _)| kind)
    }

    pub fn has_single_numeric_value(&self) -> bool {
        self.numeric_kind() == Some(NumericKind::Scalar)
    }

    pub fn has_point_numeric_value(&self) -> bool {
        self.numeric_kind() == Some(NumericKind::Point)
    }

    /// Same as [`Symbol::has_point_numeric_value`]; an `(x, y)` pair is a point.
    pub fn has_pair_numeric_value(&self) -> bool {
        self.has_point_numeric_value()
    }

    pub fn has_multiple_numeric_value(&self) -> bool {
        self.numeric_kind() == Some(NumericKind::PointSequence)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The kind found when an accessor's requirement is not met.
    fn held_kind(&self) -> ValueKind {
        match self.numeric_kind() {
            Some(kind) => kind.into(),
            None => ValueKind::String,
        }
    }

    fn mismatch(&self, operation: &'static str, expected: ValueKind) -> SymbolError {
        SymbolError::ValueKindMismatch { operation, expected, found: self.held_kind() }
    }

    /// The string value.
    pub fn as_str(&self) -> Result<&str, SymbolError> {
        self.text_atom()
            .and_then(|atom| atom.value().as_text())
            .ok_or_else(|| self.mismatch("as_str", ValueKind::String))
    }

    /// Length in bytes of the string value.
    pub fn len(&self) -> Result<usize, SymbolError> {
        self.as_str()
            .map(str::len)
            .map_err(|_| self.mismatch("len", ValueKind::String))
    }

    pub fn is_empty(&self) -> Result<bool, SymbolError> {
        self.len().map(|len| len == 0)
    }

    pub fn numeric_value(&self) -> Result<f64, SymbolError> {
        match self.numeric_payload() {
            Some((NumericKind::Scalar, [p])) => Ok(p.x),
            _ => Err(self.mismatch("numeric_value", ValueKind::Scalar)),
        }
    }

    pub fn point(&self) -> Result<Point, SymbolError> {
        match self.numeric_payload() {
            Some((NumericKind::Point, [p])) => Ok(*p),
            _ => Err(self.mismatch("point", ValueKind::Point)),
        }
    }

    pub fn x(&self) -> Result<f64, SymbolError> {
        self.point().map(|p| p.x).map_err(|_| self.mismatch("x", ValueKind::Point))
    }

    pub fn y(&self) -> Result<f64, SymbolError> {
        self.point().map(|p| p.y).map_err(|_| self.mismatch("y", ValueKind::Point))
    }

    /// Every numeric kind as points: one `(v, v)` point for a scalar, one
    /// point for a point, the whole sequence otherwise.
    pub fn points(&self) -> Result<&[Point], SymbolError> {
        self.numeric_payload()
            .map(|(_, points)| points)
            .ok_or_else(|| self.mismatch("points", ValueKind::Numeric))
    }

    // ------------------------------------------------------------------
    // Storage
    // ------------------------------------------------------------------

    /// Live handles to the value that decides this Symbol's identity.
    pub fn ref_count(&self) -> usize {
        self.identity().ref_count()
    }

    /// Whether both handles point at the same interned storage.
    pub fn shares_storage(&self, other: &Symbol) -> bool {
        self.text_atom() == other.text_atom() && self.numeric_atom() == other.numeric_atom()
    }
}

impl Default for Symbol {
    fn default() -> Symbol {
        Symbol::new()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Symbol) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().slot().hash(state);
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Symbol) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        self.identity().value().cmp(other.identity().value())
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Symbol) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.text_atom(), self.numeric_payload()) {
            (Some(text), _) => fmt::Display::fmt(text.value(), f),
            (None, Some((kind, points))) => fmt::Display::fmt(&NumericText { kind, points }, f),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Text(text) => write!(f, "Symbol({:?})", text.value().to_string()),
            Repr::Numeric { .. } => write!(f, "Symbol({self})"),
            Repr::Named { text, value } => {
                write!(f, "Symbol({:?} = {})", text.value().to_string(), value.value())
            }
        }
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Symbol {
        Symbol::from_text(text, true)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Symbol {
        Symbol::from_text(&text, true)
    }
}

impl From<f64> for Symbol {
    fn from(value: f64) -> Symbol {
        Symbol::from_scalar(value)
    }
}

impl From<i32> for Symbol {
    fn from(value: i32) -> Symbol {
        Symbol::from_scalar(f64::from(value))
    }
}

impl From<Point> for Symbol {
    fn from(p: Point) -> Symbol {
        Symbol::from_point(p)
    }
}

impl From<Vec<Point>> for Symbol {
    fn from(points: Vec<Point>) -> Symbol {
        Symbol::from_points(points)
    }
}

impl From<&[Point]> for Symbol {
    fn from(points: &[Point]) -> Symbol {
        Symbol::from_points(points)
    }
}
