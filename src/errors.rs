//! Error types with diagnostics using miette
//!
//! Geometry never fails on finite input; these errors come from strict
//! constructors, strict lookups and Symbol accessors.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// The representation a Symbol holds (or an accessor requires).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Scalar,
    Point,
    PointSequence,
    /// Any numeric representation, used by accessors that accept all three.
    Numeric,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Scalar => "scalar",
            ValueKind::Point => "point",
            ValueKind::PointSequence => "point sequence",
            ValueKind::Numeric => "numeric",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Symbol Errors
// ============================================================================

/// Errors raised by Symbol accessors
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SymbolError {
    #[error("`{operation}` requires a {expected} value, but the symbol holds a {found} value")]
    #[diagnostic(
        code(epic::symbol::kind_mismatch),
        help("check the matching `has_*_value` predicate before extracting")
    )]
    ValueKindMismatch {
        operation: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised by strict geometry constructors and lookups
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("malformed {what}: {reason}")]
    #[diagnostic(code(epic::geometry::malformed_input))]
    MalformedInput {
        what: &'static str,
        reason: String,
    },

    #[error("index {index} out of range")]
    #[diagnostic(
        code(epic::geometry::index_out_of_range),
        help("only {len} elements exist")
    )]
    IndexOutOfRange { index: usize, len: usize },
}
