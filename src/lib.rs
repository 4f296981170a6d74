//! Interned Symbol values and plane geometry for device models.
//!
//! [`Symbol`] is the token type used for object names, property names and
//! values, event tags and speech words. Equal Symbols share one interned
//! entry, so copying and comparing them is O(1).
//!
//! The [`geometry`] module holds the values Symbols can carry and that devices
//! pass around directly: points, sizes, displacements, line segments and
//! polygons.
//!
//! ```
//! use epic_values::{Symbol, geometry::Point};
//!
//! let location = Symbol::from(Point::new(32.0, 44.0));
//! assert_eq!(location.point(), Ok(Point::new(32.0, 44.0)));
//! assert!(location.as_str().is_err());
//!
//! assert_eq!(Symbol::from("sym1"), Symbol::from("sym1"));
//! assert_eq!(Symbol::from("42").numeric_value(), Ok(42.0));
//! ```

use pest_derive::Parser;

pub mod errors;
pub mod geometry;
pub mod log;
pub mod numeric;
pub mod parse;
pub mod symbol;

pub use errors::{GeometryError, SymbolError, ValueKind};
pub use symbol::utilities::{
    concatenate_to_string, concatenate_to_symbol, cstr_to_symbol_list, get_nth_symbol,
    int_to_symbol,
};
pub use symbol::{NumericKind, Symbol};

#[derive(Parser)]
#[grammar = "symbol.pest"]
pub struct SymbolParser;

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_numeric_literal_rule() {
        let result = SymbolParser::parse(Rule::numeric_literal, " -12.5e2");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn numeric_literal_rejects_trailing_text() {
        let result = SymbolParser::parse(Rule::numeric_literal, "12.5 cm");
        assert!(result.is_err());
    }

    #[test]
    fn parse_token_list_rule() {
        let result = SymbolParser::parse(Rule::token_list, "A B\tCD  E\n");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn token_list_accepts_empty_input() {
        let result = SymbolParser::parse(Rule::token_list, "");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }
}
