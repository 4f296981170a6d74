//! Helpers over lists of Symbols.

use std::fmt;

use super::Symbol;
use crate::parse::split_tokens;

/// Separator used by [`concatenate_to_string`].
pub const LIST_SEPARATOR: &str = " ";

/// The `n`th Symbol (from 0), or the empty Symbol when `n` is out of range.
pub fn get_nth_symbol(list: &[Symbol], n: usize) -> Symbol {
    list.get(n).cloned().unwrap_or_default()
}

/// One Symbol per whitespace-delimited token; numeric tokens become scalars.
///
/// `"A B CD E"` gives `[A, B, CD, E]`.
pub fn cstr_to_symbol_list(text: &str) -> Vec<Symbol> {
    split_tokens(text).into_iter().map(Symbol::from).collect()
}

/// A scalar Symbol holding `i`.
pub fn int_to_symbol(i: i32) -> Symbol {
    Symbol::from(i)
}

/// The text forms of `parts` followed by the digits of `i`, as a string
/// Symbol. Parts can be strings or Symbols, mixed freely.
///
/// The result is never parsed as a number, so `concatenate_to_symbol(&[&""], 5)`
/// is the string `"5"`.
pub fn concatenate_to_symbol(parts: &[&dyn fmt::Display], i: i64) -> Symbol {
    let mut text: String = parts.iter().map(ToString::to_string).collect();
    text.push_str(&i.to_string());
    Symbol::from_text(&text, false)
}

/// The text forms of `list` joined by [`LIST_SEPARATOR`].
pub fn concatenate_to_string(list: &[Symbol]) -> String {
    list.iter().map(ToString::to_string).collect::<Vec<_>>().join(LIST_SEPARATOR)
}
