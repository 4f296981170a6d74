//! Parse text with the Symbol grammar: strict numeric recognition and
//! whitespace tokenizing.

use crate::{Rule, SymbolParser};
use pest::Parser;

/// Parse the whole of `text` as a decimal number.
///
/// Leading whitespace is skipped. `inf`, `infinity` and `nan` are accepted in
/// any case, so every scalar's text form parses back. Anything else that is
/// not part of the literal (trailing whitespace, units, hex) makes the text a
/// non-number.
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let pairs = SymbolParser::parse(Rule::numeric_literal, text).ok()?;
    let number = pairs.flatten().find(|pair| pair.as_rule() == Rule::number)?;
    number.as_str().parse().ok()
}

/// Split `text` into whitespace-delimited tokens.
///
/// `token_list` accepts every input, so there is no failure case.
pub fn split_tokens(text: &str) -> Vec<&str> {
    SymbolParser::parse(Rule::token_list, text)
        .map(|pairs| {
            pairs
                .flatten()
                .filter(|pair| pair.as_rule() == Rule::token)
                .map(|pair| pair.as_str())
                .collect()
        })
        .unwrap_or_default()
}
