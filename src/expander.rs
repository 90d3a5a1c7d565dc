//! Character-class expansion
//!
//! Rewrites `[abc]` into `a|b|c` so the later stages only ever see
//! alternation, concatenation and repetition. Operands outside classes
//! pass through verbatim. Escaped symbols inside a class keep their escape
//! prefix, so they stay literal operands downstream.

use crate::alphabet::{Alphabet, Op};
use crate::error::CompileError;

/// Expand every character class in the pattern into an alternation
///
/// Requires the `or`, `open-match`, `close-match` and `escape` roles to be
/// bound; a single-symbol pattern is returned unchanged without consulting
/// the alphabet.
pub fn expand<S: Clone + PartialEq>(
    pattern: &[S],
    alphabet: &Alphabet<S>,
) -> Result<Vec<S>, CompileError> {
    if pattern.len() <= 1 {
        return Ok(pattern.to_vec());
    }

    let or = alphabet.require(Op::Or)?.clone();
    let escape = alphabet.require(Op::Escape)?.clone();
    alphabet.require(Op::OpenMatch)?;
    alphabet.require(Op::CloseMatch)?;

    let mut expanded = Vec::with_capacity(pattern.len());
    let mut in_match = false;
    let mut first_of_class = false;
    let mut escaped = false;

    for symbol in pattern {
        if escaped {
            if in_match {
                if !first_of_class {
                    expanded.push(or.clone());
                }
                expanded.push(escape.clone());
                expanded.push(symbol.clone());
                first_of_class = false;
            } else {
                expanded.push(symbol.clone());
            }
            escaped = false;
            continue;
        }
        match alphabet.role_of(symbol) {
            Some(Op::Escape) => {
                escaped = true;
                // Outside a class the prefix passes through as-is; inside,
                // it is re-emitted in front of its operand.
                if !in_match {
                    expanded.push(symbol.clone());
                }
            }
            Some(Op::OpenMatch) => {
                in_match = true;
                first_of_class = true;
            }
            Some(Op::CloseMatch) => {
                in_match = false;
            }
            _ => {
                if in_match {
                    if !first_of_class {
                        expanded.push(or.clone());
                    }
                    expanded.push(symbol.clone());
                    first_of_class = false;
                } else {
                    expanded.push(symbol.clone());
                }
            }
        }
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(pattern: &str) -> Vec<char> {
        pattern.chars().collect()
    }

    fn expanded(pattern: &str) -> String {
        expand(&chars(pattern), &Alphabet::classic())
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_simple_class() {
        assert_eq!(expanded("[abc]"), "a|b|c");
    }

    #[test]
    fn test_single_element_class() {
        assert_eq!(expanded("[c]"), "c");
    }

    #[test]
    fn test_escaped_symbol_inside_class() {
        assert_eq!(expanded(r"[ab\.c]"), r"a|b|\.|c");
    }

    #[test]
    fn test_escaped_symbol_first_in_class() {
        assert_eq!(expanded(r"[\.abc].d"), r"\.|a|b|c.d");
    }

    #[test]
    fn test_class_free_pattern_is_unchanged() {
        assert_eq!(expanded("(a|b)*.c"), "(a|b)*.c");
        assert_eq!(expanded("a.b|c*"), "a.b|c*");
    }

    #[test]
    fn test_escape_outside_class_passes_through() {
        assert_eq!(expanded(r"a.\*.b"), r"a.\*.b");
        assert_eq!(expanded(r"\[a"), r"\[a");
    }

    #[test]
    fn test_single_symbol_skips_alphabet() {
        // No roles bound at all; the shortcut must not consult them.
        let empty: Alphabet<char> = Alphabet::new();
        assert_eq!(expand(&['x'], &empty), Ok(vec!['x']));
    }

    #[test]
    fn test_missing_operator_is_reported() {
        let alphabet = Alphabet::new()
            .set(Op::OpenMatch, '[')
            .and_then(|a| a.set(Op::CloseMatch, ']'))
            .unwrap();
        assert_eq!(
            expand(&chars("[ab]"), &alphabet),
            Err(CompileError::MissingOperator(Op::Or))
        );
    }

    #[test]
    fn test_two_classes() {
        assert_eq!(expanded("[ab].[cd]"), "a|b.c|d");
    }
}
