//! Pattern validation
//!
//! First stage of the pipeline: a single left-to-right pass that rejects
//! malformed patterns before any rewriting happens. The pass tracks group
//! depth, character-class depth, whether it is inside a class and whether
//! the current symbol is escaped.

use crate::alphabet::{Alphabet, Op};
use crate::error::CompileError;

/// Validate a pattern against an alphabet
///
/// Returns the first problem found: an empty pattern, unbalanced or
/// misplaced groups or class brackets, or an unescaped operator inside a
/// character class.
pub fn validate<S: PartialEq>(pattern: &[S], alphabet: &Alphabet<S>) -> Result<(), CompileError> {
    if pattern.is_empty() {
        return Err(CompileError::Empty);
    }

    let mut group_depth: i32 = 0;
    let mut match_depth: i32 = 0;
    let mut in_match = false;
    let mut escaped = false;

    for symbol in pattern {
        match alphabet.role_of(symbol) {
            // A second escape in a row is a literal escape symbol.
            Some(Op::Escape) => {
                escaped = !escaped;
                continue;
            }
            Some(role) if !escaped => match role {
                Op::OpenGroup => {
                    if in_match {
                        return Err(CompileError::InvalidGroup);
                    }
                    group_depth += 1;
                }
                Op::CloseGroup => {
                    if in_match {
                        return Err(CompileError::InvalidGroup);
                    }
                    group_depth -= 1;
                    if group_depth < 0 {
                        return Err(CompileError::InvalidGroup);
                    }
                }
                Op::OpenMatch => {
                    if in_match {
                        return Err(CompileError::InvalidMatch);
                    }
                    in_match = true;
                    match_depth += 1;
                }
                Op::CloseMatch => {
                    if !in_match {
                        return Err(CompileError::InvalidMatch);
                    }
                    in_match = false;
                    match_depth -= 1;
                }
                Op::Or | Op::Concat | Op::Any | Op::OneOrMore => {
                    if in_match {
                        return Err(CompileError::InvalidTokenInMatch);
                    }
                }
                Op::Escape => {}
            },
            _ => {}
        }
        escaped = false;
    }

    if group_depth != 0 {
        return Err(CompileError::InvalidGroup);
    }
    if match_depth != 0 {
        return Err(CompileError::InvalidMatch);
    }
    Ok(())
}
