//! Error types for the pattern compiler
//!
//! All failures are value-returned through [`CompileError`] using the
//! `thiserror` crate. Each pipeline stage reports the first error it
//! detects and no stage recovers internally. Matching never fails.

use thiserror::Error;

use crate::alphabet::Op;

/// The error type returned by pattern compilation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    /// The pattern is empty
    #[error("empty pattern")]
    Empty,

    /// Unbalanced or misplaced group parentheses
    #[error("unbalanced or misplaced group")]
    InvalidGroup,

    /// Unbalanced or misplaced character-class brackets
    #[error("unbalanced or misplaced character class")]
    InvalidMatch,

    /// An operator appeared unescaped inside a character class
    #[error("operator not allowed inside a character class")]
    InvalidTokenInMatch,

    /// Two operator roles were bound to the same symbol
    #[error("operators {first} and {second} are bound to the same symbol")]
    AlphabetConflict {
        /// The role the symbol was already bound to
        first: Op,
        /// The role the symbol was being bound to
        second: Op,
    },

    /// A stage needed an operator the alphabet does not bind
    #[error("alphabet does not bind the {0} operator")]
    MissingOperator(Op),

    /// The infix-to-postfix conversion found an inconsistency
    #[error("postfix conversion failed")]
    PostfixFailure,

    /// Thompson construction found a malformed postfix stream
    #[error("automaton construction failed")]
    ConstructionFailure,
}

/// Result type alias for compilation
pub type Result<T> = std::result::Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_display() {
        assert_eq!(CompileError::Empty.to_string(), "empty pattern");
        assert_eq!(
            CompileError::InvalidTokenInMatch.to_string(),
            "operator not allowed inside a character class"
        );
    }

    #[test]
    fn test_alphabet_conflict_display() {
        let err = CompileError::AlphabetConflict {
            first: Op::Or,
            second: Op::Concat,
        };
        assert_eq!(
            err.to_string(),
            "operators or and concat are bound to the same symbol"
        );
    }

    #[test]
    fn test_missing_operator_display() {
        let err = CompileError::MissingOperator(Op::OpenMatch);
        assert_eq!(
            err.to_string(),
            "alphabet does not bind the open-match operator"
        );
    }

    #[test]
    fn test_structural_error_display() {
        assert_eq!(
            CompileError::PostfixFailure.to_string(),
            "postfix conversion failed"
        );
        assert_eq!(
            CompileError::ConstructionFailure.to_string(),
            "automaton construction failed"
        );
    }
}
