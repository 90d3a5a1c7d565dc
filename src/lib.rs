//! A regular-expression compiler and matcher over user-defined operator
//! alphabets
//!
//! The caller binds each operator role (alternation, concatenation,
//! repetition, grouping, character classes, escape) to a symbol of the
//! input type, then compiles patterns written in that alphabet:
//!
//! ```
//! use symrex::{Alphabet, Regex};
//!
//! let regex = Regex::compile_str("(a|b)*.c", Alphabet::classic()).unwrap();
//! assert!(regex.matches_str("c"));
//! assert!(!regex.matches_str("a"));
//! ```
//!
//! Compilation is a strict pipeline: validation, character-class
//! expansion, infix-to-postfix conversion, Thompson construction and a
//! per-state epsilon collapse. Each stage is a pure function of its input
//! and the alphabet, so compilation is fully deterministic. Matching
//! returns a plain boolean and cannot fail.
//!
//! Symbols only need equality; `char` is the common case, but any
//! `Clone + PartialEq` type works, including whole words:
//!
//! ```
//! use symrex::{Alphabet, Op, Regex};
//!
//! let alphabet = Alphabet::new()
//!     .set(Op::Or, "either")
//!     .and_then(|a| a.set(Op::OpenMatch, "any-of"))
//!     .and_then(|a| a.set(Op::CloseMatch, "end-any-of"))
//!     .and_then(|a| a.set(Op::Escape, "quote"))
//!     .unwrap();
//! let regex = Regex::compile(&["ping", "either", "pong"], alphabet).unwrap();
//! assert!(regex.matches(&["pong"]));
//! ```

pub mod alphabet;
pub mod bounded;
pub mod dfa;
pub mod engine;
pub mod error;
pub mod expander;
pub mod nfa;
pub mod postfix;
pub mod validator;

pub use alphabet::{Alphabet, Op};
pub use bounded::BoundedRegex;
pub use engine::Regex;
pub use error::{CompileError, Result};
pub use nfa::{Fragment, Nfa, State, StateId, Transition};
pub use postfix::Token;

/// Compile a pattern over the given alphabet
///
/// This is the main entry point; equivalent to [`Regex::compile`].
pub fn compile<S: Clone + PartialEq>(
    pattern: &[S],
    alphabet: Alphabet<S>,
) -> Result<Regex<S>> {
    Regex::compile(pattern, alphabet)
}
