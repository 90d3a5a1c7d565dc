//! The compiled regex and its matcher
//!
//! Drives the whole pipeline (validate, expand, convert to postfix, build
//! the automaton, collapse epsilon transitions) and walks the result
//! against input sequences. A compiled regex is immutable; matching is a
//! pure function of the regex and the input and cannot fail.

use std::collections::VecDeque;

use crate::alphabet::Alphabet;
use crate::dfa;
use crate::error::CompileError;
use crate::expander;
use crate::nfa::{Nfa, StateId};
use crate::postfix;
use crate::validator;

#[cfg(feature = "debug")]
use crate::postfix::Token;

/// A compiled regular expression over symbols of type `S`
///
/// Owns every state of its automaton; dropping the regex releases the
/// whole graph. Safe to share across threads for matching.
#[derive(Debug, Clone)]
pub struct Regex<S> {
    nfa: Nfa<S>,
    alphabet: Alphabet<S>,
    #[cfg(feature = "debug")]
    expanded: Vec<S>,
    #[cfg(feature = "debug")]
    postfix: Vec<Token<S>>,
}

impl<S: Clone + PartialEq> Regex<S> {
    /// Compile a pattern over the given alphabet
    ///
    /// Stages run in order and the first error aborts compilation.
    pub fn compile(pattern: &[S], alphabet: Alphabet<S>) -> Result<Self, CompileError> {
        validator::validate(pattern, &alphabet)?;
        let expanded = expander::expand(pattern, &alphabet)?;
        let postfix = postfix::to_postfix(&expanded, &alphabet)?;
        let mut nfa = Nfa::from_postfix(&postfix)?;
        dfa::build_closures(&mut nfa);
        Ok(Regex {
            nfa,
            alphabet,
            #[cfg(feature = "debug")]
            expanded,
            #[cfg(feature = "debug")]
            postfix,
        })
    }

    /// Test whether the input belongs to the pattern's language
    ///
    /// Walks the collapsed successor lists breadth-first, driven by input
    /// position: one closure is taken off the queue per input symbol, and
    /// the input is accepted as soon as a matching entry's target is
    /// final.
    pub fn matches(&self, input: &[S]) -> bool {
        let mut queue: VecDeque<StateId> = VecDeque::new();
        queue.push_back(self.nfa.start);

        for symbol in input {
            let Some(id) = queue.pop_front() else {
                return false;
            };
            let closure = &self.nfa.states[id].closure;
            if closure.is_empty() {
                return false;
            }
            for (condition, target) in closure {
                if condition == symbol {
                    if self.nfa.states[*target].is_final {
                        return true;
                    }
                    queue.push_back(*target);
                }
            }
        }

        false
    }

    /// The alphabet the pattern was compiled with
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }
}

impl Regex<char> {
    /// Compile a `&str` pattern
    pub fn compile_str(pattern: &str, alphabet: Alphabet<char>) -> Result<Self, CompileError> {
        let symbols: Vec<char> = pattern.chars().collect();
        Regex::compile(&symbols, alphabet)
    }

    /// Match a `&str` input
    pub fn matches_str(&self, input: &str) -> bool {
        let symbols: Vec<char> = input.chars().collect();
        self.matches(&symbols)
    }
}

#[cfg(feature = "debug")]
impl<S: Clone + PartialEq> Regex<S> {
    /// The pattern after character-class expansion
    pub fn expanded_pattern(&self) -> &[S] {
        &self.expanded
    }

    /// The postfix token stream the automaton was built from
    pub fn postfix(&self) -> &[Token<S>] {
        &self.postfix
    }
}

#[cfg(feature = "debug")]
impl<S: std::fmt::Debug> Regex<S> {
    /// Plain dump of the state arena: one line per state, its transitions
    /// and its collapsed closure entries
    pub fn dump_states(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for state in &self.nfa.states {
            let marker = if state.is_final { " (final)" } else { "" };
            let _ = writeln!(out, "state {}{}", state.id, marker);
            for transition in &state.transitions {
                match &transition.condition {
                    Some(condition) => {
                        let _ = writeln!(out, "  -{:?}-> {}", condition, transition.to);
                    }
                    None => {
                        let _ = writeln!(out, "  -eps-> {}", transition.to);
                    }
                }
            }
            for (symbol, target) in &state.closure {
                let _ = writeln!(out, "  closure {:?} -> {}", symbol, target);
            }
        }
        out
    }
}
