//! NFA construction (Thompson)
//!
//! This module implements Thompson's construction over the postfix token
//! stream. States live in an arena owned by the automaton and refer to
//! each other by index, so the cyclic graphs produced by repetition need
//! no shared ownership; a fragment is just an entry/exit pair of indices.

use smallvec::SmallVec;

use crate::alphabet::Op;
use crate::error::CompileError;
use crate::postfix::Token;

/// Index of a state in the automaton's arena
///
/// Identifiers are assigned monotonically per automaton and are unique
/// within one compiled graph.
pub type StateId = usize;

/// A directed edge between two states
///
/// A transition without a condition is an epsilon transition: it is taken
/// without consuming input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    /// The state this transition leaves; always the state that lists it
    pub from: StateId,
    /// The state this transition enters
    pub to: StateId,
    /// The symbol that must be read, or `None` for epsilon
    pub condition: Option<S>,
}

/// A node of the automaton
#[derive(Debug, Clone)]
pub struct State<S> {
    /// Stable identifier; equals the state's index in the arena
    pub id: StateId,
    /// Whether reaching this state accepts the input
    pub is_final: bool,
    /// Outgoing transitions
    pub transitions: Vec<Transition<S>>,
    /// Symbol-labeled successors after epsilon collapse; filled by the
    /// closure stage, consumed by the matcher in insertion order
    pub closure: Vec<(S, StateId)>,
}

/// A partially built piece of the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    /// Entry state
    pub start: StateId,
    /// Exit state
    pub end: StateId,
}

/// An automaton over symbols of type `S`
///
/// Starts out nondeterministic with epsilon transitions; the closure
/// stage later adds the collapsed successor lists in place.
#[derive(Debug, Clone)]
pub struct Nfa<S> {
    /// All states, indexed by [`StateId`]
    pub states: Vec<State<S>>,
    /// Entry state of the whole automaton
    pub start: StateId,
    /// Accepting state of the whole automaton
    pub end: StateId,
}

impl<S: Clone> Nfa<S> {
    fn new() -> Self {
        Nfa {
            states: Vec::new(),
            start: 0,
            end: 0,
        }
    }

    /// Allocate a fresh state and return its identifier
    fn new_state(&mut self) -> StateId {
        let id = self.states.len();
        self.states.push(State {
            id,
            is_final: false,
            transitions: Vec::new(),
            closure: Vec::new(),
        });
        id
    }

    /// Add a transition between two states
    fn add_transition(&mut self, from: StateId, to: StateId, condition: Option<S>) {
        self.states[from].transitions.push(Transition {
            from,
            to,
            condition,
        });
    }

    /// Build an automaton from a postfix token stream
    ///
    /// Literals push primitive fragments; operators pop their operands
    /// and push the combined fragment. An operand underflow, an operator
    /// that cannot appear in postfix, or anything but exactly one
    /// fragment left at the end is a construction failure.
    pub fn from_postfix(postfix: &[Token<S>]) -> Result<Self, CompileError> {
        let mut nfa = Nfa::new();
        let mut stack: SmallVec<[Fragment; 16]> = SmallVec::new();

        for token in postfix {
            match token {
                Token::Literal(symbol) => {
                    let fragment = nfa.value(symbol.clone());
                    stack.push(fragment);
                }
                Token::Operator(Op::Concat, _) => {
                    let second = stack.pop().ok_or(CompileError::ConstructionFailure)?;
                    let first = stack.pop().ok_or(CompileError::ConstructionFailure)?;
                    let fragment = nfa.concatenation(first, second);
                    stack.push(fragment);
                }
                Token::Operator(Op::Or, _) => {
                    let second = stack.pop().ok_or(CompileError::ConstructionFailure)?;
                    let first = stack.pop().ok_or(CompileError::ConstructionFailure)?;
                    let fragment = nfa.alternation(first, second);
                    stack.push(fragment);
                }
                Token::Operator(Op::Any, _) => {
                    let inner = stack.pop().ok_or(CompileError::ConstructionFailure)?;
                    let fragment = nfa.zero_or_more(inner);
                    stack.push(fragment);
                }
                Token::Operator(Op::OneOrMore, _) => {
                    let inner = stack.pop().ok_or(CompileError::ConstructionFailure)?;
                    let fragment = nfa.one_or_more(inner);
                    stack.push(fragment);
                }
                Token::Operator(_, _) => return Err(CompileError::ConstructionFailure),
            }
        }

        let fragment = stack.pop().ok_or(CompileError::ConstructionFailure)?;
        if !stack.is_empty() {
            return Err(CompileError::ConstructionFailure);
        }

        nfa.start = fragment.start;
        nfa.end = fragment.end;
        nfa.states[fragment.end].is_final = true;
        Ok(nfa)
    }

    /// A primitive fragment: one edge labeled with the symbol
    fn value(&mut self, symbol: S) -> Fragment {
        let start = self.new_state();
        let end = self.new_state();
        self.add_transition(start, end, Some(symbol));
        Fragment { start, end }
    }

    /// Alternation of two fragments
    fn alternation(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let start = self.new_state();
        let end = self.new_state();
        self.add_transition(start, a.start, None);
        self.add_transition(start, b.start, None);
        self.add_transition(a.end, end, None);
        self.add_transition(b.end, end, None);
        Fragment { start, end }
    }

    /// Concatenation of two fragments
    fn concatenation(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let start = self.new_state();
        let end = self.new_state();
        self.add_transition(start, a.start, None);
        self.add_transition(a.end, b.start, None);
        self.add_transition(b.end, end, None);
        Fragment { start, end }
    }

    /// Zero or more repetitions
    ///
    /// The loop edge re-enters through the outer start state.
    fn zero_or_more(&mut self, inner: Fragment) -> Fragment {
        let start = self.new_state();
        let end = self.new_state();
        self.add_transition(start, inner.start, None);
        self.add_transition(start, end, None);
        self.add_transition(inner.end, start, None);
        Fragment { start, end }
    }

    /// One or more repetitions
    fn one_or_more(&mut self, inner: Fragment) -> Fragment {
        let start = self.new_state();
        let end = self.new_state();
        self.add_transition(start, inner.start, None);
        self.add_transition(inner.end, inner.start, None);
        self.add_transition(inner.end, end, None);
        Fragment { start, end }
    }
}
