//! Subset closure construction
//!
//! For every state reachable from the start, collapse epsilon transitions
//! and record the symbol-labeled successors directly on the state. The
//! result is deterministic in successor lookup but not minimized:
//! equivalent closures are never merged, and duplicate entries may occur.
//!
//! The matcher only accepts when the target of a symbol transition is
//! itself final; epsilon paths are not followed at match time. Terminality
//! is therefore pulled backwards across epsilon transitions here, to a
//! fixpoint, so that every state with an epsilon path to the accepting
//! state carries the final flag itself.

use std::collections::HashSet;

use crate::nfa::{Nfa, StateId};

/// Fill in the closure list of every reachable state
///
/// Runs the two-worklist collapse, then propagates terminality backwards
/// across epsilon transitions until nothing changes.
pub fn build_closures<S: Clone>(nfa: &mut Nfa<S>) {
    let mut visited: HashSet<StateId> = HashSet::new();
    let mut next: Vec<StateId> = vec![nfa.start];

    while let Some(source) = next.pop() {
        let mut current: Vec<StateId> = vec![source];
        while let Some(id) = current.pop() {
            let transitions = nfa.states[id].transitions.clone();
            for transition in transitions {
                match transition.condition {
                    None => {
                        if nfa.states[transition.to].is_final {
                            nfa.states[id].is_final = true;
                        }
                        if visited.insert(transition.to) {
                            current.push(transition.to);
                        }
                    }
                    Some(symbol) => {
                        nfa.states[source].closure.push((symbol, transition.to));
                        if visited.insert(transition.to) {
                            next.push(transition.to);
                        }
                    }
                }
            }
        }
    }

    propagate_terminality(nfa);
}

/// Backward fixpoint over epsilon edges: a state with an epsilon path to
/// a final state is itself final.
fn propagate_terminality<S>(nfa: &mut Nfa<S>) {
    let epsilon_edges: Vec<(StateId, StateId)> = nfa
        .states
        .iter()
        .flat_map(|state| state.transitions.iter())
        .filter(|transition| transition.condition.is_none())
        .map(|transition| (transition.from, transition.to))
        .collect();

    let mut changed = true;
    while changed {
        changed = false;
        for &(from, to) in &epsilon_edges {
            if nfa.states[to].is_final && !nfa.states[from].is_final {
                nfa.states[from].is_final = true;
                changed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::nfa::Nfa;
    use crate::postfix::to_postfix;

    fn automaton(pattern: &str) -> Nfa<char> {
        let symbols: Vec<char> = pattern.chars().collect();
        let postfix = to_postfix(&symbols, &Alphabet::classic()).unwrap();
        let mut nfa = Nfa::from_postfix(&postfix).unwrap();
        build_closures(&mut nfa);
        nfa
    }

    #[test]
    fn test_value_closure() {
        let nfa = automaton("a");
        assert_eq!(nfa.states[nfa.start].closure, vec![('a', nfa.end)]);
    }

    #[test]
    fn test_alternation_closure_collects_both_branches() {
        let nfa = automaton("a|b");
        let mut symbols: Vec<char> = nfa.states[nfa.start]
            .closure
            .iter()
            .map(|(symbol, _)| *symbol)
            .collect();
        symbols.sort_unstable();
        assert_eq!(symbols, vec!['a', 'b']);
    }

    #[test]
    fn test_terminality_reaches_branch_exits() {
        // Both value exits sit two epsilon steps from the accepting state
        // once the alternations nest; every one of them must be final.
        let nfa = automaton("a|b|c");
        for state in &nfa.states {
            for (symbol, target) in &state.closure {
                assert!(
                    nfa.states[*target].is_final,
                    "target of {:?} from state {} is not final",
                    symbol,
                    state.id
                );
            }
        }
    }

    #[test]
    fn test_terminality_not_leaked_past_symbols() {
        // In `a.b` the state reached after `a` still needs a `b`; it must
        // not become final.
        let nfa = automaton("a.b");
        let (_, after_a) = nfa.states[nfa.start].closure[0];
        assert!(!nfa.states[after_a].is_final);
    }

    #[test]
    fn test_end_state_is_final() {
        let nfa = automaton("(a|b)*.c");
        assert!(nfa.states[nfa.end].is_final);
    }

    #[test]
    fn test_star_entry_closure_includes_tail() {
        // From the start of `(a|b)*.c` the collapsed successors are the
        // two loop symbols and the concatenated `c`.
        let nfa = automaton("(a|b)*.c");
        let mut symbols: Vec<char> = nfa.states[nfa.start]
            .closure
            .iter()
            .map(|(symbol, _)| *symbol)
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_closure_targets_stay_in_arena() {
        let nfa = automaton("(a|b)*.c");
        for state in &nfa.states {
            for (_, target) in &state.closure {
                assert!(*target < nfa.states.len());
            }
        }
    }
}
