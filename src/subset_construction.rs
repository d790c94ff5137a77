//
//   Copyright 2016 Andrew Hunter
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
//   Unless required by applicable law or agreed to in writing, software
//   distributed under the License is distributed on an "AS IS" BASIS,
//   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//   See the License for the specific language governing permissions and
//   limitations under the License.
//

//!
//! # Subset construction
//!
//! Converts an NFA into an equivalent DFA. Each DFA state stands for the set of NFA states the
//! machine could be in at once; its identity is the composite id formed by sorting the member
//! ids and joining them inside braces, eg `{q1,q3}`, which is what lets two routes to the same
//! subset land on the same DFA state. Symbols with no reachable target produce no transition at
//! all: a missing transition is an implicit reject, not a dead state.
//!
//! The number of subsets is finite (at worst 2^n for n NFA states), so the construction always
//! terminates, but that worst case is real and is why the state ceiling in `ConversionLimits`
//! is checked while states are generated.
//!

use std::collections::BTreeSet;

use super::automaton::*;
use super::error::*;

///
/// The ε-closure of a set of states: every state reachable using only ε-transitions, including
/// the starting states themselves
///
pub fn epsilon_closure(automaton: &Automaton, states: &BTreeSet<String>) -> BTreeSet<String> {
    let mut closure = states.clone();
    let mut work: Vec<String> = states.iter().cloned().collect();

    while let Some(state) = work.pop() {
        for transition in automaton.transitions.iter() {
            if transition.from == state && transition.label == Label::Epsilon && !closure.contains(&transition.to) {
                closure.insert(transition.to.clone());
                work.push(transition.to.clone());
            }
        }
    }

    closure
}

///
/// The states reachable from `states` by consuming `symbol`, before any ε-transitions are taken
///
pub fn symbol_move(automaton: &Automaton, states: &BTreeSet<String>, symbol: char) -> BTreeSet<String> {
    let mut targets = BTreeSet::new();

    for transition in automaton.transitions.iter() {
        if transition.label == Label::Symbol(symbol) && states.contains(&transition.from) {
            targets.insert(transition.to.clone());
        }
    }

    targets
}

///
/// The canonical composite identifier for a set of NFA states
///
pub fn composite_id(states: &BTreeSet<String>) -> String {
    let ids: Vec<&str> = states.iter().map(|id| id.as_str()).collect();
    format!("{{{}}}", ids.join(","))
}

///
/// Builds the DFA equivalent to an NFA
///
/// The DFA's initial state is the ε-closure of the NFA's initial state; a DFA state is
/// accepting exactly when its subset contains an accepting NFA state; the alphabet is carried
/// over unchanged. At most one transition leaves any state on any symbol, by construction.
///
pub fn subset_construct(nfa: &Automaton, limits: &ConversionLimits) -> ConversionResult<Automaton> {
    let mut dfa_states = BTreeSet::new();
    let mut dfa_transitions = vec![];
    let mut dfa_accepting = BTreeSet::new();

    let mut initial_set = BTreeSet::new();
    initial_set.insert(nfa.initial_state.clone());

    let initial_closure = epsilon_closure(nfa, &initial_set);
    let initial_id = composite_id(&initial_closure);

    dfa_states.insert(initial_id.clone());
    if intersects_accepting(nfa, &initial_closure) {
        dfa_accepting.insert(initial_id.clone());
    }

    let mut work_list = vec![initial_closure];
    let mut processed = BTreeSet::new();

    while let Some(current) = work_list.pop() {
        let current_id = composite_id(&current);
        if !processed.insert(current_id.clone()) {
            continue;
        }

        for &symbol in nfa.alphabet.iter() {
            let targets = symbol_move(nfa, &current, symbol);
            if targets.is_empty() {
                continue;
            }

            let target_closure = epsilon_closure(nfa, &targets);
            let target_id = composite_id(&target_closure);

            if dfa_states.insert(target_id.clone()) {
                limits.check_states(dfa_states.len())?;

                if intersects_accepting(nfa, &target_closure) {
                    dfa_accepting.insert(target_id.clone());
                }
                work_list.push(target_closure);
            }

            dfa_transitions.push(Transition::new(current_id.clone(), target_id, Label::Symbol(symbol)));
        }
    }

    Ok(Automaton {
        states:           dfa_states,
        transitions:      dfa_transitions,
        alphabet:         nfa.alphabet.clone(),
        initial_state:    initial_id,
        accepting_states: dfa_accepting,
    })
}

fn intersects_accepting(nfa: &Automaton, states: &BTreeSet<String>) -> bool {
    states.iter().any(|id| nfa.accepting_states.contains(id))
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::convert::*;
    use super::super::simulate::*;

    fn state_set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    ///
    /// The NFA with ε-transitions from the middle worked example of the interchange format:
    /// q0 -ε-> q1 -a-> q2 -b-> q1, plus q0 -a-> q2, accepting on q2
    ///
    fn epsilon_nfa() -> Automaton {
        Automaton {
            states:           state_set(&["q0", "q1", "q2"]),
            transitions:      vec![
                Transition::new("q0", "q1", Label::Epsilon),
                Transition::new("q1", "q2", Label::Symbol('a')),
                Transition::new("q2", "q1", Label::Symbol('b')),
                Transition::new("q0", "q2", Label::Symbol('a')),
            ],
            alphabet:         vec!['a', 'b'].into_iter().collect(),
            initial_state:    "q0".to_string(),
            accepting_states: state_set(&["q2"]),
        }
    }

    #[test]
    fn closure_includes_the_starting_states() {
        let nfa = epsilon_nfa();
        let closure = epsilon_closure(&nfa, &state_set(&["q1"]));

        assert!(closure == state_set(&["q1"]));
    }

    #[test]
    fn closure_follows_epsilon_transitions() {
        let nfa = epsilon_nfa();
        let closure = epsilon_closure(&nfa, &state_set(&["q0"]));

        assert!(closure == state_set(&["q0", "q1"]));
    }

    #[test]
    fn closure_is_idempotent() {
        let nfa = epsilon_nfa();

        let once  = epsilon_closure(&nfa, &state_set(&["q0"]));
        let twice = epsilon_closure(&nfa, &once);

        assert!(once == twice);
    }

    #[test]
    fn composite_ids_are_sorted_and_braced() {
        assert!(composite_id(&state_set(&["q2", "q0"])) == "{q0,q2}");
    }

    #[test]
    fn the_dfa_has_at_most_one_transition_per_state_and_symbol() {
        let nfa = regex_to_nfa("(a|b)*abb").unwrap();
        let dfa = subset_construct(&nfa, &ConversionLimits::default()).unwrap();

        let mut seen = BTreeSet::new();
        for transition in dfa.transitions.iter() {
            assert!(seen.insert((transition.from.clone(), transition.label)));
        }
    }

    #[test]
    fn the_dfa_accepts_the_same_language() {
        let nfa = regex_to_nfa("a*b").unwrap();
        let dfa = subset_construct(&nfa, &ConversionLimits::default()).unwrap();

        for input in vec!["b", "ab", "aaab"] {
            assert!(accepts(&dfa, input));
        }
        for input in vec!["", "a", "ba", "abb"] {
            assert!(!accepts(&dfa, input));
        }
    }

    #[test]
    fn epsilon_transitions_are_resolved_into_the_subsets() {
        let nfa = epsilon_nfa();
        let dfa = subset_construct(&nfa, &ConversionLimits::default()).unwrap();

        assert!(dfa.initial_state == "{q0,q1}");
        assert!(accepts(&dfa, "a"));
        assert!(accepts(&dfa, "aba"));
        assert!(!accepts(&dfa, "ab"));
        assert!(!accepts(&dfa, ""));
    }

    #[test]
    fn missing_transitions_reject_implicitly() {
        let nfa = regex_to_nfa("ab").unwrap();
        let dfa = subset_construct(&nfa, &ConversionLimits::default()).unwrap();

        // No state has a transition for 'a' once the leading 'a' has been consumed
        assert!(accepts(&dfa, "ab"));
        assert!(!accepts(&dfa, "aa"));
    }

    #[test]
    fn the_state_ceiling_fails_fast() {
        let nfa = regex_to_nfa("(a|b)*abb").unwrap();
        let limits = ConversionLimits { max_states: 2, max_transitions: 0 };

        match subset_construct(&nfa, &limits) {
            Err(ConversionError::StateLimitExceeded { states, max }) => {
                assert!(states == 3);
                assert!(max == 2);
            },
            other => panic!("expected a state limit error, got {:?}", other),
        }
    }
}
