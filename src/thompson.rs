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
//! # Thompson's construction
//!
//! Compiles a `Regex` syntax tree into an NFA. Every sub-expression becomes a fragment with
//! one start state and one end state; fragments are wired together with ε-transitions and are
//! never merged or deleted once created. The result accepts exactly the language of the
//! expression, with a single accepting state.
//!

use std::collections::BTreeSet;

use super::automaton::*;
use super::regular_expression::*;

///
/// A compiled sub-expression: the ids of its entry and exit states
///
struct Fragment {
    start: String,
    end: String,
}

///
/// Compiles regular expressions into NFAs
///
/// Each builder owns its own `q0, q1, ...` counter, so conversions are reentrant and two
/// conversions never share state ids by accident.
///
pub struct ThompsonBuilder {
    next_state: u32,
    states: BTreeSet<String>,
    transitions: Vec<Transition>,
}

impl ThompsonBuilder {
    fn new() -> ThompsonBuilder {
        ThompsonBuilder { next_state: 0, states: BTreeSet::new(), transitions: vec![] }
    }

    fn fresh_state(&mut self) -> String {
        let id = format!("q{}", self.next_state);
        self.next_state += 1;
        self.states.insert(id.clone());
        id
    }

    fn connect(&mut self, from: &str, to: &str, label: Label) {
        self.transitions.push(Transition::new(from, to, label));
    }

    fn compile(&mut self, regex: &Regex) -> Fragment {
        match regex {
            &Regex::Empty => {
                let start = self.fresh_state();
                let end   = self.fresh_state();
                self.connect(&start, &end, Label::Epsilon);

                Fragment { start: start, end: end }
            },

            &Regex::Literal(ch) => {
                let start = self.fresh_state();
                let end   = self.fresh_state();
                self.connect(&start, &end, Label::Symbol(ch));

                Fragment { start: start, end: end }
            },

            &Regex::Concat(ref parts) => {
                // Chain the parts left to right with ε-transitions between them
                let mut chained: Option<Fragment> = None;

                for part in parts {
                    let next = self.compile(part);

                    chained = Some(match chained {
                        None => next,
                        Some(previous) => {
                            self.connect(&previous.end, &next.start, Label::Epsilon);
                            Fragment { start: previous.start, end: next.end }
                        },
                    });
                }

                match chained {
                    Some(fragment) => fragment,
                    None           => self.compile(&Regex::Empty),
                }
            },

            &Regex::Union(ref branches) => {
                let start = self.fresh_state();
                let end   = self.fresh_state();

                for branch in branches {
                    let compiled = self.compile(branch);
                    self.connect(&start, &compiled.start, Label::Epsilon);
                    self.connect(&compiled.end, &end, Label::Epsilon);
                }

                Fragment { start: start, end: end }
            },

            &Regex::Star(ref inner) => {
                let inner = self.compile(inner);
                let start = self.fresh_state();
                let end   = self.fresh_state();

                self.connect(&start, &inner.start, Label::Epsilon);
                self.connect(&start, &end, Label::Epsilon);
                self.connect(&inner.end, &end, Label::Epsilon);
                self.connect(&inner.end, &inner.start, Label::Epsilon);

                Fragment { start: start, end: end }
            },
        }
    }

    ///
    /// Compiles a parsed expression into a complete automaton
    ///
    /// The automaton's initial state is the outermost fragment's start, its sole accepting
    /// state is the outermost fragment's end, and its alphabet is the set of symbols that
    /// appear literally in the expression.
    ///
    pub fn build(regex: &Regex) -> Automaton {
        let mut builder = ThompsonBuilder::new();
        let fragment = builder.compile(regex);

        let mut accepting = BTreeSet::new();
        accepting.insert(fragment.end);

        Automaton {
            states:           builder.states,
            transitions:      builder.transitions,
            alphabet:         regex.alphabet(),
            initial_state:    fragment.start,
            accepting_states: accepting,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::simulate::*;

    fn build_pattern(pattern: &str) -> Automaton {
        ThompsonBuilder::build(&pattern.parse().unwrap())
    }

    #[test]
    fn a_literal_becomes_two_states_and_one_transition() {
        let nfa = build_pattern("a");

        assert!(nfa.states.len() == 2);
        assert!(nfa.transitions.len() == 1);
        assert!(nfa.transitions[0].label == Label::Symbol('a'));
        assert!(nfa.accepting_states.len() == 1);
    }

    #[test]
    fn star_wraps_the_inner_fragment_with_four_epsilon_transitions() {
        let nfa = build_pattern("a*");

        let epsilon_count = nfa.transitions.iter().filter(|t| t.label == Label::Epsilon).count();

        assert!(nfa.states.len() == 4);
        assert!(epsilon_count == 4);
    }

    #[test]
    fn concatenation_chains_fragments() {
        let nfa = build_pattern("a*b");

        assert!(nfa.states.len() == 6);
        assert!(nfa.transitions.len() == 7);
        assert!(nfa.accepting_states.len() == 1);
    }

    #[test]
    fn the_alphabet_is_the_literal_symbols() {
        let nfa = build_pattern("(a|b)*abb");

        assert!(nfa.alphabet == vec!['a', 'b'].into_iter().collect());
    }

    #[test]
    fn an_empty_pattern_accepts_only_the_empty_string() {
        let nfa = build_pattern("");

        assert!(accepts(&nfa, ""));
        assert!(!accepts(&nfa, "a"));
    }

    #[test]
    fn the_nfa_accepts_the_language_of_the_expression() {
        let nfa = build_pattern("a*b");

        assert!(accepts(&nfa, "b"));
        assert!(accepts(&nfa, "ab"));
        assert!(accepts(&nfa, "aaab"));
        assert!(!accepts(&nfa, "a"));
        assert!(!accepts(&nfa, ""));
        assert!(!accepts(&nfa, "ba"));
    }

    #[test]
    fn separate_builds_use_independent_counters() {
        let first  = build_pattern("ab");
        let second = build_pattern("cd");

        // Both start counting from q0 again
        assert!(first.initial_state == second.initial_state);
    }
}
