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
//! # Automaton
//!
//! The data model shared by every conversion. An `Automaton` owns a set of state ids, a sequence
//! of labeled transitions between them, an alphabet, one initial state id and a set of accepting
//! state ids. The same structure represents both NFAs (several transitions may leave a state on
//! the same label, and ε-transitions are allowed) and DFAs (at most one transition per state and
//! symbol, guaranteed by the subset construction rather than enforced here).
//!
//! The top-level `initial_state` and `accepting_states` lists are the single source of truth;
//! the per-state initial/accepting flags that appear in the interchange format are a view
//! derived on demand via `state_records`, so the two representations cannot drift apart.
//!

use std::collections::BTreeSet;
use std::fmt::{Display, Error, Formatter};

///
/// The empty-string marker used in transition labels and rendered expressions
///
pub const EPSILON: char = 'ε';

///
/// A transition label: either a symbol from the alphabet or the ε marker
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Following this transition consumes no input
    Epsilon,

    /// Following this transition consumes one symbol
    Symbol(char),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            &Label::Epsilon    => f.write_fmt(format_args!("{}", EPSILON)),
            &Label::Symbol(ch) => f.write_fmt(format_args!("{}", ch)),
        }
    }
}

///
/// A directed transition between two states
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub label: Label,
}

impl Transition {
    pub fn new<From: Into<String>, To: Into<String>>(from: From, to: To, label: Label) -> Transition {
        Transition { from: from.into(), to: to.into(), label: label }
    }
}

///
/// The derived per-state view: a state id plus its initial/accepting flags
///
/// This is the shape states take in the JSON interchange format. It is never stored on the
/// automaton itself; `Automaton::state_records` computes it from the top-level lists.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: String,
    pub is_initial: bool,
    pub is_accepting: bool,
}

///
/// A finite automaton over single-character symbols
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    /// The state ids, each unique
    pub states: BTreeSet<String>,

    /// The transitions; state ids referenced here are expected to appear in `states`
    pub transitions: Vec<Transition>,

    /// The input symbols; ε is never a member
    pub alphabet: BTreeSet<char>,

    /// The id of the single initial state
    pub initial_state: String,

    /// The ids of the accepting states
    pub accepting_states: BTreeSet<String>,
}

impl Automaton {
    pub fn is_initial(&self, id: &str) -> bool {
        self.initial_state == id
    }

    pub fn is_accepting(&self, id: &str) -> bool {
        self.accepting_states.contains(id)
    }

    ///
    /// Derives the full per-state records from the top-level lists
    ///
    pub fn state_records(&self) -> Vec<State> {
        self.states.iter()
            .map(|id| State {
                id:           id.clone(),
                is_initial:   self.is_initial(id),
                is_accepting: self.is_accepting(id),
            })
            .collect()
    }

    ///
    /// The transitions leaving a particular state
    ///
    pub fn transitions_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |transition| transition.from == id)
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_fmt(format_args!("States: {}\n", self.states.len()))?;
        f.write_fmt(format_args!("Initial: {}\n", self.initial_state))?;
        for id in self.accepting_states.iter() {
            f.write_fmt(format_args!("Accepting: {}\n", id))?;
        }
        for transition in self.transitions.iter() {
            f.write_fmt(format_args!("{} -> {} ({})\n", transition.from, transition.to, transition.label))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_state_automaton() -> Automaton {
        let states: BTreeSet<String> = vec!["q0".to_string(), "q1".to_string()].into_iter().collect();
        let accepting: BTreeSet<String> = vec!["q1".to_string()].into_iter().collect();

        Automaton {
            states:           states,
            transitions:      vec![Transition::new("q0", "q1", Label::Symbol('a'))],
            alphabet:         vec!['a'].into_iter().collect(),
            initial_state:    "q0".to_string(),
            accepting_states: accepting,
        }
    }

    #[test]
    fn flags_are_derived_from_the_top_level_lists() {
        let automaton = two_state_automaton();
        let records = automaton.state_records();

        assert!(records.len() == 2);
        assert!(records[0] == State { id: "q0".to_string(), is_initial: true, is_accepting: false });
        assert!(records[1] == State { id: "q1".to_string(), is_initial: false, is_accepting: true });
    }

    #[test]
    fn can_query_transitions_from_a_state() {
        let automaton = two_state_automaton();

        assert!(automaton.transitions_from("q0").count() == 1);
        assert!(automaton.transitions_from("q1").count() == 0);
    }

    #[test]
    fn epsilon_labels_display_as_epsilon() {
        assert!(format!("{}", Label::Epsilon) == "ε");
        assert!(format!("{}", Label::Symbol('a')) == "a");
    }

    #[test]
    fn display_lists_states_and_transitions() {
        let rendered = format!("{}", two_state_automaton());

        assert!(rendered.contains("States: 2"));
        assert!(rendered.contains("Initial: q0"));
        assert!(rendered.contains("Accepting: q1"));
        assert!(rendered.contains("q0 -> q1 (a)"));
    }
}
