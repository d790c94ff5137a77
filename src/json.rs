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
//! # JSON interchange
//!
//! Reads and writes the JSON shape used to describe automata at the boundary:
//!
//! ```text
//! {
//!   "states": [ { "id": "q0", "isInitial": true, "isAccepting": false }, "q1" ],
//!   "transitions": [ { "from": "q0", "to": "q1", "symbol": "a" } ],
//!   "alphabet": ["a"],
//!   "initialState": "q0",
//!   "acceptingStates": ["q1"]
//! }
//! ```
//!
//! States may be written as bare id strings or as full records. The top-level `initialState`
//! and `acceptingStates` entries are the source of truth either way; flags on state records
//! are a redundant view and are not consulted. Transition symbols are single characters, with
//! `ε` standing for the empty-string label. A document that does not have this structure is
//! rejected with a single descriptive message before any conversion sees it.
//!

use std::collections::BTreeSet;

use super::automaton::*;
use super::error::*;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AutomatonRepr {
    states: Vec<StateRepr>,
    transitions: Vec<TransitionRepr>,
    alphabet: Vec<String>,
    initial_state: String,
    accepting_states: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StateRepr {
    #[serde(rename_all = "camelCase")]
    Record {
        id: String,
        #[serde(default)]
        is_initial: Option<bool>,
        #[serde(default)]
        is_accepting: Option<bool>,
    },

    Id(String),
}

#[derive(Serialize, Deserialize)]
struct TransitionRepr {
    from: String,
    to: String,
    symbol: String,
}

///
/// Reads an automaton from its JSON interchange form
///
pub fn automaton_from_json(json: &str) -> ConversionResult<Automaton> {
    let repr: AutomatonRepr = serde_json::from_str(json)
        .map_err(|error| ConversionError::InvalidAutomaton(error.to_string()))?;

    let mut states = BTreeSet::new();
    for state in repr.states {
        let id = match state {
            StateRepr::Record { id, .. } => id,
            StateRepr::Id(id)            => id,
        };
        states.insert(id);
    }

    let mut alphabet = BTreeSet::new();
    for symbol in repr.alphabet.iter() {
        let ch = single_symbol(symbol)?;
        if ch == EPSILON {
            return Err(ConversionError::InvalidAutomaton("the alphabet must not contain ε".to_string()));
        }
        alphabet.insert(ch);
    }

    let mut transitions = vec![];
    for transition in repr.transitions {
        let label = transition_label(&transition.symbol)?;
        transitions.push(Transition::new(transition.from, transition.to, label));
    }

    Ok(Automaton {
        states:           states,
        transitions:      transitions,
        alphabet:         alphabet,
        initial_state:    repr.initial_state,
        accepting_states: repr.accepting_states.into_iter().collect(),
    })
}

///
/// Writes an automaton as pretty-printed JSON in the same shape `automaton_from_json` accepts,
/// with states written as full records
///
pub fn automaton_to_json(automaton: &Automaton) -> ConversionResult<String> {
    let repr = AutomatonRepr {
        states: automaton.state_records().into_iter()
            .map(|record| StateRepr::Record {
                id:           record.id,
                is_initial:   Some(record.is_initial),
                is_accepting: Some(record.is_accepting),
            })
            .collect(),

        transitions: automaton.transitions.iter()
            .map(|transition| TransitionRepr {
                from:   transition.from.clone(),
                to:     transition.to.clone(),
                symbol: transition.label.to_string(),
            })
            .collect(),

        alphabet:         automaton.alphabet.iter().map(|ch| ch.to_string()).collect(),
        initial_state:    automaton.initial_state.clone(),
        accepting_states: automaton.accepting_states.iter().cloned().collect(),
    };

    serde_json::to_string_pretty(&repr).map_err(|error| ConversionError::Serialization(error.to_string()))
}

fn single_symbol(symbol: &str) -> ConversionResult<char> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _                => Err(ConversionError::InvalidAutomaton(format!("symbol {:?} must be a single character", symbol))),
    }
}

fn transition_label(symbol: &str) -> ConversionResult<Label> {
    let ch = single_symbol(symbol)?;
    if ch == EPSILON {
        Ok(Label::Epsilon)
    } else {
        Ok(Label::Symbol(ch))
    }
}
