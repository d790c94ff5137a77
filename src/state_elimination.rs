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
//! # State elimination
//!
//! Converts an automaton into a regular expression denoting the same language. Two sentinel
//! states are added first: `start`, ε-connected to the initial state, and `end`, ε-connected
//! from every accepting state. The original states are then removed one at a time; removing a
//! state folds every path through it into a direct label `in·(self)*·out` on the surviving
//! states. Labels between the same ordered pair of states are always merged into a union, so
//! parallel edges never exist. Once every original state is gone the label on the single
//! remaining `start` to `end` edge is the answer; if no such edge survives, no string reaches
//! an accepting state and the result is the empty-language marker `∅`.
//!
//! The elimination order is ascending state-id order. Order changes the surface form of the
//! result, sometimes dramatically, but never the language it denotes.
//!

use std::collections::BTreeMap;
use std::mem;

use super::automaton::*;
use super::error::*;

///
/// The marker returned for an automaton that accepts nothing at all
///
pub const EMPTY_LANGUAGE: &str = "∅";

const EPSILON_LABEL: &str = "ε";

/// Labels keyed by (from, to); the map structure is what makes parallel edges impossible
type EdgeMap = BTreeMap<(String, String), String>;

///
/// Converts an automaton into a regular expression by eliminating its states
///
/// The input does not have to be deterministic: any mix of symbol and ε labels works. Every
/// synthesized transition counts against the transition ceiling in `limits`.
///
pub fn eliminate(automaton: &Automaton, limits: &ConversionLimits) -> ConversionResult<String> {
    let start = sentinel_id(automaton, "start");
    let end   = sentinel_id(automaton, "end");

    // Seed the edge map from the automaton; parallel transitions merge into unions right away
    let mut edges = EdgeMap::new();
    for transition in automaton.transitions.iter() {
        merge_edge(&mut edges, transition.from.clone(), transition.to.clone(), transition.label.to_string());
    }

    merge_edge(&mut edges, start.clone(), automaton.initial_state.clone(), EPSILON_LABEL.to_string());
    for accepting in automaton.accepting_states.iter() {
        merge_edge(&mut edges, accepting.clone(), end.clone(), EPSILON_LABEL.to_string());
    }

    let mut generated = 0;
    for state in automaton.states.iter() {
        generated += eliminate_state(&mut edges, state);
        limits.check_transitions(generated)?;
    }

    match edges.remove(&(start, end)) {
        Some(label) => Ok(label),
        None        => Ok(EMPTY_LANGUAGE.to_string()),
    }
}

///
/// Removes one state, folding every incoming/self-loop/outgoing path through it into direct
/// labels between the surviving states. Returns the number of transitions synthesized.
///
fn eliminate_state(edges: &mut EdgeMap, state: &str) -> usize {
    let self_loop = edges.remove(&(state.to_string(), state.to_string()));
    let loop_label = self_loop.map(|label| star_label(&label));

    // Split the remaining edges into incoming, outgoing and untouched
    let mut incoming = vec![];
    let mut outgoing = vec![];

    let all_edges = mem::replace(edges, EdgeMap::new());
    for ((from, to), label) in all_edges {
        if to == state {
            incoming.push((from, label));
        } else if from == state {
            outgoing.push((to, label));
        } else {
            edges.insert((from, to), label);
        }
    }

    for &(ref from, ref label_in) in incoming.iter() {
        for &(ref to, ref label_out) in outgoing.iter() {
            let through = match loop_label {
                Some(ref loop_label) => concat_labels(&concat_labels(label_in, loop_label), label_out),
                None                 => concat_labels(label_in, label_out),
            };

            // A path that starts and ends on the same survivor becomes a self-loop there,
            // starred in its turn when that state is eliminated
            merge_edge(edges, from.clone(), to.clone(), through);
        }
    }

    incoming.len() * outgoing.len()
}

fn merge_edge(edges: &mut EdgeMap, from: String, to: String, label: String) {
    let key = (from, to);
    let merged = match edges.remove(&key) {
        Some(existing) => union_labels(&existing, &label),
        None           => label,
    };
    edges.insert(key, merged);
}

fn sentinel_id(automaton: &Automaton, base: &str) -> String {
    let mut id = base.to_string();
    while automaton.states.contains(&id) {
        id.push('_');
    }
    id
}

// -- label algebra ---------------------------------------------------------------------------
//
// Union results are always parenthesized, so no stored label ever carries a bare top-level `|`
// and concatenation is plain juxtaposition.

///
/// Concatenates two path labels; ε is the unit and disappears
///
fn concat_labels(first: &str, second: &str) -> String {
    if first == EPSILON_LABEL {
        second.to_string()
    } else if second == EPSILON_LABEL {
        first.to_string()
    } else {
        format!("{}{}", first, second)
    }
}

///
/// Unions two labels; identical labels merge into one, distinct labels become an explicit
/// alternative
///
fn union_labels(existing: &str, added: &str) -> String {
    if existing == added {
        existing.to_string()
    } else {
        format!("({}|{})", existing, added)
    }
}

///
/// Stars a label; ε* stays ε, everything else is grouped as needed and suffixed with `*`
///
fn star_label(label: &str) -> String {
    if label == EPSILON_LABEL {
        EPSILON_LABEL.to_string()
    } else {
        format!("{}*", grouped(label))
    }
}

///
/// Brackets a label unless it is a single symbol or already one bracketed group
///
fn grouped(label: &str) -> String {
    if label.chars().count() == 1 || is_enclosed(label) {
        label.to_string()
    } else {
        format!("({})", label)
    }
}

fn is_enclosed(label: &str) -> bool {
    if !label.starts_with('(') || !label.ends_with(')') {
        return false;
    }

    let mut depth = 0;
    for (index, ch) in label.char_indices() {
        if ch == '(' {
            depth += 1;
        }
        if ch == ')' {
            depth -= 1;
            if depth == 0 {
                // The opening bracket closes here; the label is one group only if this is the end
                return index == label.len() - 1;
            }
        }
    }

    false
}
