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
//! # Conversions
//!
//! The four conversions between representations of a regular language, as plain functions.
//! Each call is an independent, synchronous computation over its own working state; nothing is
//! shared between calls. The plain variants apply the default `ConversionLimits`; the
//! `_with_limits` variants take explicit ceilings.
//!
//! ```
//! # use kleene::*;
//! let nfa = regex_to_nfa("a*b").unwrap();
//! let dfa = nfa_to_dfa(&nfa).unwrap();
//!
//! assert!(accepts(&dfa, "aaab"));
//! assert!(!accepts(&dfa, "ba"));
//! ```
//!

use super::automaton::*;
use super::error::*;
use super::regular_expression::*;
use super::state_elimination;
use super::subset_construction;
use super::thompson::*;

///
/// Converts a regular expression into an NFA using Thompson's construction
///
pub fn regex_to_nfa(pattern: &str) -> ConversionResult<Automaton> {
    let regex: Regex = pattern.parse()?;
    Ok(ThompsonBuilder::build(&regex))
}

///
/// Converts an NFA into an equivalent DFA using the subset construction
///
pub fn nfa_to_dfa(nfa: &Automaton) -> ConversionResult<Automaton> {
    nfa_to_dfa_with_limits(nfa, &ConversionLimits::default())
}

pub fn nfa_to_dfa_with_limits(nfa: &Automaton, limits: &ConversionLimits) -> ConversionResult<Automaton> {
    subset_construction::subset_construct(nfa, limits)
}

///
/// Converts a DFA (or any automaton) into a regular expression by state elimination
///
pub fn dfa_to_regex(dfa: &Automaton) -> ConversionResult<String> {
    dfa_to_regex_with_limits(dfa, &ConversionLimits::default())
}

pub fn dfa_to_regex_with_limits(dfa: &Automaton, limits: &ConversionLimits) -> ConversionResult<String> {
    state_elimination::eliminate(dfa, limits)
}

///
/// Converts an NFA straight to a regular expression: the subset construction followed by state
/// elimination, with no logic of its own
///
pub fn nfa_to_regex(nfa: &Automaton) -> ConversionResult<String> {
    nfa_to_regex_with_limits(nfa, &ConversionLimits::default())
}

pub fn nfa_to_regex_with_limits(nfa: &Automaton, limits: &ConversionLimits) -> ConversionResult<String> {
    let dfa = nfa_to_dfa_with_limits(nfa, limits)?;
    dfa_to_regex_with_limits(&dfa, limits)
}
