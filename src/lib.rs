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
//! # Kleene
//!
//! Kleene is a library for converting between the standard representations of a regular
//! language: regular expressions, nondeterministic finite automata and deterministic finite
//! automata. Regular expressions become NFAs by Thompson's construction, NFAs become DFAs by
//! the subset construction, and automata become regular expressions again by state
//! elimination:
//!
//! ```
//! # use kleene::*;
//! let nfa = regex_to_nfa("a*b").unwrap();
//! let dfa = nfa_to_dfa(&nfa).unwrap();
//!
//! assert!(accepts(&dfa, "aaab"));
//! assert!(!accepts(&dfa, "ba"));
//!
//! let regex = dfa_to_regex(&dfa).unwrap();
//! assert!(accepts(&regex_to_nfa(&regex).unwrap(), "aaab"));
//! ```
//!
//! Automata can also be read from and written to a JSON interchange form, and every
//! conversion checks its output against configurable size ceilings rather than hanging on
//! input with an exponential blow-up.
//!

#[macro_use]
extern crate serde_derive;

pub use self::automaton::*;
pub use self::convert::*;
pub use self::error::*;
pub use self::json::*;
pub use self::regular_expression::*;
pub use self::simulate::*;
pub use self::state_elimination::*;
pub use self::subset_construction::*;
pub use self::thompson::*;

pub mod automaton;
pub mod convert;
pub mod error;
pub mod json;
pub mod regular_expression;
pub mod simulate;
pub mod state_elimination;
pub mod subset_construction;
pub mod thompson;
