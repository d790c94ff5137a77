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
//! # Errors and limits
//!
//! Every conversion returns a `ConversionResult`. Syntax problems in a regular expression are
//! reported with the position of the offending character rather than silently producing a wrong
//! automaton. The subset construction and state elimination can both blow up exponentially on
//! adversarial input, so they check their output size against a `ConversionLimits` value and
//! fail fast instead of hanging.
//!

use thiserror::Error;

///
/// Errors reported by the conversion operations
///
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// A `(` with no matching `)`, or a stray `)`
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    /// A `*` with no atom in front of it
    #[error("`*` has nothing to repeat at position {position}")]
    NothingToRepeat { position: usize },

    /// A character outside the supported syntax (alphanumerics, `|`, `*`, parentheses and ε)
    #[error("unsupported character {found:?} at position {position}")]
    UnsupportedCharacter { found: char, position: usize },

    /// The pattern stopped where another atom was required
    #[error("unexpected end of pattern")]
    UnexpectedEnd,

    /// The subset construction generated more states than the configured ceiling
    #[error("state limit exceeded: {states} states (max: {max})")]
    StateLimitExceeded { states: usize, max: usize },

    /// State elimination generated more transitions than the configured ceiling
    #[error("transition limit exceeded: {transitions} transitions (max: {max})")]
    TransitionLimitExceeded { transitions: usize, max: usize },

    /// An automaton description that does not have the required structure
    #[error("invalid automaton: {0}")]
    InvalidAutomaton(String),

    /// An automaton that could not be written out
    #[error("could not serialize automaton: {0}")]
    Serialization(String),
}

///
/// Result type for the conversion operations
///
pub type ConversionResult<T> = Result<T, ConversionError>;

///
/// Ceilings applied while generating automata and expressions
///
/// Both the subset construction and state elimination have exponential worst cases. The ceilings
/// here bound the amount of output they may generate before reporting failure. A ceiling of 0
/// means unlimited.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionLimits {
    /// Maximum number of states the subset construction may create (0 = unlimited)
    pub max_states: usize,

    /// Maximum number of transitions state elimination may synthesize (0 = unlimited)
    pub max_transitions: usize,
}

impl Default for ConversionLimits {
    fn default() -> ConversionLimits {
        ConversionLimits { max_states: 1024, max_transitions: 8192 }
    }
}

impl ConversionLimits {
    ///
    /// Limits that never trip; conversions may run until memory is exhausted
    ///
    pub fn unlimited() -> ConversionLimits {
        ConversionLimits { max_states: 0, max_transitions: 0 }
    }

    pub fn check_states(&self, states: usize) -> ConversionResult<()> {
        if self.max_states != 0 && states > self.max_states {
            Err(ConversionError::StateLimitExceeded { states: states, max: self.max_states })
        } else {
            Ok(())
        }
    }

    pub fn check_transitions(&self, transitions: usize) -> ConversionResult<()> {
        if self.max_transitions != 0 && transitions > self.max_transitions {
            Err(ConversionError::TransitionLimitExceeded { transitions: transitions, max: self.max_transitions })
        } else {
            Ok(())
        }
    }
}
