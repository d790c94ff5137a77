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

use std::collections::BTreeSet;

use super::automaton::*;
use super::subset_construction::*;

///
/// True when the automaton accepts the input string
///
/// Works on NFAs and DFAs alike: the simulation tracks the set of states the machine could be
/// in, following ε-transitions as it goes, and accepts when the set after the last symbol
/// contains an accepting state. Once the set runs empty nothing can accept, so the rest of the
/// input is not examined.
///
pub fn accepts(automaton: &Automaton, input: &str) -> bool {
    let mut current = BTreeSet::new();
    current.insert(automaton.initial_state.clone());
    current = epsilon_closure(automaton, &current);

    for symbol in input.chars() {
        current = epsilon_closure(automaton, &symbol_move(automaton, &current, symbol));
        if current.is_empty() {
            return false;
        }
    }

    current.iter().any(|state| automaton.is_accepting(state))
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::convert::*;

    #[test]
    fn follows_nondeterministic_branches() {
        let nfa = regex_to_nfa("a|ab").unwrap();

        assert!(accepts(&nfa, "a"));
        assert!(accepts(&nfa, "ab"));
        assert!(!accepts(&nfa, "b"));
        assert!(!accepts(&nfa, "abb"));
    }

    #[test]
    fn symbols_outside_the_alphabet_reject() {
        let nfa = regex_to_nfa("a*").unwrap();

        assert!(accepts(&nfa, "aa"));
        assert!(!accepts(&nfa, "ax"));
    }

    #[test]
    fn the_empty_string_is_accepted_only_from_an_accepting_closure() {
        let starred = regex_to_nfa("a*").unwrap();
        let plain   = regex_to_nfa("a").unwrap();

        assert!(accepts(&starred, ""));
        assert!(!accepts(&plain, ""));
    }
}
