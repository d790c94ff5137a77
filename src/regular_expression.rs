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
//! # Regular expressions
//!
//! `Regex` is the parsed form of a regular expression over single-character symbols. The
//! supported syntax is alphanumeric literals, implicit concatenation, `|` for union, a postfix
//! `*` for the Kleene star, parentheses for grouping, and `ε` as an explicit empty-string atom
//! (an empty sub-pattern, as in `a|`, means the same thing). Precedence from loosest to
//! tightest binding is union, concatenation, star.
//!
//! Parsing builds an explicit syntax tree before anything is compiled, so a `|` inside a group
//! binds inside that group and nowhere else. Patterns outside the syntax are rejected with a
//! positioned error rather than parsed into something that looks plausible but matches the
//! wrong language:
//!
//! ```
//! # use kleene::*;
//! let regex: Regex = "(a|b)*abb".parse().unwrap();
//! assert!(regex.alphabet().len() == 2);
//!
//! let error = "(a|b".parse::<Regex>();
//! assert!(error == Err(ConversionError::UnbalancedParenthesis { position: 0 }));
//! ```
//!

use std::collections::BTreeSet;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use super::automaton::EPSILON;
use super::error::*;

///
/// A parsed regular expression
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Regex {
    /// Matches the empty string
    Empty,

    /// Matches a single symbol
    Literal(char),

    /// Matches a sequence of sub-expressions in order
    Concat(Vec<Regex>),

    /// Matches any one of a set of sub-expressions
    Union(Vec<Regex>),

    /// Matches zero or more repetitions of a sub-expression
    Star(Box<Regex>),
}

impl Regex {
    ///
    /// The symbols that appear literally in this expression
    ///
    pub fn alphabet(&self) -> BTreeSet<char> {
        let mut symbols = BTreeSet::new();
        self.collect_alphabet(&mut symbols);
        symbols
    }

    fn collect_alphabet(&self, symbols: &mut BTreeSet<char>) {
        match self {
            &Regex::Empty           => { },
            &Regex::Literal(ch)     => { symbols.insert(ch); },
            &Regex::Star(ref inner) => inner.collect_alphabet(symbols),

            &Regex::Concat(ref parts) | &Regex::Union(ref parts) => {
                for part in parts {
                    part.collect_alphabet(symbols);
                }
            },
        }
    }
}

///
/// Recursive-descent parser over the pattern characters
///
struct Parser {
    chars: Vec<char>,
    position: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.peek();
        if next.is_some() {
            self.position += 1;
        }
        next
    }

    // union := concat ('|' concat)*
    fn parse_union(&mut self) -> ConversionResult<Regex> {
        let mut branches = vec![self.parse_concat()?];

        while self.peek() == Some('|') {
            self.bump();
            branches.push(self.parse_concat()?);
        }

        if branches.len() == 1 {
            Ok(branches.remove(0))
        } else {
            Ok(Regex::Union(branches))
        }
    }

    // concat := postfix*; an empty sequence matches the empty string
    fn parse_concat(&mut self) -> ConversionResult<Regex> {
        let mut parts = vec![];

        loop {
            match self.peek() {
                None | Some('|') | Some(')') => break,
                _                            => parts.push(self.parse_postfix()?),
            }
        }

        match parts.len() {
            0 => Ok(Regex::Empty),
            1 => Ok(parts.remove(0)),
            _ => Ok(Regex::Concat(parts)),
        }
    }

    // postfix := atom '*'*
    fn parse_postfix(&mut self) -> ConversionResult<Regex> {
        let mut parsed = self.parse_atom()?;

        while self.peek() == Some('*') {
            self.bump();
            parsed = Regex::Star(Box::new(parsed));
        }

        Ok(parsed)
    }

    // atom := literal | 'ε' | '(' union ')'
    fn parse_atom(&mut self) -> ConversionResult<Regex> {
        let position = self.position;

        match self.bump() {
            Some('(') => {
                let inner = self.parse_union()?;
                match self.bump() {
                    Some(')') => Ok(inner),
                    _         => Err(ConversionError::UnbalancedParenthesis { position: position }),
                }
            },

            Some('*')                                => Err(ConversionError::NothingToRepeat { position: position }),
            Some(ch) if ch == EPSILON                => Ok(Regex::Empty),
            Some(ch) if ch.is_ascii_alphanumeric()   => Ok(Regex::Literal(ch)),
            Some(ch)                                 => Err(ConversionError::UnsupportedCharacter { found: ch, position: position }),
            None                                     => Err(ConversionError::UnexpectedEnd),
        }
    }
}

impl FromStr for Regex {
    type Err = ConversionError;

    fn from_str(pattern: &str) -> ConversionResult<Regex> {
        let mut parser = Parser { chars: pattern.chars().collect(), position: 0 };
        let parsed = parser.parse_union()?;

        // The only way parsing can stop early is on a ')' with no matching '('
        if parser.position < parser.chars.len() {
            return Err(ConversionError::UnbalancedParenthesis { position: parser.position });
        }

        Ok(parsed)
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            &Regex::Empty       => f.write_fmt(format_args!("{}", EPSILON)),
            &Regex::Literal(ch) => f.write_fmt(format_args!("{}", ch)),

            &Regex::Concat(ref parts) => {
                for part in parts {
                    // Union binds looser than concatenation, so union operands need brackets here
                    match part {
                        &Regex::Union(_) => f.write_fmt(format_args!("({})", part))?,
                        _                => f.write_fmt(format_args!("{}", part))?,
                    }
                }
                Ok(())
            },

            &Regex::Union(ref branches) => {
                for (index, branch) in branches.iter().enumerate() {
                    if index > 0 {
                        f.write_str("|")?;
                    }
                    f.write_fmt(format_args!("{}", branch))?;
                }
                Ok(())
            },

            &Regex::Star(ref inner) => {
                match **inner {
                    Regex::Empty | Regex::Literal(_) => f.write_fmt(format_args!("{}*", inner)),
                    _                                => f.write_fmt(format_args!("({})*", inner)),
                }
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_parse_a_single_literal() {
        let regex: Regex = "a".parse().unwrap();

        assert!(regex == Regex::Literal('a'));
    }

    #[test]
    fn concatenation_binds_tighter_than_union() {
        let regex: Regex = "a|bc*".parse().unwrap();

        assert!(regex == Regex::Union(vec![
            Regex::Literal('a'),
            Regex::Concat(vec![
                Regex::Literal('b'),
                Regex::Star(Box::new(Regex::Literal('c'))),
            ]),
        ]));
    }

    #[test]
    fn unions_inside_groups_stay_inside_their_group() {
        let regex: Regex = "a(b|c)d".parse().unwrap();

        assert!(regex == Regex::Concat(vec![
            Regex::Literal('a'),
            Regex::Union(vec![Regex::Literal('b'), Regex::Literal('c')]),
            Regex::Literal('d'),
        ]));
    }

    #[test]
    fn star_applies_to_a_whole_group() {
        let regex: Regex = "(ab)*".parse().unwrap();

        assert!(regex == Regex::Star(Box::new(Regex::Concat(vec![
            Regex::Literal('a'),
            Regex::Literal('b'),
        ]))));
    }

    #[test]
    fn an_empty_pattern_matches_the_empty_string() {
        let regex: Regex = "".parse().unwrap();

        assert!(regex == Regex::Empty);
    }

    #[test]
    fn an_empty_union_branch_matches_the_empty_string() {
        let regex: Regex = "a|".parse().unwrap();

        assert!(regex == Regex::Union(vec![Regex::Literal('a'), Regex::Empty]));
    }

    #[test]
    fn epsilon_is_an_explicit_empty_atom() {
        let regex: Regex = "aε".parse().unwrap();

        assert!(regex == Regex::Concat(vec![Regex::Literal('a'), Regex::Empty]));
    }

    #[test]
    fn empty_groups_parse() {
        let regex: Regex = "()".parse().unwrap();

        assert!(regex == Regex::Empty);
    }

    #[test]
    fn unclosed_group_is_rejected() {
        let error = "(ab".parse::<Regex>();

        assert!(error == Err(ConversionError::UnbalancedParenthesis { position: 0 }));
    }

    #[test]
    fn stray_close_paren_is_rejected() {
        let error = "ab)".parse::<Regex>();

        assert!(error == Err(ConversionError::UnbalancedParenthesis { position: 2 }));
    }

    #[test]
    fn leading_star_is_rejected() {
        let error = "*a".parse::<Regex>();

        assert!(error == Err(ConversionError::NothingToRepeat { position: 0 }));
    }

    #[test]
    fn star_after_union_bar_is_rejected() {
        let error = "a|*b".parse::<Regex>();

        assert!(error == Err(ConversionError::NothingToRepeat { position: 2 }));
    }

    #[test]
    fn unsupported_characters_are_rejected() {
        let error = "a+b".parse::<Regex>();

        assert!(error == Err(ConversionError::UnsupportedCharacter { found: '+', position: 1 }));
    }

    #[test]
    fn alphabet_collects_distinct_literals() {
        let regex: Regex = "(a|b)*abb".parse().unwrap();
        let alphabet = regex.alphabet();

        assert!(alphabet == vec!['a', 'b'].into_iter().collect());
    }

    #[test]
    fn display_round_trips_through_the_parser() {
        for pattern in vec!["a|bc*", "(a|b)*abb", "a(b|c)d", "(ab)*", "ε"] {
            let regex: Regex = pattern.parse().unwrap();
            let rendered = format!("{}", regex);

            assert!(rendered.parse::<Regex>().unwrap() == regex);
        }
    }
}
