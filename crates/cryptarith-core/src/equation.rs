//! Puzzle equations.

use std::fmt::{self, Display};

use crate::{Letter, Word};

/// One puzzle line: one or more addends followed by a single result word.
///
/// The equation `SEND+MORE=MONEY` holds the words `SEND`, `MORE` and
/// `MONEY`, in that order. An equation always has at least two words.
///
/// # Examples
///
/// ```
/// use cryptarith_core::{Equation, parse_line};
///
/// let equation: Equation = parse_line("HE+SEES+THE=LIGHT")?;
/// assert_eq!(equation.addends().len(), 3);
/// assert_eq!(equation.result().to_string(), "LIGHT");
/// assert_eq!(equation.to_string(), "HE+SEES+THE=LIGHT");
/// # Ok::<(), cryptarith_core::ParseErrorKind>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    words: Vec<Word>,
}

impl Equation {
    /// Creates an equation from its words, the last one being the result.
    ///
    /// Returns `None` if fewer than two words are given.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        (words.len() >= 2).then_some(Self { words })
    }

    /// Builds an equation from text already known to be well-formed.
    pub(crate) fn from_static(text: &'static str) -> Self {
        Self {
            words: text.split(['+', '=']).map(Word::from_static).collect(),
        }
    }

    /// Returns all words in order, the result last.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the addend words.
    #[must_use]
    pub fn addends(&self) -> &[Word] {
        &self.words[..self.words.len() - 1]
    }

    /// Returns the result word.
    #[must_use]
    pub fn result(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Iterates over every letter occurrence, word by word.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.words.iter().flat_map(|w| w.letters().iter().copied())
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.addends().iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            Display::fmt(word, f)?;
        }
        write!(f, "={}", self.result())
    }
}
