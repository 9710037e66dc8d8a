//! Words made of puzzle letters.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Letter, ParseErrorKind};

/// A non-empty sequence of letters, most significant letter first.
///
/// A word is one operand of an equation. Its numeric value is the
/// positional value of its letters' digits in the puzzle's base.
///
/// # Examples
///
/// ```
/// use cryptarith_core::{Letter, Word};
///
/// let word: Word = "money".parse()?;
/// assert_eq!(word.to_string(), "MONEY");
/// assert_eq!(word.len(), 5);
/// assert_eq!(word.leading(), Letter::new('M').unwrap());
/// # Ok::<(), cryptarith_core::ParseErrorKind>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

#[allow(clippy::len_without_is_empty)]
impl Word {
    /// Creates a word from its letters.
    ///
    /// Returns `None` if `letters` is empty.
    #[must_use]
    pub fn new(letters: Vec<Letter>) -> Option<Self> {
        (!letters.is_empty()).then_some(Self { letters })
    }

    /// Builds a word from text already known to be a valid word.
    ///
    /// Non-letter characters are dropped.
    pub(crate) fn from_static(text: &'static str) -> Self {
        Self {
            letters: text.chars().filter_map(Letter::new).collect(),
        }
    }

    /// Returns the letters of this word, most significant first.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns the most significant letter, which must not stand for zero.
    #[must_use]
    pub fn leading(&self) -> Letter {
        self.letters[0]
    }
}

impl FromStr for Word {
    type Err = ParseErrorKind;

    /// Parses a word, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .trim()
            .chars()
            .map(|ch| Letter::new(ch).ok_or(ParseErrorKind::InvalidLetter { ch }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(letters).ok_or(ParseErrorKind::EmptyWord)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}
