//! Puzzle letter representation.

use std::fmt::{self, Display};

/// A puzzle letter, standing for one unknown digit.
///
/// Letters are ASCII alphabetic characters, normalized to uppercase so that
/// `s` and `S` denote the same unknown.
///
/// # Examples
///
/// ```
/// use cryptarith_core::Letter;
///
/// let letter = Letter::new('s').unwrap();
/// assert_eq!(letter.as_char(), 'S');
/// assert_eq!(Letter::new('S'), Some(letter));
///
/// assert_eq!(Letter::new('1'), None);
/// assert_eq!(Letter::new('+'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Creates a letter from a character.
    ///
    /// Returns `None` if `ch` is not an ASCII letter.
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        let byte = u8::try_from(ch).ok()?;
        byte.is_ascii_alphabetic().then(|| Self(byte.to_ascii_uppercase()))
    }

    /// Returns the uppercase character of this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
