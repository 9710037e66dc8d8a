//! Numeric base of a puzzle.

use std::{fmt, str::FromStr};

use crate::BaseError;

const DIGIT_CHARS: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz@#";

/// The numeric base letters are interpreted in.
///
/// Each letter takes a digit in `0..base`. Bases from 2 to 64 are supported;
/// the default is decimal.
///
/// # Examples
///
/// ```
/// use cryptarith_core::Base;
///
/// let base = Base::new(16)?;
/// assert_eq!(base.get(), 16);
/// assert_eq!(base.max_digit(), 15);
/// assert_eq!(base.format(255), "FF");
///
/// assert_eq!(Base::default(), Base::DECIMAL);
/// assert!(Base::new(1).is_err());
/// # Ok::<(), cryptarith_core::BaseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base(u32);

impl Base {
    /// Smallest supported base.
    pub const MIN: u32 = 2;
    /// Largest supported base.
    pub const MAX: u32 = 64;
    /// Base 10.
    pub const DECIMAL: Self = Self(10);

    /// Creates a base, validating its range.
    ///
    /// # Errors
    ///
    /// Returns [`BaseError::OutOfRange`] unless `value` is within
    /// [`Base::MIN`]..=[`Base::MAX`].
    pub fn new(value: u32) -> Result<Self, BaseError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BaseError::OutOfRange { value })
        }
    }

    /// Returns the numeric value of the base.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the largest digit, `base - 1`.
    #[must_use]
    pub fn max_digit(self) -> i64 {
        i64::from(self.0) - 1
    }

    /// Returns `true` if `count` letters can take pairwise distinct digits.
    #[must_use]
    pub fn has_distinct_digits_for(self, count: usize) -> bool {
        usize::try_from(self.0).is_ok_and(|digits| count <= digits)
    }

    /// Formats a non-negative value using this base's digits.
    ///
    /// Digits above 9 are written `A`-`Z`, then `a`-`z`, then `@` and `#`.
    #[must_use]
    pub fn format(self, mut value: u64) -> String {
        let radix = u64::from(self.0);
        let mut digits = Vec::new();
        loop {
            // `value % radix < 64` since the radix never exceeds 64.
            #[allow(clippy::cast_possible_truncation)]
            digits.push(DIGIT_CHARS[(value % radix) as usize]);
            value /= radix;
            if value == 0 {
                break;
            }
        }
        digits.iter().rev().map(|&b| char::from(b)).collect()
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Base {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse().map_err(BaseError::Parse)?;
        Self::new(value)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> u32 {
        base.0
    }
}
