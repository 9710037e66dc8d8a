//! Integer variable domains.

use std::fmt::{self, Display};

use crate::Inconsistency;

/// Values strictly below this bound can be tracked individually.
const MASK_BITS: i64 = 64;

/// The set of values a variable may still take.
///
/// Every domain has inclusive bounds. Domains that lie within `0..64`, such as
/// digit variables, also keep a bit mask so that single interior values can be
/// removed. Wider domains are plain intervals: removing an interior value from
/// them has no effect.
///
/// # Examples
///
/// ```
/// use cryptarith_solver::Domain;
///
/// let digits = Domain::new(0, 9);
/// assert_eq!(digits.size(), 10);
/// assert!(digits.contains(5));
///
/// let wide = Domain::new(0, i64::MAX);
/// assert!(!wide.is_fixed());
/// assert_eq!(wide.min(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    min: i64,
    max: i64,
    mask: Option<u64>,
}

impl Domain {
    /// Creates the domain `min..=max`.
    ///
    /// The caller guarantees `min <= max`.
    #[must_use]
    pub fn new(min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "empty domain {min}..={max}");
        let mask = (min >= 0 && max < MASK_BITS).then(|| range_mask(min, max));
        Self { min, max, mask }
    }

    /// Returns the smallest remaining value.
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Returns the largest remaining value.
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Returns the bit mask of remaining values, for domains within `0..64`.
    #[must_use]
    pub const fn mask(&self) -> Option<u64> {
        self.mask
    }

    /// Returns `true` if exactly one value remains.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Returns the value if the domain is fixed.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        if self.is_fixed() {
            Some(self.min)
        } else {
            None
        }
    }

    /// Returns the number of remaining values.
    #[must_use]
    pub fn size(&self) -> u128 {
        match self.mask {
            Some(mask) => u128::from(mask.count_ones()),
            None => self.span(),
        }
    }

    /// Returns the number of integers between the bounds.
    fn span(&self) -> u128 {
        (i128::from(self.max) - i128::from(self.min) + 1).unsigned_abs()
    }

    /// Returns `true` if `value` is still in the domain.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        self.mask.is_none_or(|mask| mask & bit(value) != 0)
    }

    /// Iterates over the remaining values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        (self.min..=self.max).filter(|&value| self.contains(value))
    }

    /// Removes a value.
    ///
    /// Returns `Ok(true)` if the domain changed.
    pub(crate) fn remove(&mut self, value: i64) -> Result<bool, Inconsistency> {
        if !self.contains(value) {
            return Ok(false);
        }
        if value == self.min {
            return self.set_min(value.checked_add(1).ok_or(Inconsistency)?);
        }
        if value == self.max {
            return self.set_max(value.checked_sub(1).ok_or(Inconsistency)?);
        }
        match &mut self.mask {
            Some(mask) => {
                *mask &= !bit(value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Raises the lower bound to `value`.
    pub(crate) fn set_min(&mut self, value: i64) -> Result<bool, Inconsistency> {
        if value <= self.min {
            return Ok(false);
        }
        if value > self.max {
            return Err(Inconsistency);
        }
        self.min = value;
        if let Some(mask) = &mut self.mask {
            *mask &= !(bit(value) - 1);
        }
        self.normalize()?;
        Ok(true)
    }

    /// Lowers the upper bound to `value`.
    pub(crate) fn set_max(&mut self, value: i64) -> Result<bool, Inconsistency> {
        if value >= self.max {
            return Ok(false);
        }
        if value < self.min {
            return Err(Inconsistency);
        }
        self.max = value;
        if let Some(mask) = &mut self.mask {
            *mask &= range_mask(0, value);
        }
        self.normalize()?;
        Ok(true)
    }

    /// Reduces the domain to the single value `value`.
    pub(crate) fn assign(&mut self, value: i64) -> Result<bool, Inconsistency> {
        if !self.contains(value) {
            return Err(Inconsistency);
        }
        if self.is_fixed() {
            return Ok(false);
        }
        self.min = value;
        self.max = value;
        if let Some(mask) = &mut self.mask {
            *mask = bit(value);
        }
        Ok(true)
    }

    /// Moves the bounds onto the lowest and highest values left in the mask.
    fn normalize(&mut self) -> Result<(), Inconsistency> {
        if let Some(mask) = self.mask {
            if mask == 0 {
                return Err(Inconsistency);
            }
            self.min = i64::from(mask.trailing_zeros());
            self.max = i64::from(63 - mask.leading_zeros());
        }
        Ok(())
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.value() {
            return write!(f, "{value}");
        }
        if self.size() == self.span() {
            return write!(f, "{}..={}", self.min, self.max);
        }
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

/// Bit for `value`, which must lie in `0..64`.
fn bit(value: i64) -> u64 {
    debug_assert!((0..MASK_BITS).contains(&value));
    1 << value
}

/// Mask with the bits `min..=max` set, both within `0..64`.
fn range_mask(min: i64, max: i64) -> u64 {
    (u64::MAX >> (63 - max)) & (u64::MAX << min)
}
