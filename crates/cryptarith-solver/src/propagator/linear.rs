use super::{BoxedPropagator, Propagator};
use crate::{Domains, Inconsistency, IntVar, ModelError};

/// Requires `c1*x1 + c2*x2 + ... + cn*xn = 0`.
///
/// Propagation is bounds consistent: each term is restricted to the values
/// that the bounds of the remaining terms can still balance. Arithmetic is
/// done in `i128`, which [`check_range`](Self::check_range) verifies is wide
/// enough for the domains the constraint is posted over.
#[derive(Debug, Clone)]
pub struct LinearEq {
    terms: Vec<(i64, IntVar)>,
}

impl LinearEq {
    /// Creates the constraint from `(coefficient, variable)` terms.
    ///
    /// Terms over the same variable are merged and zero coefficients dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LinearOverflow`] if merged coefficients overflow
    /// `i64`.
    pub fn new<I>(terms: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (i64, IntVar)>,
    {
        let mut merged: Vec<(i64, IntVar)> = Vec::new();
        for (coef, var) in terms {
            match merged.iter_mut().find(|(_, v)| *v == var) {
                Some((c, _)) => *c = c.checked_add(coef).ok_or(ModelError::LinearOverflow)?,
                None => merged.push((coef, var)),
            }
        }
        merged.retain(|&(coef, _)| coef != 0);
        Ok(Self { terms: merged })
    }

    /// Returns the merged terms.
    #[must_use]
    pub fn terms(&self) -> &[(i64, IntVar)] {
        &self.terms
    }

    /// Checks that every partial sum over `domains` fits in `i128`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LinearOverflow`] otherwise.
    pub fn check_range(&self, domains: &Domains) -> Result<(), ModelError> {
        let mut total: i128 = 0;
        for &(coef, var) in &self.terms {
            let domain = domains.get(var);
            let magnitude = i128::from(domain.min())
                .abs()
                .max(i128::from(domain.max()).abs());
            total = i128::from(coef)
                .abs()
                .checked_mul(magnitude)
                .and_then(|term| total.checked_add(term))
                .ok_or(ModelError::LinearOverflow)?;
        }
        Ok(())
    }

    fn term_bounds(coef: i64, domains: &Domains, var: IntVar) -> (i128, i128) {
        let domain = domains.get(var);
        let coef = i128::from(coef);
        let (lo, hi) = (coef * i128::from(domain.min()), coef * i128::from(domain.max()));
        if coef > 0 { (lo, hi) } else { (hi, lo) }
    }

    /// Runs one pass over all terms. Returns `Ok(true)` if a domain changed.
    fn narrow(&self, domains: &mut Domains) -> Result<bool, Inconsistency> {
        let (mut min_sum, mut max_sum) = (0_i128, 0_i128);
        for &(coef, var) in &self.terms {
            let (lo, hi) = Self::term_bounds(coef, domains, var);
            min_sum += lo;
            max_sum += hi;
        }
        if min_sum > 0 || max_sum < 0 {
            return Err(Inconsistency);
        }

        let mut changed = false;
        for &(coef, var) in &self.terms {
            let (term_min, term_max) = Self::term_bounds(coef, domains, var);
            // coef * var must lie in [-(rest max), -(rest min)]
            let lo = term_max - max_sum;
            let hi = term_min - min_sum;
            let c = i128::from(coef);
            let (new_min, new_max) = if c > 0 {
                (div_ceil(lo, c), div_floor(hi, c))
            } else {
                (div_ceil(hi, c), div_floor(lo, c))
            };
            changed |= tighten(domains, var, new_min, new_max)?;
        }
        Ok(changed)
    }
}

impl Propagator for LinearEq {
    fn name(&self) -> &'static str {
        "linear-eq"
    }

    fn clone_box(&self) -> BoxedPropagator {
        Box::new(self.clone())
    }

    fn vars(&self) -> Vec<IntVar> {
        self.terms.iter().map(|&(_, var)| var).collect()
    }

    fn propagate(&self, domains: &mut Domains) -> Result<(), Inconsistency> {
        while self.narrow(domains)? {}
        Ok(())
    }
}

/// Restricts `var` to `min..=max`, clamping the bounds to the `i64` range.
fn tighten(
    domains: &mut Domains,
    var: IntVar,
    min: i128,
    max: i128,
) -> Result<bool, Inconsistency> {
    if min > max {
        return Err(Inconsistency);
    }
    let raised = match i64::try_from(min) {
        Ok(min) => domains.set_min(var, min)?,
        Err(_) if min > 0 => return Err(Inconsistency),
        Err(_) => false,
    };
    let lowered = match i64::try_from(max) {
        Ok(max) => domains.set_max(var, max)?,
        Err(_) if max < 0 => return Err(Inconsistency),
        Err(_) => false,
    };
    Ok(raised || lowered)
}

fn div_floor(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

fn div_ceil(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && ((a < 0) == (b < 0)) {
        q + 1
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::propagator::testing::domains;

    #[test]
    fn test_merges_terms() {
        let x = IntVar::from_index(0);
        let y = IntVar::from_index(1);
        let eq = LinearEq::new([(2, x), (3, y), (-2, x), (1, y)]).unwrap();
        assert_eq!(eq.terms(), &[(4, y)]);
        assert_eq!(eq.vars(), vec![y]);
    }

    #[test]
    fn test_merge_overflow() {
        let x = IntVar::from_index(0);
        assert_eq!(
            LinearEq::new([(i64::MAX, x), (1, x)]).unwrap_err(),
            ModelError::LinearOverflow
        );
    }

    #[test]
    fn test_sum_narrows_bounds() {
        // x + y - z = 0 with x, y in 0..=9 and z = 15
        let (mut domains, vars) = domains(&[(0, 9), (0, 9), (15, 15)]);
        let eq = LinearEq::new([(1, vars[0]), (1, vars[1]), (-1, vars[2])]).unwrap();
        eq.propagate(&mut domains).unwrap();
        assert_eq!((domains.get(vars[0]).min(), domains.get(vars[0]).max()), (6, 9));
        assert_eq!((domains.get(vars[1]).min(), domains.get(vars[1]).max()), (6, 9));
    }

    #[test]
    fn test_weighted_sum_fixes_word_value() {
        // 10*a + b - w = 0 with a = 4, b = 2
        let (mut domains, vars) = domains(&[(4, 4), (2, 2), (0, i64::MAX)]);
        let eq = LinearEq::new([(10, vars[0]), (1, vars[1]), (-1, vars[2])]).unwrap();
        eq.propagate(&mut domains).unwrap();
        assert_eq!(domains.get(vars[2]).value(), Some(42));
    }

    #[test]
    fn test_weighted_sum_narrows_leading_digit() {
        // 10*a + b = w with w in 70..=79 forces a = 7
        let (mut domains, vars) = domains(&[(0, 9), (0, 9), (70, 79)]);
        let eq = LinearEq::new([(10, vars[0]), (1, vars[1]), (-1, vars[2])]).unwrap();
        eq.propagate(&mut domains).unwrap();
        assert_eq!(domains.get(vars[0]).value(), Some(7));
    }

    #[test]
    fn test_unsatisfiable_bounds_fail() {
        // x + y = 30 with digits
        let (mut domains, vars) = domains(&[(0, 9), (0, 9), (30, 30)]);
        let eq = LinearEq::new([(1, vars[0]), (1, vars[1]), (-1, vars[2])]).unwrap();
        assert_eq!(eq.propagate(&mut domains), Err(Inconsistency));
    }

    #[test]
    fn test_negative_coefficient_bounds() {
        // x - 3y = 0 with x in 0..=9, y in 0..=9 gives y in 0..=3
        let (mut domains, vars) = domains(&[(0, 9), (0, 9)]);
        let eq = LinearEq::new([(1, vars[0]), (-3, vars[1])]).unwrap();
        eq.propagate(&mut domains).unwrap();
        assert_eq!(domains.get(vars[1]).max(), 3);
    }

    #[test]
    fn test_check_range() {
        let (domains, vars) = domains(&[(0, i64::MAX), (0, i64::MAX)]);
        let eq = LinearEq::new([(1, vars[0]), (-1, vars[1])]).unwrap();
        assert_eq!(eq.check_range(&domains), Ok(()));

        let eq = LinearEq::new([(i64::MAX, vars[0]), (i64::MAX, vars[1])]).unwrap();
        assert_eq!(eq.check_range(&domains), Err(ModelError::LinearOverflow));
    }

    #[test]
    fn test_division_rounding() {
        assert_eq!(div_floor(7, 2), 3);
        assert_eq!(div_floor(-7, 2), -4);
        assert_eq!(div_floor(7, -2), -4);
        assert_eq!(div_floor(-7, -2), 3);
        assert_eq!(div_ceil(7, 2), 4);
        assert_eq!(div_ceil(-7, 2), -3);
        assert_eq!(div_ceil(7, -2), -3);
        assert_eq!(div_ceil(-7, -2), 4);
        assert_eq!(div_ceil(6, 3), 2);
    }

    proptest! {
        #[test]
        fn test_propagation_keeps_solutions(
            a in 1_i64..20, b in -20_i64..20,
            x in 0_i64..10, y in 0_i64..10,
        ) {
            prop_assume!(b != 0);
            // a*x + b*y - t = 0 where t is the value at (x, y)
            let t = a * x + b * y;
            let (mut domains, vars) = domains(&[(0, 9), (0, 9), (t, t)]);
            let eq = LinearEq::new([(a, vars[0]), (b, vars[1]), (-1, vars[2])]).unwrap();
            prop_assert!(eq.propagate(&mut domains).is_ok());
            prop_assert!(domains.get(vars[0]).contains(x));
            prop_assert!(domains.get(vars[1]).contains(y));
        }
    }
}
