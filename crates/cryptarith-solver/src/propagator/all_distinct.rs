use super::{BoxedPropagator, Propagator};
use crate::{Domains, Inconsistency, IntVar};

/// Requires all variables to take pairwise different values.
///
/// Propagation removes the value of every fixed variable from the others and
/// fails early when the masked domains together offer fewer values than there
/// are variables.
#[derive(Debug, Clone)]
pub struct AllDistinct {
    vars: Vec<IntVar>,
}

impl AllDistinct {
    /// Creates the constraint. Repeated variables are counted once.
    #[must_use]
    pub fn new(vars: &[IntVar]) -> Self {
        let mut unique = Vec::with_capacity(vars.len());
        for &var in vars {
            if !unique.contains(&var) {
                unique.push(var);
            }
        }
        Self { vars: unique }
    }

    fn check_pigeonhole(&self, domains: &Domains) -> Result<(), Inconsistency> {
        let mut union = 0_u64;
        for &var in &self.vars {
            let Some(mask) = domains.get(var).mask() else {
                return Ok(());
            };
            union |= mask;
        }
        if (union.count_ones() as usize) < self.vars.len() {
            return Err(Inconsistency);
        }
        Ok(())
    }
}

impl Propagator for AllDistinct {
    fn name(&self) -> &'static str {
        "all-distinct"
    }

    fn clone_box(&self) -> BoxedPropagator {
        Box::new(self.clone())
    }

    fn vars(&self) -> Vec<IntVar> {
        self.vars.clone()
    }

    fn propagate(&self, domains: &mut Domains) -> Result<(), Inconsistency> {
        let mut changed = true;
        while changed {
            changed = false;
            for &fixed in &self.vars {
                let Some(value) = domains.get(fixed).value() else {
                    continue;
                };
                for &other in &self.vars {
                    if other != fixed {
                        changed |= domains.remove(other, value)?;
                    }
                }
            }
        }
        self.check_pigeonhole(domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagator::testing::domains;

    #[test]
    fn test_removes_fixed_values() {
        let (mut domains, vars) = domains(&[(3, 3), (0, 9), (0, 9)]);
        AllDistinct::new(&vars).propagate(&mut domains).unwrap();
        assert!(!domains.get(vars[1]).contains(3));
        assert!(!domains.get(vars[2]).contains(3));
        assert_eq!(domains.get(vars[0]).value(), Some(3));
    }

    #[test]
    fn test_cascades_to_fixpoint() {
        // a = 1 forces b = 2, which forces c = 3
        let (mut domains, vars) = domains(&[(1, 1), (1, 2), (1, 3)]);
        AllDistinct::new(&vars).propagate(&mut domains).unwrap();
        assert_eq!(domains.get(vars[1]).value(), Some(2));
        assert_eq!(domains.get(vars[2]).value(), Some(3));
    }

    #[test]
    fn test_equal_fixed_values_fail() {
        let (mut domains, vars) = domains(&[(5, 5), (5, 5)]);
        assert_eq!(
            AllDistinct::new(&vars).propagate(&mut domains),
            Err(Inconsistency)
        );
    }

    #[test]
    fn test_pigeonhole() {
        let (mut domains, vars) = domains(&[(0, 1), (0, 1), (0, 1)]);
        assert_eq!(
            AllDistinct::new(&vars).propagate(&mut domains),
            Err(Inconsistency)
        );

        let (mut domains, vars) = crate::propagator::testing::domains(&[(0, 1), (0, 1)]);
        assert_eq!(AllDistinct::new(&vars).propagate(&mut domains), Ok(()));
    }

    #[test]
    fn test_repeated_variable_is_counted_once() {
        let (mut domains, vars) = domains(&[(4, 4), (0, 9)]);
        let constraint = AllDistinct::new(&[vars[0], vars[1], vars[0]]);
        assert_eq!(constraint.vars(), vars);
        constraint.propagate(&mut domains).unwrap();
        assert!(!domains.get(vars[1]).contains(4));
    }

    #[test]
    fn test_records_modified_vars() {
        let (mut domains, vars) = domains(&[(0, 0), (0, 9), (5, 9)]);
        AllDistinct::new(&vars).propagate(&mut domains).unwrap();
        assert_eq!(domains.take_modified(), vec![vars[1]]);
    }
}
