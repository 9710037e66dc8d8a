use super::{BoxedPropagator, Propagator};
use crate::{Domains, Inconsistency, IntVar};

/// Requires a variable to differ from a constant.
#[derive(Debug, Clone)]
pub struct NotEqual {
    var: IntVar,
    value: i64,
}

impl NotEqual {
    /// Creates the constraint `var != value`.
    #[must_use]
    pub fn new(var: IntVar, value: i64) -> Self {
        Self { var, value }
    }
}

impl Propagator for NotEqual {
    fn name(&self) -> &'static str {
        "not-equal"
    }

    fn clone_box(&self) -> BoxedPropagator {
        Box::new(self.clone())
    }

    fn vars(&self) -> Vec<IntVar> {
        vec![self.var]
    }

    fn propagate(&self, domains: &mut Domains) -> Result<(), Inconsistency> {
        domains.remove(self.var, self.value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagator::testing::domains;

    #[test]
    fn test_removes_value() {
        let (mut domains, vars) = domains(&[(0, 9)]);
        NotEqual::new(vars[0], 0).propagate(&mut domains).unwrap();
        assert_eq!(domains.get(vars[0]).min(), 1);
    }

    #[test]
    fn test_fixed_to_value_fails() {
        let (mut domains, vars) = domains(&[(0, 0)]);
        assert_eq!(
            NotEqual::new(vars[0], 0).propagate(&mut domains),
            Err(Inconsistency)
        );
    }
}
