use crate::ConstraintSolver;

/// Error of a [`RecordingSolver`], unrelated to the bundled engine's errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum RecordingError {
    #[display("all-distinct over no variables")]
    EmptyAllDistinct,
}

/// Search heuristic of a [`RecordingSolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RecordingStrategy;

/// A constraint posted to a [`RecordingSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Posted {
    AllDistinct(Vec<usize>),
    WeightedSum {
        vars: Vec<usize>,
        weights: Vec<i64>,
        target: usize,
    },
    Sum {
        vars: Vec<usize>,
        target: usize,
    },
    NotEqual {
        var: usize,
        value: i64,
    },
}

/// A solver that records the model instead of solving it.
///
/// Variables are indices into [`vars`](Self::vars). `search` answers with
/// [`found`](Self::found) and fixes nothing.
#[derive(Debug, Default)]
pub(crate) struct RecordingSolver {
    pub(crate) vars: Vec<(String, i64, i64)>,
    pub(crate) posted: Vec<Posted>,
    pub(crate) searches: usize,
    pub(crate) found: bool,
}

impl RecordingSolver {
    pub(crate) fn var_named(&self, name: &str) -> Vec<usize> {
        (0..self.vars.len())
            .filter(|&i| self.vars[i].0 == name)
            .collect()
    }

    pub(crate) fn all_distinct(&self) -> Vec<&Vec<usize>> {
        self.posted
            .iter()
            .filter_map(|posted| match posted {
                Posted::AllDistinct(vars) => Some(vars),
                _ => None,
            })
            .collect()
    }
}

impl ConstraintSolver for RecordingSolver {
    type Var = usize;
    type Strategy = RecordingStrategy;
    type Error = RecordingError;

    fn max_int(&self) -> i64 {
        i64::MAX
    }

    fn new_int_var(&mut self, name: &str, min: i64, max: i64) -> Result<usize, RecordingError> {
        self.vars.push((name.to_owned(), min, max));
        Ok(self.vars.len() - 1)
    }

    fn post_all_distinct(&mut self, vars: &[usize]) -> Result<(), RecordingError> {
        if vars.is_empty() {
            return Err(RecordingError::EmptyAllDistinct);
        }
        self.posted.push(Posted::AllDistinct(vars.to_vec()));
        Ok(())
    }

    fn post_weighted_sum(
        &mut self,
        vars: &[usize],
        weights: &[i64],
        target: usize,
    ) -> Result<(), RecordingError> {
        self.posted.push(Posted::WeightedSum {
            vars: vars.to_vec(),
            weights: weights.to_vec(),
            target,
        });
        Ok(())
    }

    fn post_sum(&mut self, vars: &[usize], target: usize) -> Result<(), RecordingError> {
        self.posted.push(Posted::Sum {
            vars: vars.to_vec(),
            target,
        });
        Ok(())
    }

    fn post_not_equal(&mut self, var: usize, value: i64) -> Result<(), RecordingError> {
        self.posted.push(Posted::NotEqual { var, value });
        Ok(())
    }

    fn search(
        &mut self,
        _vars: &[usize],
        _strategy: RecordingStrategy,
    ) -> Result<bool, RecordingError> {
        self.searches += 1;
        Ok(self.found)
    }

    fn value(&self, _var: usize) -> Option<i64> {
        None
    }
}
