use std::collections::VecDeque;

use tinyvec::TinyVec;

use crate::{
    Domain, Domains, Inconsistency, IntVar, ModelError, SearchStats, SearchStrategy,
    propagator::{AllDistinct, BoxedPropagator, LinearEq, NotEqual, Propagator},
};

/// Variables, constraints and search over them.
///
/// Constraints are only propagated when [`search`](Self::search) runs; the
/// domains observed through [`domain`](Self::domain) are always the declared
/// ones.
///
/// # Examples
///
/// ```
/// use cryptarith_solver::{SearchStrategy, Store};
///
/// let mut store = Store::new();
/// let a = store.new_int_var("A", 0, 9)?;
/// let b = store.new_int_var("B", 0, 9)?;
/// let ab = store.new_int_var("AB", 0, Store::MAX_INT)?;
/// store.post_weighted_sum(&[a, b], &[10, 1], ab)?;
/// store.post_not_equal(a, 0)?;
/// store.post_all_distinct(&[a, b])?;
///
/// assert!(store.search(&[a, b], SearchStrategy::InputOrder)?);
/// assert_eq!(store.value(ab), Some(10));
/// # Ok::<(), cryptarith_solver::ModelError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    names: Vec<String>,
    domains: Domains,
    propagators: Vec<BoxedPropagator>,
    watchers: Vec<TinyVec<[usize; 4]>>,
    solution: Option<Domains>,
    stats: SearchStats,
}

impl Store {
    /// The largest upper bound a variable may have.
    pub const MAX_INT: i64 = i64::MAX;

    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.domains.len()
    }

    /// Returns the number of posted constraints.
    #[must_use]
    pub fn num_constraints(&self) -> usize {
        self.propagators.len()
    }

    /// Creates an integer variable with domain `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyDomain`] if `min > max`.
    pub fn new_int_var(&mut self, name: &str, min: i64, max: i64) -> Result<IntVar, ModelError> {
        if min > max {
            return Err(ModelError::EmptyDomain {
                name: name.to_owned(),
                min,
                max,
            });
        }
        let var = self.domains.push(Domain::new(min, max));
        self.names.push(name.to_owned());
        self.watchers.push(TinyVec::default());
        log::trace!("new variable {name} ({var}) in {min}..={max}");
        Ok(var)
    }

    /// Posts a propagator.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownVariable`] if the propagator refers to a
    /// variable of another store.
    pub fn post<P>(&mut self, propagator: P) -> Result<(), ModelError>
    where
        P: Propagator + 'static,
    {
        let vars = propagator.vars();
        self.check_vars(&vars)?;
        let id = self.propagators.len();
        for var in vars {
            self.watchers[var.index()].push(id);
        }
        log::trace!("posted {} constraint #{id}", propagator.name());
        self.propagators.push(Box::new(propagator));
        Ok(())
    }

    /// Requires `vars` to take pairwise different values.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyAllDistinct`] if `vars` is empty, or
    /// [`ModelError::UnknownVariable`] for a foreign variable.
    pub fn post_all_distinct(&mut self, vars: &[IntVar]) -> Result<(), ModelError> {
        if vars.is_empty() {
            return Err(ModelError::EmptyAllDistinct);
        }
        self.post(AllDistinct::new(vars))
    }

    /// Requires `weights[0]*vars[0] + ... + weights[n]*vars[n] = target`.
    ///
    /// # Errors
    ///
    /// - [`ModelError::WeightCountMismatch`] if the slices differ in length
    /// - [`ModelError::UnknownVariable`] for a foreign variable
    /// - [`ModelError::LinearOverflow`] if the sum could exceed the solver's
    ///   arithmetic
    pub fn post_weighted_sum(
        &mut self,
        vars: &[IntVar],
        weights: &[i64],
        target: IntVar,
    ) -> Result<(), ModelError> {
        if vars.len() != weights.len() {
            return Err(ModelError::WeightCountMismatch {
                terms: vars.len(),
                weights: weights.len(),
            });
        }
        self.check_vars(vars)?;
        self.check_vars(&[target])?;

        let terms = weights
            .iter()
            .copied()
            .zip(vars.iter().copied())
            .chain(std::iter::once((-1, target)));
        let constraint = LinearEq::new(terms)?;
        constraint.check_range(&self.domains)?;
        self.post(constraint)
    }

    /// Requires `vars[0] + ... + vars[n] = target`.
    ///
    /// # Errors
    ///
    /// See [`post_weighted_sum`](Self::post_weighted_sum).
    pub fn post_sum(&mut self, vars: &[IntVar], target: IntVar) -> Result<(), ModelError> {
        self.post_weighted_sum(vars, &vec![1; vars.len()], target)
    }

    /// Requires `var != value`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownVariable`] for a foreign variable.
    pub fn post_not_equal(&mut self, var: IntVar, value: i64) -> Result<(), ModelError> {
        self.post(NotEqual::new(var, value))
    }

    /// Returns the name a variable was created with.
    #[must_use]
    pub fn name(&self, var: IntVar) -> Option<&str> {
        self.names.get(var.index()).map(String::as_str)
    }

    /// Returns the declared domain of a variable.
    #[must_use]
    pub fn domain(&self, var: IntVar) -> Option<&Domain> {
        self.domains.try_get(var)
    }

    /// Returns the value of `var` in the last solution found.
    ///
    /// Returns `None` if no solution was found or `var` is not fixed in it.
    #[must_use]
    pub fn value(&self, var: IntVar) -> Option<i64> {
        self.solution.as_ref()?.try_get(var)?.value()
    }

    /// Returns the statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches for an assignment satisfying every posted constraint.
    ///
    /// Only `vars` are labelled; the remaining variables must become fixed
    /// through propagation to have a [`value`](Self::value). Returns
    /// `Ok(false)` if no solution exists.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownVariable`] for a foreign variable.
    pub fn search(
        &mut self,
        vars: &[IntVar],
        strategy: SearchStrategy,
    ) -> Result<bool, ModelError> {
        self.check_vars(vars)?;
        self.solution = None;
        self.stats = SearchStats::default();
        log::debug!(
            "searching over {} of {} variables with {} constraints, strategy {strategy}",
            vars.len(),
            self.num_vars(),
            self.num_constraints()
        );

        let order = strategy.static_order(vars, |var| self.watchers[var.index()].len());
        let mut root = self.domains.clone();
        let all = (0..self.propagators.len()).collect();
        if self.propagate(&mut root, all).is_ok() {
            self.solution = self.label(root, &order, strategy, 0);
        } else {
            self.stats.failures += 1;
            log::debug!("constraints are inconsistent before the first decision");
        }

        log::debug!(
            "search {}: {}",
            if self.solution.is_some() { "succeeded" } else { "failed" },
            self.stats
        );
        Ok(self.solution.is_some())
    }

    fn check_vars(&self, vars: &[IntVar]) -> Result<(), ModelError> {
        match vars.iter().find(|var| var.index() >= self.num_vars()) {
            Some(&var) => Err(ModelError::UnknownVariable { var }),
            None => Ok(()),
        }
    }

    /// Runs propagators until no domain changes.
    ///
    /// Starts from `initial` and the watchers of variables already modified.
    fn propagate(
        &mut self,
        domains: &mut Domains,
        initial: Vec<usize>,
    ) -> Result<(), Inconsistency> {
        let mut queued = vec![false; self.propagators.len()];
        let mut queue = VecDeque::new();
        for id in initial {
            schedule(&mut queued, &mut queue, id);
        }
        for var in domains.take_modified() {
            for &id in &self.watchers[var.index()] {
                schedule(&mut queued, &mut queue, id);
            }
        }

        while let Some(id) = queue.pop_front() {
            queued[id] = false;
            self.stats.propagations += 1;
            self.propagators[id].propagate(domains)?;
            for var in domains.take_modified() {
                for &watcher in &self.watchers[var.index()] {
                    if watcher != id {
                        schedule(&mut queued, &mut queue, watcher);
                    }
                }
            }
        }
        Ok(())
    }

    /// Depth-first labelling. Returns the first node where every decision
    /// variable is fixed.
    fn label(
        &mut self,
        domains: Domains,
        order: &[IntVar],
        strategy: SearchStrategy,
        depth: usize,
    ) -> Option<Domains> {
        self.stats.max_depth = self.stats.max_depth.max(depth);
        let Some(var) = strategy.select(order, &domains) else {
            return Some(domains);
        };

        let candidates = domains.get(var).clone();
        for value in candidates.iter() {
            self.stats.decisions += 1;
            log::trace!("depth {depth}: {} = {value}", self.names[var.index()]);

            let mut child = domains.clone();
            let consistent =
                child.assign(var, value).is_ok() && self.propagate(&mut child, Vec::new()).is_ok();
            if !consistent {
                self.stats.failures += 1;
                continue;
            }
            if let Some(solution) = self.label(child, order, strategy, depth + 1) {
                return Some(solution);
            }
        }
        None
    }
}

fn schedule(queued: &mut [bool], queue: &mut VecDeque<usize>, id: usize) {
    if !queued[id] {
        queued[id] = true;
        queue.push_back(id);
    }
}
