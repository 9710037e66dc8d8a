//! The boundary between the model builder and a constraint engine.

use std::fmt::Debug;

use cryptarith_solver::{IntVar, ModelError, SearchStrategy, Store};

/// A constraint engine able to hold a cryptarithmetic model.
///
/// The builder only creates bounded integer variables and posts the four
/// constraint kinds below, so any finite-domain solver offering them can be
/// plugged in. Variable handles, search strategies and errors belong to the
/// solver and are opaque to the builder.
pub trait ConstraintSolver {
    /// Handle to a variable of this solver.
    type Var: Copy + Eq + Debug;
    /// Search heuristic accepted by [`search`](Self::search).
    type Strategy;
    /// Error returned when a variable or constraint is rejected.
    type Error: std::error::Error + 'static;

    /// Returns the largest upper bound a variable may have.
    fn max_int(&self) -> i64;

    /// Creates an integer variable with domain `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is empty.
    fn new_int_var(&mut self, name: &str, min: i64, max: i64) -> Result<Self::Var, Self::Error>;

    /// Requires `vars` to take pairwise different values.
    ///
    /// # Errors
    ///
    /// Returns an error if `vars` is empty.
    fn post_all_distinct(&mut self, vars: &[Self::Var]) -> Result<(), Self::Error>;

    /// Requires `Σ weights[i] * vars[i] = target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length or the sum cannot be
    /// represented.
    fn post_weighted_sum(
        &mut self,
        vars: &[Self::Var],
        weights: &[i64],
        target: Self::Var,
    ) -> Result<(), Self::Error>;

    /// Requires `Σ vars[i] = target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sum cannot be represented.
    fn post_sum(&mut self, vars: &[Self::Var], target: Self::Var) -> Result<(), Self::Error>;

    /// Requires `var != value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `var` is unknown to the solver.
    fn post_not_equal(&mut self, var: Self::Var, value: i64) -> Result<(), Self::Error>;

    /// Searches for an assignment, labelling `vars` with `strategy`.
    ///
    /// Returns `Ok(true)` if an assignment satisfying every constraint was
    /// found.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is invalid.
    fn search(
        &mut self,
        vars: &[Self::Var],
        strategy: Self::Strategy,
    ) -> Result<bool, Self::Error>;

    /// Returns the value of `var` in the assignment found by the last search.
    fn value(&self, var: Self::Var) -> Option<i64>;
}

impl ConstraintSolver for Store {
    type Var = IntVar;
    type Strategy = SearchStrategy;
    type Error = ModelError;

    fn max_int(&self) -> i64 {
        Self::MAX_INT
    }

    fn new_int_var(&mut self, name: &str, min: i64, max: i64) -> Result<IntVar, ModelError> {
        Store::new_int_var(self, name, min, max)
    }

    fn post_all_distinct(&mut self, vars: &[IntVar]) -> Result<(), ModelError> {
        Store::post_all_distinct(self, vars)
    }

    fn post_weighted_sum(
        &mut self,
        vars: &[IntVar],
        weights: &[i64],
        target: IntVar,
    ) -> Result<(), ModelError> {
        Store::post_weighted_sum(self, vars, weights, target)
    }

    fn post_sum(&mut self, vars: &[IntVar], target: IntVar) -> Result<(), ModelError> {
        Store::post_sum(self, vars, target)
    }

    fn post_not_equal(&mut self, var: IntVar, value: i64) -> Result<(), ModelError> {
        Store::post_not_equal(self, var, value)
    }

    fn search(&mut self, vars: &[IntVar], strategy: SearchStrategy) -> Result<bool, ModelError> {
        Store::search(self, vars, strategy)
    }

    fn value(&self, var: IntVar) -> Option<i64> {
        Store::value(self, var)
    }
}
