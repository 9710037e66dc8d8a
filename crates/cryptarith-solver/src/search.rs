//! Search configuration and statistics.

use crate::{Domains, IntVar};

/// Heuristic that picks the next variable to label during search.
///
/// Values are always tried in ascending order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum SearchStrategy {
    /// Orders the decision variables once, most constrained first.
    ///
    /// A variable is more constrained the more propagators watch it. Ties keep
    /// the order in which the variables were given.
    #[default]
    #[display("most-constrained")]
    MostConstrainedStatic,
    /// Picks the unfixed variable with the smallest domain at every node.
    #[display("first-fail")]
    FirstFail,
    /// Labels the variables in the order they were given.
    #[display("input-order")]
    InputOrder,
}

impl SearchStrategy {
    /// Returns the order in which static strategies label `vars`.
    ///
    /// `degree` gives the number of propagators watching a variable.
    pub(crate) fn static_order<F>(self, vars: &[IntVar], degree: F) -> Vec<IntVar>
    where
        F: Fn(IntVar) -> usize,
    {
        let mut order = vars.to_vec();
        if self.is_most_constrained_static() {
            order.sort_by_key(|&var| std::cmp::Reverse(degree(var)));
        }
        order
    }

    /// Returns the next variable to label, or `None` once all are fixed.
    pub(crate) fn select(self, order: &[IntVar], domains: &Domains) -> Option<IntVar> {
        let mut unfixed = order
            .iter()
            .copied()
            .filter(|&var| !domains.get(var).is_fixed());
        match self {
            Self::FirstFail => unfixed.min_by_key(|&var| domains.get(var).size()),
            Self::MostConstrainedStatic | Self::InputOrder => unfixed.next(),
        }
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display(
    "{decisions} decisions, {failures} failures, {propagations} propagations, max depth {max_depth}"
)]
pub struct SearchStats {
    pub(crate) decisions: u64,
    pub(crate) failures: u64,
    pub(crate) propagations: u64,
    pub(crate) max_depth: usize,
}

impl SearchStats {
    /// Returns the number of values tried.
    #[must_use]
    pub fn decisions(&self) -> u64 {
        self.decisions
    }

    /// Returns the number of tried values that led to an inconsistency.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Returns the number of propagator executions.
    #[must_use]
    pub fn propagations(&self) -> u64 {
        self.propagations
    }

    /// Returns the deepest search level reached.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
