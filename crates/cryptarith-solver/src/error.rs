use crate::IntVar;

/// A propagator emptied a domain: the current node has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("inconsistent domains")]
pub struct Inconsistency;

/// Errors produced when a model is built or searched incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ModelError {
    /// A variable was declared with `min > max`.
    #[display("variable {name} has an empty domain {min}..={max}")]
    EmptyDomain {
        /// Name of the variable.
        name: String,
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// An all-distinct constraint was posted over no variables.
    #[display("all-distinct constraint over no variables")]
    EmptyAllDistinct,
    /// A weighted sum was posted with differing numbers of terms and weights.
    #[display("weighted sum has {terms} terms but {weights} weights")]
    WeightCountMismatch {
        /// Number of variables.
        terms: usize,
        /// Number of weights.
        weights: usize,
    },
    /// A linear constraint could overflow the solver's internal arithmetic.
    #[display("linear constraint may overflow 128-bit arithmetic")]
    LinearOverflow,
    /// A variable handle does not belong to the store.
    #[display("unknown variable {var}")]
    UnknownVariable {
        /// The offending handle.
        var: IntVar,
    },
}
