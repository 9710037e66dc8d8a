//! Constraint propagators.
//!
//! A propagator narrows the domains of the variables it constrains and
//! reports an [`Inconsistency`] once a domain becomes empty. The [`Store`]
//! reschedules a propagator whenever one of its [`vars`](Propagator::vars)
//! changes, until no propagator changes anything.
//!
//! [`Store`]: crate::Store

use std::fmt::Debug;

pub use self::{all_distinct::AllDistinct, linear::LinearEq, not_equal::NotEqual};
use crate::{Domains, Inconsistency, IntVar};

mod all_distinct;
mod linear;
mod not_equal;

/// A constraint that removes unsupported values from variable domains.
pub trait Propagator: Debug + Send + Sync {
    /// Returns the name of the constraint.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the propagator.
    fn clone_box(&self) -> BoxedPropagator;

    /// Returns the variables whose changes should wake this propagator.
    fn vars(&self) -> Vec<IntVar>;

    /// Narrows the domains until this propagator alone can remove nothing more.
    ///
    /// # Errors
    ///
    /// Returns [`Inconsistency`] if the constraint cannot be satisfied by the
    /// current domains.
    fn propagate(&self, domains: &mut Domains) -> Result<(), Inconsistency>;
}

/// A boxed propagator.
pub type BoxedPropagator = Box<dyn Propagator>;

impl Clone for BoxedPropagator {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
