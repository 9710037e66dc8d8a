//! A small finite-domain constraint solver.
//!
//! This crate provides just enough constraint programming to decide
//! cryptarithmetic puzzles: bounded integer variables, a handful of
//! propagators and a depth-first labelling search.
//!
//! # Overview
//!
//! - [`Store`]: Owns variables and posted constraints, and runs the search
//! - [`Domain`]: The current set of values of one variable
//! - [`propagator`]: Constraint propagators ([`AllDistinct`], [`LinearEq`],
//!   [`NotEqual`]) behind the [`Propagator`] trait
//! - [`SearchStrategy`]: Variable selection heuristics for the search
//!
//! [`AllDistinct`]: propagator::AllDistinct
//! [`LinearEq`]: propagator::LinearEq
//! [`NotEqual`]: propagator::NotEqual
//! [`Propagator`]: propagator::Propagator
//!
//! # Examples
//!
//! ```
//! use cryptarith_solver::{SearchStrategy, Store};
//!
//! // x + y = 8 and x = 3 * y, with x and y distinct digits
//! let mut store = Store::new();
//! let x = store.new_int_var("x", 0, 9)?;
//! let y = store.new_int_var("y", 0, 9)?;
//! let eight = store.new_int_var("eight", 8, 8)?;
//! let zero = store.new_int_var("zero", 0, 0)?;
//! store.post_sum(&[x, y], eight)?;
//! store.post_all_distinct(&[x, y])?;
//! store.post_weighted_sum(&[x, y], &[1, -3], zero)?;
//!
//! assert!(store.search(&[x, y], SearchStrategy::default())?);
//! assert_eq!(store.value(x), Some(6));
//! assert_eq!(store.value(y), Some(2));
//! # Ok::<(), cryptarith_solver::ModelError>(())
//! ```

pub use self::{domain::Domain, domains::Domains, error::*, search::*, store::Store, var::IntVar};

mod domain;
mod domains;
mod error;
pub mod propagator;
mod search;
mod store;
mod var;
