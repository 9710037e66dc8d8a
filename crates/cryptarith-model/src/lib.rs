//! Compiles cryptarithmetic puzzles into constraint models and solves them.
//!
//! Compilation runs in three stages:
//!
//! 1. A [`LetterRegistry`] gives every distinct letter of the puzzle one digit
//!    variable, shared by all equations.
//! 2. The [`ModelBuilder`] creates a value variable per word, links it to its
//!    letters with positional weights and posts the equation sums.
//! 3. The result is handed to a [`ConstraintSolver`], which searches for a
//!    digit assignment.
//!
//! [`solve_puzzle`] runs all stages against any solver and turns the answer
//! into an [`Outcome`]. [`solve`] does the same with the bundled
//! [`Store`](cryptarith_solver::Store).
//!
//! # Examples
//!
//! ```
//! use cryptarith_core::{Base, Puzzle};
//! use cryptarith_model::{Outcome, solve};
//! use cryptarith_solver::SearchStrategy;
//!
//! let puzzle: Puzzle = "SEND+MORE=MONEY".parse()?;
//! let (outcome, _stats) = solve(&puzzle, Base::DECIMAL, SearchStrategy::default())?;
//!
//! let Outcome::Solved(solution) = outcome else {
//!     panic!("SEND+MORE=MONEY has a solution");
//! };
//! assert_eq!(solution.to_string().lines().last(), Some("9567 + 1085 = 10652"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    adapter::ConstraintSolver,
    builder::{CompiledModel, ModelBuilder, WordVar, positional_weights},
    error::CompileError,
    outcome::{Outcome, Solution, SolvedWord},
    pipeline::{solve, solve_puzzle},
    registry::LetterRegistry,
};

pub mod adapter;
pub mod builder;
mod error;
pub mod outcome;
mod pipeline;
pub mod registry;
#[cfg(test)]
mod testing;
