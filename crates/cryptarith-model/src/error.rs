use cryptarith_core::{Base, Word};
use cryptarith_solver::ModelError;

/// Errors produced while compiling a puzzle or reading its solution.
///
/// `E` is the error type of the [`ConstraintSolver`](crate::ConstraintSolver)
/// the puzzle is compiled into.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum CompileError<E = ModelError> {
    /// The positional weight of a word's leading letter overflows `i64`.
    #[display("word {word} is too long for base {base}")]
    WordTooLong {
        /// The offending word.
        word: Word,
        /// The base of the puzzle.
        base: Base,
    },
    /// The solver rejected a variable or constraint.
    #[display("invalid model: {_0}")]
    #[from]
    Solver(E),
    /// The solver reported success but left a variable unfixed.
    #[display("variable {name} has no value in the solution")]
    UnassignedVariable {
        /// Name of the variable.
        name: String,
    },
}
