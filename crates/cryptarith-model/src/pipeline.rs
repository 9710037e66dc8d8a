use cryptarith_core::{Base, Puzzle};
use cryptarith_solver::{SearchStats, SearchStrategy, Store};

use crate::{CompileError, ConstraintSolver, ModelBuilder, Outcome};

/// Compiles `puzzle` into `solver` and searches for a solution.
///
/// A puzzle with more distinct letters than the base has digits is answered
/// with [`Outcome::Pigeonhole`] before anything is posted to the solver.
///
/// # Errors
///
/// Returns a [`CompileError`] if the model cannot be built or the solver
/// reports a solution that leaves a variable unfixed.
pub fn solve_puzzle<S>(
    puzzle: &Puzzle,
    base: Base,
    solver: &mut S,
    strategy: S::Strategy,
) -> Result<Outcome, CompileError<S::Error>>
where
    S: ConstraintSolver + ?Sized,
{
    let letters = puzzle.distinct_letters();
    if !base.has_distinct_digits_for(letters.len()) {
        log::info!(
            "{} distinct letters exceed base {base}, skipping search",
            letters.len()
        );
        return Ok(Outcome::Pigeonhole { letters, base });
    }

    let model = ModelBuilder::new(solver, base).compile(puzzle)?;
    if !solver.search(&model.registry().variables(), strategy)? {
        log::info!("search found no solution");
        return Ok(Outcome::NoSolution);
    }
    let solution = model.read_solution(solver)?;
    log::info!("search found a solution");
    Ok(Outcome::Solved(solution))
}

/// Solves `puzzle` with a fresh [`Store`].
///
/// Returns the outcome together with the statistics of the search, which
/// are all zero when the search was skipped.
///
/// # Errors
///
/// See [`solve_puzzle`].
pub fn solve(
    puzzle: &Puzzle,
    base: Base,
    strategy: SearchStrategy,
) -> Result<(Outcome, SearchStats), CompileError> {
    let mut store = Store::new();
    let outcome = solve_puzzle(puzzle, base, &mut store, strategy)?;
    Ok((outcome, store.stats()))
}

#[cfg(test)]
mod tests {
    use cryptarith_core::Letter;

    use super::*;
    use crate::testing::{RecordingError, RecordingSolver, RecordingStrategy};

    fn run(
        text: &str,
        solver: &mut RecordingSolver,
    ) -> Result<Outcome, CompileError<RecordingError>> {
        let puzzle: Puzzle = text.parse().unwrap();
        solve_puzzle(&puzzle, Base::DECIMAL, solver, RecordingStrategy)
    }

    #[test]
    fn test_pigeonhole_skips_search() {
        let mut solver = RecordingSolver::default();
        let outcome = run("ABCDEF+GHIJK=ABC", &mut solver).unwrap();
        let Outcome::Pigeonhole { letters, base } = outcome else {
            panic!("expected a pigeonhole outcome, got {outcome}");
        };
        let letters: String = letters.into_iter().map(Letter::as_char).collect();
        assert_eq!(letters, "ABCDEFGHIJK");
        assert_eq!(base, Base::DECIMAL);
        assert_eq!(solver.searches, 0);
    }

    #[test]
    fn test_pigeonhole_wins_over_word_too_long() {
        // 11 letters, and a 20-letter word whose weights overflow
        let mut solver = RecordingSolver::default();
        let outcome = run("ABCDEFGHIJKABCDEFGHI+A=B", &mut solver).unwrap();
        assert!(outcome.is_pigeonhole(), "{outcome}");
        assert!(solver.vars.is_empty());
        assert!(solver.posted.is_empty());
    }

    #[test]
    fn test_ten_letters_are_searched() {
        let mut solver = RecordingSolver::default();
        let outcome = run("ABCDE+FGHIJ=ABCDE", &mut solver).unwrap();
        assert_eq!(outcome, Outcome::NoSolution);
        assert_eq!(solver.searches, 1);
    }

    #[test]
    fn test_solver_errors_keep_their_type() {
        let mut solver = RecordingSolver::default();
        let err = run("", &mut solver).unwrap_err();
        assert_eq!(err, CompileError::Solver(RecordingError::EmptyAllDistinct));
        assert_eq!(solver.searches, 0);
    }

    #[test]
    fn test_solver_without_values_is_an_error() {
        let mut solver = RecordingSolver {
            found: true,
            ..RecordingSolver::default()
        };
        let err = run("A+B=C", &mut solver).unwrap_err();
        assert_eq!(
            err,
            CompileError::UnassignedVariable {
                name: "A".to_owned()
            }
        );
    }

    #[test]
    fn test_solve_with_store() {
        let puzzle: Puzzle = "A+A=B".parse().unwrap();
        let (outcome, stats) = solve(&puzzle, Base::DECIMAL, SearchStrategy::FirstFail).unwrap();
        let Outcome::Solved(solution) = outcome else {
            panic!("A+A=B is solvable: {outcome}");
        };
        let a = solution.digit(Letter::new('A').unwrap()).unwrap();
        let b = solution.digit(Letter::new('B').unwrap()).unwrap();
        assert_eq!(a + a, b);
        assert!(stats.decisions() > 0);
    }

    #[test]
    fn test_solve_pigeonhole_has_empty_stats() {
        let puzzle: Puzzle = "ABCDEF+GHIJK=ABC".parse().unwrap();
        let (outcome, stats) = solve(&puzzle, Base::DECIMAL, SearchStrategy::default()).unwrap();
        assert!(outcome.is_pigeonhole());
        assert_eq!(stats, SearchStats::default());
    }
}
