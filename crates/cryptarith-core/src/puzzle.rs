//! A complete puzzle made of one or more equations.

use std::{
    collections::HashSet,
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Equation, Letter, ParseError, ParseOptions, parse_puzzle};

/// The puzzle used when no input is supplied.
pub const DEFAULT_PUZZLE: &str = "IS+THIS=HERE";

/// All equations solved together in one run.
///
/// Letters are shared across equations: the `A` of one equation is the same
/// unknown as the `A` of any other.
///
/// # Examples
///
/// ```
/// use cryptarith_core::Puzzle;
///
/// let puzzle: Puzzle = "
///     // two equations sharing letters
///     AB+BA=CC
///     A+A=B
/// "
/// .parse()?;
/// assert_eq!(puzzle.equations().len(), 2);
/// assert_eq!(puzzle.distinct_letters().len(), 3);
/// # Ok::<(), cryptarith_core::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Puzzle {
    equations: Vec<Equation>,
}

impl Puzzle {
    /// Creates a puzzle from its equations.
    #[must_use]
    pub fn new(equations: Vec<Equation>) -> Self {
        Self { equations }
    }

    /// Returns the built-in default puzzle, [`DEFAULT_PUZZLE`].
    #[must_use]
    pub fn default_puzzle() -> Self {
        Self {
            equations: vec![Equation::from_static(DEFAULT_PUZZLE)],
        }
    }

    /// Returns the equations in input order.
    #[must_use]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Returns `true` if the puzzle has no equations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Returns every distinct letter, in order of first occurrence.
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<Letter> {
        let mut seen = HashSet::new();
        self.equations
            .iter()
            .flat_map(Equation::letters)
            .filter(|&letter| seen.insert(letter))
            .collect()
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    /// Parses every line of puzzle text, failing on the first rejected line.
    ///
    /// No line limit applies. Use [`parse_puzzle`] to bound the input or to
    /// skip malformed lines instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let options = ParseOptions {
            max_lines: usize::MAX,
            ..ParseOptions::default()
        };
        let report = parse_puzzle(s, &options);
        match report.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(report.puzzle),
        }
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, equation) in self.equations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            Display::fmt(equation, f)?;
        }
        Ok(())
    }
}
