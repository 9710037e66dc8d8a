//! Results of solving a puzzle.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

use cryptarith_core::{Base, Letter, Word};

/// A word together with its numeric value in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedWord {
    word: Word,
    value: u64,
}

impl SolvedWord {
    /// Creates a solved word.
    #[must_use]
    pub fn new(word: Word, value: u64) -> Self {
        Self { word, value }
    }

    /// Returns the word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the numeric value of the word.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// A digit assignment satisfying every equation of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    base: Base,
    assignment: BTreeMap<Letter, u32>,
    equations: Vec<Vec<SolvedWord>>,
}

impl Solution {
    /// Creates a solution.
    ///
    /// `equations` holds the words of each equation, result word last.
    #[must_use]
    pub fn new(
        base: Base,
        assignment: BTreeMap<Letter, u32>,
        equations: Vec<Vec<SolvedWord>>,
    ) -> Self {
        Self {
            base,
            assignment,
            equations,
        }
    }

    /// Returns the base of the puzzle.
    #[must_use]
    pub fn base(&self) -> Base {
        self.base
    }

    /// Returns the digit of every letter, ordered by letter.
    #[must_use]
    pub fn assignment(&self) -> &BTreeMap<Letter, u32> {
        &self.assignment
    }

    /// Returns the digit assigned to `letter`.
    #[must_use]
    pub fn digit(&self, letter: Letter) -> Option<u32> {
        self.assignment.get(&letter).copied()
    }

    /// Returns the solved words of each equation, result word last.
    #[must_use]
    pub fn equations(&self) -> &[Vec<SolvedWord>] {
        &self.equations
    }
}

impl Display for Solution {
    /// Writes the assignment on one line, then each equation with the word
    /// values in the puzzle's base.
    ///
    /// ```text
    /// D=7 E=5 M=1 N=6 O=0 R=8 S=9 Y=2
    /// 9567 + 1085 = 10652
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, digit)) in self.assignment.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}={}", self.base.format(u64::from(*digit)))?;
        }
        for words in &self.equations {
            writeln!(f)?;
            let Some((result, addends)) = words.split_last() else {
                continue;
            };
            for (i, addend) in addends.iter().enumerate() {
                if i > 0 {
                    f.write_str(" + ")?;
                }
                f.write_str(&self.base.format(addend.value))?;
            }
            write!(f, " = {}", self.base.format(result.value))?;
        }
        Ok(())
    }
}

/// The answer to a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// A satisfying assignment was found.
    Solved(Solution),
    /// The search proved that no assignment exists.
    NoSolution,
    /// There are more distinct letters than digits, so the search was skipped.
    Pigeonhole {
        /// The distinct letters, in order of first occurrence.
        letters: Vec<Letter>,
        /// The base of the puzzle.
        base: Base,
    },
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(solution) => write!(f, "solution found:\n{solution}"),
            Self::NoSolution => f.write_str("no solution found"),
            Self::Pigeonhole { letters, base } => {
                write!(f, "no solution: {} distinct letters {{", letters.len())?;
                for (i, letter) in letters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{letter}")?;
                }
                write!(f, "}} cannot take distinct digits in base {base}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        text.parse().unwrap()
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn hex_solution() -> Solution {
        let assignment = BTreeMap::from([(letter('A'), 10), (letter('B'), 1), (letter('C'), 4)]);
        let equations = vec![vec![
            SolvedWord::new(word("A"), 10),
            SolvedWord::new(word("A"), 10),
            SolvedWord::new(word("BC"), 20),
        ]];
        Solution::new(Base::new(16).unwrap(), assignment, equations)
    }

    #[test]
    fn test_solution_accessors() {
        let solution = hex_solution();
        assert_eq!(solution.digit(letter('A')), Some(10));
        assert_eq!(solution.digit(letter('Z')), None);
        assert_eq!(solution.equations()[0][2].word(), &word("BC"));
        assert_eq!(solution.equations()[0][2].value(), 20);
    }

    #[test]
    fn test_solution_display_uses_base_digits() {
        assert_eq!(hex_solution().to_string(), "A=A B=1 C=4\nA + A = 14");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::NoSolution.to_string(), "no solution found");
        assert_eq!(
            Outcome::Pigeonhole {
                letters: "ABC".chars().map(letter).collect(),
                base: Base::new(2).unwrap()
            }
            .to_string(),
            "no solution: 3 distinct letters {A, B, C} cannot take distinct digits in base 2"
        );
        let solved = Outcome::Solved(hex_solution());
        assert!(solved.is_solved());
        assert!(solved.to_string().starts_with("solution found:\nA=A"));
    }
}
