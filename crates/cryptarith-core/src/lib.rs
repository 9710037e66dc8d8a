//! Core puzzle types for cryptarithmetic puzzles.
//!
//! A cryptarithmetic puzzle is a set of equations such as `SEND+MORE=MONEY`
//! where every letter stands for a digit, distinct letters stand for distinct
//! digits and no word starts with zero. This crate owns the textual side of
//! the problem: letters, words, equations, the numeric [`Base`] and the
//! line-oriented parser that turns puzzle files into a [`Puzzle`].
//!
//! # Overview
//!
//! - [`letter`]: A single puzzle letter ([`Letter`])
//! - [`word`]: A non-empty sequence of letters ([`Word`])
//! - [`equation`]: One puzzle line, addends followed by a result ([`Equation`])
//! - [`puzzle`]: All equations of one run ([`Puzzle`])
//! - [`base`]: The numeric base digits are drawn from ([`Base`])
//! - [`parser`]: Line-oriented parsing with comment stripping ([`parse_puzzle`])
//! - [`source`]: Where puzzle text comes from, with fallback to the default
//!   puzzle ([`PuzzleSource`])
//! - [`samples`]: The built-in puzzle catalogue ([`SAMPLE_PUZZLES`])
//!
//! # Examples
//!
//! ```
//! use cryptarith_core::{Letter, Puzzle};
//!
//! let puzzle: Puzzle = "SEND+MORE=MONEY".parse()?;
//! assert_eq!(puzzle.equations().len(), 1);
//! assert_eq!(puzzle.distinct_letters().len(), 8);
//! assert_eq!(puzzle.equations()[0].result().leading(), Letter::new('M').unwrap());
//! # Ok::<(), cryptarith_core::ParseError>(())
//! ```

pub mod base;
pub mod equation;
mod error;
pub mod letter;
pub mod parser;
pub mod puzzle;
pub mod samples;
pub mod source;
pub mod word;

pub use self::{
    base::Base,
    equation::Equation,
    error::*,
    letter::Letter,
    parser::{ParseOptions, ParseReport, parse_line, parse_puzzle},
    puzzle::{DEFAULT_PUZZLE, Puzzle},
    samples::{SAMPLE_PUZZLES, find_sample},
    source::{LoadedPuzzle, PuzzleSource},
    word::Word,
};
