use std::{io, num::ParseIntError, path::PathBuf};

use crate::Base;

/// Errors produced when validating a numeric base.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BaseError {
    /// The base lies outside the supported range.
    #[display("base must be between {} and {}, got {value}", Base::MIN, Base::MAX)]
    OutOfRange {
        /// The rejected value.
        value: u32,
    },
    /// The base text is not a number.
    #[display("invalid base: {_0}")]
    Parse(ParseIntError),
}

/// The reason a single puzzle line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseErrorKind {
    /// The line does not contain an addend and a result.
    #[display("expected at least two words, found {count}")]
    TooFewWords {
        /// Number of words found on the line.
        count: usize,
    },
    /// A separator is not surrounded by letters, as in `A++B=C`.
    #[display("empty word")]
    EmptyWord,
    /// A word contains a character that is not an ASCII letter.
    #[display("invalid letter {ch:?}")]
    InvalidLetter {
        /// The offending character.
        ch: char,
    },
    /// The line does not have exactly one `=` directly before its result word.
    #[display("expected exactly one `=` before the result word")]
    MisplacedEquals,
}

/// A rejected puzzle line, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {kind} in `{text}`")]
pub struct ParseError {
    /// 1-based line number in the input text.
    pub line: usize,
    /// The line content after comment stripping.
    pub text: String,
    /// Why the line was rejected.
    #[error(source)]
    pub kind: ParseErrorKind,
}

/// Errors produced while reading a puzzle source.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SourceError {
    /// The puzzle file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the puzzle file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
