//! Puzzle input sources.
//!
//! A run reads its equations from a file, from text given directly, or falls
//! back to the built-in [`DEFAULT_PUZZLE`]. Loading never fails: an
//! unreadable file and an input without any usable equation are both reported
//! in the [`LoadedPuzzle`] and replaced by the default puzzle.

use std::{fs, path::PathBuf};

use crate::{DEFAULT_PUZZLE, ParseError, ParseOptions, Puzzle, SourceError, parse_puzzle};

/// Where puzzle text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleSource {
    /// The built-in default puzzle.
    Default,
    /// A puzzle file, one equation per line.
    File(PathBuf),
    /// Puzzle text given directly.
    Text(String),
}

/// A puzzle together with the diagnostics collected while loading it.
#[derive(Debug)]
pub struct LoadedPuzzle {
    /// The equations to solve. Never empty.
    pub puzzle: Puzzle,
    /// Set when the source could not be read.
    pub source_error: Option<SourceError>,
    /// Lines that were rejected and skipped.
    pub parse_errors: Vec<ParseError>,
    /// Number of equation lines dropped by [`ParseOptions::max_lines`].
    pub dropped_lines: usize,
    /// `true` if [`puzzle`](Self::puzzle) is the default puzzle because no
    /// usable input was available.
    pub used_default: bool,
}

impl LoadedPuzzle {
    fn default_puzzle(source_error: Option<SourceError>) -> Self {
        Self {
            puzzle: Puzzle::default_puzzle(),
            source_error,
            parse_errors: Vec::new(),
            dropped_lines: 0,
            used_default: true,
        }
    }
}

impl PuzzleSource {
    /// Reads and parses the puzzle.
    ///
    /// Falls back to the default puzzle when the source cannot be read or
    /// yields no well-formed equation.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use cryptarith_core::{DEFAULT_PUZZLE, ParseOptions, PuzzleSource};
    ///
    /// let loaded = PuzzleSource::File(PathBuf::from("/no/such/file.txt"))
    ///     .load(&ParseOptions::default());
    /// assert!(loaded.source_error.is_some());
    /// assert!(loaded.used_default);
    /// assert_eq!(loaded.puzzle.to_string(), DEFAULT_PUZZLE);
    /// ```
    #[must_use]
    pub fn load(&self, options: &ParseOptions) -> LoadedPuzzle {
        let text = match self {
            Self::Default => {
                log::info!("no input was supplied, using default puzzle {DEFAULT_PUZZLE}");
                return LoadedPuzzle::default_puzzle(None);
            }
            Self::File(path) => match fs::read_to_string(path) {
                Ok(text) => text,
                Err(source) => {
                    let err = SourceError::Io {
                        path: path.clone(),
                        source,
                    };
                    log::error!("{err}; using default puzzle {DEFAULT_PUZZLE}");
                    return LoadedPuzzle::default_puzzle(Some(err));
                }
            },
            Self::Text(text) => text.clone(),
        };

        let report = parse_puzzle(&text, options);
        if report.puzzle.is_empty() {
            log::warn!("input contains no usable equation, using default puzzle {DEFAULT_PUZZLE}");
            return LoadedPuzzle {
                parse_errors: report.errors,
                dropped_lines: report.dropped_lines,
                ..LoadedPuzzle::default_puzzle(None)
            };
        }

        LoadedPuzzle {
            puzzle: report.puzzle,
            source_error: None,
            parse_errors: report.errors,
            dropped_lines: report.dropped_lines,
            used_default: false,
        }
    }
}
