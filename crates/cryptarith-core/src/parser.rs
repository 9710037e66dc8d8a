//! Line-oriented puzzle parsing.
//!
//! Puzzle text holds one equation per line. Blank lines are ignored, a line
//! starting with the comment marker (`//` by default) is skipped entirely and
//! a marker later in the line cuts the line short. The retained text is split
//! on `+` and `=` into words.
//!
//! Malformed lines do not abort parsing: each one is reported as a
//! [`ParseError`] in the [`ParseReport`] and the remaining lines are still
//! parsed.
//!
//! # Examples
//!
//! ```
//! use cryptarith_core::{ParseOptions, parse_puzzle};
//!
//! let text = "
//! // classic puzzles
//! SEND+MORE=MONEY   // the famous one
//!
//! NOT AN EQUATION
//! ";
//! let report = parse_puzzle(text, &ParseOptions::default());
//! assert_eq!(report.puzzle.equations().len(), 1);
//! assert_eq!(report.errors.len(), 1);
//! assert_eq!(report.errors[0].line, 5);
//! ```

use crate::{Equation, ParseError, ParseErrorKind, Puzzle, Word};

/// Marker that starts a comment.
pub const COMMENT_MARKER: &str = "//";

/// Default bound on the number of equation lines.
pub const DEFAULT_MAX_LINES: usize = 100;

/// Options controlling [`parse_puzzle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of equation lines; further lines are dropped.
    ///
    /// Blank and comment lines do not count towards the limit, malformed
    /// lines do.
    pub max_lines: usize,
    /// Marker that starts a comment. An empty marker disables comments.
    pub comment_marker: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            comment_marker: COMMENT_MARKER.to_owned(),
        }
    }
}

/// Result of parsing puzzle text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Equations parsed from well-formed lines, in input order.
    pub puzzle: Puzzle,
    /// Lines that were rejected, in input order.
    pub errors: Vec<ParseError>,
    /// Number of equation lines dropped because of [`ParseOptions::max_lines`].
    pub dropped_lines: usize,
}

/// Parses puzzle text into equations, skipping malformed lines.
///
/// Each rejected line is logged as a warning and recorded in
/// [`ParseReport::errors`].
#[must_use]
pub fn parse_puzzle(text: &str, options: &ParseOptions) -> ParseReport {
    let mut equations = Vec::new();
    let mut errors = Vec::new();
    let mut retained = 0;
    let mut dropped_lines = 0;

    for (i, raw) in text.lines().enumerate() {
        let Some(line) = strip_comment(raw, &options.comment_marker) else {
            continue;
        };
        if retained >= options.max_lines {
            dropped_lines += 1;
            continue;
        }
        retained += 1;

        match parse_line(line) {
            Ok(equation) => equations.push(equation),
            Err(kind) => {
                let err = ParseError {
                    line: i + 1,
                    text: line.to_owned(),
                    kind,
                };
                log::warn!("skipping malformed {err}");
                errors.push(err);
            }
        }
    }

    if dropped_lines > 0 {
        log::warn!(
            "ignored {dropped_lines} equation line(s) beyond the limit of {}",
            options.max_lines
        );
    }

    ParseReport {
        puzzle: Puzzle::new(equations),
        errors,
        dropped_lines,
    }
}

/// Parses a single equation line such as `SEND+MORE=MONEY`.
///
/// The line must not contain comments; see [`parse_puzzle`].
///
/// # Errors
///
/// - [`ParseErrorKind::TooFewWords`] if the line has no separator
/// - [`ParseErrorKind::MisplacedEquals`] unless exactly one `=` precedes the
///   result word
/// - [`ParseErrorKind::EmptyWord`] or [`ParseErrorKind::InvalidLetter`] if a
///   word is not a non-empty run of letters
pub fn parse_line(line: &str) -> Result<Equation, ParseErrorKind> {
    let tokens: Vec<&str> = line.split(['+', '=']).collect();
    if tokens.len() < 2 {
        return Err(ParseErrorKind::TooFewWords {
            count: tokens.len(),
        });
    }

    let mut equals = line.match_indices('=').map(|(pos, _)| pos);
    let (Some(equals_pos), None) = (equals.next(), equals.next()) else {
        return Err(ParseErrorKind::MisplacedEquals);
    };
    if line.rfind('+').is_some_and(|plus_pos| plus_pos > equals_pos) {
        return Err(ParseErrorKind::MisplacedEquals);
    }

    let words = tokens
        .into_iter()
        .map(str::parse::<Word>)
        .collect::<Result<Vec<_>, _>>()?;
    Equation::new(words).ok_or(ParseErrorKind::TooFewWords { count: 1 })
}

/// Returns the equation part of a line, or `None` if nothing remains.
fn strip_comment<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let line = line.trim();
    let line = match line.find(marker) {
        _ if marker.is_empty() => line,
        Some(0) => return None,
        Some(pos) => line[..pos].trim_end(),
        None => line,
    };
    (!line.is_empty()).then_some(line)
}
