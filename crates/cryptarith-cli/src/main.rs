//! Command-line solver for cryptarithmetic puzzles.
//!
//! Reads equations such as `SEND+MORE=MONEY`, one per line, compiles them into
//! a constraint model and prints the digit assignment if one exists.
//!
//! # Usage
//!
//! Solve the built-in default puzzle:
//!
//! ```sh
//! cargo run
//! ```
//!
//! Solve a puzzle file, one equation per line, `//` starting a comment:
//!
//! ```sh
//! cargo run -- puzzles.txt
//! ```
//!
//! Solve equations given on the command line, in another base:
//!
//! ```sh
//! cargo run -- -e "A+A=BC" --base 16
//! ```
//!
//! Solve a built-in sample and show search details:
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --sample send-more-money --strategy first-fail
//! ```
//!
//! # Exit status
//!
//! - `0`: a solution was found
//! - `1`: the puzzle has no solution
//! - `2`: invalid arguments or an invalid model

use std::{path::PathBuf, process};

use clap::{Parser, ValueEnum};
use cryptarith_core::{
    Base, LoadedPuzzle, ParseOptions, PuzzleSource, SAMPLE_PUZZLES, find_sample,
    parser::DEFAULT_MAX_LINES,
};
use cryptarith_model::solve_puzzle;
use cryptarith_solver::{SearchStrategy, Store};

mod version;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    /// Label the letters attached to the most constraints first.
    MostConstrained,
    /// Label the letter with the fewest remaining digits first.
    FirstFail,
    /// Label the letters in order of appearance.
    InputOrder,
}

impl From<StrategyKind> for SearchStrategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::MostConstrained => Self::MostConstrainedStatic,
            StrategyKind::FirstFail => Self::FirstFail,
            StrategyKind::InputOrder => Self::InputOrder,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
struct Args {
    /// Puzzle file with one equation per line.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Equation to solve, such as SEND+MORE=MONEY. Repeatable.
    #[arg(
        short,
        long = "equation",
        value_name = "TEXT",
        conflicts_with_all = ["file", "sample"]
    )]
    equations: Vec<String>,

    /// Built-in sample puzzle to solve (see --list-samples).
    #[arg(long, value_name = "NAME", conflicts_with = "file")]
    sample: Option<String>,

    /// Print the built-in sample puzzles and exit.
    #[arg(long)]
    list_samples: bool,

    /// Numeric base letters stand for digits in (2 to 64).
    #[arg(short, long, value_name = "N", default_value_t = Base::DECIMAL)]
    base: Base,

    /// Maximum number of equation lines to read.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// Variable selection heuristic for the search.
    #[arg(long, value_name = "KIND", default_value = "most-constrained")]
    strategy: StrategyKind,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.list_samples {
        for (name, text) in SAMPLE_PUZZLES {
            println!("{name:<24} {text}");
        }
        return;
    }

    let source = input_source(&args).unwrap_or_else(|name| {
        eprintln!("Unknown sample: {name}");
        eprintln!("Run with --list-samples to see the available samples.");
        process::exit(2);
    });
    let options = ParseOptions {
        max_lines: args.max_lines,
        ..ParseOptions::default()
    };
    let loaded = source.load(&options);
    print_diagnostics(&loaded);

    println!("{}", loaded.puzzle);
    println!();

    let mut store = Store::new();
    let outcome = solve_puzzle(&loaded.puzzle, args.base, &mut store, args.strategy.into())
        .unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            process::exit(2);
        });

    println!("{outcome}");
    if !outcome.is_pigeonhole() {
        println!();
        println!("Search: {}", store.stats());
    }
    if !outcome.is_solved() {
        process::exit(1);
    }
}

/// Chooses the puzzle source, or returns the name of an unknown sample.
fn input_source(args: &Args) -> Result<PuzzleSource, String> {
    if let Some(name) = &args.sample {
        return find_sample(name)
            .map(|text| PuzzleSource::Text(text.to_owned()))
            .ok_or_else(|| name.clone());
    }
    if !args.equations.is_empty() {
        return Ok(PuzzleSource::Text(args.equations.join("\n")));
    }
    Ok(args
        .file
        .clone()
        .map_or(PuzzleSource::Default, PuzzleSource::File))
}

fn print_diagnostics(loaded: &LoadedPuzzle) {
    if let Some(err) = &loaded.source_error {
        eprintln!("Warning: {err}");
    }
    for err in &loaded.parse_errors {
        eprintln!("Warning: skipped {err}");
    }
    if loaded.dropped_lines > 0 {
        eprintln!(
            "Warning: ignored {} equation line(s) beyond --max-lines",
            loaded.dropped_lines
        );
    }
    if loaded.used_default {
        eprintln!("Using the default puzzle.");
    }
}
