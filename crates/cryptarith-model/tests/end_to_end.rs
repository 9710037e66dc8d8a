//! End-to-end tests: puzzle text in, checked solutions out.

use cryptarith_core::{Base, Letter, ParseOptions, Puzzle, PuzzleSource, SAMPLE_PUZZLES};
use cryptarith_model::{Outcome, Solution, solve};
use cryptarith_solver::SearchStrategy;

const STRATEGIES: [SearchStrategy; 3] = [
    SearchStrategy::MostConstrainedStatic,
    SearchStrategy::FirstFail,
    SearchStrategy::InputOrder,
];

fn solve_text(text: &str, base: Base, strategy: SearchStrategy) -> Outcome {
    let puzzle: Puzzle = text.parse().unwrap();
    solve(&puzzle, base, strategy).unwrap().0
}

fn solved(text: &str) -> Solution {
    match solve_text(text, Base::DECIMAL, SearchStrategy::default()) {
        Outcome::Solved(solution) => solution,
        outcome => panic!("{text}: expected a solution, got {outcome}"),
    }
}

fn digits(solution: &Solution) -> String {
    solution
        .assignment()
        .iter()
        .map(|(letter, digit)| format!("{letter}={digit}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks every equation of `solution` against its letters.
fn assert_consistent(puzzle: &Puzzle, solution: &Solution) {
    let radix = u64::from(solution.base().get());
    let mut used = Vec::new();
    for (letter, digit) in solution.assignment() {
        assert!(!used.contains(digit), "digit {digit} used twice");
        assert!(u64::from(*digit) < radix, "{letter}={digit} out of base");
        used.push(*digit);
    }

    for (equation, words) in puzzle.equations().iter().zip(solution.equations()) {
        let mut values = Vec::new();
        for (word, solved) in equation.words().iter().zip(words) {
            assert_eq!(solved.word(), word);
            assert_ne!(solution.digit(word.leading()), Some(0), "{word} starts with 0");
            let value = word.letters().iter().fold(0, |acc, &letter| {
                acc * radix + u64::from(solution.digit(letter).unwrap())
            });
            assert_eq!(solved.value(), value, "{word}");
            values.push(value);
        }
        let (result, addends) = values.split_last().unwrap();
        assert_eq!(addends.iter().sum::<u64>(), *result, "{equation}");
    }
}

#[test]
fn test_send_more_money() {
    for strategy in STRATEGIES {
        let Outcome::Solved(solution) = solve_text("SEND+MORE=MONEY", Base::DECIMAL, strategy)
        else {
            panic!("no solution with {strategy}");
        };
        assert_eq!(digits(&solution), "D=7 E=5 M=1 N=6 O=0 R=8 S=9 Y=2");
        assert_eq!(
            solution.to_string(),
            "D=7 E=5 M=1 N=6 O=0 R=8 S=9 Y=2\n9567 + 1085 = 10652"
        );
    }
}

#[test]
fn test_known_unique_solutions() {
    assert_eq!(digits(&solved("I+BB=ILL")), "B=9 I=1 L=0");
    assert_eq!(digits(&solved("A+A+A+A+A+A+A+A+A+A+A+B=BCC")), "A=9 B=1 C=0");
    assert_eq!(
        digits(&solved("NO+NO+TOO=LATE")),
        "A=0 E=2 L=1 N=7 O=4 T=9"
    );
}

#[test]
fn test_no_solution() {
    for text in ["A=B", "ACA+DD=BD", "ABC+DEF=GH"] {
        for strategy in STRATEGIES {
            assert_eq!(
                solve_text(text, Base::DECIMAL, strategy),
                Outcome::NoSolution,
                "{text} with {strategy}"
            );
        }
    }
}

#[test]
fn test_pigeonhole() {
    let (outcome, stats) = solve(
        &"ABCDEF+GHIJK=ABC".parse().unwrap(),
        Base::DECIMAL,
        SearchStrategy::default(),
    )
    .unwrap();
    let Outcome::Pigeonhole { letters, base } = &outcome else {
        panic!("expected a pigeonhole outcome, got {outcome}");
    };
    assert_eq!(letters.len(), 11);
    assert_eq!(*base, Base::DECIMAL);
    assert!(outcome.to_string().contains("{A, B, C, D, E, F, G, H, I, J, K}"));
    assert_eq!(stats.decisions(), 0);
    assert_eq!(stats.propagations(), 0);
}

#[test]
fn test_pigeonhole_reported_for_overlong_words() {
    let puzzle: Puzzle = "ABCDEFGHIJKABCDEFGHI+A=B".parse().unwrap();
    let (outcome, stats) = solve(&puzzle, Base::DECIMAL, SearchStrategy::default()).unwrap();
    assert!(outcome.is_pigeonhole(), "{outcome}");
    assert_eq!(stats.propagations(), 0);
}

#[test]
fn test_multi_line_puzzle_shares_letters() {
    let puzzle: Puzzle = "A+A=B\nB+B=C\nC+A=D".parse().unwrap();
    let (outcome, _) = solve(&puzzle, Base::DECIMAL, SearchStrategy::default()).unwrap();
    let Outcome::Solved(solution) = outcome else {
        panic!("expected a solution, got {outcome}");
    };
    assert_consistent(&puzzle, &solution);
    // B = 2A, C = 4A, D = 5A with distinct single digits
    assert_eq!(digits(&solution), "A=1 B=2 C=4 D=5");
}

#[test]
fn test_hexadecimal_base() {
    let puzzle: Puzzle = "A+A=BC".parse().unwrap();
    let base = Base::new(16).unwrap();
    let (outcome, _) = solve(&puzzle, base, SearchStrategy::default()).unwrap();
    let Outcome::Solved(solution) = outcome else {
        panic!("expected a solution, got {outcome}");
    };
    assert_consistent(&puzzle, &solution);
    assert_eq!(solution.digit(Letter::new('B').unwrap()), Some(1));
}

#[test]
fn test_binary_base() {
    // A=1 and B=0 make 1 + 1 = 10
    let puzzle: Puzzle = "A+A=AB".parse().unwrap();
    let (outcome, _) = solve(&puzzle, Base::new(2).unwrap(), SearchStrategy::default()).unwrap();
    let Outcome::Solved(solution) = outcome else {
        panic!("expected a solution, got {outcome}");
    };
    assert_eq!(solution.to_string(), "A=1 B=0\n1 + 1 = 10");
}

#[test]
fn test_samples_are_consistent_when_solved() {
    for (name, text) in SAMPLE_PUZZLES {
        let puzzle: Puzzle = text.parse().unwrap();
        let (outcome, _) = solve(&puzzle, Base::DECIMAL, SearchStrategy::default()).unwrap();
        match outcome {
            Outcome::Solved(solution) => assert_consistent(&puzzle, &solution),
            Outcome::NoSolution => {}
            Outcome::Pigeonhole { .. } => panic!("sample {name} has too many letters"),
        }
    }
}

#[test]
fn test_default_source_is_solvable() {
    let loaded = PuzzleSource::Default.load(&ParseOptions::default());
    let (outcome, _) = solve(&loaded.puzzle, Base::DECIMAL, SearchStrategy::default()).unwrap();
    let Outcome::Solved(solution) = outcome else {
        panic!("expected a solution, got {outcome}");
    };
    assert_consistent(&loaded.puzzle, &solution);
}

#[test]
fn test_strategies_agree_on_satisfiability() {
    for (_, text) in SAMPLE_PUZZLES.iter().take(6) {
        let answers: Vec<bool> = STRATEGIES
            .iter()
            .map(|&strategy| solve_text(text, Base::DECIMAL, strategy).is_solved())
            .collect();
        assert!(answers.iter().all(|&found| found == answers[0]), "{text}");
    }
}
