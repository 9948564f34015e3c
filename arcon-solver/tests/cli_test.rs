#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::run_solver;
use helpers::TempFile;
use regex::Regex;

fn timings(stdout: &str) -> usize {
    Regex::new(r"(?m)^Time: \d+ ms$")
        .expect("valid regex")
        .find_iter(stdout)
        .count()
}

#[test]
fn default_suite_solves_every_problem() {
    let run = run_solver(std::iter::empty());

    assert!(run.success);
    // The zebra puzzle, ten boards and two Sudokus.
    assert_eq!(13, timings(&run.stdout));
    assert!(run.stdout.contains("House #4"));
    assert!(run.stdout.contains("No solution found for n=2"));
    assert!(run.stdout.contains("No solution found for n=3"));
    assert!(run.stdout.contains("Found solution for n=10"));
    assert!(run.stdout.contains("812|753|649"));
}

#[test]
fn queens_subcommand_prints_the_board() {
    let run = run_solver(["queens", "4"]);

    assert!(run.success);
    assert!(run
        .stdout
        .contains("Found solution for n=4\n.*..\n...*\n*...\n..*.\nTime: "));
    assert_eq!(1, timings(&run.stdout));
}

#[test]
fn sudoku_is_read_from_a_file() {
    let grid = TempFile::with_contents(
        "cli_test_clued.sudoku",
        "8........\n..36.....\n.7..9.2..\n.5...7...\n....457..\n...1...3.\n..1....68\n..85...1.\n.9....4..\n",
    );

    let run = run_solver(["sudoku", grid.path()]);

    assert!(run.success);
    assert!(run.stdout.contains("812|753|649\n943|682|175\n675|491|283\n---+---+---"));
}

#[test]
fn malformed_sudoku_file_fails() {
    let grid = TempFile::with_contents("cli_test_malformed.sudoku", "8x");

    let run = run_solver(["sudoku", grid.path()]);

    assert!(!run.success);
    assert_eq!(0, timings(&run.stdout));
}

#[test]
fn missing_sudoku_file_fails() {
    let run = run_solver(["sudoku", "this-file-does-not-exist.sudoku"]);

    assert!(!run.success);
}

#[test]
fn statistics_are_logged_with_a_prefix() {
    let run = run_solver(["--log-statistics", "einstein"]);

    assert!(run.success);
    let statistic = Regex::new(r"(?m)^%%%arcon-stat: nodes=\d+$").expect("valid regex");
    assert!(statistic.is_match(&run.stdout), "{}", run.stdout);
    assert!(run.stdout.contains("%%%arcon-stat-end"));
}

#[test]
fn variable_selection_can_be_overridden() {
    let run = run_solver(["--variable-selection", "first-fail", "queens", "6"]);

    assert!(run.success);
    assert!(run.stdout.contains("Found solution for n=6"));
}
