#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use arcon_solver::problems::Problem;
use arcon_solver::problems::ProblemError;
use arcon_solver::problems::Sudoku;
use arcon_solver::problems::SAMPLE_CLUES;

fn rows(grid: [[i32; 9]; 9]) -> Vec<String> {
    grid.iter()
        .map(|row| row.iter().map(|value| value.to_string()).collect())
        .collect()
}

fn is_valid_grid(grid: &[[i32; 9]; 9]) -> bool {
    let is_permutation = |cells: Vec<i32>| {
        let mut cells = cells;
        cells.sort_unstable();
        cells == (1..=9).collect::<Vec<_>>()
    };

    (0..9).all(|i| {
        let row = grid[i].to_vec();
        let column = (0..9).map(|j| grid[j][i]).collect();
        let block = (0..9)
            .map(|j| grid[3 * (i / 3) + j / 3][3 * (i % 3) + j % 3])
            .collect();

        is_permutation(row) && is_permutation(column) && is_permutation(block)
    })
}

#[test]
fn the_empty_grid_is_filled() {
    let mut sudoku = Sudoku::empty().expect("valid model");

    assert_eq!(Ok(true), sudoku.solve());
    let grid = sudoku.grid().expect("a solution was found");
    assert!(is_valid_grid(&grid));
    assert_eq!("123456789", rows(grid)[0]);
}

#[test]
fn a_single_clue_is_respected() {
    let mut sudoku = Sudoku::with_clues([(1, 1, 8)]).expect("valid clue");

    assert_eq!(Ok(true), sudoku.solve());
    assert_eq!(Ok(Some(8)), sudoku.value(1, 1));
    assert!(is_valid_grid(&sudoku.grid().expect("a solution was found")));
}

#[test]
fn the_sample_puzzle_has_its_known_solution() {
    let mut sudoku = Sudoku::with_clues(SAMPLE_CLUES).expect("valid clues");

    assert_eq!(Ok(true), sudoku.solve());
    assert_eq!(
        vec![
            "812753649",
            "943682175",
            "675491283",
            "154237896",
            "369845721",
            "287169534",
            "521974368",
            "438526917",
            "796318452",
        ],
        rows(sudoku.grid().expect("a solution was found"))
    );
}

#[test]
fn grids_are_read_from_text() {
    let mut sudoku: Sudoku = "8........\n..36.....\n.7..9.2..\n\
                              .5...7...\n....457..\n...1...3.\n\
                              ..1....68\n..85...1.\n.9....4..\n"
        .parse()
        .expect("valid grid");

    assert_eq!(Ok(true), sudoku.solve());
    assert_eq!(Ok(Some(3)), sudoku.value(1, 6));
    assert_eq!(Ok(Some(8)), sudoku.value(1, 1));
}

#[test]
fn conflicting_clues_have_no_solution() {
    let mut sudoku = Sudoku::with_clues([(1, 1, 5), (1, 9, 5)]).expect("valid clues");

    assert_eq!(Ok(false), sudoku.solve());
    assert_eq!(None, sudoku.grid());
    assert_eq!("Sudoku: no solution found.\n", sudoku.to_string());
}

#[test]
fn clues_outside_the_grid_are_rejected() {
    assert_eq!(
        Some(ProblemError::OutOfBounds { row: 1, column: 0 }),
        Sudoku::with_clues([(1, 0, 5)]).err()
    );
    assert_eq!(
        Some(ProblemError::InvalidClue {
            row: 4,
            column: 4,
            value: 0
        }),
        Sudoku::with_clues([(4, 4, 0)]).err()
    );
}

#[test]
fn solved_grids_are_rendered_in_blocks() {
    let mut sudoku = Sudoku::with_clues(SAMPLE_CLUES).expect("valid clues");
    let _ = sudoku.solve().expect("solved once");

    let rendered = sudoku.to_string();
    let lines = rendered.lines().collect::<Vec<_>>();
    assert_eq!("Found solution!", lines[0]);
    assert_eq!("812|753|649", lines[1]);
    assert_eq!("---+---+---", lines[4]);
    assert_eq!("796|318|452", lines[11]);
}
