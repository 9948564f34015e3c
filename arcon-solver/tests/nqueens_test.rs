#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use arcon_solver::core::VariableSelection;
use arcon_solver::problems::NQueens;
use arcon_solver::problems::Problem;
use arcon_solver::SolverOptions;

fn is_valid_placement(columns: &[i32]) -> bool {
    columns.iter().enumerate().all(|(i, &a)| {
        columns.iter().enumerate().skip(i + 1).all(|(j, &b)| {
            let distance = (j - i) as i32;
            a != b && (a - b).abs() != distance
        })
    })
}

#[test]
fn boards_up_to_ten_are_solved_except_two_and_three() {
    for n in 1..=10 {
        let mut queens = NQueens::new(n).expect("valid size");
        let found = queens.solve().expect("solved once");

        if n == 2 || n == 3 {
            assert!(!found, "no placement exists for n={n}");
            assert_eq!(None, queens.columns());
            continue;
        }

        assert!(found, "a placement exists for n={n}");
        let columns = queens.columns().expect("a solution was found");
        assert_eq!(n, columns.len());
        assert!(is_valid_placement(&columns), "{columns:?} for n={n}");
    }
}

#[test]
fn the_search_is_deterministic() {
    let expected: [(usize, &[i32]); 4] = [
        (1, &[0]),
        (4, &[1, 3, 0, 2]),
        (5, &[0, 2, 4, 1, 3]),
        (8, &[0, 4, 7, 5, 2, 6, 1, 3]),
    ];

    for (n, columns) in expected {
        let mut queens = NQueens::new(n).expect("valid size");
        assert_eq!(Ok(true), queens.solve());
        assert_eq!(Some(columns.to_vec()), queens.columns());
    }
}

#[test]
fn first_fail_finds_valid_placements() {
    for n in [4, 6, 8] {
        let mut queens = NQueens::with_options(
            n,
            SolverOptions {
                variable_selection: VariableSelection::FirstFail,
            },
        )
        .expect("valid size");

        assert_eq!(Ok(true), queens.solve());
        let columns = queens.columns().expect("a solution was found");
        assert!(is_valid_placement(&columns));
    }
}

#[test]
fn queens_are_named_by_row() {
    let queens = NQueens::new(3).expect("valid size");
    let solver = queens.solver();

    assert_eq!(3, solver.num_variables());
    assert!(solver.variable_by_name("Queen #2").is_some());
    assert_eq!("3-queens", queens.name());
}
