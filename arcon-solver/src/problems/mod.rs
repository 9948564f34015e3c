//! Classic puzzles expressed as binary constraint satisfaction problems.
//!
//! Every puzzle builds its model when it is created and owns the [`Solver`] for it; calling
//! [`Problem::solve`] searches for the first solution, after which the puzzle can be displayed.
mod einstein;
mod nqueens;
mod sudoku;

use std::fmt::Display;

pub use einstein::Einstein;
pub use nqueens::NQueens;
pub use sudoku::Sudoku;
pub use sudoku::SAMPLE_CLUES;
use thiserror::Error;

use crate::core::ConstraintOperationError;
use crate::core::SolveError;
use crate::Solver;

/// Errors related to creating or querying a [`Problem`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("The size of the problem must be positive, but was {0}")]
    InvalidSize(usize),
    #[error("Cell ({row}, {column}) is outside of the grid")]
    OutOfBounds { row: usize, column: usize },
    #[error("The clue {value} of cell ({row}, {column}) is not a digit between 1 and 9")]
    InvalidClue { row: usize, column: usize, value: i32 },
    #[error("The grid could not be read: {0}")]
    InvalidGrid(String),
    #[error("There is no variable named '{0}'")]
    UnknownName(String),
    #[error("Failed to build the model, more details: {0}")]
    Constraint(#[from] ConstraintOperationError),
    #[error("Failed to solve the model, more details: {0}")]
    Solve(#[from] SolveError),
}

/// A puzzle with its model.
///
/// The [`Display`] implementation shows whether the puzzle has been solved and, if a solution was
/// found, renders it.
pub trait Problem: Display {
    fn name(&self) -> &str;

    /// The solver holding the model of the puzzle.
    fn solver(&self) -> &Solver;

    fn solver_mut(&mut self) -> &mut Solver;

    /// Searches for a solution; returns whether one was found.
    fn solve(&mut self) -> Result<bool, ProblemError> {
        Ok(self.solver_mut().solve()?)
    }

    fn has_been_solved(&self) -> bool {
        self.solver().has_been_solved()
    }

    fn has_found_solution(&self) -> bool {
        self.solver().found_solution()
    }
}
