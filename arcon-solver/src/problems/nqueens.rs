use std::fmt::Display;
use std::fmt::Formatter;

use super::Problem;
use super::ProblemError;
use crate::core::constraints;
use crate::core::variables::VariableId;
use crate::Solver;
use crate::SolverOptions;

/// Place `n` queens on an `n × n` board such that no two queens attack each other.
///
/// There is one variable per row; its value is the column of the queen in that row, so two
/// queens never share a row. Every pair of rows `i < j` is related by a non-attacking relation
/// with distance `j - i`, which excludes the shared column and both diagonals.
#[derive(Debug)]
pub struct NQueens {
    name: String,
    size: usize,
    queens: Vec<VariableId>,
    solver: Solver,
}

impl NQueens {
    pub fn new(size: usize) -> Result<Self, ProblemError> {
        NQueens::with_options(size, SolverOptions::default())
    }

    pub fn with_options(size: usize, options: SolverOptions) -> Result<Self, ProblemError> {
        if size == 0 {
            return Err(ProblemError::InvalidSize(size));
        }

        let mut solver = Solver::with_options(options);
        let queens =
            solver.new_named_variables(size, 0..size as i32, |row| format!("Queen #{row}"));

        for (i, &a) in queens.iter().enumerate() {
            for (j, &b) in queens.iter().enumerate().skip(i + 1) {
                solver
                    .add_constraint(constraints::non_attacking(a, b, (j - i) as i32))
                    .post()?;
            }
        }

        Ok(NQueens {
            name: format!("{size}-queens"),
            size,
            queens,
            solver,
        })
    }

    /// The column of the queen in every row, if a solution was found.
    pub fn columns(&self) -> Option<Vec<i32>> {
        self.queens
            .iter()
            .map(|&queen| self.solver.value(queen))
            .collect()
    }
}

impl Problem for NQueens {
    fn name(&self) -> &str {
        &self.name
    }

    fn solver(&self) -> &Solver {
        &self.solver
    }

    fn solver_mut(&mut self) -> &mut Solver {
        &mut self.solver
    }
}

impl Display for NQueens {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.has_been_solved() {
            return writeln!(f, "{}: the problem has not been solved yet.", self.name);
        }

        let Some(columns) = self.columns() else {
            return writeln!(f, "No solution found for n={}", self.size);
        };

        writeln!(f, "Found solution for n={}", self.size)?;
        for column in columns {
            let row = (0..self.size as i32)
                .map(|square| if square == column { '*' } else { '.' })
                .collect::<String>();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
