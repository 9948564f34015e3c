use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use super::Problem;
use super::ProblemError;
use crate::core::constraints;
use crate::core::variables::VariableId;
use crate::core::VariableSelection;
use crate::Solver;
use crate::SolverOptions;

const SIZE: usize = 9;
const BLOCK: usize = 3;

/// The clues of a hard puzzle with a unique solution, as `(row, column, value)`.
pub const SAMPLE_CLUES: [(usize, usize, i32); 21] = [
    (1, 1, 8),
    (2, 3, 3),
    (2, 4, 6),
    (3, 2, 7),
    (3, 5, 9),
    (3, 7, 2),
    (4, 2, 5),
    (4, 6, 7),
    (5, 5, 4),
    (5, 6, 5),
    (5, 7, 7),
    (6, 4, 1),
    (6, 8, 3),
    (7, 3, 1),
    (7, 8, 6),
    (7, 9, 8),
    (8, 3, 8),
    (8, 4, 5),
    (8, 8, 1),
    (9, 2, 9),
    (9, 7, 4),
];

/// A 9 × 9 Sudoku.
///
/// Rows and columns are numbered 1 to 9. Every cell is a variable with the domain `1..=9`; the
/// cells of every row, column and 3 × 3 block are all different, and a clue restricts its cell
/// to a single value.
#[derive(Debug)]
pub struct Sudoku {
    cells: Vec<VariableId>,
    solver: Solver,
}

impl Sudoku {
    pub fn empty() -> Result<Self, ProblemError> {
        Sudoku::with_clues(std::iter::empty())
    }

    /// Creates the Sudoku with the given `(row, column, value)` clues, solved with
    /// [`Sudoku::default_options`].
    pub fn with_clues(
        clues: impl IntoIterator<Item = (usize, usize, i32)>,
    ) -> Result<Self, ProblemError> {
        Sudoku::with_options(clues, Sudoku::default_options())
    }

    /// Sudoku is searched smallest domain first; choosing the largest domain gets lost in the
    /// empty grid.
    ///
    /// Solving the empty grid with [`VariableSelection::AntiFirstFail`] (e.g. through
    /// `--variable-selection anti-first-fail`) does not terminate in practice.
    pub fn default_options() -> SolverOptions {
        SolverOptions {
            variable_selection: VariableSelection::FirstFail,
        }
    }

    pub fn with_options(
        clues: impl IntoIterator<Item = (usize, usize, i32)>,
        options: SolverOptions,
    ) -> Result<Self, ProblemError> {
        let mut solver = Solver::with_options(options);
        let cells = solver.new_named_variables(SIZE * SIZE, 1..=SIZE as i32, |index| {
            format!("cell({}, {})", index / SIZE + 1, index % SIZE + 1)
        });

        let mut sudoku = Sudoku { cells, solver };
        for group in Sudoku::groups() {
            let variables = group
                .into_iter()
                .map(|(row, column)| sudoku.cells[Sudoku::index(row, column)])
                .collect::<Vec<_>>();
            sudoku
                .solver
                .add_constraint(constraints::all_different(variables))
                .post()?;
        }

        for (row, column, value) in clues {
            let cell = sudoku.cell(row, column)?;
            if !(1..=SIZE as i32).contains(&value) {
                return Err(ProblemError::InvalidClue { row, column, value });
            }
            sudoku.solver.restrict_domain(cell, value)?;
        }

        Ok(sudoku)
    }

    /// Reads the clues of a grid of 81 cells, row by row.
    ///
    /// A cell is a digit `1`-`9` for a clue or `.`/`0` for an empty cell. Whitespace and the
    /// separators `|`, `-` and `+` are ignored.
    pub fn parse_clues(grid: &str) -> Result<Vec<(usize, usize, i32)>, ProblemError> {
        let cells = grid
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | '-' | '+'))
            .map(|c| match c {
                '.' | '0' => Ok(None),
                '1'..='9' => Ok(c.to_digit(10).map(|digit| digit as i32)),
                _ => Err(ProblemError::InvalidGrid(format!(
                    "unexpected character '{c}'"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != SIZE * SIZE {
            return Err(ProblemError::InvalidGrid(format!(
                "expected {} cells, found {}",
                SIZE * SIZE,
                cells.len()
            )));
        }

        Ok(cells
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                value.map(|value| (index / SIZE + 1, index % SIZE + 1, value))
            })
            .collect())
    }

    /// The variable of the cell at (`row`, `column`).
    pub fn cell(&self, row: usize, column: usize) -> Result<VariableId, ProblemError> {
        if !(1..=SIZE).contains(&row) || !(1..=SIZE).contains(&column) {
            return Err(ProblemError::OutOfBounds { row, column });
        }
        Ok(self.cells[Sudoku::index(row, column)])
    }

    /// The value of the cell at (`row`, `column`), or [`None`] if no solution has been found.
    pub fn value(&self, row: usize, column: usize) -> Result<Option<i32>, ProblemError> {
        Ok(self.solver.value(self.cell(row, column)?))
    }

    /// The solved grid, indexed from 0.
    pub fn grid(&self) -> Option<[[i32; SIZE]; SIZE]> {
        let mut grid = [[0; SIZE]; SIZE];
        for (index, &cell) in self.cells.iter().enumerate() {
            grid[index / SIZE][index % SIZE] = self.solver.value(cell)?;
        }
        Some(grid)
    }

    fn index(row: usize, column: usize) -> usize {
        SIZE * (row - 1) + column - 1
    }

    /// The cells of every row, column and block.
    fn groups() -> Vec<Vec<(usize, usize)>> {
        let rows = (1..=SIZE).map(|row| {
            (1..=SIZE)
                .map(|column| (row, column))
                .collect::<Vec<_>>()
        });
        let columns = (1..=SIZE).map(|column| {
            (1..=SIZE)
                .map(|row| (row, column))
                .collect::<Vec<_>>()
        });
        let blocks = (0..SIZE).map(|block| {
            let (top, left) = (BLOCK * (block / BLOCK), BLOCK * (block % BLOCK));
            (0..SIZE)
                .map(|i| (top + i / BLOCK + 1, left + i % BLOCK + 1))
                .collect::<Vec<_>>()
        });

        rows.chain(columns).chain(blocks).collect()
    }
}

impl FromStr for Sudoku {
    type Err = ProblemError;

    fn from_str(grid: &str) -> Result<Self, Self::Err> {
        Sudoku::with_clues(Sudoku::parse_clues(grid)?)
    }
}

impl Problem for Sudoku {
    fn name(&self) -> &str {
        "Sudoku"
    }

    fn solver(&self) -> &Solver {
        &self.solver
    }

    fn solver_mut(&mut self) -> &mut Solver {
        &mut self.solver
    }
}

impl Display for Sudoku {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.has_been_solved() {
            return writeln!(f, "{}: the problem has not been solved yet.", self.name());
        }

        let Some(grid) = self.grid() else {
            return writeln!(f, "{}: no solution found.", self.name());
        };

        writeln!(f, "Found solution!")?;
        for (row, values) in grid.iter().enumerate() {
            if row > 0 && row % BLOCK == 0 {
                writeln!(f, "---+---+---")?;
            }
            for (column, value) in values.iter().enumerate() {
                if column > 0 && column % BLOCK == 0 {
                    write!(f, "|")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
