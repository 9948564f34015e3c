//! # Arcon
//! The arcon binary constraint satisfaction solver, together with a number of classic puzzles
//! modelled on top of it.
//!
//! The engine itself lives in [`arcon_core`], which is re-exported as [`core`]; the puzzles are
//! found in [`problems`].
//!
//! ```rust
//! # use arcon_solver::problems::NQueens;
//! # use arcon_solver::problems::Problem;
//! let mut queens = NQueens::new(4).expect("4 is a valid size");
//!
//! assert_eq!(Ok(true), queens.solve());
//! assert_eq!(Some(vec![1, 3, 0, 2]), queens.columns());
//! ```
pub use arcon_core as core;
pub use arcon_core::Solver;
pub use arcon_core::SolverOptions;

pub mod problems;
