//! # Arcon
//! Arcon is a solver for binary constraint satisfaction problems. A problem consists of variables
//! with finite integer domains and of binary relations between pairs of variables; the solver
//! searches for one assignment of values which satisfies every relation.
//!
//! The search is a depth-first backtracking search which maintains arc consistency at every node
//! with the AC4 algorithm: for every value of a variable and every neighbouring variable it counts
//! how many values of the neighbour still support it, and removes the value as soon as one of
//! these counters reaches zero. Values removed while exploring a branch are restored when the
//! search backtracks out of it.
//!
//! # Using Arcon
//! The main interaction point is the [`Solver`]:
//! ```rust
//! # use arcon_core::constraints;
//! # use arcon_core::Solver;
//! let mut solver = Solver::default();
//!
//! // Four queens, one per row; the value of a variable is the column of its queen.
//! let queens = solver.new_variables(4, 0..4);
//! for (i, &a) in queens.iter().enumerate() {
//!     for (j, &b) in queens.iter().enumerate().skip(i + 1) {
//!         solver
//!             .add_constraint(constraints::non_attacking(a, b, (j - i) as i32))
//!             .post()
//!             .expect("the queens belong to the solver");
//!     }
//! }
//!
//! assert_eq!(Ok(true), solver.solve());
//!
//! let columns = queens
//!     .iter()
//!     .map(|&queen| solver.value(queen))
//!     .collect::<Option<Vec<_>>>();
//! assert_eq!(Some(vec![1, 3, 0, 2]), columns);
//! ```
//!
//! A [`Solver`] can be solved once. Adding constraints afterwards results in a
//! [`ConstraintOperationError::SolverAlreadyUsed`] and a second call to [`Solver::solve`] results
//! in a [`SolveError::AlreadySolved`].
pub(crate) mod basic_types;
pub(crate) mod branching;
pub mod containers;
pub(crate) mod engine;

#[doc(hidden)]
pub mod asserts;

pub mod constraints;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
mod api;

pub use api::*;

pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::Solution;
pub use crate::basic_types::SolveError;
pub use crate::branching::variable_selection::VariableSelection;
pub use crate::engine::constraint_graph::BinaryRelation;
pub use crate::engine::variables::Assignment;
pub use crate::engine::variables::IntegerDomain;
pub use crate::engine::variables::VariableId;
