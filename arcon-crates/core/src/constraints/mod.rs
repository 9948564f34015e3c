//! The constraints which can be added to a [`Solver`].
//!
//! Every constraint is a conjunction of binary relations. Posting a constraint registers each
//! relation with the constraint network of the solver, which takes all of them into account once
//! [`Solver::solve`] builds the support tables.
//!
//! # Example
//! ```
//! # use arcon_core::constraints;
//! # use arcon_core::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_variable(0..3);
//! let b = solver.new_variable(0..3);
//!
//! solver
//!     .add_constraint(constraints::offset(a, b, 2))
//!     .post()
//!     .expect("a and b are distinct variables of the solver");
//!
//! assert_eq!(Ok(true), solver.solve());
//! assert_eq!(Some(0), solver.value(a));
//! assert_eq!(Some(2), solver.value(b));
//! ```
mod all_different;
mod binary;
mod constraint_poster;

pub use all_different::*;
pub use binary::*;
pub use constraint_poster::*;

use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables which restricts the assignments that can make it
/// into a solution.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// Fails if a variable is unknown to the solver, if a binary relation would relate a variable
    /// to itself, or if the solver has already been used.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}
