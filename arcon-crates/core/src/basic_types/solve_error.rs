use thiserror::Error;

#[cfg(doc)]
use crate::Solver;

/// Errors returned by [`Solver::solve`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// [`Solver::solve`] was called on an instance which has already been solved. Every
    /// [`Solver`] can be solved exactly once.
    #[error("The problem has already been solved")]
    AlreadySolved,
}
