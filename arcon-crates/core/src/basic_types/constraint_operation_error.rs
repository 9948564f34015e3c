use thiserror::Error;

#[cfg(doc)]
use crate::Solver;
use crate::variables::VariableId;

/// Errors related to adding constraints to the [`Solver`] or restricting the domains of its
/// variables.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// The variable was not created by this [`Solver`].
    #[error("Variable {0} does not exist in this solver")]
    UnknownVariable(VariableId),
    /// A binary constraint was posted with the same variable on both sides.
    #[error("A binary constraint needs two distinct variables, but {0} was used on both sides")]
    IdenticalVariables(VariableId),
    /// A domain was restricted to a value which is not part of it.
    #[error("Value {value} is not in the domain of {variable}")]
    ValueNotInDomain { variable: VariableId, value: i32 },
    /// The model was modified after [`Solver::solve`] was called; support tables are built once,
    /// so the change could never be taken into account.
    #[error("The model cannot be changed after the solver has been used")]
    SolverAlreadyUsed,
}
