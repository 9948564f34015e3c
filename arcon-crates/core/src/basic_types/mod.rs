mod constraint_operation_error;
mod solution;
mod solve_error;
mod trail;

pub use constraint_operation_error::ConstraintOperationError;
pub use solution::Solution;
pub use solve_error::SolveError;
pub(crate) use trail::Trail;
