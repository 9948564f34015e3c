pub(crate) mod constraint_graph;
mod constraint_satisfaction_solver;
mod free_variables;
pub(crate) mod propagation;
pub(crate) mod solver_statistics;
mod variable_names;
pub(crate) mod variables;

pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use constraint_satisfaction_solver::SolveState;
pub(crate) use free_variables::FreeVariables;
pub(crate) use variable_names::VariableNames;
