pub(crate) mod solver;

pub use solver::Solver;
pub use solver::SolverOptions;

pub mod variables {
    //! Contains the variable types of the solver.
    //!
    //! A variable is identified by its [`VariableId`], which is handed out by the
    //! [`Solver`](crate::Solver) that created it. Before solving, its [`IntegerDomain`] holds the
    //! values it may take; after a successful solve its [`Assignment`] holds the value it took.
    pub use crate::engine::variables::Assignment;
    pub use crate::engine::variables::IntegerDomain;
    pub use crate::engine::variables::VariableId;
}

