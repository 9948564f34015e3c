use log::debug;

use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::basic_types::SolveError;
use crate::branching::variable_selection::VariableSelection;
use crate::constraints::Constraint;
use crate::constraints::ConstraintPoster;
use crate::engine::constraint_graph::BinaryRelation;
use crate::engine::variables::IntegerDomain;
use crate::engine::variables::VariableId;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::SolveState;
use crate::statistics::log_statistic_postfix;

/// The options which influence the search of a [`Solver`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// How the next variable to branch on is selected.
    pub variable_selection: VariableSelection,
}

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
/// A solver is used exactly once: variables and constraints are added first, then
/// [`Solver::solve`] builds the support tables and searches for the first solution. Afterwards the
/// model is frozen and the solver only answers queries about the result.
///
/// # Example
/// ```rust
/// # use arcon_core::constraints;
/// # use arcon_core::Solver;
/// let mut solver = Solver::default();
///
/// // Three variables which can each take a value in 0..3
/// let variables = solver.new_variables(3, 0..3);
///
/// // A variable with a named, non-contiguous domain
/// let named = solver.new_named_variable([1, 4, 9], "square");
///
/// solver
///     .add_constraint(constraints::all_different(variables.clone()))
///     .post()
///     .expect("every variable belongs to the solver");
/// solver.restrict_domain(variables[0], 2).expect("2 is in the domain");
///
/// assert_eq!(Ok(true), solver.solve());
/// assert_eq!(Some(2), solver.value(variables[0]));
/// assert_eq!(Some(0), solver.value(variables[1]));
/// assert_eq!(Some(1), solver.value(named));
/// ```
#[derive(Debug)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    pub(crate) satisfaction_solver: ConstraintSatisfactionSolver,
    options: SolverOptions,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::with_options(SolverOptions::default())
    }
}

impl Solver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(options: SolverOptions) -> Self {
        Solver {
            satisfaction_solver: ConstraintSatisfactionSolver::new(
                options.variable_selection.create_selector(),
            ),
            options,
        }
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// Logs the statistics currently present in the solver.
    ///
    /// Nothing is written unless
    /// [`configure_statistic_logging`](crate::statistics::configure_statistic_logging) was called.
    pub fn log_statistics(&self, verbose: bool) {
        self.satisfaction_solver.log_statistics(verbose);
        log_statistic_postfix();
    }
}

/// Functions to create variables.
impl Solver {
    /// Creates a variable which can take the provided values.
    pub fn new_variable(&mut self, domain: impl IntoIterator<Item = i32>) -> VariableId {
        self.satisfaction_solver
            .create_new_variable(IntegerDomain::new(domain), None)
    }

    /// Creates a named variable which can take the provided values.
    pub fn new_named_variable(
        &mut self,
        domain: impl IntoIterator<Item = i32>,
        name: impl Into<String>,
    ) -> VariableId {
        self.satisfaction_solver
            .create_new_variable(IntegerDomain::new(domain), Some(name.into()))
    }

    /// Creates `count` variables, each with its own copy of the provided domain.
    pub fn new_variables(
        &mut self,
        count: usize,
        domain: impl IntoIterator<Item = i32>,
    ) -> Vec<VariableId> {
        let domain = IntegerDomain::new(domain);
        (0..count)
            .map(|_| {
                self.satisfaction_solver
                    .create_new_variable(domain.clone(), None)
            })
            .collect()
    }

    /// Creates `count` variables, each with its own copy of the provided domain; the i-th variable
    /// is named `namer(i)`.
    pub fn new_named_variables(
        &mut self,
        count: usize,
        domain: impl IntoIterator<Item = i32>,
        mut namer: impl FnMut(usize) -> String,
    ) -> Vec<VariableId> {
        let domain = IntegerDomain::new(domain);
        (0..count)
            .map(|index| {
                self.satisfaction_solver
                    .create_new_variable(domain.clone(), Some(namer(index)))
            })
            .collect()
    }

    /// Reduces the domain of `variable` to the single `value`, e.g. for the clues of a puzzle.
    ///
    /// Fails if the variable is unknown, if `value` is not in its domain, or if the solver has
    /// already been used.
    pub fn restrict_domain(
        &mut self,
        variable: VariableId,
        value: i32,
    ) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.restrict_domain(variable, value)
    }
}

/// Functions to retrieve information about variables.
impl Solver {
    pub fn num_variables(&self) -> usize {
        self.satisfaction_solver.num_variables()
    }

    /// Whether `variable` was created by this solver.
    pub fn contains_variable(&self, variable: VariableId) -> bool {
        (variable.id as usize) < self.num_variables()
    }

    /// The current domain of `variable`, or [`None`] if it is unknown.
    ///
    /// After a search which found a solution, the domains are those of the node where the last
    /// variable was fixed; after a failed search they are restored to their state at the root.
    /// The values of the variables are available through [`Solver::value`].
    pub fn domain(&self, variable: VariableId) -> Option<&IntegerDomain> {
        self.satisfaction_solver.domain(variable)
    }

    pub fn variable_name(&self, variable: VariableId) -> Option<&str> {
        self.satisfaction_solver.variable_name(variable)
    }

    /// The variable which was created with `name`.
    pub fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.satisfaction_solver.variable_by_name(name)
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`]; the constraint is only
    /// added once [`ConstraintPoster::post`] is called. If it is never called, a warning is
    /// emitted.
    ///
    /// # Example
    /// ```
    /// # use arcon_core::constraints;
    /// # use arcon_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_variable(0..4);
    /// let b = solver.new_variable(0..4);
    ///
    /// solver
    ///     .add_constraint(constraints::adjacent(a, b))
    ///     .post()
    ///     .expect("a and b belong to the solver");
    /// ```
    pub fn add_constraint<ConstraintImpl: Constraint>(
        &mut self,
        constraint: ConstraintImpl,
    ) -> ConstraintPoster<'_, ConstraintImpl> {
        ConstraintPoster::new(self, constraint)
    }

    pub(crate) fn add_relation(
        &mut self,
        a: VariableId,
        b: VariableId,
        relation: BinaryRelation,
    ) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.add_relation(a, b, relation)
    }
}

/// Functions for solving.
impl Solver {
    /// Searches for the first solution; returns whether one exists.
    ///
    /// Every solver can be solved once; a second call returns [`SolveError::AlreadySolved`].
    pub fn solve(&mut self) -> Result<bool, SolveError> {
        debug!(
            "Solving {} variables with {}",
            self.num_variables(),
            self.options.variable_selection
        );
        self.satisfaction_solver.solve()
    }

    pub fn has_been_solved(&self) -> bool {
        self.satisfaction_solver.state() != SolveState::Modelling
    }

    pub fn found_solution(&self) -> bool {
        self.satisfaction_solver.state() == SolveState::Satisfiable
    }

    /// The value of `variable` in the solution; [`None`] if no solution has been found or the
    /// variable is unknown.
    pub fn value(&self, variable: VariableId) -> Option<i32> {
        if !self.found_solution() {
            return None;
        }
        self.satisfaction_solver.assigned_value(variable)
    }

    /// The solution, if one has been found.
    pub fn solution(&self) -> Option<Solution> {
        if !self.found_solution() {
            return None;
        }
        self.satisfaction_solver.solution()
    }

    /// Whether `solution` assigns every variable a declared value and satisfies every constraint
    /// added to the solver.
    ///
    /// The constraints are only evaluated once the solver has been solved.
    pub fn is_satisfied_by(&self, solution: &Solution) -> bool {
        self.has_been_solved() && self.satisfaction_solver.is_satisfied_by(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use super::SolverOptions;
    use crate::branching::variable_selection::VariableSelection;
    use crate::constraints;
    use crate::ConstraintOperationError;
    use crate::SolveError;

    #[test]
    fn queries_before_solving_are_empty() {
        let mut solver = Solver::default();
        let x = solver.new_variable(0..3);

        assert!(!solver.has_been_solved());
        assert!(!solver.found_solution());
        assert_eq!(None, solver.value(x));
        assert_eq!(None, solver.solution());
        assert_eq!(3, solver.domain(x).map(|domain| domain.len()).unwrap_or(0));
    }

    #[test]
    fn named_variables_can_be_found() {
        let mut solver = Solver::default();
        let colours = solver.new_named_variables(3, 1..=5, |index| format!("colour{index}"));
        let zebra = solver.new_named_variable(1..=5, "zebra");

        assert_eq!(Some(colours[1]), solver.variable_by_name("colour1"));
        assert_eq!(Some(zebra), solver.variable_by_name("zebra"));
        assert_eq!(Some("colour2"), solver.variable_name(colours[2]));
        assert_eq!(None, solver.variable_by_name("wine"));
        assert_eq!(4, solver.num_variables());
    }

    #[test]
    fn second_solve_is_rejected() {
        let mut solver = Solver::default();
        let _ = solver.new_variables(2, 0..2);

        assert_eq!(Ok(true), solver.solve());
        assert!(solver.has_been_solved());
        assert_eq!(Err(SolveError::AlreadySolved), solver.solve());
        assert!(solver.found_solution());
    }

    #[test]
    fn values_are_cleared_when_no_solution_exists() {
        let mut solver = Solver::default();
        let variables = solver.new_variables(3, 0..2);
        solver
            .add_constraint(constraints::all_different(variables.clone()))
            .post()
            .expect("valid constraint");

        assert_eq!(Ok(false), solver.solve());
        assert!(solver.has_been_solved());
        assert!(!solver.found_solution());
        assert!(variables.iter().all(|&variable| solver.value(variable).is_none()));
    }

    #[test]
    fn domains_after_solving() {
        let mut unsatisfiable = Solver::default();
        let variables = unsatisfiable.new_variables(3, 0..2);
        unsatisfiable
            .add_constraint(constraints::all_different(variables.clone()))
            .post()
            .expect("valid constraint");

        assert_eq!(Ok(false), unsatisfiable.solve());
        for &variable in &variables {
            assert_eq!(
                vec![0, 1],
                unsatisfiable
                    .domain(variable)
                    .map(|domain| domain.iter().collect::<Vec<_>>())
                    .unwrap_or_default()
            );
        }

        let mut satisfiable = Solver::default();
        let a = satisfiable.new_variable(0..3);
        let b = satisfiable.new_variable(0..3);
        satisfiable
            .add_constraint(constraints::offset(a, b, 2))
            .post()
            .expect("valid constraint");

        assert_eq!(Ok(true), satisfiable.solve());
        let domain = satisfiable.domain(b).expect("known variable");
        assert_eq!(vec![2], domain.iter().collect::<Vec<_>>());
        assert!(satisfiable
            .value(b)
            .is_some_and(|value| domain.contains(value)));
    }

    #[test]
    fn solutions_are_checked_against_the_constraints() {
        let mut solver = Solver::default();
        let variables = solver.new_variables(2, 0..3);
        solver
            .add_constraint(constraints::binary_not_equals(variables[0], variables[1]))
            .post()
            .expect("valid constraint");

        assert_eq!(Ok(true), solver.solve());
        let solution = solver.solution().expect("a solution was found");

        assert!(solver.is_satisfied_by(&solution));
        assert_ne!(solution.value(variables[0]), solution.value(variables[1]));
    }

    #[test]
    fn first_fail_finds_a_valid_solution() {
        let mut solver = Solver::with_options(SolverOptions {
            variable_selection: VariableSelection::FirstFail,
        });
        let queens = solver.new_variables(8, 0..8);
        for (i, &a) in queens.iter().enumerate() {
            for (j, &b) in queens.iter().enumerate().skip(i + 1) {
                solver
                    .add_constraint(constraints::non_attacking(a, b, (j - i) as i32))
                    .post()
                    .expect("valid constraint");
            }
        }

        assert_eq!(Ok(true), solver.solve());
        let solution = solver.solution().expect("8 queens can be placed");
        assert!(solver.is_satisfied_by(&solution));
    }

    #[test]
    fn modelling_after_solving_is_rejected() {
        let mut solver = Solver::default();
        let variables = solver.new_variables(2, 0..2);
        let _ = solver.solve();

        assert_eq!(
            Err(ConstraintOperationError::SolverAlreadyUsed),
            solver
                .add_constraint(constraints::binary_equals(variables[0], variables[1]))
                .post()
        );
        assert_eq!(
            Err(ConstraintOperationError::SolverAlreadyUsed),
            solver.restrict_domain(variables[1], 0)
        );
    }
}
