//! Houses the solver which finds a single solution of a binary constraint network using
//! depth-first search with AC4 propagation at every node.
use std::time::Instant;

use log::debug;
use log::trace;

use super::constraint_graph::BinaryRelation;
use super::constraint_graph::ConstraintGraph;
use super::propagation::ArcConsistency;
use super::propagation::PropagationContext;
use super::propagation::Removal;
use super::solver_statistics::SolverStatistics;
use super::variables::Assignment;
use super::variables::IntegerDomain;
use super::variables::Variable;
use super::variables::VariableId;
use super::FreeVariables;
use super::VariableNames;
use crate::arcon_assert_advanced;
use crate::arcon_assert_eq_simple;
use crate::arcon_assert_moderate;
use crate::arcon_assert_simple;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::basic_types::SolveError;
use crate::basic_types::Trail;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::containers::KeyedVec;

/// The lifecycle of a [`ConstraintSatisfactionSolver`]; the model can only be changed while it
/// is [`SolveState::Modelling`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum SolveState {
    #[default]
    Modelling,
    Satisfiable,
    Unsatisfiable,
}

/// A node on the search stack: the variable branched on and the values still to be tried.
#[derive(Debug)]
struct SearchNode {
    variable: VariableId,
    /// The domain of the variable when the node was created, in ascending order.
    values: Vec<i32>,
    next: usize,
    /// The value the variable is currently fixed to, if any.
    current: Option<i32>,
}

impl SearchNode {
    fn next_value(&mut self) -> Option<i32> {
        let value = self.values.get(self.next).copied();
        self.next += 1;
        value
    }
}

#[derive(Debug)]
pub(crate) struct ConstraintSatisfactionSolver {
    variables: KeyedVec<VariableId, Variable>,
    variable_names: VariableNames,
    graph: ConstraintGraph,
    free_variables: FreeVariables,
    /// The values removed by propagation, grouped per search node.
    trail: Trail<Removal>,
    arc_consistency: ArcConsistency,
    variable_selector: Box<dyn VariableSelector>,
    state: SolveState,
    statistics: SolverStatistics,
}

impl ConstraintSatisfactionSolver {
    pub(crate) fn new(variable_selector: Box<dyn VariableSelector>) -> Self {
        ConstraintSatisfactionSolver {
            variables: KeyedVec::default(),
            variable_names: VariableNames::default(),
            graph: ConstraintGraph::default(),
            free_variables: FreeVariables::default(),
            trail: Trail::default(),
            arc_consistency: ArcConsistency::default(),
            variable_selector,
            state: SolveState::Modelling,
            statistics: SolverStatistics::default(),
        }
    }

    pub(crate) fn state(&self) -> SolveState {
        self.state
    }

    pub(crate) fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub(crate) fn create_new_variable(
        &mut self,
        domain: IntegerDomain,
        name: Option<String>,
    ) -> VariableId {
        let variable = self.variables.push(Variable::new(domain));
        if let Some(name) = name {
            self.variable_names.add(variable, name);
        }
        self.free_variables.insert(variable);
        variable
    }

    pub(crate) fn variable_name(&self, variable: VariableId) -> Option<&str> {
        self.variable_names.name(variable)
    }

    pub(crate) fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_names.variable_by_name(name)
    }

    pub(crate) fn domain(&self, variable: VariableId) -> Option<&IntegerDomain> {
        self.variables.get(variable).map(|variable| &variable.domain)
    }

    pub(crate) fn assigned_value(&self, variable: VariableId) -> Option<i32> {
        self.variables
            .get(variable)
            .and_then(|variable| variable.assignment.value())
    }

    /// Registers `relation` over the ordered pair `(a, b)`.
    pub(crate) fn add_relation(
        &mut self,
        a: VariableId,
        b: VariableId,
        relation: BinaryRelation,
    ) -> Result<(), ConstraintOperationError> {
        self.ensure_modelling()?;
        self.ensure_known(a)?;
        self.ensure_known(b)?;
        if a == b {
            return Err(ConstraintOperationError::IdenticalVariables(a));
        }

        trace!("Adding {relation:?} over ({a}, {b})");
        self.graph.add_relation(a, b, relation);
        Ok(())
    }

    /// Reduces the domain of `variable` to the single `value`.
    pub(crate) fn restrict_domain(
        &mut self,
        variable: VariableId,
        value: i32,
    ) -> Result<(), ConstraintOperationError> {
        self.ensure_modelling()?;
        self.ensure_known(variable)?;

        if self.variables[variable].domain.restrict_to(value) {
            Ok(())
        } else {
            Err(ConstraintOperationError::ValueNotInDomain { variable, value })
        }
    }

    /// Builds the support tables and searches for a solution.
    ///
    /// Returns whether a solution was found; after a successful search every variable is fixed to
    /// its value in the solution, otherwise every variable is unassigned.
    pub(crate) fn solve(&mut self) -> Result<bool, SolveError> {
        if self.state != SolveState::Modelling {
            return Err(SolveError::AlreadySolved);
        }

        let start = Instant::now();
        self.graph.build_support_tables(&self.variables);
        self.statistics.model_statistics.num_variables = self.variables.len();
        self.statistics.model_statistics.num_directed_constraints =
            self.graph.num_directed_constraints();
        self.statistics.model_statistics.num_support_pairs = self.graph.num_support_pairs();
        debug!(
            "Built {} support tables with {} supporting pairs over {} variables",
            self.graph.num_directed_constraints(),
            self.graph.num_support_pairs(),
            self.variables.len()
        );

        let found = self.search();
        self.statistics.engine_statistics.time_spent_in_solver = start.elapsed();

        if found {
            self.state = SolveState::Satisfiable;
            arcon_assert_moderate!(
                self.solution()
                    .is_some_and(|solution| self.graph.is_satisfied_by(&solution)),
                "the search produced an assignment which violates a constraint"
            );
        } else {
            self.state = SolveState::Unsatisfiable;
        }
        debug!(
            "Search finished after {} decisions and {} failures, solution found: {found}",
            self.statistics.engine_statistics.num_decisions,
            self.statistics.engine_statistics.num_failures,
        );

        Ok(found)
    }

    /// The values of all variables, if every variable is fixed.
    pub(crate) fn solution(&self) -> Option<Solution> {
        self.variables
            .iter()
            .map(|variable| variable.assignment.value())
            .collect::<Option<KeyedVec<VariableId, i32>>>()
            .map(Solution::new)
    }

    pub(crate) fn is_satisfied_by(&self, solution: &Solution) -> bool {
        solution.num_variables() == self.variables.len()
            && self
                .variables
                .keys()
                .all(|variable| {
                    self.variables[variable]
                        .domain
                        .declared_values()
                        .binary_search(&solution.value(variable))
                        .is_ok()
                })
            && self.graph.is_satisfied_by(solution)
    }

    pub(crate) fn log_statistics(&self, verbose: bool) {
        self.statistics.log(verbose)
    }
}

// Search
impl ConstraintSatisfactionSolver {
    /// Depth-first search with an explicit stack.
    ///
    /// Every node opens a checkpoint on the trail and propagates; on success it selects a variable
    /// and tries its values in ascending order. A node whose values are exhausted closes its
    /// checkpoint, which restores every value removed while it was active.
    fn search(&mut self) -> bool {
        let mut stack: Vec<SearchNode> = Vec::new();

        loop {
            if self.free_variables.is_empty() {
                return true;
            }

            self.trail.push_checkpoint();
            let depth = self.trail.depth() as u64;
            if depth > self.statistics.engine_statistics.peak_depth {
                self.statistics.engine_statistics.peak_depth = depth;
            }

            match self.expand() {
                Some(node) => stack.push(node),
                None => {
                    self.statistics.engine_statistics.num_failures += 1;
                    self.restore_checkpoint();
                }
            }

            loop {
                let Some(node) = stack.last_mut() else {
                    return false;
                };

                if let Some(value) = node.current.take() {
                    self.unassign(node.variable, value);
                }

                if let Some(value) = node.next_value() {
                    node.current = Some(value);
                    let variable = node.variable;
                    self.assign(variable, value);
                    break;
                }

                let _ = stack.pop();
                self.restore_checkpoint();
            }
        }
    }

    /// Propagates at the current node and, if no domain is empty, creates the node for the next
    /// variable to branch on.
    fn expand(&mut self) -> Option<SearchNode> {
        let mut context = PropagationContext {
            variables: &mut self.variables,
            graph: &mut self.graph,
            free_variables: &self.free_variables,
            trail: &mut self.trail,
            statistics: &mut self.statistics.engine_statistics,
        };
        if self.arc_consistency.propagate(&mut context).is_err() {
            return None;
        }

        // Propagation only reports domains it emptied; a domain can also be declared empty.
        if self
            .free_variables
            .iter()
            .any(|variable| self.variables[variable].domain.is_empty())
        {
            return None;
        }

        trace!(
            "Propagation removed {} values, {} variables remain free",
            self.trail.records_since_checkpoint().len(),
            self.free_variables.len()
        );
        arcon_assert_advanced!(
            self.graph
                .counters_are_consistent(&self.variables, &self.free_variables),
            "support counters diverged from the domains after propagation"
        );

        let context = SelectionContext::new(&self.variables, &self.free_variables);
        let variable = self.variable_selector.select_variable(&context);
        arcon_assert_simple!(
            variable.is_some(),
            "no variable was selected while free variables remain"
        );

        variable.map(|variable| SearchNode {
            variable,
            values: self.variables[variable].domain.iter().collect(),
            next: 0,
            current: None,
        })
    }

    /// Fixes `variable` to `value`; the other values of its domain stop supporting the values of
    /// the free neighbours.
    fn assign(&mut self, variable: VariableId, value: i32) {
        trace!("Assigning {variable} = {value}");
        self.statistics.engine_statistics.num_decisions += 1;

        self.variables[variable].assignment = Assignment::Assigned(value);
        self.free_variables.remove(variable);
        for other in self.variables[variable].values_other_than(value) {
            self.graph
                .update_neighbour_counters(variable, other, -1, &self.free_variables, |_, _| {});
        }
    }

    /// The exact inverse of [`Self::assign`].
    fn unassign(&mut self, variable: VariableId, value: i32) {
        trace!("Unassigning {variable} = {value}");
        arcon_assert_eq_simple!(
            self.variables[variable].assignment,
            Assignment::Assigned(value)
        );

        for other in self.variables[variable].values_other_than(value) {
            self.graph
                .update_neighbour_counters(variable, other, 1, &self.free_variables, |_, _| {});
        }
        self.free_variables.insert(variable);
        self.variables[variable].assignment = Assignment::Unassigned;
    }

    /// Closes the most recent checkpoint and puts its removed values back, most recent first.
    fn restore_checkpoint(&mut self) {
        for removal in self.trail.pop_checkpoint() {
            let restored = self.variables[removal.variable]
                .domain
                .restore(removal.value);
            arcon_assert_simple!(
                restored,
                "{} was still in the domain of {} when its removal was undone",
                removal.value,
                removal.variable
            );
            self.graph.update_neighbour_counters(
                removal.variable,
                removal.value,
                1,
                &self.free_variables,
                |_, _| {},
            );
        }

        arcon_assert_advanced!(
            self.graph
                .counters_are_consistent(&self.variables, &self.free_variables),
            "support counters diverged from the domains after backtracking"
        );
    }

    fn ensure_modelling(&self) -> Result<(), ConstraintOperationError> {
        if self.state == SolveState::Modelling {
            Ok(())
        } else {
            Err(ConstraintOperationError::SolverAlreadyUsed)
        }
    }

    fn ensure_known(&self, variable: VariableId) -> Result<(), ConstraintOperationError> {
        if variable.id as usize >= self.variables.len() {
            return Err(ConstraintOperationError::UnknownVariable(variable));
        }
        Ok(())
    }
}
