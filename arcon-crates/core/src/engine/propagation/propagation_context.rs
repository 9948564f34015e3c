use super::Removal;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::constraint_graph::ConstraintGraph;
use crate::engine::solver_statistics::EngineStatistics;
use crate::engine::variables::Variable;
use crate::engine::variables::VariableId;
use crate::engine::FreeVariables;

/// The parts of the solver state that propagation reads and modifies.
#[derive(Debug)]
pub(crate) struct PropagationContext<'a> {
    pub(crate) variables: &'a mut KeyedVec<VariableId, Variable>,
    pub(crate) graph: &'a mut ConstraintGraph,
    pub(crate) free_variables: &'a FreeVariables,
    pub(crate) trail: &'a mut Trail<Removal>,
    pub(crate) statistics: &'a mut EngineStatistics,
}

impl PropagationContext<'_> {
    /// Removes the value from the domain and records it on the trail; returns `false` if the value
    /// was already gone.
    pub(crate) fn remove(&mut self, removal: Removal) -> bool {
        if !self.variables[removal.variable].domain.remove(removal.value) {
            return false;
        }

        self.trail.push(removal);
        self.statistics.num_removals += 1;
        true
    }

    pub(crate) fn is_domain_empty(&self, variable: VariableId) -> bool {
        self.variables[variable].domain.is_empty()
    }
}
