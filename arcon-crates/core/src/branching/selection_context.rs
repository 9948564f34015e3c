use crate::containers::KeyedVec;
use crate::engine::variables::Variable;
use crate::engine::variables::VariableId;
use crate::engine::FreeVariables;
#[cfg(test)]
use crate::engine::variables::IntegerDomain;

/// The view of the solver state which is available to a
/// [`VariableSelector`](super::variable_selection::VariableSelector).
#[derive(Debug, Clone, Copy)]
pub(crate) struct SelectionContext<'a> {
    variables: &'a KeyedVec<VariableId, Variable>,
    free_variables: &'a FreeVariables,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        variables: &'a KeyedVec<VariableId, Variable>,
        free_variables: &'a FreeVariables,
    ) -> Self {
        SelectionContext {
            variables,
            free_variables,
        }
    }

    /// The variables which have not been fixed yet, in increasing order.
    pub(crate) fn free_variables(&self) -> impl Iterator<Item = VariableId> + 'a {
        self.free_variables.iter()
    }

    pub(crate) fn domain_size(&self, variable: VariableId) -> usize {
        self.variables[variable].domain.len()
    }

    #[cfg(test)]
    pub(crate) fn create_for_testing(
        domains: &[&[i32]],
    ) -> (KeyedVec<VariableId, Variable>, FreeVariables) {
        let variables = domains
            .iter()
            .map(|domain| Variable::new(IntegerDomain::new(domain.iter().copied())))
            .collect::<KeyedVec<_, _>>();
        let free_variables = FreeVariables::with_all(variables.len());

        (variables, free_variables)
    }
}
