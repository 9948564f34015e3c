use itertools::Itertools;

use super::binary_not_equals;
use super::Constraint;
use crate::engine::variables::VariableId;
use crate::ConstraintOperationError;
use crate::Solver;

/// The [`Constraint`] that all the given variables take distinct values, decomposed into
/// pairwise disequalities.
#[derive(Clone, Debug)]
pub struct AllDifferent {
    variables: Box<[VariableId]>,
}

/// Creates the [`Constraint`] that enforces that all the given `variables` are distinct.
pub fn all_different(variables: impl Into<Box<[VariableId]>>) -> AllDifferent {
    AllDifferent {
        variables: variables.into(),
    }
}

impl Constraint for AllDifferent {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        // Nothing is registered unless every pair can be.
        if let Some(&unknown) = self
            .variables
            .iter()
            .find(|&&variable| !solver.contains_variable(variable))
        {
            return Err(ConstraintOperationError::UnknownVariable(unknown));
        }
        if let Some(duplicate) = self.variables.iter().duplicates().next() {
            return Err(ConstraintOperationError::IdenticalVariables(*duplicate));
        }

        self.variables
            .iter()
            .tuple_combinations()
            .try_for_each(|(&a, &b)| binary_not_equals(a, b).post(solver))
    }
}
