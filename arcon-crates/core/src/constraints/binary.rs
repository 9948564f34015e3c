use super::Constraint;
use crate::engine::constraint_graph::BinaryRelation;
use crate::engine::variables::VariableId;
use crate::ConstraintOperationError;
use crate::Solver;

/// A single [`BinaryRelation`] over an ordered pair of variables.
#[derive(Clone, Debug)]
pub struct BinaryConstraint {
    a: VariableId,
    b: VariableId,
    relation: BinaryRelation,
}

impl Constraint for BinaryConstraint {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_relation(self.a, self.b, self.relation)
    }
}

/// Creates the [`Constraint`] `relation(a, b)`.
pub fn binary_relation(a: VariableId, b: VariableId, relation: BinaryRelation) -> BinaryConstraint {
    BinaryConstraint { a, b, relation }
}

/// Creates the [`Constraint`] `a = b`.
pub fn binary_equals(a: VariableId, b: VariableId) -> BinaryConstraint {
    binary_relation(a, b, BinaryRelation::Equal)
}

/// Creates the [`Constraint`] `a != b`.
pub fn binary_not_equals(a: VariableId, b: VariableId) -> BinaryConstraint {
    binary_relation(a, b, BinaryRelation::NotEqual)
}

/// Creates the [`Constraint`] `b = a + k`.
pub fn offset(a: VariableId, b: VariableId, k: i32) -> BinaryConstraint {
    binary_relation(a, b, BinaryRelation::Offset(k))
}

/// Creates the [`Constraint`] `|a - b| = 1`.
pub fn adjacent(a: VariableId, b: VariableId) -> BinaryConstraint {
    binary_relation(a, b, BinaryRelation::Adjacent)
}

/// Creates the [`Constraint`] that two queens placed in the columns `a` and `b` of rows which are
/// `distance` apart do not attack each other.
pub fn non_attacking(a: VariableId, b: VariableId, distance: i32) -> BinaryConstraint {
    binary_relation(a, b, BinaryRelation::NonAttacking(distance))
}
