use crate::containers::KeyedVec;
use crate::variables::VariableId;

/// A complete assignment of values to the variables of a [`Solver`](crate::Solver).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    values: KeyedVec<VariableId, i32>,
}

impl Solution {
    pub(crate) fn new(values: KeyedVec<VariableId, i32>) -> Self {
        Solution { values }
    }

    /// Returns the number of variables in the solution.
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Returns the value of `variable`.
    ///
    /// # Panics
    /// If the variable does not belong to the solver that produced this solution; see
    /// [`Solution::get`] for the non-panicking version.
    pub fn value(&self, variable: VariableId) -> i32 {
        self.values[variable]
    }

    /// Returns the value of `variable`, or [`None`] if the variable is not part of this solution.
    pub fn get(&self, variable: VariableId) -> Option<i32> {
        self.values.get(variable).copied()
    }

    /// Iterates over all variables together with their value.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, i32)> + '_ {
        self.values.keys().zip(self.values.iter().copied())
    }
}
