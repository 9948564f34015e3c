use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::variables::VariableId;

/// The set of variables which the search has not fixed yet.
///
/// Iteration is always in increasing [`VariableId`] order, which makes the search independent of
/// the order in which variables were fixed and released.
#[derive(Clone, Debug, Default)]
pub(crate) struct FreeVariables {
    is_free: KeyedVec<VariableId, bool>,
    num_free: usize,
}

impl FreeVariables {
    /// Creates the set containing the variables `0..num_variables`.
    #[cfg(test)]
    pub(crate) fn with_all(num_variables: usize) -> Self {
        FreeVariables {
            is_free: std::iter::repeat(true).take(num_variables).collect(),
            num_free: num_variables,
        }
    }

    pub(crate) fn contains(&self, variable: VariableId) -> bool {
        self.is_free.get(variable).copied().unwrap_or(false)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.num_free == 0
    }

    pub(crate) fn len(&self) -> usize {
        self.num_free
    }

    pub(crate) fn remove(&mut self, variable: VariableId) {
        if let Some(is_free) = self.is_free.get_mut(variable) {
            if *is_free {
                *is_free = false;
                self.num_free -= 1;
            }
        }
    }

    pub(crate) fn insert(&mut self, variable: VariableId) {
        self.is_free.accomodate(variable, false);
        let is_free = &mut self.is_free[variable];
        if !*is_free {
            *is_free = true;
            self.num_free += 1;
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.is_free
            .iter()
            .enumerate()
            .filter(|(_, &is_free)| is_free)
            .map(|(index, _)| VariableId::create_from_index(index))
    }
}
