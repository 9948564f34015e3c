use crate::containers::StorageKey;

/// The handle of a variable; it is simply the index of the variable in the solver that created
/// it.
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct VariableId {
    pub id: u32,
}

impl VariableId {
    pub fn new(id: u32) -> Self {
        VariableId { id }
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId { id: index as u32 }
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
