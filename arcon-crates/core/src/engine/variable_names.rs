use crate::containers::HashMap;
use crate::engine::variables::VariableId;

/// Optional names of variables, used for display and lookup only.
#[derive(Debug, Default)]
pub(crate) struct VariableNames {
    names: HashMap<VariableId, String>,
    variable_by_name: HashMap<String, VariableId>,
}

impl VariableNames {
    pub(crate) fn name(&self, variable: VariableId) -> Option<&str> {
        self.names.get(&variable).map(String::as_str)
    }

    pub(crate) fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_by_name.get(name).copied()
    }

    /// Names `variable`; when a name is used twice, lookup by that name returns the most recent
    /// variable.
    pub(crate) fn add(&mut self, variable: VariableId, name: String) {
        let _ = self.names.insert(variable, name.clone());
        let _ = self.variable_by_name.insert(name, variable);
    }
}
