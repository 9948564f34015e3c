use std::fmt::Debug;

use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// The interface of a strategy which selects the variable to branch on.
pub(crate) trait VariableSelector: Debug {
    /// Determines which free variable the search branches on next.
    ///
    /// Should only return [`None`] when every variable is fixed.
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<VariableId>;
}
