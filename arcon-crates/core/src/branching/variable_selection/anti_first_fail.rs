use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// A [`VariableSelector`] which selects the free variable with the largest domain.
///
/// Ties are broken in favour of the lowest [`VariableId`].
#[derive(Debug)]
pub(crate) struct AntiFirstFail {
    tie_breaker: InOrderTieBreaker<VariableId, usize>,
}

impl Default for AntiFirstFail {
    fn default() -> Self {
        AntiFirstFail {
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl VariableSelector for AntiFirstFail {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<VariableId> {
        context.free_variables().for_each(|variable| {
            self.tie_breaker
                .consider(variable, context.domain_size(variable));
        });

        let selected = self.tie_breaker.select();
        if selected.is_none() {
            warn!("The AntiFirstFail variable selector was asked to select from no free variables");
        }
        selected
    }
}
