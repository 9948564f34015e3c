//! Deciding between variables which score equally.
mod in_order_tie_breaker;

pub(crate) use in_order_tie_breaker::InOrderTieBreaker;

/// Collects scored candidates and selects one of the best.
pub(crate) trait TieBreaker<Var, Value> {
    /// Offers `variable` with the given score.
    fn consider(&mut self, variable: Var, value: Value);

    /// Returns the selected variable and forgets every candidate considered so far.
    fn select(&mut self) -> Option<Var>;
}

/// Whether the best candidate has the largest or the smallest score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Maximum,
    Minimum,
}
