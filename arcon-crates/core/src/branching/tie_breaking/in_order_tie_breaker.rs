use super::Direction;
use super::TieBreaker;

/// Selects the first candidate with the best score; later candidates only replace it if they are
/// strictly better.
///
/// Since the search offers the free variables in increasing order, ties are broken in favour of
/// the variable which was created first.
#[derive(Debug)]
pub(crate) struct InOrderTieBreaker<Var, Value> {
    best: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub(crate) fn new(direction: Direction) -> Self {
        InOrderTieBreaker {
            best: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let improves = match &self.best {
            None => true,
            Some((_, best)) => match self.direction {
                Direction::Maximum => value > *best,
                Direction::Minimum => value < *best,
            },
        };

        if improves {
            self.best = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.best.take().map(|(variable, _)| variable)
    }
}

#[cfg(test)]
mod tests {
    use super::InOrderTieBreaker;
    use crate::branching::tie_breaking::Direction;
    use crate::branching::tie_breaking::TieBreaker;
    use crate::engine::variables::VariableId;

    #[test]
    fn first_of_equal_values_is_selected() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);

        breaker.consider(VariableId::new(0), 10);
        breaker.consider(VariableId::new(1), 10);
        breaker.consider(VariableId::new(2), 10);

        assert_eq!(Some(VariableId::new(0)), breaker.select());
    }

    #[test]
    fn strictly_better_values_win() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(VariableId::new(0), 10);
        breaker.consider(VariableId::new(1), 4);
        breaker.consider(VariableId::new(2), 4);
        breaker.consider(VariableId::new(3), 7);

        assert_eq!(Some(VariableId::new(1)), breaker.select());
    }

    #[test]
    fn selecting_resets_the_candidates() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);
        breaker.consider(VariableId::new(5), 1);

        assert_eq!(Some(VariableId::new(5)), breaker.select());
        assert_eq!(None, breaker.select());
    }
}
