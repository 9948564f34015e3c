use std::collections::VecDeque;

use log::trace;

use super::EmptyDomain;
use super::PropagationContext;
use super::Removal;

/// Incremental AC4 propagation.
///
/// A value `v` of a free variable `V` is unsupported once the counter of `v` in one of the tables
/// `V -> N` drops to zero. The propagator removes such values and lowers the counters of the
/// values of the free neighbours which relied on them, which may in turn exhaust further counters.
/// Propagation stops at a fixpoint or as soon as a domain becomes empty.
#[derive(Debug, Default)]
pub(crate) struct ArcConsistency {
    queue: VecDeque<Removal>,
}

impl ArcConsistency {
    /// Establishes arc consistency over the free variables.
    ///
    /// Every removal is pushed onto the trail of the context, including those made before a
    /// wipe-out is detected; the caller restores them by closing its checkpoint.
    pub(crate) fn propagate(
        &mut self,
        context: &mut PropagationContext<'_>,
    ) -> Result<(), EmptyDomain> {
        self.queue.clear();
        self.enqueue_unsupported(context);

        while let Some(removal) = self.queue.pop_front() {
            // The same value can be queued through several exhausted counters.
            if !context.remove(removal) {
                continue;
            }
            trace!("Removed {} from {}", removal.value, removal.variable);

            let queue = &mut self.queue;
            context.graph.update_neighbour_counters(
                removal.variable,
                removal.value,
                -1,
                context.free_variables,
                |variable, value| queue.push_back(Removal { variable, value }),
            );

            // The counters are updated first so that restoring the removal is the exact inverse.
            if context.is_domain_empty(removal.variable) {
                trace!("Domain of {} is empty", removal.variable);
                self.queue.clear();
                return Err(EmptyDomain);
            }
        }

        Ok(())
    }

    /// Queues every value of a free variable which has no support left towards some neighbour.
    fn enqueue_unsupported(&mut self, context: &PropagationContext<'_>) {
        for variable in context.free_variables.iter() {
            let domain = &context.variables[variable].domain;

            for neighbour in context.graph.neighbours(variable) {
                let table = context.graph.table(neighbour.outgoing);
                self.queue.extend(
                    domain
                        .iter()
                        .filter(|&value| table.count(value) == 0)
                        .map(|value| Removal { variable, value }),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArcConsistency;
    use crate::basic_types::Trail;
    use crate::containers::KeyedVec;
    use crate::engine::constraint_graph::BinaryRelation;
    use crate::engine::constraint_graph::ConstraintGraph;
    use crate::engine::propagation::EmptyDomain;
    use crate::engine::propagation::PropagationContext;
    use crate::engine::propagation::Removal;
    use crate::engine::solver_statistics::EngineStatistics;
    use crate::engine::variables::IntegerDomain;
    use crate::engine::variables::Variable;
    use crate::engine::variables::VariableId;
    use crate::engine::FreeVariables;

    struct TestState {
        variables: KeyedVec<VariableId, Variable>,
        graph: ConstraintGraph,
        free_variables: FreeVariables,
        trail: Trail<Removal>,
        statistics: EngineStatistics,
    }

    impl TestState {
        fn new(domains: &[&[i32]], relations: Vec<(u32, u32, BinaryRelation)>) -> Self {
            let variables = domains
                .iter()
                .map(|domain| Variable::new(IntegerDomain::new(domain.iter().copied())))
                .collect::<KeyedVec<_, _>>();
            let mut graph = ConstraintGraph::default();
            for (a, b, relation) in relations {
                graph.add_relation(VariableId::new(a), VariableId::new(b), relation);
            }
            graph.build_support_tables(&variables);

            let mut trail = Trail::default();
            trail.push_checkpoint();

            TestState {
                free_variables: FreeVariables::with_all(variables.len()),
                variables,
                graph,
                trail,
                statistics: EngineStatistics::default(),
            }
        }

        fn propagate(&mut self) -> Result<(), EmptyDomain> {
            let mut context = PropagationContext {
                variables: &mut self.variables,
                graph: &mut self.graph,
                free_variables: &self.free_variables,
                trail: &mut self.trail,
                statistics: &mut self.statistics,
            };
            ArcConsistency::default().propagate(&mut context)
        }

        fn domain(&self, variable: u32) -> Vec<i32> {
            self.variables[VariableId::new(variable)]
                .domain
                .iter()
                .collect()
        }
    }

    #[test]
    fn unsupported_values_are_removed() {
        let mut state = TestState::new(
            &[&[0, 1, 2], &[0, 1]],
            vec![(0, 1, BinaryRelation::Equal)],
        );

        assert_eq!(Ok(()), state.propagate());

        assert_eq!(vec![0, 1], state.domain(0));
        assert_eq!(vec![0, 1], state.domain(1));
        assert_eq!(
            &[Removal {
                variable: VariableId::new(0),
                value: 2
            }],
            state.trail.records_since_checkpoint()
        );
        assert_eq!(1, state.statistics.num_removals);
    }

    #[test]
    fn removals_cascade_along_chains() {
        // x0 < x1 < x2 over 0..3 has a single solution.
        let less_than = || BinaryRelation::custom(|a, b| a < b);
        let mut state = TestState::new(
            &[&[0, 1, 2], &[0, 1, 2], &[0, 1, 2]],
            vec![(0, 1, less_than()), (1, 2, less_than())],
        );

        assert_eq!(Ok(()), state.propagate());

        assert_eq!(vec![0], state.domain(0));
        assert_eq!(vec![1], state.domain(1));
        assert_eq!(vec![2], state.domain(2));
    }

    #[test]
    fn wipe_out_is_reported() {
        let mut state = TestState::new(
            &[&[0, 1], &[0, 1], &[0, 1]],
            vec![
                (0, 1, BinaryRelation::NotEqual),
                (0, 2, BinaryRelation::NotEqual),
                (1, 2, BinaryRelation::NotEqual),
                (0, 1, BinaryRelation::Equal),
            ],
        );

        assert_eq!(Err(EmptyDomain), state.propagate());
    }

    #[test]
    fn fixed_variables_are_never_pruned() {
        let mut state = TestState::new(
            &[&[0, 1, 2], &[0, 1]],
            vec![(0, 1, BinaryRelation::Equal)],
        );
        state.free_variables.remove(VariableId::new(0));

        assert_eq!(Ok(()), state.propagate());

        assert_eq!(vec![0, 1, 2], state.domain(0));
        assert!(state.trail.records_since_checkpoint().is_empty());
    }

    #[test]
    fn consistent_networks_are_left_untouched() {
        let mut state = TestState::new(
            &[&[0, 1, 2], &[0, 1, 2]],
            vec![(0, 1, BinaryRelation::NotEqual)],
        );

        assert_eq!(Ok(()), state.propagate());

        assert!(state.trail.is_empty());
        assert!(state
            .graph
            .counters_are_consistent(&state.variables, &state.free_variables));
    }
}
