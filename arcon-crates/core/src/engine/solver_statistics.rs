use std::time::Duration;

use crate::statistics::log_statistic;

/// Statistics gathered while building and solving a problem.
#[derive(Debug, Default, Clone)]
pub(crate) struct SolverStatistics {
    pub(crate) engine_statistics: EngineStatistics,
    pub(crate) model_statistics: ModelStatistics,
}

impl SolverStatistics {
    pub(crate) fn log(&self, verbose: bool) {
        log_statistic("nodes", self.engine_statistics.num_decisions);
        log_statistic("failures", self.engine_statistics.num_failures);
        log_statistic("peakDepth", self.engine_statistics.peak_depth);
        log_statistic(
            "solveTime",
            self.engine_statistics.time_spent_in_solver.as_secs_f64(),
        );
        if verbose {
            log_statistic("removals", self.engine_statistics.num_removals);
            log_statistic("variables", self.model_statistics.num_variables);
            log_statistic(
                "directedConstraints",
                self.model_statistics.num_directed_constraints,
            );
            log_statistic("supportPairs", self.model_statistics.num_support_pairs);
        }
    }
}

/// Counters of the search itself.
#[derive(Debug, Default, Clone)]
pub(crate) struct EngineStatistics {
    /// The number of values tried for a variable
    pub(crate) num_decisions: u64,
    /// The number of search nodes where propagation emptied a domain
    pub(crate) num_failures: u64,
    /// The number of values removed by propagation
    pub(crate) num_removals: u64,
    /// The peak depth of the search tree
    pub(crate) peak_depth: u64,
    pub(crate) time_spent_in_solver: Duration,
}

/// The size of the constraint network, recorded when the support tables are built.
#[derive(Debug, Default, Clone)]
pub(crate) struct ModelStatistics {
    pub(crate) num_variables: usize,
    pub(crate) num_directed_constraints: usize,
    pub(crate) num_support_pairs: usize,
}
