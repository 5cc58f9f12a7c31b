use crate::basic_types::time::Duration;
use crate::create_statistics_struct;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(
    /// Core statistics of the search engine
    EngineStatistics {
        /// The number of decisions taken by the engine, including the second alternative of a
        /// variable after its first value has been explored
        num_branches: u64,
        /// The number of times propagation found a constraint which can no longer be satisfied
        num_conflicts: u64,
        /// The number of variables assigned by propagation rather than by a decision
        num_propagations: u64,
        /// The deepest decision level reached
        peak_depth: u64,
        /// The number of solutions discovered
        num_solutions: u64,
});

/// The statistics of one run; they are reset by starting a new run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SolverStatistics {
    pub(crate) engine_statistics: EngineStatistics,
    pub(crate) time_spent_in_search: Duration,
}

impl Statistic for SolverStatistics {
    fn log(&self, statistic_logger: StatisticLogger) {
        self.engine_statistics.log(statistic_logger.clone());
        statistic_logger
            .attach_to_prefix("time_spent_in_search")
            .log_statistic(self.time_spent_in_search.as_secs_f64());
    }
}
