pub mod solution_iterator;

use std::fmt::Display;
use std::time::Duration;

use crate::engine::solver_statistics::SolverStatistics;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
#[cfg(doc)]
use crate::ChargeSolver;

/// Why an enumeration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// The whole search space was explored; the number of solutions found is the total number of
    /// solutions.
    Exhausted,
    /// The run stopped early because the solution limit was reached, or because every selected
    /// solution had been discovered.
    Stopped,
    /// The termination condition triggered before the run was complete.
    Terminated,
}

impl Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Exhausted => write!(f, "exhausted"),
            SearchStatus::Stopped => write!(f, "stopped"),
            SearchStatus::Terminated => write!(f, "terminated"),
        }
    }
}

/// The outcome of one enumeration run of the [`ChargeSolver`].
///
/// The counters only cover this run; every run starts from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    status: SearchStatus,
    statistics: SolverStatistics,
    num_reported: u64,
    elapsed: Duration,
}

impl RunSummary {
    pub(crate) fn new(
        status: SearchStatus,
        statistics: SolverStatistics,
        num_reported: u64,
        elapsed: Duration,
    ) -> Self {
        RunSummary {
            status,
            statistics,
            num_reported,
            elapsed,
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn conflicts(&self) -> u64 {
        self.statistics.engine_statistics.num_conflicts
    }

    pub fn branches(&self) -> u64 {
        self.statistics.engine_statistics.num_branches
    }

    pub fn propagations(&self) -> u64 {
        self.statistics.engine_statistics.num_propagations
    }

    pub fn peak_depth(&self) -> u64 {
        self.statistics.engine_statistics.peak_depth
    }

    /// The number of solutions discovered, whether or not they were reported.
    pub fn solutions_found(&self) -> u64 {
        self.statistics.engine_statistics.num_solutions
    }

    /// The number of solutions passed to the callback.
    pub fn reported(&self) -> u64 {
        self.num_reported
    }

    /// The wall-clock duration of the run.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The time spent inside the search engine, which excludes the time spent in the callback.
    pub fn search_time(&self) -> Duration {
        self.statistics.time_spent_in_search
    }

    /// Whether the run proved that the problem has no solution at all.
    pub fn is_infeasible(&self) -> bool {
        self.status == SearchStatus::Exhausted && self.solutions_found() == 0
    }

    /// Logs the statistics of the run through the statistic logger, if it has been configured.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::default());
            log_statistic("num_reported", self.num_reported);
            log_statistic("wall_time", self.elapsed.as_secs_f64());
            log_statistic("status", self.status);
            log_statistic_postfix();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_without_solutions_is_infeasible() {
        let summary = RunSummary::new(
            SearchStatus::Exhausted,
            SolverStatistics::default(),
            0,
            Duration::ZERO,
        );

        assert!(summary.is_infeasible());
    }

    #[test]
    fn terminated_without_solutions_is_not_infeasible() {
        let summary = RunSummary::new(
            SearchStatus::Terminated,
            SolverStatistics::default(),
            0,
            Duration::ZERO,
        );

        assert!(!summary.is_infeasible());
    }
}
