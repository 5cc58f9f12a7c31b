//! Contains the structures corresponding to solution iterations.

use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::SearchEngine;
use crate::results::Solution;
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::ChargeSolver;

/// Pulls the solutions of a [`ChargeSolver`] one at a time, in discovery order.
///
/// Between two calls to [`SolutionIterator::next_solution`] the search is suspended; the next call
/// resumes it where it stopped. Dropping the iterator abandons the search.
#[derive(Debug)]
pub struct SolutionIterator<'solver, 'termination, T> {
    engine: SearchEngine<'solver>,
    termination: &'termination mut T,
}

impl<'solver, 'termination, T: TerminationCondition> SolutionIterator<'solver, 'termination, T> {
    pub(crate) fn new(engine: SearchEngine<'solver>, termination: &'termination mut T) -> Self {
        SolutionIterator {
            engine,
            termination,
        }
    }

    /// Continues the search until the next solution is found.
    pub fn next_solution(&mut self) -> IteratedSolution {
        self.engine.next_solution(self.termination)
    }

    /// The number of solutions discovered so far; this is also the discovery index the next
    /// solution will receive.
    pub fn num_discovered(&self) -> u64 {
        self.engine.statistics().engine_statistics.num_solutions
    }

    /// The number of decisions made so far.
    pub fn num_branches(&self) -> u64 {
        self.engine.statistics().engine_statistics.num_branches
    }

    /// The number of conflicts encountered so far.
    pub fn num_conflicts(&self) -> u64 {
        self.engine.statistics().engine_statistics.num_conflicts
    }

    pub(crate) fn statistics(&self) -> &SolverStatistics {
        self.engine.statistics()
    }
}

/// Enum which specifies the status of the call to [`SolutionIterator::next_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IteratedSolution {
    /// A new solution was identified.
    Solution(Solution),

    /// No more solutions exist, but at least one solution was found.
    Finished,

    /// The search was terminated by the termination condition.
    Unknown,

    /// There exists no solution.
    Unsatisfiable,
}
