use log::debug;
use log::warn;
use thiserror::Error;

use super::outputs::solution_iterator::IteratedSolution;
use super::outputs::solution_iterator::SolutionIterator;
use super::outputs::RunSummary;
use super::outputs::SearchStatus;
use super::solution_callback::SolutionCallback;
use crate::basic_types::time::Instant;
use crate::containers::HashSet;
use crate::termination::TerminationCondition;

/// Which discovered solutions are passed to the callback.
///
/// The selection is checked for every discovered solution separately; it never limits the
/// search itself, so solutions which are not selected are still discovered and counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SolutionSelection {
    /// Every discovered solution.
    #[default]
    All,
    /// The solutions with the given discovery indices.
    Indices(HashSet<u64>),
}

impl SolutionSelection {
    /// Selects the first `n` solutions.
    pub fn first(n: u64) -> Self {
        SolutionSelection::Indices((0..n).collect())
    }

    pub fn indices(indices: impl IntoIterator<Item = u64>) -> Self {
        SolutionSelection::Indices(indices.into_iter().collect())
    }

    /// Selects no solution at all; useful for counting.
    pub fn none() -> Self {
        SolutionSelection::Indices(HashSet::default())
    }

    pub fn contains(&self, discovery_index: u64) -> bool {
        match self {
            SolutionSelection::All => true,
            SolutionSelection::Indices(indices) => indices.contains(&discovery_index),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SolutionSelection::Indices(indices) if indices.is_empty())
    }

    /// Whether every selected index lies below `num_discovered`, i.e. whether no solution
    /// discovered from now on can be selected.
    pub fn is_covered_by(&self, num_discovered: u64) -> bool {
        match self {
            SolutionSelection::All => false,
            SolutionSelection::Indices(indices) => {
                indices.iter().all(|&index| index < num_discovered)
            }
        }
    }
}

/// Options which determine which solutions an enumeration run reports and when it stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationOptions {
    /// The solutions which are passed to the callback.
    pub selection: SolutionSelection,
    /// The maximum number of solutions passed to the callback; the run stops once it is reached.
    /// Without a limit the run continues until the search space is exhausted.
    pub solution_limit: Option<u64>,
    /// Whether the run keeps searching after every selected solution has been reported, so that
    /// the summary contains the total number of solutions. A solution limit is respected
    /// regardless.
    pub count_all_solutions: bool,
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        EnumerationOptions {
            selection: SolutionSelection::All,
            solution_limit: None,
            count_all_solutions: true,
        }
    }
}

/// The errors which can end an enumeration run.
#[derive(Debug, Error)]
pub enum EnumerationError<E: std::error::Error + 'static> {
    /// The callback failed to process a solution; the search has been abandoned.
    #[error("the callback failed on solution {discovery_index}")]
    CallbackFailure {
        discovery_index: u64,
        #[source]
        source: E,
    },
}

/// Drives `solutions` according to `options`, passing the selected solutions to `callback`.
pub(crate) fn enumerate<T, C>(
    mut solutions: SolutionIterator<'_, '_, T>,
    options: &EnumerationOptions,
    callback: &mut C,
) -> Result<RunSummary, EnumerationError<C::Error>>
where
    T: TerminationCondition,
    C: SolutionCallback,
{
    let started_at = Instant::now();

    if options.selection.is_empty() && options.solution_limit.is_some() {
        warn!("No solution is selected, so the solution limit will never be reached");
    }

    let mut num_reported = 0;
    let status = loop {
        if options
            .solution_limit
            .is_some_and(|limit| num_reported >= limit)
        {
            break SearchStatus::Stopped;
        }

        if !options.count_all_solutions
            && options.selection.is_covered_by(solutions.num_discovered())
        {
            break SearchStatus::Stopped;
        }

        match solutions.next_solution() {
            IteratedSolution::Solution(solution) => {
                let discovery_index = solution.discovery_index();
                if options.selection.contains(discovery_index) {
                    callback
                        .on_solution(&solution)
                        .map_err(|source| EnumerationError::CallbackFailure {
                            discovery_index,
                            source,
                        })?;
                    num_reported += 1;
                }
            }
            IteratedSolution::Finished | IteratedSolution::Unsatisfiable => {
                break SearchStatus::Exhausted
            }
            IteratedSolution::Unknown => break SearchStatus::Terminated,
        }
    };

    let summary = RunSummary::new(
        status,
        *solutions.statistics(),
        num_reported,
        started_at.elapsed(),
    );
    debug!(
        "Enumeration {status} after {} solutions, {num_reported} reported",
        summary.solutions_found()
    );

    Ok(summary)
}
