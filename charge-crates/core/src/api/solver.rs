use std::convert::Infallible;

use log::debug;

use super::enumeration::enumerate;
use super::enumeration::EnumerationError;
use super::enumeration::EnumerationOptions;
use super::enumeration::SolutionSelection;
use super::outputs::RunSummary;
use super::solution_callback::SolutionCallback;
use crate::basic_types::ModelError;
use crate::constraints::ConstraintStore;
use crate::engine::SearchEngine;
use crate::options::SolverOptions;
use crate::results::solution_iterator::SolutionIterator;
use crate::results::Solution;
use crate::termination::TerminationCondition;
use crate::variables::ChargeVariables;
use crate::variables::Dimensions;

/// The main interaction point: holds one charging problem and enumerates its solutions.
///
/// The problem is fully determined by its [`Dimensions`]; the variables and constraints are
/// derived from them when the solver is created and never change afterwards. Every run, through
/// either [`ChargeSolver::solution_iterator`] or [`ChargeSolver::enumerate`], starts a fresh
/// search with fresh statistics.
///
/// # Example
/// ```rust
/// # use charge_core::ChargeSolver;
/// # use charge_core::options::EnumerationOptions;
/// # use charge_core::options::SolutionSelection;
/// # use charge_core::results::Solution;
/// # use charge_core::termination::Indefinite;
/// # use std::convert::Infallible;
/// let solver = ChargeSolver::from_sizes(2, 2, 1).expect("valid dimensions");
///
/// let options = EnumerationOptions {
///     selection: SolutionSelection::first(1),
///     ..Default::default()
/// };
/// let mut first = Vec::new();
/// let summary = solver
///     .enumerate(&options, &mut Indefinite, &mut |solution: &Solution| {
///         first.push(solution.clone());
///         Ok::<(), Infallible>(())
///     })
///     .expect("the callback does not fail");
///
/// assert_eq!(first.len(), 1);
/// assert_eq!(summary.solutions_found(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ChargeSolver {
    constraints: ConstraintStore,
    options: SolverOptions,
}

impl ChargeSolver {
    pub fn new(dimensions: Dimensions) -> Self {
        Self::with_options(dimensions, SolverOptions::default())
    }

    /// Creates a solver for `vehicles` vehicles, `hours` hours and `chargers` chargers.
    pub fn from_sizes(vehicles: usize, hours: usize, chargers: usize) -> Result<Self, ModelError> {
        Ok(Self::new(Dimensions::new(vehicles, hours, chargers)?))
    }

    pub fn with_options(dimensions: Dimensions, options: SolverOptions) -> Self {
        ChargeSolver {
            constraints: ConstraintStore::new(ChargeVariables::new(dimensions)),
            options,
        }
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    pub fn dimensions(&self) -> Dimensions {
        self.constraints.variables().dimensions()
    }

    pub fn variables(&self) -> &ChargeVariables {
        self.constraints.variables()
    }

    pub fn constraints(&self) -> &ConstraintStore {
        &self.constraints
    }

    /// Starts a new search and returns an iterator over its solutions.
    pub fn solution_iterator<'this, 'termination, T: TerminationCondition>(
        &'this self,
        termination: &'termination mut T,
    ) -> SolutionIterator<'this, 'termination, T> {
        SolutionIterator::new(
            SearchEngine::new(&self.constraints, self.options),
            termination,
        )
    }

    /// Starts a new search, passing the solutions selected by `options` to `callback`.
    ///
    /// The run ends when the search space is exhausted, when the solution limit is reached, when
    /// every selected solution has been reported (unless all solutions are counted), or when
    /// `termination` triggers. A failing callback abandons the run.
    pub fn enumerate<T, C>(
        &self,
        options: &EnumerationOptions,
        termination: &mut T,
        callback: &mut C,
    ) -> Result<RunSummary, EnumerationError<C::Error>>
    where
        T: TerminationCondition,
        C: SolutionCallback,
    {
        debug!(
            "Enumerating solutions for {} vehicles, {} hours and {} chargers",
            self.dimensions().vehicles(),
            self.dimensions().hours(),
            self.dimensions().chargers()
        );

        enumerate(self.solution_iterator(termination), options, callback)
    }

    /// Counts the solutions without reporting any of them.
    pub fn count_solutions(&self, termination: &mut impl TerminationCondition) -> RunSummary {
        let options = EnumerationOptions {
            selection: SolutionSelection::none(),
            solution_limit: None,
            count_all_solutions: true,
        };

        let mut ignore = |_: &Solution| Ok::<(), Infallible>(());
        match self.enumerate(&options, termination, &mut ignore) {
            Ok(summary) => summary,
            Err(EnumerationError::CallbackFailure { source, .. }) => match source {},
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::fmt::Formatter;

    use super::*;
    use crate::results::SearchStatus;
    use crate::termination::BranchBudget;
    use crate::termination::Indefinite;

    #[derive(Debug)]
    struct Rejected;

    impl Display for Rejected {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "rejected")
        }
    }

    impl std::error::Error for Rejected {}

    fn collect(
        solver: &ChargeSolver,
        options: &EnumerationOptions,
    ) -> (RunSummary, Vec<Solution>) {
        let mut reported = Vec::new();
        let summary = solver
            .enumerate(options, &mut Indefinite, &mut |solution: &Solution| {
                reported.push(solution.clone());
                Ok::<(), Infallible>(())
            })
            .unwrap();
        (summary, reported)
    }

    #[test]
    fn invalid_dimensions_are_rejected_before_searching() {
        assert_eq!(
            ChargeSolver::from_sizes(0, 24, 3).unwrap_err(),
            ModelError::InvalidDimensions {
                vehicles: 0,
                hours: 24,
                chargers: 3
            }
        );
    }

    #[test]
    fn selecting_the_first_solution_reports_once_and_counts_all() {
        let solver = ChargeSolver::from_sizes(3, 1, 2).unwrap();
        let options = EnumerationOptions {
            selection: SolutionSelection::indices([0]),
            ..Default::default()
        };

        let (summary, reported) = collect(&solver, &options);

        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].discovery_index(), 0);
        assert_eq!(summary.reported(), 1);
        assert_eq!(summary.solutions_found(), 6);
        assert_eq!(summary.status(), SearchStatus::Exhausted);
    }

    #[test]
    fn empty_selection_still_counts_every_solution() {
        let solver = ChargeSolver::from_sizes(5, 1, 3).unwrap();
        let options = EnumerationOptions {
            selection: SolutionSelection::none(),
            ..Default::default()
        };

        let (summary, reported) = collect(&solver, &options);

        assert!(reported.is_empty());
        assert_eq!(summary.solutions_found(), 60);
        assert!(!summary.is_infeasible());
    }

    #[test]
    fn selection_does_not_limit_the_search() {
        let solver = ChargeSolver::from_sizes(3, 2, 2).unwrap();
        let options = EnumerationOptions {
            selection: SolutionSelection::indices([2, 5, 7]),
            ..Default::default()
        };

        let (summary, reported) = collect(&solver, &options);

        assert_eq!(
            reported
                .iter()
                .map(|solution| solution.discovery_index())
                .collect::<Vec<_>>(),
            vec![2, 5, 7]
        );
        assert_eq!(summary.solutions_found(), 24);
    }

    #[test]
    fn solution_limit_stops_after_enough_callbacks() {
        let solver = ChargeSolver::from_sizes(5, 1, 3).unwrap();
        let options = EnumerationOptions {
            solution_limit: Some(4),
            ..Default::default()
        };

        let (summary, reported) = collect(&solver, &options);

        assert_eq!(reported.len(), 4);
        assert_eq!(summary.status(), SearchStatus::Stopped);
        assert_eq!(summary.solutions_found(), 4);
    }

    #[test]
    fn zero_limit_does_not_search() {
        let solver = ChargeSolver::from_sizes(5, 1, 3).unwrap();
        let options = EnumerationOptions {
            solution_limit: Some(0),
            ..Default::default()
        };

        let (summary, reported) = collect(&solver, &options);

        assert!(reported.is_empty());
        assert_eq!(summary.branches(), 0);
        assert_eq!(summary.status(), SearchStatus::Stopped);
    }

    #[test]
    fn without_counting_the_run_stops_at_the_last_selected_index() {
        let solver = ChargeSolver::from_sizes(5, 1, 3).unwrap();
        let options = EnumerationOptions {
            selection: SolutionSelection::first(5),
            count_all_solutions: false,
            ..Default::default()
        };

        let (summary, reported) = collect(&solver, &options);

        assert_eq!(reported.len(), 5);
        assert_eq!(summary.solutions_found(), 5);
        assert_eq!(summary.status(), SearchStatus::Stopped);
    }

    #[test]
    fn infeasible_problems_are_exhausted_without_solutions() {
        let solver = ChargeSolver::from_sizes(2, 1, 3).unwrap();

        let summary = solver.count_solutions(&mut Indefinite);

        assert!(summary.is_infeasible());
        assert_eq!(summary.status(), SearchStatus::Exhausted);
        assert!(summary.branches() > 0);
        assert!(summary.conflicts() > 0);
    }

    #[test]
    fn callback_failures_abandon_the_run() {
        let solver = ChargeSolver::from_sizes(3, 1, 2).unwrap();
        let mut num_calls = 0;

        let result = solver.enumerate(
            &EnumerationOptions::default(),
            &mut Indefinite,
            &mut |solution: &Solution| {
                num_calls += 1;
                if solution.discovery_index() == 1 {
                    Err(Rejected)
                } else {
                    Ok(())
                }
            },
        );

        let Err(EnumerationError::CallbackFailure {
            discovery_index,
            source: Rejected,
        }) = result
        else {
            panic!("expected the callback failure to be propagated");
        };
        assert_eq!(discovery_index, 1);
        assert_eq!(num_calls, 2);
    }

    #[test]
    fn termination_ends_the_run_early() {
        let solver = ChargeSolver::from_sizes(4, 2, 3).unwrap();

        let summary = solver.count_solutions(&mut BranchBudget::new(10));

        assert_eq!(summary.status(), SearchStatus::Terminated);
        assert!(summary.solutions_found() < 432);
        assert!(!summary.is_infeasible());
    }

    #[test]
    fn every_run_starts_with_fresh_statistics() {
        let solver = ChargeSolver::from_sizes(4, 2, 3).unwrap();

        let first = solver.count_solutions(&mut Indefinite);
        let second = solver.count_solutions(&mut Indefinite);

        assert_eq!(first.solutions_found(), 432);
        assert_eq!(first.solutions_found(), second.solutions_found());
        assert_eq!(first.branches(), second.branches());
        assert_eq!(first.conflicts(), second.conflicts());
    }
}
