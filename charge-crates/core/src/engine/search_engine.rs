use log::debug;
use log::trace;

use super::search_state::SearchState;
use super::solver_statistics::SolverStatistics;
use super::SolverOptions;
use crate::basic_types::time::Instant;
use crate::charge_assert_moderate;
use crate::constraints::ConstraintStore;
use crate::results::solution_iterator::IteratedSolution;
use crate::results::Solution;
use crate::termination::TerminationCondition;
use crate::variables::VariableId;

/// Where the engine is in its exploration of the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineStatus {
    /// The root has not been propagated yet.
    Unstarted,
    /// The engine is in the middle of the tree, not at a solution.
    Searching,
    /// The current state is the most recently yielded solution.
    AtSolution,
    /// Every branch has been explored.
    Exhausted,
}

/// Depth-first search over the charging variables.
///
/// Variables are decided in the order of their identifiers, which is the order (hour, charger,
/// vehicle); the value tried first is given by the [`SolverOptions`]. After every decision the
/// constraints touching the assigned variables are propagated, and on a conflict the engine
/// backtracks to the most recent decision whose second value has not been tried yet.
///
/// The engine is a generator: [`SearchEngine::next_solution`] resumes exactly where the previous
/// call stopped.
#[derive(Debug)]
pub(crate) struct SearchEngine<'solver> {
    constraints: &'solver ConstraintStore,
    options: SolverOptions,
    state: SearchState,
    statistics: SolverStatistics,
    status: EngineStatus,
}

impl<'solver> SearchEngine<'solver> {
    pub(crate) fn new(constraints: &'solver ConstraintStore, options: SolverOptions) -> Self {
        SearchEngine {
            constraints,
            options,
            state: SearchState::new(constraints),
            statistics: SolverStatistics::default(),
            status: EngineStatus::Unstarted,
        }
    }

    pub(crate) fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Advances the search until the next solution is found, the search space is exhausted, or
    /// `termination` triggers.
    pub(crate) fn next_solution(
        &mut self,
        termination: &mut impl TerminationCondition,
    ) -> IteratedSolution {
        let started_at = Instant::now();
        let result = self.search(termination);
        self.statistics.time_spent_in_search += started_at.elapsed();

        result
    }

    fn search(&mut self, termination: &mut impl TerminationCondition) -> IteratedSolution {
        match self.status {
            EngineStatus::Exhausted => return self.exhausted(),
            EngineStatus::Unstarted => {
                debug!(
                    "Starting search over {} variables and {} constraints",
                    self.constraints.variables().len(),
                    self.constraints.len()
                );

                let engine_statistics = &mut self.statistics.engine_statistics;
                if let Err(conflict) = self.state.initialise_at_root(
                    self.constraints,
                    self.options.propagation,
                    engine_statistics,
                ) {
                    debug!("Root propagation failed with {conflict}");
                    engine_statistics.num_conflicts += 1;
                    return self.exhaust();
                }

                self.status = EngineStatus::Searching;
            }
            EngineStatus::AtSolution => {
                self.status = EngineStatus::Searching;
                if !self.backtrack(termination) {
                    return self.exhaust();
                }
            }
            EngineStatus::Searching => {}
        }

        loop {
            let Some(variable) = self.state.next_unassigned() else {
                return self.extract_solution();
            };

            if termination.should_stop() {
                debug!("Search terminated before deciding on {variable}");
                return IteratedSolution::Unknown;
            }

            let value = self.options.value_selection.first_value();
            if !self.decide(variable, value, termination) && !self.backtrack(termination) {
                return self.exhaust();
            }
        }
    }

    /// Assigns `value` to `variable` on a new decision level and propagates; returns whether
    /// propagation succeeded.
    fn decide(
        &mut self,
        variable: VariableId,
        value: bool,
        termination: &mut impl TerminationCondition,
    ) -> bool {
        trace!("Deciding {variable} = {value}");

        let engine_statistics = &mut self.statistics.engine_statistics;
        engine_statistics.num_branches += 1;
        termination.decision_has_been_made();

        self.state.decide(variable, value, self.constraints);
        engine_statistics.peak_depth = engine_statistics
            .peak_depth
            .max(self.state.decision_level() as u64);

        match self
            .state
            .propagate(self.constraints, self.options.propagation, engine_statistics)
        {
            Ok(()) => true,
            Err(conflict) => {
                trace!("Propagation failed with {conflict}");
                engine_statistics.num_conflicts += 1;
                false
            }
        }
    }

    /// Moves to the next unexplored branch: undoes decisions until one is found whose second value
    /// has not been tried, and tries it. Returns `false` if no such decision exists.
    fn backtrack(&mut self, termination: &mut impl TerminationCondition) -> bool {
        let first_value = self.options.value_selection.first_value();

        while let Some(decision) = self.state.undo_last_decision(self.constraints) {
            if decision.value != first_value {
                continue;
            }

            if self.decide(decision.variable, !first_value, termination) {
                return true;
            }
        }

        false
    }

    fn extract_solution(&mut self) -> IteratedSolution {
        let engine_statistics = &mut self.statistics.engine_statistics;
        let solution = Solution::new(
            engine_statistics.num_solutions,
            *self.constraints.variables(),
            self.state.values(),
        );
        engine_statistics.num_solutions += 1;

        charge_assert_moderate!(
            self.constraints.is_satisfied_by(&solution),
            "the search produced an assignment violating {:?}",
            self.constraints
                .violated_by(&solution)
                .map(|constraint_id| self.constraints[constraint_id].to_string())
                .collect::<Vec<_>>()
        );
        trace!("Found solution {}", solution.discovery_index());

        self.status = EngineStatus::AtSolution;
        IteratedSolution::Solution(solution)
    }

    fn exhaust(&mut self) -> IteratedSolution {
        debug!(
            "Search space exhausted after {} solutions",
            self.statistics.engine_statistics.num_solutions
        );
        self.status = EngineStatus::Exhausted;
        self.exhausted()
    }

    fn exhausted(&self) -> IteratedSolution {
        if self.statistics.engine_statistics.num_solutions == 0 {
            IteratedSolution::Unsatisfiable
        } else {
            IteratedSolution::Finished
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PropagationStrength;
    use crate::engine::ValueSelection;
    use crate::results::ChargerAssignment;
    use crate::termination::BranchBudget;
    use crate::termination::Indefinite;
    use crate::variables::ChargeVariables;
    use crate::variables::Dimensions;

    fn store(vehicles: usize, hours: usize, chargers: usize) -> ConstraintStore {
        ConstraintStore::new(ChargeVariables::new(
            Dimensions::new(vehicles, hours, chargers).unwrap(),
        ))
    }

    fn all_solutions(constraints: &ConstraintStore, options: SolverOptions) -> Vec<Solution> {
        let mut engine = SearchEngine::new(constraints, options);
        let mut solutions = Vec::new();
        while let IteratedSolution::Solution(solution) = engine.next_solution(&mut Indefinite) {
            solutions.push(solution);
        }
        solutions
    }

    #[test]
    fn single_slot_is_solved_by_propagation_alone() {
        let constraints = store(1, 1, 1);
        let mut engine = SearchEngine::new(&constraints, SolverOptions::default());

        let IteratedSolution::Solution(solution) = engine.next_solution(&mut Indefinite) else {
            panic!("expected a solution");
        };
        assert!(solution.is_charging(0, 0, 0));
        assert_eq!(engine.next_solution(&mut Indefinite), IteratedSolution::Finished);
        assert_eq!(engine.statistics().engine_statistics.num_branches, 0);
        assert_eq!(engine.statistics().engine_statistics.num_solutions, 1);
    }

    #[test]
    fn two_vehicles_take_turns_on_one_charger() {
        let constraints = store(2, 2, 1);
        let mut engine = SearchEngine::new(&constraints, SolverOptions::default());

        let mut solutions = Vec::new();
        while let IteratedSolution::Solution(solution) = engine.next_solution(&mut Indefinite) {
            solutions.push(solution);
        }

        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].vehicle_at(0, 0), Some(0));
        assert_eq!(solutions[0].vehicle_at(1, 0), Some(1));
        assert_eq!(solutions[1].vehicle_at(0, 0), Some(1));
        assert_eq!(solutions[1].vehicle_at(1, 0), Some(0));

        let statistics = engine.statistics().engine_statistics;
        assert_eq!(statistics.num_branches, 2);
        assert_eq!(statistics.num_conflicts, 0);
        assert_eq!(statistics.peak_depth, 1);
    }

    #[test]
    fn solutions_are_discovered_in_search_order() {
        let constraints = store(3, 1, 2);
        let solutions = all_solutions(&constraints, SolverOptions::default());

        assert_eq!(solutions.len(), 6);
        assert_eq!(
            solutions[0].hour(0).collect::<Vec<_>>(),
            vec![
                ChargerAssignment::Charging { charger: 0 },
                ChargerAssignment::Charging { charger: 1 },
                ChargerAssignment::Idle,
            ]
        );
        assert_eq!(
            solutions[1].hour(0).collect::<Vec<_>>(),
            vec![
                ChargerAssignment::Charging { charger: 0 },
                ChargerAssignment::Idle,
                ChargerAssignment::Charging { charger: 1 },
            ]
        );
        for (index, solution) in solutions.iter().enumerate() {
            assert_eq!(solution.discovery_index(), index as u64);
        }
    }

    #[test]
    fn solution_counts_match_the_combinatorics() {
        for ((vehicles, hours, chargers), expected) in [
            ((5, 1, 3), 60),
            ((2, 3, 1), 6),
            ((3, 2, 2), 24),
            ((2, 2, 2), 4),
            ((4, 2, 3), 432),
        ] {
            let constraints = store(vehicles, hours, chargers);
            let solutions = all_solutions(&constraints, SolverOptions::default());

            assert_eq!(
                solutions.len(),
                expected,
                "{vehicles} vehicles, {hours} hours, {chargers} chargers"
            );
            assert!(solutions
                .iter()
                .all(|solution| constraints.is_satisfied_by(solution)));
        }
    }

    #[test]
    fn both_propagation_strengths_yield_the_same_solutions() {
        for (vehicles, hours, chargers) in [(3, 1, 2), (2, 3, 1), (3, 2, 2)] {
            let constraints = store(vehicles, hours, chargers);

            let bounds = all_solutions(&constraints, SolverOptions::default());
            let conflict_only = all_solutions(
                &constraints,
                SolverOptions {
                    propagation: PropagationStrength::ConflictOnly,
                    ..Default::default()
                },
            );

            assert_eq!(bounds, conflict_only);
        }
    }

    #[test]
    fn false_first_reverses_the_first_choice() {
        let constraints = store(2, 2, 1);
        let solutions = all_solutions(
            &constraints,
            SolverOptions {
                value_selection: ValueSelection::FalseFirst,
                ..Default::default()
            },
        );

        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].vehicle_at(0, 0), Some(1));
        assert_eq!(solutions[0].vehicle_at(1, 0), Some(0));
    }

    #[test]
    fn more_chargers_than_vehicles_is_infeasible_after_search() {
        let constraints = store(2, 1, 3);
        let mut engine = SearchEngine::new(&constraints, SolverOptions::default());

        assert_eq!(
            engine.next_solution(&mut Indefinite),
            IteratedSolution::Unsatisfiable
        );
        assert!(engine.statistics().engine_statistics.num_branches > 0);
        assert!(engine.statistics().engine_statistics.num_conflicts > 0);
        // asking again does not restart the search
        assert_eq!(
            engine.next_solution(&mut Indefinite),
            IteratedSolution::Unsatisfiable
        );
    }

    #[test]
    fn root_conflict_is_counted_without_branching() {
        let constraints = store(1, 3, 2);
        let mut engine = SearchEngine::new(&constraints, SolverOptions::default());

        assert_eq!(
            engine.next_solution(&mut Indefinite),
            IteratedSolution::Unsatisfiable
        );
        let statistics = engine.statistics().engine_statistics;
        assert_eq!(statistics.num_branches, 0);
        assert_eq!(statistics.num_conflicts, 1);
    }

    #[test]
    fn full_day_for_four_vehicles_and_three_chargers() {
        let constraints = store(4, 24, 3);
        let mut engine = SearchEngine::new(&constraints, SolverOptions::default());

        let IteratedSolution::Solution(solution) = engine.next_solution(&mut Indefinite) else {
            panic!("expected a solution");
        };

        assert!(constraints.is_satisfied_by(&solution));
        for vehicle in 0..4 {
            assert_eq!(solution.charger_hours(vehicle), 18);
        }
    }

    #[test]
    fn uneven_fleet_reaches_a_first_schedule_without_thrashing() {
        // 36 charger-hours over 7 vehicles: only one vehicle can get 6, the others get 5
        let constraints = store(7, 12, 3);
        let mut engine = SearchEngine::new(&constraints, SolverOptions::default());

        let IteratedSolution::Solution(solution) = engine.next_solution(&mut Indefinite) else {
            panic!("expected a solution");
        };

        assert!(constraints.is_satisfied_by(&solution));
        assert_eq!(
            (0..7)
                .filter(|&vehicle| solution.charger_hours(vehicle) == 6)
                .count(),
            1
        );
        assert!(engine.statistics().engine_statistics.num_branches < 10_000);
    }

    #[test]
    fn terminated_search_resumes_where_it_stopped() {
        let constraints = store(3, 2, 2);
        let expected = all_solutions(&constraints, SolverOptions::default());

        let mut engine = SearchEngine::new(&constraints, SolverOptions::default());
        let mut solutions = Vec::new();
        let mut num_interruptions = 0;
        loop {
            match engine.next_solution(&mut BranchBudget::new(1)) {
                IteratedSolution::Solution(solution) => solutions.push(solution),
                IteratedSolution::Unknown => num_interruptions += 1,
                IteratedSolution::Finished | IteratedSolution::Unsatisfiable => break,
            }
        }

        assert!(num_interruptions > 0);
        assert_eq!(solutions, expected);
    }

    #[test]
    fn identical_runs_have_identical_statistics() {
        let constraints = store(4, 2, 3);

        let mut first = SearchEngine::new(&constraints, SolverOptions::default());
        let mut second = SearchEngine::new(&constraints, SolverOptions::default());
        while first.next_solution(&mut Indefinite) != IteratedSolution::Finished {}
        while second.next_solution(&mut Indefinite) != IteratedSolution::Finished {}

        assert_eq!(
            first.statistics().engine_statistics,
            second.statistics().engine_statistics
        );
    }
}
