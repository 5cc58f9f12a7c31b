use log::trace;

use super::propagation::fair_share_capacity;
use super::propagation::propagate_linear;
use super::propagation::propagate_surplus;
use super::propagation::Conflict;
use super::propagation::LinearPropagation;
use super::propagation::PartialSum;
use super::propagation::PropagationStatus;
use super::propagation::SurplusPropagation;
use super::solver_statistics::EngineStatistics;
use super::PropagationStrength;
use crate::basic_types::Trail;
use crate::charge_assert_moderate;
use crate::charge_assert_simple;
use crate::constraints::ConstraintId;
use crate::constraints::ConstraintKind;
use crate::constraints::ConstraintStore;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::variables::VariableId;

/// A single assignment on the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrailEntry {
    pub(crate) variable: VariableId,
    pub(crate) value: bool,
    /// The constraint which forced the value, or [`None`] for a decision.
    pub(crate) reason: Option<ConstraintId>,
}

impl TrailEntry {
    pub(crate) fn is_implied(&self) -> bool {
        self.reason.is_some()
    }
}

/// The partial assignment of the search together with the decision trail.
///
/// Next to the values, the state maintains a [`PartialSum`] for every constraint and the number of
/// vehicles above the lower fair share. All of them are updated on every assignment and restored
/// when the trail is synchronised to an earlier decision level.
#[derive(Debug)]
pub(crate) struct SearchState {
    values: KeyedVec<VariableId, Option<bool>>,
    trail: Trail<TrailEntry>,
    sums: KeyedVec<ConstraintId, PartialSum>,
    num_above_lower: usize,
    /// Entries on the trail before this position have been propagated.
    propagation_head: usize,
}

impl SearchState {
    pub(crate) fn new(constraints: &ConstraintStore) -> Self {
        SearchState {
            values: KeyedVec::filled(constraints.variables().len(), None),
            trail: Trail::default(),
            sums: constraints
                .iter()
                .map(|(_, constraint)| PartialSum::unassigned(constraint.variables().len()))
                .collect(),
            num_above_lower: 0,
            propagation_head: 0,
        }
    }

    pub(crate) fn value(&self, variable: VariableId) -> Option<bool> {
        self.values[variable]
    }

    pub(crate) fn decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.trail.len()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.num_assigned() == self.values.len()
    }

    /// The first unassigned variable in search order.
    ///
    /// Every variable before the most recent decision is assigned, so the scan starts there.
    pub(crate) fn next_unassigned(&self) -> Option<VariableId> {
        let start = self
            .trail
            .last_decision()
            .map(|decision| decision.variable.index())
            .unwrap_or(0);

        (start..self.values.len())
            .map(VariableId::create_from_index)
            .find(|&variable| self.value(variable).is_none())
    }

    /// Opens a new decision level by assigning `value` to `variable`.
    pub(crate) fn decide(
        &mut self,
        variable: VariableId,
        value: bool,
        constraints: &ConstraintStore,
    ) {
        charge_assert_simple!(self.values[variable].is_none());

        self.trail.increase_decision_level();
        self.assign(variable, value, None, constraints);
    }

    /// Undoes the current decision level, returning the decision which opened it, or [`None`]
    /// when the state is at the root.
    pub(crate) fn undo_last_decision(&mut self, constraints: &ConstraintStore) -> Option<TrailEntry> {
        let decision_level = self.decision_level();
        if decision_level == 0 {
            return None;
        }

        let mut decision = None;
        for entry in self.trail.synchronise(decision_level - 1) {
            self.values[entry.variable] = None;
            for &constraint_id in constraints.occurrences(entry.variable) {
                if entry.value && is_just_above_lower(&self.sums, constraint_id, constraints) {
                    self.num_above_lower -= 1;
                }
                self.sums[constraint_id].unassign(entry.value);
            }
            decision = Some(entry);
        }
        self.propagation_head = self.trail.len();

        charge_assert_moderate!(decision.is_some_and(|entry| !entry.is_implied()));
        decision
    }

    /// Checks every constraint once, regardless of whether any of its variables is assigned, and
    /// then propagates the consequences.
    pub(crate) fn initialise_at_root(
        &mut self,
        constraints: &ConstraintStore,
        strength: PropagationStrength,
        statistics: &mut EngineStatistics,
    ) -> PropagationStatus {
        charge_assert_simple!(self.decision_level() == 0);

        for constraint_id in constraints.ids() {
            self.propagate_constraint(constraint_id, constraints, strength, statistics)?;
        }

        self.propagate(constraints, strength, statistics)
    }

    /// Propagates every constraint touched by an assignment which has not been propagated yet,
    /// until a fixed point or a conflict is reached.
    pub(crate) fn propagate(
        &mut self,
        constraints: &ConstraintStore,
        strength: PropagationStrength,
        statistics: &mut EngineStatistics,
    ) -> PropagationStatus {
        while self.propagation_head < self.trail.len() {
            let variable = self.trail[self.propagation_head].variable;
            self.propagation_head += 1;

            for &constraint_id in constraints.occurrences(variable) {
                self.propagate_constraint(constraint_id, constraints, strength, statistics)?;
            }
        }

        Ok(())
    }

    /// Copies the values out of a complete state.
    pub(crate) fn values(&self) -> Box<[bool]> {
        charge_assert_simple!(self.is_complete());

        self.values.iter().map(|value| *value == Some(true)).collect()
    }

    fn propagate_constraint(
        &mut self,
        constraint_id: ConstraintId,
        constraints: &ConstraintStore,
        strength: PropagationStrength,
        statistics: &mut EngineStatistics,
    ) -> PropagationStatus {
        let constraint = &constraints[constraint_id];
        let sum = self.sums[constraint_id];

        if let ConstraintKind::FairShare { vehicle } = constraint.kind() {
            let vehicle_hours = constraints
                .variables()
                .hours()
                .map(|hour| self.sums[constraints.vehicle_exclusivity(vehicle, hour)]);

            if fair_share_capacity(sum, vehicle_hours) < constraint.relation().lower() {
                trace!("vehicle {vehicle} can no longer reach its fair share");
                return Err(Conflict {
                    constraint: constraint_id,
                });
            }

            self.propagate_surplus(constraint_id, constraints, strength, statistics)?;
        }

        match propagate_linear(constraint.relation(), sum, strength) {
            LinearPropagation::Conflict => Err(Conflict {
                constraint: constraint_id,
            }),
            LinearPropagation::NoChange => Ok(()),
            LinearPropagation::FixUnassigned(value) => {
                for &variable in constraint.variables() {
                    if self.values[variable].is_none() {
                        self.assign(variable, value, Some(constraint_id), constraints);
                        statistics.num_propagations += 1;
                    }
                }
                Ok(())
            }
        }
    }

    /// Checks how many vehicles exceed the lower fair share. Once the surplus is used up, every
    /// vehicle at the lower fair share is kept from charging any further.
    fn propagate_surplus(
        &mut self,
        constraint_id: ConstraintId,
        constraints: &ConstraintStore,
        strength: PropagationStrength,
        statistics: &mut EngineStatistics,
    ) -> PropagationStatus {
        let surplus = constraints.fair_share_surplus();

        match propagate_surplus(self.num_above_lower, surplus, strength) {
            SurplusPropagation::Conflict => {
                trace!(
                    "{} vehicles exceed the lower fair share, only {surplus} may",
                    self.num_above_lower
                );
                Err(Conflict {
                    constraint: constraint_id,
                })
            }
            SurplusPropagation::NoChange => Ok(()),
            SurplusPropagation::CapAtLower => {
                let lower = constraints.fair_share().lower();
                for vehicle in constraints.variables().vehicles() {
                    let fair_share = constraints.fair_share_of(vehicle);
                    let sum = self.sums[fair_share];
                    if sum.num_true != lower || sum.num_unassigned == 0 {
                        continue;
                    }

                    for &variable in constraints[fair_share].variables() {
                        if self.values[variable].is_none() {
                            self.assign(variable, false, Some(fair_share), constraints);
                            statistics.num_propagations += 1;
                        }
                    }
                }
                Ok(())
            }
        }
    }

    fn assign(
        &mut self,
        variable: VariableId,
        value: bool,
        reason: Option<ConstraintId>,
        constraints: &ConstraintStore,
    ) {
        self.values[variable] = Some(value);
        for &constraint_id in constraints.occurrences(variable) {
            self.sums[constraint_id].assign(value);
            if value && is_just_above_lower(&self.sums, constraint_id, constraints) {
                self.num_above_lower += 1;
            }
        }
        self.trail.push(TrailEntry {
            variable,
            value,
            reason,
        });
    }
}

/// Whether `constraint_id` is a fair share whose sum is exactly one above the lower bound.
fn is_just_above_lower(
    sums: &KeyedVec<ConstraintId, PartialSum>,
    constraint_id: ConstraintId,
    constraints: &ConstraintStore,
) -> bool {
    matches!(constraints[constraint_id].kind(), ConstraintKind::FairShare { .. })
        && sums[constraint_id].num_true == constraints.fair_share().lower() + 1
}
