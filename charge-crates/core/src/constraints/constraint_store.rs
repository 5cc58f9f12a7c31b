use std::ops::Index;

use crate::constraints::ConstraintId;
use crate::constraints::ConstraintKind;
use crate::constraints::LinearConstraint;
use crate::constraints::Relation;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::results::Solution;
use crate::variables::ChargeVariables;
use crate::variables::Dimensions;
use crate::variables::VariableId;

/// Computes the bounds on the number of charger-hours every vehicle receives.
///
/// The `C * H` charger-hours are shared as evenly as possible among the `V` vehicles: every vehicle
/// gets at least `floor(C * H / V)` of them, and one more if `V` does not divide `C * H`.
pub fn fair_share_bounds(dimensions: Dimensions) -> Relation {
    let charger_hours = dimensions.charger_hours();
    let lower = charger_hours / dimensions.vehicles();

    if charger_hours % dimensions.vehicles() == 0 {
        Relation::exactly(lower)
    } else {
        Relation::between(lower, lower + 1)
    }
}

/// All constraints of a charging problem, derived from its [`ChargeVariables`].
///
/// The constraints are stored family by family:
/// 1. charger exclusivity, for every `(hour, charger)` pair;
/// 2. vehicle exclusivity, for every `(vehicle, hour)` pair;
/// 3. the fair-share bound, for every vehicle.
///
/// Besides the constraints themselves, the store keeps for every variable the constraints it
/// occurs in, which is what propagation is driven by.
#[derive(Debug, Clone)]
pub struct ConstraintStore {
    variables: ChargeVariables,
    fair_share: Relation,
    constraints: KeyedVec<ConstraintId, LinearConstraint>,
    occurrences: KeyedVec<VariableId, Vec<ConstraintId>>,
}

impl ConstraintStore {
    pub fn new(variables: ChargeVariables) -> Self {
        let fair_share = fair_share_bounds(variables.dimensions());
        let mut constraints: KeyedVec<ConstraintId, LinearConstraint> = KeyedVec::default();

        for hour in variables.hours() {
            for charger in variables.chargers() {
                let _ = constraints.push(LinearConstraint::new(
                    ConstraintKind::ChargerExclusivity { hour, charger },
                    variables.vehicles_at(hour, charger),
                    Relation::exactly(1),
                ));
            }
        }

        for vehicle in variables.vehicles() {
            for hour in variables.hours() {
                let _ = constraints.push(LinearConstraint::new(
                    ConstraintKind::VehicleExclusivity { vehicle, hour },
                    variables.chargers_of(vehicle, hour),
                    Relation::at_most(1),
                ));
            }
        }

        for vehicle in variables.vehicles() {
            let _ = constraints.push(LinearConstraint::new(
                ConstraintKind::FairShare { vehicle },
                variables.slots_of(vehicle),
                fair_share,
            ));
        }

        let mut occurrences: KeyedVec<VariableId, Vec<ConstraintId>> =
            KeyedVec::filled(variables.len(), Vec::new());
        for constraint_id in constraints.keys() {
            for &variable in constraints[constraint_id].variables() {
                occurrences[variable].push(constraint_id);
            }
        }

        ConstraintStore {
            variables,
            fair_share,
            constraints,
            occurrences,
        }
    }

    pub fn variables(&self) -> &ChargeVariables {
        &self.variables
    }

    /// The bounds on the number of charger-hours of every vehicle.
    pub fn fair_share(&self) -> Relation {
        self.fair_share
    }

    /// The number of charger-hours left over once every vehicle has its lower fair share.
    ///
    /// As every charger-hour is taken, exactly this many vehicles end up above the lower bound.
    pub fn fair_share_surplus(&self) -> usize {
        let dimensions = self.variables.dimensions();
        dimensions.charger_hours() - dimensions.vehicles() * self.fair_share.lower()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ConstraintId> {
        self.constraints.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConstraintId, &LinearConstraint)> {
        self.constraints.keys().zip(self.constraints.iter())
    }

    /// The constraints in which `variable` occurs; every variable occurs in exactly one constraint
    /// of each family.
    pub fn occurrences(&self, variable: VariableId) -> &[ConstraintId] {
        &self.occurrences[variable]
    }

    pub fn charger_exclusivity(&self, hour: usize, charger: usize) -> ConstraintId {
        let dimensions = self.variables.dimensions();
        ConstraintId::create_from_index(hour * dimensions.chargers() + charger)
    }

    pub fn vehicle_exclusivity(&self, vehicle: usize, hour: usize) -> ConstraintId {
        let dimensions = self.variables.dimensions();
        ConstraintId::create_from_index(
            dimensions.charger_hours() + vehicle * dimensions.hours() + hour,
        )
    }

    pub fn fair_share_of(&self, vehicle: usize) -> ConstraintId {
        let dimensions = self.variables.dimensions();
        ConstraintId::create_from_index(
            dimensions.charger_hours() + dimensions.vehicles() * dimensions.hours() + vehicle,
        )
    }

    /// The constraints which `solution` does not satisfy.
    pub fn violated_by<'a>(
        &'a self,
        solution: &'a Solution,
    ) -> impl Iterator<Item = ConstraintId> + 'a {
        self.iter()
            .filter(|(_, constraint)| !constraint.is_satisfied_by(solution))
            .map(|(constraint_id, _)| constraint_id)
    }

    pub fn is_satisfied_by(&self, solution: &Solution) -> bool {
        self.violated_by(solution).next().is_none()
    }
}

impl Index<ConstraintId> for ConstraintStore {
    type Output = LinearConstraint;

    fn index(&self, index: ConstraintId) -> &Self::Output {
        &self.constraints[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(vehicles: usize, hours: usize, chargers: usize) -> ConstraintStore {
        ConstraintStore::new(ChargeVariables::new(
            Dimensions::new(vehicles, hours, chargers).unwrap(),
        ))
    }

    #[test]
    fn fair_share_is_exact_when_the_fleet_divides_the_charger_hours() {
        let bounds = fair_share_bounds(Dimensions::new(4, 24, 3).unwrap());

        assert_eq!(bounds, Relation::exactly(18));
    }

    #[test]
    fn fair_share_allows_one_extra_hour_otherwise() {
        assert_eq!(
            fair_share_bounds(Dimensions::new(5, 24, 3).unwrap()),
            Relation::between(14, 15)
        );
        assert_eq!(
            fair_share_bounds(Dimensions::new(5, 1, 3).unwrap()),
            Relation::between(0, 1)
        );
    }

    #[test]
    fn surplus_is_the_remainder_of_the_charger_hours() {
        assert_eq!(store(4, 24, 3).fair_share_surplus(), 0);
        assert_eq!(store(7, 24, 3).fair_share_surplus(), 2);
        assert_eq!(store(7, 12, 3).fair_share_surplus(), 1);
        assert_eq!(store(5, 1, 3).fair_share_surplus(), 3);
    }

    #[test]
    fn one_constraint_per_pair_and_per_vehicle() {
        let store = store(4, 24, 3);

        // 24 * 3 charger exclusivity + 4 * 24 vehicle exclusivity + 4 fair share
        assert_eq!(store.len(), 72 + 96 + 4);
    }

    #[test]
    fn direct_lookups_agree_with_the_stored_kinds() {
        let store = store(3, 4, 2);

        for hour in 0..4 {
            for charger in 0..2 {
                assert_eq!(
                    store[store.charger_exclusivity(hour, charger)].kind(),
                    ConstraintKind::ChargerExclusivity { hour, charger }
                );
            }
        }
        for vehicle in 0..3 {
            for hour in 0..4 {
                assert_eq!(
                    store[store.vehicle_exclusivity(vehicle, hour)].kind(),
                    ConstraintKind::VehicleExclusivity { vehicle, hour }
                );
            }
            assert_eq!(
                store[store.fair_share_of(vehicle)].kind(),
                ConstraintKind::FairShare { vehicle }
            );
        }
    }

    #[test]
    fn every_variable_occurs_once_in_each_family() {
        let store = store(3, 2, 2);

        for variable in store.variables().iter() {
            let slot = store.variables().slot(variable);

            assert_eq!(
                store.occurrences(variable),
                &[
                    store.charger_exclusivity(slot.hour, slot.charger),
                    store.vehicle_exclusivity(slot.vehicle, slot.hour),
                    store.fair_share_of(slot.vehicle),
                ]
            );
        }
    }

    #[test]
    fn relations_match_the_constraint_families() {
        let store = store(5, 1, 3);

        for (_, constraint) in store.iter() {
            let expected = match constraint.kind() {
                ConstraintKind::ChargerExclusivity { .. } => Relation::exactly(1),
                ConstraintKind::VehicleExclusivity { .. } => Relation::at_most(1),
                ConstraintKind::FairShare { .. } => Relation::between(0, 1),
            };
            assert_eq!(constraint.relation(), expected);
        }
    }
}
