use std::fmt::Display;

use crate::charge_assert_eq_simple;
use crate::containers::StorageKey;
use crate::variables::ChargeVariables;
use crate::variables::Dimensions;
use crate::variables::VariableId;

/// What a vehicle does during one hour of a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargerAssignment {
    /// The vehicle charges at `charger`.
    Charging { charger: usize },
    /// The vehicle does not charge at any charger.
    Idle,
}

impl ChargerAssignment {
    pub fn charger(&self) -> Option<usize> {
        match self {
            ChargerAssignment::Charging { charger } => Some(*charger),
            ChargerAssignment::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ChargerAssignment::Idle)
    }
}

impl Display for ChargerAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChargerAssignment::Charging { charger } => write!(f, "{charger}"),
            ChargerAssignment::Idle => write!(f, "-"),
        }
    }
}

/// A complete assignment satisfying every constraint, together with the position at which the
/// search discovered it.
///
/// A solution owns a copy of the values it was created from; it is never modified after the
/// search engine has handed it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    discovery_index: u64,
    variables: ChargeVariables,
    values: Box<[bool]>,
}

impl Solution {
    pub(crate) fn new(discovery_index: u64, variables: ChargeVariables, values: Box<[bool]>) -> Self {
        charge_assert_eq_simple!(values.len(), variables.len());

        Solution {
            discovery_index,
            variables,
            values,
        }
    }

    /// The zero-based position of this solution in the discovery order of the run that found it.
    pub fn discovery_index(&self) -> u64 {
        self.discovery_index
    }

    pub fn dimensions(&self) -> Dimensions {
        self.variables.dimensions()
    }

    pub fn variables(&self) -> &ChargeVariables {
        &self.variables
    }

    pub fn value(&self, variable: VariableId) -> bool {
        self.values[variable.index()]
    }

    /// Whether `vehicle` charges at `charger` during `hour`.
    pub fn is_charging(&self, vehicle: usize, hour: usize, charger: usize) -> bool {
        self.value(self.variables.variable(vehicle, hour, charger))
    }

    /// The charger `vehicle` is assigned to during `hour`.
    pub fn assignment(&self, vehicle: usize, hour: usize) -> ChargerAssignment {
        self.variables
            .chargers()
            .find(|&charger| self.is_charging(vehicle, hour, charger))
            .map_or(ChargerAssignment::Idle, |charger| {
                ChargerAssignment::Charging { charger }
            })
    }

    /// The assignment of every vehicle during `hour`, in vehicle order.
    pub fn hour(&self, hour: usize) -> impl Iterator<Item = ChargerAssignment> + '_ {
        self.variables
            .vehicles()
            .map(move |vehicle| self.assignment(vehicle, hour))
    }

    /// The vehicle which charges at `charger` during `hour`.
    pub fn vehicle_at(&self, hour: usize, charger: usize) -> Option<usize> {
        self.variables
            .vehicles()
            .find(|&vehicle| self.is_charging(vehicle, hour, charger))
    }

    /// The number of charger-hours `vehicle` receives over the whole horizon.
    pub fn charger_hours(&self, vehicle: usize) -> usize {
        self.variables
            .slots_of(vehicle)
            .filter(|&variable| self.value(variable))
            .count()
    }
}
