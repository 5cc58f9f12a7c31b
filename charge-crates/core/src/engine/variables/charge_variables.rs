use std::ops::Range;

use crate::charge_assert_simple;
use crate::containers::StorageKey;
use crate::variables::Dimensions;
use crate::variables::VariableId;

/// The coordinates of a decision variable: the variable is true if and only if `vehicle` charges at
/// `charger` during `hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChargeSlot {
    pub vehicle: usize,
    pub hour: usize,
    pub charger: usize,
}

/// The set of decision variables of a charging problem together with its addressing scheme.
///
/// The variable set is fully determined by the [`Dimensions`] and never changes afterwards. The
/// [`VariableId`] of `(vehicle, hour, charger)` is
/// `(hour * chargers + charger) * vehicles + vehicle`, which means that iterating over the ids in
/// ascending order visits the variables by hour, then by charger, then by vehicle; this is the
/// order in which the search engine branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChargeVariables {
    dimensions: Dimensions,
}

impl ChargeVariables {
    pub fn new(dimensions: Dimensions) -> Self {
        ChargeVariables { dimensions }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.dimensions.num_variables()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn vehicles(&self) -> Range<usize> {
        0..self.dimensions.vehicles()
    }

    pub fn hours(&self) -> Range<usize> {
        0..self.dimensions.hours()
    }

    pub fn chargers(&self) -> Range<usize> {
        0..self.dimensions.chargers()
    }

    /// Returns the variable of `(vehicle, hour, charger)`.
    ///
    /// # Panics
    /// If one of the coordinates is out of range.
    pub fn variable(&self, vehicle: usize, hour: usize, charger: usize) -> VariableId {
        self.try_variable(vehicle, hour, charger)
            .unwrap_or_else(|| {
                panic!("slot (vehicle={vehicle}, hour={hour}, charger={charger}) is out of range for {:?}", self.dimensions)
            })
    }

    /// Returns the variable of `(vehicle, hour, charger)`, or [`None`] if one of the coordinates is
    /// out of range.
    pub fn try_variable(&self, vehicle: usize, hour: usize, charger: usize) -> Option<VariableId> {
        if vehicle >= self.dimensions.vehicles()
            || hour >= self.dimensions.hours()
            || charger >= self.dimensions.chargers()
        {
            return None;
        }

        let index = (hour * self.dimensions.chargers() + charger) * self.dimensions.vehicles()
            + vehicle;
        Some(VariableId::create_from_index(index))
    }

    /// Returns the coordinates of `variable`; the inverse of [`ChargeVariables::variable`].
    pub fn slot(&self, variable: VariableId) -> ChargeSlot {
        let index = variable.index();
        charge_assert_simple!(index < self.len(), "{variable} does not belong to this problem");

        let vehicles = self.dimensions.vehicles();
        let chargers = self.dimensions.chargers();

        ChargeSlot {
            vehicle: index % vehicles,
            charger: (index / vehicles) % chargers,
            hour: index / (vehicles * chargers),
        }
    }

    /// Iterates over all variables in search order.
    pub fn iter(&self) -> impl Iterator<Item = VariableId> {
        (0..self.len()).map(VariableId::create_from_index)
    }

    /// The variables which assign one of the vehicles to `charger` during `hour`.
    pub fn vehicles_at(&self, hour: usize, charger: usize) -> impl Iterator<Item = VariableId> + '_ {
        self.vehicles()
            .map(move |vehicle| self.variable(vehicle, hour, charger))
    }

    /// The variables which assign `vehicle` to one of the chargers during `hour`.
    pub fn chargers_of(&self, vehicle: usize, hour: usize) -> impl Iterator<Item = VariableId> + '_ {
        self.chargers()
            .map(move |charger| self.variable(vehicle, hour, charger))
    }

    /// All variables of `vehicle` over the whole horizon.
    pub fn slots_of(&self, vehicle: usize) -> impl Iterator<Item = VariableId> + '_ {
        self.hours()
            .flat_map(move |hour| self.chargers_of(vehicle, hour))
    }
}
