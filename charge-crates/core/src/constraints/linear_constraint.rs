use std::fmt::Display;

use crate::charge_assert_simple;
use crate::containers::StorageKey;
use crate::results::Solution;
use crate::variables::VariableId;

/// Identifies a constraint in the [`ConstraintStore`].
///
/// [`ConstraintStore`]: crate::constraints::ConstraintStore
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId {
    id: u32,
}

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId { id: index as u32 }
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

/// The family a constraint belongs to, together with the coordinates it ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Exactly one vehicle charges at `charger` during `hour`.
    ChargerExclusivity { hour: usize, charger: usize },
    /// `vehicle` charges at no more than one charger during `hour`.
    VehicleExclusivity { vehicle: usize, hour: usize },
    /// The number of charger-hours of `vehicle` over the horizon lies within the fair-share
    /// bounds.
    FairShare { vehicle: usize },
}

impl Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintKind::ChargerExclusivity { hour, charger } => {
                write!(f, "charger_exclusivity(hour={hour}, charger={charger})")
            }
            ConstraintKind::VehicleExclusivity { vehicle, hour } => {
                write!(f, "vehicle_exclusivity(vehicle={vehicle}, hour={hour})")
            }
            ConstraintKind::FairShare { vehicle } => write!(f, "fair_share(vehicle={vehicle})"),
        }
    }
}

/// The relation `lower <= sum <= upper` which a [`LinearConstraint`] imposes on the number of its
/// variables that are true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relation {
    lower: usize,
    upper: usize,
}

impl Relation {
    /// `sum == value`
    pub fn exactly(value: usize) -> Self {
        Relation {
            lower: value,
            upper: value,
        }
    }

    /// `sum <= upper`
    pub fn at_most(upper: usize) -> Self {
        Relation { lower: 0, upper }
    }

    /// `lower <= sum <= upper`
    ///
    /// # Panics
    /// If `lower > upper`.
    pub fn between(lower: usize, upper: usize) -> Self {
        charge_assert_simple!(
            lower <= upper,
            "empty relation: lower bound {lower} exceeds upper bound {upper}"
        );
        Relation { lower, upper }
    }

    pub fn lower(&self) -> usize {
        self.lower
    }

    pub fn upper(&self) -> usize {
        self.upper
    }

    pub fn is_equality(&self) -> bool {
        self.lower == self.upper
    }

    pub fn contains(&self, sum: usize) -> bool {
        self.lower <= sum && sum <= self.upper
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_equality() {
            write!(f, "== {}", self.lower)
        } else if self.lower == 0 {
            write!(f, "<= {}", self.upper)
        } else {
            write!(f, "in [{}, {}]", self.lower, self.upper)
        }
    }
}

/// A constraint `lower <= x_1 + ... + x_n <= upper` over boolean variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearConstraint {
    kind: ConstraintKind,
    variables: Box<[VariableId]>,
    relation: Relation,
}

impl LinearConstraint {
    pub(crate) fn new(
        kind: ConstraintKind,
        variables: impl IntoIterator<Item = VariableId>,
        relation: Relation,
    ) -> Self {
        let variables: Box<[VariableId]> = variables.into_iter().collect();
        charge_assert_simple!(!variables.is_empty(), "{kind} has no variables");

        LinearConstraint {
            kind,
            variables,
            relation,
        }
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn is_satisfied_by(&self, solution: &Solution) -> bool {
        let sum = self
            .variables
            .iter()
            .filter(|&&variable| solution.value(variable))
            .count();
        self.relation.contains(sum)
    }
}

impl Display for LinearConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: sum of {} variables {}",
            self.kind,
            self.variables.len(),
            self.relation
        )
    }
}
