//! Propagation of the linear constraints over the boolean decision variables.
//!
//! Every constraint keeps a [`PartialSum`] of its variables, which the search state updates
//! incrementally on assignment and restores on backtracking. A constraint is propagated from its
//! partial sum alone through [`propagate_linear`]; the fair-share family is additionally checked
//! against the charging capacity still open to a vehicle (see [`fair_share_capacity`]) and against
//! the number of vehicles which may exceed the lower fair share (see [`propagate_surplus`]).
mod fair_share;
mod linear_propagator;
mod partial_sum;

use std::fmt::Display;

pub(crate) use fair_share::fair_share_capacity;
pub(crate) use fair_share::propagate_surplus;
pub(crate) use fair_share::SurplusPropagation;
pub(crate) use linear_propagator::propagate_linear;
pub(crate) use linear_propagator::LinearPropagation;
pub(crate) use partial_sum::PartialSum;

use crate::constraints::ConstraintId;

/// The result of propagating; the error identifies the constraint which can no longer be
/// satisfied.
pub(crate) type PropagationStatus = Result<(), Conflict>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Conflict {
    pub(crate) constraint: ConstraintId,
}

impl Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conflict on {}", self.constraint)
    }
}
