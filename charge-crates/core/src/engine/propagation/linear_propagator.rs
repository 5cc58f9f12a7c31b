use super::PartialSum;
use crate::constraints::Relation;
use crate::engine::PropagationStrength;

/// What propagating a single linear constraint concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinearPropagation {
    /// The constraint can no longer be satisfied.
    Conflict,
    /// Every unassigned variable of the constraint has to take the given value.
    FixUnassigned(bool),
    /// Nothing can be derived.
    NoChange,
}

/// Propagates `relation` over a sum of boolean variables in state `sum`.
///
/// Once the upper bound is reached, the remaining variables can only be `false`; once the
/// remaining variables are exactly enough to reach the lower bound, they all have to be `true`.
pub(crate) fn propagate_linear(
    relation: Relation,
    sum: PartialSum,
    strength: PropagationStrength,
) -> LinearPropagation {
    if !sum.can_satisfy(relation) {
        return LinearPropagation::Conflict;
    }

    if strength == PropagationStrength::ConflictOnly || sum.num_unassigned == 0 {
        return LinearPropagation::NoChange;
    }

    if sum.num_true == relation.upper() {
        LinearPropagation::FixUnassigned(false)
    } else if sum.max_sum() == relation.lower() {
        LinearPropagation::FixUnassigned(true)
    } else {
        LinearPropagation::NoChange
    }
}
