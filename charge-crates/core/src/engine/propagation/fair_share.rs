use super::PartialSum;
use crate::engine::PropagationStrength;

/// An upper bound on the number of charger-hours a vehicle can still end up with.
///
/// A vehicle charges at most once per hour, so it can gain at most one charger-hour in every hour
/// in which it is not yet charging and still has a charger left. `fair_share` is the partial sum
/// over all charger-hours of the vehicle, `vehicle_hours` the partial sums of its per-hour
/// exclusivity constraints.
pub(crate) fn fair_share_capacity(
    fair_share: PartialSum,
    vehicle_hours: impl IntoIterator<Item = PartialSum>,
) -> usize {
    let open_hours = vehicle_hours
        .into_iter()
        .filter(|hour| hour.num_true == 0 && hour.num_unassigned > 0)
        .count();

    fair_share.num_true + open_hours
}

/// What the global fair-share limit concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurplusPropagation {
    /// More vehicles are above the lower fair share than there are surplus charger-hours.
    Conflict,
    /// The surplus is used up; vehicles at the lower fair share take no further charger-hours.
    CapAtLower,
    NoChange,
}

/// Propagates the limit on the number of vehicles above the lower fair share.
///
/// Every charger-hour is taken by exactly one vehicle, so only `surplus` vehicles can receive
/// more than the lower fair share.
pub(crate) fn propagate_surplus(
    num_above_lower: usize,
    surplus: usize,
    strength: PropagationStrength,
) -> SurplusPropagation {
    if num_above_lower > surplus {
        SurplusPropagation::Conflict
    } else if num_above_lower == surplus && strength == PropagationStrength::Bounds {
        SurplusPropagation::CapAtLower
    } else {
        SurplusPropagation::NoChange
    }
}
