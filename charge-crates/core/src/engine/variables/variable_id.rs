use std::fmt::Display;

use crate::containers::StorageKey;

/// Identifies one boolean decision variable of a charging problem.
///
/// The id is the position of the variable in the search order: ids are handed out hour by hour,
/// charger by charger, vehicle by vehicle (see [`ChargeVariables`]).
///
/// [`ChargeVariables`]: crate::variables::ChargeVariables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId {
    id: u32,
}

impl VariableId {
    /// The largest number of variables a single problem may contain.
    pub const MAX_VARIABLES: usize = u32::MAX as usize;

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId { id: index as u32 }
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
