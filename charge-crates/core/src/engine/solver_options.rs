use std::fmt::Display;

/// The value the search engine tries first when it branches on a variable.
///
/// The value selection is fixed for a run; it determines the order in which solutions are
/// discovered, and thereby which solution receives which discovery index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelection {
    /// Try to let the vehicle charge first, then leave it idle.
    #[default]
    TrueFirst,
    /// Try to leave the vehicle idle first, then let it charge.
    FalseFirst,
}

impl ValueSelection {
    pub fn first_value(self) -> bool {
        match self {
            ValueSelection::TrueFirst => true,
            ValueSelection::FalseFirst => false,
        }
    }
}

impl Display for ValueSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSelection::TrueFirst => write!(f, "true-first"),
            ValueSelection::FalseFirst => write!(f, "false-first"),
        }
    }
}

/// How much work is done after every decision.
///
/// Both strengths detect every constraint that can no longer be satisfied, so both yield the same
/// solutions in the same order; they differ in the number of branches and conflicts it takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagationStrength {
    /// Detect conflicts and assign the variables which a constraint forces to a value.
    #[default]
    Bounds,
    /// Only detect conflicts.
    ConflictOnly,
}

impl Display for PropagationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationStrength::Bounds => write!(f, "bounds"),
            PropagationStrength::ConflictOnly => write!(f, "conflict-only"),
        }
    }
}

/// Options for the [`ChargeSolver`] which determine how the search behaves.
///
/// [`ChargeSolver`]: crate::ChargeSolver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// The value which is tried first at every decision.
    pub value_selection: ValueSelection,
    /// The propagation performed after every decision.
    pub propagation: PropagationStrength,
}
