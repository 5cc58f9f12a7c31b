mod enumeration;
mod outputs;
mod solution_callback;
mod solver;

pub use enumeration::EnumerationError;
pub use solution_callback::SolutionCallback;
pub use solver::ChargeSolver;

pub use crate::basic_types::ModelError;

pub mod results {
    //! Contains the outputs of solving using the [`ChargeSolver`].
    //!
    //! A run is driven either by pulling solutions from a
    //! [`SolutionIterator`](solution_iterator::SolutionIterator), or by
    //! [`ChargeSolver::enumerate`], which pushes the selected solutions into a
    //! [`SolutionCallback`](crate::SolutionCallback) and returns a [`RunSummary`].
    pub use crate::api::outputs::solution_iterator;
    pub use crate::api::outputs::RunSummary;
    pub use crate::api::outputs::SearchStatus;
    pub use crate::basic_types::ChargerAssignment;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::ChargeSolver;
}

pub mod variables {
    //! Contains the decision variables of a charging problem.
    //!
    //! Every variable states whether one vehicle charges at one charger during one hour; it is
    //! addressed by a [`ChargeSlot`] and identified by a [`VariableId`]. The identifiers follow
    //! the order in which the [`ChargeSolver`] branches: by hour, then by charger, then by
    //! vehicle.
    pub use crate::engine::variables::ChargeSlot;
    pub use crate::engine::variables::ChargeVariables;
    pub use crate::engine::variables::Dimensions;
    pub use crate::engine::variables::VariableId;
    #[cfg(doc)]
    use crate::ChargeSolver;
}

pub mod options {
    //! Contains the options which can be passed to the [`ChargeSolver`].
    //!
    //! These influence the following aspects:
    //! - The order in which values are tried, and therefore the order of discovery
    //! - The strength of propagation
    //! - Which solutions are reported, and when an enumeration run stops
    pub use crate::api::enumeration::EnumerationOptions;
    pub use crate::api::enumeration::SolutionSelection;
    pub use crate::engine::PropagationStrength;
    pub use crate::engine::SolverOptions;
    pub use crate::engine::ValueSelection;
    #[cfg(doc)]
    use crate::ChargeSolver;
}

#[doc(hidden)]
pub mod asserts {
    pub use crate::charge_assert_eq_simple;
    pub use crate::charge_assert_moderate;
    pub use crate::charge_assert_simple;
    pub use crate::charge_asserts::*;
}
