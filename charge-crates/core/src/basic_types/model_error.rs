use thiserror::Error;

#[cfg(doc)]
use crate::variables::Dimensions;

/// Errors related to constructing the [`Dimensions`] of a charging problem.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Every dimension of the problem has to be a positive integer.
    #[error(
        "invalid dimensions: vehicles={vehicles}, hours={hours}, chargers={chargers} (all must be positive)"
    )]
    InvalidDimensions {
        vehicles: usize,
        hours: usize,
        chargers: usize,
    },
    /// The number of decision variables (`vehicles * hours * chargers`) cannot be addressed.
    #[error("the model would contain more than {max} decision variables")]
    TooManyVariables { max: usize },
}
