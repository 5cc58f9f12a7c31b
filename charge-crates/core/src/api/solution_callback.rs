use crate::results::Solution;
#[cfg(doc)]
use crate::ChargeSolver;

/// Receives the selected solutions of an enumeration run of the [`ChargeSolver`].
///
/// Returning an error abandons the run; the enumeration then fails with
/// [`EnumerationError::CallbackFailure`](crate::EnumerationError::CallbackFailure).
pub trait SolutionCallback {
    type Error: std::error::Error + 'static;

    fn on_solution(&mut self, solution: &Solution) -> Result<(), Self::Error>;
}

impl<F, E> SolutionCallback for F
where
    F: FnMut(&Solution) -> Result<(), E>,
    E: std::error::Error + 'static,
{
    type Error = E;

    fn on_solution(&mut self, solution: &Solution) -> Result<(), Self::Error> {
        (self)(solution)
    }
}
