use std::io;

use charge_solver::charge_time::ChargeTimeError;
use charge_solver::EnumerationError;
use charge_solver::ModelError;
use thiserror::Error;

pub(crate) type ChargeSolverResult<T> = Result<T, ChargeSolverError>;

#[derive(Error, Debug)]
pub(crate) enum ChargeSolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] io::Error),
    #[error("The problem could not be created, more details: {0}")]
    Model(#[from] ModelError),
    #[error("Failed to report a solution, more details: {0}")]
    Reporting(#[from] EnumerationError<io::Error>),
    #[error("Failed to estimate the charging time, more details: {0}")]
    ChargeTime(#[from] ChargeTimeError),
}
