//! # Charge Core
//! The solving core of the charge scheduler. It assigns a fleet of vehicles to a set of charging
//! stations over a discrete horizon of hours, such that
//! - every charger serves exactly one vehicle in every hour,
//! - no vehicle uses more than one charger in the same hour, and
//! - the charger-hours are shared fairly: every vehicle receives `floor(C * H / V)` of them, or
//!   one more when the fleet size `V` does not divide the `C * H` charger-hours.
//!
//! The [`ChargeSolver`] enumerates the solutions of such a problem with a depth-first search over
//! boolean decision variables, one per (vehicle, hour, charger) triple. The search is
//! deterministic: the same problem and options always yield the same solutions in the same order,
//! with the same statistics.
//!
//! # Enumerating solutions
//! Solutions can be pulled one at a time:
//! ```rust
//! # use charge_core::ChargeSolver;
//! # use charge_core::results::solution_iterator::IteratedSolution;
//! # use charge_core::results::ChargerAssignment;
//! # use charge_core::termination::Indefinite;
//! let solver = ChargeSolver::from_sizes(3, 1, 2).expect("valid dimensions");
//!
//! let mut termination = Indefinite;
//! let mut solutions = solver.solution_iterator(&mut termination);
//!
//! let IteratedSolution::Solution(first) = solutions.next_solution() else {
//!     panic!("the problem has a solution");
//! };
//! assert_eq!(first.discovery_index(), 0);
//! assert_eq!(first.assignment(0, 0), ChargerAssignment::Charging { charger: 0 });
//! assert_eq!(first.assignment(2, 0), ChargerAssignment::Idle);
//! ```
//!
//! Alternatively, [`ChargeSolver::enumerate`] drives the search itself and passes the selected
//! solutions to a [`SolutionCallback`]; see [`options::EnumerationOptions`] for the ways in which a
//! run can be limited.
pub(crate) mod basic_types;
pub(crate) mod charge_asserts;
pub mod constraints;
pub mod containers;
pub(crate) mod engine;
pub mod statistics;
pub mod termination;

mod api;

pub use api::*;
pub use convert_case;
