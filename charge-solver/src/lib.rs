//! # Charge Solver
//! Enumerates the charging schedules of a fleet of vehicles, as computed by [`charge_core`], and
//! reports them in a human-readable form.
//!
//! Next to the re-exported solving core, this crate contains
//! - the [`report::ScheduleReporter`], which writes solutions and run summaries, and
//! - the [`charge_time`] estimation, which predicts when a vehicle arriving with a given battery
//!   level is fully charged.
//!
//! ```rust
//! # use charge_solver::ChargeSolver;
//! # use charge_solver::options::EnumerationOptions;
//! # use charge_solver::options::SolutionSelection;
//! # use charge_solver::report::ScheduleReporter;
//! # use charge_solver::termination::Indefinite;
//! let solver = ChargeSolver::from_sizes(2, 2, 1).expect("valid dimensions");
//! let options = EnumerationOptions {
//!     selection: SolutionSelection::first(1),
//!     ..Default::default()
//! };
//!
//! let mut reporter = ScheduleReporter::new(Vec::new());
//! let summary = solver
//!     .enumerate(&options, &mut Indefinite, &mut reporter)
//!     .expect("writing to memory does not fail");
//!
//! let output = String::from_utf8(reporter.into_inner()).expect("the report is valid UTF-8");
//! assert!(output.starts_with("Solution 0\nHour 0\n  Vehicle 0 charges at charge station 0\n"));
//! assert_eq!(summary.solutions_found(), 2);
//! ```
pub mod charge_time;
pub mod report;

pub use charge_core::*;
