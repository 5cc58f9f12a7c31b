//! Human-readable output of solutions and run summaries.
use std::io;
use std::io::Write;

use charge_core::results::ChargerAssignment;
use charge_core::results::RunSummary;
use charge_core::results::Solution;
use charge_core::SolutionCallback;

/// Writes every solution it receives to `writer`, hour by hour:
///
/// ```text
/// Solution 0
/// Hour 0
///   Vehicle 0 charges at charge station 0
///   Vehicle 1 is idle
/// ```
///
/// Each solution is followed by an empty line.
#[derive(Debug)]
pub struct ScheduleReporter<W> {
    writer: W,
}

impl<W: Write> ScheduleReporter<W> {
    pub fn new(writer: W) -> Self {
        ScheduleReporter { writer }
    }

    pub fn write_solution(&mut self, solution: &Solution) -> io::Result<()> {
        writeln!(self.writer, "Solution {}", solution.discovery_index())?;

        for hour in solution.variables().hours() {
            writeln!(self.writer, "Hour {hour}")?;

            for (vehicle, assignment) in solution.hour(hour).enumerate() {
                match assignment {
                    ChargerAssignment::Charging { charger } => writeln!(
                        self.writer,
                        "  Vehicle {vehicle} charges at charge station {charger}"
                    )?,
                    ChargerAssignment::Idle => writeln!(self.writer, "  Vehicle {vehicle} is idle")?,
                }
            }
        }

        writeln!(self.writer)?;
        self.writer.flush()
    }

    /// Writes the statistics block which closes a run.
    pub fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.writer, "Statistics")?;
        writeln!(self.writer, "  - conflicts       : {}", summary.conflicts())?;
        writeln!(self.writer, "  - branches        : {}", summary.branches())?;
        writeln!(
            self.writer,
            "  - wall time       : {:.6} s",
            summary.elapsed().as_secs_f64()
        )?;
        writeln!(
            self.writer,
            "  - solutions found : {}",
            summary.solutions_found()
        )?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SolutionCallback for ScheduleReporter<W> {
    type Error = io::Error;

    fn on_solution(&mut self, solution: &Solution) -> Result<(), Self::Error> {
        self.write_solution(solution)
    }
}
