//! Helpers for running the `charge-solver` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use regex::Regex;
use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

static NUM_RUNS: AtomicUsize = AtomicUsize::new(0);

/// The captured result of one invocation of the binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) success: bool,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

/// Runs the binary with `args`, writing its output to files so that large outputs cannot block
/// the child.
pub(crate) fn run_solver<'a>(args: impl IntoIterator<Item = &'a str>) -> Run {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_charge-solver"));

    let run_id = NUM_RUNS.fetch_add(1, Ordering::Relaxed);
    let output_path = |extension: &str| -> PathBuf {
        PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!(
            "charge-solver-{}-{run_id}.{extension}",
            std::process::id()
        ))
    };
    let log_file_path = output_path("log");
    let err_file_path = output_path("err");

    let mut child = Command::new(solver)
        .args(args)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read error file.");
    let _ = std::fs::remove_file(log_file_path);
    let _ = std::fs::remove_file(err_file_path);

    Run {
        success: status.success(),
        stdout,
        stderr,
    }
}

/// The counters of the statistics block which closes a `schedule` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) conflicts: u64,
    pub(crate) branches: u64,
    pub(crate) solutions_found: u64,
}

pub(crate) fn parse_summary(output: &str) -> Summary {
    let counter = |name: &str| -> u64 {
        let pattern = Regex::new(&format!(r"(?m)^  - {name}\s*: (\d+)$")).unwrap();
        pattern
            .captures(output)
            .unwrap_or_else(|| panic!("missing '{name}' in the summary:\n{output}"))[1]
            .parse()
            .unwrap()
    };

    Summary {
        conflicts: counter("conflicts"),
        branches: counter("branches"),
        solutions_found: counter("solutions found"),
    }
}

/// The discovery indices of the printed solutions, in printing order.
pub(crate) fn printed_solutions(output: &str) -> Vec<u64> {
    let pattern = Regex::new(r"(?m)^Solution (\d+)$").unwrap();
    pattern
        .captures_iter(output)
        .map(|captures| captures[1].parse().unwrap())
        .collect()
}

/// The charger-hours per vehicle of the printed solution with the given index.
pub(crate) fn charger_hours(output: &str, discovery_index: u64, vehicles: usize) -> Vec<usize> {
    let start = output
        .find(&format!("Solution {discovery_index}\n"))
        .unwrap_or_else(|| panic!("solution {discovery_index} is not printed"));
    let block = output[start..]
        .split("\n\n")
        .next()
        .expect("a solution block is terminated by an empty line");

    let pattern = Regex::new(r"(?m)^  Vehicle (\d+) charges at charge station \d+$").unwrap();
    let mut hours = vec![0; vehicles];
    for captures in pattern.captures_iter(block) {
        let vehicle: usize = captures[1].parse().unwrap();
        hours[vehicle] += 1;
    }
    hours
}
