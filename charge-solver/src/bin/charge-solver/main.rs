mod os_signal_termination;
mod result;

use std::io;
use std::io::Write;
use std::time::Duration;

use charge_solver::charge_time::ready_time;
use charge_solver::charge_time::ClockTime;
use charge_solver::convert_case::Case;
use charge_solver::options::EnumerationOptions;
use charge_solver::options::PropagationStrength;
use charge_solver::options::SolutionSelection;
use charge_solver::options::SolverOptions;
use charge_solver::options::ValueSelection;
use charge_solver::report::ScheduleReporter;
use charge_solver::results::SearchStatus;
use charge_solver::statistics::configure_statistic_logging;
use charge_solver::termination::Combinator;
use charge_solver::termination::TimeBudget;
use charge_solver::variables::Dimensions;
use charge_solver::ChargeSolver;
use clap::Parser;
use clap::Subcommand;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::ChargeSolverResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enables logging of debug information about the search.
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Logs the statistics of the run after the summary.
    ///
    /// Every statistic is printed on its own line, in the form `%%%charge-stat: name=value`.
    #[arg(short = 's', long = "log-statistics", global = true, verbatim_doc_comment)]
    log_statistics: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Enumerates the fair charging schedules of a fleet and prints the selected ones.
    Schedule(ScheduleArgs),
    /// Estimates when a vehicle arriving at a charging station is fully charged.
    ReadyTime(ReadyTimeArgs),
}

#[derive(Debug, clap::Args)]
struct ScheduleArgs {
    /// The number of vehicles in the fleet.
    #[arg(long, default_value_t = 4)]
    vehicles: usize,

    /// The number of hours in the horizon.
    #[arg(long, default_value_t = 24)]
    hours: usize,

    /// The number of chargers, each serving one vehicle per hour.
    #[arg(long, default_value_t = 3)]
    chargers: usize,

    /// The discovery indices of the solutions to print, separated by commas.
    ///
    /// Solutions which are not printed are still counted.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [0, 1, 2, 3, 4],
        conflicts_with = "report_all",
        verbatim_doc_comment
    )]
    report: Vec<u64>,

    /// Prints every solution.
    #[arg(long)]
    report_all: bool,

    /// Stops after this many solutions have been printed.
    ///
    /// Without a limit, the search continues until every solution has been found.
    #[arg(long, verbatim_doc_comment)]
    solution_limit: Option<u64>,

    /// Stops as soon as the last selected solution has been printed, instead of counting all
    /// solutions.
    #[arg(long)]
    stop_after_report: bool,

    /// The time budget in milliseconds; the summary is printed when it is exceeded.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// The value which is tried first at every decision; determines the order of discovery.
    #[arg(long, value_enum, default_value_t)]
    value_selection: ValueSelection,

    /// The propagation performed after every decision.
    #[arg(long, value_enum, default_value_t)]
    propagation: PropagationStrength,
}

#[derive(Debug, clap::Args)]
struct ReadyTimeArgs {
    /// The current battery level, in percent.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    battery: u8,

    /// The time at which the vehicle arrived, in the form H::M::S (e.g. 13::55::26).
    #[arg(long)]
    arrived: ClockTime,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%%%charge-stat:", None, Some(Case::Camel), None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> ChargeSolverResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if charge_solver::asserts::CHARGE_ASSERT_LEVEL_DEFINITION
        >= charge_solver::asserts::CHARGE_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, meaning many debug asserts are active.",
            charge_solver::asserts::CHARGE_ASSERT_LEVEL_DEFINITION
        );
    }

    match args.command {
        Command::Schedule(schedule_args) => schedule(schedule_args),
        Command::ReadyTime(ready_time_args) => estimate_ready_time(ready_time_args),
    }
}

fn schedule(args: ScheduleArgs) -> ChargeSolverResult<()> {
    let dimensions = Dimensions::new(args.vehicles, args.hours, args.chargers)?;
    let solver = ChargeSolver::with_options(
        dimensions,
        SolverOptions {
            value_selection: args.value_selection,
            propagation: args.propagation,
        },
    );

    let options = EnumerationOptions {
        selection: if args.report_all {
            SolutionSelection::All
        } else {
            SolutionSelection::indices(args.report)
        },
        solution_limit: args.solution_limit,
        count_all_solutions: !args.stop_after_report,
    };

    let time_budget = args
        .time_limit
        .map(|milliseconds| TimeBudget::starting_now(Duration::from_millis(milliseconds)));
    let mut termination = Combinator::new(OsSignal::install()?, time_budget);

    let mut reporter = ScheduleReporter::new(io::stdout());
    let summary = solver.enumerate(&options, &mut termination, &mut reporter)?;

    if summary.status() == SearchStatus::Terminated {
        warn!("The search was terminated, the solution count is incomplete");
    }

    reporter.write_summary(&summary)?;
    summary.log_statistics();

    Ok(())
}

fn estimate_ready_time(args: ReadyTimeArgs) -> ChargeSolverResult<()> {
    let ready = ready_time(args.arrived, args.battery)?;
    println!("Charging will be finished at {ready}");

    Ok(())
}
