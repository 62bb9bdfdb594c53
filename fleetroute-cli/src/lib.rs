//! Command-line interface for planning delivery rounds.
//!
//! Two subcommands are provided: `plan` reads a JSON plan request and prints
//! the planned round as JSON, and `distance` prints the great-circle distance
//! between two coordinates. Options layer CLI flags over `FLEETROUTE_*`
//! environment variables and configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod distance;
mod error;
mod fs;
mod plan;

pub use error::CliError;

use distance::{DistanceArgs, run_distance};
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_AVERAGE_SPEED: &str = "average-speed-kmh";
pub(crate) const ARG_EARTH_RADIUS: &str = "earth-radius-km";
pub(crate) const ARG_DISTANCE_FROM: &str = "from";
pub(crate) const ARG_DISTANCE_TO: &str = "to";
pub(crate) const ENV_PLAN_REQUEST: &str = "FLEETROUTE_CMDS_PLAN_REQUEST_PATH";
pub(crate) const ENV_DISTANCE_FROM: &str = "FLEETROUTE_CMDS_DISTANCE_FROM";
pub(crate) const ENV_DISTANCE_TO: &str = "FLEETROUTE_CMDS_DISTANCE_TO";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration, input
/// loading, planning or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Distance(args) => run_distance(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fleetroute",
    about = "Plan delivery rounds with a nearest-neighbour heuristic",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a visiting order for a JSON plan request.
    Plan(PlanArgs),
    /// Print the great-circle distance between two points.
    Distance(DistanceArgs),
}

#[cfg(test)]
mod tests;
