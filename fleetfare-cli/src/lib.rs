//! Command-line interface for planning shared-car journeys.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;
mod scenarios;
mod source;

pub use error::CliError;

use plan::PlanArgs;
use scenarios::ScenariosArgs;

pub(crate) const ARG_PLAN_JOURNEY: &str = "journey";
pub(crate) const ENV_PLAN_JOURNEY: &str = "FLEETFARE_CMDS_PLAN_JOURNEY_PATH";
pub(crate) const ARG_API_BASE_URL: &str = "api-base-url";
pub(crate) const ARG_CITY_ID: &str = "city-id";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";

/// Run the fleetfare CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// journey cannot be read, planning fails or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
        Command::Scenarios(args) => scenarios::run_scenarios(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fleetfare",
    about = "Find the cheapest shared car and tariff for a journey",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a journey read from a JSON file.
    Plan(PlanArgs),
    /// Plan the built-in Brussels journeys and print a summary of each.
    Scenarios(ScenariosArgs),
}

#[cfg(test)]
mod tests;
