//! Plan command implementation for the fleetfare CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fleetfare_core::{Journey, JourneyPlan, JourneyPlanner};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::source::{HttpSourceBuilder, SourceBuilder, SourceSettings};
use crate::{
    ARG_API_BASE_URL, ARG_CITY_ID, ARG_PLAN_JOURNEY, ARG_TIMEOUT_SECS, CliError, ENV_PLAN_JOURNEY,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a journey with the nearest shared car. The journey is \
                 read from a JSON file with a `legs` array; the cheapest plan \
                 across the provider's tariffs is written to stdout as JSON.",
    about = "Plan a journey read from a JSON file"
)]
#[ortho_config(prefix = "FLEETFARE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a Journey.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) journey_path: Option<Utf8PathBuf>,
    /// API root of the provider (e.g. "https://poppy.red/api/v3").
    #[arg(long = ARG_API_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) api_base_url: Option<String>,
    /// City whose fleet is searched.
    #[arg(long = ARG_CITY_ID, value_name = "uuid")]
    #[serde(default)]
    pub(crate) city_id: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON journey file.
    pub(crate) journey_path: Utf8PathBuf,
    /// Provider connection settings.
    pub(crate) source: SourceSettings,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.journey_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_PLAN_JOURNEY,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_PLAN_JOURNEY,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_PLAN_JOURNEY,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let journey_path = args.journey_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_JOURNEY,
            env: ENV_PLAN_JOURNEY,
        })?;
        Ok(Self {
            journey_path,
            source: SourceSettings::resolve(args.api_base_url, args.city_id, args.timeout_secs),
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &HttpSourceBuilder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn SourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let plan = execute_plan(&config, builder)?;
    write_plan(writer, &plan)
}

pub(super) fn execute_plan(
    config: &PlanConfig,
    builder: &dyn SourceBuilder,
) -> Result<JourneyPlan, CliError> {
    let journey = load_journey(&config.journey_path)?;
    let planner = JourneyPlanner::new(builder.build(&config.source)?);
    planner.plan(&journey).map_err(CliError::Plan)
}

/// Loads a JSON-encoded [`Journey`] from disk.
pub(super) fn load_journey(path: &Utf8Path) -> Result<Journey, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenJourney {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseJourney {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan(writer: &mut dyn Write, plan: &JourneyPlan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerialisePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
