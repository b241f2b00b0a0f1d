//! Built-in Brussels journeys for exercising the planner end to end.

use std::io::Write;

use clap::Parser;
use fleetfare_core::{FleetSource, Journey, JourneyPlan, JourneyPlanner, Location, TripLeg};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::source::{HttpSourceBuilder, SourceBuilder, SourceSettings};
use crate::{ARG_API_BASE_URL, ARG_CITY_ID, ARG_TIMEOUT_SECS, CliError};

/// CLI arguments for the `scenarios` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan three representative Brussels journeys against the \
                 live provider and print a readable summary of each plan. \
                 A failing scenario is reported and the next one still runs.",
    about = "Plan the built-in Brussels journeys"
)]
#[ortho_config(prefix = "FLEETFARE")]
pub(crate) struct ScenariosArgs {
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

impl ScenariosArgs {
    pub(crate) fn into_settings(self) -> Result<SourceSettings, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(SourceSettings::resolve(
            merged.api_base_url,
            merged.city_id,
            merged.timeout_secs,
        ))
    }
}

/// A named journey planned by the `scenarios` command.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scenario {
    pub(crate) name: &'static str,
    pub(crate) journey: Journey,
}

/// The three Brussels journeys, in presentation order.
pub(crate) fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Brussels South Station -> Stephanie/Louise (2h pause) -> Flagey",
            journey: Journey::new(vec![
                TripLeg::new(Location::new(50.8355, 4.3573), Location::new(50.8245, 4.3635), 120),
                TripLeg::new(Location::new(50.8245, 4.3635), Location::new(50.8275, 4.3745), 0),
            ]),
        },
        Scenario {
            name: "Brussels Center -> Dilbeek (1h pause) -> Airport",
            journey: Journey::new(vec![
                TripLeg::new(Location::new(50.8466, 4.3528), Location::new(50.7847, 4.2461), 60),
                TripLeg::new(Location::new(50.7847, 4.2461), Location::new(50.9011, 4.4844), 0),
            ]),
        },
        Scenario {
            name: "Wezembeek -> Avenue de l'Observatoire, Uccle",
            journey: Journey::new(vec![TripLeg::new(
                Location::new(50.8466, 4.3928),
                Location::new(50.8098, 4.3542),
                0,
            )]),
        },
    ]
}

pub(super) fn run_scenarios(args: ScenariosArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_scenarios_with(args, &HttpSourceBuilder, &mut stdout)
}

pub(super) fn run_scenarios_with(
    args: ScenariosArgs,
    builder: &dyn SourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = args.into_settings()?;
    let planner = JourneyPlanner::new(builder.build(&settings)?);
    write_scenarios(writer, &planner, &builtin_scenarios()).map_err(CliError::WriteOutput)
}

fn write_scenarios<S: FleetSource>(
    writer: &mut dyn Write,
    planner: &JourneyPlanner<S>,
    scenarios: &[Scenario],
) -> std::io::Result<()> {
    for (number, scenario) in scenarios.iter().enumerate() {
        let title = format!("SCENARIO {}: {}", number + 1, scenario.name);
        writeln!(writer, "{title}")?;
        writeln!(writer, "{}", "=".repeat(title.len()))?;
        match planner.plan(&scenario.journey) {
            Ok(plan) => write_summary(writer, &plan)?,
            Err(err) => writeln!(writer, "Error planning journey: {err}")?,
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Render a plan as the human-readable summary printed per scenario.
pub(crate) fn write_summary(writer: &mut dyn Write, plan: &JourneyPlan) -> std::io::Result<()> {
    let vehicle = &plan.vehicle;
    let costs = &plan.cost_breakdown;
    writeln!(
        writer,
        "Vehicle: {} {} ({})",
        vehicle.model.make, vehicle.model.name, vehicle.plate
    )?;
    writeln!(
        writer,
        "Location: {:.6}, {:.6}",
        vehicle.location_latitude, vehicle.location_longitude
    )?;
    writeln!(writer, "Pricing model: {}", plan.pricing_model)?;
    writeln!(writer, "Total cost: EUR {:.2}", plan.total_cost)?;
    writeln!(writer)?;
    writeln!(writer, "Unlock fee: EUR {:.2}", costs.unlock_fee)?;
    writeln!(writer, "Booking cost: EUR {:.2}", costs.booking_cost)?;
    writeln!(writer, "Travel cost: EUR {:.2}", costs.travel_cost)?;
    writeln!(writer, "Pause cost: EUR {:.2}", costs.pause_cost)?;
    writeln!(writer, "Walking time: {:.1} minutes", costs.walking_time_minutes)?;
    writeln!(writer)?;
    for (number, leg) in plan.journey.legs.iter().enumerate() {
        writeln!(
            writer,
            "Leg {}: ({:.6}, {:.6}) -> ({:.6}, {:.6})",
            number + 1,
            leg.start_location.lat,
            leg.start_location.lng,
            leg.end_location.lat,
            leg.end_location.lng
        )?;
        if leg.pause_minutes > 0 {
            writeln!(writer, "  Pause: {} minutes", leg.pause_minutes)?;
        }
    }
    Ok(())
}
