//! Plan command implementation.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fleetroute_core::{Plan, PlanRequest, PlannerConfig, RouteOptimizer, TourPlanner};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_AVERAGE_SPEED, ARG_EARTH_RADIUS, ARG_PLAN_REQUEST, CliError, ENV_PLAN_REQUEST};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Order the waypoints of a JSON-encoded PlanRequest nearest \
                 first from its start point and print the resulting plan, \
                 with per-leg distances and totals, as JSON.",
    about = "Plan a delivery round"
)]
#[ortho_config(prefix = "FLEETROUTE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Average travel speed used for time estimates, in km/h.
    #[arg(long = ARG_AVERAGE_SPEED, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
    /// Radius of the sphere distances are measured on, in km.
    #[arg(long = ARG_EARTH_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) earth_radius_km: Option<f64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Speed and radius after applying overrides to the defaults.
    pub(crate) planner: PlannerConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        let field = ARG_PLAN_REQUEST;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingPositional {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;

        let mut planner = PlannerConfig::default();
        if let Some(speed) = args.average_speed_kmh {
            planner = planner.with_average_speed_kmh(speed);
        }
        if let Some(radius) = args.earth_radius_km {
            planner = planner.with_earth_radius_km(radius);
        }

        Ok(Self {
            request_path,
            planner,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let plan = execute_plan(args)?;
    write_plan(writer, &plan)
}

fn execute_plan(args: PlanArgs) -> Result<Plan, CliError> {
    let config = resolve_plan_config(args)?;
    let optimizer =
        RouteOptimizer::with_config(config.planner).map_err(CliError::InvalidPlannerConfig)?;
    let request = load_plan_request(&config.request_path)?;
    log::debug!(
        "planning {} waypoints from {}",
        request.waypoints.len(),
        config.request_path
    );
    optimizer.plan(&request).map_err(|source| CliError::Plan {
        path: config.request_path,
        source,
    })
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan(writer: &mut dyn Write, plan: &Plan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerializePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
