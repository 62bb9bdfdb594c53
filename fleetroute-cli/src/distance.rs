//! Distance command implementation.

use clap::Parser;
use fleetroute_core::{EARTH_RADIUS_KM, GeoPoint, distance_km_with_radius};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_DISTANCE_FROM, ARG_DISTANCE_TO, ARG_EARTH_RADIUS, CliError, ENV_DISTANCE_FROM,
    ENV_DISTANCE_TO,
};

/// CLI arguments for the `distance` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "distance",
    about = "Print the great-circle distance between two points in km"
)]
#[ortho_config(prefix = "FLEETROUTE")]
pub(crate) struct DistanceArgs {
    /// First point as `LAT,LON` in decimal degrees.
    #[arg(long = ARG_DISTANCE_FROM, value_name = "lat,lon", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Second point as `LAT,LON` in decimal degrees.
    #[arg(long = ARG_DISTANCE_TO, value_name = "lat,lon", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Radius of the sphere to measure on, in km.
    #[arg(long = ARG_EARTH_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) earth_radius_km: Option<f64>,
}

/// Resolved `distance` command configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DistanceConfig {
    pub(crate) from: GeoPoint,
    pub(crate) to: GeoPoint,
    pub(crate) earth_radius_km: f64,
}

impl TryFrom<DistanceArgs> for DistanceConfig {
    type Error = CliError;

    fn try_from(args: DistanceArgs) -> Result<Self, Self::Error> {
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_DISTANCE_FROM,
            env: ENV_DISTANCE_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_DISTANCE_TO,
            env: ENV_DISTANCE_TO,
        })?;
        Ok(Self {
            from: parse_coordinate(ARG_DISTANCE_FROM, &from)?,
            to: parse_coordinate(ARG_DISTANCE_TO, &to)?,
            earth_radius_km: args.earth_radius_km.unwrap_or(EARTH_RADIUS_KM),
        })
    }
}

/// Parse `LAT,LON` into a point. Range checks happen when the point is used.
pub(crate) fn parse_coordinate(field: &'static str, raw: &str) -> Result<GeoPoint, CliError> {
    let invalid = || CliError::ParseCoordinate {
        field,
        value: raw.to_owned(),
    };
    let (latitude, longitude) = raw.split_once(',').ok_or_else(invalid)?;
    let lat = latitude.trim().parse::<f64>().map_err(|_| invalid())?;
    let lon = longitude.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok(GeoPoint::new(lat, lon))
}

pub(super) fn run_distance(args: DistanceArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_distance_with(args, &mut stdout)
}

pub(super) fn run_distance_with(
    args: DistanceArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = DistanceConfig::try_from(merged)?;
    let km = distance_km_with_radius(config.from, config.to, config.earth_radius_km)
        .map_err(CliError::Distance)?;
    writeln!(writer, "{km:.3}").map_err(CliError::WriteOutput)
}
