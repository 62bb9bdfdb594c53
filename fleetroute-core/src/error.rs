//! Errors raised while validating route-planning input.

use thiserror::Error;

/// Errors returned by the distance, tour and metrics operations.
///
/// Every operation is pure, so none of these are retried internally. Callers
/// fix the offending input and call again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Latitude or longitude was outside the valid range, or NaN.
    #[error("invalid coordinate (latitude {latitude}, longitude {longitude})")]
    InvalidCoordinate {
        /// Latitude as supplied.
        latitude: f64,
        /// Longitude as supplied.
        longitude: f64,
    },
    /// Two waypoints in one request shared an identifier.
    #[error("waypoint id {id:?} appears more than once")]
    DuplicateWaypoint {
        /// The repeated identifier.
        id: String,
    },
    /// A tour referenced an identifier with no known coordinates.
    #[error("tour references unknown waypoint {id:?}")]
    UnknownWaypoint {
        /// The unresolved identifier.
        id: String,
    },
    /// Average speed was zero, negative or not finite.
    #[error("average speed must be a positive number of km/h, got {speed_kmh}")]
    InvalidSpeed {
        /// Speed as supplied.
        speed_kmh: f64,
    },
    /// A distance total was negative or not finite.
    #[error("distance must be a non-negative number of kilometres, got {distance_km}")]
    InvalidDistance {
        /// Distance as supplied.
        distance_km: f64,
    },
    /// Sphere radius was zero, negative or not finite.
    #[error("earth radius must be a positive number of kilometres, got {radius_km}")]
    InvalidEarthRadius {
        /// Radius as supplied.
        radius_km: f64,
    },
}
