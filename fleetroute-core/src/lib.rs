//! Route-planning core for delivery rounds.
//!
//! Given a start point and a set of identified waypoints, this crate orders
//! the waypoints with a greedy nearest-neighbour heuristic over great-circle
//! distances and derives one-way distance and travel-time estimates. Every
//! operation is pure and synchronous; inputs are validated up front so that
//! invalid coordinates surface as [`RouteError`] values instead of NaNs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod distance;
mod error;
mod geo_point;
mod metrics;
mod planner;
mod tour;
mod waypoint;

#[doc(hidden)]
pub mod test_support;

pub use config::{DEFAULT_AVERAGE_SPEED_KMH, PlannerConfig};
pub use distance::{
    DistanceMatrix, EARTH_RADIUS_KM, distance_km, distance_km_with_radius, distance_matrix,
};
pub use error::RouteError;
pub use geo_point::{GeoPoint, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use metrics::{Leg, TourMetrics, compute_tour_metrics, compute_tour_metrics_with, tour_legs};
pub use planner::{Plan, PlanRequest, RouteOptimizer, TourPlanner};
pub use tour::{Tour, optimize_route, optimize_route_with_radius};
pub use waypoint::{Waypoint, index_by_id};
