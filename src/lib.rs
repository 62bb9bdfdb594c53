//! Facade crate for the fleetroute delivery-round planner.
//!
//! This crate re-exports the core domain types, the distance primitive, tour
//! construction and metrics from `fleetroute-core`.

#![forbid(unsafe_code)]

pub use fleetroute_core::{
    DEFAULT_AVERAGE_SPEED_KMH, DistanceMatrix, EARTH_RADIUS_KM, GeoPoint, LATITUDE_RANGE,
    LONGITUDE_RANGE, Leg, Plan, PlanRequest, PlannerConfig, RouteError, RouteOptimizer, Tour,
    TourMetrics, TourPlanner, Waypoint, compute_tour_metrics, compute_tour_metrics_with,
    distance_km, distance_km_with_radius, distance_matrix, index_by_id, optimize_route,
    optimize_route_with_radius, tour_legs,
};
