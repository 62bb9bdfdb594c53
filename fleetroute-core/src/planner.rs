//! One-call route planning: tour, legs and metrics together.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::metrics::{compute_tour_metrics_with, tour_legs};
use crate::tour::optimize_route_with_radius;
use crate::{GeoPoint, Leg, PlannerConfig, RouteError, Tour, TourMetrics, Waypoint, index_by_id};

/// Input for [`TourPlanner::plan`].
///
/// There is no default start location; the caller always supplies one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRequest {
    /// Where the driver sets off from.
    pub start: GeoPoint,
    /// Stops to visit, in any order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints: Vec<Waypoint>,
}

/// A planned round: visiting order, per-leg distances and totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan {
    /// Stops in visiting order.
    pub tour: Tour,
    /// One leg per stop, leg 0 from the start point.
    pub legs: Vec<Leg>,
    /// One-way totals for the tour.
    pub metrics: TourMetrics,
}

/// Produce a visiting plan for a set of waypoints.
///
/// Planners hold no per-call state and must be `Send + Sync` so a single
/// instance can serve concurrent requests.
pub trait TourPlanner: Send + Sync {
    /// Plan a round for `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] for invalid input; no partial plan is
    /// produced.
    fn plan(&self, request: &PlanRequest) -> Result<Plan, RouteError>;
}

/// Nearest-neighbour planner with configurable speed and sphere radius.
///
/// # Examples
/// ```
/// use fleetroute_core::{GeoPoint, PlanRequest, RouteOptimizer, TourPlanner, Waypoint};
///
/// let request = PlanRequest {
///     start: GeoPoint::new(0.0, 0.0),
///     waypoints: vec![
///         Waypoint::new("b", GeoPoint::new(0.0, 2.0)),
///         Waypoint::new("a", GeoPoint::new(0.0, 1.0)),
///     ],
/// };
/// let plan = RouteOptimizer::new().plan(&request)?;
/// assert_eq!(plan.tour.ids(), ["a", "b"]);
/// assert_eq!(plan.legs.len(), 2);
/// # Ok::<(), fleetroute_core::RouteError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: PlannerConfig,
}

impl RouteOptimizer {
    /// Construct an optimiser with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an optimiser with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidSpeed`] or
    /// [`RouteError::InvalidEarthRadius`] for unusable parameters.
    pub fn with_config(config: PlannerConfig) -> Result<Self, RouteError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parameters in use.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Order `waypoints` nearest first from `start`.
    ///
    /// # Errors
    ///
    /// See [`optimize_route`](crate::optimize_route).
    pub fn optimize(&self, waypoints: &[Waypoint], start: GeoPoint) -> Result<Tour, RouteError> {
        optimize_route_with_radius(waypoints, start, self.config.earth_radius_km)
    }

    /// Metrics for `tour` against the locations in `waypoints`.
    ///
    /// # Errors
    ///
    /// See [`compute_tour_metrics`](crate::compute_tour_metrics).
    pub fn metrics(
        &self,
        tour: &Tour,
        waypoints: &[Waypoint],
        start: GeoPoint,
    ) -> Result<TourMetrics, RouteError> {
        compute_tour_metrics_with(tour, &index_by_id(waypoints), start, &self.config)
    }
}

impl TourPlanner for RouteOptimizer {
    fn plan(&self, request: &PlanRequest) -> Result<Plan, RouteError> {
        let tour = self.optimize(&request.waypoints, request.start)?;
        let by_id = index_by_id(&request.waypoints);
        let legs = tour_legs(&tour, &by_id, request.start, self.config.earth_radius_km)?;
        let metrics = TourMetrics::from_legs(&legs, self.config.average_speed_kmh)?;
        log::debug!(
            "planned {} stops: {:.3} km, about {} min at {} km/h",
            tour.len(),
            metrics.total_distance_km,
            metrics.estimated_minutes,
            self.config.average_speed_kmh
        );
        Ok(Plan {
            tour,
            legs,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_tour_metrics;
    use crate::test_support::{NAIROBI_DEPOT, is_permutation_of, nairobi_shops, waypoint};
    use rstest::{fixture, rstest};

    #[fixture]
    fn nairobi_request() -> PlanRequest {
        PlanRequest {
            start: NAIROBI_DEPOT,
            waypoints: nairobi_shops(),
        }
    }

    #[rstest]
    fn plan_matches_free_functions(nairobi_request: PlanRequest) {
        let plan = RouteOptimizer::new()
            .plan(&nairobi_request)
            .expect("valid request");
        let metrics = compute_tour_metrics(
            &plan.tour,
            &index_by_id(&nairobi_request.waypoints),
            nairobi_request.start,
            None,
        )
        .expect("valid tour");
        assert_eq!(plan.metrics, metrics);
        assert!(is_permutation_of(&plan.tour, &nairobi_request.waypoints));
    }

    #[rstest]
    fn plan_legs_follow_tour_order(nairobi_request: PlanRequest) {
        let plan = RouteOptimizer::new()
            .plan(&nairobi_request)
            .expect("valid request");
        let leg_stops: Vec<&str> = plan.legs.iter().map(|leg| leg.to.as_str()).collect();
        assert_eq!(leg_stops, plan.tour.iter().collect::<Vec<_>>());
    }

    #[rstest]
    fn empty_request_plans_nothing() {
        let request = PlanRequest {
            start: NAIROBI_DEPOT,
            waypoints: Vec::new(),
        };
        let plan = RouteOptimizer::new().plan(&request).expect("valid request");
        assert!(plan.tour.is_empty());
        assert!(plan.legs.is_empty());
        assert_eq!(plan.metrics, TourMetrics::default());
    }

    #[rstest]
    fn faster_config_estimates_fewer_minutes() {
        let request = PlanRequest {
            start: GeoPoint::new(0.0, 0.0),
            waypoints: vec![waypoint("a", 0.0, 1.0)],
        };
        let slow = RouteOptimizer::new().plan(&request).expect("valid request");
        let config = PlannerConfig::default().with_average_speed_kmh(60.0);
        let fast = RouteOptimizer::with_config(config)
            .expect("valid config")
            .plan(&request)
            .expect("valid request");
        assert!(fast.metrics.estimated_minutes < slow.metrics.estimated_minutes);
        assert_eq!(fast.metrics.total_distance_km, slow.metrics.total_distance_km);
    }

    #[rstest]
    fn rejects_unusable_config() {
        let config = PlannerConfig::default().with_average_speed_kmh(-1.0);
        let err = RouteOptimizer::with_config(config).expect_err("negative speed");
        assert_eq!(err, RouteError::InvalidSpeed { speed_kmh: -1.0 });
    }

    #[rstest]
    fn metrics_method_resolves_ids_from_waypoints(nairobi_request: PlanRequest) {
        let optimizer = RouteOptimizer::new();
        let tour = optimizer
            .optimize(&nairobi_request.waypoints, nairobi_request.start)
            .expect("valid request");
        let metrics = optimizer
            .metrics(&tour, &nairobi_request.waypoints, nairobi_request.start)
            .expect("valid tour");
        let plan = optimizer.plan(&nairobi_request).expect("valid request");
        assert_eq!(metrics, plan.metrics);
    }

    #[rstest]
    fn optimizer_is_shareable_across_threads(nairobi_request: PlanRequest) {
        let optimizer = RouteOptimizer::new();
        let expected = optimizer.plan(&nairobi_request).expect("valid request");
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| optimizer.plan(&nairobi_request)))
                .collect();
            for handle in handles {
                let plan = handle.join().expect("planner thread panicked");
                assert_eq!(plan.as_ref(), Ok(&expected));
            }
        });
    }
}
