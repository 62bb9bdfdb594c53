//! Distance and travel-time totals for a tour.
//!
//! Totals are one-way: the first leg runs from the start point to the first
//! stop and no return leg to the start is added. Callers wanting a round trip
//! add the final stop to start leg themselves.

use std::collections::HashMap;
use std::hash::BuildHasher;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_AVERAGE_SPEED_KMH, validate_speed};
use crate::distance::{haversine_km, validate_radius};
use crate::{GeoPoint, PlannerConfig, RouteError, Tour};

/// Aggregate distance and estimated driving time of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TourMetrics {
    /// Sum of all leg distances.
    pub total_distance_km: f64,
    /// `total_distance_km` at the average speed, rounded to whole minutes.
    pub estimated_minutes: u64,
}

impl TourMetrics {
    /// Derive metrics from a total distance and an average speed.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidDistance`] for a negative or non-finite
    /// distance and [`RouteError::InvalidSpeed`] unless the speed is positive,
    /// finite and large enough for the estimate to fit in whole minutes.
    ///
    /// # Examples
    /// ```
    /// use fleetroute_core::TourMetrics;
    ///
    /// let metrics = TourMetrics::from_distance(5.0, 20.0)?;
    /// assert_eq!(metrics.estimated_minutes, 15);
    /// # Ok::<(), fleetroute_core::RouteError>(())
    /// ```
    pub fn from_distance(
        total_distance_km: f64,
        average_speed_kmh: f64,
    ) -> Result<Self, RouteError> {
        if !(total_distance_km.is_finite() && total_distance_km >= 0.0) {
            return Err(RouteError::InvalidDistance {
                distance_km: total_distance_km,
            });
        }
        validate_speed(average_speed_kmh)?;
        Ok(Self {
            total_distance_km,
            estimated_minutes: estimate_minutes(total_distance_km, average_speed_kmh)?,
        })
    }

    pub(crate) fn from_legs(legs: &[Leg], average_speed_kmh: f64) -> Result<Self, RouteError> {
        let total_distance_km = legs.last().map_or(0.0, |leg| leg.cumulative_km);
        Self::from_distance(total_distance_km, average_speed_kmh)
    }
}

/// One hop of a tour, ending at a stop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    /// Id of the stop this leg arrives at.
    pub to: String,
    /// Length of this leg.
    pub distance_km: f64,
    /// Distance travelled from the start up to and including this leg.
    pub cumulative_km: f64,
}

/// Total distance and estimated minutes for `tour` leaving `start`.
///
/// `average_speed_kmh` defaults to [`DEFAULT_AVERAGE_SPEED_KMH`]. Distances
/// use the mean Earth radius; see [`compute_tour_metrics_with`] to override
/// it.
///
/// # Errors
///
/// Returns [`RouteError::UnknownWaypoint`] if a tour id has no entry in
/// `waypoints_by_id`, [`RouteError::InvalidCoordinate`] for an invalid
/// location and [`RouteError::InvalidSpeed`] for an unusable speed.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use fleetroute_core::{GeoPoint, Tour, compute_tour_metrics};
///
/// let by_id = HashMap::from([("a".to_string(), GeoPoint::new(0.0, 1.0))]);
/// let tour = Tour::from(vec!["a".to_string()]);
/// let metrics = compute_tour_metrics(&tour, &by_id, GeoPoint::new(0.0, 0.0), None)?;
/// assert!((metrics.total_distance_km - 111.19).abs() < 0.5);
/// assert_eq!(metrics.estimated_minutes, 334);
/// # Ok::<(), fleetroute_core::RouteError>(())
/// ```
pub fn compute_tour_metrics<S: BuildHasher>(
    tour: &Tour,
    waypoints_by_id: &HashMap<String, GeoPoint, S>,
    start: GeoPoint,
    average_speed_kmh: Option<f64>,
) -> Result<TourMetrics, RouteError> {
    let config = PlannerConfig::default()
        .with_average_speed_kmh(average_speed_kmh.unwrap_or(DEFAULT_AVERAGE_SPEED_KMH));
    compute_tour_metrics_with(tour, waypoints_by_id, start, &config)
}

/// Total distance and estimated minutes using explicit parameters.
///
/// # Errors
///
/// As [`compute_tour_metrics`], plus [`RouteError::InvalidEarthRadius`].
pub fn compute_tour_metrics_with<S: BuildHasher>(
    tour: &Tour,
    waypoints_by_id: &HashMap<String, GeoPoint, S>,
    start: GeoPoint,
    config: &PlannerConfig,
) -> Result<TourMetrics, RouteError> {
    validate_speed(config.average_speed_kmh)?;
    let legs = tour_legs(tour, waypoints_by_id, start, config.earth_radius_km)?;
    TourMetrics::from_legs(&legs, config.average_speed_kmh)
}

/// Per-leg breakdown of `tour`, one leg per stop.
///
/// Leg 0 runs from `start` to the first stop; leg `i` from stop `i - 1` to
/// stop `i`.
///
/// # Errors
///
/// As [`compute_tour_metrics_with`], without the speed check.
#[expect(clippy::float_arithmetic, reason = "running total of leg lengths")]
pub fn tour_legs<S: BuildHasher>(
    tour: &Tour,
    waypoints_by_id: &HashMap<String, GeoPoint, S>,
    start: GeoPoint,
    radius_km: f64,
) -> Result<Vec<Leg>, RouteError> {
    validate_radius(radius_km)?;
    start.validate()?;

    let mut legs = Vec::with_capacity(tour.len());
    let mut current = start;
    let mut cumulative_km = 0.0;
    for id in tour.iter() {
        let next = waypoints_by_id
            .get(id)
            .copied()
            .ok_or_else(|| RouteError::UnknownWaypoint { id: id.to_owned() })?;
        next.validate()?;
        let distance_km = haversine_km(current, next, radius_km);
        cumulative_km += distance_km;
        legs.push(Leg {
            to: id.to_owned(),
            distance_km,
            cumulative_km,
        });
        current = next;
    }
    Ok(legs)
}

#[expect(clippy::as_conversions, reason = "u64::MAX rounds up to 2^64 as f64")]
const MINUTES_CEILING: f64 = u64::MAX as f64;

/// Round `km / speed` hours to whole minutes.
///
/// A speed so small that the estimate overflows `u64` is rejected instead of
/// saturating.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions,
    reason = "minutes are checked to be a finite, in-range, non-negative float"
)]
fn estimate_minutes(total_distance_km: f64, average_speed_kmh: f64) -> Result<u64, RouteError> {
    let minutes = (total_distance_km / average_speed_kmh * 60.0).round();
    if minutes.is_finite() && (0.0..MINUTES_CEILING).contains(&minutes) {
        Ok(minutes as u64)
    } else {
        Err(RouteError::InvalidSpeed {
            speed_kmh: average_speed_kmh,
        })
    }
}
