//! Greedy nearest-neighbour tour construction.
//!
//! Starting from a fixed point, the tour repeatedly visits the closest
//! waypoint not yet visited. The result is a permutation of the input ids; it
//! makes no claim of optimality. Runtime is quadratic in the number of
//! waypoints, which suits per-driver rounds of tens to low hundreds of shops.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distance::{EARTH_RADIUS_KM, haversine_km, validate_radius};
use crate::waypoint::validate_waypoints;
use crate::{GeoPoint, RouteError, Waypoint};

/// Visiting order over a set of waypoints, as waypoint ids.
///
/// # Examples
/// ```
/// use fleetroute_core::Tour;
///
/// let tour = Tour::from(vec!["s1".to_string(), "s2".to_string()]);
/// assert_eq!(tour.len(), 2);
/// assert_eq!(tour.iter().collect::<Vec<_>>(), ["s1", "s2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Tour {
    ids: Vec<String>,
}

impl Tour {
    /// A tour with no stops.
    #[must_use]
    pub const fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Stop ids in visiting order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Iterate stop ids in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the tour has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Consume the tour, returning its ids.
    #[must_use]
    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }
}

impl From<Vec<String>> for Tour {
    fn from(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

impl FromIterator<String> for Tour {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Order `waypoints` for a driver leaving `start`, nearest first.
///
/// Uses the mean Earth radius. See [`optimize_route_with_radius`].
///
/// # Errors
///
/// Returns [`RouteError::InvalidCoordinate`] for an invalid start or waypoint
/// location and [`RouteError::DuplicateWaypoint`] when two waypoints share an
/// id. No partial tour is returned.
///
/// # Examples
/// ```
/// use fleetroute_core::{GeoPoint, Waypoint, optimize_route};
///
/// let start = GeoPoint::new(0.0, 0.0);
/// let waypoints = [
///     Waypoint::new("far", GeoPoint::new(0.0, 2.0)),
///     Waypoint::new("near", GeoPoint::new(0.0, 1.0)),
/// ];
/// let tour = optimize_route(&waypoints, start)?;
/// assert_eq!(tour.ids(), ["near", "far"]);
/// # Ok::<(), fleetroute_core::RouteError>(())
/// ```
pub fn optimize_route(waypoints: &[Waypoint], start: GeoPoint) -> Result<Tour, RouteError> {
    optimize_route_with_radius(waypoints, start, EARTH_RADIUS_KM)
}

/// Order `waypoints` nearest first on a sphere of `radius_km`.
///
/// At each step every unvisited waypoint is scanned in input order and the
/// first one at strictly minimal distance wins, so equidistant waypoints are
/// visited in the order they were supplied.
///
/// # Errors
///
/// As [`optimize_route`], plus [`RouteError::InvalidEarthRadius`].
pub fn optimize_route_with_radius(
    waypoints: &[Waypoint],
    start: GeoPoint,
    radius_km: f64,
) -> Result<Tour, RouteError> {
    validate_radius(radius_km)?;
    start.validate()?;
    validate_waypoints(waypoints)?;

    match waypoints {
        [] => return Ok(Tour::empty()),
        [only] => return Ok(Tour::from(vec![only.id.clone()])),
        _ => {}
    }

    let mut visited = vec![false; waypoints.len()];
    let mut ids = Vec::with_capacity(waypoints.len());
    let mut current = start;
    while let Some(next) = nearest_unvisited(waypoints, &visited, current, radius_km) {
        let Some((flag, waypoint)) = visited.get_mut(next).zip(waypoints.get(next)) else {
            break;
        };
        *flag = true;
        log::trace!("visiting {} at step {}", waypoint.id, ids.len());
        ids.push(waypoint.id.clone());
        current = waypoint.location;
    }

    debug_assert_eq!(ids.len(), waypoints.len(), "tour must cover every waypoint");
    Ok(Tour { ids })
}

fn nearest_unvisited(
    waypoints: &[Waypoint],
    visited: &[bool],
    from: GeoPoint,
    radius_km: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, waypoint) in waypoints
        .iter()
        .zip(visited)
        .enumerate()
        .filter_map(|(idx, (waypoint, seen))| (!seen).then_some((idx, waypoint)))
    {
        let distance = haversine_km(from, waypoint.location, radius_km);
        // Strict `<` keeps the earliest waypoint on ties.
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}
