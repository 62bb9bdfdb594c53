//! Fixtures shared by unit, behaviour, property and benchmark code.

use std::collections::HashSet;

use crate::{GeoPoint, Tour, Waypoint};

/// Depot used by the Nairobi delivery-round fixtures.
pub const NAIROBI_DEPOT: GeoPoint = GeoPoint::new(-1.2590, 36.8620);

/// Build a waypoint from raw degrees.
#[must_use]
pub fn waypoint(id: &str, latitude: f64, longitude: f64) -> Waypoint {
    Waypoint::new(id, GeoPoint::new(latitude, longitude))
}

/// Three shops a few hundred metres from [`NAIROBI_DEPOT`]; `s1` is nearest.
#[must_use]
pub fn nairobi_shops() -> Vec<Waypoint> {
    vec![
        waypoint("s1", -1.2585, 36.8615),
        waypoint("s2", -1.2610, 36.8600),
        waypoint("s3", -1.2565, 36.8590),
    ]
}

/// Whether `tour` visits every waypoint exactly once and nothing else.
#[must_use]
pub fn is_permutation_of(tour: &Tour, waypoints: &[Waypoint]) -> bool {
    let visited: HashSet<&str> = tour.iter().collect();
    let expected: HashSet<&str> = waypoints.iter().map(|w| w.id.as_str()).collect();
    tour.len() == waypoints.len() && visited.len() == tour.len() && visited == expected
}
