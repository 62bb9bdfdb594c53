//! Stops on a delivery round and lookups by identifier.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GeoPoint, RouteError};

/// A location a driver should visit, such as a shop.
///
/// The identifier is opaque to this crate; it only has to be unique within a
/// single optimisation call.
///
/// # Examples
/// ```
/// use fleetroute_core::{GeoPoint, Waypoint};
///
/// let shop = Waypoint::new("s1", GeoPoint::new(-1.2585, 36.8615));
/// assert_eq!(shop.id, "s1");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    /// Caller-assigned identifier.
    pub id: String,
    /// Where the waypoint is.
    pub location: GeoPoint,
}

impl Waypoint {
    /// Construct a waypoint.
    pub fn new(id: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }
}

/// Map waypoint ids to their locations.
///
/// A later waypoint replaces an earlier one with the same id.
///
/// # Examples
/// ```
/// use fleetroute_core::{GeoPoint, Waypoint, index_by_id};
///
/// let by_id = index_by_id(&[Waypoint::new("s1", GeoPoint::new(1.0, 2.0))]);
/// assert_eq!(by_id.get("s1"), Some(&GeoPoint::new(1.0, 2.0)));
/// ```
#[must_use]
pub fn index_by_id(waypoints: &[Waypoint]) -> HashMap<String, GeoPoint> {
    waypoints
        .iter()
        .map(|waypoint| (waypoint.id.clone(), waypoint.location))
        .collect()
}

/// Validate every location and reject repeated identifiers.
pub(crate) fn validate_waypoints(waypoints: &[Waypoint]) -> Result<(), RouteError> {
    let mut seen = HashSet::with_capacity(waypoints.len());
    for waypoint in waypoints {
        waypoint.location.validate()?;
        if !seen.insert(waypoint.id.as_str()) {
            return Err(RouteError::DuplicateWaypoint {
                id: waypoint.id.clone(),
            });
        }
    }
    Ok(())
}
