//! Great-circle distance on a spherical Earth.
//!
//! Distances use the haversine formula, which stays numerically stable for
//! the short hops typical of urban delivery rounds. The sphere radius is an
//! explicit parameter; [`EARTH_RADIUS_KM`] is the mean Earth radius used by
//! the convenience functions.

use geo::{Distance, HaversineMeasure, Point};

use crate::{GeoPoint, RouteError};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Square matrix of pairwise distances in kilometres.
///
/// `matrix[i][j]` is the distance from `points[i]` to `points[j]`.
pub type DistanceMatrix = Vec<Vec<f64>>;

/// Great-circle distance in kilometres between two points.
///
/// # Errors
///
/// Returns [`RouteError::InvalidCoordinate`] if either point is out of range
/// or NaN.
///
/// # Examples
/// ```
/// use fleetroute_core::{GeoPoint, distance_km};
///
/// let km = distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0))?;
/// assert!((km - 111.19).abs() < 0.5);
/// # Ok::<(), fleetroute_core::RouteError>(())
/// ```
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> Result<f64, RouteError> {
    distance_km_with_radius(a, b, EARTH_RADIUS_KM)
}

/// Great-circle distance in kilometres on a sphere of `radius_km`.
///
/// # Errors
///
/// Returns [`RouteError::InvalidEarthRadius`] for a radius that is not a
/// positive finite number, and [`RouteError::InvalidCoordinate`] for an
/// invalid point.
pub fn distance_km_with_radius(
    a: GeoPoint,
    b: GeoPoint,
    radius_km: f64,
) -> Result<f64, RouteError> {
    validate_radius(radius_km)?;
    a.validate()?;
    b.validate()?;
    Ok(haversine_km(a, b, radius_km))
}

/// Pairwise distances between `points`.
///
/// Empty input produces an empty matrix.
///
/// # Errors
///
/// Fails on the first invalid point, or on an invalid radius.
///
/// # Examples
/// ```
/// use fleetroute_core::{EARTH_RADIUS_KM, GeoPoint, distance_matrix};
///
/// let points = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)];
/// let matrix = distance_matrix(&points, EARTH_RADIUS_KM)?;
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix[0][0], 0.0);
/// # Ok::<(), fleetroute_core::RouteError>(())
/// ```
pub fn distance_matrix(points: &[GeoPoint], radius_km: f64) -> Result<DistanceMatrix, RouteError> {
    validate_radius(radius_km)?;
    points.iter().try_for_each(GeoPoint::validate)?;
    Ok(points
        .iter()
        .map(|from| {
            points
                .iter()
                .map(|to| haversine_km(*from, *to, radius_km))
                .collect()
        })
        .collect())
}

pub(crate) fn validate_radius(radius_km: f64) -> Result<(), RouteError> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(())
    } else {
        Err(RouteError::InvalidEarthRadius { radius_km })
    }
}

/// Haversine distance for points already known to be valid.
#[expect(clippy::float_arithmetic, reason = "half a great circle")]
pub(crate) fn haversine_km(a: GeoPoint, b: GeoPoint, radius_km: f64) -> f64 {
    // A radius in kilometres yields kilometres.
    let km = HaversineMeasure::new(radius_km).distance(Point::from(a), Point::from(b));
    // Rounding can push the haversine term just past 1 for antipodal points,
    // which `asin` turns into NaN.
    if km.is_nan() {
        std::f64::consts::PI * radius_km
    } else {
        km
    }
}
