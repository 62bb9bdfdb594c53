//! Geographic positions on the WGS84 sphere.

use std::ops::RangeInclusive;

use geo::{Coord, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::RouteError;

/// Valid latitudes in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitudes in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A latitude/longitude pair in degrees.
///
/// Construction through [`GeoPoint::new`] is unchecked so that callers can
/// carry raw input up to the operation that consumes it; every operation in
/// this crate validates the points it receives. Use [`GeoPoint::try_new`] to
/// reject bad input eagerly.
///
/// # Examples
/// ```
/// use fleetroute_core::GeoPoint;
///
/// let nairobi = GeoPoint::try_new(-1.2590, 36.8620)?;
/// assert_eq!(nairobi.latitude, -1.2590);
///
/// assert!(GeoPoint::try_new(91.0, 0.0).is_err());
/// # Ok::<(), fleetroute_core::RouteError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// Degrees north of the equator, `-90.0..=90.0`.
    pub latitude: f64,
    /// Degrees east of the prime meridian, `-180.0..=180.0`.
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point without validating it.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Construct a point, rejecting out-of-range or NaN components.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidCoordinate`] when either component is out
    /// of range.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, RouteError> {
        let point = Self::new(latitude, longitude);
        point.validate()?;
        Ok(point)
    }

    /// Whether both components lie inside their valid ranges.
    ///
    /// NaN never lies inside a range, so NaN components are invalid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        LATITUDE_RANGE.contains(&self.latitude) && LONGITUDE_RANGE.contains(&self.longitude)
    }

    /// Check the point's components.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidCoordinate`] carrying the offending values.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RouteError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

// `geo` follows the GIS convention of `x = longitude`, `y = latitude`.
impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Self::from(Coord::from(point))
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        Self::from(point.0)
    }
}
