//! Tunable parameters for distance and travel-time estimates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::RouteError;
use crate::distance::{EARTH_RADIUS_KM, validate_radius};

/// Average speed assumed for urban delivery rounds, in km/h.
///
/// A planning assumption for dense city traffic, not a measured figure.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 20.0;

/// Parameters shared by tour construction and metrics.
///
/// # Examples
/// ```
/// use fleetroute_core::PlannerConfig;
///
/// let config = PlannerConfig::default().with_average_speed_kmh(30.0);
/// assert_eq!(config.average_speed_kmh, 30.0);
/// assert_eq!(config.earth_radius_km, 6371.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PlannerConfig {
    /// Average travel speed used to derive minutes from kilometres.
    pub average_speed_kmh: f64,
    /// Radius of the sphere distances are measured on.
    pub earth_radius_km: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl PlannerConfig {
    /// Replace the average speed.
    #[must_use]
    pub const fn with_average_speed_kmh(mut self, average_speed_kmh: f64) -> Self {
        self.average_speed_kmh = average_speed_kmh;
        self
    }

    /// Replace the sphere radius.
    #[must_use]
    pub const fn with_earth_radius_km(mut self, earth_radius_km: f64) -> Self {
        self.earth_radius_km = earth_radius_km;
        self
    }

    /// Check both parameters are positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidSpeed`] or
    /// [`RouteError::InvalidEarthRadius`].
    pub fn validate(&self) -> Result<(), RouteError> {
        validate_speed(self.average_speed_kmh)?;
        validate_radius(self.earth_radius_km)
    }
}

pub(crate) fn validate_speed(speed_kmh: f64) -> Result<(), RouteError> {
    if speed_kmh.is_finite() && speed_kmh > 0.0 {
        Ok(())
    } else {
        Err(RouteError::InvalidSpeed { speed_kmh })
    }
}
