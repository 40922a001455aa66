//! Observer location on the Earth's surface.

use std::f64::consts::PI;

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Eye height above mean sea level in meters. Affects only the
    /// horizon dip applied by [`crate::get_times`].
    pub height_m: f64,
}

impl Observer {
    /// Observer at sea level.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_m: 0.0,
        }
    }

    /// Observer at the given height above sea level.
    pub fn with_height(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_m,
        }
    }

    /// Latitude φ in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// West longitude `lw` in radians, the reflected form the transit
    /// formulas take.
    pub fn west_longitude_rad(&self) -> f64 {
        PI / 180.0 * -self.longitude_deg
    }
}
