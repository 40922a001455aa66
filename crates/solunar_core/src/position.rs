//! Sun and Moon horizon positions in the observer's sky.

use solunar_ephem::{moon_coords, sun_coords};
use solunar_frames::{
    altitude_rad, azimuth_rad, parallactic_angle_rad, refraction_rad, sidereal_time_rad,
};
use solunar_time::Instant;

use crate::observer::Observer;

/// Sun position in the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Azimuth in radians; zero toward south, positive westward.
    pub azimuth_rad: f64,
    /// Geometric altitude above the horizon in radians.
    pub altitude_rad: f64,
}

/// Moon position in the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Azimuth in radians; zero toward south, positive westward.
    pub azimuth_rad: f64,
    /// Apparent altitude in radians, refraction included.
    pub altitude_rad: f64,
    /// Distance from the Earth's center in km.
    pub distance_km: f64,
    /// Parallactic angle in radians; with the bright-limb angle of
    /// [`crate::MoonIllumination`] it gives the limb's zenith angle.
    pub parallactic_angle_rad: f64,
}

/// Sun azimuth and altitude at `instant` for the observer.
///
/// No refraction correction is applied to the Sun.
pub fn get_sun_position(instant: Instant, observer: &Observer) -> SunPosition {
    let phi = observer.latitude_rad();
    let d = instant.days_since_j2000();

    let c = sun_coords(d);
    let h = sidereal_time_rad(d, observer.longitude_deg) - c.right_ascension_rad;

    SunPosition {
        azimuth_rad: azimuth_rad(h, phi, c.declination_rad),
        altitude_rad: altitude_rad(h, phi, c.declination_rad),
    }
}

/// Moon azimuth, apparent altitude, distance, and parallactic angle at
/// `instant` for the observer.
pub fn get_moon_position(instant: Instant, observer: &Observer) -> MoonPosition {
    let phi = observer.latitude_rad();
    let d = instant.days_since_j2000();

    let c = moon_coords(d);
    let h = sidereal_time_rad(d, observer.longitude_deg) - c.right_ascension_rad;

    let raw_altitude = altitude_rad(h, phi, c.declination_rad);

    MoonPosition {
        azimuth_rad: azimuth_rad(h, phi, c.declination_rad),
        altitude_rad: raw_altitude + refraction_rad(raw_altitude),
        distance_km: c.distance_km,
        parallactic_angle_rad: parallactic_angle_rad(h, phi, c.declination_rad),
    }
}
