//! Solar orbital formulas.
//!
//! Geocentric view of the Earth's orbit: the mean anomaly and equation of
//! center give the Sun's ecliptic longitude, rotated by the perihelion
//! argument plus 180° to swap the roles of Earth and Sun.

use std::f64::consts::PI;

use solunar_frames::{EquatorialCoords, declination_rad, right_ascension_rad};

const RAD: f64 = PI / 180.0;

/// Argument of perihelion of the Earth, degrees.
const PERIHELION_DEG: f64 = 102.9372;

/// Solar mean anomaly at `d` days since J2000.
///
/// `M = RAD·(357.5291 + 0.98560028·d)`; 357.5291° is the anomaly at the
/// epoch, 0.98560028°/day the mean motion.
pub fn solar_mean_anomaly_rad(d: f64) -> f64 {
    RAD * (357.5291 + 0.985_600_28 * d)
}

/// Equation of center for the Earth's orbit.
///
/// `C = RAD·(1.9148·sin M + 0.02·sin 2M + 0.0003·sin 3M)`
///
/// The angular difference between the true position on the elliptical
/// orbit and the uniform circular position; the coefficients encode the
/// Earth's eccentricity.
pub fn equation_of_center_rad(mean_anomaly: f64) -> f64 {
    RAD * (1.9148 * mean_anomaly.sin()
        + 0.02 * (2.0 * mean_anomaly).sin()
        + 0.0003 * (3.0 * mean_anomaly).sin())
}

/// Ecliptic longitude of the Sun as seen from the Earth.
///
/// `L = M + C + RAD·102.9372 + π` — true anomaly plus perihelion
/// argument, rotated half a turn from the heliocentric view.
pub fn ecliptic_longitude_rad(mean_anomaly: f64) -> f64 {
    mean_anomaly + equation_of_center_rad(mean_anomaly) + RAD * PERIHELION_DEG + PI
}

/// Equatorial coordinates of the Sun at `d` days since J2000.
///
/// The Sun's ecliptic latitude never exceeds a few arcseconds, well below
/// this precision, so it is taken as zero.
pub fn sun_coords(d: f64) -> EquatorialCoords {
    let m = solar_mean_anomaly_rad(d);
    let l = ecliptic_longitude_rad(m);
    EquatorialCoords {
        right_ascension_rad: right_ascension_rad(l, 0.0),
        declination_rad: declination_rad(l, 0.0),
    }
}
