//! Moon illumination.
//!
//! Illuminated fraction, phase, and bright-limb angle from the geocentric
//! elongation between Sun and Moon (Meeus, chapter 48).

use std::f64::consts::PI;

use solunar_ephem::{moon_coords, sun_coords};
use solunar_time::Instant;

/// Mean Earth–Sun distance in km. The ±1.7% annual variation shifts the
/// phase angle by less than the series truncation error.
const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Illumination state of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk: 0 at new moon, 1 at full moon.
    pub fraction: f64,
    /// Phase in [0, 1): 0 new moon, 0.25 first quarter, 0.5 full moon,
    /// 0.75 last quarter.
    pub phase: f64,
    /// Midpoint angle of the bright limb in radians, reckoned eastward
    /// from the north point of the disk; negative while waxing, positive
    /// while waning.
    pub angle_rad: f64,
}

/// Moon illumination at `instant`. Geocentric, so no observer argument.
pub fn get_moon_illumination(instant: Instant) -> MoonIllumination {
    let d = instant.days_since_j2000();
    let s = sun_coords(d);
    let m = moon_coords(d);

    let delta_ra = s.right_ascension_rad - m.right_ascension_rad;

    // Geocentric elongation of the Moon from the Sun
    let phi = (s.declination_rad.sin() * m.declination_rad.sin()
        + s.declination_rad.cos() * m.declination_rad.cos() * delta_ra.cos())
    .acos();

    // Phase angle at the Moon: the Sun–Moon distance ratio turns the
    // elongation into the angle the terminator presents to us
    let inc = (SUN_DISTANCE_KM * phi.sin()).atan2(m.distance_km - SUN_DISTANCE_KM * phi.cos());

    let angle = (s.declination_rad.cos() * delta_ra.sin()).atan2(
        s.declination_rad.sin() * m.declination_rad.cos()
            - s.declination_rad.cos() * m.declination_rad.sin() * delta_ra.cos(),
    );

    // Limb angle sign tells waxing (negative) from waning; zero counts
    // as waning so the phase lands in the second half-cycle
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };

    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle_rad: angle,
    }
}
