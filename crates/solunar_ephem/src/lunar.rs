//! Lunar orbital formulas.
//!
//! First-order truncation of the lunar theory: mean longitude plus the
//! principal elliptic term (evection and smaller terms dropped), the
//! principal latitude term, and the distance with its elliptic
//! correction. Good to a fraction of a degree, consistent with the rest
//! of the pipeline.

use std::f64::consts::PI;

use solunar_frames::{GeocentricCoords, declination_rad, right_ascension_rad};

const RAD: f64 = PI / 180.0;

/// Geocentric coordinates of the Moon at `d` days since J2000.
pub fn moon_coords(d: f64) -> GeocentricCoords {
    // Fundamental arguments: mean longitude, mean anomaly, and mean
    // distance argument (from the ascending node)
    let l0 = RAD * (218.316 + 13.176_396 * d);
    let m = RAD * (134.963 + 13.064_993 * d);
    let f = RAD * (93.272 + 13.229_350 * d);

    let longitude = l0 + RAD * 6.289 * m.sin();
    let latitude = RAD * 5.128 * f.sin();
    let distance_km = 385_001.0 - 20_905.0 * m.cos();

    GeocentricCoords {
        right_ascension_rad: right_ascension_rad(longitude, latitude),
        declination_rad: declination_rad(longitude, latitude),
        distance_km,
    }
}
