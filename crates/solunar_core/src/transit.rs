//! Solar transit solving.
//!
//! The chain that turns "the Sun reaches altitude h" into a Julian Date:
//! pick today's whole solar cycle for the observer's longitude, estimate
//! the transit within it, then correct for orbital eccentricity and the
//! obliquity of the ecliptic.
//!
//! Source: the sun-position pages of Astronomy Answers (aa.quae.nl),
//! as popularized by the suncalc library.

use std::f64::consts::TAU;

use solunar_time::J2000_JD;

/// Baseline offset of the transit estimate within a cycle, days.
const J0: f64 = 0.0009;

/// Transit variation from orbital eccentricity, days.
const J1: f64 = 0.0053;

/// Transit variation from the obliquity of the ecliptic, days.
const J2: f64 = -0.0069;

/// Whole solar cycle count nearest to `d` days since J2000 for west
/// longitude `lw`.
///
/// `n = round(d − J0 − lw/2π)`. The rounding is what selects *today's*
/// transit rather than an arbitrary one.
pub fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / TAU).round()
}

/// Approximate transit, in days since J2000, for a target hour angle
/// within cycle `n`.
///
/// `ds = J0 + (ht + lw)/2π + n`
pub fn approx_transit(hour_angle: f64, lw: f64, n: f64) -> f64 {
    J0 + (hour_angle + lw) / TAU + n
}

/// Corrected solar transit as a Julian Date.
///
/// `J = J2000 + ds + J1·sin M + J2·sin 2L`
pub fn solar_transit_jd(ds: f64, mean_anomaly: f64, ecliptic_longitude: f64) -> f64 {
    J2000_JD + ds + J1 * mean_anomaly.sin() + J2 * (2.0 * ecliptic_longitude).sin()
}

/// Hour angle at which a body of declination δ reaches altitude `h` for
/// an observer at latitude φ.
///
/// `H = acos((sin h − sin φ·sin δ)/(cos φ·cos δ))`
///
/// The acos argument is deliberately not clamped: when the altitude is
/// never reached on this day (polar day/night), the argument leaves
/// [−1, 1] and the result is NaN, which propagates through the transit
/// chain until the engine boundary maps it to "event does not occur".
pub fn hour_angle_rad(altitude: f64, latitude: f64, declination: f64) -> f64 {
    ((altitude.sin() - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos()))
    .acos()
}

/// Julian Date at which the Sun sets through altitude `h`.
///
/// Composes [`hour_angle_rad`] → [`approx_transit`] → [`solar_transit_jd`].
/// The symmetric rising time is derived by the caller by reflecting the
/// offset from noon: `J_rise = J_noon − (J_set − J_noon)`.
pub fn setting_jd(
    altitude: f64,
    lw: f64,
    latitude: f64,
    declination: f64,
    n: f64,
    mean_anomaly: f64,
    ecliptic_longitude: f64,
) -> f64 {
    let w = hour_angle_rad(altitude, latitude, declination);
    let a = approx_transit(w, lw, n);
    solar_transit_jd(a, mean_anomaly, ecliptic_longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_reference_day() {
        // d = 4811.5 at 30.5°E: lw ≈ −0.5323 rad → n = 4812
        let lw = (-30.5_f64).to_radians();
        assert_eq!(julian_cycle(4811.5, lw), 4812.0);
    }

    #[test]
    fn cycle_greenwich() {
        assert_eq!(julian_cycle(0.0, 0.0), 0.0);
        assert_eq!(julian_cycle(0.6, 0.0), 1.0);
    }

    #[test]
    fn approx_transit_zero_hour_angle() {
        // At Greenwich, cycle 0, the transit estimate is the J0 baseline
        assert!((approx_transit(0.0, 0.0, 0.0) - J0).abs() < 1e-15);
    }

    #[test]
    fn transit_near_j2000_noon() {
        // Corrections are a few minutes at most
        let ds = approx_transit(0.0, 0.0, 0.0);
        let m = 357.5291_f64.to_radians();
        let l = 280.0_f64.to_radians();
        let j = solar_transit_jd(ds, m, l);
        assert!((j - J2000_JD).abs() < 0.02, "J = {j}");
    }

    #[test]
    fn hour_angle_quarter_day_at_equator() {
        // δ = 0 seen from the equator: horizon crossing at H = 90°
        let h = hour_angle_rad(0.0, 0.0, 0.0);
        assert!((h - std::f64::consts::FRAC_PI_2).abs() < 1e-12, "H = {h}");
    }

    #[test]
    fn hour_angle_out_of_domain_is_nan() {
        // 80°N against the midsummer declination: −18° is never reached
        let h = hour_angle_rad(
            (-18.0_f64).to_radians(),
            80.0_f64.to_radians(),
            23.0_f64.to_radians(),
        );
        assert!(h.is_nan());
    }

    #[test]
    fn nan_propagates_to_setting_jd() {
        let j = setting_jd(
            (-18.0_f64).to_radians(),
            0.0,
            80.0_f64.to_radians(),
            23.0_f64.to_radians(),
            7500.0,
            1.0,
            2.0,
        );
        assert!(j.is_nan());
    }
}
