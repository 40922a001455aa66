//! Local sidereal time.
//!
//! The sidereal time at a given moment equals the right ascension
//! currently crossing the local meridian; subtracting a body's right
//! ascension from it yields the body's hour angle.

use std::f64::consts::PI;

const RAD: f64 = PI / 180.0;

/// Local sidereal time from days since J2000 and the observer's east
/// longitude in degrees.
///
/// `θ = RAD·(280.16 + 360.9856235·d) − lw` where `lw = RAD·(−longitude)`.
/// 280.16° is the Greenwich sidereal angle at J2000.0 and 360.9856235° the
/// Earth's rotation per mean solar day. The west-longitude reflection is
/// done here; callers pass the geographic east-positive longitude and
/// never pre-negate.
///
/// The result is not reduced modulo 2π; consumers only feed it through
/// periodic functions.
pub fn sidereal_time_rad(days_since_j2000: f64, longitude_deg: f64) -> f64 {
    let lw = RAD * -longitude_deg;
    RAD * (280.16 + 360.985_623_5 * days_since_j2000) - lw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greenwich_at_j2000() {
        let theta = sidereal_time_rad(0.0, 0.0);
        assert!((theta.to_degrees() - 280.16).abs() < 1e-9, "θ = {theta}");
    }

    #[test]
    fn east_longitude_adds() {
        // 90° east is a quarter turn ahead of Greenwich
        let g = sidereal_time_rad(0.0, 0.0);
        let e = sidereal_time_rad(0.0, 90.0);
        assert!((e - g - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn advances_past_a_turn_per_day() {
        // One solar day advances sidereal time by slightly more than 360°
        let delta = sidereal_time_rad(1.0, 0.0) - sidereal_time_rad(0.0, 0.0);
        assert!((delta.to_degrees() - 360.985_623_5).abs() < 1e-6, "Δ = {delta}");
    }
}
