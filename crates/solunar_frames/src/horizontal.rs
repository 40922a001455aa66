//! Equatorial → horizontal coordinate conversion.
//!
//! Maps a body's hour angle H and declination δ, together with the
//! observer's latitude φ, to the observer-relative azimuth and altitude.
//! Azimuth is zero toward south, positive westward.

/// Azimuth from hour angle, observer latitude, and declination.
///
/// `A = atan2(sin H, cos H·sin φ − tan δ·cos φ)`; zero points south.
pub fn azimuth_rad(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    hour_angle
        .sin()
        .atan2(hour_angle.cos() * latitude.sin() - declination.tan() * latitude.cos())
}

/// Altitude above the horizon from hour angle, observer latitude, and
/// declination.
///
/// `h = asin(sin φ·sin δ + cos φ·cos δ·cos H)`
pub fn altitude_rad(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    (latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * hour_angle.cos())
    .asin()
}

/// Parallactic angle: the angle between the body's vertical circle and
/// the great circle through the body and the celestial pole.
///
/// `q = atan2(sin H, tan φ·cos δ − sin δ·cos H)` (Meeus, formula 14.1).
pub fn parallactic_angle_rad(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    hour_angle
        .sin()
        .atan2(latitude.tan() * declination.cos() - declination.sin() * hour_angle.cos())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn transit_is_due_south() {
        // On the meridian (H = 0), a body south of the zenith has azimuth 0
        let phi = 45.0_f64.to_radians();
        assert!(azimuth_rad(0.0, phi, 0.0).abs() < EPS);
        assert!(parallactic_angle_rad(0.0, phi, 0.0).abs() < EPS);
    }

    #[test]
    fn zenith_altitude() {
        // Declination equal to latitude culminates at the zenith
        let phi = 30.0_f64.to_radians();
        let h = altitude_rad(0.0, phi, phi);
        assert!((h - FRAC_PI_2).abs() < 1e-7, "h = {h}");
    }

    #[test]
    fn equator_transit_altitude() {
        // From the equator, a δ = 0 body transits at the zenith and sits on
        // the horizon at H = ±90°
        assert!((altitude_rad(0.0, 0.0, 0.0) - FRAC_PI_2).abs() < EPS);
        assert!(altitude_rad(FRAC_PI_2, 0.0, 0.0).abs() < EPS);
    }

    #[test]
    fn azimuth_sign_follows_hour_angle() {
        let phi = 50.0_f64.to_radians();
        let dec = 10.0_f64.to_radians();
        // Setting side (H > 0) is west of south, rising side east
        assert!(azimuth_rad(1.0, phi, dec) > 0.0);
        assert!(azimuth_rad(-1.0, phi, dec) < 0.0);
    }
}
