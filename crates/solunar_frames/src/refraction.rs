//! Atmospheric refraction.
//!
//! The atmosphere bends light downward near the horizon, lifting the
//! apparent altitude of a body above its true altitude. The correction
//! here is the arc-minute-accuracy fit of Meeus, formula 16.4, with the
//! coefficients pre-converted to radians.

/// Refraction correction in radians for a true altitude `h` in radians.
///
/// `R = 0.0002967 / tan(h + 0.00312536 / (h + 0.08901179))`
///
/// Add the result to the true altitude to get the apparent altitude. The
/// formula is only valid for non-negative altitudes; below-horizon input
/// is clamped to the horizon, which avoids the tangent singularity and a
/// sign flip for bodies a few degrees under it.
pub fn refraction_rad(altitude: f64) -> f64 {
    let h = if altitude < 0.0 { 0.0 } else { altitude };
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
