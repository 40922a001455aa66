//! Low-precision Sun and Moon ephemerides.
//!
//! Geocentric positions as trigonometric series in fractional days since
//! J2000, accurate to the arc-minute level over a few centuries around the
//! epoch. The series produce ecliptic coordinates, converted to equatorial
//! through `solunar_frames`.

pub mod lunar;
pub mod solar;

pub use lunar::moon_coords;
pub use solar::{
    ecliptic_longitude_rad, equation_of_center_rad, solar_mean_anomaly_rad, sun_coords,
};
