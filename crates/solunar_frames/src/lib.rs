//! Coordinate transforms for solunar computations.
//!
//! Provides the generic spherical-astronomy building blocks: ecliptic →
//! equatorial conversion, equatorial → horizontal conversion, sidereal
//! time, and atmospheric refraction. Body-specific orbital formulas live
//! in `solunar_ephem`; this crate knows nothing about any particular body.
//!
//! All angles are radians unless a name says otherwise.

pub mod equatorial;
pub mod horizontal;
pub mod obliquity;
pub mod refraction;
pub mod sidereal;

pub use equatorial::{
    EquatorialCoords, GeocentricCoords, declination_rad, right_ascension_rad,
};
pub use horizontal::{altitude_rad, azimuth_rad, parallactic_angle_rad};
pub use obliquity::{OBLIQUITY_DEG, OBLIQUITY_RAD};
pub use refraction::refraction_rad;
pub use sidereal::sidereal_time_rad;
