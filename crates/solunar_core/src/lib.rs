//! Solar and lunar event times, sky positions, and moon illumination.
//!
//! The public surface of the solunar workspace:
//! - [`get_times`] — solar noon, nadir, and the twilight/daylight
//!   transitions for a day
//! - [`get_sun_position`] / [`get_moon_position`] — horizon coordinates
//! - [`get_moon_illumination`] — illuminated fraction, phase, bright-limb
//!   angle
//! - [`get_moon_times`] — moonrise/moonset with explicit polar variants
//!
//! Everything is a pure function of the instant and the observer; results
//! are plain `Copy` values. Latitude and longitude cross the boundary in
//! degrees and are converted to radians exactly once, in [`Observer`].

pub mod illumination;
pub mod moon_times;
pub mod observer;
pub mod position;
pub mod sun_times;
pub mod transit;

pub use illumination::{MoonIllumination, get_moon_illumination};
pub use moon_times::{MoonTimes, get_moon_times};
pub use observer::Observer;
pub use position::{MoonPosition, SunPosition, get_moon_position, get_sun_position};
pub use sun_times::{SunEvent, SunTimes, TIME_THRESHOLDS, TimeThreshold, get_times};
