//! Moonrise and moonset.
//!
//! The Moon's altitude is sampled every two hours across one day; a
//! quadratic through each consecutive sample triple locates the horizon
//! crossings inside the interval. Days without a crossing are classified
//! by the sign of the last fitted vertex: the Moon stayed up or stayed
//! down the whole day.

use solunar_time::Instant;

use crate::observer::Observer;
use crate::position::get_moon_position;

/// Altitude offset of the effective horizon in degrees, accounting for
/// refraction and the Moon's semidiameter at rise/set.
const HORIZON_DIP_DEG: f64 = 0.133;

/// Moonrise/moonset outcome for one 24-hour window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoonTimes {
    /// Both crossings occur within the window.
    RiseAndSet { rise: Instant, set: Instant },
    /// The Moon rises but does not set within the window.
    RiseOnly(Instant),
    /// The Moon sets but does not rise within the window.
    SetOnly(Instant),
    /// The Moon stays above the horizon the whole window.
    AlwaysUp,
    /// The Moon stays below the horizon the whole window.
    AlwaysDown,
}

/// Dip-corrected moon altitude at a given hour offset from the window
/// start.
fn altitude_at(start: Instant, hours: f64, observer: &Observer) -> f64 {
    get_moon_position(start.hours_later(hours), observer).altitude_rad
        - HORIZON_DIP_DEG.to_radians()
}

/// Find moonrise and moonset in the 24 hours following `instant`.
///
/// Scans in 2-hour intervals, fitting a parabola through the altitudes at
/// the interval's start, midpoint, and end. The root classification and
/// tie-breaks follow the suncalc scan exactly: one root in the interval is
/// a rise if the interval started below the horizon and a set otherwise;
/// with two roots the parabola's vertex sign decides which is which.
/// Alternate derivations can silently swap rise and set near tangency, so
/// the order of these checks must not be rearranged. The scan stops as
/// soon as both events are found, bounding the work at 12 intervals.
pub fn get_moon_times(instant: Instant, observer: &Observer) -> MoonTimes {
    let mut h0 = altitude_at(instant, 0.0, observer);
    let mut rise = 0.0;
    let mut set = 0.0;
    let mut ye = 0.0;

    for i in (1..=24).step_by(2) {
        let hour = f64::from(i);
        let h1 = altitude_at(instant, hour, observer);
        let h2 = altitude_at(instant, hour + 1.0, observer);

        // Parabola through (-1, h0), (0, h1), (1, h2) in interval-local x
        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        let xe = -b / (2.0 * a);
        ye = (a * xe + b) * xe + h1;
        let d = b * b - 4.0 * a * h1;
        let mut roots = 0;
        let mut x1 = 0.0;
        let mut x2 = 0.0;

        if d >= 0.0 {
            let dx = d.sqrt() / (a.abs() * 2.0);
            x1 = xe - dx;
            x2 = xe + dx;
            if x1.abs() <= 1.0 {
                roots += 1;
            }
            if x2.abs() <= 1.0 {
                roots += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }
        }

        if roots == 1 {
            if h0 < 0.0 {
                rise = hour + x1;
            } else {
                set = hour + x1;
            }
        } else if roots == 2 {
            rise = hour + if ye < 0.0 { x2 } else { x1 };
            set = hour + if ye < 0.0 { x1 } else { x2 };
        }

        if rise != 0.0 && set != 0.0 {
            break;
        }
        h0 = h2;
    }

    match (rise != 0.0, set != 0.0) {
        (true, true) => MoonTimes::RiseAndSet {
            rise: instant.hours_later(rise),
            set: instant.hours_later(set),
        },
        (true, false) => MoonTimes::RiseOnly(instant.hours_later(rise)),
        (false, true) => MoonTimes::SetOnly(instant.hours_later(set)),
        (false, false) => {
            if ye > 0.0 {
                MoonTimes::AlwaysUp
            } else {
                MoonTimes::AlwaysDown
            }
        }
    }
}
