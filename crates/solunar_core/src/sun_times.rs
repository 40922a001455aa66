//! Daily sun event times.
//!
//! Solar noon and nadir come straight from the transit solver; the other
//! twelve events are morning/evening pairs at fixed sun-altitude
//! thresholds, solved on the setting side and mirrored about noon for the
//! rising side.

use solunar_ephem::{ecliptic_longitude_rad, solar_mean_anomaly_rad};
use solunar_frames::declination_rad;
use solunar_time::Instant;

use crate::observer::Observer;
use crate::transit::{approx_transit, julian_cycle, setting_jd, solar_transit_jd};

/// The named sun events of a solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEvent {
    /// Top edge of the Sun appears on the horizon.
    Sunrise,
    /// Sun disappears below the horizon; evening civil twilight starts.
    Sunset,
    /// Bottom edge of the Sun touches the horizon.
    SunriseEnd,
    /// Bottom edge of the Sun touches the horizon on the way down.
    SunsetStart,
    /// Morning civil twilight starts.
    Dawn,
    /// Evening civil twilight ends, nautical twilight starts.
    Dusk,
    /// Morning nautical twilight starts.
    NauticalDawn,
    /// Evening nautical twilight ends, astronomical twilight starts.
    NauticalDusk,
    /// Morning astronomical twilight starts.
    NightEnd,
    /// Dark enough for astronomical observations.
    Night,
    /// Morning golden hour ends.
    GoldenHourEnd,
    /// Evening golden hour (soft light) starts.
    GoldenHour,
    /// Sun at its highest; crosses the local meridian.
    SolarNoon,
    /// Sun at its lowest, half a day from noon.
    Nadir,
}

/// One altitude threshold with its morning and evening event names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeThreshold {
    /// Sun-center altitude in degrees defining the pair.
    pub angle_deg: f64,
    /// Event when the Sun rises through the threshold.
    pub morning: SunEvent,
    /// Event when the Sun sets through the threshold.
    pub evening: SunEvent,
}

/// The altitude thresholds, in the fixed computation order.
pub const TIME_THRESHOLDS: [TimeThreshold; 6] = [
    TimeThreshold {
        angle_deg: -0.83,
        morning: SunEvent::Sunrise,
        evening: SunEvent::Sunset,
    },
    TimeThreshold {
        angle_deg: -0.3,
        morning: SunEvent::SunriseEnd,
        evening: SunEvent::SunsetStart,
    },
    TimeThreshold {
        angle_deg: -6.0,
        morning: SunEvent::Dawn,
        evening: SunEvent::Dusk,
    },
    TimeThreshold {
        angle_deg: -12.0,
        morning: SunEvent::NauticalDawn,
        evening: SunEvent::NauticalDusk,
    },
    TimeThreshold {
        angle_deg: -18.0,
        morning: SunEvent::NightEnd,
        evening: SunEvent::Night,
    },
    TimeThreshold {
        angle_deg: 6.0,
        morning: SunEvent::GoldenHourEnd,
        evening: SunEvent::GoldenHour,
    },
];

/// All sun event times for one solar day.
///
/// `solar_noon` and `nadir` always exist. The threshold events are `None`
/// when the Sun does not reach the corresponding altitude on this day
/// (polar day or night).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub solar_noon: Instant,
    pub nadir: Instant,
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
    pub sunrise_end: Option<Instant>,
    pub sunset_start: Option<Instant>,
    pub dawn: Option<Instant>,
    pub dusk: Option<Instant>,
    pub nautical_dawn: Option<Instant>,
    pub nautical_dusk: Option<Instant>,
    pub night_end: Option<Instant>,
    pub night: Option<Instant>,
    pub golden_hour_end: Option<Instant>,
    pub golden_hour: Option<Instant>,
}

impl SunTimes {
    /// Uniform map-style access by event name.
    pub fn get(&self, event: SunEvent) -> Option<Instant> {
        match event {
            SunEvent::SolarNoon => Some(self.solar_noon),
            SunEvent::Nadir => Some(self.nadir),
            SunEvent::Sunrise => self.sunrise,
            SunEvent::Sunset => self.sunset,
            SunEvent::SunriseEnd => self.sunrise_end,
            SunEvent::SunsetStart => self.sunset_start,
            SunEvent::Dawn => self.dawn,
            SunEvent::Dusk => self.dusk,
            SunEvent::NauticalDawn => self.nautical_dawn,
            SunEvent::NauticalDusk => self.nautical_dusk,
            SunEvent::NightEnd => self.night_end,
            SunEvent::Night => self.night,
            SunEvent::GoldenHourEnd => self.golden_hour_end,
            SunEvent::GoldenHour => self.golden_hour,
        }
    }
}

/// Horizon dip in degrees for an observer `height` meters above sea
/// level: `Δ = −2.076·√height / 60`.
fn observer_angle_deg(height_m: f64) -> f64 {
    -2.076 * height_m.sqrt() / 60.0
}

/// An instant from a Julian Date, or `None` if the date is not finite
/// (the event does not occur on this day).
fn event_instant(jd: f64) -> Option<Instant> {
    jd.is_finite().then(|| Instant::from_jd(jd))
}

/// Compute all sun event times for the solar day nearest to `instant` at
/// the observer's longitude.
pub fn get_times(instant: Instant, observer: &Observer) -> SunTimes {
    let lw = observer.west_longitude_rad();
    let phi = observer.latitude_rad();
    let d = instant.days_since_j2000();

    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);

    let m = solar_mean_anomaly_rad(ds);
    let l = ecliptic_longitude_rad(m);
    let dec = declination_rad(l, 0.0);

    let j_noon = solar_transit_jd(ds, m, l);
    let dip_deg = observer_angle_deg(observer.height_m);

    let mut pairs = [(None, None); 6];
    for (pair, threshold) in pairs.iter_mut().zip(&TIME_THRESHOLDS) {
        let h = (threshold.angle_deg + dip_deg).to_radians();
        let j_set = setting_jd(h, lw, phi, dec, n, m, l);
        let j_rise = j_noon - (j_set - j_noon);
        *pair = (event_instant(j_rise), event_instant(j_set));
    }

    // Destructured in TIME_THRESHOLDS order
    let [
        (sunrise, sunset),
        (sunrise_end, sunset_start),
        (dawn, dusk),
        (nautical_dawn, nautical_dusk),
        (night_end, night),
        (golden_hour_end, golden_hour),
    ] = pairs;

    SunTimes {
        solar_noon: Instant::from_jd(j_noon),
        nadir: Instant::from_jd(j_noon - 0.5),
        sunrise,
        sunset,
        sunrise_end,
        sunset_start,
        dawn,
        dusk,
        nautical_dawn,
        nautical_dusk,
        night_end,
        night,
        golden_hour_end,
        golden_hour,
    }
}
