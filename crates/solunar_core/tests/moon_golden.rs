//! Golden-value tests for moon illumination and moonrise/moonset.
//!
//! Reference values from the suncalc test suite; the degenerate
//! scenarios use 75°N where the Moon's declination keeps it above or
//! below the horizon for days at a time.

use solunar_core::{MoonTimes, Observer, get_moon_illumination, get_moon_times};
use solunar_time::Instant;

fn reference_observer() -> Observer {
    Observer::new(50.5, 30.5)
}

fn assert_near(actual: Instant, expected_unix: f64, what: &str) {
    let diff = (actual.as_unix_seconds() - expected_unix).abs();
    assert!(diff < 0.5, "{what} off by {diff} s, got {actual}");
}

#[test]
fn illumination_reference() {
    // 2013-03-05 00:00 UTC: waning gibbous-to-crescent transition
    let ill = get_moon_illumination(Instant::from_unix_seconds(1_362_441_600.0));
    assert!(
        (ill.fraction - 0.484_806_820_245_637).abs() < 1e-9,
        "fraction = {}",
        ill.fraction
    );
    assert!(
        (ill.phase - 0.754_836_883_853_876_2).abs() < 1e-9,
        "phase = {}",
        ill.phase
    );
    assert!(
        (ill.angle_rad - 1.673_294_267_857_834_6).abs() < 1e-9,
        "angle = {}",
        ill.angle_rad
    );
}

#[test]
fn rise_and_set_reference_day() {
    // 2013-03-04 00:00 UTC: moonset in the morning, moonrise before
    // midnight
    let times = get_moon_times(
        Instant::from_unix_seconds(1_362_355_200.0),
        &reference_observer(),
    );
    let MoonTimes::RiseAndSet { rise, set } = times else {
        panic!("expected RiseAndSet, got {times:?}");
    };
    assert_near(rise, 1_362_441_269.674_790_9, "moonrise");
    assert_near(set, 1_362_383_278.850_178_2, "moonset");
    assert!(set < rise, "this day sets before it rises");
}

#[test]
fn set_only_day() {
    // 2013-03-05: the next moonrise falls just past the 24 h window
    let times = get_moon_times(
        Instant::from_unix_seconds(1_362_441_600.0),
        &reference_observer(),
    );
    let MoonTimes::SetOnly(set) = times else {
        panic!("expected SetOnly, got {times:?}");
    };
    assert_near(set, 1_362_473_080.302_751, "lone moonset");
}

#[test]
fn rise_only_day() {
    // 2013-03-19: the next moonset falls just past the 24 h window
    let times = get_moon_times(
        Instant::from_unix_seconds(1_363_651_200.0),
        &reference_observer(),
    );
    let MoonTimes::RiseOnly(rise) = times else {
        panic!("expected RiseOnly, got {times:?}");
    };
    assert_near(rise, 1_363_680_024.695_031_6, "lone moonrise");
}

#[test]
fn polar_moon_always_down() {
    // 2013-03-05 at 75°N: the Moon stays below the dip threshold all day
    let times = get_moon_times(
        Instant::from_unix_seconds(1_362_441_600.0),
        &Observer::new(75.0, 0.0),
    );
    assert_eq!(times, MoonTimes::AlwaysDown);
}

#[test]
fn polar_moon_always_up() {
    // Two weeks later the declination has swung north: up all day
    let times = get_moon_times(
        Instant::from_unix_seconds(1_363_737_600.0),
        &Observer::new(75.0, 0.0),
    );
    assert_eq!(times, MoonTimes::AlwaysUp);
}
