//! Rise/set golden tests against the analytic provider.

use panchang_core::AnalyticEphemeris;
use panchang_vedic_base::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, approximate_local_noon_jd,
    compute_rise_set,
};

/// 2025-10-05 00:00 UT.
const JD_2025_10_05: f64 = 2_460_953.5;

fn bengaluru() -> GeoLocation {
    GeoLocation::new(12.9719, 77.593, 0.0)
}

fn event_jd(result: RiseSetResult) -> f64 {
    match result {
        RiseSetResult::Event { jd_ut, .. } => jd_ut,
        other => panic!("expected an event, got {other:?}"),
    }
}

#[test]
fn bengaluru_sunrise_2025_10_05() {
    let eph = AnalyticEphemeris::default();
    let loc = bengaluru();
    let noon = approximate_local_noon_jd(JD_2025_10_05, loc.longitude_deg);
    let rise = event_jd(
        compute_rise_set(&eph, &loc, RiseSetEvent::Sunrise, noon, &RiseSetConfig::default())
            .expect("sunrise"),
    );
    // ~06:07 IST = 00:37 UT
    assert!(
        (2_460_953.524..2_460_953.531).contains(&rise),
        "sunrise = {rise}, expected ~2460953.527"
    );
}

#[test]
fn bengaluru_sunset_2025_10_05() {
    let eph = AnalyticEphemeris::default();
    let loc = bengaluru();
    let noon = approximate_local_noon_jd(JD_2025_10_05, loc.longitude_deg);
    let set = event_jd(
        compute_rise_set(&eph, &loc, RiseSetEvent::Sunset, noon, &RiseSetConfig::default())
            .expect("sunset"),
    );
    // ~18:07 IST = 12:37 UT
    assert!(
        (2_460_954.022..2_460_954.031).contains(&set),
        "sunset = {set}, expected ~2460954.026"
    );
}

#[test]
fn coventry_sunrise_2025_10_05() {
    let eph = AnalyticEphemeris::default();
    let loc = GeoLocation::new(52.40656, -1.51217, 0.0);
    let noon = approximate_local_noon_jd(JD_2025_10_05, loc.longitude_deg);
    let rise = event_jd(
        compute_rise_set(&eph, &loc, RiseSetEvent::Sunrise, noon, &RiseSetConfig::default())
            .expect("sunrise"),
    );
    // ~07:15 BST = 06:15 UT
    assert!(
        (2_460_953.755..2_460_953.766).contains(&rise),
        "sunrise = {rise}, expected ~2460953.760"
    );
}

#[test]
fn polar_night_never_rises() {
    let eph = AnalyticEphemeris::default();
    let loc = GeoLocation::new(85.0, 0.0, 0.0);
    // 2025-12-21
    let noon = approximate_local_noon_jd(2_461_030.5, loc.longitude_deg);
    let r = compute_rise_set(&eph, &loc, RiseSetEvent::Sunrise, noon, &RiseSetConfig::default())
        .expect("no ephemeris error");
    assert_eq!(r, RiseSetResult::NeverRises);
}

#[test]
fn midnight_sun_never_sets() {
    let eph = AnalyticEphemeris::default();
    let loc = GeoLocation::new(85.0, 0.0, 0.0);
    // 2025-06-21
    let noon = approximate_local_noon_jd(2_460_847.5, loc.longitude_deg);
    let r = compute_rise_set(&eph, &loc, RiseSetEvent::Sunset, noon, &RiseSetConfig::default())
        .expect("no ephemeris error");
    assert_eq!(r, RiseSetResult::NeverSets);
}

#[test]
fn altitude_makes_sunrise_earlier() {
    let eph = AnalyticEphemeris::default();
    let sea = bengaluru();
    let hill = GeoLocation::new(12.9719, 77.593, 2000.0);
    let noon = approximate_local_noon_jd(JD_2025_10_05, sea.longitude_deg);
    let cfg = RiseSetConfig::default();
    let r_sea = event_jd(compute_rise_set(&eph, &sea, RiseSetEvent::Sunrise, noon, &cfg).expect("sea"));
    let r_hill =
        event_jd(compute_rise_set(&eph, &hill, RiseSetEvent::Sunrise, noon, &cfg).expect("hill"));
    assert!(r_hill < r_sea, "hill {r_hill} should precede sea level {r_sea}");
}

#[test]
fn bengaluru_moonrise_afternoon() {
    let eph = AnalyticEphemeris::default();
    let loc = bengaluru();
    let noon = approximate_local_noon_jd(JD_2025_10_05, loc.longitude_deg);
    let rise = event_jd(
        compute_rise_set(&eph, &loc, RiseSetEvent::Moonrise, noon, &RiseSetConfig::default())
            .expect("moonrise"),
    );
    let local_hours = (rise - JD_2025_10_05) * 24.0 + 5.5;
    // Waxing gibbous Moon rises in the late afternoon.
    assert!(
        (15.0..18.5).contains(&local_hours),
        "moonrise at {local_hours:.2} h IST"
    );
}

#[test]
fn repeated_calls_are_identical() {
    let eph = AnalyticEphemeris::default();
    let loc = bengaluru();
    let noon = approximate_local_noon_jd(JD_2025_10_05, loc.longitude_deg);
    let cfg = RiseSetConfig::default();
    let a = compute_rise_set(&eph, &loc, RiseSetEvent::Moonset, noon, &cfg).expect("a");
    let b = compute_rise_set(&eph, &loc, RiseSetEvent::Moonset, noon, &cfg).expect("b");
    assert_eq!(a, b);
}

#[test]
fn out_of_span_is_an_error() {
    let eph = AnalyticEphemeris::default();
    let loc = bengaluru();
    let r = compute_rise_set(&eph, &loc, RiseSetEvent::Sunrise, 2_300_000.0, &RiseSetConfig::default());
    assert!(r.is_err());
}
