//! Sunrise/sunset and moonrise/moonset computation.
//!
//! The first guess comes from the hour angle at the target altitude
//! measured from the local transit nearest the approximate local noon.
//! Newton steps on `altitude(t) − h0(t)` then refine it, recomputing the
//! body position, its size and the target altitude at every step.
//!
//! Sources: standard spherical astronomy (Meeus ch. 15, Montenbruck &
//! Pfleger). Sidereal time is apparent (GAST), matching the apparent
//! right ascension returned by the ephemeris.

use std::f64::consts::{PI, TAU};

use panchang_core::{Body, Ephemeris, altitude_rad, lunar::horizontal_parallax_deg};
use panchang_time::{apparent_sidereal_time_rad, local_sidereal_time_rad};
use tracing::{debug, trace};

use crate::error::VedicError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};

/// IAU 2015 nominal solar radius in km (Resolution B3).
const SUN_RADIUS_KM: f64 = 696_000.0;

/// Step for the numerical altitude derivative, in days (~86 s).
const DERIVATIVE_STEP_DAYS: f64 = 1.0e-3;

/// Newton may not wander further than this from the first guess.
const MAX_DRIFT_DAYS: f64 = 0.5;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Solar angular semidiameter in degrees from Earth–Sun distance.
fn solar_semidiameter_deg(distance_km: f64) -> f64 {
    (SUN_RADIUS_KM / distance_km).asin().to_degrees()
}

/// Rate of change of the body's hour angle in rad/day.
fn hour_angle_rate(body: Body) -> f64 {
    match body {
        Body::Sun => TAU,
        Body::Moon => TAU * 0.966_14,
    }
}

fn wrap_pm_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Hour angle, declination, and `h0` (all radians) of the event's body.
fn horizon_state<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut: f64,
    config: &RiseSetConfig,
) -> Result<(f64, f64, f64), VedicError> {
    let body = event.body();
    let eq = eph.equatorial(jd_ut, body)?;
    let nut = eph.nutation(jd_ut)?;
    let gast = apparent_sidereal_time_rad(
        jd_ut,
        nut.longitude_deg.to_radians(),
        nut.true_obliquity_deg().to_radians(),
    );
    let lst = local_sidereal_time_rad(gast, location.longitude_rad());
    let ha = wrap_pm_pi(lst - eq.ra_rad);

    let size_deg = match body {
        Body::Sun => solar_semidiameter_deg(eq.distance_km),
        Body::Moon => horizontal_parallax_deg(eq.distance_km),
    };
    let h0 = config
        .target_altitude_deg(event, size_deg, location.altitude_m)
        .to_radians();
    Ok((ha, eq.dec_rad, h0))
}

/// Altitude above the event's target altitude, radians.
fn altitude_excess<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut: f64,
    config: &RiseSetConfig,
) -> Result<f64, VedicError> {
    let (ha, dec, h0) = horizon_state(eph, location, event, jd_ut, config)?;
    Ok(altitude_rad(ha, dec, location.latitude_rad()) - h0)
}

/// Compute a single rise/set event near the local transit following
/// `jd_ut_noon`.
///
/// # Arguments
/// * `eph`: provider for the body position and nutation
/// * `location`: observer geographic location
/// * `event`: which crossing to find
/// * `jd_ut_noon`: approximate local noon on the desired date (UT JD);
///   see [`approximate_local_noon_jd`]
/// * `config`: refraction, dip and iteration parameters
///
/// # Returns
/// * `RiseSetResult::Event` with the event time in JD UT
/// * `RiseSetResult::NeverRises` / `NeverSets` when the hour angle at the
///   target altitude does not exist
/// * `RiseSetResult::NoEvent` when the Newton refinement fails to settle
pub fn compute_rise_set<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    let phi = location.latitude_rad();
    let rate = hour_angle_rate(event.body());

    let (ha_noon, dec, h0) = horizon_state(eph, location, event, jd_ut_noon, config)?;
    let cos_h0 = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());

    // Polar check
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    let semi_arc = cos_h0.acos();
    let transit = jd_ut_noon - ha_noon / rate;
    let first_guess = if event.is_rising() {
        transit - semi_arc / rate
    } else {
        transit + semi_arc / rate
    };

    let mut t = first_guess;
    for iteration in 0..config.max_iterations {
        let f = altitude_excess(eph, location, event, t, config)?;
        let f_ahead = altitude_excess(eph, location, event, t + DERIVATIVE_STEP_DAYS, config)?;
        let slope = (f_ahead - f) / DERIVATIVE_STEP_DAYS;

        if slope.abs() < 1.0e-9 {
            return Ok(no_event("altitude slope vanished"));
        }
        if (event.is_rising() && slope < 0.0) || (!event.is_rising() && slope > 0.0) {
            return Ok(no_event("converged on the wrong crossing"));
        }

        let step = -f / slope;
        t += step;
        trace!(event = event.name(), iteration, jd = t, step, "rise/set newton step");

        if (t - first_guess).abs() > MAX_DRIFT_DAYS {
            return Ok(no_event("refinement drifted from the estimate"));
        }
        if step.abs() < config.tolerance_days {
            debug!(event = event.name(), jd = t, iterations = iteration + 1, "rise/set converged");
            return Ok(RiseSetResult::Event { jd_ut: t, event });
        }
    }

    Ok(no_event("iteration limit reached"))
}

fn no_event(reason: &'static str) -> RiseSetResult {
    debug!(reason, "rise/set refinement gave up");
    RiseSetResult::NoEvent { reason }
}
