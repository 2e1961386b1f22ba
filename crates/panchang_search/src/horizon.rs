//! Rise and set instants for a civil date.

use chrono::{Datelike, NaiveDate};
use panchang_core::Ephemeris;
use panchang_time::civil_date_to_jd;
use panchang_vedic_base::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, approximate_local_noon_jd,
    compute_rise_set,
};
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::location::Location;

/// Horizon events anchoring one civil date, as JD (UT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayHorizon {
    pub sunrise: f64,
    pub sunset: f64,
    pub next_sunrise: f64,
    /// `None` when the Moon does not rise during the civil date.
    pub moonrise: Option<f64>,
    /// `None` when the Moon does not set during the civil date.
    pub moonset: Option<f64>,
}

/// Sunrise, sunset and next sunrise, plus the Moon's crossings that fall
/// inside the local civil date.
pub fn day_horizon<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &Location,
    date: NaiveDate,
    config: &RiseSetConfig,
) -> Result<DayHorizon, SearchError> {
    let geo = location.geo();
    let next_date = date
        .succ_opt()
        .ok_or_else(|| SearchError::InvalidDate(format!("{date} has no successor")))?;
    let civil_day = (
        location.time_zone.local_midnight_jd(date)?,
        location.time_zone.local_midnight_jd(next_date)?,
    );
    let jd_0h = civil_date_to_jd(date.year(), date.month(), date.day())?;
    let noon = civil_noon_jd(approximate_local_noon_jd(jd_0h, geo.longitude_deg), civil_day.0);

    let sunrise = sun_event(eph, &geo, RiseSetEvent::Sunrise, noon, config)?;
    let sunset = sun_event(eph, &geo, RiseSetEvent::Sunset, noon, config)?;
    let next_sunrise = sun_event(eph, &geo, RiseSetEvent::Sunrise, noon + 1.0, config)?;
    if !(sunrise < sunset && sunset < next_sunrise) {
        return Err(SearchError::NoRiseOrSet {
            event: RiseSetEvent::Sunset,
            reason: "sunrise and sunset out of order",
        });
    }

    let moonrise = moon_event(eph, &geo, RiseSetEvent::Moonrise, noon, civil_day, config)?;
    let moonset = moon_event(eph, &geo, RiseSetEvent::Moonset, noon, civil_day, config)?;

    debug!(sunrise, sunset, next_sunrise, ?moonrise, ?moonset, "horizon events");
    Ok(DayHorizon {
        sunrise,
        sunset,
        next_sunrise,
        moonrise,
        moonset,
    })
}

/// Moves the mean-solar noon of the UT calendar date by whole days so it
/// lands on the civil date starting at `local_midnight`.
///
/// Zones east of the date line (Tonga, Kiritimati) run more than 12 h ahead
/// of their longitude's mean time; without the shift their search centres on
/// the following civil day.
pub(crate) fn civil_noon_jd(longitude_noon: f64, local_midnight: f64) -> f64 {
    longitude_noon + (local_midnight + 0.5 - longitude_noon).round()
}

fn sun_event<E: Ephemeris + ?Sized>(
    eph: &E,
    geo: &GeoLocation,
    event: RiseSetEvent,
    noon: f64,
    config: &RiseSetConfig,
) -> Result<f64, SearchError> {
    match compute_rise_set(eph, geo, event, noon, config)? {
        RiseSetResult::Event { jd_ut, .. } => Ok(jd_ut),
        RiseSetResult::NeverRises => Err(SearchError::NoRiseOrSet {
            event,
            reason: "sun stays below the horizon",
        }),
        RiseSetResult::NeverSets => Err(SearchError::NoRiseOrSet {
            event,
            reason: "sun stays above the horizon",
        }),
        RiseSetResult::NoEvent { reason } => Err(SearchError::NoRiseOrSet { event, reason }),
    }
}

/// Earliest Moon crossing inside `[window.0, window.1)`.
///
/// The transit nearest local noon and its two neighbours each yield a
/// candidate; the Moon's ~50 minute daily lag means one civil date may hold
/// none of them.
fn moon_event<E: Ephemeris + ?Sized>(
    eph: &E,
    geo: &GeoLocation,
    event: RiseSetEvent,
    noon: f64,
    window: (f64, f64),
    config: &RiseSetConfig,
) -> Result<Option<f64>, SearchError> {
    let mut best: Option<f64> = None;
    for offset in [0.0, -1.0, 1.0] {
        if let RiseSetResult::Event { jd_ut, .. } =
            compute_rise_set(eph, geo, event, noon + offset, config)?
        {
            if jd_ut >= window.0 && jd_ut < window.1 && best.is_none_or(|b| jd_ut < b) {
                best = Some(jd_ut);
            }
        }
    }
    if best.is_none() {
        warn!(event = event.name(), "no lunar crossing on the civil date");
    }
    Ok(best)
}
