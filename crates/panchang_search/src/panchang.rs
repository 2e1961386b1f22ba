//! Panchangam entry points.
//!
//! One computation runs the horizon solver, resolves the four unit kinds
//! over the Hindu day (concurrently when configured), normalizes each
//! sequence, derives the muhurats, and stamps every instant with the
//! location's UTC offset.

use std::thread;

use chrono::NaiveDate;
use panchang_core::{AnalyticEphemeris, CachedEphemeris, Ephemeris};
use panchang_time::weekday_from_jd;
use panchang_vedic_base::{ALL_UNIT_KINDS, UnitKind, VARJYAM_TABLE, Vaar};
use tracing::{debug, debug_span};

use crate::boundary::resolve_units;
use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::horizon::{DayHorizon, day_horizon};
use crate::instant::Instant;
use crate::location::Location;
use crate::muhurat::{MuhuratInputs, MuhuratSet, derive_muhurats};
use crate::panchang_types::{
    AuspiciousPeriods, CalendricalUnit, HinduDay, InauspiciousPeriods, PanchangamResult,
    PeriodsResult, Weekday,
};
use crate::skip::{classify_sunrise_anomalies, detect_skips};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Everything one Hindu day produces, localized.
struct DayComputation {
    horizon: DayHorizon,
    hindu_day: HinduDay,
    weekday: Vaar,
    /// Indexed like `ALL_UNIT_KINDS`.
    units: [Vec<CalendricalUnit>; 4],
    muhurats: MuhuratSet,
}

impl DayComputation {
    fn units(&self, kind: UnitKind) -> &[CalendricalUnit] {
        let slot = match kind {
            UnitKind::Tithi => 0,
            UnitKind::Nakshatra => 1,
            UnitKind::Karana => 2,
            UnitKind::Yoga => 3,
        };
        &self.units[slot]
    }

    fn low_confidence(&self) -> bool {
        self.units.iter().flatten().any(|u| u.low_confidence)
    }

    /// Unit in force at sunrise.
    fn at_sunrise(&self, kind: UnitKind) -> Result<CalendricalUnit, SearchError> {
        self.units(kind)
            .iter()
            .find(|u| !u.skipped && u.contains(self.hindu_day.start_jd()))
            .cloned()
            .ok_or_else(|| SearchError::InvariantViolation {
                kind,
                detail: "no unit prevails at sunrise".to_string(),
            })
    }
}

/// Resolve one kind and normalize its sequence.
fn resolve_kind<E: Ephemeris + ?Sized>(
    eph: &E,
    kind: UnitKind,
    day: &HinduDay,
    config: &PanchangConfig,
) -> Result<Vec<CalendricalUnit>, SearchError> {
    let mut units = detect_skips(resolve_units(eph, kind, day, &config.resolver)?)?;
    classify_sunrise_anomalies(&mut units, day);
    Ok(units)
}

fn resolve_all<E: Ephemeris + ?Sized>(
    eph: &E,
    day: &HinduDay,
    config: &PanchangConfig,
) -> [Result<Vec<CalendricalUnit>, SearchError>; 4] {
    if !config.parallel {
        return ALL_UNIT_KINDS.map(|kind| resolve_kind(eph, kind, day, config));
    }
    thread::scope(|scope| {
        let handles =
            ALL_UNIT_KINDS.map(|kind| scope.spawn(move || resolve_kind(eph, kind, day, config)));
        handles.map(|h| {
            h.join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
        })
    })
}

fn compute_day<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &Location,
    date: NaiveDate,
    config: &PanchangConfig,
) -> Result<DayComputation, SearchError> {
    let _span = debug_span!("panchangam", %date, location = %location.name).entered();
    location.validate()?;
    config.validate()?;

    let cached = CachedEphemeris::new(eph);
    let horizon = day_horizon(&cached, location, date, &config.riseset)?;
    let tz = location.time_zone;
    let offset_at = |jd: f64| tz.offset_seconds_at(jd);

    let hindu_day = HinduDay {
        sunrise: Instant::utc(horizon.sunrise),
        next_sunrise: Instant::utc(horizon.next_sunrise),
    };

    let [tithis, nakshatras, karanas, yogas] = resolve_all(&cached, &hindu_day, config);
    let (tithis, nakshatras, karanas, yogas) = (tithis?, nakshatras?, karanas?, yogas?);

    let local_sunrise = horizon.sunrise + f64::from(offset_at(horizon.sunrise)) / SECONDS_PER_DAY;
    let weekday = weekday_from_jd(local_sunrise);
    let muhurats = derive_muhurats(
        &MuhuratInputs {
            sunrise: horizon.sunrise,
            sunset: horizon.sunset,
            next_sunrise: horizon.next_sunrise,
            weekday,
        },
        &nakshatras,
        &config.muhurat,
        &VARJYAM_TABLE,
    )?;

    let stats = cached.stats();
    debug!(
        evaluations = stats.evaluations,
        cache_hits = stats.cache_hits,
        "panchangam computed"
    );

    Ok(DayComputation {
        horizon,
        hindu_day: HinduDay {
            sunrise: tz.instant(horizon.sunrise),
            next_sunrise: tz.instant(horizon.next_sunrise),
        },
        weekday: Vaar::from_weekday(weekday),
        units: [tithis, nakshatras, karanas, yogas]
            .map(|list| list.into_iter().map(|u| u.localized(offset_at)).collect()),
        muhurats: muhurats.localized(offset_at),
    })
}

/// Panchangam summary for `date` at `location`: the units prevailing at
/// sunrise and the day's muhurats.
///
/// # Errors
/// * [`SearchError::Ephemeris`] when the date lies outside the provider span
/// * [`SearchError::NoRiseOrSet`] when the Sun does not rise or set
/// * [`SearchError::InvariantViolation`] on an impossible unit sequence
pub fn compute_panchangam<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &Location,
    date: NaiveDate,
    config: &PanchangConfig,
) -> Result<PanchangamResult, SearchError> {
    let day = compute_day(eph, location, date, config)?;
    let tz = location.time_zone;
    let m = &day.muhurats;

    Ok(PanchangamResult {
        location: location.clone(),
        date,
        weekday: Weekday(day.weekday),
        sunrise: day.hindu_day.sunrise,
        sunset: tz.instant(day.horizon.sunset),
        moonrise: day.horizon.moonrise.map(|jd| tz.instant(jd)),
        moonset: day.horizon.moonset.map(|jd| tz.instant(jd)),
        next_sunrise: day.hindu_day.next_sunrise,
        tithi: day.at_sunrise(UnitKind::Tithi)?,
        nakshatra: day.at_sunrise(UnitKind::Nakshatra)?,
        karana: day.at_sunrise(UnitKind::Karana)?,
        yoga: day.at_sunrise(UnitKind::Yoga)?,
        inauspicious: InauspiciousPeriods {
            rahu: m.rahu.clone(),
            gulika: m.gulika.clone(),
            yamaganda: m.yamaganda.clone(),
            varjyam: m.varjyam.clone(),
        },
        auspicious: AuspiciousPeriods {
            abhijit: m.abhijit.clone(),
            brahma: m.brahma.clone(),
            pradosha: m.pradosha.clone(),
        },
        low_confidence: day.low_confidence(),
    })
}

/// Every unit and window of the Hindu day starting at sunrise on `date`.
pub fn compute_panchangam_periods<E: Ephemeris + ?Sized>(
    eph: &E,
    location: &Location,
    date: NaiveDate,
    config: &PanchangConfig,
) -> Result<PeriodsResult, SearchError> {
    let day = compute_day(eph, location, date, config)?;
    let tz = location.time_zone;
    let low_confidence = day.low_confidence();
    let periods = day.muhurats.all();
    let [tithis, nakshatras, karanas, yogas] = day.units;

    Ok(PeriodsResult {
        location: location.clone(),
        date,
        weekday: Weekday(day.weekday),
        sunrise: day.hindu_day.sunrise,
        sunset: tz.instant(day.horizon.sunset),
        moonrise: day.horizon.moonrise.map(|jd| tz.instant(jd)),
        moonset: day.horizon.moonset.map(|jd| tz.instant(jd)),
        next_sunrise: day.hindu_day.next_sunrise,
        hindu_day: day.hindu_day,
        tithis,
        nakshatras,
        karanas,
        yogas,
        periods,
        low_confidence,
    })
}

/// Panchangam for bare coordinates with the default provider and a
/// longitude-derived time zone.
pub fn compute_panchangam_at(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
) -> Result<PanchangamResult, SearchError> {
    let location = Location::from_coordinates(latitude, longitude)?;
    let config = PanchangConfig::default();
    let eph = AnalyticEphemeris::new(config.ephemeris)?;
    compute_panchangam(&eph, &location, date, &config)
}
