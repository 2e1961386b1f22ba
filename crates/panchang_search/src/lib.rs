//! Panchangam computation: calendrical unit boundaries, skip handling,
//! muhurats and the request-level entry points.
//!
//! This crate provides:
//! - Boundary resolution for tithi, nakshatra, karana and yoga over a Hindu day
//! - Skip (kshaya) and repeat (adhika) normalization of unit sequences
//! - Rahu/Gulika/Yamaganda, Abhijit, Brahma, Pradosha and Varjyam windows
//! - Civil-date sunrise/sunset/moonrise/moonset anchoring
//! - Time zone handling and a small city catalogue
//!
//! All instants are Julian Dates in UT internally and carry the location's
//! UTC offset only for presentation.

pub mod boundary;
pub mod config;
pub mod error;
pub mod horizon;
pub mod instant;
pub mod interpolation;
pub mod location;
pub mod muhurat;
pub mod panchang;
pub mod panchang_types;
pub mod sidereal;
pub mod skip;

#[cfg(test)]
mod test_support;

pub use boundary::resolve_units;
pub use config::{MuhuratConfig, PanchangConfig, ResolverConfig};
pub use error::SearchError;
pub use horizon::{DayHorizon, day_horizon};
pub use instant::Instant;
pub use location::{
    CITIES, City, Location, NEAREST_CITY_RADIUS_KM, TimeZoneSpec, find_city, nearest_city,
};
pub use muhurat::{
    MAX_VARJYAM_WINDOWS, MuhuratInputs, MuhuratSet, brahma_window, derive_muhurats,
    pradosha_window, varjyam_windows,
};
pub use panchang::{compute_panchangam, compute_panchangam_at, compute_panchangam_periods};
pub use panchang_types::{
    AuspiciousPeriods, CalendricalUnit, HinduDay, InauspiciousPeriods, PanchangamResult,
    PeriodWindow, PeriodsResult, SunriseAnomaly, Weekday,
};
pub use sidereal::{angle_at, elongation_at, moon_sidereal_at, sidereal_sum_at};
pub use skip::{classify_sunrise_anomalies, detect_skips};
