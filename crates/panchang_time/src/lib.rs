//! Time-scale helpers for the panchang engine.
//!
//! This crate provides:
//! - Julian Day ⇄ proleptic Gregorian calendar conversions
//! - ΔT (TT − UT) from piecewise polynomial fits
//! - Earth Rotation Angle, mean and apparent Greenwich sidereal time

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use delta_t::{delta_t_seconds, jd_ut_to_jd_tt};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, civil_date_to_jd, decimal_year, jd_to_calendar,
    jd_to_centuries, weekday_from_jd,
};
pub use sidereal::{
    apparent_sidereal_time_rad, earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad,
};
