//! Julian Day ⇄ calendar conversion.
//!
//! Proleptic Gregorian calendar throughout; the algorithms follow the
//! standard Fliegel–Van Flandern / Meeus formulation.

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date with fractional day to a Julian Day.
///
/// `day` may carry a fraction: `calendar_to_jd(2000, 1, 1.5) == 2451545.0`.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Julian Day at 0h UT of a civil date, with range validation.
pub fn civil_date_to_jd(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return Err(TimeError::InvalidDate { year, month, day });
    }
    Ok(calendar_to_jd(year, month, day as f64))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap { 29 } else { 28 }
        }
    }
}

/// Convert a Julian Day to `(year, month, fractional day)`.
pub fn jd_to_calendar(jd: f64) -> Result<(i32, u32, f64), TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFiniteJd);
    }
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    Ok((year as i32, month as u32, day))
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Decimal year, e.g. 2025.76 for early October 2025.
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// Day of week for the civil day containing `jd` (0 = Sunday … 6 = Saturday).
///
/// `jd` is interpreted in the frame whose midnight falls at `.5`, so callers
/// wanting a local weekday pass a JD shifted by the local UTC offset.
pub fn weekday_from_jd(jd: f64) -> u8 {
    // JD 0.5 (midnight starting JD 1) was a Tuesday.
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}
