//! Absolute instants with a display offset.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Serialize, Serializer};

/// Julian Day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A point in time as a Julian Day (UT) plus the UTC offset used to show it.
///
/// Arithmetic happens on `jd`; the offset only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    pub jd: f64,
    pub utc_offset_seconds: i32,
}

impl Instant {
    pub fn new(jd: f64, utc_offset_seconds: i32) -> Self {
        Self {
            jd,
            utc_offset_seconds,
        }
    }

    /// Instant displayed in UTC.
    pub fn utc(jd: f64) -> Self {
        Self::new(jd, 0)
    }

    pub fn with_offset(self, utc_offset_seconds: i32) -> Self {
        Self::new(self.jd, utc_offset_seconds)
    }

    pub fn from_datetime<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> Self {
        let offset = dt.offset().fix().local_minus_utc();
        Self::new(
            UNIX_EPOCH_JD + dt.timestamp_millis() as f64 / MILLIS_PER_DAY,
            offset,
        )
    }

    /// UTC date-time, rounded to the millisecond.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let millis = ((self.jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
        if !millis.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// Local date-time at the carried offset.
    pub fn to_local(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.utc_offset_seconds)?;
        Some(self.to_utc()?.with_timezone(&offset))
    }

    /// Local time rounded to the nearest second.
    fn local_rounded(&self) -> Option<DateTime<FixedOffset>> {
        let local = self.to_local()?;
        let millis = local.timestamp_subsec_millis();
        let whole = local - chrono::Duration::milliseconds(i64::from(millis));
        Some(if millis >= 500 {
            whole + chrono::Duration::seconds(1)
        } else {
            whole
        })
    }

    /// RFC 3339 with the local offset, whole seconds.
    pub fn rfc3339(&self) -> String {
        match self.local_rounded() {
            Some(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, false),
            None => format!("JD {}", self.jd),
        }
    }

    /// 24-hour `HH:MM` local time.
    pub fn hhmm(&self) -> String {
        match self.local_rounded() {
            Some(dt) => dt.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }

    /// 12-hour `h:MM AM` local time.
    pub fn hhmm_12h(&self) -> String {
        match self.local_rounded() {
            Some(dt) => dt.format("%-I:%M %p").to_string(),
            None => "--:--".to_string(),
        }
    }

    /// Local date and 12-hour time, e.g. `Oct 05 3:04 PM`.
    pub fn date_time_12h(&self) -> String {
        match self.local_rounded() {
            Some(dt) => dt.format("%b %d %-I:%M %p").to_string(),
            None => format!("JD {}", self.jd),
        }
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IST: i32 = 5 * 3600 + 1800;

    #[test]
    fn unix_epoch() {
        let i = Instant::utc(UNIX_EPOCH_JD);
        assert_eq!(i.rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn local_rendering() {
        // 2025-10-05 09:34:00 UT = 15:04 IST
        let jd = 2_460_953.5 + (9.0 * 60.0 + 34.0) / 1440.0;
        let i = Instant::new(jd, IST);
        assert_eq!(i.hhmm(), "15:04");
        assert_eq!(i.hhmm_12h(), "3:04 PM");
        assert_eq!(i.rfc3339(), "2025-10-05T15:04:00+05:30");
        assert_eq!(i.date_time_12h(), "Oct 05 3:04 PM");
    }

    #[test]
    fn morning_twelve_hour() {
        // 00:37 UT = 06:07 IST
        let jd = 2_460_953.5 + 37.0 / 1440.0;
        assert_eq!(Instant::new(jd, IST).hhmm_12h(), "6:07 AM");
        assert_eq!(Instant::new(jd, IST).hhmm(), "06:07");
    }

    #[test]
    fn rounds_to_nearest_second() {
        let jd = 2_460_953.5 + 59.6 / 86_400.0;
        assert_eq!(Instant::utc(jd).rfc3339(), "2025-10-05T00:01:00+00:00");
    }

    #[test]
    fn datetime_roundtrip() {
        let jd = 2_460_953.75;
        let back = Instant::from_datetime(&Instant::new(jd, IST).to_local().expect("local"));
        assert!((back.jd - jd).abs() < 1e-8);
        assert_eq!(back.utc_offset_seconds, IST);
    }

    #[test]
    fn serializes_as_rfc3339() {
        let i = Instant::utc(UNIX_EPOCH_JD + 0.5);
        let json = serde_json::to_string(&i).expect("json");
        assert_eq!(json, "\"1970-01-01T12:00:00+00:00\"");
    }
}
