//! Result types for panchangam computation.

use chrono::NaiveDate;
use panchang_vedic_base::{UnitKind, Vaar};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::instant::Instant;
use crate::location::Location;

/// How a unit relates to the sunrises bounding its Hindu day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SunriseAnomaly {
    /// Begins after sunrise and ends before the next; never prevails at a sunrise.
    Kshaya,
    /// Prevails at both sunrises.
    Adhika,
}

/// One occurrence of a tithi, nakshatra, karana or yoga.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendricalUnit {
    pub kind: UnitKind,
    /// 0-based index modulo the kind's cardinality.
    pub index: u8,
    pub name: String,
    /// Start clipped to the Hindu day.
    pub start: Instant,
    /// End clipped to the Hindu day.
    pub end: Instant,
    /// Unclipped start boundary.
    pub full_start: Instant,
    /// Unclipped end boundary.
    pub full_end: Instant,
    /// Synthetic zero-duration entry for an index the sequence jumped over.
    pub skipped: bool,
    /// A boundary fell back to linear interpolation.
    pub low_confidence: bool,
    pub sunrise_anomaly: Option<SunriseAnomaly>,
}

impl CalendricalUnit {
    /// Re-stamp every instant with the offset in force at it.
    pub fn localized(mut self, offset_at: impl Fn(f64) -> i32) -> Self {
        for instant in [
            &mut self.start,
            &mut self.end,
            &mut self.full_start,
            &mut self.full_end,
        ] {
            *instant = instant.with_offset(offset_at(instant.jd));
        }
        self
    }

    /// Whether `jd` lies in `[full_start, full_end)`.
    pub fn contains(&self, jd: f64) -> bool {
        self.full_start.jd <= jd && jd < self.full_end.jd
    }
}

impl Serialize for CalendricalUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CalendricalUnit", 11)?;
        s.serialize_field("kind", &self.kind)?;
        s.serialize_field("index", &self.index)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("start", &self.full_start)?;
        s.serialize_field("end", &self.full_end)?;
        s.serialize_field("start_formatted", &self.full_start.date_time_12h())?;
        s.serialize_field("end_formatted", &self.full_end.date_time_12h())?;
        s.serialize_field("skipped", &self.skipped)?;
        s.serialize_field("low_confidence", &self.low_confidence)?;
        s.serialize_field("sunrise_anomaly", &self.sunrise_anomaly)?;
        s.serialize_field(
            "within_day",
            &[self.start.rfc3339(), self.end.rfc3339()],
        )?;
        s.end()
    }
}

/// The interval from one sunrise to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HinduDay {
    pub sunrise: Instant,
    pub next_sunrise: Instant,
}

impl HinduDay {
    pub fn start_jd(&self) -> f64 {
        self.sunrise.jd
    }

    pub fn end_jd(&self) -> f64 {
        self.next_sunrise.jd
    }

    /// Whether `[start, end)` overlaps the day.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        end > self.start_jd() && start < self.end_jd()
    }
}

/// A named muhurat window.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodWindow {
    pub label: String,
    pub start: Instant,
    pub end: Instant,
}

impl Serialize for PeriodWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("PeriodWindow", 5)?;
        s.serialize_field("label", &self.label)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.serialize_field("start_local", &self.start.hhmm())?;
        s.serialize_field("end_local", &self.end.hhmm())?;
        s.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InauspiciousPeriods {
    pub rahu: PeriodWindow,
    pub gulika: PeriodWindow,
    pub yamaganda: PeriodWindow,
    /// Zero, one or two windows.
    pub varjyam: Vec<PeriodWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuspiciousPeriods {
    pub abhijit: PeriodWindow,
    pub brahma: PeriodWindow,
    pub pradosha: PeriodWindow,
}

/// Weekday with both naming schemes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weekday(pub Vaar);

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Weekday", 2)?;
        s.serialize_field("vaar", self.0.name())?;
        s.serialize_field("english", self.0.english_name())?;
        s.end()
    }
}

/// Summary panchangam for a civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangamResult {
    pub location: Location,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub sunrise: Instant,
    pub sunset: Instant,
    pub moonrise: Option<Instant>,
    pub moonset: Option<Instant>,
    pub next_sunrise: Instant,
    /// Units prevailing at sunrise.
    pub tithi: CalendricalUnit,
    pub nakshatra: CalendricalUnit,
    pub karana: CalendricalUnit,
    pub yoga: CalendricalUnit,
    pub inauspicious: InauspiciousPeriods,
    pub auspicious: AuspiciousPeriods,
    /// Any reported boundary fell back to linear interpolation.
    pub low_confidence: bool,
}

/// Every unit and window of the Hindu day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodsResult {
    pub location: Location,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub sunrise: Instant,
    pub sunset: Instant,
    pub moonrise: Option<Instant>,
    pub moonset: Option<Instant>,
    pub next_sunrise: Instant,
    pub hindu_day: HinduDay,
    pub tithis: Vec<CalendricalUnit>,
    pub nakshatras: Vec<CalendricalUnit>,
    pub karanas: Vec<CalendricalUnit>,
    pub yogas: Vec<CalendricalUnit>,
    /// Day and night segment periods plus the fixed muhurats and Varjyam.
    pub periods: Vec<PeriodWindow>,
    pub low_confidence: bool,
}

impl PeriodsResult {
    pub fn units(&self, kind: UnitKind) -> &[CalendricalUnit] {
        match kind {
            UnitKind::Tithi => &self.tithis,
            UnitKind::Nakshatra => &self.nakshatras,
            UnitKind::Karana => &self.karanas,
            UnitKind::Yoga => &self.yogas,
        }
    }
}
