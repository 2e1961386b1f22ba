//! Weekday-keyed muhurta tables and the Varjyam table.
//!
//! Day periods split sunrise→sunset into eight equal segments and pick one
//! per weekday. Night periods split sunset→next sunrise the same way and
//! use the day row of the weekday five days later.

use serde::Serialize;

use crate::error::VedicError;
use crate::nakshatra::Nakshatra;

/// Equal segments in a day or night half.
pub const SEGMENTS_PER_HALF: u8 = 8;

/// Muhurtas between sunrise and sunset.
pub const MUHURTAS_PER_DAY: u8 = 15;

/// 1-based muhurta of the fifteen that is Abhijit.
pub const ABHIJIT_MUHURTA: u8 = 8;

/// Ghatis in one nakshatra span.
pub const GHATIS_PER_SPAN: f64 = 60.0;

/// Rahu Kalam segment, Sunday..Saturday.
const RAHU_SEGMENTS: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];
/// Gulika Kalam segment, Sunday..Saturday.
const GULIKA_SEGMENTS: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];
/// Yamaganda segment, Sunday..Saturday.
const YAMAGANDA_SEGMENTS: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// Segment-based inauspicious periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SegmentPeriod {
    RahuKaal,
    Gulika,
    Yamaganda,
}

pub const ALL_SEGMENT_PERIODS: [SegmentPeriod; 3] = [
    SegmentPeriod::RahuKaal,
    SegmentPeriod::Gulika,
    SegmentPeriod::Yamaganda,
];

impl SegmentPeriod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kalam",
            Self::Gulika => "Gulika Kalam",
            Self::Yamaganda => "Yamaganda",
        }
    }

    fn table(self) -> &'static [u8; 7] {
        match self {
            Self::RahuKaal => &RAHU_SEGMENTS,
            Self::Gulika => &GULIKA_SEGMENTS,
            Self::Yamaganda => &YAMAGANDA_SEGMENTS,
        }
    }

    /// 1-based day segment for `weekday` (0 = Sunday).
    pub fn day_segment(self, weekday: u8) -> Result<u8, VedicError> {
        self.table()
            .get(weekday as usize)
            .copied()
            .ok_or(VedicError::IndexOutOfRange {
                table: self.name(),
                index: weekday,
            })
    }

    /// 1-based night segment for `weekday` (0 = Sunday).
    pub fn night_segment(self, weekday: u8) -> Result<u8, VedicError> {
        if weekday > 6 {
            return Err(VedicError::IndexOutOfRange {
                table: self.name(),
                index: weekday,
            });
        }
        self.day_segment((weekday + 5) % 7)
    }
}

/// Bounds of the 1-based `segment` of `parts` equal parts of `[start, end]`.
pub fn segment_bounds(start: f64, end: f64, segment: u8, parts: u8) -> (f64, f64) {
    let len = (end - start) / parts as f64;
    let s = start + len * (segment.saturating_sub(1)) as f64;
    (s, s + len)
}

/// Abhijit muhurta: the eighth of fifteen between sunrise and sunset.
pub fn abhijit_bounds(sunrise: f64, sunset: f64) -> (f64, f64) {
    segment_bounds(sunrise, sunset, ABHIJIT_MUHURTA, MUHURTAS_PER_DAY)
}

/// Start ghati and duration in ghatis of Varjyam, per nakshatra.
pub type VarjyamTable = [Option<(f64, f64)>; 27];

/// Classical Varjyam (tyajyam) table, Ashwini..Revati.
pub const VARJYAM_TABLE: VarjyamTable = [
    Some((50.0, 4.0)),
    Some((24.0, 4.0)),
    Some((30.0, 4.0)),
    Some((40.0, 4.0)),
    Some((14.0, 4.0)),
    Some((21.0, 4.0)),
    Some((30.0, 4.0)),
    Some((20.0, 4.0)),
    Some((32.0, 4.0)),
    Some((30.0, 4.0)),
    Some((20.0, 4.0)),
    Some((18.0, 4.0)),
    Some((21.0, 4.0)),
    Some((20.0, 4.0)),
    Some((14.0, 4.0)),
    Some((14.0, 4.0)),
    Some((10.0, 4.0)),
    Some((14.0, 4.0)),
    Some((20.0, 4.0)),
    Some((24.0, 4.0)),
    Some((20.0, 4.0)),
    Some((10.0, 4.0)),
    Some((10.0, 4.0)),
    Some((18.0, 4.0)),
    Some((16.0, 4.0)),
    Some((24.0, 4.0)),
    Some((30.0, 4.0)),
];

/// Varjyam window inside one nakshatra occurrence `[nak_start, nak_end]`.
///
/// Ghatis scale with the actual span of the nakshatra, so the window is
/// `[start + f_s·span, start + f_e·span]` with `f = ghati / 60`.
pub fn varjyam_bounds(
    table: &VarjyamTable,
    nakshatra: Nakshatra,
    nak_start: f64,
    nak_end: f64,
) -> Option<(f64, f64)> {
    let (start_ghati, duration) = table[nakshatra.index() as usize]?;
    let span = nak_end - nak_start;
    let f_start = start_ghati / GHATIS_PER_SPAN;
    let f_end = (start_ghati + duration) / GHATIS_PER_SPAN;
    Some((nak_start + f_start * span, nak_start + f_end * span))
}
