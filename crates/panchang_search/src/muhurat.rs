//! Muhurat deriver: named windows from sunrise, sunset and weekday.

use panchang_vedic_base::{
    ALL_SEGMENT_PERIODS, Nakshatra, SEGMENTS_PER_HALF, SegmentPeriod, VarjyamTable,
    abhijit_bounds, segment_bounds, varjyam_bounds,
};
use tracing::debug;

use crate::config::MuhuratConfig;
use crate::error::SearchError;
use crate::instant::Instant;
use crate::panchang_types::{CalendricalUnit, PeriodWindow};

const MINUTES_PER_DAY: f64 = 1440.0;

/// At most this many Varjyam windows are reported per Hindu day.
pub const MAX_VARJYAM_WINDOWS: usize = 2;

/// Day anchors for the deriver, as JD (UT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuhuratInputs {
    pub sunrise: f64,
    pub sunset: f64,
    pub next_sunrise: f64,
    /// 0 = Sunday.
    pub weekday: u8,
}

/// Every muhurat window of one Hindu day.
#[derive(Debug, Clone, PartialEq)]
pub struct MuhuratSet {
    pub rahu: PeriodWindow,
    pub gulika: PeriodWindow,
    pub yamaganda: PeriodWindow,
    /// Rahu, Gulika and Yamaganda of the night half.
    pub night: Vec<PeriodWindow>,
    pub abhijit: PeriodWindow,
    pub brahma: PeriodWindow,
    pub pradosha: PeriodWindow,
    pub varjyam: Vec<PeriodWindow>,
}

impl MuhuratSet {
    /// All windows in a stable order: day segments, night segments,
    /// auspicious windows, Varjyam.
    pub fn all(&self) -> Vec<PeriodWindow> {
        let mut out = vec![self.rahu.clone(), self.gulika.clone(), self.yamaganda.clone()];
        out.extend(self.night.iter().cloned());
        out.extend([
            self.abhijit.clone(),
            self.brahma.clone(),
            self.pradosha.clone(),
        ]);
        out.extend(self.varjyam.iter().cloned());
        out
    }

    pub fn localized(self, offset_at: impl Fn(f64) -> i32 + Copy) -> Self {
        let loc = |w: PeriodWindow| w.localized(offset_at);
        Self {
            rahu: loc(self.rahu),
            gulika: loc(self.gulika),
            yamaganda: loc(self.yamaganda),
            night: self.night.into_iter().map(loc).collect(),
            abhijit: loc(self.abhijit),
            brahma: loc(self.brahma),
            pradosha: loc(self.pradosha),
            varjyam: self.varjyam.into_iter().map(loc).collect(),
        }
    }
}

impl PeriodWindow {
    pub fn utc(label: impl Into<String>, start_jd: f64, end_jd: f64) -> Self {
        Self {
            label: label.into(),
            start: Instant::utc(start_jd),
            end: Instant::utc(end_jd),
        }
    }

    pub fn localized(self, offset_at: impl Fn(f64) -> i32) -> Self {
        Self {
            start: self.start.with_offset(offset_at(self.start.jd)),
            end: self.end.with_offset(offset_at(self.end.jd)),
            label: self.label,
        }
    }
}

fn day_segment(period: SegmentPeriod, inputs: &MuhuratInputs) -> Result<PeriodWindow, SearchError> {
    let segment = period.day_segment(inputs.weekday)?;
    let (s, e) = segment_bounds(inputs.sunrise, inputs.sunset, segment, SEGMENTS_PER_HALF);
    Ok(PeriodWindow::utc(period.name(), s, e))
}

fn night_segment(period: SegmentPeriod, inputs: &MuhuratInputs) -> Result<PeriodWindow, SearchError> {
    let segment = period.night_segment(inputs.weekday)?;
    let (s, e) = segment_bounds(inputs.sunset, inputs.next_sunrise, segment, SEGMENTS_PER_HALF);
    Ok(PeriodWindow::utc(format!("{} (night)", period.name()), s, e))
}

/// Brahma muhurat: `duration` minutes ending `gap` minutes before sunrise.
pub fn brahma_window(sunrise: f64, config: &MuhuratConfig) -> PeriodWindow {
    let end = sunrise - config.brahma_gap_min / MINUTES_PER_DAY;
    let start = end - config.brahma_duration_min / MINUTES_PER_DAY;
    PeriodWindow::utc("Brahma Muhurat", start, end)
}

/// Pradosha: `duration` minutes from sunset.
pub fn pradosha_window(sunset: f64, config: &MuhuratConfig) -> PeriodWindow {
    PeriodWindow::utc(
        "Pradosha",
        sunset,
        sunset + config.pradosha_duration_min / MINUTES_PER_DAY,
    )
}

/// Varjyam windows of the nakshatras overlapping `[day_start, day_end)`.
pub fn varjyam_windows(
    nakshatras: &[CalendricalUnit],
    day_start: f64,
    day_end: f64,
    table: &VarjyamTable,
) -> Vec<PeriodWindow> {
    let windows: Vec<PeriodWindow> = nakshatras
        .iter()
        .filter(|u| !u.skipped)
        .filter_map(|u| {
            let nakshatra = Nakshatra::from_index(u.index)?;
            varjyam_bounds(table, nakshatra, u.full_start.jd, u.full_end.jd)
        })
        .filter(|&(s, e)| e > day_start && s < day_end)
        .map(|(s, e)| PeriodWindow::utc("Varjyam", s, e))
        .collect();

    if windows.len() > MAX_VARJYAM_WINDOWS {
        debug!(found = windows.len(), "truncating varjyam windows");
    }
    windows.into_iter().take(MAX_VARJYAM_WINDOWS).collect()
}

/// Derive every muhurat window for one Hindu day.
pub fn derive_muhurats(
    inputs: &MuhuratInputs,
    nakshatras: &[CalendricalUnit],
    config: &MuhuratConfig,
    varjyam_table: &VarjyamTable,
) -> Result<MuhuratSet, SearchError> {
    let night = ALL_SEGMENT_PERIODS
        .iter()
        .map(|&p| night_segment(p, inputs))
        .collect::<Result<Vec<_>, _>>()?;
    let (abhijit_start, abhijit_end) = abhijit_bounds(inputs.sunrise, inputs.sunset);

    Ok(MuhuratSet {
        rahu: day_segment(SegmentPeriod::RahuKaal, inputs)?,
        gulika: day_segment(SegmentPeriod::Gulika, inputs)?,
        yamaganda: day_segment(SegmentPeriod::Yamaganda, inputs)?,
        night,
        abhijit: PeriodWindow::utc("Abhijit Muhurat", abhijit_start, abhijit_end),
        brahma: brahma_window(inputs.sunrise, config),
        pradosha: pradosha_window(inputs.sunset, config),
        varjyam: varjyam_windows(nakshatras, inputs.sunrise, inputs.next_sunrise, varjyam_table),
    })
}
