//! Skip/leap detection over a resolved unit sequence.

use tracing::{debug, warn};

use crate::error::SearchError;
use crate::panchang_types::{CalendricalUnit, HinduDay, SunriseAnomaly};

/// Normalize index gaps between consecutive units.
///
/// A gap of 0 merges the pair into one unit, 1 is the normal successor,
/// and 2 inserts a zero-duration `skipped` unit for the index jumped over,
/// pinned at the boundary between the pair. Any other gap means the
/// resolver produced an impossible sequence.
pub fn detect_skips(units: Vec<CalendricalUnit>) -> Result<Vec<CalendricalUnit>, SearchError> {
    let mut out: Vec<CalendricalUnit> = Vec::with_capacity(units.len() + 1);

    for unit in units {
        let Some(prev) = out.last_mut() else {
            out.push(unit);
            continue;
        };
        let kind = unit.kind;
        match kind.forward_gap(prev.index, unit.index) {
            0 => {
                debug!(kind = kind.label(), index = unit.index, "merging repeated unit");
                prev.end = unit.end;
                prev.full_end = unit.full_end;
                prev.low_confidence |= unit.low_confidence;
            }
            1 => out.push(unit),
            2 => {
                let index = (prev.index + 1) % kind.cardinality();
                let low_confidence = prev.low_confidence || unit.low_confidence;
                let at = unit.full_start;
                warn!(kind = kind.label(), index, jd = at.jd, "inserting skipped unit");
                out.push(CalendricalUnit {
                    kind,
                    index,
                    name: kind.name(index),
                    start: at,
                    end: at,
                    full_start: at,
                    full_end: at,
                    skipped: true,
                    low_confidence,
                    sunrise_anomaly: None,
                });
                out.push(unit);
            }
            gap => {
                return Err(SearchError::InvariantViolation {
                    kind,
                    detail: format!(
                        "index gap of {gap} from {} to {}",
                        prev.index, unit.index
                    ),
                });
            }
        }
    }
    Ok(out)
}

/// Mark units that never prevail at a sunrise, or prevail at both.
pub fn classify_sunrise_anomalies(units: &mut [CalendricalUnit], day: &HinduDay) {
    for unit in units.iter_mut().filter(|u| !u.skipped) {
        let (start, end) = (unit.full_start.jd, unit.full_end.jd);
        unit.sunrise_anomaly = if start > day.start_jd() && end <= day.end_jd() {
            Some(SunriseAnomaly::Kshaya)
        } else if start <= day.start_jd() && end > day.end_jd() {
            Some(SunriseAnomaly::Adhika)
        } else {
            None
        };
    }
}
