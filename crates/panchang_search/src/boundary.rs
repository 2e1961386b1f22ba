//! Unit boundary resolver.
//!
//! The angle a unit kind divides is sampled on a coarse grid padded
//! around the Hindu day and unwrapped into a continuous, increasing
//! function of time. Every multiple of the division size crossed between
//! two samples is a boundary; its instant is found by inverse Lagrange
//! interpolation over the neighbouring samples and polished with secant
//! steps against the provider.

use std::ops::Range;

use panchang_core::Ephemeris;
use panchang_vedic_base::{UnitKind, normalize_to_pm180};
use tracing::{debug, debug_span, trace, warn};

use crate::config::ResolverConfig;
use crate::error::SearchError;
use crate::instant::Instant;
use crate::interpolation::{lagrange, linear_crossing};
use crate::panchang_types::{CalendricalUnit, HinduDay};
use crate::sidereal::angle_at;

/// Samples used by the interior inverse interpolation.
const INTERIOR_POINTS: usize = 5;

/// Samples used when the crossing sits at the edge of the grid.
const EDGE_POINTS: usize = 4;

/// Allowed excursion of a refined boundary outside its bracket, days.
const BRACKET_SLACK_DAYS: f64 = 1.0e-9;

/// One grid sample with the angle unwrapped against its predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    jd: f64,
    angle: f64,
}

/// A resolved crossing and the unit index that begins there.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Boundary {
    jd: f64,
    index_after: u8,
    low_confidence: bool,
}

/// Ordered units of `kind` overlapping `day`.
///
/// Instants carry a zero UTC offset; callers localize them.
pub fn resolve_units<E: Ephemeris + ?Sized>(
    eph: &E,
    kind: UnitKind,
    day: &HinduDay,
    config: &ResolverConfig,
) -> Result<Vec<CalendricalUnit>, SearchError> {
    let _span = debug_span!("resolve_units", kind = kind.label()).entered();

    let samples = sample_grid(eph, kind, day, config)?;
    let boundaries = locate_boundaries(eph, kind, &samples, config)?;
    let units = assemble_units(kind, day, &boundaries)?;

    debug!(
        samples = samples.len(),
        boundaries = boundaries.len(),
        units = units.len(),
        "units resolved"
    );
    Ok(units)
}

fn unwrap_against(prev: f64, raw: f64) -> f64 {
    prev + normalize_to_pm180(raw - prev)
}

/// Number of division multiples crossed going from `a` to `b`.
fn crossings(a: Sample, b: Sample, division: f64) -> i64 {
    let lo = (a.angle / division).floor() as i64;
    let hi = (b.angle / division).floor() as i64;
    (hi - lo).max(0)
}

fn sample_grid<E: Ephemeris + ?Sized>(
    eph: &E,
    kind: UnitKind,
    day: &HinduDay,
    config: &ResolverConfig,
) -> Result<Vec<Sample>, SearchError> {
    let start = day.start_jd() - config.padding_days;
    let end = day.end_jd() + config.padding_days;
    let steps = ((end - start) / config.grid_step_days).ceil().max(1.0) as usize;
    let step = (end - start) / steps as f64;

    let mut coarse: Vec<Sample> = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let jd = start + step * i as f64;
        let raw = angle_at(eph, kind, jd)?;
        let angle = match coarse.last() {
            Some(prev) => unwrap_against(prev.angle, raw),
            None => raw,
        };
        coarse.push(Sample { jd, angle });
    }

    densify(eph, kind, &coarse, config.max_subdivision_depth)
}

/// Bisect every cell that holds more than one crossing.
fn densify<E: Ephemeris + ?Sized>(
    eph: &E,
    kind: UnitKind,
    coarse: &[Sample],
    max_depth: u32,
) -> Result<Vec<Sample>, SearchError> {
    let mut out = Vec::with_capacity(coarse.len());
    if let Some(first) = coarse.first() {
        out.push(*first);
    }
    for pair in coarse.windows(2) {
        split_cell(eph, kind, pair[0], pair[1], max_depth, &mut out)?;
    }
    Ok(out)
}

fn split_cell<E: Ephemeris + ?Sized>(
    eph: &E,
    kind: UnitKind,
    a: Sample,
    b: Sample,
    depth_left: u32,
    out: &mut Vec<Sample>,
) -> Result<(), SearchError> {
    if crossings(a, b, kind.division_deg()) >= 2 {
        if depth_left > 0 {
            trace!(jd = a.jd, depth_left, "cell requires finer sampling");
            let jd = 0.5 * (a.jd + b.jd);
            let mid = Sample {
                jd,
                angle: unwrap_against(a.angle, angle_at(eph, kind, jd)?),
            };
            split_cell(eph, kind, a, mid, depth_left - 1, out)?;
            return split_cell(eph, kind, mid, b, depth_left - 1, out);
        }
        warn!(
            kind = kind.label(),
            jd = a.jd,
            "crossings still share a cell at the subdivision limit"
        );
    }
    out.push(b);
    Ok(())
}

fn locate_boundaries<E: Ephemeris + ?Sized>(
    eph: &E,
    kind: UnitKind,
    samples: &[Sample],
    config: &ResolverConfig,
) -> Result<Vec<Boundary>, SearchError> {
    let division = kind.division_deg();
    let mut boundaries = Vec::new();

    for j in 0..samples.len().saturating_sub(1) {
        let (a, b) = (samples[j], samples[j + 1]);
        let lo = (a.angle / division).floor() as i64;
        let hi = (b.angle / division).floor() as i64;
        for k in (lo + 1)..=hi {
            let target = k as f64 * division;
            let (jd, refined) = refine_crossing(eph, kind, samples, j, target, config)?;
            boundaries.push(Boundary {
                jd,
                // Mid-division angle keeps float noise at `target` out of the index.
                index_after: kind.index_at(target + 0.5 * division),
                low_confidence: !refined,
            });
        }
    }

    boundaries.sort_by(|x, y| x.jd.total_cmp(&y.jd));
    Ok(boundaries)
}

/// Samples feeding the inverse interpolation for the cell `[j, j + 1]`.
fn interpolation_window(len: usize, j: usize) -> Range<usize> {
    if len >= INTERIOR_POINTS && j >= 2 && j + 2 < len {
        return (j - 2)..(j + 3);
    }
    let start = j.saturating_sub(1).min(len.saturating_sub(EDGE_POINTS));
    start..(start + EDGE_POINTS).min(len)
}

/// Instant at which the unwrapped angle reaches `target` inside cell `j`.
///
/// Returns `(jd, true)` when the interpolated estimate was polished to
/// the residual tolerance, `(jd, false)` for the linear fallback.
fn refine_crossing<E: Ephemeris + ?Sized>(
    eph: &E,
    kind: UnitKind,
    samples: &[Sample],
    j: usize,
    target: f64,
    config: &ResolverConfig,
) -> Result<(f64, bool), SearchError> {
    let (a, b) = (samples[j], samples[j + 1]);
    let linear = linear_crossing(a.jd, a.angle, b.jd, b.angle, target);
    let in_bracket =
        |t: f64| t.is_finite() && t >= a.jd - BRACKET_SLACK_DAYS && t <= b.jd + BRACKET_SLACK_DAYS;

    let window = &samples[interpolation_window(samples.len(), j)];
    let (angles, times): (Vec<f64>, Vec<f64>) = window.iter().map(|s| (s.angle, s.jd)).unzip();
    let estimate = lagrange(&angles, &times, target);

    if in_bracket(estimate) {
        let residual = |t: f64| -> Result<f64, SearchError> {
            Ok(normalize_to_pm180(angle_at(eph, kind, t)? - target))
        };

        let mut t0 = estimate;
        let mut r0 = residual(t0)?;
        if r0.abs() < config.residual_tolerance_deg {
            trace!(jd = t0, residual = r0, "crossing from interpolation");
            return Ok((t0, true));
        }

        // Seed the secant with the cell's mean rate.
        let rate = (b.angle - a.angle) / (b.jd - a.jd);
        let mut t1 = t0 - r0 / rate;
        for _ in 0..config.max_polish_iterations {
            if !in_bracket(t1) {
                break;
            }
            let r1 = residual(t1)?;
            if r1.abs() < config.residual_tolerance_deg {
                trace!(jd = t1, residual = r1, "crossing after polish");
                return Ok((t1, true));
            }
            let denom = r1 - r0;
            if denom == 0.0 || !denom.is_finite() {
                break;
            }
            let t2 = t1 - r1 * (t1 - t0) / denom;
            (t0, r0, t1) = (t1, r1, t2);
        }
    }

    warn!(
        kind = kind.label(),
        target,
        jd = linear,
        "boundary fell back to linear interpolation"
    );
    Ok((linear, false))
}

fn assemble_units(
    kind: UnitKind,
    day: &HinduDay,
    boundaries: &[Boundary],
) -> Result<Vec<CalendricalUnit>, SearchError> {
    let mut units = Vec::new();
    for pair in boundaries.windows(2) {
        let (open, close) = (pair[0], pair[1]);
        if !day.overlaps(open.jd, close.jd) {
            continue;
        }
        let index = open.index_after;
        units.push(CalendricalUnit {
            kind,
            index,
            name: kind.name(index),
            start: Instant::utc(open.jd.max(day.start_jd())),
            end: Instant::utc(close.jd.min(day.end_jd())),
            full_start: Instant::utc(open.jd),
            full_end: Instant::utc(close.jd),
            skipped: false,
            low_confidence: open.low_confidence || close.low_confidence,
            sunrise_anomaly: None,
        });
    }

    let covers_start = units
        .first()
        .is_some_and(|u| u.full_start.jd <= day.start_jd());
    let covers_end = units.last().is_some_and(|u| u.full_end.jd >= day.end_jd());
    if !(covers_start && covers_end) {
        return Err(SearchError::InvariantViolation {
            kind,
            detail: format!(
                "{} resolved units do not cover the Hindu day",
                units.len()
            ),
        });
    }
    Ok(units)
}
