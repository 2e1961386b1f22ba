//! Ephemeris contract and the default closed-form provider.
//!
//! This crate provides the [`Ephemeris`] trait through which the rest of
//! the engine obtains Sun and Moon positions, the ayanamsha, and nutation,
//! plus [`AnalyticEphemeris`], a self-contained provider built from
//! classical series, and [`CachedEphemeris`], a per-request memoization
//! wrapper.
//!
//! All instants are Julian Days in UT. Providers convert to their own
//! dynamical time scale internally.

pub mod ayanamsha;
pub mod cache;
pub mod coords;
pub mod error;
pub mod lunar;
pub mod nutation;
pub mod solar;

use serde::{Deserialize, Serialize};
use tracing::trace;

use panchang_time::{jd_to_centuries, jd_ut_to_jd_tt};

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg};
pub use cache::{CacheStats, CachedEphemeris};
pub use coords::{EquatorialPosition, altitude_rad, ecliptic_to_equatorial};
pub use error::EphemerisError;
pub use nutation::Nutation;

/// First Julian Day (UT) served by [`AnalyticEphemeris`]: 1800-01-01 0h.
pub const SPAN_START_JD: f64 = 2_378_496.5;

/// First Julian Day (UT) past the served span: 2200-01-01 0h.
pub const SPAN_END_JD: f64 = 2_524_593.5;

/// Bodies the engine queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
}

/// Apparent geocentric ecliptic position of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Longitude in degrees, `[0, 360)`.
    pub longitude_deg: f64,
    /// Latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

/// Source of Sun/Moon positions and the tropical-to-sidereal offset.
///
/// Implementations must be pure: the same `jd_ut` always yields the same
/// value. `Send + Sync` lets one provider serve concurrent computations.
pub trait Ephemeris: Send + Sync {
    /// Apparent geocentric ecliptic position of `body` at `jd_ut`.
    fn position(&self, jd_ut: f64, body: Body) -> Result<EclipticPosition, EphemerisError>;

    /// Ayanamsha in degrees at `jd_ut`.
    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// Nutation and obliquity at `jd_ut`.
    fn nutation(&self, jd_ut: f64) -> Result<Nutation, EphemerisError>;

    /// Apparent tropical longitude in degrees.
    fn longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        Ok(self.position(jd_ut, body)?.longitude_deg)
    }

    /// Apparent right ascension and declination of `body`.
    fn equatorial(&self, jd_ut: f64, body: Body) -> Result<EquatorialPosition, EphemerisError> {
        let pos = self.position(jd_ut, body)?;
        let nut = self.nutation(jd_ut)?;
        let (ra_rad, dec_rad) =
            ecliptic_to_equatorial(pos.longitude_deg, pos.latitude_deg, nut.true_obliquity_deg());
        Ok(EquatorialPosition {
            ra_rad,
            dec_rad,
            distance_km: pos.distance_km,
        })
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn position(&self, jd_ut: f64, body: Body) -> Result<EclipticPosition, EphemerisError> {
        (**self).position(jd_ut, body)
    }

    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).ayanamsa(jd_ut)
    }

    fn nutation(&self, jd_ut: f64) -> Result<Nutation, EphemerisError> {
        (**self).nutation(jd_ut)
    }
}

/// Provider configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Sidereal reference system. Default: Lahiri.
    pub ayanamsha_system: AyanamshaSystem,
    /// Fold nutation in longitude into the ayanamsha. Default: false.
    pub use_nutation: bool,
    /// First supported Julian Day (UT).
    pub span_start_jd: f64,
    /// End of the supported span (exclusive).
    pub span_end_jd: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            ayanamsha_system: AyanamshaSystem::Lahiri,
            use_nutation: false,
            span_start_jd: SPAN_START_JD,
            span_end_jd: SPAN_END_JD,
        }
    }
}

impl EphemerisConfig {
    fn validate(&self) -> Result<(), EphemerisError> {
        if !self.span_start_jd.is_finite() || !self.span_end_jd.is_finite() {
            return Err(EphemerisError::InvalidConfig("span bounds must be finite"));
        }
        if self.span_start_jd >= self.span_end_jd {
            return Err(EphemerisError::InvalidConfig(
                "span_start_jd must precede span_end_jd",
            ));
        }
        if self.span_start_jd < SPAN_START_JD || self.span_end_jd > SPAN_END_JD {
            return Err(EphemerisError::InvalidConfig(
                "span exceeds the range of the analytic theory",
            ));
        }
        Ok(())
    }
}

/// Closed-form Sun/Moon provider.
///
/// Solar theory: mean elements with equation of centre. Lunar theory:
/// truncated ELP-2000/82. Both are evaluated in TT after adding ΔT.
#[derive(Debug, Clone, Default)]
pub struct AnalyticEphemeris {
    config: EphemerisConfig,
}

impl AnalyticEphemeris {
    /// Create a provider, validating the configured span.
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Julian centuries of TT for a UT instant, after the span check.
    fn centuries_tt(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        if !jd_ut.is_finite()
            || jd_ut < self.config.span_start_jd
            || jd_ut >= self.config.span_end_jd
        {
            return Err(EphemerisError::EpochOutOfRange { jd: jd_ut });
        }
        Ok(jd_to_centuries(jd_ut_to_jd_tt(jd_ut)))
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn position(&self, jd_ut: f64, body: Body) -> Result<EclipticPosition, EphemerisError> {
        let t = self.centuries_tt(jd_ut)?;
        let dpsi = nutation::nutation_arcsec(t).0 / 3600.0;
        let pos = match body {
            Body::Sun => solar::sun_apparent(t, dpsi),
            Body::Moon => lunar::moon_apparent(t, dpsi),
        };
        trace!(jd_ut, ?body, lon = pos.longitude_deg, "ephemeris position");
        Ok(pos)
    }

    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        let t = self.centuries_tt(jd_ut)?;
        let dpsi = if self.config.use_nutation || self.config.ayanamsha_system.uses_true_equinox()
        {
            nutation::nutation_arcsec(t).0 / 3600.0
        } else {
            0.0
        };
        Ok(ayanamsha_deg(
            self.config.ayanamsha_system,
            t,
            dpsi,
            self.config.use_nutation,
        ))
    }

    fn nutation(&self, jd_ut: f64) -> Result<Nutation, EphemerisError> {
        let t = self.centuries_tt(jd_ut)?;
        Ok(Nutation::at_centuries(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AnalyticEphemeris::new(EphemerisConfig::default()).is_ok());
    }

    #[test]
    fn rejects_inverted_span() {
        let config = EphemerisConfig {
            span_start_jd: 2_460_000.5,
            span_end_jd: 2_450_000.5,
            ..EphemerisConfig::default()
        };
        assert!(matches!(
            AnalyticEphemeris::new(config),
            Err(EphemerisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_non_finite_span() {
        let config = EphemerisConfig {
            span_end_jd: f64::INFINITY,
            ..EphemerisConfig::default()
        };
        assert!(AnalyticEphemeris::new(config).is_err());
    }

    #[test]
    fn rejects_span_past_theory() {
        let config = EphemerisConfig {
            span_end_jd: SPAN_END_JD + 1.0,
            ..EphemerisConfig::default()
        };
        assert!(AnalyticEphemeris::new(config).is_err());
    }

    #[test]
    fn out_of_range_epoch() {
        let eph = AnalyticEphemeris::default();
        let err = eph.position(SPAN_START_JD - 1.0, Body::Sun).unwrap_err();
        assert_eq!(err, EphemerisError::EpochOutOfRange { jd: SPAN_START_JD - 1.0 });
        assert!(eph.ayanamsa(SPAN_END_JD).is_err());
        assert!(eph.nutation(f64::NAN).is_err());
    }

    #[test]
    fn equatorial_sun_declination_at_solstice() {
        // 2025-06-21 02:42 UTC
        let eph = AnalyticEphemeris::default();
        let eq = eph.equatorial(2_460_847.6125, Body::Sun).unwrap();
        let dec = eq.dec_rad.to_degrees();
        assert!((dec - 23.436).abs() < 0.01, "solstice declination = {dec}");
    }

    #[test]
    fn engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalyticEphemeris>();
    }
}
