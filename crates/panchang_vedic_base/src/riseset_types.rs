//! Types for sunrise/sunset and moonrise/moonset calculations.

use panchang_core::Body;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Reject coordinates outside the geodetic ranges.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(VedicError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Horizon crossings of the Sun and Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears, refraction included.
    Sunrise,
    Sunset,
    /// Upper limb of the Moon appears, parallax and refraction included.
    Moonrise,
    Moonset,
}

impl RiseSetEvent {
    pub fn body(self) -> Body {
        match self {
            Self::Sunrise | Self::Sunset => Body::Sun,
            Self::Moonrise | Self::Moonset => Body::Moon,
        }
    }

    /// Whether this is a rising event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise | Self::Moonrise)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::Moonrise => "moonrise",
            Self::Moonset => "moonset",
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes, used when the distance
    /// is unknown. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
    /// Newton iterations before giving up. Default: 8.
    pub max_iterations: u32,
    /// Convergence threshold in days. Default: 1e-5 (~0.9 s).
    pub tolerance_days: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
            max_iterations: 8,
            tolerance_days: 1.0e-5,
        }
    }
}

impl RiseSetConfig {
    /// Geometric dip of the horizon in degrees for an observer at `altitude_m`.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            0.0
        }
    }

    /// Total horizon depression for sunrise/sunset in degrees with the
    /// default semidiameter.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0 + self.dip_deg(altitude_m)
    }

    /// Geocentric altitude of the body's centre at the event, in degrees.
    ///
    /// For the Sun `size_deg` is the semidiameter; for the Moon it is the
    /// horizontal parallax, of which 0.7275 folds in both the topocentric
    /// shift and the semidiameter.
    pub fn target_altitude_deg(&self, event: RiseSetEvent, size_deg: f64, altitude_m: f64) -> f64 {
        let refraction = self.refraction_arcmin / 60.0;
        let dip = self.dip_deg(altitude_m);
        match event.body() {
            Body::Sun => -(refraction + size_deg) - dip,
            Body::Moon => 0.7275 * size_deg - refraction - dip,
        }
    }

    pub fn validate(&self) -> Result<(), VedicError> {
        if self.max_iterations == 0 {
            return Err(VedicError::InvalidConfig("max_iterations must be positive"));
        }
        if !(self.tolerance_days.is_finite() && self.tolerance_days > 0.0) {
            return Err(VedicError::InvalidConfig("tolerance_days must be positive"));
        }
        if !self.refraction_arcmin.is_finite() || !self.semidiameter_arcmin.is_finite() {
            return Err(VedicError::InvalidConfig("horizon corrections must be finite"));
        }
        Ok(())
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Day (UT).
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Body stays below the horizon for the whole day.
    NeverRises,
    /// Body stays above the horizon for the whole day.
    NeverSets,
    /// Refinement failed to settle on a crossing near the estimate.
    NoEvent { reason: &'static str },
}

impl RiseSetResult {
    pub fn jd_ut(&self) -> Option<f64> {
        match self {
            Self::Event { jd_ut, .. } => Some(*jd_ut),
            _ => None,
        }
    }
}
