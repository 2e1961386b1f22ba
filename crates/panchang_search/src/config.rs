//! Configuration for a panchangam computation.

use panchang_core::EphemerisConfig;
use panchang_vedic_base::RiseSetConfig;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Boundary resolver tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Coarse grid spacing in days. Default: 0.25.
    pub grid_step_days: f64,
    /// Grid extension beyond each end of the Hindu day, in days. Default: 1.5.
    pub padding_days: f64,
    /// Bisection depth for cells that hold more than one crossing. Default: 6.
    pub max_subdivision_depth: u32,
    /// Acceptable angular residual at a refined boundary, degrees. Default: 1e-4.
    pub residual_tolerance_deg: f64,
    /// Secant steps after the interpolated estimate. Default: 8.
    pub max_polish_iterations: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            grid_step_days: 0.25,
            padding_days: 1.5,
            max_subdivision_depth: 6,
            residual_tolerance_deg: 1.0e-4,
            max_polish_iterations: 8,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.grid_step_days.is_finite() && self.grid_step_days > 0.0) {
            return Err(SearchError::InvalidConfig("grid_step_days must be positive"));
        }
        // The fastest unit (karana, 6°) must not be crossed twice per cell
        // on average; the Moon moves at most ~16°/day.
        if self.grid_step_days > 0.35 {
            return Err(SearchError::InvalidConfig("grid_step_days must not exceed 0.35"));
        }
        if !(self.padding_days.is_finite() && self.padding_days >= 1.25) {
            return Err(SearchError::InvalidConfig("padding_days must be at least 1.25"));
        }
        if !(self.residual_tolerance_deg.is_finite() && self.residual_tolerance_deg > 0.0) {
            return Err(SearchError::InvalidConfig("residual_tolerance_deg must be positive"));
        }
        Ok(())
    }
}

/// Fixed-duration muhurat offsets, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuhuratConfig {
    /// Length of Brahma muhurat. Default: 96.
    pub brahma_duration_min: f64,
    /// Gap between the end of Brahma muhurat and sunrise. Default: 96.
    pub brahma_gap_min: f64,
    /// Length of Pradosha from sunset. Default: 96.
    pub pradosha_duration_min: f64,
}

impl Default for MuhuratConfig {
    fn default() -> Self {
        Self {
            brahma_duration_min: 96.0,
            brahma_gap_min: 96.0,
            pradosha_duration_min: 96.0,
        }
    }
}

impl MuhuratConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        let all = [
            self.brahma_duration_min,
            self.brahma_gap_min,
            self.pradosha_duration_min,
        ];
        if all.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(SearchError::InvalidConfig("muhurat minutes must be non-negative"));
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanchangConfig {
    /// Provider settings, used when the engine builds its own provider.
    pub ephemeris: EphemerisConfig,
    pub riseset: RiseSetConfig,
    pub muhurat: MuhuratConfig,
    pub resolver: ResolverConfig,
    /// Resolve the four unit kinds on scoped threads. Default: true.
    pub parallel: bool,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            ephemeris: EphemerisConfig::default(),
            riseset: RiseSetConfig::default(),
            muhurat: MuhuratConfig::default(),
            resolver: ResolverConfig::default(),
            parallel: true,
        }
    }
}

impl PanchangConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        self.riseset.validate()?;
        self.muhurat.validate()?;
        self.resolver.validate()
    }
}
