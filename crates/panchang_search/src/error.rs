//! Error types for panchangam computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_core::EphemerisError;
use panchang_time::TimeError;
use panchang_vedic_base::{RiseSetEvent, UnitKind, VedicError};

/// Errors from a single `(location, date)` computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Requested instant outside the provider's span, or provider failure.
    Ephemeris(EphemerisError),
    /// Error from the Vedic base layer.
    Vedic(VedicError),
    /// Calendar conversion failure.
    Time(TimeError),
    /// The Sun has no usable horizon crossing on the requested date.
    NoRiseOrSet {
        event: RiseSetEvent,
        reason: &'static str,
    },
    /// The resolved unit sequence is impossible; indicates a resolver defect.
    InvariantViolation { kind: UnitKind, detail: String },
    /// Location outside the geodetic ranges.
    InvalidLocation(&'static str),
    /// Date outside the supported range or not representable locally.
    InvalidDate(String),
    /// Invalid configuration parameter.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Vedic(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NoRiseOrSet { event, reason } => {
                write!(f, "no {}: {reason}", event.name())
            }
            Self::InvariantViolation { kind, detail } => {
                write!(f, "invariant violation in {} sequence: {detail}", kind.label())
            }
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Vedic(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Ephemeris(inner) => Self::Ephemeris(inner),
            VedicError::InvalidLocation(msg) => Self::InvalidLocation(msg),
            VedicError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            other => Self::Vedic(other),
        }
    }
}
