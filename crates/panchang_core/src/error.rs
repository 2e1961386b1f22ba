//! Error types for the ephemeris layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_time::TimeError;

/// Errors raised by an [`crate::Ephemeris`] provider.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested instant lies outside the provider's supported span.
    EpochOutOfRange { jd: f64 },
    /// Provider configuration rejected at construction time.
    InvalidConfig(&'static str),
    /// Time conversion failed.
    Time(TimeError),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd } => {
                write!(f, "julian day {jd} outside supported ephemeris span")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid ephemeris config: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
