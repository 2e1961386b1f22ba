//! Error types for Vedic base calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_core::EphemerisError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris provider.
    Ephemeris(EphemerisError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Index outside a name table.
    IndexOutOfRange { table: &'static str, index: u8 },
    /// Configuration value outside its valid range.
    InvalidConfig(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::IndexOutOfRange { table, index } => {
                write!(f, "index {index} out of range for {table}")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for VedicError {}

impl From<EphemerisError> for VedicError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
