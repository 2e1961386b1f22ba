//! Error types for calendar and time-scale conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar or Julian Day conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month or day outside the proleptic Gregorian calendar.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Julian Day is NaN or infinite.
    NonFiniteJd,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::NonFiniteJd => write!(f, "julian day must be finite"),
        }
    }
}

impl Error for TimeError {}
