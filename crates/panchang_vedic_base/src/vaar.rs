//! Vaar (weekday), reckoned from sunrise.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Weekday from a 0-based index, 0 = Sunday.
    pub fn from_weekday(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    /// 0 = Sunday … 6 = Saturday.
    pub const fn weekday(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }
}
