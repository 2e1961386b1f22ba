//! Tithi (lunar day): 30 divisions of 12° Moon−Sun elongation.

use serde::Serialize;

/// Elongation span of one tithi in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing fortnight (tithi indices 0–14).
    Shukla,
    /// Waning fortnight (tithi indices 15–29).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Paksha of a 0-based tithi index.
pub fn paksha_of(index: u8) -> Paksha {
    if index % TITHI_COUNT < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// Display name for a 0-based tithi index, e.g. `"Shukla Trayodashi"`.
///
/// The paksha is a bare prefix; the word "Paksha" is not repeated.
/// Index 14 is Purnima and 29 is Amavasya; they carry no paksha prefix.
pub fn tithi_name(index: u8) -> String {
    let index = index % TITHI_COUNT;
    match index {
        14 => "Purnima".to_string(),
        29 => "Amavasya".to_string(),
        _ => {
            let in_paksha = (index % 15) as usize;
            format!("{} {}", paksha_of(index).name(), TITHI_NAMES[in_paksha])
        }
    }
}
