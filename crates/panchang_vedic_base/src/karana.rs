//! Karana (half-tithi): 60 slots of 6° elongation with 11 names.
//!
//! The four fixed karanas sit at the ends of the synodic month: Kimstughna
//! at slot 0, then Shakuni, Chatushpada and Naga at slots 57–59. The 56
//! slots in between cycle through the seven movable karanas.

use serde::Serialize;

/// Elongation span of one karana in degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Number of karana slots per synodic month.
pub const KARANA_SLOTS: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether the karana occurs once per month rather than cycling.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana for a 0-based half-tithi slot.
pub fn karana_from_slot(slot: u8) -> Karana {
    match slot % KARANA_SLOTS {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59 => Karana::Naga,
        s => MOVABLE[((s - 1) % 7) as usize],
    }
}
