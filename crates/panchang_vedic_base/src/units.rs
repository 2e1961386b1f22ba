//! The closed set of calendrical unit kinds.
//!
//! Every unit is an equal division of some angle that grows monotonically
//! with time. A kind is fully described by the angle it divides, the span
//! of one division, and the number of divisions in a full turn.

use serde::{Deserialize, Serialize};

use crate::karana::{KARANA_SEGMENT_DEG, KARANA_SLOTS, karana_from_slot};
use crate::nakshatra::{NAKSHATRA_SPAN_27, Nakshatra};
use crate::tithi::{TITHI_COUNT, TITHI_SEGMENT_DEG, tithi_name};
use crate::yoga::{YOGA_SEGMENT_DEG, yoga_name};

/// The angle a unit kind divides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngularBasis {
    /// Moon − Sun tropical longitude, mod 360.
    Elongation,
    /// Moon sidereal longitude.
    MoonSidereal,
    /// Sun sidereal + Moon sidereal longitude, mod 360.
    SiderealSum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Tithi,
    Nakshatra,
    Karana,
    Yoga,
}

/// All unit kinds in output order.
pub const ALL_UNIT_KINDS: [UnitKind; 4] = [
    UnitKind::Tithi,
    UnitKind::Nakshatra,
    UnitKind::Karana,
    UnitKind::Yoga,
];

impl UnitKind {
    pub const fn basis(self) -> AngularBasis {
        match self {
            Self::Tithi | Self::Karana => AngularBasis::Elongation,
            Self::Nakshatra => AngularBasis::MoonSidereal,
            Self::Yoga => AngularBasis::SiderealSum,
        }
    }

    /// Angular span of one unit in degrees.
    pub const fn division_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SEGMENT_DEG,
            Self::Nakshatra => NAKSHATRA_SPAN_27,
            Self::Karana => KARANA_SEGMENT_DEG,
            Self::Yoga => YOGA_SEGMENT_DEG,
        }
    }

    /// Number of units in 360°.
    pub const fn cardinality(self) -> u8 {
        match self {
            Self::Tithi => TITHI_COUNT,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => KARANA_SLOTS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Karana => "karana",
            Self::Yoga => "yoga",
        }
    }

    /// Index of the unit containing `angle_deg` (any real; reduced mod 360).
    pub fn index_at(self, angle_deg: f64) -> u8 {
        let idx = (angle_deg.rem_euclid(360.0) / self.division_deg()).floor() as u8;
        idx.min(self.cardinality() - 1)
    }

    /// Display name for a unit index.
    pub fn name(self, index: u8) -> String {
        let index = index % self.cardinality();
        match self {
            Self::Tithi => tithi_name(index),
            Self::Nakshatra => Nakshatra::from_index(index)
                .map(|n| n.name().to_string())
                .unwrap_or_default(),
            Self::Karana => karana_from_slot(index).name().to_string(),
            Self::Yoga => yoga_name(index).to_string(),
        }
    }

    /// Forward distance in index steps from `from` to `to`, mod cardinality.
    pub fn forward_gap(self, from: u8, to: u8) -> u8 {
        let n = self.cardinality() as i16;
        ((to as i16 - from as i16).rem_euclid(n)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisions_cover_full_circle() {
        for kind in ALL_UNIT_KINDS {
            let total = kind.division_deg() * kind.cardinality() as f64;
            assert!((total - 360.0).abs() < 1e-9, "{kind:?}: {total}");
        }
    }

    #[test]
    fn index_at_boundaries() {
        assert_eq!(UnitKind::Tithi.index_at(0.0), 0);
        assert_eq!(UnitKind::Tithi.index_at(155.9), 12);
        assert_eq!(UnitKind::Tithi.index_at(359.999), 29);
        assert_eq!(UnitKind::Karana.index_at(155.9), 25);
        assert_eq!(UnitKind::Nakshatra.index_at(320.5), 24);
        assert_eq!(UnitKind::Yoga.index_at(-0.5), 26);
    }

    #[test]
    fn names_per_kind() {
        assert_eq!(UnitKind::Tithi.name(12), "Shukla Trayodashi");
        assert_eq!(UnitKind::Nakshatra.name(23), "Shatabhisha");
        assert_eq!(UnitKind::Karana.name(25), "Taitila");
        assert_eq!(UnitKind::Yoga.name(9), "Ganda");
    }

    #[test]
    fn forward_gap_wraps() {
        assert_eq!(UnitKind::Nakshatra.forward_gap(26, 0), 1);
        assert_eq!(UnitKind::Tithi.forward_gap(12, 12), 0);
        assert_eq!(UnitKind::Karana.forward_gap(59, 1), 2);
        assert_eq!(UnitKind::Yoga.forward_gap(5, 4), 26);
    }

    #[test]
    fn basis_mapping() {
        assert_eq!(UnitKind::Karana.basis(), AngularBasis::Elongation);
        assert_eq!(UnitKind::Yoga.basis(), AngularBasis::SiderealSum);
    }
}
