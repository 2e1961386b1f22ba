//! The 27 nakshatras (lunar mansions) of 13°20′ each.

use serde::Serialize;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_NAKSHATRAS.get(index as usize).copied()
    }
}

/// Nakshatra containing a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_deg: f64) -> Nakshatra {
    let idx = (sidereal_deg.rem_euclid(360.0) / NAKSHATRA_SPAN_27).floor() as usize;
    ALL_NAKSHATRAS[idx.min(26)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_order() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Nakshatra::from_index(i as u8), Some(*n));
        }
        assert_eq!(Nakshatra::from_index(27), None);
    }

    #[test]
    fn boundaries() {
        assert_eq!(nakshatra_from_longitude(0.0), Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_longitude(13.3334), Nakshatra::Bharani);
        assert_eq!(nakshatra_from_longitude(359.99), Nakshatra::Revati);
        assert_eq!(nakshatra_from_longitude(310.0), Nakshatra::Shatabhisha);
        assert_eq!(nakshatra_from_longitude(-1.0), Nakshatra::Revati);
    }

    #[test]
    fn display_names() {
        assert_eq!(Nakshatra::PurvaBhadrapada.name(), "Purva Bhadrapada");
        assert_eq!(Nakshatra::Shatabhisha.name(), "Shatabhisha");
    }
}
