//! Yoga: 27 divisions of 13°20′ of (Sun + Moon) sidereal longitude.

/// Span of one yoga in degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// Name of the 0-based yoga index.
pub fn yoga_name(index: u8) -> &'static str {
    YOGA_NAMES[(index % 27) as usize]
}
