//! Vedic calendrical building blocks.
//!
//! This crate provides:
//! - Name tables for tithi, nakshatra, karana, yoga and vaar
//! - [`UnitKind`], the closed table of angular calendrical units
//! - Sunrise/sunset and moonrise/moonset solving
//! - Rahu/Gulika/Yamaganda segment tables, Abhijit and Varjyam rules
//!
//! Everything here is a pure function of its inputs. The boundary search
//! that ties these to an ephemeris lives in `panchang_search`.

pub mod error;
pub mod karana;
pub mod muhurta;
pub mod nakshatra;
pub mod riseset;
pub mod riseset_types;
pub mod tithi;
pub mod units;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use error::VedicError;
pub use karana::{KARANA_SEGMENT_DEG, KARANA_SLOTS, Karana, karana_from_slot};
pub use muhurta::{
    ABHIJIT_MUHURTA, ALL_SEGMENT_PERIODS, MUHURTAS_PER_DAY, SEGMENTS_PER_HALF, SegmentPeriod,
    VARJYAM_TABLE, VarjyamTable, abhijit_bounds, segment_bounds, varjyam_bounds,
};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, nakshatra_from_longitude};
pub use riseset::{approximate_local_noon_jd, compute_rise_set};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use tithi::{Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, paksha_of, tithi_name};
pub use units::{ALL_UNIT_KINDS, AngularBasis, UnitKind};
pub use util::{normalize_360, normalize_to_pm180};
pub use vaar::Vaar;
pub use yoga::{YOGA_SEGMENT_DEG, yoga_name};
