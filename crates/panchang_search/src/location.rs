//! Observer locations, time zones and the built-in city registry.

use chrono::{NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use panchang_vedic_base::GeoLocation;
use serde::{Serialize, Serializer};

use crate::error::SearchError;
use crate::instant::Instant;

/// How local civil time is derived from UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeZoneSpec {
    /// IANA zone with its daylight-saving rules.
    Named(Tz),
    /// Constant offset east of UTC, in seconds.
    Fixed(i32),
}

impl TimeZoneSpec {
    /// Parse an IANA name (`Asia/Kolkata`) or a fixed offset (`+05:30`, `-0500`, `UTC`).
    pub fn parse(s: &str) -> Result<Self, SearchError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") || s == "Z" {
            return Ok(Self::Fixed(0));
        }
        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(Self::Named(tz));
        }
        parse_fixed_offset(s)
            .map(Self::Fixed)
            .ok_or_else(|| SearchError::InvalidLocation("unrecognised time zone"))
    }

    /// Offset in seconds in force at `jd` (UT).
    pub fn offset_seconds_at(&self, jd: f64) -> i32 {
        match self {
            Self::Fixed(secs) => *secs,
            Self::Named(tz) => Instant::utc(jd)
                .to_utc()
                .map(|utc| tz.offset_from_utc_datetime(&utc.naive_utc()).fix().local_minus_utc())
                .unwrap_or(0),
        }
    }

    /// Instant at `jd` carrying the local offset.
    pub fn instant(&self, jd: f64) -> Instant {
        Instant::new(jd, self.offset_seconds_at(jd))
    }

    /// Julian Day (UT) of the first local instant of `date`.
    ///
    /// A DST gap at midnight moves the start to the first valid hour.
    pub fn local_midnight_jd(&self, date: NaiveDate) -> Result<f64, SearchError> {
        let invalid = || SearchError::InvalidDate(format!("{date} has no local midnight"));
        match self {
            Self::Fixed(secs) => {
                let offset = chrono::FixedOffset::east_opt(*secs).ok_or_else(invalid)?;
                let dt = offset
                    .from_local_datetime(&date.and_time(NaiveTime::MIN))
                    .single()
                    .ok_or_else(invalid)?;
                Ok(Instant::from_datetime(&dt).jd)
            }
            Self::Named(tz) => {
                for hour in 0..4 {
                    let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) else {
                        continue;
                    };
                    if let Some(dt) = tz.from_local_datetime(&date.and_time(time)).earliest() {
                        return Ok(Instant::from_datetime(&dt).jd);
                    }
                }
                Err(invalid())
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Named(tz) => tz.name().to_string(),
            Self::Fixed(secs) => format_offset(*secs),
        }
    }
}

impl Serialize for TimeZoneSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

fn parse_fixed_offset(s: &str) -> Option<i32> {
    let s = s.strip_prefix("UTC").or_else(|| s.strip_prefix("GMT")).unwrap_or(s);
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (h, m) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = h.parse().ok()?;
    let minutes: i32 = m.parse().ok()?;
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

fn format_offset(secs: i32) -> String {
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.abs();
    format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

/// An observer and the zone used to report its civil times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "is_sea_level")]
    pub altitude_m: f64,
    pub time_zone: TimeZoneSpec,
}

fn is_sea_level(m: &f64) -> bool {
    *m == 0.0
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        time_zone: TimeZoneSpec,
    ) -> Result<Self, SearchError> {
        let location = Self {
            name: name.into(),
            latitude,
            longitude,
            altitude_m: 0.0,
            time_zone,
        };
        location.validate()?;
        Ok(location)
    }

    /// Location at the given coordinates, reported in a civil zone.
    ///
    /// The zone is borrowed from the nearest registry city within
    /// [`NEAREST_CITY_RADIUS_KM`]; beyond that it is the mean solar offset
    /// rounded to 30 minutes.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Result<Self, SearchError> {
        let time_zone = match nearest_city(latitude, longitude, NEAREST_CITY_RADIUS_KM) {
            Some(city) => TimeZoneSpec::Named(city.time_zone),
            None if longitude.is_finite() => {
                TimeZoneSpec::Fixed(((longitude / 7.5).round() as i32) * 1800)
            }
            None => TimeZoneSpec::Fixed(0),
        };
        Self::new(
            format!("{latitude:.4}, {longitude:.4}"),
            latitude,
            longitude,
            time_zone,
        )
    }

    pub fn with_altitude(mut self, altitude_m: f64) -> Result<Self, SearchError> {
        self.altitude_m = altitude_m;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        self.geo().validate()?;
        Ok(())
    }

    pub fn geo(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude, self.altitude_m)
    }
}

/// Search radius for borrowing a registry city's zone from bare coordinates.
pub const NEAREST_CITY_RADIUS_KM: f64 = 300.0;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km (haversine).
fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (p1, p2) = (lat1.to_radians(), lat2.to_radians());
    let dp = p2 - p1;
    let dl = (lon2 - lon1).to_radians();
    let a = (dp / 2.0).sin().powi(2) + p1.cos() * p2.cos() * (dl / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Registry city closest to the coordinates, if one lies within `radius_km`.
pub fn nearest_city(latitude: f64, longitude: f64, radius_km: f64) -> Option<&'static City> {
    CITIES
        .iter()
        .map(|c| (c, distance_km(latitude, longitude, c.latitude, c.longitude)))
        .filter(|(_, d)| *d <= radius_km)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c)
}

/// A registry entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: Tz,
}

impl City {
    pub fn location(&self) -> Location {
        Location {
            name: self.name.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            altitude_m: 0.0,
            time_zone: TimeZoneSpec::Named(self.time_zone),
        }
    }

    fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }
}

pub const CITIES: [City; 7] = [
    City {
        name: "Bengaluru",
        aliases: &["Bangalore"],
        latitude: 12.9719,
        longitude: 77.593,
        time_zone: chrono_tz::Asia::Kolkata,
    },
    City {
        name: "Coventry",
        aliases: &[],
        latitude: 52.40656,
        longitude: -1.51217,
        time_zone: chrono_tz::Europe::London,
    },
    City {
        name: "New York",
        aliases: &["NYC", "New York City"],
        latitude: 40.7128,
        longitude: -74.006,
        time_zone: chrono_tz::America::New_York,
    },
    City {
        name: "Lima",
        aliases: &[],
        latitude: -12.0464,
        longitude: -77.0428,
        time_zone: chrono_tz::America::Lima,
    },
    City {
        name: "Harare",
        aliases: &[],
        latitude: -17.8292,
        longitude: 31.0522,
        time_zone: chrono_tz::Africa::Harare,
    },
    City {
        name: "Canberra",
        aliases: &[],
        latitude: -35.2809,
        longitude: 149.13,
        time_zone: chrono_tz::Australia::Canberra,
    },
    City {
        name: "Nuku'alofa",
        aliases: &["Nukualofa", "Tonga"],
        latitude: -21.1394,
        longitude: -175.2049,
        time_zone: chrono_tz::Pacific::Tongatapu,
    },
];

/// Case-insensitive registry lookup by name or alias.
pub fn find_city(query: &str) -> Option<Location> {
    let query = query.trim();
    CITIES.iter().find(|c| c.matches(query)).map(City::location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let loc = find_city("bengaluru").expect("registry");
        assert_eq!(loc.name, "Bengaluru");
        assert_eq!(find_city("BANGALORE").map(|l| l.name), Some("Bengaluru".to_string()));
        assert_eq!(find_city(" new york ").map(|l| l.longitude), Some(-74.006));
        assert!(find_city("Atlantis").is_none());
    }

    #[test]
    fn registry_locations_are_valid() {
        for city in &CITIES {
            assert!(city.location().validate().is_ok(), "{}", city.name);
        }
    }

    #[test]
    fn coordinates_near_a_city_take_its_zone() {
        let loc = Location::from_coordinates(12.97, 77.59).expect("valid");
        assert_eq!(loc.time_zone, TimeZoneSpec::Named(chrono_tz::Asia::Kolkata));
        assert_eq!(loc.name, "12.9700, 77.5900");
        // Mysuru, ~130 km from Bengaluru.
        let mysuru = Location::from_coordinates(12.2958, 76.6394).expect("valid");
        assert_eq!(mysuru.time_zone, TimeZoneSpec::Named(chrono_tz::Asia::Kolkata));
        let west = Location::from_coordinates(40.7, -74.0).expect("valid");
        assert_eq!(west.time_zone, TimeZoneSpec::Named(chrono_tz::America::New_York));
    }

    #[test]
    fn remote_coordinates_use_mean_solar_offset() {
        let pacific = Location::from_coordinates(0.0, -140.0).expect("valid");
        assert_eq!(pacific.time_zone, TimeZoneSpec::Fixed(-9 * 3600 - 1800));
        let gulf = Location::from_coordinates(0.0, 0.0).expect("valid");
        assert_eq!(gulf.time_zone, TimeZoneSpec::Fixed(0));
    }

    #[test]
    fn nearest_city_respects_radius() {
        assert_eq!(nearest_city(-35.3, 149.1, 50.0).map(|c| c.name), Some("Canberra"));
        assert!(nearest_city(-35.3, 152.0, 50.0).is_none());
        assert!((distance_km(0.0, 0.0, 0.0, 1.0) - 111.19).abs() < 0.1);
    }

    #[test]
    fn invalid_coordinates_rejected() {
        assert!(matches!(
            Location::from_coordinates(95.0, 0.0),
            Err(SearchError::InvalidLocation(_))
        ));
        assert!(Location::new("x", 0.0, 200.0, TimeZoneSpec::Fixed(0)).is_err());
    }

    #[test]
    fn parse_zones() {
        assert_eq!(
            TimeZoneSpec::parse("Asia/Kolkata").expect("iana"),
            TimeZoneSpec::Named(chrono_tz::Asia::Kolkata)
        );
        assert_eq!(TimeZoneSpec::parse("+05:30").expect("fixed"), TimeZoneSpec::Fixed(19_800));
        assert_eq!(TimeZoneSpec::parse("-0500").expect("fixed"), TimeZoneSpec::Fixed(-18_000));
        assert_eq!(TimeZoneSpec::parse("UTC+1").expect("fixed"), TimeZoneSpec::Fixed(3600));
        assert_eq!(TimeZoneSpec::parse("utc").expect("utc"), TimeZoneSpec::Fixed(0));
        assert!(TimeZoneSpec::parse("Mars/Olympus").is_err());
    }

    #[test]
    fn london_offset_follows_dst() {
        let tz = TimeZoneSpec::Named(chrono_tz::Europe::London);
        // 2025-10-05 12:00 UT is BST; 2025-12-05 is GMT.
        assert_eq!(tz.offset_seconds_at(2_460_954.0), 3600);
        assert_eq!(tz.offset_seconds_at(2_461_015.0), 0);
    }

    #[test]
    fn local_midnight_ist() {
        let tz = TimeZoneSpec::Named(chrono_tz::Asia::Kolkata);
        let date = NaiveDate::from_ymd_opt(2025, 10, 5).expect("date");
        let jd = tz.local_midnight_jd(date).expect("midnight");
        // 2025-10-04 18:30 UT
        assert!((jd - (2_460_953.5 - 5.5 / 24.0)).abs() < 1e-8, "jd = {jd}");
    }

    #[test]
    fn offset_names() {
        assert_eq!(TimeZoneSpec::Fixed(19_800).name(), "+05:30");
        assert_eq!(TimeZoneSpec::Fixed(-12_600).name(), "-03:30");
    }
}
