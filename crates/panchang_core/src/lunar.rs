//! Geocentric lunar position from a truncated ELP-2000/82 series.
//!
//! The 60 largest periodic terms in longitude/distance and 60 in latitude
//! (Meeus ch. 47), with the Venus/Jupiter/flattening corrections A1–A3 and
//! the eccentricity factor on solar-anomaly terms. Accuracy is ≈10″ in
//! longitude and ≈4″ in latitude.

use crate::EclipticPosition;

/// Longitude and distance terms: `(D, M, M', F, Σl [1e-6 deg], Σr [1e-3 km])`.
#[rustfmt::skip]
const LON_DIST_TERMS: [(i8, i8, i8, i8, i32, i32); 60] = [
    (0,  0,  1,  0, 6288774, -20905355),
    (2,  0, -1,  0, 1274027,  -3699111),
    (2,  0,  0,  0,  658314,  -2955968),
    (0,  0,  2,  0,  213618,   -569925),
    (0,  1,  0,  0, -185116,     48888),
    (0,  0,  0,  2, -114332,     -3149),
    (2,  0, -2,  0,   58793,    246158),
    (2, -1, -1,  0,   57066,   -152138),
    (2,  0,  1,  0,   53322,   -170733),
    (2, -1,  0,  0,   45758,   -204586),
    (0,  1, -1,  0,  -40923,   -129620),
    (1,  0,  0,  0,  -34720,    108743),
    (0,  1,  1,  0,  -30383,    104755),
    (2,  0,  0, -2,   15327,     10321),
    (0,  0,  1,  2,  -12528,         0),
    (0,  0,  1, -2,   10980,     79661),
    (4,  0, -1,  0,   10675,    -34782),
    (0,  0,  3,  0,   10034,    -23210),
    (4,  0, -2,  0,    8548,    -21636),
    (2,  1, -1,  0,   -7888,     24208),
    (2,  1,  0,  0,   -6766,     30824),
    (1,  0, -1,  0,   -5163,     -8379),
    (1,  1,  0,  0,    4987,    -16675),
    (2, -1,  1,  0,    4036,    -12831),
    (2,  0,  2,  0,    3994,    -10445),
    (4,  0,  0,  0,    3861,    -11650),
    (2,  0, -3,  0,    3665,     14403),
    (0,  1, -2,  0,   -2689,     -7003),
    (2,  0, -1,  2,   -2602,         0),
    (2, -1, -2,  0,    2390,     10056),
    (1,  0,  1,  0,   -2348,      6322),
    (2, -2,  0,  0,    2236,     -9884),
    (0,  1,  2,  0,   -2120,      5751),
    (0,  2,  0,  0,   -2069,         0),
    (2, -2, -1,  0,    2048,     -4950),
    (2,  0,  1, -2,   -1773,      4130),
    (2,  0,  0,  2,   -1595,         0),
    (4, -1, -1,  0,    1215,     -3958),
    (0,  0,  2,  2,   -1110,         0),
    (3,  0, -1,  0,    -892,      3258),
    (2,  1,  1,  0,    -810,      2616),
    (4, -1, -2,  0,     759,     -1897),
    (0,  2, -1,  0,    -713,     -2117),
    (2,  2, -1,  0,    -700,      2354),
    (2,  1, -2,  0,     691,         0),
    (2, -1,  0, -2,     596,         0),
    (4,  0,  1,  0,     549,     -1423),
    (0,  0,  4,  0,     537,     -1117),
    (4, -1,  0,  0,     520,     -1571),
    (1,  0, -2,  0,    -487,     -1739),
    (2,  1,  0, -2,    -399,         0),
    (0,  0,  2, -2,    -381,     -4421),
    (1,  1,  1,  0,     351,         0),
    (3,  0, -2,  0,    -340,         0),
    (4,  0, -3,  0,     330,         0),
    (2, -1,  2,  0,     327,         0),
    (0,  2,  1,  0,    -323,      1165),
    (1,  1, -1,  0,     299,         0),
    (2,  0,  3,  0,     294,         0),
    (2,  0, -1, -2,       0,      8752),
];

/// Latitude terms: `(D, M, M', F, Σb [1e-6 deg])`.
#[rustfmt::skip]
const LAT_TERMS: [(i8, i8, i8, i8, i32); 60] = [
    (0,  0,  0,  1, 5128122),
    (0,  0,  1,  1,  280602),
    (0,  0,  1, -1,  277693),
    (2,  0,  0, -1,  173237),
    (2,  0, -1,  1,   55413),
    (2,  0, -1, -1,   46271),
    (2,  0,  0,  1,   32573),
    (0,  0,  2,  1,   17198),
    (2,  0,  1, -1,    9266),
    (0,  0,  2, -1,    8822),
    (2, -1,  0, -1,    8216),
    (2,  0, -2, -1,    4324),
    (2,  0,  1,  1,    4200),
    (2,  1,  0, -1,   -3359),
    (2, -1, -1,  1,    2463),
    (2, -1,  0,  1,    2211),
    (2, -1, -1, -1,    2065),
    (0,  1, -1, -1,   -1870),
    (4,  0, -1, -1,    1828),
    (0,  1,  0,  1,   -1794),
    (0,  0,  0,  3,   -1749),
    (0,  1, -1,  1,   -1565),
    (1,  0,  0,  1,   -1491),
    (0,  1,  1,  1,   -1475),
    (0,  1,  1, -1,   -1410),
    (0,  1,  0, -1,   -1344),
    (1,  0,  0, -1,   -1335),
    (0,  0,  3,  1,    1107),
    (4,  0,  0, -1,    1021),
    (4,  0, -1,  1,     833),
    (0,  0,  1, -3,     777),
    (4,  0, -2,  1,     671),
    (2,  0,  0, -3,     607),
    (2,  0,  2, -1,     596),
    (2, -1,  1, -1,     491),
    (2,  0, -2,  1,    -451),
    (0,  0,  3, -1,     439),
    (2,  0,  2,  1,     422),
    (2,  0, -3, -1,     421),
    (2,  1, -1,  1,    -366),
    (2,  1,  0,  1,    -351),
    (4,  0,  0,  1,     331),
    (2, -1,  1,  1,     315),
    (2, -2,  0, -1,     302),
    (0,  0,  1,  3,    -283),
    (2,  1,  1, -1,    -229),
    (1,  1,  0, -1,     223),
    (1,  1,  0,  1,     223),
    (0,  1, -2, -1,    -220),
    (2,  1, -1, -1,    -220),
    (1,  0,  1,  1,    -185),
    (2, -1, -2, -1,     181),
    (0,  1,  2,  1,    -177),
    (4,  0, -2, -1,     176),
    (4, -1, -1, -1,     166),
    (1,  0,  1, -1,    -164),
    (4,  0,  1, -1,     132),
    (1,  0, -1, -1,    -119),
    (4, -1,  0, -1,     115),
    (2, -2,  0,  1,     107),
];

/// Mean distance term of the series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Lunar mean arguments in degrees: `(L', D, M, M', F)`.
fn mean_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (lp, d, m, mp, f)
}

/// Geometric lunar position referred to the mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_geometric(t: f64) -> EclipticPosition {
    let (lp, d, m, mp, f) = mean_arguments(t);
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;
    let e2 = e * e;

    let (d, m, mp, f) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );
    let ecc = |m_mult: i8| match m_mult.abs() {
        1 => e,
        2 => e2,
        _ => 1.0,
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cd, cm, cmp, cf, sl, sr) in &LON_DIST_TERMS {
        let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        let k = ecc(cm);
        sum_l += sl as f64 * k * arg.sin();
        sum_r += sr as f64 * k * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(cd, cm, cmp, cf, sb) in &LAT_TERMS {
        let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        sum_b += sb as f64 * ecc(cm) * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    let lp_rad = lp.to_radians();

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_rad - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_rad.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp_rad - mp).sin()
        - 115.0 * (lp_rad + mp).sin();

    EclipticPosition {
        longitude_deg: (lp + sum_l / 1e6).rem_euclid(360.0),
        latitude_deg: sum_b / 1e6,
        distance_km: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

/// Apparent lunar position: geometric + nutation in longitude.
///
/// Light-time for the Moon (≈0.7″) is below the series accuracy.
pub fn moon_apparent(t: f64, nutation_lon_deg: f64) -> EclipticPosition {
    let geo = moon_geometric(t);
    EclipticPosition {
        longitude_deg: (geo.longitude_deg + nutation_lon_deg).rem_euclid(360.0),
        ..geo
    }
}

/// Equatorial horizontal parallax in degrees for a geocentric distance.
pub fn horizontal_parallax_deg(distance_km: f64) -> f64 {
    const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;
    (EARTH_EQUATORIAL_RADIUS_KM / distance_km).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 47.a: 1992 Apr 12 0h TD.
    const T_1992: f64 = (2_448_724.5 - 2_451_545.0) / 36525.0;

    #[test]
    fn meeus_longitude() {
        let moon = moon_geometric(T_1992);
        assert!(
            (moon.longitude_deg - 133.162655).abs() < 1e-4,
            "λ = {}, expected 133.162655",
            moon.longitude_deg
        );
    }

    #[test]
    fn meeus_latitude() {
        let moon = moon_geometric(T_1992);
        assert!(
            (moon.latitude_deg + 3.229126).abs() < 1e-4,
            "β = {}, expected −3.229126",
            moon.latitude_deg
        );
    }

    #[test]
    fn meeus_distance() {
        let moon = moon_geometric(T_1992);
        assert!(
            (moon.distance_km - 368_409.7).abs() < 1.0,
            "Δ = {} km, expected 368409.7",
            moon.distance_km
        );
    }

    #[test]
    fn meeus_parallax() {
        let pi = horizontal_parallax_deg(368_409.7);
        assert!((pi - 0.991990).abs() < 1e-5, "π = {pi}, expected 0.991990");
    }

    #[test]
    fn apparent_adds_nutation() {
        let geo = moon_geometric(T_1992);
        let app = moon_apparent(T_1992, 0.004610);
        assert!((app.longitude_deg - geo.longitude_deg - 0.004610).abs() < 1e-12);
    }

    #[test]
    fn distance_within_orbit_extremes() {
        for i in 0..100 {
            let t = 0.25 + i as f64 * 0.0001;
            let moon = moon_geometric(t);
            assert!(
                (356_000.0..407_000.0).contains(&moon.distance_km),
                "distance = {}",
                moon.distance_km
            );
            assert!(moon.latitude_deg.abs() < 5.4, "β = {}", moon.latitude_deg);
        }
    }
}
