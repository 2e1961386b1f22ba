//! Earth Rotation Angle and Greenwich sidereal time.
//!
//! All functions take UT Julian Days (UT1 ≈ UTC to better than a second,
//! which is below the resolution of rise/set work).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, `[0, 2π)`.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du),
/// Du = JD_UT − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, `[0, 2π)`.
///
/// GMST = ERA + polynomial(T) with T in Julian centuries from J2000.0:
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵  (arcseconds)
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Greenwich Apparent Sidereal Time in radians, `[0, 2π)`.
///
/// Adds the equation of the equinoxes `Δψ·cos ε` to GMST.
pub fn apparent_sidereal_time_rad(jd_ut: f64, nutation_lon_rad: f64, true_obliquity_rad: f64) -> f64 {
    (gmst_rad(jd_ut) + nutation_lon_rad * true_obliquity_rad.cos()).rem_euclid(TAU)
}

/// Local sidereal time from Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_rad(greenwich_rad: f64, longitude_east_rad: f64) -> f64 {
    (greenwich_rad + longitude_east_rad).rem_euclid(TAU)
}
