//! Sidereal positions and the angular quantities the units divide.

use panchang_core::{Body, Ephemeris};
use panchang_vedic_base::{AngularBasis, UnitKind};

use crate::error::SearchError;

/// Sidereal longitude of `body` at `jd_ut`, degrees `[0, 360)`.
pub fn sidereal_longitude<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    body: Body,
) -> Result<f64, SearchError> {
    let tropical = eph.longitude(jd_ut, body)?;
    let aya = eph.ayanamsa(jd_ut)?;
    Ok((tropical - aya).rem_euclid(360.0))
}

/// Moon − Sun elongation at `jd_ut`, degrees `[0, 360)`.
///
/// The ayanamsha cancels in the difference, so tropical longitudes suffice.
pub fn elongation_at<E: Ephemeris + ?Sized>(eph: &E, jd_ut: f64) -> Result<f64, SearchError> {
    let moon = eph.longitude(jd_ut, Body::Moon)?;
    let sun = eph.longitude(jd_ut, Body::Sun)?;
    Ok((moon - sun).rem_euclid(360.0))
}

/// Moon sidereal longitude at `jd_ut`.
pub fn moon_sidereal_at<E: Ephemeris + ?Sized>(eph: &E, jd_ut: f64) -> Result<f64, SearchError> {
    sidereal_longitude(eph, jd_ut, Body::Moon)
}

/// (Sun sidereal + Moon sidereal) mod 360 at `jd_ut`.
///
/// The ayanamsha does NOT cancel in the sum.
pub fn sidereal_sum_at<E: Ephemeris + ?Sized>(eph: &E, jd_ut: f64) -> Result<f64, SearchError> {
    let sun = sidereal_longitude(eph, jd_ut, Body::Sun)?;
    let moon = sidereal_longitude(eph, jd_ut, Body::Moon)?;
    Ok((sun + moon).rem_euclid(360.0))
}

/// The angle that `kind` divides, evaluated at `jd_ut`.
pub fn angle_at<E: Ephemeris + ?Sized>(
    eph: &E,
    kind: UnitKind,
    jd_ut: f64,
) -> Result<f64, SearchError> {
    match kind.basis() {
        AngularBasis::Elongation => elongation_at(eph, jd_ut),
        AngularBasis::MoonSidereal => moon_sidereal_at(eph, jd_ut),
        AngularBasis::SiderealSum => sidereal_sum_at(eph, jd_ut),
    }
}
