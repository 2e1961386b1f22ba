//! Geocentric solar longitude.
//!
//! Mean longitude and anomaly with the equation of centre (Meeus ch. 25,
//! "lower accuracy" theory, ≈0.01°). Longitudes are referred to the mean
//! equinox of date; apparent longitude adds nutation and aberration.

use crate::EclipticPosition;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Constant of aberration in degrees (20.4898″ at 1 AU).
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Geometric (true) solar position referred to the mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0. Latitude is set to zero
/// (the true solar latitude never exceeds 1.2″).
pub fn sun_geometric(t: f64) -> EclipticPosition {
    let t2 = t * t;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let r_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    EclipticPosition {
        longitude_deg: true_lon.rem_euclid(360.0),
        latitude_deg: 0.0,
        distance_km: r_au * AU_KM,
    }
}

/// Apparent solar position: geometric + nutation in longitude − aberration.
pub fn sun_apparent(t: f64, nutation_lon_deg: f64) -> EclipticPosition {
    let geo = sun_geometric(t);
    let r_au = geo.distance_km / AU_KM;
    EclipticPosition {
        longitude_deg: (geo.longitude_deg + nutation_lon_deg - ABERRATION_DEG / r_au)
            .rem_euclid(360.0),
        ..geo
    }
}
