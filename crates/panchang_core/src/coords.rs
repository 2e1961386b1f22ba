//! Ecliptic → equatorial → horizontal conversions.

use std::f64::consts::TAU;

/// Apparent equatorial coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension, `[0, 2π)`.
    pub ra_rad: f64,
    /// Declination, `[-π/2, π/2]`.
    pub dec_rad: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

/// Rotate ecliptic longitude/latitude (degrees) into RA/Dec (radians)
/// using the obliquity `eps_deg`.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, eps_deg: f64) -> (f64, f64) {
    let (lon, lat, eps) = (lon_deg.to_radians(), lat_deg.to_radians(), eps_deg.to_radians());
    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();
    (ra.rem_euclid(TAU), dec)
}

/// Geocentric altitude in radians of an object at hour angle `ha_rad` and
/// declination `dec_rad` for an observer at latitude `phi_rad`.
pub fn altitude_rad(ha_rad: f64, dec_rad: f64, phi_rad: f64) -> f64 {
    (phi_rad.sin() * dec_rad.sin() + phi_rad.cos() * dec_rad.cos() * ha_rad.cos()).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911° →
        // α = 116.328942°, δ = 28.026183°
        let (ra, dec) = ecliptic_to_equatorial(113.215630, 6.684170, 23.4392911);
        assert!((ra.to_degrees() - 116.328942).abs() < 1e-5, "α = {}", ra.to_degrees());
        assert!((dec.to_degrees() - 28.026183).abs() < 1e-5, "δ = {}", dec.to_degrees());
    }

    #[test]
    fn equinox_maps_to_origin() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(ra.abs() < 1e-12 || (ra - TAU).abs() < 1e-12);
        assert!(dec.abs() < 1e-12);
    }

    #[test]
    fn zenith_at_transit() {
        let phi = 0.3;
        let alt = altitude_rad(0.0, phi, phi);
        assert!((alt - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }
}
