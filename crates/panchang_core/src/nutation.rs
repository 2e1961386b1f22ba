//! Nutation and obliquity of the ecliptic.
//!
//! Delaunay arguments follow IERS Conventions 2010, Table 5.2e. The series
//! keeps the 18 largest lunisolar terms of the 1980 theory (Meeus, Table
//! 22.A), good to about 0.1″, which is far below what calendrical
//! boundaries or rise/set times can resolve.

use std::f64::consts::TAU;

/// Arcseconds to radians conversion factor.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay fundamental arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Lunisolar nutation terms.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S, S', C, C']`, with S/S′ the Δψ
/// coefficients and C/C′ the Δε coefficients in units of 0.0001″.
#[rustfmt::skip]
const NUTATION_TERMS: [[f64; 9]; 18] = [
    [ 0.0,  0.0, 0.0,  0.0, 1.0, -171996.0, -174.2, 92025.0,  8.9],
    [ 0.0,  0.0, 2.0, -2.0, 2.0,  -13187.0,   -1.6,  5736.0, -3.1],
    [ 0.0,  0.0, 2.0,  0.0, 2.0,   -2274.0,   -0.2,   977.0, -0.5],
    [ 0.0,  0.0, 0.0,  0.0, 2.0,    2062.0,    0.2,  -895.0,  0.5],
    [ 0.0,  1.0, 0.0,  0.0, 0.0,    1426.0,   -3.4,    54.0, -0.1],
    [ 1.0,  0.0, 0.0,  0.0, 0.0,     712.0,    0.1,    -7.0,  0.0],
    [ 0.0,  1.0, 2.0, -2.0, 2.0,    -517.0,    1.2,   224.0, -0.6],
    [ 0.0,  0.0, 2.0,  0.0, 1.0,    -386.0,   -0.4,   200.0,  0.0],
    [ 1.0,  0.0, 2.0,  0.0, 2.0,    -301.0,    0.0,   129.0, -0.1],
    [ 0.0, -1.0, 2.0, -2.0, 2.0,     217.0,   -0.5,   -95.0,  0.3],
    [ 1.0,  0.0, 0.0, -2.0, 0.0,    -158.0,    0.0,     0.0,  0.0],
    [ 0.0,  0.0, 2.0, -2.0, 1.0,     129.0,    0.1,   -70.0,  0.0],
    [-1.0,  0.0, 2.0,  0.0, 2.0,     123.0,    0.0,   -53.0,  0.0],
    [ 0.0,  0.0, 0.0,  2.0, 0.0,      63.0,    0.0,     0.0,  0.0],
    [ 1.0,  0.0, 0.0,  0.0, 1.0,      63.0,    0.1,   -33.0,  0.0],
    [-1.0,  0.0, 2.0,  2.0, 2.0,     -59.0,    0.0,    26.0,  0.0],
    [-1.0,  0.0, 0.0,  0.0, 1.0,     -58.0,   -0.1,    32.0,  0.0],
    [ 1.0,  0.0, 2.0,  0.0, 1.0,     -51.0,    0.0,    27.0,  0.0],
];

/// Nutation in longitude and obliquity `(Δψ, Δε)` in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &NUTATION_TERMS {
        let arg = row[0] * args[0] + row[1] * args[1] + row[2] * args[2] + row[3] * args[3]
            + row[4] * args[4];
        dpsi += (row[5] + row[6] * t) * arg.sin();
        deps += (row[7] + row[8] * t) * arg.cos();
    }
    (dpsi * 1e-4, deps * 1e-4)
}

/// Mean obliquity of the ecliptic in degrees (IAU 2006).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84381.406 - 46.836769 * t - 0.0001831 * t * t + 0.00200340 * t * t * t;
    arcsec / 3600.0
}

/// Nutation state at one instant, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub longitude_deg: f64,
    /// Nutation in obliquity Δε.
    pub obliquity_deg: f64,
    /// Mean obliquity ε₀.
    pub mean_obliquity_deg: f64,
}

impl Nutation {
    /// Nutation and mean obliquity at `t` Julian centuries of TT.
    pub fn at_centuries(t: f64) -> Self {
        let (dpsi, deps) = nutation_arcsec(t);
        Self {
            longitude_deg: dpsi / 3600.0,
            obliquity_deg: deps / 3600.0,
            mean_obliquity_deg: mean_obliquity_deg(t),
        }
    }

    /// True obliquity ε = ε₀ + Δε.
    pub fn true_obliquity_deg(&self) -> f64 {
        self.mean_obliquity_deg + self.obliquity_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 22.a: 1987 Apr 10 0h TD.
    const T_1987: f64 = (2_446_895.5 - 2_451_545.0) / 36525.0;

    #[test]
    fn meeus_nutation_example() {
        let (dpsi, deps) = nutation_arcsec(T_1987);
        assert!((dpsi + 3.788).abs() < 0.1, "Δψ = {dpsi}″, expected −3.788″");
        assert!((deps - 9.443).abs() < 0.1, "Δε = {deps}″, expected 9.443″");
    }

    #[test]
    fn meeus_mean_obliquity_example() {
        // ε₀ = 23°26′27.407″
        let eps = mean_obliquity_deg(T_1987);
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!(
            (eps - expected).abs() * 3600.0 < 0.1,
            "ε₀ = {eps}°, expected {expected}°"
        );
    }

    #[test]
    fn nutation_amplitude_bounded() {
        for i in 0..200 {
            let t = -2.0 + i as f64 * 0.02;
            let (dpsi, deps) = nutation_arcsec(t);
            assert!(dpsi.abs() < 20.0, "Δψ({t}) = {dpsi}");
            assert!(deps.abs() < 11.0, "Δε({t}) = {deps}");
        }
    }

    #[test]
    fn true_obliquity_adds_delta() {
        let n = Nutation::at_centuries(T_1987);
        assert!((n.true_obliquity_deg() - n.mean_obliquity_deg - n.obliquity_deg).abs() < 1e-15);
    }
}
