//! Deterministic providers for unit tests.

use std::f64::consts::TAU;

use panchang_core::{Body, EclipticPosition, Ephemeris, EphemerisError, Nutation};

/// Sun and Moon moving at mean rates with a sinusoidal lunar anomaly.
///
/// `t` is days since `epoch`. The Moon's speed swings between
/// `moon_rate ± moon_amp·2π/27.55` deg/day.
#[derive(Debug, Clone, Copy)]
pub struct MockEphemeris {
    pub epoch: f64,
    pub sun_start: f64,
    pub sun_rate: f64,
    pub moon_start: f64,
    pub moon_rate: f64,
    pub moon_amp: f64,
    pub ayanamsa: f64,
}

impl Default for MockEphemeris {
    fn default() -> Self {
        Self {
            epoch: 2_460_953.5,
            sun_start: 190.0,
            sun_rate: 0.9856,
            moon_start: 340.0,
            moon_rate: 13.176,
            moon_amp: 6.3,
            ayanamsa: 24.2,
        }
    }
}

impl MockEphemeris {
    pub fn tropical(&self, jd: f64, body: Body) -> f64 {
        let t = jd - self.epoch;
        match body {
            Body::Sun => self.sun_start + self.sun_rate * t,
            Body::Moon => {
                self.moon_start + self.moon_rate * t + self.moon_amp * (TAU * t / 27.55).sin()
            }
        }
    }
}

impl Ephemeris for MockEphemeris {
    fn position(&self, jd: f64, body: Body) -> Result<EclipticPosition, EphemerisError> {
        Ok(EclipticPosition {
            longitude_deg: self.tropical(jd, body).rem_euclid(360.0),
            latitude_deg: 0.0,
            distance_km: match body {
                Body::Sun => 149_597_870.7,
                Body::Moon => 384_400.0,
            },
        })
    }

    fn ayanamsa(&self, _jd: f64) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsa)
    }

    fn nutation(&self, _jd: f64) -> Result<Nutation, EphemerisError> {
        Ok(Nutation::at_centuries(0.0))
    }
}
