//! Per-request memoization of ephemeris lookups.
//!
//! Grid sampling evaluates the same instants for several unit kinds
//! (Tithi and Karana share the elongation grid), so one request-scoped cache
//! saves most of the series evaluations. Keys use `jd.to_bits()` because
//! instants within one request come from identical arithmetic.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Body, EclipticPosition, Ephemeris, EphemerisError, Nutation};

/// Telemetry from a cached provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub evaluations: u32,
    pub cache_hits: u32,
}

/// Memoizing wrapper around any [`Ephemeris`].
///
/// Create one per request and drop it afterwards; it never changes results.
pub struct CachedEphemeris<'a, E: Ephemeris + ?Sized> {
    inner: &'a E,
    positions: Mutex<HashMap<(u64, Body), EclipticPosition>>,
    ayanamsas: Mutex<HashMap<u64, f64>>,
    evaluations: AtomicU32,
    cache_hits: AtomicU32,
}

impl<'a, E: Ephemeris + ?Sized> CachedEphemeris<'a, E> {
    pub fn new(inner: &'a E) -> Self {
        Self {
            inner,
            positions: Mutex::new(HashMap::with_capacity(256)),
            ayanamsas: Mutex::new(HashMap::with_capacity(128)),
            evaluations: AtomicU32::new(0),
            cache_hits: AtomicU32::new(0),
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }

    fn record(&self, hit: bool) {
        let counter = if hit {
            &self.cache_hits
        } else {
            &self.evaluations
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for CachedEphemeris<'_, E> {
    fn position(&self, jd_ut: f64, body: Body) -> Result<EclipticPosition, EphemerisError> {
        let key = (jd_ut.to_bits(), body);
        {
            let map = self.positions.lock().unwrap_or_else(|p| p.into_inner());
            if let Some(pos) = map.get(&key) {
                self.record(true);
                return Ok(*pos);
            }
        }
        let pos = self.inner.position(jd_ut, body)?;
        self.record(false);
        self.positions
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .insert(key, pos);
        Ok(pos)
    }

    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        let key = jd_ut.to_bits();
        {
            let map = self.ayanamsas.lock().unwrap_or_else(|p| p.into_inner());
            if let Some(aya) = map.get(&key) {
                self.record(true);
                return Ok(*aya);
            }
        }
        let aya = self.inner.ayanamsa(jd_ut)?;
        self.record(false);
        self.ayanamsas
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .insert(key, aya);
        Ok(aya)
    }

    fn nutation(&self, jd_ut: f64) -> Result<Nutation, EphemerisError> {
        self.inner.nutation(jd_ut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalyticEphemeris;

    #[test]
    fn repeated_lookup_hits_cache() {
        let eph = AnalyticEphemeris::default();
        let cached = CachedEphemeris::new(&eph);
        let a = cached.position(2_460_953.5, Body::Moon).unwrap();
        let b = cached.position(2_460_953.5, Body::Moon).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            cached.stats(),
            CacheStats {
                evaluations: 1,
                cache_hits: 1
            }
        );
    }

    #[test]
    fn cached_values_match_provider() {
        let eph = AnalyticEphemeris::default();
        let cached = CachedEphemeris::new(&eph);
        for i in 0..10 {
            let jd = 2_460_953.5 + i as f64 * 0.3;
            assert_eq!(
                cached.position(jd, Body::Sun).unwrap(),
                eph.position(jd, Body::Sun).unwrap()
            );
            assert_eq!(cached.ayanamsa(jd).unwrap(), eph.ayanamsa(jd).unwrap());
        }
    }

    #[test]
    fn errors_are_not_cached() {
        let eph = AnalyticEphemeris::default();
        let cached = CachedEphemeris::new(&eph);
        assert!(cached.position(0.0, Body::Sun).is_err());
        assert_eq!(cached.stats(), CacheStats::default());
    }
}
