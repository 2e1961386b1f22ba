use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_core::{AnalyticEphemeris, Body, CachedEphemeris, Ephemeris};

fn bench_positions(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let jd = 2_460_953.5;

    c.bench_function("moon_position", |b| {
        b.iter(|| eph.position(black_box(jd), Body::Moon))
    });
    c.bench_function("sun_position", |b| {
        b.iter(|| eph.position(black_box(jd), Body::Sun))
    });
    c.bench_function("ayanamsa", |b| b.iter(|| eph.ayanamsa(black_box(jd))));
    c.bench_function("moon_position_cached", |b| {
        let cached = CachedEphemeris::new(&eph);
        b.iter(|| cached.position(black_box(jd), Body::Moon))
    });
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
