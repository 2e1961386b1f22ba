use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_core::AnalyticEphemeris;
use panchang_vedic_base::{
    ALL_UNIT_KINDS, GeoLocation, RiseSetConfig, RiseSetEvent, approximate_local_noon_jd,
    compute_rise_set, nakshatra_from_longitude,
};

fn unit_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("units");
    group.bench_function("index_and_name_all_kinds", |b| {
        b.iter(|| {
            ALL_UNIT_KINDS.map(|kind| {
                let index = kind.index_at(black_box(147.25));
                kind.name(index)
            })
        })
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(317.8)))
    });
    group.finish();
}

fn riseset_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let loc = GeoLocation::new(12.9719, 77.593, 0.0);
    let noon = approximate_local_noon_jd(2_460_953.5, loc.longitude_deg);
    let config = RiseSetConfig::default();

    let mut group = c.benchmark_group("riseset");
    group.bench_function("sunrise", |b| {
        b.iter(|| compute_rise_set(&eph, &loc, RiseSetEvent::Sunrise, black_box(noon), &config))
    });
    group.bench_function("moonrise", |b| {
        b.iter(|| compute_rise_set(&eph, &loc, RiseSetEvent::Moonrise, black_box(noon), &config))
    });
    group.finish();
}

criterion_group!(benches, unit_bench, riseset_bench);
criterion_main!(benches);
