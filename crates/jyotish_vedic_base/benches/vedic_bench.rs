use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_vedic_base::dasha::{DashaSystem, compute_dasha};
use jyotish_vedic_base::{
    ALL_GRAHAS, AspectSet, Ayanamsha, AyanamshaSystem, Graha, NodeMode, Rashi, SHODASHAVARGA,
    ashtakavarga, nakshatra_from_longitude, rahu_deg, varga_longitude,
};

const LONS: [f64; 9] = [256.5, 76.25, 21.0, 241.0, 166.0, 276.0, 296.0, 126.0, 306.0];

fn ayanamsha_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;
    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri_mean", |b| {
        b.iter(|| AyanamshaSystem::Lahiri.offset_deg(black_box(jd)))
    });
    group.bench_function("true_node", |b| {
        b.iter(|| rahu_deg(black_box(0.24), NodeMode::True))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("zodiac");
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(123.456)))
    });
    group.bench_function("shodashavarga", |b| {
        b.iter(|| {
            for v in SHODASHAVARGA {
                let _ = varga_longitude(black_box(123.456), v);
            }
        })
    });
    group.finish();
}

fn chart_math_bench(c: &mut Criterion) {
    let pairs: Vec<(Graha, f64)> = ALL_GRAHAS.iter().copied().zip(LONS).collect();
    let signs: [Rashi; 7] = std::array::from_fn(|i| Rashi::from_longitude(LONS[i]));
    let birth = Utc.with_ymd_and_hms(1985, 1, 1, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("chart_math");
    group.bench_function("vimshottari_depth3", |b| {
        b.iter(|| compute_dasha(DashaSystem::Vimshottari, black_box(76.25), birth, 3))
    });
    group.bench_function("ashtakavarga", |b| {
        b.iter(|| ashtakavarga(black_box(&signs), Rashi::Virgo))
    });
    group.bench_function("drishti", |b| {
        b.iter(|| AspectSet::build(black_box(&pairs), Some(Rashi::Virgo)))
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, zodiac_bench, chart_math_bench);
criterion_main!(benches);
