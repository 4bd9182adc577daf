use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_config::ChartSettings;
use jyotish_core::KeplerianEphemeris;
use jyotish_engine::{BaseChart, BirthSpecification, ChartRequest, compute_chart};
use jyotish_vedic_base::{AyanamshaSystem, NodeMode};

fn pipeline_bench(c: &mut Criterion) {
    let eph = KeplerianEphemeris::new();
    let birth = BirthSpecification::new(1985, 1, 1, Some((5, 30, 0.0)), 28.6139, 77.209, 330)
        .expect("valid birth");
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("base_chart", |b| {
        b.iter(|| {
            BaseChart::compute(
                &eph,
                black_box(&birth),
                &AyanamshaSystem::Lahiri,
                NodeMode::Mean,
            )
        })
    });

    let full = ChartRequest::new(birth, ChartSettings::default()).evaluated_at(now);
    group.bench_function("full_chart", |b| {
        b.iter(|| compute_chart(&eph, black_box(&full)))
    });

    let unknown = BirthSpecification::new(1985, 1, 1, None, 28.6139, 77.209, 330)
        .expect("valid birth");
    let degraded = ChartRequest::new(unknown, ChartSettings::default());
    group.bench_function("unknown_time_chart", |b| {
        b.iter(|| compute_chart(&eph, black_box(&degraded)))
    });
    group.finish();
}

criterion_group!(benches, pipeline_bench);
criterion_main!(benches);
