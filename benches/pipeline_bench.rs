use chrono::{Days, NaiveDate};
use conversion_chart::core::{
    AggregationMode, RawDailyRecord, RawVariant, Variant, ViewportCommand, ViewportController,
    ViewportPolicy, aggregate_weekly, build_chart_points, build_variants, parse_raw,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn variants() -> Vec<Variant> {
    build_variants(&[
        RawVariant::control("Original"),
        RawVariant::new(Some(10001), "Variation A"),
        RawVariant::new(Some(10002), "Variation B"),
    ])
}

fn raw_records(days: u64) -> Vec<RawDailyRecord> {
    let origin = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
    (0..days)
        .map(|i| {
            RawDailyRecord::new(origin + Days::new(i))
                .with_counts("0", 1_000 + i, 100 + i % 17)
                .with_counts("10001", 950 + i, 110 + i % 23)
                .with_counts("10002", 1_020 + i, 90 + i % 11)
        })
        .collect()
}

fn bench_daily_pipeline_3k(c: &mut Criterion) {
    let variants = variants();
    let raw = raw_records(3_000);

    c.bench_function("daily_pipeline_3k", |b| {
        b.iter(|| {
            let parsed = parse_raw(black_box(&raw), black_box(&variants));
            build_chart_points(&parsed, &variants, AggregationMode::Daily)
        })
    });
}

fn bench_weekly_aggregation_3k(c: &mut Criterion) {
    let variants = variants();
    let parsed = parse_raw(&raw_records(3_000), &variants);

    c.bench_function("weekly_aggregation_3k", |b| {
        b.iter(|| aggregate_weekly(black_box(&parsed), black_box(&variants)))
    });
}

fn bench_viewport_transitions_1k(c: &mut Criterion) {
    let commands = [
        ViewportCommand::ZoomIn,
        ViewportCommand::PanRight,
        ViewportCommand::ZoomIn,
        ViewportCommand::PanLeft,
        ViewportCommand::ZoomOut,
    ];

    c.bench_function("viewport_transitions_1k", |b| {
        b.iter(|| {
            let mut viewport = ViewportController::new(10_000, ViewportPolicy::default());
            for i in 0..1_000 {
                viewport.apply(black_box(commands[i % commands.len()]));
            }
            viewport.window()
        })
    });
}

criterion_group!(
    benches,
    bench_daily_pipeline_3k,
    bench_weekly_aggregation_3k,
    bench_viewport_transitions_1k
);
criterion_main!(benches);
