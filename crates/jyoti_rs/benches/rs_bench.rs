use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_rs::*;

fn facade_bench(c: &mut Criterion) {
    let j = Jyotish::new(JyotiConfig::default()).unwrap();
    let input = j
        .birth_input()
        .date(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
        .time(10, 30, 0)
        .location(28.6139, 77.2090)
        .tz_offset_hours(5.5)
        .build()
        .unwrap();
    let chart = j.build_chart(&input).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();

    let mut group = c.benchmark_group("rs");
    group.bench_function("build_chart", |b| b.iter(|| j.build_chart(black_box(&input))));
    group.bench_function("dasha_vimshottari_depth2", |b| {
        b.iter(|| j.build_dasha_timeline(DashaSystem::Vimshottari, black_box(&chart)))
    });
    group.bench_function("match_charts", |b| b.iter(|| j.match_charts(black_box(&chart), &chart)));
    group.bench_function("compute_panchang", |b| {
        b.iter(|| j.compute_panchang(black_box(date), 28.6139, 77.2090, 5.5))
    });
    group.finish();
}

criterion_group!(benches, facade_bench);
criterion_main!(benches);
