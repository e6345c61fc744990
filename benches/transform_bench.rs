//! Benchmarks for the chart transform and standings computation
//!
//! Run with: cargo bench

use chrono::{Duration, NaiveDate};
use courtside::chart::{ChartMatrix, ChartRow, RawRow};
use courtside::standings::{win_ratio_rows, GameResult};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn season_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 10, 16).unwrap()
}

fn create_raw_rows(days: usize) -> Vec<RawRow> {
    (0..days)
        .map(|d| {
            let values = (0..30).map(|t| ((d * 7 + t * 13) % 100) as f64).collect();
            ChartRow::new(season_start() + Duration::days(d as i64), values).to_raw()
        })
        .collect()
}

fn create_games(count: usize) -> Vec<GameResult> {
    (0..count)
        .map(|i| GameResult {
            date: season_start() + Duration::days((i / 8) as i64),
            home: i % 30,
            away: (i * 7 + 1) % 30,
            home_win: i % 3 != 0,
        })
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for days in [30, 170, 1000] {
        let rows = create_raw_rows(days);

        group.throughput(Throughput::Elements(days as u64));

        group.bench_function(format!("strict_{}", days), |b| {
            b.iter(|| ChartMatrix::transform(black_box(&rows)).unwrap())
        });

        group.bench_function(format!("lossy_{}", days), |b| {
            b.iter(|| ChartMatrix::transform_lossy(black_box(&rows)))
        });

        let matrix = ChartMatrix::transform(&rows).unwrap();
        group.bench_function(format!("google_table_{}", days), |b| {
            b.iter(|| black_box(&matrix).to_google_table())
        });
    }

    group.finish();
}

fn bench_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("standings");

    // A regular season is 1230 games
    for games in [1230, 5000] {
        let results = create_games(games);

        group.throughput(Throughput::Elements(games as u64));
        group.bench_function(format!("win_ratio_rows_{}", games), |b| {
            b.iter(|| win_ratio_rows(black_box(&results)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transform, bench_standings);
criterion_main!(benches);
