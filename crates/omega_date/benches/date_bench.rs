// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![expect(missing_docs, reason = "Benchmark code")]
#![expect(clippy::unwrap_used, reason = "Benchmark code")]

//! Benchmark to assess the cost of the core date operations: calendar-day
//! addition, second addition, and difference computation between two dates.

use criterion::{Criterion, criterion_group, criterion_main};
use omega_date::OmegaDate;

fn criterion_benchmark(c: &mut Criterion) {
    date_operations(c);
}

fn date_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_operations");

    let date: OmegaDate = "2024-08-21T07:04:37Z".parse().unwrap();
    let other = date.clone().add_days(1).add_seconds(1);

    group.bench_function("add_days", |b| {
        b.iter(|| date.clone().add_days(1));
    });

    group.bench_function("add_seconds", |b| {
        b.iter(|| date.clone().add_seconds(1));
    });

    group.bench_function("chained_adjustment", |b| {
        b.iter(|| date.clone().add_days(1).add_seconds(1));
    });

    group.bench_function("millis_since", |b| {
        b.iter(|| other.millis_since(&date));
    });

    group.bench_function("format_date", |b| {
        b.iter(|| date.format_date());
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
