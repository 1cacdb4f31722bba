// ABOUTME: Criterion benchmarks for the daily goal calculator
// ABOUTME: Measures single calculations, detailed breakdowns, and batches of profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the daily goal calculator.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kilo::intelligence::{DailyProgress, GoalCalculator};
use kilo::models::{ActivityLevel, Biometrics, DailyStats, Goal, Sex};

/// Deterministic spread of valid profiles across every enum variant
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_profiles(count: usize) -> Vec<Biometrics> {
    (0..count)
        .map(|index| Biometrics {
            weight_kg: 45.0 + ((index * 37) % 1200) as f64 / 10.0,
            height_cm: 150.0 + ((index * 13) % 500) as f64 / 10.0,
            age_years: 18 + ((index * 7) % 60) as u32,
            sex: if index % 2 == 0 { Sex::Male } else { Sex::Female },
            activity_level: ActivityLevel::ALL[index % ActivityLevel::ALL.len()],
            goal: match index % 3 {
                0 => Goal::Cut,
                1 => Goal::Bulk,
                _ => Goal::Recomp,
            },
        })
        .collect()
}

fn bench_single_calculation(c: &mut Criterion) {
    let calculator = GoalCalculator::default();
    let profile = generate_profiles(1)[0];

    c.bench_function("calculate", |b| {
        b.iter(|| calculator.calculate(black_box(&profile)));
    });
    c.bench_function("calculate_detailed", |b| {
        b.iter(|| calculator.calculate_detailed(black_box(&profile)));
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_profile_batches(c: &mut Criterion) {
    let calculator = GoalCalculator::default();
    let mut group = c.benchmark_group("goal_batches");

    for count in [10_usize, 100, 1000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &profiles, |b, profiles| {
            b.iter(|| {
                profiles
                    .iter()
                    .filter_map(|p| calculator.calculate(p).ok())
                    .map(|g| u64::from(g.calories))
                    .sum::<u64>()
            });
        });
    }
    group.finish();
}

fn bench_progress(c: &mut Criterion) {
    let calculator = GoalCalculator::default();
    let goals = calculator.calculate(&generate_profiles(1)[0]);
    let Ok(goals) = goals else {
        return;
    };
    let mut stats = DailyStats::empty(chrono::NaiveDate::MIN);
    stats.add_steps(6500);
    stats.calories = 1700;
    stats.protein_g = 120;

    c.bench_function("daily_progress", |b| {
        b.iter(|| DailyProgress::compute(black_box(&goals), black_box(&stats)));
    });
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_profile_batches,
    bench_progress
);
criterion_main!(benches);
