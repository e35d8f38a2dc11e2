// ABOUTME: Criterion benchmarks for the level classification pipeline
// ABOUTME: Measures time normalization, category matching and full query evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the classification pipeline.
//!
//! Tables are synthetic: every masters bracket, both genders, a set of
//! strokes and distances, and five levels per category.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swim_level_checker::engine::{
    evaluate, match_records, normalize_text, AgeBracketScheme, ThresholdTable,
};
use swim_level_checker::models::{
    CategoryKey, ElapsedTime, Gender, Level, Query, Stroke, ThresholdRecord, TimeValue,
};

const STROKES: [&str; 4] = ["freestyle", "backstroke", "breaststroke", "butterfly"];
const LEVELS: [&str; 5] = ["E", "D", "C", "B", "A"];

/// Build a table covering `distances` for every bracket, gender and stroke
#[allow(clippy::cast_precision_loss)]
fn generate_table(distances: &[u32]) -> ThresholdTable {
    let scheme = AgeBracketScheme::masters();
    let mut records = Vec::new();
    for bracket in scheme.brackets() {
        for gender in [Gender::Male, Gender::Female] {
            for stroke in STROKES {
                for &distance in distances {
                    let base = f64::from(distance) * 0.6;
                    for (step, level) in LEVELS.iter().enumerate() {
                        let seconds = base - step as f64 * 2.5;
                        let minutes = (seconds / 60.0).floor();
                        records.push(ThresholdRecord {
                            age_bracket: *bracket,
                            gender,
                            stroke: Stroke::new(stroke),
                            distance,
                            threshold_time: TimeValue::Text(format!(
                                "{minutes}:{:05.2}",
                                seconds - minutes * 60.0
                            )),
                            level: Level::new(*level),
                        });
                    }
                }
            }
        }
    }
    ThresholdTable::new(records)
}

fn bench_time_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for input in ["1:23.45", "7.47.40", "45.67", "garbage"] {
        group.bench_with_input(BenchmarkId::new("normalize_text", input), input, |b, input| {
            b.iter(|| normalize_text(black_box(input)));
        });
    }
    group.finish();
}

fn bench_category_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_records");
    let datasets = [
        ("small", generate_table(&[50])),
        ("medium", generate_table(&[50, 100, 200])),
        ("large", generate_table(&[25, 50, 100, 200, 400, 800, 1500])),
    ];

    let key = CategoryKey {
        age_bracket: AgeBracketScheme::masters().brackets()[3],
        gender: Gender::Female,
        stroke: Stroke::new("butterfly"),
        distance: 50,
    };

    for (name, table) in &datasets {
        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_with_input(BenchmarkId::new("match_records", name), table, |b, table| {
            b.iter(|| match_records(black_box(table.records()), black_box(&key)));
        });
    }
    group.finish();
}

fn bench_full_evaluation(c: &mut Criterion) {
    let table = generate_table(&[25, 50, 100, 200, 400, 800, 1500]);
    let scheme = AgeBracketScheme::masters();
    let query = Query::new(
        42,
        Gender::Male,
        "freestyle",
        100,
        ElapsedTime::new(0, 55, 30).unwrap_or_default(),
    );

    c.bench_function("evaluate_query", |b| {
        b.iter(|| evaluate(black_box(&table), black_box(&scheme), black_box(&query)));
    });
}

criterion_group!(
    benches,
    bench_time_normalization,
    bench_category_matching,
    bench_full_evaluation,
);
criterion_main!(benches);
