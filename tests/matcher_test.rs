// ABOUTME: Integration tests for the category record matcher
// ABOUTME: Verifies exact-key filtering and the stable slowest-first ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{record, three_level_table};
use swim_level_checker::engine::{match_records, ThresholdTable};
use swim_level_checker::models::{CategoryKey, Gender, Stroke};

fn key(bracket: &str, gender: Gender, stroke: &str, distance: u32) -> CategoryKey {
    CategoryKey {
        age_bracket: bracket.parse().unwrap(),
        gender,
        stroke: Stroke::new(stroke),
        distance,
    }
}

fn levels(table: &ThresholdTable, key: &CategoryKey) -> Vec<String> {
    match_records(table.records(), key)
        .iter()
        .map(|row| row.record.level.to_string())
        .collect()
}

#[test]
fn test_rows_are_ordered_slowest_first() {
    let table = three_level_table();
    let matched = match_records(
        table.records(),
        &key("25–29", Gender::Male, "freestyle", 50),
    );

    let thresholds: Vec<f64> = matched.iter().map(|row| row.threshold_seconds).collect();
    assert_eq!(thresholds, vec![60.0, 50.0, 40.0]);
    assert_eq!(
        levels(&table, &key("25–29", Gender::Male, "freestyle", 50)),
        vec!["C", "B", "A"]
    );
}

#[test]
fn test_every_key_field_must_match_exactly() {
    let table = ThresholdTable::new(vec![
        record("25–29", Gender::Male, "freestyle", 50, 30.0, "target"),
        record("30–34", Gender::Male, "freestyle", 50, 30.0, "other bracket"),
        record("25–29", Gender::Female, "freestyle", 50, 30.0, "other gender"),
        record("25–29", Gender::Male, "Freestyle", 50, 30.0, "other stroke"),
        record("25–29", Gender::Male, "freestyle", 100, 30.0, "other distance"),
    ]);

    assert_eq!(
        levels(&table, &key("25–29", Gender::Male, "freestyle", 50)),
        vec!["target"]
    );
}

#[test]
fn test_equal_thresholds_keep_table_order() {
    let table = ThresholdTable::new(vec![
        record("25–29", Gender::Male, "freestyle", 50, 45.0, "first"),
        record("25–29", Gender::Male, "freestyle", 50, 60.0, "slowest"),
        record("25–29", Gender::Male, "freestyle", 50, "0:45.00", "second"),
        record("25–29", Gender::Male, "freestyle", 50, "45.00", "third"),
    ]);

    assert_eq!(
        levels(&table, &key("25–29", Gender::Male, "freestyle", 50)),
        vec!["slowest", "first", "second", "third"]
    );
}

#[test]
fn test_unknown_category_matches_nothing() {
    let table = three_level_table();
    assert!(match_records(
        table.records(),
        &key("25–29", Gender::Male, "butterfly", 50)
    )
    .is_empty());
    assert!(match_records(&[], &key("25–29", Gender::Male, "freestyle", 50)).is_empty());
}

#[test]
fn test_mixed_time_encodings_sort_by_seconds() {
    let table = ThresholdTable::new(vec![
        record("30–34", Gender::Male, "breaststroke", 200, "3.05.00", "A"),
        record("30–34", Gender::Male, "breaststroke", 200, "3:30.00", "C"),
        record("30–34", Gender::Male, "breaststroke", 200, 195.5, "B"),
    ]);

    let matched = match_records(
        table.records(),
        &key("30–34", Gender::Male, "breaststroke", 200),
    );
    let thresholds: Vec<f64> = matched.iter().map(|row| row.threshold_seconds).collect();
    assert_eq!(thresholds, vec![210.0, 195.5, 185.0]);
}
