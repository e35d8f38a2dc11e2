// ABOUTME: Integration tests for level classification and the next-level gap
// ABOUTME: Covers achieved, not-achieved and no-category outcomes plus full-pipeline evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{freestyle_query, record, three_level_table};
use swim_level_checker::engine::{
    classify, evaluate, match_records, AgeBracketScheme, Classification, Evaluation,
    ThresholdTable,
};
use swim_level_checker::models::{CategoryKey, Gender, Stroke};

fn freestyle_key() -> CategoryKey {
    CategoryKey {
        age_bracket: "25–29".parse().unwrap(),
        gender: Gender::Male,
        stroke: Stroke::new("freestyle"),
        distance: 50,
    }
}

fn classify_table(table: &ThresholdTable, query_seconds: f64) -> Classification {
    let matched = match_records(table.records(), &freestyle_key());
    classify(&matched, query_seconds)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_middle_level_with_gap_to_faster_level() {
    let classification = classify_table(&three_level_table(), 45.0);

    assert_eq!(classification.achieved_level().unwrap().as_str(), "B");
    let gap = classification.next_level_gap().unwrap();
    assert_eq!(gap.level.as_str(), "A");
    assert_close(gap.threshold_seconds, 40.0);
    assert_close(gap.delta_seconds, 5.0);
}

#[test]
fn test_fastest_level_has_no_gap() {
    let classification = classify_table(&three_level_table(), 39.0);

    assert_eq!(classification.achieved_level().unwrap().as_str(), "A");
    assert!(classification.next_level_gap().is_none());
}

#[test]
fn test_slowest_level_only() {
    let classification = classify_table(&three_level_table(), 55.5);

    assert_eq!(classification.achieved_level().unwrap().as_str(), "C");
    let gap = classification.next_level_gap().unwrap();
    assert_eq!(gap.level.as_str(), "B");
    assert_close(gap.delta_seconds, 5.5);
}

#[test]
fn test_time_equal_to_threshold_achieves_it() {
    let classification = classify_table(&three_level_table(), 50.0);
    assert_eq!(classification.achieved_level().unwrap().as_str(), "B");
}

#[test]
fn test_two_row_category() {
    let table = ThresholdTable::new(vec![
        record("25–29", Gender::Male, "freestyle", 50, "0:30.00", "1"),
        record("25–29", Gender::Male, "freestyle", 50, "0:28.00", "2"),
    ]);

    let between = classify_table(&table, 29.0);
    assert_eq!(between.achieved_level().unwrap().as_str(), "1");
    assert_close(between.next_level_gap().unwrap().delta_seconds, 1.0);

    let fastest = classify_table(&table, 27.5);
    assert_eq!(fastest.achieved_level().unwrap().as_str(), "2");
    assert!(fastest.next_level_gap().is_none());
}

#[test]
fn test_too_slow_is_not_achieved() {
    let classification = classify_table(&three_level_table(), 61.0);
    assert_eq!(classification, Classification::NotAchieved);
    assert!(classification.achieved_level().is_none());
}

#[test]
fn test_no_rows_is_distinct_from_not_achieved() {
    let classification = classify_table(&ThresholdTable::default(), 30.0);
    assert_eq!(classification, Classification::NoMatchingCategory);
    assert_ne!(classification, Classification::NotAchieved);
}

#[test]
fn test_equal_thresholds_pick_the_later_row() {
    // Equal thresholds: the later row in table order is the achieved one
    let table = ThresholdTable::new(vec![
        record("25–29", Gender::Male, "freestyle", 50, 60.0, "C"),
        record("25–29", Gender::Male, "freestyle", 50, 50.0, "B"),
        record("25–29", Gender::Male, "freestyle", 50, 50.0, "B+"),
        record("25–29", Gender::Male, "freestyle", 50, 40.0, "A"),
    ]);

    let classification = classify_table(&table, 50.0);
    assert_eq!(classification.achieved_level().unwrap().as_str(), "B+");
    assert_eq!(classification.next_level_gap().unwrap().level.as_str(), "A");
}

#[test]
fn test_evaluate_runs_the_whole_pipeline() {
    let table = three_level_table();
    let scheme = AgeBracketScheme::masters();

    let Evaluation::Classified(classified) = evaluate(&table, &scheme, &freestyle_query(27, 45, 0))
    else {
        panic!("age 27 should resolve to a bracket");
    };
    assert_eq!(classified.age_bracket.label(), "25–29");
    assert_close(classified.query_seconds, 45.0);
    assert_eq!(classified.verdicts.len(), 3);
    let achieved: Vec<bool> = classified.verdicts.iter().map(|v| v.achieved).collect();
    assert_eq!(achieved, vec![true, true, false]);
    assert_eq!(
        classified.classification.achieved_level().unwrap().as_str(),
        "B"
    );
}

#[test]
fn test_evaluate_reports_uncovered_age() {
    let evaluation = evaluate(
        &three_level_table(),
        &AgeBracketScheme::masters(),
        &freestyle_query(17, 45, 0),
    );
    assert_eq!(evaluation, Evaluation::AgeNotCovered { age: 17 });
}

#[test]
fn test_evaluate_reports_missing_category_for_other_bracket() {
    let Evaluation::Classified(classified) = evaluate(
        &three_level_table(),
        &AgeBracketScheme::masters(),
        &freestyle_query(40, 45, 0),
    ) else {
        panic!("age 40 should resolve to a bracket");
    };
    assert_eq!(classified.age_bracket.label(), "40–44");
    assert!(classified.verdicts.is_empty());
    assert_eq!(
        classified.classification,
        Classification::NoMatchingCategory
    );
}
