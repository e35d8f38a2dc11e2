// ABOUTME: Integration tests for time normalization
// ABOUTME: Covers dotted, colon and decimal encodings, malformed input and elapsed-time conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use swim_level_checker::engine::{elapsed_seconds, normalize, normalize_text};
use swim_level_checker::models::{ElapsedTime, TimeValue};

const TOLERANCE: f64 = 1e-9;

fn assert_seconds(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_colon_encoding() {
    assert_seconds(normalize_text("1:23.45"), 83.45);
    assert_seconds(normalize_text("0:59.99"), 59.99);
    assert_seconds(normalize_text("10:00.00"), 600.0);
}

#[test]
fn test_dotted_encoding_is_minutes_seconds_centiseconds() {
    // 7 * 60 + 47 + 0.40
    assert_seconds(normalize_text("7.47.40"), 467.40);
    assert_seconds(normalize_text("0.31.05"), 31.05);
}

#[test]
fn test_single_leading_dot_is_dropped() {
    assert_seconds(normalize_text(".1.05.30"), 65.30);
    assert_seconds(normalize_text(".45"), 45.0);
    assert_seconds(normalize_text(" .0.31.05 "), 31.05);
    // Only one dot is dropped
    assert_seconds(normalize_text("..45"), 0.45);
    assert_seconds(normalize_text("."), 0.0);
}

#[test]
fn test_plain_decimal_passes_through() {
    assert_seconds(normalize_text("45.67"), 45.67);
    assert_seconds(normalize_text("30"), 30.0);
    assert_seconds(normalize_text("  28.50  "), 28.5);
}

#[test]
fn test_numeric_value_passes_through() {
    assert_seconds(normalize(&TimeValue::Seconds(45.67)), 45.67);
    assert_seconds(normalize(&TimeValue::from("1:23.45")), 83.45);
}

#[test]
fn test_malformed_input_is_zero() {
    for input in ["", "   ", "abc", "NaN", "inf", ":30.00", "1:", "a:b"] {
        assert_seconds(normalize_text(input), 0.0);
    }
}

#[test]
fn test_dotted_with_bad_segment_counts_it_as_zero() {
    assert_seconds(normalize_text("x.30.50"), 30.5);
}

#[test]
fn test_text_after_second_colon_is_ignored() {
    assert_seconds(normalize_text("1:05.50:99"), 65.5);
}

#[test]
fn test_normalizing_the_result_again_is_stable() {
    for input in ["1:23.45", "45.67", "7.47.40", "0:28.50"] {
        let once = normalize_text(input);
        let twice = normalize_text(&once.to_string());
        assert_seconds(twice, once);
    }
}

#[test]
fn test_elapsed_time_conversion() {
    let elapsed = ElapsedTime::new(1, 23, 45).unwrap();
    assert_seconds(elapsed_seconds(&elapsed), 83.45);

    let short = ElapsedTime::new(0, 5, 7).unwrap();
    assert_seconds(elapsed_seconds(&short), 5.07);

    assert_seconds(elapsed_seconds(&ElapsedTime::default()), 0.0);
}

#[test]
fn test_elapsed_time_bounds() {
    assert!(ElapsedTime::new(59, 59, 99).is_ok());
    assert!(ElapsedTime::new(60, 0, 0).is_err());
    assert!(ElapsedTime::new(0, 60, 0).is_err());
    assert!(ElapsedTime::new(0, 0, 100).is_err());
}

#[test]
fn test_elapsed_time_from_form_fields() {
    let elapsed = ElapsedTime::from_fields("1", "", "5").unwrap();
    assert_eq!(elapsed, ElapsedTime::new(1, 0, 5).unwrap());

    let lenient = ElapsedTime::from_fields("x", " 30 ", "-1").unwrap();
    assert_eq!(lenient, ElapsedTime::new(0, 30, 0).unwrap());

    assert!(ElapsedTime::from_fields("0", "75", "0").is_err());
    assert!(ElapsedTime::from_fields("999", "0", "0").is_err());
}
