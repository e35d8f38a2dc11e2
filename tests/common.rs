// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, record builders and small threshold tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `swim_level_checker`

use std::env;
use std::path::PathBuf;
use std::sync::Once;

use swim_level_checker::config::CheckerConfig;
use swim_level_checker::engine::ThresholdTable;
use swim_level_checker::models::{
    ElapsedTime, Gender, Level, Query, Stroke, ThresholdRecord, TimeValue,
};
use tracing::Level as LogLevel;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => LogLevel::TRACE,
            Ok("DEBUG") => LogLevel::DEBUG,
            Ok("INFO") => LogLevel::INFO,
            Ok("WARN" | "ERROR") | _ => LogLevel::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Path of the sample table shipped with the crate
pub fn sample_table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("sample_records.json")
}

/// Build one table row
pub fn record(
    bracket: &str,
    gender: Gender,
    stroke: &str,
    distance: u32,
    time: impl Into<TimeValue>,
    level: &str,
) -> ThresholdRecord {
    ThresholdRecord {
        age_bracket: bracket.parse().unwrap(),
        gender,
        stroke: Stroke::new(stroke),
        distance,
        threshold_time: time.into(),
        level: Level::new(level),
    }
}

/// `{C: 60, B: 50, A: 40}` for 25–29 male freestyle 50m, listed out of order
pub fn three_level_table() -> ThresholdTable {
    ThresholdTable::new(vec![
        record("25–29", Gender::Male, "freestyle", 50, 50.0, "B"),
        record("25–29", Gender::Male, "freestyle", 50, "0:40.00", "A"),
        record("25–29", Gender::Male, "freestyle", 50, "60.00", "C"),
    ])
}

/// Query for the 25–29 male freestyle 50m category
pub fn freestyle_query(age: i64, seconds: u8, centiseconds: u8) -> Query {
    Query::new(
        age,
        Gender::Male,
        "freestyle",
        50,
        ElapsedTime::new(0, seconds, centiseconds).unwrap(),
    )
}

/// Default configuration with an explicit table path
pub fn test_config(table_path: impl Into<PathBuf>) -> CheckerConfig {
    CheckerConfig {
        table_path: table_path.into(),
        ..CheckerConfig::default()
    }
}
