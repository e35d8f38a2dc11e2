// ABOUTME: Checks a production threshold table named by SWIM_LEVEL_REAL_TABLE
// ABOUTME: Ignored by default; run with --ignored when the file is available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use common::{init_test_logging, test_config};
use swim_level_checker::constants::env_config;
use swim_level_checker::engine::{classify, match_records, AgeBracketScheme, Classification};
use swim_level_checker::session::Session;

#[tokio::test]
#[ignore = "requires SWIM_LEVEL_REAL_TABLE pointing at a production table"]
async fn test_real_table_loads_and_every_category_is_usable() {
    init_test_logging();
    let path = env::var(env_config::REAL_TABLE).expect("SWIM_LEVEL_REAL_TABLE must be set");

    let session = Session::new(test_config(path));
    let table = session.load_configured().await.unwrap();
    assert!(!table.is_empty());

    let masters = AgeBracketScheme::masters();
    for key in table.categories() {
        assert!(
            masters.brackets().contains(&key.age_bracket),
            "bracket {} is not a masters bracket",
            key.age_bracket
        );
        let matched = match_records(table.records(), &key);
        assert!(!matched.is_empty(), "category {key} has no rows");
        assert!(
            matched
                .windows(2)
                .all(|pair| pair[0].threshold_seconds >= pair[1].threshold_seconds),
            "category {key} is not ordered slowest first"
        );
    }

    for stroke in session.strokes().unwrap() {
        assert!(!session.distances(&stroke).unwrap().is_empty());
    }
}

/// Swims exactly each row's threshold in every category.
///
/// The level must be the last row (slowest first) whose threshold is at or
/// above the swim, and the gap must name the row right after it. Compare a
/// handful of these against the levels the published table assigns before
/// relying on the rule for a new season's data.
#[tokio::test]
#[ignore = "requires SWIM_LEVEL_REAL_TABLE pointing at a production table"]
async fn test_real_table_threshold_swims_reach_their_own_row() {
    init_test_logging();
    let path = env::var(env_config::REAL_TABLE).expect("SWIM_LEVEL_REAL_TABLE must be set");

    let session = Session::new(test_config(path));
    let table = session.load_configured().await.unwrap();

    for key in table.categories() {
        let matched = match_records(table.records(), &key);
        for row in &matched {
            let swim = row.threshold_seconds;
            let expected = matched
                .iter()
                .rposition(|candidate| candidate.threshold_seconds >= swim)
                .unwrap();

            let Classification::Achieved { level, next, .. } = classify(&matched, swim) else {
                panic!("{key}: swim of {swim:.2}s at its own threshold was not achieved");
            };
            assert_eq!(
                level, matched[expected].record.level,
                "{key}: swim of {swim:.2}s"
            );
            assert_eq!(
                next.map(|gap| gap.level),
                matched.get(expected + 1).map(|row| row.record.level.clone()),
                "{key}: next level after {level}"
            );
        }
    }
}
