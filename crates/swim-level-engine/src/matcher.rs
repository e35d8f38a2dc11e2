// ABOUTME: Narrows the threshold table to one category, slowest threshold first
// ABOUTME: Exact-equality filter on bracket, gender, stroke and distance with a stable descending sort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use swim_level_core::models::{CategoryKey, ThresholdRecord};
use tracing::debug;

use crate::time_normalizer::normalize;

/// A table row paired with its threshold resolved to seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedRecord<'a> {
    /// The source row
    pub record: &'a ThresholdRecord,
    /// `record.threshold_time` in seconds
    pub threshold_seconds: f64,
}

/// Rows of `records` in the category `key`, ordered by descending threshold
///
/// Rows with equal thresholds keep their table order. An empty result means
/// the table has no data for this category.
#[must_use]
pub fn match_records<'a>(records: &'a [ThresholdRecord], key: &CategoryKey) -> Vec<MatchedRecord<'a>> {
    let mut matched: Vec<MatchedRecord<'a>> = records
        .iter()
        .filter(|record| record.matches(key))
        .map(|record| MatchedRecord {
            record,
            threshold_seconds: normalize(&record.threshold_time),
        })
        .collect();

    // sort_by is stable
    matched.sort_by(|a, b| b.threshold_seconds.total_cmp(&a.threshold_seconds));

    debug!(category = %key, matched = matched.len(), "matched threshold records");
    matched
}
