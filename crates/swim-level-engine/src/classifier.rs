// ABOUTME: Determines the achieved level and the gap to the next level
// ABOUTME: Scans rows matched in descending threshold order against the query time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Level classification
//!
//! Input rows must come from [`match_records`](crate::matcher::match_records),
//! i.e. sorted slowest threshold first. A row is *achieved* when the query
//! time is at or under its threshold.
//!
//! The achieved level is the **last** achieved row in that order, and the
//! gap target is the row right after it. With rows `{C: 60, B: 50, A: 40}`
//! and a 45.0 s swim, C and B are achieved, the level is B, and the gap is
//! 5.00 s to A.

use serde::Serialize;
use swim_level_core::models::Level;
use tracing::debug;

use crate::matcher::MatchedRecord;

/// Distance from the query time to the row after the achieved one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextLevelGap {
    /// Level of the next row
    pub level: Level,
    /// Threshold of the next row in seconds
    pub threshold_seconds: f64,
    /// `|threshold_seconds - query_seconds|`
    pub delta_seconds: f64,
}

/// Result of classifying one query against its matched rows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Classification {
    /// No table rows exist for the category
    NoMatchingCategory,
    /// Rows exist but the time meets none of their thresholds
    NotAchieved,
    /// The time meets at least one threshold
    Achieved {
        /// Achieved level
        level: Level,
        /// Threshold of the achieved row in seconds
        threshold_seconds: f64,
        /// Gap to the following row, when there is one
        next: Option<NextLevelGap>,
    },
}

impl Classification {
    /// The achieved level, if any
    #[must_use]
    pub const fn achieved_level(&self) -> Option<&Level> {
        match self {
            Self::Achieved { level, .. } => Some(level),
            Self::NoMatchingCategory | Self::NotAchieved => None,
        }
    }

    /// The gap to the next level, if any
    #[must_use]
    pub const fn next_level_gap(&self) -> Option<&NextLevelGap> {
        match self {
            Self::Achieved { next, .. } => next.as_ref(),
            Self::NoMatchingCategory | Self::NotAchieved => None,
        }
    }
}

/// Per-row decision, in scan order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordVerdict {
    /// Row level
    pub level: Level,
    /// Row threshold in seconds
    pub threshold_seconds: f64,
    /// Whether the query time is at or under the threshold
    pub achieved: bool,
}

/// Whether a time meets a threshold (faster or equal)
#[must_use]
pub fn achieves(query_seconds: f64, threshold_seconds: f64) -> bool {
    query_seconds <= threshold_seconds
}

/// Classify `query_seconds` against rows sorted by descending threshold
#[must_use]
pub fn classify(matched: &[MatchedRecord<'_>], query_seconds: f64) -> Classification {
    if matched.is_empty() {
        return Classification::NoMatchingCategory;
    }

    let Some(index) = matched
        .iter()
        .rposition(|row| achieves(query_seconds, row.threshold_seconds))
    else {
        debug!(query_seconds, rows = matched.len(), "no threshold achieved");
        return Classification::NotAchieved;
    };

    let achieved = matched[index];
    let next = matched.get(index + 1).map(|row| NextLevelGap {
        level: row.record.level.clone(),
        threshold_seconds: row.threshold_seconds,
        delta_seconds: (row.threshold_seconds - query_seconds).abs(),
    });

    debug!(
        query_seconds,
        level = %achieved.record.level,
        next_level = ?next.as_ref().map(|gap| gap.level.as_str()),
        "classified level"
    );

    Classification::Achieved {
        level: achieved.record.level.clone(),
        threshold_seconds: achieved.threshold_seconds,
        next,
    }
}

/// Achieved / not-achieved decision for every matched row, in scan order
#[must_use]
pub fn verdicts(matched: &[MatchedRecord<'_>], query_seconds: f64) -> Vec<RecordVerdict> {
    matched
        .iter()
        .map(|row| RecordVerdict {
            level: row.record.level.clone(),
            threshold_seconds: row.threshold_seconds,
            achieved: achieves(query_seconds, row.threshold_seconds),
        })
        .collect()
}
