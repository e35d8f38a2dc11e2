// ABOUTME: Runs one query through bracket resolution, matching and classification
// ABOUTME: Pure synchronous pipeline returning every intermediate decision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use swim_level_core::models::{AgeBracket, CategoryKey, Query};

use crate::age_brackets::AgeBracketScheme;
use crate::classifier::{classify, verdicts, Classification, RecordVerdict};
use crate::matcher::match_records;
use crate::table::ThresholdTable;
use crate::time_normalizer::elapsed_seconds;

/// Decisions made while classifying a query whose age resolved to a bracket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedQuery {
    /// Resolved age bracket
    pub age_bracket: AgeBracket,
    /// Query time in seconds
    pub query_seconds: f64,
    /// Verdict for each matched row, slowest threshold first
    pub verdicts: Vec<RecordVerdict>,
    /// Final classification
    pub classification: Classification,
}

/// Result of evaluating one query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// No bracket of the scheme covers the age
    AgeNotCovered {
        /// The submitted age
        age: i64,
    },
    /// The age resolved and the category was looked up
    Classified(ClassifiedQuery),
}

/// Evaluate `query` against `table` using `scheme` for age brackets
#[must_use]
pub fn evaluate(table: &ThresholdTable, scheme: &AgeBracketScheme, query: &Query) -> Evaluation {
    let Some(age_bracket) = scheme.resolve(query.age) else {
        return Evaluation::AgeNotCovered { age: query.age };
    };

    let query_seconds = elapsed_seconds(&query.elapsed);
    let key = CategoryKey {
        age_bracket,
        gender: query.gender,
        stroke: query.stroke.clone(),
        distance: query.distance,
    };
    let matched = match_records(table.records(), &key);

    Evaluation::Classified(ClassifiedQuery {
        age_bracket,
        query_seconds,
        verdicts: verdicts(&matched, query_seconds),
        classification: classify(&matched, query_seconds),
    })
}
