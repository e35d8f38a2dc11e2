// ABOUTME: Human-readable trace of the decisions made during a level check
// ABOUTME: Advisory lines in decision order, mirrored to tracing at debug level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use swim_level_core::models::Query;
use swim_level_engine::{Classification, Evaluation};
use tracing::debug;

/// Ordered diagnostic lines for one check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiagnosticLog {
    lines: Vec<String>,
}

impl DiagnosticLog {
    /// Empty log
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        debug!(target: "swim_level_checker::diagnostics", "{line}");
        self.lines.push(line);
    }

    /// Describe every decision of `evaluation`, in the order it was made
    #[must_use]
    pub fn from_evaluation(query: &Query, evaluation: &Evaluation) -> Self {
        let mut log = Self::new();
        let classified = match evaluation {
            Evaluation::AgeNotCovered { age } => {
                log.record(format!("age {age} is not covered by any age bracket"));
                return log;
            }
            Evaluation::Classified(classified) => classified,
        };

        log.record(format!(
            "age {} resolved to bracket {}",
            query.age, classified.age_bracket
        ));
        log.record(format!(
            "time {} normalized to {:.2}s",
            query.elapsed, classified.query_seconds
        ));
        log.record(format!(
            "{} threshold records matched {} {} {} {}m",
            classified.verdicts.len(),
            classified.age_bracket,
            query.gender,
            query.stroke,
            query.distance
        ));
        for verdict in &classified.verdicts {
            let status = if verdict.achieved {
                "achieved"
            } else {
                "not achieved"
            };
            log.record(format!(
                "level {} (threshold {:.2}s): {status}",
                verdict.level, verdict.threshold_seconds
            ));
        }

        match &classified.classification {
            Classification::NoMatchingCategory => log.record("no matching category"),
            Classification::NotAchieved => log.record("no threshold met"),
            Classification::Achieved { level, next, .. } => {
                log.record(format!("achieved level {level}"));
                match next {
                    Some(gap) => log.record(format!(
                        "next level {} at {:.2}s, {:.2}s away",
                        gap.level, gap.threshold_seconds, gap.delta_seconds
                    )),
                    None => log.record("no next level"),
                }
            }
        }
        log
    }

    /// Lines in decision order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
