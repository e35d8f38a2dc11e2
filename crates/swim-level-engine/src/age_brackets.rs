// ABOUTME: Age bracket scheme and resolver mapping an age to its bracket
// ABOUTME: Fixed masters scheme by default, or a scheme derived from table labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Age bracket resolution
//!
//! A scheme is an ordered list of brackets, lowest first, that must be
//! contiguous and non-overlapping. Only the last bracket may be open-ended.

use std::collections::BTreeSet;

use swim_level_core::constants::age_brackets::MASTERS;
use swim_level_core::errors::TableError;
use swim_level_core::models::AgeBracket;
use tracing::debug;

use crate::table::ThresholdTable;

/// Validated, ordered set of age brackets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBracketScheme {
    brackets: Vec<AgeBracket>,
}

impl AgeBracketScheme {
    /// The Japan Masters Swimming brackets: 18–24, 25–29, ..., 85–89, 90+
    #[must_use]
    pub fn masters() -> Self {
        let brackets = MASTERS
            .iter()
            .filter_map(|&(start, end)| AgeBracket::new(start, end).ok())
            .collect();
        Self { brackets }
    }

    /// Build a scheme from brackets in any order
    ///
    /// # Errors
    ///
    /// Returns a `TableError` if the brackets are empty, overlap, leave a gap,
    /// or an open-ended bracket is not the last one
    pub fn from_brackets(brackets: impl IntoIterator<Item = AgeBracket>) -> Result<Self, TableError> {
        let brackets: Vec<AgeBracket> = brackets
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        validate_contiguous(&brackets)?;
        Ok(Self { brackets })
    }

    /// Build a scheme from textual labels such as `"18～24"` or `"90+"`
    ///
    /// # Errors
    ///
    /// Returns a `TableError` if a label cannot be parsed or the resulting
    /// brackets are not contiguous
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Result<Self, TableError> {
        let brackets = labels
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<AgeBracket>, _>>()?;
        Self::from_brackets(brackets)
    }

    /// Derive the scheme from the brackets present in a threshold table
    ///
    /// # Errors
    ///
    /// Returns a `TableError` if the table's brackets are not contiguous
    pub fn from_table(table: &ThresholdTable) -> Result<Self, TableError> {
        Self::from_brackets(table.records().iter().map(|record| record.age_bracket))
    }

    /// Brackets, lowest first
    #[must_use]
    pub fn brackets(&self) -> &[AgeBracket] {
        &self.brackets
    }

    /// First bracket containing `age`, or `None` when no bracket covers it
    #[must_use]
    pub fn resolve(&self, age: i64) -> Option<AgeBracket> {
        let bracket = self.brackets.iter().find(|bracket| bracket.contains(age)).copied();
        debug!(age, bracket = ?bracket.map(|b| b.label()), "resolved age bracket");
        bracket
    }
}

impl Default for AgeBracketScheme {
    fn default() -> Self {
        Self::masters()
    }
}

fn validate_contiguous(brackets: &[AgeBracket]) -> Result<(), TableError> {
    if brackets.is_empty() {
        return Err(TableError::EmptyBracketScheme);
    }

    for pair in brackets.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let Some(end) = current.end() else {
            return Err(TableError::OpenBracketNotLast {
                label: current.label(),
            });
        };
        if end >= next.start() {
            return Err(TableError::OverlappingBrackets {
                first: current.label(),
                second: next.label(),
            });
        }
        if end.saturating_add(1) < next.start() {
            return Err(TableError::BracketGap {
                after: current.label(),
                before: next.label(),
            });
        }
    }
    Ok(())
}
