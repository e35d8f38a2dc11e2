// ABOUTME: Age bracket value type with label parsing and canonical display
// ABOUTME: Accepts the range spellings found in historical threshold tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::age_brackets::{ACCEPTED_SEPARATORS, RANGE_SEPARATOR};
use crate::errors::TableError;

/// Suffix some source tables append to bracket labels ("years old")
const AGE_SUFFIX: char = '歳';

/// A contiguous, inclusive range of ages used as a grouping key.
///
/// Closed brackets render as `18–24`; the open-ended top bracket renders as
/// `90+`. Labels from source data may use any of the accepted separators
/// (`-`, `~`, `～`, `〜`, ...) and the open form `90～`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgeBracket {
    start: u32,
    end: Option<u32>,
}

impl AgeBracket {
    /// Create a bracket; `end = None` makes it open-ended
    ///
    /// # Errors
    ///
    /// Returns `TableError::InvalidBracketLabel` if `end` is below `start`
    pub fn new(start: u32, end: Option<u32>) -> Result<Self, TableError> {
        match end {
            Some(end) if end < start => Err(TableError::invalid_bracket_label(format!(
                "{start}{RANGE_SEPARATOR}{end}"
            ))),
            _ => Ok(Self { start, end }),
        }
    }

    /// First age in the bracket
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Last age in the bracket, `None` when open-ended
    #[must_use]
    pub const fn end(&self) -> Option<u32> {
        self.end
    }

    /// Whether the bracket has no upper bound
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Whether `age` falls inside the bracket (both ends inclusive)
    #[must_use]
    pub fn contains(&self, age: i64) -> bool {
        if age < i64::from(self.start) {
            return false;
        }
        match self.end {
            Some(end) => age <= i64::from(end),
            None => true,
        }
    }

    /// Canonical label (`18–24`, `90+`)
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

fn parse_age(text: &str, label: &str) -> Result<u32, TableError> {
    text.trim()
        .parse()
        .map_err(|_| TableError::invalid_bracket_label(label))
}

impl FromStr for AgeBracket {
    type Err = TableError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let trimmed = label.trim().trim_end_matches(AGE_SUFFIX).trim();

        if let Some(start) = trimmed.strip_suffix('+') {
            return Self::new(parse_age(start, label)?, None);
        }

        let Some((start, end)) = trimmed.split_once(|c: char| ACCEPTED_SEPARATORS.contains(&c))
        else {
            return Err(TableError::invalid_bracket_label(label));
        };

        let start = parse_age(start, label)?;
        let end = end.trim();
        if end.is_empty() {
            return Self::new(start, None);
        }
        Self::new(start, Some(parse_age(end, label)?))
    }
}

impl TryFrom<String> for AgeBracket {
    type Error = TableError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<AgeBracket> for String {
    fn from(bracket: AgeBracket) -> Self {
        bracket.to_string()
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}{RANGE_SEPARATOR}{end}", self.start),
            None => write!(f, "{}+", self.start),
        }
    }
}
