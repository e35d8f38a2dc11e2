// ABOUTME: Threshold table and age bracket error types
// ABOUTME: Structured errors for malformed tables that convert into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Table Error Types
//!
//! - `TableError` - structural problems found while parsing or validating a
//!   threshold table or an age bracket scheme
//! - Conversion to `AppError` for uniform reporting at the boundary

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// Errors found in a threshold table or bracket scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An age bracket label could not be parsed
    InvalidBracketLabel {
        /// The offending label
        label: String,
    },
    /// A bracket scheme has no brackets
    EmptyBracketScheme,
    /// Two brackets share at least one age
    OverlappingBrackets {
        /// Label of the earlier bracket
        first: String,
        /// Label of the later bracket
        second: String,
    },
    /// Ages between two consecutive brackets are not covered
    BracketGap {
        /// Label of the bracket before the gap
        after: String,
        /// Label of the bracket after the gap
        before: String,
    },
    /// An open-ended bracket is followed by another bracket
    OpenBracketNotLast {
        /// Label of the open-ended bracket
        label: String,
    },
    /// Two rows with the same category key carry the same level
    DuplicateLevel {
        /// Human-readable category key
        category: String,
        /// The duplicated level label
        level: String,
    },
}

impl TableError {
    /// Create an "invalid bracket label" error
    #[must_use]
    pub fn invalid_bracket_label(label: impl Into<String>) -> Self {
        Self::InvalidBracketLabel {
            label: label.into(),
        }
    }

    /// Create a "duplicate level" error
    #[must_use]
    pub fn duplicate_level(category: impl Into<String>, level: impl Into<String>) -> Self {
        Self::DuplicateLevel {
            category: category.into(),
            level: level.into(),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBracketLabel { label } => {
                write!(f, "Age bracket label '{label}' is not a valid range")
            }
            Self::EmptyBracketScheme => write!(f, "Age bracket scheme contains no brackets"),
            Self::OverlappingBrackets { first, second } => {
                write!(f, "Age brackets '{first}' and '{second}' overlap")
            }
            Self::BracketGap { after, before } => {
                write!(f, "Ages between brackets '{after}' and '{before}' are not covered")
            }
            Self::OpenBracketNotLast { label } => {
                write!(f, "Open-ended age bracket '{label}' must be the last bracket")
            }
            Self::DuplicateLevel { category, level } => {
                write!(f, "Level '{level}' appears more than once for category {category}")
            }
        }
    }
}

impl Error for TableError {}

impl From<TableError> for AppError {
    fn from(error: TableError) -> Self {
        Self::new(ErrorCode::InvalidFormat, error.to_string()).with_source(error)
    }
}
