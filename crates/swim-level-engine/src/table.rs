// ABOUTME: Immutable threshold table with JSON parsing and structural validation
// ABOUTME: Detects duplicate levels within a category and unusable threshold times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Threshold table
//!
//! The table is built once per session and never mutated. Validation checks
//! the invariant the classifier relies on: inside one category every level
//! label is distinct, so rows can be totally ordered by threshold time.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use swim_level_core::errors::{AppResult, TableError};
use swim_level_core::models::{CategoryKey, Level, ThresholdRecord};

use crate::time_normalizer::normalize;

/// Read-only collection of threshold rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdTable {
    records: Vec<ThresholdRecord>,
}

impl ThresholdTable {
    /// Wrap a set of records
    #[must_use]
    pub fn new(records: Vec<ThresholdRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is not an array of records
    pub fn from_json_slice(bytes: &[u8]) -> AppResult<Self> {
        let records: Vec<ThresholdRecord> = serde_json::from_slice(bytes)?;
        Ok(Self::new(records))
    }

    /// Parse a JSON array of records from text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is not an array of records
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Self::from_json_slice(json.as_bytes())
    }

    /// All rows in source order
    #[must_use]
    pub fn records(&self) -> &[ThresholdRecord] {
        &self.records
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories present in the table
    #[must_use]
    pub fn categories(&self) -> BTreeSet<CategoryKey> {
        self.records.iter().map(ThresholdRecord::category).collect()
    }

    /// Check the table for duplicate levels and unusable thresholds
    #[must_use]
    pub fn validate(&self) -> TableValidation {
        let mut seen: HashMap<CategoryKey, HashSet<&Level>> = HashMap::new();
        let mut validation = TableValidation::default();

        for (row, record) in self.records.iter().enumerate() {
            let key = record.category();
            if normalize(&record.threshold_time) <= 0.0 {
                validation.warnings.push(format!(
                    "row {row}: level '{}' in {key} has no usable threshold time ({:?})",
                    record.level, record.threshold_time
                ));
            }
            let levels = seen.entry(key).or_default();
            if !levels.insert(&record.level) {
                validation.errors.push(TableError::duplicate_level(
                    record.category().to_string(),
                    record.level.as_str(),
                ));
            }
        }

        validation
    }
}

/// Findings from `ThresholdTable::validate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableValidation {
    /// Invariant violations; a strict session refuses the table
    #[serde(serialize_with = "serialize_errors")]
    pub errors: Vec<TableError>,
    /// Suspicious rows that still load
    pub warnings: Vec<String>,
}

impl TableValidation {
    /// Whether no invariant was violated
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn serialize_errors<S>(errors: &[TableError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}
