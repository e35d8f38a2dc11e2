// ABOUTME: Level classification engine for the swim level checker
// ABOUTME: Pure, synchronous algorithms over an in-memory threshold table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swim Level Engine
//!
//! Classification pipeline, leaves first:
//!
//! - **`time_normalizer`**: textual and numeric times to seconds
//! - **`age_brackets`**: age to bracket resolution
//! - **`table`**: immutable threshold table and its validation
//! - **`matcher`**: category filter, slowest threshold first
//! - **`classifier`**: achieved level and gap to the next level
//! - **`options`**: stroke / distance / gender option sets derived from the table
//! - **`evaluation`**: the whole pipeline for one query

/// Age bracket scheme and resolver
pub mod age_brackets;
/// Achieved level and next-level gap
pub mod classifier;
/// End-to-end evaluation of one query
pub mod evaluation;
/// Category filter over the table
pub mod matcher;
/// Option sets derived from the table
pub mod options;
/// Threshold table container and validation
pub mod table;
/// Time string normalization
pub mod time_normalizer;

pub use age_brackets::AgeBracketScheme;
pub use classifier::{classify, Classification, NextLevelGap, RecordVerdict};
pub use evaluation::{evaluate, ClassifiedQuery, Evaluation};
pub use matcher::{match_records, MatchedRecord};
pub use options::{distinct_brackets, distinct_distances, distinct_genders, distinct_strokes};
pub use table::{TableValidation, ThresholdTable};
pub use time_normalizer::{elapsed_seconds, normalize, normalize_text};
