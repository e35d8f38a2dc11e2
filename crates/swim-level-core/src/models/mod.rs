// ABOUTME: Core data models for the swim level checker
// ABOUTME: Re-exports ThresholdRecord, AgeBracket, Gender, Query and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `ThresholdRecord`: one row of the threshold table
//! - `CategoryKey`: the (age bracket, gender, stroke, distance) grouping key
//! - `AgeBracket`: inclusive age range, open-ended at the top
//! - `Query` / `ElapsedTime`: one classification request

mod age_bracket;
mod query;
mod record;

pub use age_bracket::AgeBracket;
pub use query::{ElapsedTime, Query};
pub use record::{CategoryKey, Gender, Level, Stroke, ThresholdRecord, TimeValue};
