// ABOUTME: Per-request classification query and bounded elapsed-time input
// ABOUTME: Built immutably for each check and discarded afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Gender, Stroke};
use crate::constants::time::{MAX_CENTISECONDS, MAX_MINUTES, MAX_SECONDS};
use crate::errors::{AppError, AppResult};

/// Elapsed swim time entered as three bounded integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElapsedTime {
    minutes: u8,
    seconds: u8,
    centiseconds: u8,
}

impl ElapsedTime {
    /// Create an elapsed time, enforcing minutes/seconds 0–59 and centiseconds 0–99
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if any component exceeds its bound
    pub fn new(minutes: u8, seconds: u8, centiseconds: u8) -> AppResult<Self> {
        if minutes > MAX_MINUTES {
            return Err(AppError::out_of_range(format!(
                "minutes must be between 0 and {MAX_MINUTES}, got {minutes}"
            )));
        }
        if seconds > MAX_SECONDS {
            return Err(AppError::out_of_range(format!(
                "seconds must be between 0 and {MAX_SECONDS}, got {seconds}"
            )));
        }
        if centiseconds > MAX_CENTISECONDS {
            return Err(AppError::out_of_range(format!(
                "centiseconds must be between 0 and {MAX_CENTISECONDS}, got {centiseconds}"
            )));
        }
        Ok(Self {
            minutes,
            seconds,
            centiseconds,
        })
    }

    /// Build from raw form fields; empty or malformed fields count as 0
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if a well-formed field exceeds its bound
    pub fn from_fields(minutes: &str, seconds: &str, centiseconds: &str) -> AppResult<Self> {
        Self::new(
            lenient_field(minutes),
            lenient_field(seconds),
            lenient_field(centiseconds),
        )
    }

    /// Minutes component
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds component
    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Centiseconds component
    #[must_use]
    pub const fn centiseconds(&self) -> u8 {
        self.centiseconds
    }

    /// Colon encoding (`M:S.CC`) handed to the time normalizer
    #[must_use]
    pub fn to_time_text(&self) -> String {
        format!("{}:{}.{:02}", self.minutes, self.seconds, self.centiseconds)
    }
}

/// Parse a form field, saturating values that do not fit in `u8` so range
/// validation reports them instead of silently zeroing them
fn lenient_field(raw: &str) -> u8 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    trimmed.parse().unwrap_or(u8::MAX)
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}.{:02}",
            self.minutes, self.seconds, self.centiseconds
        )
    }
}

/// One classification request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Swimmer age in years; values outside every bracket are reported, not rejected
    pub age: i64,
    /// Gender category
    pub gender: Gender,
    /// Stroke label
    pub stroke: Stroke,
    /// Distance in meters
    pub distance: u32,
    /// Submitted time
    pub elapsed: ElapsedTime,
}

impl Query {
    /// Create a query
    #[must_use]
    pub fn new(
        age: i64,
        gender: Gender,
        stroke: impl Into<Stroke>,
        distance: u32,
        elapsed: ElapsedTime,
    ) -> Self {
        Self {
            age,
            gender,
            stroke: stroke.into(),
            distance,
            elapsed,
        }
    }
}
