// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Time limits, age bracket boundaries, defaults and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Elapsed-time input bounds and unit conversions
pub mod time {
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Centiseconds per second
    pub const CENTISECONDS_PER_SECOND: f64 = 100.0;
    /// Largest accepted minutes value in an elapsed time
    pub const MAX_MINUTES: u8 = 59;
    /// Largest accepted seconds value in an elapsed time
    pub const MAX_SECONDS: u8 = 59;
    /// Largest accepted centiseconds value in an elapsed time
    pub const MAX_CENTISECONDS: u8 = 99;
}

/// Age bracket boundaries of the Japan Masters Swimming categories
pub mod age_brackets {
    /// Inclusive `(start, end)` pairs, lowest first; `None` marks the open top bracket
    pub const MASTERS: &[(u32, Option<u32>)] = &[
        (18, Some(24)),
        (25, Some(29)),
        (30, Some(34)),
        (35, Some(39)),
        (40, Some(44)),
        (45, Some(49)),
        (50, Some(54)),
        (55, Some(59)),
        (60, Some(64)),
        (65, Some(69)),
        (70, Some(74)),
        (75, Some(79)),
        (80, Some(84)),
        (85, Some(89)),
        (90, None),
    ];

    /// Separator used when rendering a closed bracket label
    pub const RANGE_SEPARATOR: char = '–';
    /// Accepted range separators when parsing labels from source data
    pub const ACCEPTED_SEPARATORS: &[char] = &['–', '-', '~', '～', '〜', '—'];
}

/// Default values
pub mod defaults {
    /// Threshold table file used when no path is configured
    pub const TABLE_PATH: &str = "all_records.json";
    /// Age pre-filled by the collaborator (the youngest masters age)
    pub const AGE: u32 = 18;
}

/// Service identification
pub mod service_names {
    /// Name reported in startup logs
    pub const SWIM_LEVEL_CHECKER: &str = "swim-level-checker";
}

/// Environment variable names
pub mod env_config {
    /// Path of the threshold table JSON file
    pub const TABLE_PATH: &str = "SWIM_LEVEL_TABLE_PATH";
    /// Output message locale (`en` or `ja`)
    pub const LOCALE: &str = "SWIM_LEVEL_LOCALE";
    /// Age bracket scheme source (`masters` or `table`)
    pub const BRACKETS: &str = "SWIM_LEVEL_BRACKETS";
    /// Reject tables that fail validation
    pub const STRICT_TABLE: &str = "SWIM_LEVEL_STRICT_TABLE";
    /// Include diagnostic lines in check output
    pub const DIAGNOSTICS: &str = "SWIM_LEVEL_DIAGNOSTICS";
    /// Path of a real threshold table used by data-confirmation tests
    pub const REAL_TABLE: &str = "SWIM_LEVEL_REAL_TABLE";
}
