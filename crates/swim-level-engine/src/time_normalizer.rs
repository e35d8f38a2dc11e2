// ABOUTME: Converts textual and numeric swim times into canonical seconds
// ABOUTME: Best-effort parsing of M.SS.CC, MM:SS.ss and SS.ss encodings that never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Time normalization
//!
//! Historical threshold tables mix several encodings of the same quantity.
//! Every encoding resolves to seconds; malformed input resolves to `0.0`
//! rather than an error so that quirky rows keep loading.
//!
//! | Input        | Encoding                   | Seconds  |
//! |--------------|----------------------------|----------|
//! | `45.67`      | numeric, passed through    | 45.67    |
//! | `"7.47.40"`  | minutes.seconds.centis     | 467.40   |
//! | `"1:23.45"`  | minutes:seconds            | 83.45    |
//! | `"45.67"`    | plain decimal              | 45.67    |
//! | `".1.05.30"` | one leading dot dropped    | 65.30    |
//! | `""`         | malformed                  | 0.0      |

use swim_level_core::constants::time::{CENTISECONDS_PER_SECOND, SECONDS_PER_MINUTE};
use swim_level_core::models::{ElapsedTime, TimeValue};

/// Resolve a table or query time to seconds
#[must_use]
pub fn normalize(value: &TimeValue) -> f64 {
    match value {
        TimeValue::Seconds(seconds) => *seconds,
        TimeValue::Text(text) => normalize_text(text),
    }
}

/// Resolve a textual time to seconds, defaulting to `0.0` when unparsable
#[must_use]
pub fn normalize_text(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    // Legacy rows carry a stray leading dot
    let text = text.strip_prefix('.').unwrap_or(text);

    let segments: Vec<&str> = text.split('.').collect();
    if let [minutes, seconds, centiseconds] = segments.as_slice() {
        return dotted_seconds(minutes, seconds, centiseconds);
    }

    if let Some((minutes, seconds)) = text.split_once(':') {
        return colon_seconds(minutes, seconds);
    }

    parse_finite(text).unwrap_or(0.0)
}

/// Seconds for a bounded elapsed time, via its `M:S.CC` encoding
#[must_use]
pub fn elapsed_seconds(elapsed: &ElapsedTime) -> f64 {
    normalize_text(&elapsed.to_time_text())
}

/// `M.SS.CC`: every segment is an integer; unparsable segments count as 0
fn dotted_seconds(minutes: &str, seconds: &str, centiseconds: &str) -> f64 {
    let segment = |s: &str| s.trim().parse::<u32>().map_or(0.0, f64::from);
    segment(minutes).mul_add(SECONDS_PER_MINUTE, segment(seconds))
        + segment(centiseconds) / CENTISECONDS_PER_SECOND
}

/// `MM:SS.ss`: an empty side on either end of the colon voids the whole value
fn colon_seconds(minutes: &str, seconds: &str) -> f64 {
    // Anything after a second colon is ignored
    let seconds = seconds.split(':').next().unwrap_or_default().trim();
    let minutes = minutes.trim();
    if minutes.is_empty() || seconds.is_empty() {
        return 0.0;
    }

    let minutes = minutes.parse::<u32>().map_or(0.0, f64::from);
    let seconds = parse_finite(seconds).unwrap_or(0.0);
    round_to_centiseconds(minutes.mul_add(SECONDS_PER_MINUTE, seconds))
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn round_to_centiseconds(seconds: f64) -> f64 {
    (seconds * CENTISECONDS_PER_SECOND).round() / CENTISECONDS_PER_SECOND
}
