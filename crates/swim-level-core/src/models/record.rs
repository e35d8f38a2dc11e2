// ABOUTME: Threshold table row model and its field types
// ABOUTME: Gender, stroke, level and time value types tolerant of historical data spellings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AgeBracket;
use crate::errors::AppError;

/// Swimmer gender as recorded in the threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    /// Men's categories
    Male,
    /// Women's categories
    Female,
}

impl Gender {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "men" | "男" | "男性" => Ok(Self::Male),
            "female" | "f" | "woman" | "women" | "女" | "女性" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown gender '{other}'"))),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_owned()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stroke label, taken verbatim (trimmed) from the source data
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Stroke(String);

impl Stroke {
    /// Create a stroke label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::from(label.into())
    }

    /// Borrow the label
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Stroke {
    fn from(label: String) -> Self {
        let trimmed = label.trim();
        if trimmed.len() == label.len() {
            Self(label)
        } else {
            Self(trimmed.to_owned())
        }
    }
}

impl From<&str> for Stroke {
    fn from(label: &str) -> Self {
        Self(label.trim().to_owned())
    }
}

impl From<Stroke> for String {
    fn from(stroke: Stroke) -> Self {
        stroke.0
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Level labels appear as strings or bare integers in source tables
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Opaque level label (a grade name such as `"3"` or `"A"`)
///
/// No ordering is implied; the classifier orders levels only through their
/// threshold times.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LevelRepr", into = "String")]
pub struct Level(String);

impl Level {
    /// Create a level label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<LevelRepr> for Level {
    fn from(repr: LevelRepr) -> Self {
        match repr {
            LevelRepr::Integer(value) => Self(value.to_string()),
            LevelRepr::Float(value) => Self(value.to_string()),
            LevelRepr::Text(text) => Self(text.trim().to_owned()),
        }
    }
}

impl From<&str> for Level {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A time as stored in the table: already seconds, or one of the text encodings
///
/// Text values are resolved to seconds by the engine's time normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    /// Numeric seconds, used as-is
    Seconds(f64),
    /// `M.SS.CC`, `MM:SS.ss` or `SS.ss`
    Text(String),
}

impl From<f64> for TimeValue {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for TimeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for TimeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DistanceRepr {
    Number(u64),
    Text(String),
}

/// Accept a distance as a JSON number or a numeric string; zero is rejected
fn deserialize_distance<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let meters = match DistanceRepr::deserialize(deserializer)? {
        DistanceRepr::Number(value) => u32::try_from(value).map_err(D::Error::custom)?,
        DistanceRepr::Text(text) => text
            .trim()
            .trim_end_matches('m')
            .parse::<u32>()
            .map_err(|e| D::Error::custom(format!("invalid distance '{text}': {e}")))?,
    };
    if meters == 0 {
        return Err(D::Error::custom("distance must be a positive number of meters"));
    }
    Ok(meters)
}

/// One row of the threshold table
///
/// Field names are accepted in canonical snake_case, in the web-client
/// spelling (`age`, `style`, `time`) and as the Japanese column names of the
/// historical records file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRecord {
    /// Age bracket this row applies to
    #[serde(alias = "ageBracket", alias = "age", alias = "年齢")]
    pub age_bracket: AgeBracket,
    /// Gender category
    #[serde(alias = "性別")]
    pub gender: Gender,
    /// Stroke label
    #[serde(alias = "style", alias = "種目")]
    pub stroke: Stroke,
    /// Race distance in meters
    #[serde(alias = "距離", deserialize_with = "deserialize_distance")]
    pub distance: u32,
    /// Qualifying time for the level
    #[serde(alias = "thresholdTime", alias = "time", alias = "タイム")]
    pub threshold_time: TimeValue,
    /// Level granted when the threshold is met
    #[serde(alias = "級")]
    pub level: Level,
}

impl ThresholdRecord {
    /// Category key this row belongs to
    #[must_use]
    pub fn category(&self) -> CategoryKey {
        CategoryKey {
            age_bracket: self.age_bracket,
            gender: self.gender,
            stroke: self.stroke.clone(),
            distance: self.distance,
        }
    }

    /// Whether this row belongs to the given category
    #[must_use]
    pub fn matches(&self, key: &CategoryKey) -> bool {
        self.age_bracket == key.age_bracket
            && self.gender == key.gender
            && self.stroke == key.stroke
            && self.distance == key.distance
    }
}

/// The (age bracket, gender, stroke, distance) key grouping table rows
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryKey {
    /// Age bracket
    pub age_bracket: AgeBracket,
    /// Gender
    pub gender: Gender,
    /// Stroke label
    pub stroke: Stroke,
    /// Distance in meters
    pub distance: u32,
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}m",
            self.age_bracket, self.gender, self.stroke, self.distance
        )
    }
}
