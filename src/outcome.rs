// ABOUTME: User-facing outcome of a level check and its localized messages
// ABOUTME: Maps evaluations and failures to distinct outcomes rendered in English or Japanese
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Check outcomes
//!
//! Every way a check can end has its own variant and its own message, so a
//! caller can tell "no data for this category" apart from "time too slow".
//!
//! | Outcome                | English message                         |
//! |------------------------|-----------------------------------------|
//! | `Achieved`             | `Your level: B`                         |
//! | gap (with `Achieved`)  | `5.00 seconds to reach level A`         |
//! | `AgeCategoryNotFound`  | `No age category found for age 17`      |
//! | `NoMatchingCategory`   | `No matching category found`            |
//! | `NotAchieved`          | `No level achieved`                     |
//! | `Failure`              | `An error occurred. ...`                |

use serde::Serialize;
use swim_level_core::errors::AppError;
use swim_level_core::models::Level;
use swim_level_engine::{Classification, Evaluation, NextLevelGap};

use crate::config::MessageLocale;

/// Final result of one level check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A level was achieved
    Achieved {
        /// Achieved level
        level: Level,
        /// Gap to the next level, when one exists
        next: Option<NextLevelGap>,
    },
    /// The category exists but no threshold was met
    NotAchieved,
    /// The table has no rows for the category
    NoMatchingCategory,
    /// The age falls outside every bracket
    AgeCategoryNotFound {
        /// The submitted age
        age: i64,
    },
    /// Unexpected failure (table missing, unreadable, not loaded)
    Failure {
        /// Internal reason, for logs and JSON output
        reason: String,
    },
}

impl Outcome {
    /// Outcome for a completed evaluation
    #[must_use]
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        match evaluation {
            Evaluation::AgeNotCovered { age } => Self::AgeCategoryNotFound { age: *age },
            Evaluation::Classified(classified) => match &classified.classification {
                Classification::NoMatchingCategory => Self::NoMatchingCategory,
                Classification::NotAchieved => Self::NotAchieved,
                Classification::Achieved { level, next, .. } => Self::Achieved {
                    level: level.clone(),
                    next: next.clone(),
                },
            },
        }
    }

    /// Generic failure outcome for an unexpected error
    #[must_use]
    pub fn failure(error: &AppError) -> Self {
        Self::Failure {
            reason: error.to_string(),
        }
    }

    /// Whether a level was achieved
    #[must_use]
    pub const fn is_achieved(&self) -> bool {
        matches!(self, Self::Achieved { .. })
    }

    /// Render the outcome and optional gap message
    #[must_use]
    pub fn render(&self, locale: MessageLocale) -> RenderedOutcome {
        let messages = Messages::for_locale(locale);
        match self {
            Self::Achieved { level, next } => RenderedOutcome {
                message: messages.achieved(level),
                gap_message: next.as_ref().map(|gap| messages.gap(gap)),
            },
            Self::NotAchieved => RenderedOutcome::single(messages.not_achieved),
            Self::NoMatchingCategory => RenderedOutcome::single(messages.no_category),
            Self::AgeCategoryNotFound { age } => {
                RenderedOutcome::single(messages.age_not_found(*age))
            }
            Self::Failure { .. } => RenderedOutcome::single(messages.failure),
        }
    }
}

/// The two strings handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedOutcome {
    /// Level, not-achieved, no-category or failure message
    pub message: String,
    /// Gap-to-next-level message, only alongside an achieved level
    pub gap_message: Option<String>,
}

impl RenderedOutcome {
    fn single(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            gap_message: None,
        }
    }
}

/// Message catalog for one locale
struct Messages {
    locale: MessageLocale,
    not_achieved: &'static str,
    no_category: &'static str,
    failure: &'static str,
}

impl Messages {
    const fn for_locale(locale: MessageLocale) -> Self {
        match locale {
            MessageLocale::English => Self {
                locale,
                not_achieved: "No level achieved",
                no_category: "No matching category found",
                failure: "An error occurred. Please check the time format.",
            },
            MessageLocale::Japanese => Self {
                locale,
                not_achieved: "該当する級が見つかりませんでした。",
                no_category: "該当するカテゴリーが見つかりません",
                failure: "エラーが発生しました。タイムの形式を確認してください。",
            },
        }
    }

    fn achieved(&self, level: &Level) -> String {
        match self.locale {
            MessageLocale::English => format!("Your level: {level}"),
            MessageLocale::Japanese => format!("あなたの級は {level} 級です！"),
        }
    }

    fn gap(&self, gap: &NextLevelGap) -> String {
        let (delta, level) = (gap.delta_seconds, &gap.level);
        match self.locale {
            MessageLocale::English => format!("{delta:.2} seconds to reach level {level}"),
            MessageLocale::Japanese => format!("あと {delta:.2} 秒で {level} 級に届きます！"),
        }
    }

    fn age_not_found(&self, age: i64) -> String {
        match self.locale {
            MessageLocale::English => format!("No age category found for age {age}"),
            MessageLocale::Japanese => {
                format!("{age}歳に該当する年齢カテゴリが見つかりませんでした。")
            }
        }
    }
}
