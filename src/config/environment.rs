// ABOUTME: Environment configuration for the swim level checker
// ABOUTME: Reads table location, message locale, bracket scheme and strictness from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! All settings come from environment variables; command-line flags in the
//! `swim-level` binary override individual values afterwards.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use swim_level_core::constants::{defaults, env_config};
use swim_level_core::errors::{AppError, AppResult};
use tracing::info;

/// Language of the rendered outcome messages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageLocale {
    /// English messages
    #[default]
    English,
    /// Japanese messages
    Japanese,
}

impl MessageLocale {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ja" | "jp" | "ja-jp" | "japanese" => Self::Japanese,
            _ => Self::English,
        }
    }
}

impl fmt::Display for MessageLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::Japanese => write!(f, "ja"),
        }
    }
}

/// Where the age bracket scheme comes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BracketSource {
    /// Fixed Japan Masters Swimming brackets
    #[default]
    Masters,
    /// Brackets found in the loaded table's labels
    Table,
}

impl BracketSource {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "table" | "data" => Self::Table,
            _ => Self::Masters,
        }
    }
}

impl fmt::Display for BracketSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Masters => write!(f, "masters"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// Checker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Threshold table JSON file
    pub table_path: PathBuf,
    /// Outcome message language
    pub locale: MessageLocale,
    /// Age bracket scheme source
    pub bracket_source: BracketSource,
    /// Refuse tables that violate the distinct-level invariant
    pub strict_table: bool,
    /// Include diagnostic lines in check output
    pub diagnostics: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(defaults::TABLE_PATH),
            locale: MessageLocale::default(),
            bracket_source: BracketSource::default(),
            strict_table: true,
            diagnostics: false,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a boolean variable holds an
    /// unrecognized value
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            table_path: PathBuf::from(env_var_or(env_config::TABLE_PATH, defaults::TABLE_PATH)),
            locale: MessageLocale::from_str_or_default(&env_var_or(env_config::LOCALE, "en")),
            bracket_source: BracketSource::from_str_or_default(&env_var_or(
                env_config::BRACKETS,
                "masters",
            )),
            strict_table: parse_bool(
                env_config::STRICT_TABLE,
                &env_var_or(env_config::STRICT_TABLE, "true"),
            )?,
            diagnostics: parse_bool(
                env_config::DIAGNOSTICS,
                &env_var_or(env_config::DIAGNOSTICS, "false"),
            )?,
        };

        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "table={} locale={} brackets={} strict={} diagnostics={}",
            self.table_path.display(),
            self.locale,
            self.bracket_source,
            self.strict_table,
            self.diagnostics
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!("Invalid {key} value '{raw}'"))),
    }
}
