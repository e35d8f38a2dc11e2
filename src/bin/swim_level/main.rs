// ABOUTME: swim-level CLI - classifies a swim time against the threshold table
// ABOUTME: Also lists strokes, distances and age brackets, and validates table files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify a 50m freestyle in 28.50 for a 30 year old man
//! swim-level check --age 30 --gender male --stroke freestyle --distance 50 --seconds 28 --centiseconds 50
//!
//! # Same check, JSON output with the decision trace
//! swim-level check --age 30 --gender male --stroke freestyle --distance 50 --seconds 28 --centiseconds 50 --json --diagnostics
//!
//! # Stroke and distance options offered by the table
//! swim-level strokes
//! swim-level distances --stroke freestyle
//!
//! # Active age brackets
//! swim-level brackets
//!
//! # Report every invariant violation in a table file
//! swim-level --table data/sample_records.json validate
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use swim_level_checker::config::{CheckerConfig, MessageLocale};
use swim_level_checker::constants::defaults;
use swim_level_checker::logging::LoggingConfig;
use swim_level_checker::models::Gender;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "swim-level",
    about = "Swim level checker",
    long_about = "Classifies a swimmer's time into a level using an age-graded threshold table."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Threshold table file override
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Message locale override (en, ja)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify a time
    Check {
        /// Swimmer age in years
        #[arg(long, default_value_t = i64::from(defaults::AGE), allow_negative_numbers = true)]
        age: i64,

        /// Gender (male, female)
        #[arg(long)]
        gender: Gender,

        /// Stroke label as written in the table
        #[arg(long)]
        stroke: String,

        /// Distance in meters
        #[arg(long)]
        distance: u32,

        /// Minutes (0-59)
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=59))]
        minutes: u8,

        /// Seconds (0-59)
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=59))]
        seconds: u8,

        /// Centiseconds (0-99)
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=99))]
        centiseconds: u8,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        /// Print the decision trace
        #[arg(long)]
        diagnostics: bool,
    },

    /// List strokes offered by the table
    Strokes,

    /// List distances offered for a stroke
    Distances {
        /// Stroke label as written in the table
        #[arg(long)]
        stroke: String,
    },

    /// List the active age brackets
    Brackets,

    /// Report table invariant violations and warnings
    Validate,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = CheckerConfig::from_env()?;
    if let Some(table) = cli.table {
        config.table_path = table;
    }
    if let Some(locale) = cli.locale {
        config.locale = MessageLocale::from_str_or_default(&locale);
    }
    debug!(config = %config.summary(), "effective configuration");

    let code = match cli.command {
        Command::Check {
            age,
            gender,
            stroke,
            distance,
            minutes,
            seconds,
            centiseconds,
            json,
            diagnostics,
        } => {
            let request = commands::check::CheckRequest {
                age,
                gender,
                stroke,
                distance,
                minutes,
                seconds,
                centiseconds,
            };
            let output = commands::check::OutputOptions {
                json,
                diagnostics: diagnostics || config.diagnostics,
            };
            commands::check::run(config, request, output).await?
        }
        Command::Strokes => commands::catalog::strokes(config).await?,
        Command::Distances { stroke } => commands::catalog::distances(config, stroke).await?,
        Command::Brackets => commands::catalog::brackets(config).await?,
        Command::Validate => commands::catalog::validate(config).await?,
    };

    Ok(code)
}
