// ABOUTME: Table catalog commands for swim-level
// ABOUTME: Lists strokes, distances and brackets, and validates the table file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;

use anyhow::Result;
use swim_level_checker::config::CheckerConfig;
use swim_level_checker::models::Stroke;
use swim_level_checker::session::Session;
use tracing::info;

async fn loaded_session(config: CheckerConfig) -> Result<Session> {
    let session = Session::new(config);
    session.load_configured().await?;
    Ok(session)
}

/// Print the stroke options, one per line
pub async fn strokes(config: CheckerConfig) -> Result<ExitCode> {
    let session = loaded_session(config).await?;
    for stroke in session.strokes()? {
        println!("{stroke}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the distance options for `stroke`, ascending
pub async fn distances(config: CheckerConfig, stroke: String) -> Result<ExitCode> {
    let session = loaded_session(config).await?;
    let stroke = Stroke::new(stroke);
    let distances = session.distances(&stroke)?;
    if distances.is_empty() {
        info!(stroke = %stroke, "no distances offered for stroke");
    }
    for distance in distances {
        println!("{distance}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the active age brackets
pub async fn brackets(config: CheckerConfig) -> Result<ExitCode> {
    let session = loaded_session(config).await?;
    for bracket in session.brackets()? {
        println!("{bracket}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Print every validation finding; fails when the table breaks an invariant
pub async fn validate(mut config: CheckerConfig) -> Result<ExitCode> {
    // Load leniently so every finding is listed, not only the first
    config.strict_table = false;
    let path = config.table_path.clone();
    let session = loaded_session(config).await?;
    let table = session.table()?;
    let validation = session.validation()?;

    println!("Table: {}", path.display());
    println!("   Rows: {}", table.len());
    println!("   Categories: {}", table.categories().len());

    for finding in &validation.errors {
        println!("ERROR   {finding}");
    }
    for warning in &validation.warnings {
        println!("WARNING {warning}");
    }

    if validation.is_valid() {
        println!("Table is valid");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Table has {} invariant violation(s)", validation.errors.len());
        Ok(ExitCode::FAILURE)
    }
}
