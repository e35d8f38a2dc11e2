// ABOUTME: Check command for swim-level
// ABOUTME: Loads the table, classifies one time and prints the localized result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;

use anyhow::Result;
use swim_level_checker::config::CheckerConfig;
use swim_level_checker::models::{ElapsedTime, Gender, Query};
use swim_level_checker::outcome::Outcome;
use swim_level_checker::session::{CheckReport, Session};
use tracing::error;

/// Form values of one check
pub struct CheckRequest {
    pub age: i64,
    pub gender: Gender,
    pub stroke: String,
    pub distance: u32,
    pub minutes: u8,
    pub seconds: u8,
    pub centiseconds: u8,
}

/// How the report is printed
pub struct OutputOptions {
    pub json: bool,
    pub diagnostics: bool,
}

/// Classify the requested time
pub async fn run(
    config: CheckerConfig,
    request: CheckRequest,
    output: OutputOptions,
) -> Result<ExitCode> {
    let session = Session::new(config);
    // A failed load leaves the session unloaded; the check then reports a failure outcome
    if let Err(e) = session.load_configured().await {
        error!(error = %e, "could not load threshold table");
    }

    let elapsed = ElapsedTime::new(request.minutes, request.seconds, request.centiseconds)?;
    let query = Query::new(
        request.age,
        request.gender,
        request.stroke,
        request.distance,
        elapsed,
    );
    let report = session.check(&query);

    if output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report, output.diagnostics);
    }

    Ok(if matches!(report.outcome, Outcome::Failure { .. }) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn display_report(report: &CheckReport, diagnostics: bool) {
    println!("{}", report.rendered.message);
    if let Some(gap) = &report.rendered.gap_message {
        println!("{gap}");
    }
    if diagnostics && !report.diagnostics.is_empty() {
        println!();
        for line in report.diagnostics.lines() {
            println!("  {line}");
        }
    }
}
