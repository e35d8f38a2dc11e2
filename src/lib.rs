// ABOUTME: Main library entry point for the swim level checker
// ABOUTME: Wires table loading, classification, outcome messages and diagnostics into a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Swim Level Checker
//!
//! Classifies a swimmer's race time against a table of age-graded threshold
//! times. Given an age, gender, stroke, distance and elapsed time, the
//! checker finds the age bracket, collects the thresholds of the matching
//! category and reports the best level achieved together with the time still
//! needed for the next one.
//!
//! ## Architecture
//!
//! - **`swim-level-core`**: errors, constants and the data model
//! - **`swim-level-engine`**: pure, synchronous classification pipeline
//! - **This crate**: configuration, logging, table sources, the session
//!   gate and user-facing messages
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use swim_level_checker::config::CheckerConfig;
//! use swim_level_checker::errors::AppResult;
//! use swim_level_checker::models::{ElapsedTime, Gender, Query};
//! use swim_level_checker::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let session = Session::new(CheckerConfig::from_env()?);
//!     session.load_configured().await?;
//!
//!     let query = Query::new(30, Gender::Male, "freestyle", 50, ElapsedTime::new(0, 28, 50)?);
//!     let report = session.check(&query);
//!     println!("{}", report.rendered.message);
//!     Ok(())
//! }
//! ```

// ── Re-exports from workspace crates ───────────────────────────────────

/// Error codes, `AppError` and table invariant errors
pub use swim_level_core::errors;

/// Application constants
pub use swim_level_core::constants;

/// Records, queries and age brackets
pub use swim_level_core::models;

/// Classification pipeline
pub use swim_level_engine as engine;

// ── Public API ──────────────────────────────────────────────────────────

/// Environment-driven configuration
pub mod config;

/// Decision trace for a single check
pub mod diagnostics;

/// Structured logging setup
pub mod logging;

/// Check outcomes and localized messages
pub mod outcome;

/// Load-before-use checker session
pub mod session;

/// Async sources for the threshold table
pub mod table_source;
