// ABOUTME: Core types and constants for the swim level checker
// ABOUTME: Foundation crate with error handling, threshold records, queries, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swim Level Core
//!
//! Foundation crate providing shared types and constants for the swim level
//! checker. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `TableError`
//! - **constants**: Defaults, limits, and environment variable names
//! - **models**: Threshold records, age brackets, genders, and queries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ThresholdRecord`, `AgeBracket`, `Query`, etc.)
pub mod models;
