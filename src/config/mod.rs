// ABOUTME: Configuration module for the swim level checker
// ABOUTME: Re-exports the environment-driven CheckerConfig and its option enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable configuration
pub mod environment;

pub use environment::{BracketSource, CheckerConfig, MessageLocale};
