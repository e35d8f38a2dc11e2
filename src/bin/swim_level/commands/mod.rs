// ABOUTME: Re-exports command modules for swim-level
// ABOUTME: Provides the check command and the table catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod check;
