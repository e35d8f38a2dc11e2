// ABOUTME: Sources that supply the threshold table at session start
// ABOUTME: Async file loader and in-memory source behind a common trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Threshold table sources
//!
//! Loading is the only asynchronous step of a session. A source is asked
//! once; the resulting table is kept for the rest of the session.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use swim_level_core::errors::{AppError, AppResult};
use swim_level_engine::ThresholdTable;
use tokio::fs;
use tracing::{debug, info};

/// Supplies a threshold table
#[async_trait]
pub trait ThresholdSource: Send + Sync {
    /// Short description for logs (e.g. the file path)
    fn describe(&self) -> String;

    /// Fetch and parse the table
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or parsed
    async fn fetch(&self) -> AppResult<ThresholdTable>;
}

/// Reads a JSON array of records from disk
#[derive(Debug, Clone)]
pub struct FileTableSource {
    path: PathBuf,
}

impl FileTableSource {
    /// Create a source for `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the table file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ThresholdSource for FileTableSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> AppResult<ThresholdTable> {
        debug!(path = %self.path.display(), "reading threshold table");
        let bytes = fs::read(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Threshold table {}", self.path.display()))
                    .with_source(e)
            } else {
                AppError::from(e)
            }
        })?;
        let table = ThresholdTable::from_json_slice(&bytes)?;
        info!(path = %self.path.display(), rows = table.len(), "threshold table read");
        Ok(table)
    }
}

/// Serves a table already held in memory (embedded data, tests)
#[derive(Debug, Clone)]
pub struct InMemoryTableSource {
    table: ThresholdTable,
}

impl InMemoryTableSource {
    /// Wrap an existing table
    #[must_use]
    pub const fn new(table: ThresholdTable) -> Self {
        Self { table }
    }

    /// Parse a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is not an array of records
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(Self::new(ThresholdTable::from_json_str(json)?))
    }
}

#[async_trait]
impl ThresholdSource for InMemoryTableSource {
    fn describe(&self) -> String {
        format!("in-memory table ({} rows)", self.table.len())
    }

    async fn fetch(&self) -> AppResult<ThresholdTable> {
        Ok(self.table.clone())
    }
}
