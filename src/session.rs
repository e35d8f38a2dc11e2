// ABOUTME: Checker session owning the once-loaded threshold table
// ABOUTME: Rejects checks until the table is loaded, then serves synchronous classifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Checker session
//!
//! A session moves through two states: *loading* and *ready*. The table is
//! loaded exactly once (concurrent `load` calls share the same
//! initialization). Until then every check reports a failure outcome instead
//! of classifying against an empty table.

use serde::Serialize;
use swim_level_core::errors::{AppError, AppResult};
use swim_level_core::models::{AgeBracket, Gender, Query, Stroke};
use swim_level_engine::{
    distinct_distances, distinct_genders, distinct_strokes, evaluate, AgeBracketScheme,
    Evaluation, TableValidation, ThresholdTable,
};
use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use crate::config::{BracketSource, CheckerConfig};
use crate::diagnostics::DiagnosticLog;
use crate::outcome::{Outcome, RenderedOutcome};
use crate::table_source::{FileTableSource, ThresholdSource};

/// Table and bracket scheme ready for classification
#[derive(Debug)]
struct LoadedTable {
    table: ThresholdTable,
    scheme: AgeBracketScheme,
    validation: TableValidation,
}

/// Everything a caller gets back from one check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Distinct outcome of the check
    pub outcome: Outcome,
    /// Localized outcome and gap messages
    pub rendered: RenderedOutcome,
    /// Decisions in the order they were made (empty on failure)
    pub diagnostics: DiagnosticLog,
}

/// A checking session
#[derive(Debug)]
pub struct Session {
    config: CheckerConfig,
    loaded: OnceCell<LoadedTable>,
}

impl Session {
    /// Create a session whose table has not been loaded yet
    #[must_use]
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            config,
            loaded: OnceCell::new(),
        }
    }

    /// Create a session around a table that is already in memory
    ///
    /// # Errors
    ///
    /// Returns an error if the table fails strict validation or its bracket
    /// labels do not form a valid scheme
    pub fn with_table(config: CheckerConfig, table: ThresholdTable) -> AppResult<Self> {
        let loaded = prepare(&config, table)?;
        Ok(Self {
            config,
            loaded: OnceCell::new_with(Some(loaded)),
        })
    }

    /// Session configuration
    #[must_use]
    pub const fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Load the table from `source`; later calls return the first table
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or the table is rejected; the
    /// session stays unloaded and a later call may retry
    pub async fn load<S>(&self, source: &S) -> AppResult<&ThresholdTable>
    where
        S: ThresholdSource + ?Sized,
    {
        let loaded = self
            .loaded
            .get_or_try_init(|| async {
                info!(source = %source.describe(), "loading threshold table");
                let table = source.fetch().await?;
                prepare(&self.config, table)
            })
            .await?;
        Ok(&loaded.table)
    }

    /// Load the table from the configured file path
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or rejected
    pub async fn load_configured(&self) -> AppResult<&ThresholdTable> {
        let source = FileTableSource::new(self.config.table_path.clone());
        self.load(&source).await
    }

    /// Whether the table has been loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    fn ready(&self) -> AppResult<&LoadedTable> {
        self.loaded
            .get()
            .ok_or_else(|| AppError::unavailable("Threshold table has not been loaded"))
    }

    /// The loaded table
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` before the table is loaded
    pub fn table(&self) -> AppResult<&ThresholdTable> {
        Ok(&self.ready()?.table)
    }

    /// The active age bracket scheme
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` before the table is loaded
    pub fn scheme(&self) -> AppResult<&AgeBracketScheme> {
        Ok(&self.ready()?.scheme)
    }

    /// Validation findings recorded when the table was loaded
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` before the table is loaded
    pub fn validation(&self) -> AppResult<&TableValidation> {
        Ok(&self.ready()?.validation)
    }

    /// Run the classification pipeline for `query`
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` before the table is loaded
    pub fn evaluate(&self, query: &Query) -> AppResult<Evaluation> {
        let loaded = self.ready()?;
        Ok(evaluate(&loaded.table, &loaded.scheme, query))
    }

    /// Check `query` and render the outcome in the configured locale
    ///
    /// Never fails: unexpected errors become a `Failure` outcome.
    #[must_use]
    pub fn check(&self, query: &Query) -> CheckReport {
        match self.evaluate(query) {
            Ok(evaluation) => {
                let outcome = Outcome::from_evaluation(&evaluation);
                let diagnostics = DiagnosticLog::from_evaluation(query, &evaluation);
                CheckReport {
                    rendered: outcome.render(self.config.locale),
                    outcome,
                    diagnostics,
                }
            }
            Err(e) => {
                error!(error = %e, "level check failed");
                let outcome = Outcome::failure(&e);
                CheckReport {
                    rendered: outcome.render(self.config.locale),
                    outcome,
                    diagnostics: DiagnosticLog::new(),
                }
            }
        }
    }

    /// Strokes offered by the loaded table
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` before the table is loaded
    pub fn strokes(&self) -> AppResult<Vec<Stroke>> {
        Ok(distinct_strokes(self.table()?))
    }

    /// Distances offered for `stroke` by the loaded table
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` before the table is loaded
    pub fn distances(&self, stroke: &Stroke) -> AppResult<Vec<u32>> {
        Ok(distinct_distances(self.table()?, stroke))
    }

    /// Genders present in the loaded table
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` before the table is loaded
    pub fn genders(&self) -> AppResult<Vec<Gender>> {
        Ok(distinct_genders(self.table()?))
    }

    /// Brackets of the active scheme
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` before the table is loaded
    pub fn brackets(&self) -> AppResult<Vec<AgeBracket>> {
        Ok(self.scheme()?.brackets().to_vec())
    }
}

/// Validate the table and build the bracket scheme for it
fn prepare(config: &CheckerConfig, table: ThresholdTable) -> AppResult<LoadedTable> {
    let validation = table.validate();
    for warning in &validation.warnings {
        warn!("{warning}");
    }
    if !validation.is_valid() {
        for finding in &validation.errors {
            warn!("{finding}");
        }
        if let (true, Some(first)) = (config.strict_table, validation.errors.first()) {
            let count = validation.errors.len();
            return Err(AppError::invalid_format(format!(
                "Threshold table rejected: {count} invariant violation(s), first: {first}"
            ))
            .with_source(first.clone()));
        }
    }

    let scheme = match config.bracket_source {
        BracketSource::Masters => AgeBracketScheme::masters(),
        BracketSource::Table => AgeBracketScheme::from_table(&table)?,
    };

    info!(
        rows = table.len(),
        categories = table.categories().len(),
        brackets = scheme.brackets().len(),
        "threshold table ready"
    );
    Ok(LoadedTable {
        table,
        scheme,
        validation,
    })
}
