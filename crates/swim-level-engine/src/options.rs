// ABOUTME: Derives selectable option sets from the loaded threshold table
// ABOUTME: Distinct strokes, distances per stroke, genders and age brackets, computed on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use swim_level_core::models::{AgeBracket, Gender, Stroke};

use crate::table::ThresholdTable;

/// Stroke labels present in the table, sorted
#[must_use]
pub fn distinct_strokes(table: &ThresholdTable) -> Vec<Stroke> {
    table
        .records()
        .iter()
        .map(|record| record.stroke.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distances offered for `stroke`, ascending
#[must_use]
pub fn distinct_distances(table: &ThresholdTable, stroke: &Stroke) -> Vec<u32> {
    table
        .records()
        .iter()
        .filter(|record| &record.stroke == stroke)
        .map(|record| record.distance)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Genders present in the table
#[must_use]
pub fn distinct_genders(table: &ThresholdTable) -> Vec<Gender> {
    table
        .records()
        .iter()
        .map(|record| record.gender)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Age brackets present in the table, lowest first
#[must_use]
pub fn distinct_brackets(table: &ThresholdTable) -> Vec<AgeBracket> {
    table
        .records()
        .iter()
        .map(|record| record.age_bracket)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
