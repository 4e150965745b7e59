//! Value-count breakdowns of the employed table
//!
//! The regional distribution and the employer-type/company-size views
//! share one shape: distinct value, count, share of the employed total.

use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::stats::round1;

/// One row of a value-count breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    /// Distinct column value
    pub label: String,
    /// Employed records carrying this value
    pub count: usize,
    /// count / sum of counts * 100, rounded to one decimal
    pub share: f64,
}

/// Regional distribution of employers, ordered by descending count
///
/// An absent region column yields an empty view with a surfaced warning,
/// not an error.
pub fn regional(employed: &RecordBatch, config: &DashboardConfig) -> Result<Vec<CategoryStats>> {
    breakdown(employed, &config.columns.region)
}

/// Value counts for an optional column of the employed table, ordered by
/// descending count (ties break on the label for stable display)
///
/// An absent column yields an empty view, never an error, since the
/// region and company columns are optional in the source schema.
/// Non-string columns (e.g. numeric size codes) are counted through
/// their text representation.
pub fn breakdown(employed: &RecordBatch, column: &str) -> Result<Vec<CategoryStats>> {
    let Some(values) = employed.column_by_name(column) else {
        log::warn!("column '{column}' not found, view will be empty");
        return Ok(Vec::new());
    };

    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    if let Some(strings) = values.as_any().downcast_ref::<StringArray>() {
        for i in 0..strings.len() {
            if !strings.is_null(i) {
                *counts.entry(strings.value(i).to_string()).or_default() += 1;
            }
        }
    } else {
        let options = FormatOptions::default();
        let formatter = ArrayFormatter::try_new(values.as_ref(), &options)?;
        for i in 0..values.len() {
            if !values.is_null(i) {
                *counts.entry(formatter.value(i).to_string()).or_default() += 1;
            }
        }
    }

    if counts.is_empty() {
        return Ok(Vec::new());
    }

    // Share is computed against the sum across values present, not the
    // full employed count, so the shares always total ~100.
    let denominator: usize = counts.values().sum();

    Ok(counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .map(|(label, count)| CategoryStats {
            label,
            count,
            share: round1(count as f64 / denominator as f64 * 100.0),
        })
        .collect())
}
