//! Year-over-year employment trend

use std::collections::BTreeMap;

use arrow::array::Array;
use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::stats::round1;
use crate::utils::{string_column, year_values};

/// One row of the year-over-year trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyStats {
    /// Survey year
    pub year: i64,
    /// Records surveyed in this year (after exclusion filtering)
    pub total: usize,
    /// Records employed in this year
    pub employed: usize,
    /// Total minus employed
    pub unemployed: usize,
    /// employed / total * 100, rounded to one decimal
    pub employment_rate: f64,
}

/// Group the filtered table by survey year, ordered by year ascending
///
/// Rows with a null survey year are skipped, matching the grouping
/// semantics of the source data.
///
/// # Errors
/// Returns `MissingColumn` when the survey-year or category column is
/// absent. The caller substitutes an empty view and surfaces a message
/// instead of aborting the whole run.
pub fn yearly(filtered: &RecordBatch, config: &DashboardConfig) -> Result<Vec<YearlyStats>> {
    let years = year_values(filtered, &config.columns.survey_year)?;
    let categories = string_column(filtered, &config.columns.category)?;

    // BTreeMap keeps the ascending year order required for display.
    let mut groups: BTreeMap<i64, (usize, usize)> = BTreeMap::new();
    for (i, year) in years.into_iter().enumerate() {
        let Some(year) = year else { continue };
        let (total, employed) = groups.entry(year).or_default();
        *total += 1;
        if !categories.is_null(i) && categories.value(i) == config.labels.employed {
            *employed += 1;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(year, (total, employed))| YearlyStats {
            year,
            total,
            employed,
            unemployed: total - employed,
            employment_rate: round1(employed as f64 / total as f64 * 100.0),
        })
        .collect())
}
