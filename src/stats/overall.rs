//! Overall employment statistics

use arrow::array::Array;
use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::utils::string_column;

/// Headline counts over the exclusion-filtered table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    /// Total records after exclusion filtering
    pub total: usize,
    /// Records whose category equals the employed label
    pub employed: usize,
    /// Total minus employed
    pub unemployed: usize,
    /// employed / total * 100, unrounded; 0 when total is 0.
    /// Rounding happens at presentation (1 decimal in the views).
    pub employment_rate: f64,
}

/// Compute the headline statistics for the filtered table
pub fn overall(filtered: &RecordBatch, config: &DashboardConfig) -> Result<OverallStats> {
    let categories = string_column(filtered, &config.columns.category)?;

    let total = filtered.num_rows();
    let employed = (0..categories.len())
        .filter(|&i| !categories.is_null(i) && categories.value(i) == config.labels.employed)
        .count();

    let employment_rate = if total == 0 {
        0.0
    } else {
        employed as f64 / total as f64 * 100.0
    };

    Ok(OverallStats {
        total,
        employed,
        unemployed: total - employed,
        employment_rate,
    })
}
