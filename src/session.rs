//! Session-scoped dashboard context
//!
//! A session owns an independent copy of the loaded table and the summary
//! views computed once at load time. Only the detail view is recomputed
//! per user interaction; nothing is mutated after construction.

use std::path::Path;

use arrow::record_batch::RecordBatch;

use crate::config::DashboardConfig;
use crate::error::{GradstatError, Result};
use crate::filter::{YearSelection, filter_detail};
use crate::loader;
use crate::stats;
use crate::stats::{CategoryStats, OverallStats, YearlyStats};

/// One user session over a single loaded employment table
pub struct DashboardSession {
    config: DashboardConfig,
    filtered: RecordBatch,
    employed: RecordBatch,
    overall: OverallStats,
    yearly: Vec<YearlyStats>,
    regional: Vec<CategoryStats>,
    employer_types: Vec<CategoryStats>,
    company_sizes: Vec<CategoryStats>,
    warnings: Vec<String>,
}

impl DashboardSession {
    /// Load the source table and compute every summary view
    ///
    /// Load-time errors abort the session, since no view can render
    /// without the base table. A missing per-view column leaves that view
    /// empty and records a warning, so one absent column never prevents
    /// the unrelated views from rendering.
    pub fn load(path: &Path, config: DashboardConfig) -> Result<Self> {
        let filtered = loader::load(path, &config)?;
        let employed = loader::employed_subset(&filtered, &config)?;

        let mut warnings = Vec::new();

        let overall = stats::overall(&filtered, &config)?;
        let yearly = match stats::yearly(&filtered, &config) {
            Ok(rows) => rows,
            Err(GradstatError::MissingColumn(name)) => {
                let message = format!("column '{name}' not found, yearly view is empty");
                log::warn!("{message}");
                warnings.push(message);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let regional = optional_view(&employed, &config.columns.region, "regional", &mut warnings)?;
        let employer_types = optional_view(
            &employed,
            &config.columns.employer_type,
            "employer-type",
            &mut warnings,
        )?;
        let company_sizes = optional_view(
            &employed,
            &config.columns.company_size,
            "company-size",
            &mut warnings,
        )?;

        Ok(Self {
            config,
            filtered,
            employed,
            overall,
            yearly,
            regional,
            employer_types,
            company_sizes,
            warnings,
        })
    }

    /// The exclusion-filtered table
    #[must_use]
    pub fn filtered(&self) -> &RecordBatch {
        &self.filtered
    }

    /// The employed subset of the filtered table
    #[must_use]
    pub fn employed(&self) -> &RecordBatch {
        &self.employed
    }

    /// Headline counts and the unrounded employment rate
    #[must_use]
    pub fn overall(&self) -> &OverallStats {
        &self.overall
    }

    /// Year-over-year trend, ascending by year
    #[must_use]
    pub fn yearly(&self) -> &[YearlyStats] {
        &self.yearly
    }

    /// Regional distribution of employers, descending by count
    #[must_use]
    pub fn regional(&self) -> &[CategoryStats] {
        &self.regional
    }

    /// Employer-type breakdown, descending by count
    #[must_use]
    pub fn employer_types(&self) -> &[CategoryStats] {
        &self.employer_types
    }

    /// Company-size breakdown, descending by count
    #[must_use]
    pub fn company_sizes(&self) -> &[CategoryStats] {
        &self.company_sizes
    }

    /// Warnings for views whose column was absent from the source
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The detail view: employed records restricted by year and search text
    ///
    /// Recomputed on every call; the session itself never changes.
    pub fn detail(&self, year: YearSelection, search: &str) -> Result<RecordBatch> {
        filter_detail(&self.employed, year, search, &self.config)
    }

    /// Render every computed view as a plain-text report
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Employment Summary:\n");
        summary.push_str(&format!("  Total Graduates: {}\n", self.overall.total));
        summary.push_str(&format!("  Employed: {}\n", self.overall.employed));
        summary.push_str(&format!("  Unemployed: {}\n", self.overall.unemployed));
        summary.push_str(&format!(
            "  Employment Rate: {:.1}%\n",
            self.overall.employment_rate
        ));

        if !self.yearly.is_empty() {
            summary.push_str("\nYearly Trend:\n");
            for row in &self.yearly {
                summary.push_str(&format!(
                    "  {}: {} employed / {} total ({:.1}%)\n",
                    row.year, row.employed, row.total, row.employment_rate
                ));
            }
        }

        let sections = [
            ("Employer Regions", &self.regional),
            ("Employer Types", &self.employer_types),
            ("Company Sizes", &self.company_sizes),
        ];
        for (title, rows) in sections {
            if !rows.is_empty() {
                summary.push_str(&format!("\n{title}:\n"));
                for row in rows.iter() {
                    summary.push_str(&format!(
                        "  {}: {} ({:.1}%)\n",
                        row.label, row.count, row.share
                    ));
                }
            }
        }

        if !self.warnings.is_empty() {
            summary.push_str("\nWarnings:\n");
            for warning in &self.warnings {
                summary.push_str(&format!("  {warning}\n"));
            }
        }

        summary
    }
}

/// Compute an optional breakdown view, recording a warning when its
/// column is absent so the renderer can surface it inline.
fn optional_view(
    employed: &RecordBatch,
    column: &str,
    view: &str,
    warnings: &mut Vec<String>,
) -> Result<Vec<CategoryStats>> {
    if employed.column_by_name(column).is_none() {
        warnings.push(format!("column '{column}' not found, {view} view is empty"));
    }
    stats::breakdown(employed, column)
}
