//! Detail-view filtering: year selection and any-column substring search

use arrow::array::BooleanArray;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::filter::core::filter_record_batch;
use crate::utils::year_values;

/// Year restriction for the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearSelection {
    /// Sentinel: no year restriction
    #[default]
    All,
    /// Restrict to a single survey year
    Year(i64),
}

/// Filter the employed table for the detail view
///
/// Both filters compose with logical AND: a specific `year` restricts rows
/// to that survey year, and a non-empty `search` keeps rows where at least
/// one field's text representation contains the needle case-insensitively.
/// The match is per field, so a needle never spans column boundaries. Null
/// values serialize to nothing and never match. `All` combined with an
/// empty search returns the table unchanged.
///
/// # Errors
/// Returns `MissingColumn` when a specific year is requested but the
/// survey-year column is absent
pub fn filter_detail(
    employed: &RecordBatch,
    year: YearSelection,
    search: &str,
    config: &DashboardConfig,
) -> Result<RecordBatch> {
    if year == YearSelection::All && search.is_empty() {
        return Ok(employed.clone());
    }

    let mut keep = vec![true; employed.num_rows()];

    if let YearSelection::Year(selected) = year {
        let years = year_values(employed, &config.columns.survey_year)?;
        for (slot, year) in keep.iter_mut().zip(years) {
            *slot = year == Some(selected);
        }
    }

    if !search.is_empty() {
        let needle = search.to_lowercase();

        // Non-string columns are coerced to their text representation,
        // so a search term like "2021" also matches the year column.
        let options = FormatOptions::default().with_null("");
        let formatters = employed
            .columns()
            .iter()
            .map(|column| ArrayFormatter::try_new(column.as_ref(), &options))
            .collect::<arrow::error::Result<Vec<_>>>()?;

        for (row, slot) in keep.iter_mut().enumerate() {
            *slot = *slot
                && formatters.iter().any(|formatter| {
                    formatter
                        .value(row)
                        .to_string()
                        .to_lowercase()
                        .contains(&needle)
                });
        }
    }

    filter_record_batch(employed, &BooleanArray::from(keep))
}
