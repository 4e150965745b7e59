//! Arrow column access helpers.

use arrow::array::{Array, Int32Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::{GradstatError, Result};

/// Look up a string column by name
///
/// # Errors
/// Returns `MissingColumn` if the column is absent, or a schema error if it
/// is present but not a string array.
pub fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| GradstatError::MissingColumn(name.to_string()))?;

    column
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| GradstatError::Schema(format!("column '{name}' is not a string array")))
}

/// Read an integer column as per-row optional i64 values
///
/// CSV schema inference produces Int64 columns, but Int32 is accepted too
/// so callers can hand in batches built from narrower types.
pub fn year_values(batch: &RecordBatch, name: &str) -> Result<Vec<Option<i64>>> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| GradstatError::MissingColumn(name.to_string()))?;

    if let Some(array) = column.as_any().downcast_ref::<Int64Array>() {
        Ok((0..array.len())
            .map(|i| (!array.is_null(i)).then(|| array.value(i)))
            .collect())
    } else if let Some(array) = column.as_any().downcast_ref::<Int32Array>() {
        Ok((0..array.len())
            .map(|i| (!array.is_null(i)).then(|| i64::from(array.value(i))))
            .collect())
    } else {
        Err(GradstatError::Schema(format!(
            "column '{name}' is not an integer array"
        )))
    }
}
