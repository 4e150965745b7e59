//! CSV loading with encoding fallback and category exclusion

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, BooleanArray};
use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;
use encoding_rs::EUC_KR;

use crate::config::DashboardConfig;
use crate::error::{GradstatError, Result};
use crate::filter::filter_record_batch;
use crate::utils::string_column;

/// Load the employment table from a delimited text file
///
/// The file is fully read and closed before any computation begins. Rows
/// whose employment category is in the exclusion set are removed; no other
/// validation is performed, so missing optional columns are tolerated and
/// produce empty downstream views rather than failures.
///
/// # Errors
/// * `NotFound` - the source file does not exist
/// * `Decode` - the content is neither valid UTF-8 nor EUC-KR
/// * `Schema` - no row could be parsed, or the category column is absent
pub fn load(path: &Path, config: &DashboardConfig) -> Result<RecordBatch> {
    if !path.exists() {
        return Err(GradstatError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let text = decode_source(&bytes, path)?;
    let table = parse_table(&text, config)?;
    log::info!(
        "Loaded {} records from {}",
        table.num_rows(),
        path.display()
    );

    exclude_categories(&table, config)
}

/// Subset of the filtered table where the category equals the employed label
pub fn employed_subset(filtered: &RecordBatch, config: &DashboardConfig) -> Result<RecordBatch> {
    let categories = string_column(filtered, &config.columns.category)?;

    let mask: BooleanArray = (0..categories.len())
        .map(|i| Some(!categories.is_null(i) && categories.value(i) == config.labels.employed))
        .collect();

    filter_record_batch(filtered, &mask)
}

/// Decode the raw bytes as text, trying UTF-8 first and the regional
/// legacy encoding (EUC-KR/CP949) as fallback. First success wins.
fn decode_source(bytes: &[u8], path: &Path) -> Result<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    log::info!(
        "{} is not valid UTF-8, retrying as EUC-KR",
        path.display()
    );
    let (text, _, had_errors) = EUC_KR.decode(bytes);
    if had_errors {
        return Err(GradstatError::Decode(format!(
            "{} is neither valid UTF-8 nor EUC-KR",
            path.display()
        )));
    }

    Ok(text.into_owned())
}

/// Parse decoded CSV text into a single record batch
fn parse_table(text: &str, config: &DashboardConfig) -> Result<RecordBatch> {
    let format = Format::default().with_header(true);
    let (schema, _) = format
        .infer_schema(Cursor::new(text.as_bytes()), config.max_infer_records)
        .map_err(|e| GradstatError::Schema(format!("failed to infer table schema: {e}")))?;
    let schema = Arc::new(schema);

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .build(Cursor::new(text.as_bytes()))
        .map_err(|e| GradstatError::Schema(format!("failed to build csv reader: {e}")))?;

    let mut batches = Vec::new();
    for batch in reader {
        let batch =
            batch.map_err(|e| GradstatError::Schema(format!("failed to parse csv rows: {e}")))?;
        batches.push(batch);
    }

    let table = concat_batches(&schema, &batches)?;
    if table.num_rows() == 0 {
        return Err(GradstatError::Schema(
            "no rows could be parsed from the source file".to_string(),
        ));
    }

    Ok(table)
}

/// Remove rows whose employment category is in the exclusion set
fn exclude_categories(batch: &RecordBatch, config: &DashboardConfig) -> Result<RecordBatch> {
    // The category column is the one column no view can do without.
    let categories = string_column(batch, &config.columns.category).map_err(|_| {
        GradstatError::Schema(format!(
            "required column '{}' is absent from the source table",
            config.columns.category
        ))
    })?;

    let mut keep = Vec::with_capacity(categories.len());
    for i in 0..categories.len() {
        if categories.is_null(i) {
            keep.push(true);
        } else {
            let value = categories.value(i);
            keep.push(!config.labels.excluded.iter().any(|label| label == value));
        }
    }

    filter_record_batch(batch, &BooleanArray::from(keep))
}
