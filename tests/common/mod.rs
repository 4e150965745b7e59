//! Shared helpers for building in-memory employment tables.

use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use gradstat::{CategoryLabels, ColumnMap, DashboardConfig};

/// English column names and category labels used by the test tables
pub fn test_config() -> DashboardConfig {
    DashboardConfig {
        columns: ColumnMap {
            category: "category".to_string(),
            survey_year: "year".to_string(),
            student_id: "student_id".to_string(),
            region: "region".to_string(),
            employer_type: "employer_type".to_string(),
            company_size: "company_size".to_string(),
        },
        labels: CategoryLabels {
            employed: "employed".to_string(),
            excluded: vec![
                "further-education".to_string(),
                "foreign-national".to_string(),
            ],
        },
        ..DashboardConfig::default()
    }
}

/// Build a batch of (year, category, region) rows
pub fn records(rows: &[(i64, &str, Option<&str>)]) -> RecordBatch {
    let years: Int64Array = rows.iter().map(|row| Some(row.0)).collect();
    let categories: StringArray = rows.iter().map(|row| Some(row.1)).collect();
    let regions: StringArray = rows.iter().map(|row| row.2).collect();

    let schema = Arc::new(Schema::new(vec![
        Field::new("year", DataType::Int64, true),
        Field::new("category", DataType::Utf8, true),
        Field::new("region", DataType::Utf8, true),
    ]));

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(years) as ArrayRef,
            Arc::new(categories) as ArrayRef,
            Arc::new(regions) as ArrayRef,
        ],
    )
    .expect("failed to build test batch")
}

/// Build a batch with only a category column
pub fn category_only(categories: &[&str]) -> RecordBatch {
    let array: StringArray = categories.iter().map(|c| Some(*c)).collect();
    let schema = Arc::new(Schema::new(vec![Field::new(
        "category",
        DataType::Utf8,
        true,
    )]));
    RecordBatch::try_new(schema, vec![Arc::new(array) as ArrayRef])
        .expect("failed to build test batch")
}
