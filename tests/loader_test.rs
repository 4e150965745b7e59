//! Tests for CSV loading, encoding fallback, and category exclusion.

mod common;

use std::fs;
use std::path::Path;

use arrow::array::Array;
use common::test_config;
use gradstat::utils::string_column;
use gradstat::{DashboardConfig, GradstatError, employed_subset, load};

fn write_temp(name: &str, bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    fs::write(&path, bytes).expect("write source file");
    (dir, path)
}

/// UTF-8 source: excluded categories are removed, everything else kept
#[test]
fn test_load_applies_exclusion() -> gradstat::Result<()> {
    let config = test_config();
    let csv = "category,year,region\n\
               employed,2020,Seoul\n\
               further-education,2020,\n\
               foreign-national,2021,\n\
               unemployed,2021,\n\
               employed,2021,Busan\n";
    let (_dir, path) = write_temp("records.csv", csv.as_bytes());

    let filtered = load(&path, &config)?;
    assert_eq!(filtered.num_rows(), 3);

    // Invariant: every record in the filtered table has a non-excluded category.
    let categories = string_column(&filtered, &config.columns.category)?;
    for i in 0..categories.len() {
        let value = categories.value(i);
        assert!(!config.labels.excluded.iter().any(|label| label == value));
    }

    let employed = employed_subset(&filtered, &config)?;
    assert_eq!(employed.num_rows(), 2);

    Ok(())
}

/// EUC-KR/CP949 source decodes through the fallback encoding
#[test]
fn test_load_euc_kr_fallback() -> gradstat::Result<()> {
    let csv = "취업구분1,조사년도,기업지역\n\
               취업,2020,서울\n\
               진학,2020,\n\
               외국인,2021,\n\
               취업,2021,부산\n";
    let (encoded, _, _) = encoding_rs::EUC_KR.encode(csv);
    assert!(std::str::from_utf8(&encoded).is_err());
    let (_dir, path) = write_temp("records_kr.csv", &encoded);

    let filtered = load(&path, &DashboardConfig::default())?;
    assert_eq!(filtered.num_rows(), 2);

    Ok(())
}

/// A missing source file aborts the run with NotFound
#[test]
fn test_load_not_found() {
    let result = load(Path::new("does-not-exist.csv"), &test_config());
    assert!(matches!(result, Err(GradstatError::NotFound(_))));
}

/// Content invalid under both encodings is a decode error
#[test]
fn test_load_decode_error() {
    let (_dir, path) = write_temp("garbage.csv", b"category\n\xff\xff\xff\n");

    let result = load(&path, &test_config());
    assert!(matches!(result, Err(GradstatError::Decode(_))));
}

/// A file with no parsable rows is a schema error
#[test]
fn test_load_header_only() {
    let (_dir, path) = write_temp("empty.csv", b"category,year\n");

    let result = load(&path, &test_config());
    assert!(matches!(result, Err(GradstatError::Schema(_))));
}

/// The category column is the one column load cannot do without
#[test]
fn test_load_missing_category_column() {
    let (_dir, path) = write_temp("no_category.csv", b"year,region\n2020,Seoul\n");

    let result = load(&path, &test_config());
    assert!(matches!(result, Err(GradstatError::Schema(_))));
}
