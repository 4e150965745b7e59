//! Configuration for the aggregation engine.

/// Column names of the source table
///
/// Defaults are the headers of the production survey export. Only the
/// employment category column is required; the others feed optional views.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// Employment category column (required)
    pub category: String,
    /// Survey year column
    pub survey_year: String,
    /// Student identifier column, used only for counting
    pub student_id: String,
    /// Employer region column, present only for employed records
    pub region: String,
    /// Employer type column
    pub employer_type: String,
    /// Company size category column
    pub company_size: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            category: "취업구분1".to_string(),
            survey_year: "조사년도".to_string(),
            student_id: "학번".to_string(),
            region: "기업지역".to_string(),
            employer_type: "기업구분".to_string(),
            company_size: "회사구분".to_string(),
        }
    }
}

/// Employment category labels
#[derive(Debug, Clone)]
pub struct CategoryLabels {
    /// The label marking a record as employed
    pub employed: String,
    /// Categories removed before any statistic is computed
    pub excluded: Vec<String>,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self {
            employed: "취업".to_string(),
            // Further-education and foreign-national records
            excluded: vec!["진학".to_string(), "외국인".to_string()],
        }
    }
}

/// Configuration for the dashboard engine
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Column names of the source table
    pub columns: ColumnMap,
    /// Employment category labels
    pub labels: CategoryLabels,
    /// Number of records sampled for schema inference (None scans all)
    pub max_infer_records: Option<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            labels: CategoryLabels::default(),
            max_infer_records: Some(1024),
        }
    }
}
