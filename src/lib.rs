//! A Rust library for aggregating graduate employment survey records, with
//! encoding-tolerant CSV loading, category exclusion, and detail filtering.

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod session;
pub mod stats;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{CategoryLabels, ColumnMap, DashboardConfig};
pub use error::{GradstatError, Result};
pub use session::DashboardSession;

// Arrow types
pub use arrow::record_batch::RecordBatch;

// Aggregation views
pub use stats::{
    CategoryStats, OverallStats, YearlyStats, breakdown, overall, regional, round1, yearly,
};

// Filtering capabilities
pub use filter::{YearSelection, filter_detail, filter_record_batch};

// Loading
pub use loader::{employed_subset, load};
