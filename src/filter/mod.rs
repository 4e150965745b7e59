//! Boolean-mask filtering of record batches
//!
//! `core` holds the shared mask application used by the loader and the
//! detail view; `detail` implements the interactive detail-view filter
//! (year selection combined with any-column substring search).

pub mod core;
pub mod detail;

pub use self::core::filter_record_batch;
pub use self::detail::{YearSelection, filter_detail};
