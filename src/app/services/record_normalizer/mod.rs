//! Record normalization for parsed hike sheet rows
//!
//! This module turns raw string rows into typed [`HikeRecord`]s. Nothing in
//! here fails: malformed fields degrade to defaults and rows without a
//! positive hike number are dropped and counted.
//!
//! ## Architecture
//!
//! - [`column_mapping`] - Header inspection to locate the measure columns
//! - [`field_parsers`] - Id, year and numeric field cleaners
//! - [`normalizer`] - Row to record conversion and the sorted post-pass
//! - [`stats`] - Normalization counters and result structures
//!
//! [`HikeRecord`]: crate::app::models::HikeRecord

pub mod column_mapping;
pub mod field_parsers;
pub mod normalizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, ColumnSource, ResolvedColumn};
pub use normalizer::{normalize_row, normalize_table};
pub use stats::{NormalizeResult, ParseStats};
