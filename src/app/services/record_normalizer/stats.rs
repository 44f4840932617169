//! Normalization statistics and result structures
//!
//! This module provides types for tracking how many rows survived
//! normalization and organizing the normalized records for the record store.

use super::column_mapping::ColumnMapping;
use crate::app::models::HikeRecord;
use serde::Serialize;

/// Normalization result with records, statistics and the column mapping used
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    /// Records sorted by hike number, most recent first
    pub records: Vec<HikeRecord>,

    /// Row counters for this pass
    pub stats: ParseStats,

    /// Measure columns resolved from the header
    pub columns: ColumnMapping,
}

/// Simple normalization statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseStats {
    /// Data rows encountered (header excluded)
    pub total_rows: usize,

    /// Rows that became hike records
    pub records_kept: usize,

    /// Rows dropped for lacking a positive hike number
    pub rows_discarded: usize,

    /// Raw id cells of discarded rows, for debugging
    pub discarded_ids: Vec<String>,

    /// Whether a measure column came from the positional fallback
    pub used_column_fallback: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discarded row
    pub fn add_discarded(&mut self, raw_id: &str) {
        self.rows_discarded += 1;
        self.discarded_ids.push(raw_id.to_string());
    }

    /// Percentage of rows that became records
    pub fn keep_rate(&self) -> f64 {
        if self.total_rows == 0 {
            100.0
        } else {
            (self.records_kept as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Get summary of the normalization pass for logging
    pub fn summary(&self) -> String {
        format!(
            "Normalized {} of {} rows ({:.1}% kept), {} discarded{}",
            self.records_kept,
            self.total_rows,
            self.keep_rate(),
            self.rows_discarded,
            if self.used_column_fallback {
                ", measure columns from fallback positions"
            } else {
                ""
            }
        )
    }
}
