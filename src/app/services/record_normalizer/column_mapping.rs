//! Column discovery for the measure columns
//!
//! The leading columns of the sheet are positional. The distance and
//! elevation columns move around as the sheet is edited, so they are located
//! by header name, falling back to the last two columns.

use crate::constants::header_hints;
use serde::Serialize;
use tracing::{debug, warn};

/// How a measure column index was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSource {
    /// A header name matched
    Header,
    /// No header matched; a trailing position was used
    Fallback,
    /// The header was too short for the fallback position
    Missing,
}

/// Index of one measure column and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub index: Option<usize>,
    pub source: ColumnSource,
}

impl ResolvedColumn {
    fn from_header(index: usize) -> Self {
        Self {
            index: Some(index),
            source: ColumnSource::Header,
        }
    }

    fn fallback(index: Option<usize>) -> Self {
        match index {
            Some(index) => Self {
                index: Some(index),
                source: ColumnSource::Fallback,
            },
            None => Self {
                index: None,
                source: ColumnSource::Missing,
            },
        }
    }
}

/// Resolved positions of the miles and elevation columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    pub miles: ResolvedColumn,
    pub elevation: ResolvedColumn,
}

impl ColumnMapping {
    /// Inspect the header row once per fetch
    ///
    /// Miles is the first header containing "mile"; elevation is the first
    /// containing "elevation" or "gain" (case-insensitive). Missing matches
    /// fall back to the second-to-last and last columns respectively.
    pub fn resolve(header: &[String]) -> Self {
        let lowered: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();

        let miles = find_header(&lowered, header_hints::MILES)
            .map(ResolvedColumn::from_header)
            .unwrap_or_else(|| ResolvedColumn::fallback(header.len().checked_sub(2)));

        let elevation = find_header(&lowered, header_hints::ELEVATION)
            .map(ResolvedColumn::from_header)
            .unwrap_or_else(|| ResolvedColumn::fallback(header.len().checked_sub(1)));

        let mapping = Self { miles, elevation };

        if mapping.used_fallback() {
            warn!(
                "Measure columns not found by name in header {:?}; \
                 using trailing positions (miles: {:?}, elevation: {:?})",
                header, mapping.miles, mapping.elevation
            );
        } else {
            debug!(
                "Measure columns: miles={:?} elevation={:?}",
                mapping.miles.index, mapping.elevation.index
            );
        }

        mapping
    }

    /// True when either column was not found by name
    pub fn used_fallback(&self) -> bool {
        self.miles.source != ColumnSource::Header || self.elevation.source != ColumnSource::Header
    }
}

fn find_header(lowered: &[String], hints: &[&str]) -> Option<usize> {
    lowered
        .iter()
        .position(|name| hints.iter().any(|hint| name.contains(hint)))
}
