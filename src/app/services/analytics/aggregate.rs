//! Year histogram and headline statistics

use crate::app::models::{AggregateStats, HikeRecord, YearCount};
use std::collections::{BTreeMap, BTreeSet};

/// Hikes per known year, ascending by year
///
/// `Unknown` years are left out, so the counts sum to the number of records
/// with a known year.
pub fn year_histogram(records: &[HikeRecord]) -> Vec<YearCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for hike in records.iter().filter(|h| h.year.is_known()) {
        *counts.entry(hike.year.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(year, count)| YearCount {
            year: year.to_string(),
            count,
        })
        .collect()
}

/// Headline numbers for the whole log
pub fn aggregate_stats(records: &[HikeRecord]) -> AggregateStats {
    let histogram = year_histogram(records);

    let years: BTreeSet<u16> = records.iter().filter_map(|h| h.year.value()).collect();
    let since = years.first().copied();
    let distinct_years = years.len().max(1);

    // Histogram is ascending, so a strict comparison keeps the earliest year on ties
    let mut active: Option<&YearCount> = None;
    for entry in &histogram {
        if active.is_none_or(|best| entry.count > best.count) {
            active = Some(entry);
        }
    }

    AggregateStats {
        hike_count: records.len(),
        since,
        total_miles: records.iter().map(|h| h.miles).sum(),
        total_elevation: records.iter().map(|h| h.elevation).sum(),
        active_year: active.map(|entry| entry.year.clone()),
        active_count: active.map_or(0, |entry| entry.count),
        average_hikes_per_year: records.len() as f64 / distinct_years as f64,
    }
}

/// Distinct known years, most recent first
pub fn available_years(records: &[HikeRecord]) -> Vec<String> {
    let years: BTreeSet<&str> = records
        .iter()
        .filter(|h| h.year.is_known())
        .map(|h| h.year.as_str())
        .collect();
    years.into_iter().rev().map(str::to_string).collect()
}
