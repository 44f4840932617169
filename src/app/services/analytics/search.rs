//! Free-text and year filtering

use crate::app::models::{HikeRecord, YearFilter};

/// Records matching the year filter and the query
///
/// An empty (or all-whitespace) query matches everything. Otherwise the
/// query must appear, ignoring case, in the location, the comments, the hike
/// number or the date.
pub fn search<'a>(
    records: &'a [HikeRecord],
    query: &str,
    year: &YearFilter,
) -> Vec<&'a HikeRecord> {
    let needle = query.trim().to_lowercase();

    records
        .iter()
        .filter(|hike| year.matches(&hike.year))
        .filter(|hike| needle.is_empty() || matches_query(hike, &needle))
        .collect()
}

fn matches_query(hike: &HikeRecord, needle: &str) -> bool {
    hike.location.to_lowercase().contains(needle)
        || hike.comments.to_lowercase().contains(needle)
        || hike.id.to_string().contains(needle)
        || hike.date.to_lowercase().contains(needle)
}
