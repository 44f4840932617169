//! Most visited locations

use crate::app::models::{HikeRecord, LocationCount};
use crate::constants::UNKNOWN_LOCATION;
use std::collections::HashMap;

/// Top `limit` locations by visit count
///
/// A location is the part of the field before the first comma, trimmed and
/// uppercased, so "Mission Peak, Fremont" and "mission peak" count together.
/// Ties keep the order in which the locations were first seen.
pub fn top_locations(records: &[HikeRecord], limit: usize) -> Vec<LocationCount> {
    let unknown = UNKNOWN_LOCATION.to_uppercase();
    let mut ranking: Vec<LocationCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for hike in records {
        let name = location_key(&hike.location);
        if name.is_empty() || name == unknown {
            continue;
        }

        match positions.get(&name) {
            Some(&pos) => ranking[pos].count += 1,
            None => {
                positions.insert(name.clone(), ranking.len());
                ranking.push(LocationCount { name, count: 1 });
            }
        }
    }

    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(limit);
    ranking
}

fn location_key(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_uppercase()
}
