//! Milestone detection

use crate::app::models::HikeRecord;

/// Records whose hike number is one of `targets`, highest number first
pub fn milestones<'a>(records: &'a [HikeRecord], targets: &[u64]) -> Vec<&'a HikeRecord> {
    let mut found: Vec<&HikeRecord> = records
        .iter()
        .filter(|h| targets.contains(&h.id))
        .collect();
    found.sort_by(|a, b| b.id.cmp(&a.id));
    found
}
