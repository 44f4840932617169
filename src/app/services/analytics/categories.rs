//! Themed keyword lists over trip comments

use super::keywords::KeywordSet;
use crate::app::models::{Category, HikeRecord};
use crate::config::CategoryConfig;

/// Hikes whose comments mention any keyword of `category`
///
/// Keeps store order (most recent first) and stops at `config.limit`.
pub fn category_hikes<'a>(
    records: &'a [HikeRecord],
    category: Category,
    config: &CategoryConfig,
) -> Vec<&'a HikeRecord> {
    let keywords = KeywordSet::new(keywords_for(category, config));

    records
        .iter()
        .filter(|hike| keywords.matches(&hike.comments))
        .take(config.limit)
        .collect()
}

fn keywords_for(category: Category, config: &CategoryConfig) -> &[String] {
    match category {
        Category::Scenic => &config.scenic,
        Category::Weather => &config.weather,
        Category::Food => &config.food,
    }
}
