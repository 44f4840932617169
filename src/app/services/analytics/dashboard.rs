//! Every derived view of one snapshot

use super::{
    aggregate_stats, available_years, category_hikes, demanding_hikes, milestones,
    top_locations, year_histogram,
};
use crate::app::models::{
    AggregateStats, Category, HikeRecord, LocationCount, ScoredHike, YearCount,
};
use crate::app::services::record_store::RecordStore;
use crate::config::AnalyticsConfig;
use serde::Serialize;
use tracing::debug;

/// All analytics for a record store, computed together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub stats: AggregateStats,
    pub histogram: Vec<YearCount>,
    pub years: Vec<String>,
    pub milestones: Vec<HikeRecord>,
    pub top_locations: Vec<LocationCount>,
    pub demanding: Vec<ScoredHike>,
    pub scenic: Vec<HikeRecord>,
    pub weather: Vec<HikeRecord>,
    pub food: Vec<HikeRecord>,
}

impl Dashboard {
    pub fn compute(store: &RecordStore, config: &AnalyticsConfig) -> Self {
        let records = store.records();
        let category = |c: Category| -> Vec<HikeRecord> {
            category_hikes(records, c, &config.categories)
                .into_iter()
                .cloned()
                .collect()
        };

        let dashboard = Self {
            stats: aggregate_stats(records),
            histogram: year_histogram(records),
            years: available_years(records),
            milestones: milestones(records, &config.milestone_targets)
                .into_iter()
                .cloned()
                .collect(),
            top_locations: top_locations(records, config.location_limit),
            demanding: demanding_hikes(records, &config.scoring),
            scenic: category(Category::Scenic),
            weather: category(Category::Weather),
            food: category(Category::Food),
        };

        debug!(
            "Dashboard: {} hikes, {} years, {} milestones",
            dashboard.stats.hike_count,
            dashboard.histogram.len(),
            dashboard.milestones.len()
        );

        dashboard
    }

    /// List for one themed category
    pub fn category(&self, category: Category) -> &[HikeRecord] {
        match category {
            Category::Scenic => &self.scenic,
            Category::Weather => &self.weather,
            Category::Food => &self.food,
        }
    }
}
