//! Derivation engine over the record store
//!
//! Every function in this module is a pure read of a record slice: none of
//! them mutate the store, none keep state between calls, and they can run in
//! any order. Weights, keyword lists and caps come from
//! [`AnalyticsConfig`](crate::config::AnalyticsConfig).
//!
//! ## Architecture
//!
//! - [`aggregate`] - Year histogram, headline statistics, available years
//! - [`milestones`] - Round-number hikes
//! - [`locations`] - Most visited places
//! - [`scoring`] - Demanding-hike score and ranking
//! - [`categories`] - Themed keyword lists over comments
//! - [`search`] - Free-text and year filtering
//! - [`dashboard`] - All views for one snapshot in a single struct
//! - [`keywords`] - Case-insensitive keyword matching shared by the above
//!
//! ## Usage
//!
//! ```rust
//! use hike_log::RecordStore;
//! use hike_log::app::services::analytics::{aggregate_stats, year_histogram};
//!
//! let store = RecordStore::from_text(
//!     "Num,Date,Comments,Link,Loc,Miles,Elev\n2,3/1/21,,,A,4,900\n1,1/1/20,,,B,8,2400\n",
//! );
//! let stats = aggregate_stats(store.records());
//! assert_eq!(stats.hike_count, 2);
//! assert_eq!(stats.since, Some(2020));
//! assert_eq!(year_histogram(store.records()).len(), 2);
//! ```

pub mod aggregate;
pub mod categories;
pub mod dashboard;
pub mod keywords;
pub mod locations;
pub mod milestones;
pub mod scoring;
pub mod search;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use aggregate::{aggregate_stats, available_years, year_histogram};
pub use categories::category_hikes;
pub use dashboard::Dashboard;
pub use keywords::KeywordSet;
pub use locations::top_locations;
pub use milestones::milestones;
pub use scoring::{demanding_hikes, demanding_score};
pub use search::search;
