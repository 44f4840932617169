//! Tests for the derivation engine
//!
//! Fixtures build records directly so each test controls every field.

mod aggregate_tests;
mod scoring_tests;

use crate::app::models::HikeRecord;
use crate::app::services::record_normalizer::field_parsers::extract_year;

/// Create a test hike with the fields analytics care about
pub fn create_test_hike(
    id: u64,
    date: &str,
    comments: &str,
    location: &str,
    miles: f64,
    elevation: f64,
) -> HikeRecord {
    HikeRecord {
        id,
        date: date.to_string(),
        year: extract_year(date),
        comments: comments.to_string(),
        direction: String::new(),
        location: location.to_string(),
        miles,
        elevation,
    }
}

/// A small log, already in store order (id descending)
pub fn create_test_log() -> Vec<HikeRecord> {
    vec![
        create_test_hike(
            50,
            "3/2/2023",
            "Windy summit, beautiful views",
            "Mission Peak, Fremont",
            6.0,
            2100.0,
        ),
        create_test_hike(26, "1/8/23", "Pancakes at the diner after", "Sunol", 4.0, 900.0),
        create_test_hike(25, "12/1/22", "Rain all day, soaked", "mission peak", 6.0, 2000.0),
        create_test_hike(10, "5/5/2022", "Strenuous climb", "Mount Dana", 8.0, 3100.0),
        create_test_hike(3, "2/2/2021", "", "Unknown", 0.0, 0.0),
        create_test_hike(2, "not a date", "Gorgeous sunrise", "Del Valle", 5.0, 700.0),
        create_test_hike(1, "1/1/2021", "First one", "Sunol, CA", 3.0, 500.0),
    ]
}
