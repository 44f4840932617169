//! Tests for histogram, aggregate statistics and available years

use super::*;
use crate::app::models::YearCount;
use crate::app::services::analytics::{aggregate_stats, available_years, year_histogram};

fn yc(year: &str, count: usize) -> YearCount {
    YearCount {
        year: year.to_string(),
        count,
    }
}

#[test]
fn test_histogram_ascending_without_unknown() {
    let histogram = year_histogram(&create_test_log());
    assert_eq!(histogram, vec![yc("2021", 2), yc("2022", 2), yc("2023", 2)]);
}

#[test]
fn test_histogram_sum_matches_known_years() {
    let log = create_test_log();
    let total: usize = year_histogram(&log).iter().map(|e| e.count).sum();
    let known = log.iter().filter(|h| h.year.is_known()).count();
    assert_eq!(total, known);
    assert_eq!(known, log.len() - 1);
}

#[test]
fn test_aggregate_stats() {
    let stats = aggregate_stats(&create_test_log());

    assert_eq!(stats.hike_count, 7);
    assert_eq!(stats.since, Some(2021));
    assert_eq!(stats.total_miles, 32.0);
    assert_eq!(stats.total_elevation, 9300.0);
    // Three years tie on two hikes: the earliest wins
    assert_eq!(stats.active_year.as_deref(), Some("2021"));
    assert_eq!(stats.active_count, 2);
    assert!((stats.average_hikes_per_year - 7.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_active_year_prefers_highest_count() {
    let log = vec![
        create_test_hike(4, "1/1/2024", "", "A", 0.0, 0.0),
        create_test_hike(3, "1/1/2024", "", "A", 0.0, 0.0),
        create_test_hike(2, "1/1/2019", "", "A", 0.0, 0.0),
    ];
    let stats = aggregate_stats(&log);
    assert_eq!(stats.active_year.as_deref(), Some("2024"));
    assert_eq!(stats.active_count, 2);
}

#[test]
fn test_stats_without_known_years() {
    let log = vec![
        create_test_hike(2, "?", "", "A", 1.0, 10.0),
        create_test_hike(1, "", "", "B", 2.0, 20.0),
    ];
    let stats = aggregate_stats(&log);

    assert_eq!(stats.since, None);
    assert_eq!(stats.active_year, None);
    assert_eq!(stats.active_count, 0);
    // Zero distinct years counts as one
    assert_eq!(stats.average_hikes_per_year, 2.0);
}

#[test]
fn test_stats_on_empty_store() {
    let stats = aggregate_stats(&[]);
    assert_eq!(stats.hike_count, 0);
    assert_eq!(stats.total_miles, 0.0);
    assert_eq!(stats.average_hikes_per_year, 0.0);
    assert!(year_histogram(&[]).is_empty());
}

#[test]
fn test_available_years_descending() {
    assert_eq!(available_years(&create_test_log()), vec!["2023", "2022", "2021"]);
}
