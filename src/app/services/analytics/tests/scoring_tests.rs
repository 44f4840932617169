//! Tests for the demanding-hike score

use super::*;
use crate::app::services::analytics::{demanding_hikes, demanding_score};
use crate::config::ScoringConfig;

#[test]
fn test_scenario_score() {
    let hike = create_test_hike(1, "1/1/20", "Nice strenuous climb", "Mount Dana", 8.0, 2400.0);
    let score = demanding_score(&hike, &ScoringConfig::default());
    assert_eq!(score, 8.0 * 500.0 + 2400.0 + 8000.0 + 1000.0);
    assert_eq!(score, 15400.0);
}

#[test]
fn test_score_without_bonuses() {
    let hike = create_test_hike(4, "", "Easy stroll", "Sunol", 3.0, 500.0);
    assert_eq!(demanding_score(&hike, &ScoringConfig::default()), 2000.0);
}

#[test]
fn test_priority_bonus_from_comments() {
    let hike = create_test_hike(4, "", "Trained for EVEREST", "Sunol", 0.0, 0.0);
    assert_eq!(demanding_score(&hike, &ScoringConfig::default()), 8000.0);
}

#[test]
fn test_difficulty_keyword_only_in_comments() {
    let hike = create_test_hike(4, "", "", "Steep Ravine", 0.0, 0.0);
    assert_eq!(demanding_score(&hike, &ScoringConfig::default()), 0.0);
}

#[test]
fn test_zero_scores_are_ranked_not_filtered() {
    let log = vec![
        create_test_hike(2, "", "", "A", 0.0, 0.0),
        create_test_hike(1, "", "", "B", 0.0, 0.0),
    ];
    let ranked = demanding_hikes(&log, &ScoringConfig::default());
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|s| s.score == 0.0));
    // Equal scores keep store order
    assert_eq!(ranked[0].hike.id, 2);
}

#[test]
fn test_ranking_order_and_limit() {
    let log: Vec<_> = (1..=20)
        .map(|i| create_test_hike(i, "", "", "A", i as f64, 0.0))
        .collect();
    let ranked = demanding_hikes(&log, &ScoringConfig::default());

    assert_eq!(ranked.len(), 15);
    assert_eq!(ranked[0].hike.id, 20);
    assert_eq!(ranked[14].hike.id, 6);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_custom_scoring_tables() {
    let config = ScoringConfig {
        mile_weight: 1.0,
        elevation_weight: 0.0,
        priority_bonus: 100.0,
        keyword_bonus: 10.0,
        priority_locations: vec!["sunol".to_string()],
        difficulty_keywords: vec!["muddy".to_string()],
        limit: 2,
    };
    let log = create_test_log();
    let ranked = demanding_hikes(&log, &config);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].hike.location, "Sunol");
    assert_eq!(ranked[0].score, 104.0);
    assert_eq!(ranked[1].hike.location, "Sunol, CA");
    assert_eq!(ranked[1].score, 103.0);
}
