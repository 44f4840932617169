//! Demanding-hike score and ranking
//!
//! The score is a ranking heuristic, not a qualification test: every record
//! gets one, including hikes with no distance or gain recorded.

use super::keywords::KeywordSet;
use crate::app::models::{HikeRecord, ScoredHike};
use crate::config::ScoringConfig;

/// Score one hike
///
/// `miles * mile_weight + elevation * elevation_weight`, plus the priority
/// bonus when location or comments name a priority location, plus the
/// keyword bonus when comments contain a difficulty keyword.
pub fn demanding_score(hike: &HikeRecord, config: &ScoringConfig) -> f64 {
    Scorer::new(config).score(hike)
}

/// All hikes ranked by score, highest first, capped at `config.limit`
pub fn demanding_hikes(records: &[HikeRecord], config: &ScoringConfig) -> Vec<ScoredHike> {
    let scorer = Scorer::new(config);

    let mut scored: Vec<ScoredHike> = records
        .iter()
        .map(|hike| ScoredHike {
            score: scorer.score(hike),
            hike: hike.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(config.limit);
    scored
}

struct Scorer<'a> {
    config: &'a ScoringConfig,
    priority: KeywordSet,
    difficulty: KeywordSet,
}

impl<'a> Scorer<'a> {
    fn new(config: &'a ScoringConfig) -> Self {
        Self {
            config,
            priority: KeywordSet::new(config.priority_locations.as_slice()),
            difficulty: KeywordSet::new(config.difficulty_keywords.as_slice()),
        }
    }

    fn score(&self, hike: &HikeRecord) -> f64 {
        let comments = hike.comments.to_lowercase();
        let mut score =
            hike.miles * self.config.mile_weight + hike.elevation * self.config.elevation_weight;

        if self.priority.matches(&hike.location) || self.priority.matches_lowered(&comments) {
            score += self.config.priority_bonus;
        }
        if self.difficulty.matches_lowered(&comments) {
            score += self.config.keyword_bonus;
        }

        score
    }
}
