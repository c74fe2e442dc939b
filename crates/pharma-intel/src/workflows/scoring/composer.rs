use super::factors::ScoreCategory;
use super::rules::CategoryOutcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_SCORE: u8 = 100;
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Points earned within one category and the factors that earned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u8,
    pub max: u8,
    pub factors: Vec<String>,
}

/// Overall score for one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_score: u8,
    pub max_score: u8,
    pub percentage: u8,
    pub categories: BTreeMap<ScoreCategory, CategoryScore>,
    pub recommendations: Vec<String>,
}

impl ScoreBreakdown {
    pub fn category(&self, category: ScoreCategory) -> Option<&CategoryScore> {
        self.categories.get(&category)
    }
}

/// Sum category outcomes and collect recommendations for unmet factors in
/// category order, keeping the first [`MAX_RECOMMENDATIONS`].
pub(crate) fn compose(outcomes: Vec<(ScoreCategory, CategoryOutcome)>) -> ScoreBreakdown {
    let total: u32 = outcomes
        .iter()
        .map(|(_, outcome)| u32::from(outcome.score.score))
        .sum();
    let total_score = u8::try_from(total).unwrap_or(MAX_SCORE).min(MAX_SCORE);

    let recommendations = outcomes
        .iter()
        .flat_map(|(_, outcome)| outcome.missed.iter())
        .map(|factor| factor.recommendation().to_string())
        .take(MAX_RECOMMENDATIONS)
        .collect();

    ScoreBreakdown {
        total_score,
        max_score: MAX_SCORE,
        percentage: percentage(total_score, MAX_SCORE),
        categories: outcomes
            .into_iter()
            .map(|(category, outcome)| (category, outcome.score))
            .collect(),
        recommendations,
    }
}

fn percentage(score: u8, max: u8) -> u8 {
    if max == 0 {
        return 0;
    }
    let ratio = f64::from(score) / f64::from(max) * 100.0;
    // Clamped to 0..=100 before the cast.
    ratio.round().clamp(0.0, 100.0) as u8
}
