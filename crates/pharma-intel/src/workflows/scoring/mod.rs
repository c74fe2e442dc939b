//! GEO content scoring: six fixed checklists over a generated artifact,
//! composed into a 100-point breakdown with prioritized recommendations.

mod artifact;
mod composer;
mod config;
mod factors;
mod rules;

#[cfg(test)]
mod tests;

pub use artifact::{ContentArtifact, GeoOptimization, QuestionAnswer};
pub use composer::{CategoryScore, ScoreBreakdown, MAX_RECOMMENDATIONS, MAX_SCORE};
pub use config::ScoringVocabulary;
pub use factors::{Factor, ScoreCategory, SUBSCALE_CAP};

use super::intelligence::IntelligenceSummary;
use rules::{score_category, FactorSignals};
use tracing::debug;

/// Stateless scorer that applies the vocabulary tables to an artifact.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    vocabulary: ScoringVocabulary,
}

impl ScoringEngine {
    pub fn new(vocabulary: ScoringVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &ScoringVocabulary {
        &self.vocabulary
    }

    pub fn score(&self, summary: &IntelligenceSummary, artifact: &ContentArtifact) -> ScoreBreakdown {
        let signals = FactorSignals::detect(summary, artifact, &self.vocabulary);

        let outcomes = ScoreCategory::ALL
            .into_iter()
            .map(|category| (category, score_category(category, &signals)))
            .collect();
        let breakdown = composer::compose(outcomes);

        debug!(
            total_score = breakdown.total_score,
            percentage = breakdown.percentage,
            recommendations = breakdown.recommendations.len(),
            "scored content artifact"
        );

        breakdown
    }
}
