use super::common::*;
use crate::workflows::scoring::{ScoreCategory, MAX_RECOMMENDATIONS};

#[test]
fn bare_artifact_gets_five_content_structure_recommendations() {
    let breakdown = engine().score(&summary(), &empty_artifact());

    assert!(breakdown.percentage < 50);
    assert_eq!(breakdown.recommendations.len(), MAX_RECOMMENDATIONS);
    assert_eq!(
        breakdown.recommendations[0],
        "Add an AI-optimized summary at the beginning of content"
    );
    assert_eq!(
        breakdown.recommendations[1],
        "Include a structured FAQ section with common questions"
    );
    for category in [
        ScoreCategory::AuthoritySignals,
        ScoreCategory::TechnicalOptimization,
        ScoreCategory::StatisticalEvidence,
    ] {
        assert_eq!(breakdown.category(category).expect("present").score, 0);
    }
}

#[test]
fn recommendations_skip_achieved_factors() {
    let mut artifact = complete_artifact();
    artifact.geo.voice_search_answers.clear();
    artifact.geo.structured_data = None;

    let breakdown = engine().score(&summary(), &artifact);
    assert_eq!(breakdown.total_score, 90);
    assert_eq!(
        breakdown.recommendations,
        vec![
            "Provide structured data for key product facts",
            "Add voice search optimized Q&A format",
        ]
    );
}

#[test]
fn categories_serialize_in_fixed_order() {
    let breakdown = engine().score(&summary(), &empty_artifact());
    let json = serde_json::to_string(&breakdown).expect("serializes");

    let positions: Vec<usize> = [
        "content_structure",
        "authority_signals",
        "technical_optimization",
        "statistical_evidence",
        "voice_search",
        "platform_optimization",
    ]
    .iter()
    .map(|key| json.find(&format!("\"{key}\":")).expect("category key present"))
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(json.contains("\"max_score\":100"));
}
