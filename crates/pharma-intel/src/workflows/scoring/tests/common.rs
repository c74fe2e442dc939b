use serde_json::json;

use crate::workflows::intelligence::{IntelligenceSummary, ResearchContext};
use crate::workflows::scoring::{ContentArtifact, GeoOptimization, QuestionAnswer, ScoringEngine};
use crate::workflows::signals::ExtractedSignals;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

pub(super) fn summary() -> IntelligenceSummary {
    let context = ResearchContext {
        product_name: "Xelora".to_string(),
        generic_name: "velitinib".to_string(),
        indication: "non-small cell lung cancer".to_string(),
        ..ResearchContext::default()
    };
    let mut summary = IntelligenceSummary::build(&context, &ExtractedSignals::default());
    summary.trial_ids = vec!["NCT05012345".to_string()];
    summary
}

pub(super) fn question(text: &str, answer: &str) -> QuestionAnswer {
    QuestionAnswer {
        question: text.to_string(),
        answer: answer.to_string(),
    }
}

pub(super) fn empty_artifact() -> ContentArtifact {
    ContentArtifact {
        title: "Xelora overview".to_string(),
        body: "Xelora is an investigational therapy.".to_string(),
        ..ContentArtifact::default()
    }
}

/// Artifact that satisfies every checklist factor.
pub(super) fn complete_artifact() -> ContentArtifact {
    ContentArtifact {
        title: "Xelora for NSCLC".to_string(),
        h1: Some("What is Xelora?".to_string()),
        h2: vec![
            "How does Xelora work?".to_string(),
            "Who can join the trial?".to_string(),
        ],
        body: "Wondering if you qualify? Your oncologist can help.".to_string(),
        faq: vec![question("Is Xelora approved?", "Not yet.")],
        schema_markup: Some(json!({
            "@context": "https://schema.org",
            "@type": "Drug",
            "mainEntity": { "@type": "FAQPage" }
        })),
        geo: GeoOptimization {
            ai_summary: Some("Xelora is an oral KRAS G12C inhibitor in Phase 2.".to_string()),
            citations: (1..=6).map(|n| format!("Journal of Thoracic Oncology {n}")).collect(),
            references: vec!["ClinicalTrials.gov NCT05012345".to_string()],
            author_credentials: Some("Reviewed by a board-certified oncologist".to_string()),
            schema_markup: None,
            structured_data: Some(json!({ "dosage": "once daily" })),
            statistics: vec![
                "42% objective response rate".to_string(),
                "Median progression-free survival 6.8 months".to_string(),
                "1.2% discontinuation".to_string(),
                "120 patients enrolled".to_string(),
                "18 sites".to_string(),
                "3 countries".to_string(),
            ],
            voice_search_answers: vec![question("What is Xelora?", "An investigational pill.")],
            event_tags: vec!["asco-2025".to_string()],
            target_platforms: vec![
                "ChatGPT".to_string(),
                "Perplexity".to_string(),
                "Claude".to_string(),
                "Gemini".to_string(),
                "Bard".to_string(),
            ],
        },
        platform_tags: vec!["oncology".to_string()],
    }
}
