use serde::{Deserialize, Serialize};

/// Points available to a count-based subscale.
pub const SUBSCALE_CAP: usize = 5;

/// The six scoring categories in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    ContentStructure,
    AuthoritySignals,
    TechnicalOptimization,
    StatisticalEvidence,
    VoiceSearch,
    PlatformOptimization,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 6] = [
        Self::ContentStructure,
        Self::AuthoritySignals,
        Self::TechnicalOptimization,
        Self::StatisticalEvidence,
        Self::VoiceSearch,
        Self::PlatformOptimization,
    ];

    pub const fn max_points(self) -> u8 {
        match self {
            Self::ContentStructure => 25,
            Self::AuthoritySignals | Self::TechnicalOptimization => 20,
            Self::StatisticalEvidence => 15,
            Self::VoiceSearch | Self::PlatformOptimization => 10,
        }
    }

    /// Checklist order; achieved labels and recommendations follow it.
    pub const fn factors(self) -> &'static [Factor] {
        match self {
            Self::ContentStructure => &[
                Factor::AiSummary,
                Factor::StructuredFaq,
                Factor::DirectAnswers,
                Factor::HeadingHierarchy,
                Factor::ConversationalH1,
            ],
            Self::AuthoritySignals => &[
                Factor::Citations,
                Factor::CitationCount,
                Factor::AuthorCredentials,
                Factor::ClinicalSources,
            ],
            Self::TechnicalOptimization => &[
                Factor::SchemaMarkup,
                Factor::MedicalSchema,
                Factor::FaqSchema,
                Factor::StructuredData,
            ],
            Self::StatisticalEvidence => &[
                Factor::Statistics,
                Factor::StatisticsCount,
                Factor::EfficacyData,
            ],
            Self::VoiceSearch => &[Factor::VoiceAnswers, Factor::NaturalLanguage],
            Self::PlatformOptimization => &[Factor::PlatformTags, Factor::PlatformCount],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    AiSummary,
    StructuredFaq,
    DirectAnswers,
    HeadingHierarchy,
    ConversationalH1,
    Citations,
    CitationCount,
    AuthorCredentials,
    ClinicalSources,
    SchemaMarkup,
    MedicalSchema,
    FaqSchema,
    StructuredData,
    Statistics,
    StatisticsCount,
    EfficacyData,
    VoiceAnswers,
    NaturalLanguage,
    PlatformTags,
    PlatformCount,
}

impl Factor {
    /// Subscales award one point per counted item up to [`SUBSCALE_CAP`],
    /// so every factor tops out at five.
    pub const fn max_points(self) -> u8 {
        5
    }

    /// Label reported when the factor scores. `count` only matters for subscales.
    pub fn achieved_label(self, count: usize) -> String {
        match self {
            Self::AiSummary => "AI-optimized summary".to_string(),
            Self::StructuredFaq => "Structured FAQ section".to_string(),
            Self::DirectAnswers => "Direct answer format".to_string(),
            Self::HeadingHierarchy => "Clear H1/H2 hierarchy".to_string(),
            Self::ConversationalH1 => "Conversational heading".to_string(),
            Self::Citations => "Authoritative citations".to_string(),
            Self::CitationCount => format!("{count} citations included"),
            Self::AuthorCredentials => "Author credentials".to_string(),
            Self::ClinicalSources => "Clinical trial sources".to_string(),
            Self::SchemaMarkup => "Schema markup".to_string(),
            Self::MedicalSchema => "Medical schema".to_string(),
            Self::FaqSchema => "FAQ schema".to_string(),
            Self::StructuredData => "Structured data".to_string(),
            Self::Statistics => "Statistical evidence".to_string(),
            Self::StatisticsCount => format!("{count} statistics cited"),
            Self::EfficacyData => "Efficacy data included".to_string(),
            Self::VoiceAnswers => "Voice search answers".to_string(),
            Self::NaturalLanguage => "Natural language format".to_string(),
            Self::PlatformTags => "Platform-specific tags".to_string(),
            Self::PlatformCount => format!("Optimized for {count} platforms"),
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::AiSummary => "Add an AI-optimized summary at the beginning of content",
            Self::StructuredFaq => "Include a structured FAQ section with common questions",
            Self::DirectAnswers => "Answer common questions directly in the body copy",
            Self::HeadingHierarchy => "Organize content under one H1 with supporting H2 sections",
            Self::ConversationalH1 => {
                "Consider a more conversational H1 tag (e.g., \"What is...\" or \"How does...\")"
            }
            Self::Citations => "Add authoritative citations or references",
            Self::CitationCount => "Add more authoritative citations (aim for 3-5 sources)",
            Self::AuthorCredentials => "Add author or medical reviewer credentials",
            Self::ClinicalSources => "Include clinical trial data or FDA references",
            Self::SchemaMarkup => "Implement comprehensive schema markup",
            Self::MedicalSchema => "Add Drug or MedicalCondition schema",
            Self::FaqSchema => "Add FAQPage schema for question-and-answer content",
            Self::StructuredData => "Provide structured data for key product facts",
            Self::Statistics => {
                "Include more statistical evidence (efficacy rates, patient outcomes)"
            }
            Self::StatisticsCount => "Cite additional supporting statistics (aim for 3-5)",
            Self::EfficacyData => "Reference efficacy endpoints such as response rate or survival",
            Self::VoiceAnswers => "Add voice search optimized Q&A format",
            Self::NaturalLanguage => "Use conversational, second-person phrasing",
            Self::PlatformTags => "Tag content for the AI platforms it targets",
            Self::PlatformCount => "Optimize for more AI platforms",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_budgets_sum_to_one_hundred() {
        let total: u32 = ScoreCategory::ALL
            .iter()
            .map(|category| u32::from(category.max_points()))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn factor_points_fill_each_category_budget() {
        for category in ScoreCategory::ALL {
            let points: u8 = category.factors().iter().map(|factor| factor.max_points()).sum();
            assert_eq!(points, category.max_points(), "{category:?}");
        }
    }

    #[test]
    fn every_factor_belongs_to_one_category_with_a_distinct_recommendation() {
        let factors: Vec<Factor> = ScoreCategory::ALL
            .iter()
            .flat_map(|category| category.factors().iter().copied())
            .collect();
        assert_eq!(factors.len(), 20);

        let distinct: HashSet<Factor> = factors.iter().copied().collect();
        assert_eq!(distinct.len(), 20);

        let recommendations: HashSet<&str> =
            factors.iter().map(|factor| factor.recommendation()).collect();
        assert_eq!(recommendations.len(), 20);
    }

    #[test]
    fn subscale_labels_carry_raw_count() {
        assert_eq!(Factor::CitationCount.achieved_label(8), "8 citations included");
        assert_eq!(Factor::PlatformCount.achieved_label(2), "Optimized for 2 platforms");
        assert_eq!(Factor::AiSummary.achieved_label(0), "AI-optimized summary");
    }

    #[test]
    fn categories_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(ScoreCategory::TechnicalOptimization).expect("serializes"),
            serde_json::json!("technical_optimization")
        );
    }
}
