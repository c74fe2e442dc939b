use serde::{Deserialize, Serialize};

/// Keyword tables the detection rules match against. Plain words are matched
/// whole-word on lower-cased text; schema types are matched verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringVocabulary {
    pub conversational_starters: Vec<String>,
    pub natural_language_markers: Vec<String>,
    pub clinical_source_terms: Vec<String>,
    pub efficacy_terms: Vec<String>,
    pub ai_platforms: Vec<String>,
    pub medical_schema_types: Vec<String>,
    pub faq_schema_types: Vec<String>,
}

impl Default for ScoringVocabulary {
    fn default() -> Self {
        Self {
            conversational_starters: words(&[
                "what",
                "how",
                "why",
                "when",
                "guide",
                "understanding",
            ]),
            natural_language_markers: words(&["you", "your", "what is", "how to", "can i", "should i"]),
            clinical_source_terms: words(&[
                "clinical trial",
                "fda",
                "ema",
                "study",
                "research",
                "journal",
            ]),
            efficacy_terms: words(&[
                "efficacy",
                "effectiveness",
                "response rate",
                "survival",
                "outcome",
            ]),
            ai_platforms: words(&["chatgpt", "perplexity", "claude", "gemini", "bard"]),
            medical_schema_types: words(&["Drug", "MedicalCondition"]),
            faq_schema_types: words(&["FAQPage", "Question"]),
        }
    }
}

fn words(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
