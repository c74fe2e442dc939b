use super::artifact::{schema_text, text_present, value_present, ContentArtifact};
use super::config::ScoringVocabulary;
use super::factors::{Factor, ScoreCategory, SUBSCALE_CAP};
use super::CategoryScore;
use crate::workflows::intelligence::IntelligenceSummary;

/// Detected properties of one artifact. Flags feed boolean factors and
/// counts feed subscales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FactorSignals {
    pub ai_summary: bool,
    pub structured_faq: bool,
    pub direct_answers: bool,
    pub heading_hierarchy: bool,
    pub conversational_h1: bool,
    pub citations: bool,
    pub citation_count: usize,
    pub author_credentials: bool,
    pub clinical_sources: bool,
    pub schema_markup: bool,
    pub medical_schema: bool,
    pub faq_schema: bool,
    pub structured_data: bool,
    pub statistics: bool,
    pub statistics_count: usize,
    pub efficacy_data: bool,
    pub voice_answers: bool,
    pub natural_language: bool,
    pub platform_tags: bool,
    pub platform_count: usize,
}

impl FactorSignals {
    pub(crate) fn detect(
        summary: &IntelligenceSummary,
        artifact: &ContentArtifact,
        vocabulary: &ScoringVocabulary,
    ) -> Self {
        let geo = &artifact.geo;
        let evidence = geo.evidence_text();
        let h1 = artifact.h1_text().map(str::to_lowercase);
        let prose = format!(
            "{} {} {}",
            h1.as_deref().unwrap_or_default(),
            artifact.h2.join(" "),
            artifact.body
        )
        .to_lowercase();
        let schema: Vec<String> = artifact.schema_sources().map(schema_text).collect();
        let platform_text = format!(
            "{}\n{}\n{}\n{}",
            artifact.platform_tags.join(" "),
            geo.event_tags.join(" "),
            geo.target_platforms.join(" "),
            evidence
        )
        .to_lowercase();

        Self {
            ai_summary: text_present(geo.ai_summary.as_deref()),
            structured_faq: !artifact.faq.is_empty(),
            direct_answers: !artifact.faq.is_empty() && artifact.body.contains('?'),
            heading_hierarchy: h1.is_some() && !artifact.h2.is_empty(),
            conversational_h1: h1
                .as_deref()
                .is_some_and(|h1| mentions_any(h1, &vocabulary.conversational_starters)),
            citations: !geo.citations.is_empty() || !geo.references.is_empty(),
            citation_count: geo.citations.len(),
            author_credentials: text_present(geo.author_credentials.as_deref()),
            clinical_sources: mentions_any(&evidence, &vocabulary.clinical_source_terms)
                || summary
                    .trial_ids
                    .iter()
                    .any(|id| mentions_word(&evidence, &id.to_lowercase())),
            schema_markup: !schema.is_empty(),
            medical_schema: schema_contains(&schema, &vocabulary.medical_schema_types),
            faq_schema: schema_contains(&schema, &vocabulary.faq_schema_types),
            structured_data: geo.structured_data.as_ref().is_some_and(value_present),
            statistics: !geo.statistics.is_empty(),
            statistics_count: geo.statistics.len(),
            efficacy_data: mentions_any(&evidence, &vocabulary.efficacy_terms),
            voice_answers: !geo.voice_search_answers.is_empty(),
            natural_language: mentions_any(&prose, &vocabulary.natural_language_markers),
            platform_tags: !artifact.platform_tags.is_empty() || !geo.event_tags.is_empty(),
            platform_count: vocabulary
                .ai_platforms
                .iter()
                .filter(|platform| mentions_word(&platform_text, &platform.to_lowercase()))
                .count(),
        }
    }

    /// Points and reported count for one factor. Zero points means unmet.
    pub(crate) fn award(&self, factor: Factor) -> (u8, usize) {
        let flag = match factor {
            Factor::AiSummary => self.ai_summary,
            Factor::StructuredFaq => self.structured_faq,
            Factor::DirectAnswers => self.direct_answers,
            Factor::HeadingHierarchy => self.heading_hierarchy,
            Factor::ConversationalH1 => self.conversational_h1,
            Factor::Citations => self.citations,
            Factor::AuthorCredentials => self.author_credentials,
            Factor::ClinicalSources => self.clinical_sources,
            Factor::SchemaMarkup => self.schema_markup,
            Factor::MedicalSchema => self.medical_schema,
            Factor::FaqSchema => self.faq_schema,
            Factor::StructuredData => self.structured_data,
            Factor::Statistics => self.statistics,
            Factor::EfficacyData => self.efficacy_data,
            Factor::VoiceAnswers => self.voice_answers,
            Factor::NaturalLanguage => self.natural_language,
            Factor::PlatformTags => self.platform_tags,
            Factor::CitationCount => return subscale(self.citation_count),
            Factor::StatisticsCount => return subscale(self.statistics_count),
            Factor::PlatformCount => return subscale(self.platform_count),
        };

        if flag {
            (factor.max_points(), 0)
        } else {
            (0, 0)
        }
    }
}

fn subscale(count: usize) -> (u8, usize) {
    // SUBSCALE_CAP fits in u8, so the cast cannot truncate.
    (count.min(SUBSCALE_CAP) as u8, count)
}

/// Category score plus the checklist factors that earned nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryOutcome {
    pub score: CategoryScore,
    pub missed: Vec<Factor>,
}

pub(crate) fn score_category(category: ScoreCategory, signals: &FactorSignals) -> CategoryOutcome {
    let max = category.max_points();
    let mut score: u8 = 0;
    let mut factors = Vec::new();
    let mut missed = Vec::new();

    for &factor in category.factors() {
        match signals.award(factor) {
            (0, _) => missed.push(factor),
            (points, count) => {
                score = score.saturating_add(points);
                factors.push(factor.achieved_label(count));
            }
        }
    }

    CategoryOutcome {
        score: CategoryScore {
            score: score.min(max),
            max,
            factors,
        },
        missed,
    }
}

fn mentions_any(text: &str, phrases: &[String]) -> bool {
    phrases
        .iter()
        .any(|phrase| mentions_word(text, &phrase.to_lowercase()))
}

fn schema_contains(schema: &[String], types: &[String]) -> bool {
    schema
        .iter()
        .any(|markup| types.iter().any(|kind| !kind.is_empty() && markup.contains(kind.as_str())))
}

/// Whole-word match that also accepts a trailing plural `s`.
fn mentions_word(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    text.match_indices(phrase).any(|(start, _)| {
        let starts_word = !text[..start].chars().next_back().is_some_and(is_word_char);
        let tail = &text[start + phrase.len()..];
        let ends_word = !starts_with_word_char(tail)
            || tail
                .strip_prefix('s')
                .is_some_and(|rest| !starts_with_word_char(rest));
        starts_word && ends_word
    })
}

fn starts_with_word_char(text: &str) -> bool {
    text.chars().next().is_some_and(is_word_char)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}
