//! SEO recommendations derived from a finished intelligence summary.

use super::domain::{MarketPosition, ResearchContext};
use super::markets::localization_focus;
use super::summary::IntelligenceSummary;
use serde::{Deserialize, Serialize};

const PRIMARY_KEYWORDS: usize = 5;
const SECONDARY_KEYWORDS: usize = 5;
const LONGTAIL_GEO_TERMS: usize = 3;
const PRIMARY_MARKETS: usize = 5;

const EARLY_PILLARS: [&str; 4] = [
    "Scientific innovation and mechanism",
    "Clinical trial recruitment",
    "Disease education and unmet need",
    "Company pipeline and expertise",
];

const LATE_PILLARS: [&str; 4] = [
    "Clinical data and efficacy",
    "Patient eligibility and access",
    "Differentiation from competitors",
    "Treatment journey and experience",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordStrategy {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub longtail: Vec<String>,
    pub branded: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketLocalization {
    pub market: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoStrategy {
    pub primary_markets: Vec<String>,
    pub content_localization: Vec<MarketLocalization>,
    pub regional_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoStrategy {
    pub content_pillars: Vec<String>,
    pub keyword_strategy: KeywordStrategy,
    pub geo_strategy: GeoStrategy,
    pub competitive_positioning: String,
}

impl SeoStrategy {
    pub fn recommend(summary: &IntelligenceSummary, context: &ResearchContext) -> Self {
        let pillars: &[&str] = if summary.development_stage.is_early() {
            &EARLY_PILLARS
        } else {
            &LATE_PILLARS
        };

        Self {
            content_pillars: pillars.iter().map(|pillar| pillar.to_string()).collect(),
            keyword_strategy: keyword_strategy(summary, context),
            geo_strategy: geo_strategy(summary),
            competitive_positioning: positioning(summary.market_position).to_string(),
        }
    }
}

fn keyword_strategy(summary: &IntelligenceSummary, context: &ResearchContext) -> KeywordStrategy {
    let mut longtail: Vec<String> = summary
        .geo_specific_terms
        .iter()
        .take(LONGTAIL_GEO_TERMS)
        .cloned()
        .collect();
    longtail.extend(question_keywords(summary, context));

    KeywordStrategy {
        primary: take(&summary.hcp_search_terms, PRIMARY_KEYWORDS),
        secondary: take(&summary.patient_search_terms, SECONDARY_KEYWORDS),
        longtail,
        branded: branded_keywords(context),
    }
}

fn question_keywords(summary: &IntelligenceSummary, context: &ResearchContext) -> Vec<String> {
    let product = context.product_name.trim();
    let generic = context.generic_name.trim();
    let mut keywords = Vec::new();

    if !generic.is_empty() {
        keywords.push(format!("what is {generic} used for"));
    }
    if !product.is_empty() {
        keywords.push(format!("how does {product} work"));
        keywords.push(format!("{product} side effects"));
        if summary.active_trials > 0 {
            keywords.push(format!("{product} clinical trial enrollment"));
            keywords.push(format!("qualify for {product} trial"));
        }
    }

    keywords
}

fn branded_keywords(context: &ResearchContext) -> Vec<String> {
    let product = context.product_name.trim();
    let generic = context.generic_name.trim();
    let indication = context.indication.trim();
    let mut keywords = Vec::new();

    if !product.is_empty() {
        keywords.push(format!("{product} {indication}").trim_end().to_string());
    }
    if !generic.is_empty() {
        keywords.push(format!("{generic} clinical trials"));
    }

    keywords
}

fn geo_strategy(summary: &IntelligenceSummary) -> GeoStrategy {
    GeoStrategy {
        primary_markets: take(&summary.trial_site_countries, PRIMARY_MARKETS),
        content_localization: summary
            .trial_site_countries
            .iter()
            .map(|country| MarketLocalization {
                market: country.clone(),
                focus: localization_focus(country).to_string(),
            })
            .collect(),
        regional_keywords: summary.geo_specific_terms.clone(),
    }
}

fn positioning(position: MarketPosition) -> &'static str {
    match position {
        MarketPosition::FirstInClass => "Pioneer positioning - focus on innovation and unmet need",
        MarketPosition::EarlyMarket => "Differentiation positioning - highlight unique benefits",
        MarketPosition::Competitive | MarketPosition::CrowdedMarket => {
            "Best-in-class positioning - emphasize superiority"
        }
    }
}

fn take(values: &[String], limit: usize) -> Vec<String> {
    values.iter().take(limit).cloned().collect()
}
