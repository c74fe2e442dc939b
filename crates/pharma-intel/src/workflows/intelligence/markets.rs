use super::summary::total_enrollment;
use crate::workflows::signals::{TrialIntelligence, TrialPhase, TrialStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Market name → registry country. `approximate` marks proxies such as the
/// EU being represented by a single member state.
const MARKET_ALIASES: &[(&str, &str, bool)] = &[
    ("USA", "United States", false),
    ("US", "United States", false),
    ("EU", "Germany", true),
    ("UK", "United Kingdom", false),
    ("Japan", "Japan", false),
    ("China", "China", false),
    ("Canada", "Canada", false),
    ("Australia", "Australia", false),
];

/// Country → localization focus for market-specific content.
const LOCALIZATION_FOCUS: &[(&str, &str)] = &[
    (
        "United States",
        "Insurance coverage and patient access programs",
    ),
    ("Germany", "HTA assessment and reimbursement pathway"),
    ("United Kingdom", "NICE evaluation and NHS access"),
    ("Japan", "PMDA approval timeline and local trials"),
    ("China", "NMPA pathway and local development"),
    ("Canada", "Health Canada approval and provincial coverage"),
];

const DEFAULT_LOCALIZATION_FOCUS: &str = "Regulatory pathway and patient access";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMarket {
    pub country: String,
    pub approximate: bool,
}

/// Resolve a market alias. Unknown names pass through as their own country.
pub fn resolve_market(market: &str) -> ResolvedMarket {
    let trimmed = market.trim();
    MARKET_ALIASES
        .iter()
        .find(|(alias, _, _)| *alias == trimmed)
        .map(|(_, country, approximate)| ResolvedMarket {
            country: (*country).to_string(),
            approximate: *approximate,
        })
        .unwrap_or_else(|| ResolvedMarket {
            country: trimmed.to_string(),
            approximate: false,
        })
}

pub fn localization_focus(country: &str) -> &'static str {
    LOCALIZATION_FOCUS
        .iter()
        .find(|(known, _)| *known == country)
        .map(|(_, focus)| *focus)
        .unwrap_or(DEFAULT_LOCALIZATION_FOCUS)
}

/// Trial activity inside one requested market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographicMarketSummary {
    pub market: String,
    pub resolved_country: String,
    /// Set when the market is represented by a proxy country.
    pub approximate: bool,
    pub trial_count: usize,
    pub recruiting_sites: usize,
    pub patient_access: u64,
    pub phases: BTreeSet<TrialPhase>,
}

pub fn summarize_market(market: &str, trials: &[TrialIntelligence]) -> GeographicMarketSummary {
    let name = market.trim();
    let resolved = resolve_market(name);
    let in_market: Vec<&TrialIntelligence> = trials
        .iter()
        .filter(|trial| {
            trial.countries.contains(name) || trial.countries.contains(&resolved.country)
        })
        .collect();

    GeographicMarketSummary {
        market: name.to_string(),
        resolved_country: resolved.country,
        approximate: resolved.approximate,
        trial_count: in_market.len(),
        recruiting_sites: in_market
            .iter()
            .filter(|trial| trial.status == TrialStatus::Recruiting)
            .count(),
        patient_access: total_enrollment(in_market.iter().copied()),
        phases: in_market.iter().map(|trial| trial.phase).collect(),
    }
}

/// One summary per distinct, non-blank market in request order.
pub fn summarize_markets(
    markets: &[String],
    trials: &[TrialIntelligence],
) -> Vec<GeographicMarketSummary> {
    let mut seen = BTreeSet::new();
    markets
        .iter()
        .map(|market| market.trim())
        .filter(|market| !market.is_empty() && seen.insert(market.to_string()))
        .map(|market| summarize_market(market, trials))
        .collect()
}
