//! Search-intent phrase templates handed to content generation.

use super::domain::{DevelopmentStage, ResearchContext};

/// Phrases a patient or caregiver would type.
pub fn patient_search_terms(context: &ResearchContext) -> Vec<String> {
    let indication = context.indication.trim();
    if indication.is_empty() {
        return Vec::new();
    }

    let mut terms = vec![
        format!("{indication} treatment options"),
        format!("new {indication} medication"),
        format!("{indication} clinical trials near me"),
    ];

    if let Some(line) = context
        .line_of_therapy
        .as_deref()
        .map(str::trim)
        .filter(|line| !line.is_empty())
    {
        terms.push(format!("{line} {indication} treatment"));
        terms.push(format!("failed {line} {indication} what next"));
    }

    for population in context
        .patient_population
        .iter()
        .map(|population| population.trim())
        .filter(|population| !population.is_empty())
    {
        terms.push(format!("{indication} treatment {population}"));
    }

    terms
}

/// Phrases a prescriber or investigator would type.
pub fn hcp_search_terms(context: &ResearchContext, stage: DevelopmentStage) -> Vec<String> {
    let compound = context.compound_name();
    if compound.is_empty() {
        return Vec::new();
    }

    let indication = context.indication.trim();
    let mut terms = vec![
        join_words(&[compound, indication, "data"]),
        format!("{compound} mechanism of action"),
        format!("{compound} clinical trials"),
    ];

    if stage.names_phase() {
        let stage = stage.label();
        terms.push(format!("{compound} {stage} results"));
        terms.push(join_words(&[compound, stage, "data", indication]));
    }

    terms
}

/// Three market-qualified phrases per requested market.
pub fn geo_specific_terms(markets: &[String], indication: &str) -> Vec<String> {
    let indication = indication.trim();
    if indication.is_empty() {
        return Vec::new();
    }

    markets
        .iter()
        .map(|market| market.trim())
        .filter(|market| !market.is_empty())
        .flat_map(|market| {
            [
                format!("{indication} treatment {market}"),
                format!("{indication} clinical trials {market}"),
                format!("{indication} specialist {market}"),
            ]
        })
        .collect()
}

fn join_words(words: &[&str]) -> String {
    words
        .iter()
        .filter(|word| !word.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
