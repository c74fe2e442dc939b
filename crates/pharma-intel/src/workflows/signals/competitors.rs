use super::domain::CompetitorClass;
use super::records::RawCompetitorCount;
use super::vocabulary::COMPETITOR_SIGNIFICANCE_THRESHOLD;

/// Keep drug classes above the significance threshold and flag the ones whose
/// label names the target indication.
pub fn extract_competitors(counts: &[RawCompetitorCount], indication: &str) -> Vec<CompetitorClass> {
    let indication = indication.trim().to_lowercase();

    counts
        .iter()
        .filter(|entry| entry.count > COMPETITOR_SIGNIFICANCE_THRESHOLD)
        .map(|entry| CompetitorClass {
            drug_class: entry.term.clone(),
            count: entry.count,
            is_direct_competitor: !indication.is_empty()
                && entry.term.to_lowercase().contains(&indication),
        })
        .collect()
}
