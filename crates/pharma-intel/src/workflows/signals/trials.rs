use super::domain::{AgeRange, BiomarkerStrategy, TrialIntelligence, TrialPhase, TrialStatus};
use super::records::{ProtocolSection, RawLocation, RawTrialRecord};
use super::vocabulary::{
    biomarker_mention_regex, BIOMARKER_TERMS, FIRST_IN_HUMAN_MARKER, NON_RANDOMIZED_ALLOCATION,
};
use std::collections::BTreeSet;

pub fn extract_trial(record: &RawTrialRecord) -> TrialIntelligence {
    let protocol = &record.protocol;
    let identification = &protocol.identification_module;
    let design = &protocol.design_module;
    let status = &protocol.status_module;
    let eligibility = &protocol.eligibility_module;
    let locations = &protocol.contacts_locations_module.locations;

    let title = non_empty(identification.brief_title.as_deref());
    let is_first_in_human = title
        .as_deref()
        .map(|title| title.to_lowercase().contains(FIRST_IN_HUMAN_MARKER))
        .unwrap_or(false);

    let phase = design
        .phases
        .first()
        .map(|code| TrialPhase::from_code(code))
        .unwrap_or(TrialPhase::Unspecified);

    let is_dose_escalation =
        design.design_info.allocation.as_deref() == Some(NON_RANDOMIZED_ALLOCATION);

    TrialIntelligence {
        nct_id: non_empty(identification.nct_id.as_deref()),
        title,
        phase,
        status: TrialStatus::from_code(status.overall_status.as_deref()),
        enrollment: design.enrollment_info.count.unwrap_or(0),
        primary_outcome: protocol
            .outcomes_module
            .primary_outcomes
            .first()
            .and_then(|outcome| non_empty(outcome.measure.as_deref())),
        secondary_outcomes: protocol
            .outcomes_module
            .secondary_outcomes
            .iter()
            .filter_map(|outcome| non_empty(outcome.measure.as_deref()))
            .collect(),
        start_date: non_empty(status.start_date_struct.date.as_deref()),
        completion_date: non_empty(status.completion_date_struct.date.as_deref()),
        study_type: non_empty(design.study_type.as_deref()),
        intervention_type: protocol
            .arms_interventions_module
            .interventions
            .first()
            .and_then(|intervention| non_empty(intervention.kind.as_deref())),
        countries: site_countries(locations),
        cities: site_cities(locations),
        site_count: locations.len(),
        is_first_in_human,
        is_dose_escalation,
        biomarkers: detect_biomarkers(record.search_text()),
        biomarker_strategy: classify_biomarker_strategy(protocol),
        age_range: AgeRange {
            min: non_empty(eligibility.minimum_age.as_deref()),
            max: non_empty(eligibility.maximum_age.as_deref()),
        },
    }
}

/// Vocabulary hits anywhere in the record. A hit means the record mentions the
/// marker, not that it is an eligibility criterion.
pub fn detect_biomarkers(search_text: &str) -> BTreeSet<String> {
    let haystack = search_text.to_lowercase();
    BIOMARKER_TERMS
        .iter()
        .filter(|(needle, _)| haystack.contains(needle))
        .map(|(_, code)| (*code).to_string())
        .collect()
}

fn classify_biomarker_strategy(protocol: &ProtocolSection) -> BiomarkerStrategy {
    let Some(regex) = biomarker_mention_regex() else {
        return BiomarkerStrategy::AllComer;
    };

    let outcomes = &protocol.outcomes_module;
    let mut text = protocol
        .eligibility_module
        .eligibility_criteria
        .clone()
        .unwrap_or_default();
    for outcome in outcomes
        .primary_outcomes
        .iter()
        .chain(outcomes.secondary_outcomes.iter())
    {
        for part in [&outcome.measure, &outcome.time_frame, &outcome.description]
            .into_iter()
            .flatten()
        {
            text.push(' ');
            text.push_str(part);
        }
    }

    match regex.find_iter(&text).count() {
        0 => BiomarkerStrategy::AllComer,
        1..=5 => BiomarkerStrategy::BiomarkerInformed,
        _ => BiomarkerStrategy::BiomarkerDriven,
    }
}

fn site_countries(locations: &[RawLocation]) -> BTreeSet<String> {
    locations
        .iter()
        .filter_map(|location| non_empty(location.country.as_deref()))
        .collect()
}

fn site_cities(locations: &[RawLocation]) -> Vec<String> {
    locations
        .iter()
        .filter_map(|location| {
            match (
                non_empty(location.city.as_deref()),
                non_empty(location.country.as_deref()),
            ) {
                (Some(city), Some(country)) => Some(format!("{city}, {country}")),
                (Some(only), None) | (None, Some(only)) => Some(only),
                (None, None) => None,
            }
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
