use super::domain::{DevelopmentStage, MarketPosition, ResearchContext};
use super::markets::{summarize_markets, GeographicMarketSummary};
use super::messaging::{content_focus, key_messages, target_audience};
use super::terms::{geo_specific_terms, hcp_search_terms, patient_search_terms};
use crate::workflows::signals::{
    dedupe, AdverseEventProfile, CompetitorClass, ExtractedSignals, LabelSignals,
    TrialIntelligence, TrialPhase,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

const NOVEL_MECHANISM: &str = "novel mechanism of action";
const BIOMARKER_SELECTION: &str = "biomarker-driven patient selection";
const DIFFERENTIATED_ENDPOINTS: &str = "differentiated clinical endpoints";

/// Canonical intelligence for one product and indication. Built once from
/// extracted signals and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceSummary {
    pub development_stage: DevelopmentStage,
    pub total_trials: usize,
    pub active_trials: usize,
    pub trial_phase_breakdown: BTreeMap<TrialPhase, usize>,
    pub geographic_reach: BTreeSet<String>,
    pub enrollment_target: u64,
    pub first_in_human_trials: usize,
    pub dose_escalation_trials: usize,
    pub biomarker_driven_trials: usize,
    pub competitor_count: usize,
    pub direct_competitor_count: usize,
    pub market_position: MarketPosition,
    pub differentiators: Vec<String>,
    pub trial_site_countries: Vec<String>,
    pub trial_ids: Vec<String>,
    pub markets: Vec<GeographicMarketSummary>,
    pub patient_search_terms: Vec<String>,
    pub hcp_search_terms: Vec<String>,
    pub geo_specific_terms: Vec<String>,
    pub content_focus: String,
    pub target_audience: Vec<String>,
    pub key_messages: Vec<String>,
    pub seo_keywords: Vec<String>,
    pub patient_friendly_terms: Vec<String>,
    pub competitive_advantages: Vec<String>,
    pub pharmacologic_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_signals: Option<AdverseEventProfile>,
}

impl IntelligenceSummary {
    pub fn build(context: &ResearchContext, signals: &ExtractedSignals) -> Self {
        let trials = &signals.trials;

        let trial_phase_breakdown = phase_breakdown(trials);
        let development_stage = DevelopmentStage::from_breakdown(&trial_phase_breakdown);
        let geographic_reach: BTreeSet<String> = trials
            .iter()
            .flat_map(|trial| trial.countries.iter().cloned())
            .collect();
        let trial_ids: BTreeSet<String> = trials
            .iter()
            .filter_map(|trial| trial.nct_id.clone())
            .collect();

        let markets = summarize_markets(&context.target_markets, trials);
        let competitor_count = signals.competitors.len();

        let summary = Self {
            development_stage,
            total_trials: trials.len(),
            active_trials: trials.iter().filter(|trial| trial.status.is_active()).count(),
            trial_site_countries: geographic_reach.iter().cloned().collect(),
            geographic_reach,
            enrollment_target: total_enrollment(trials.iter()),
            first_in_human_trials: trials.iter().filter(|trial| trial.is_first_in_human).count(),
            dose_escalation_trials: trials.iter().filter(|trial| trial.is_dose_escalation).count(),
            biomarker_driven_trials: trials
                .iter()
                .filter(|trial| !trial.biomarkers.is_empty())
                .count(),
            competitor_count,
            direct_competitor_count: direct_competitors(&signals.competitors),
            market_position: MarketPosition::from_competitor_count(competitor_count),
            differentiators: differentiators(context, competitor_count),
            trial_ids: trial_ids.into_iter().collect(),
            patient_search_terms: patient_search_terms(context),
            hcp_search_terms: hcp_search_terms(context, development_stage),
            geo_specific_terms: geo_specific_terms(&context.target_markets, &context.indication),
            content_focus: content_focus(development_stage).to_string(),
            target_audience: target_audience(development_stage),
            key_messages: key_messages(development_stage, trials.len(), markets.len()),
            markets,
            seo_keywords: merge_labels(&signals.labels, |label| &label.seo_keywords),
            patient_friendly_terms: merge_labels(&signals.labels, |label| {
                &label.patient_friendly_terms
            }),
            competitive_advantages: merge_labels(&signals.labels, |label| {
                &label.competitive_advantages
            }),
            pharmacologic_classes: merge_labels(&signals.labels, |label| {
                &label.pharmacologic_classes
            }),
            safety_signals: signals.adverse_events.clone(),
            trial_phase_breakdown,
        };

        debug!(
            stage = summary.development_stage.label(),
            total_trials = summary.total_trials,
            active_trials = summary.active_trials,
            competitors = summary.competitor_count,
            markets = summary.markets.len(),
            "built intelligence summary"
        );

        summary
    }
}

/// Counts per phase, including `Unspecified`, so the values sum to the trial count.
fn phase_breakdown(trials: &[TrialIntelligence]) -> BTreeMap<TrialPhase, usize> {
    trials.iter().fold(BTreeMap::new(), |mut breakdown, trial| {
        *breakdown.entry(trial.phase).or_insert(0) += 1;
        breakdown
    })
}

/// Saturates instead of overflowing on absurd registry counts.
pub(crate) fn total_enrollment<'a, I>(trials: I) -> u64
where
    I: IntoIterator<Item = &'a TrialIntelligence>,
{
    trials
        .into_iter()
        .fold(0u64, |total, trial| total.saturating_add(trial.enrollment))
}

fn direct_competitors(competitors: &[CompetitorClass]) -> usize {
    competitors
        .iter()
        .filter(|competitor| competitor.is_direct_competitor)
        .count()
}

fn differentiators(context: &ResearchContext, competitor_count: usize) -> Vec<String> {
    [
        (competitor_count == 0, NOVEL_MECHANISM),
        (!context.key_biomarkers.is_empty(), BIOMARKER_SELECTION),
        (!context.primary_endpoints.is_empty(), DIFFERENTIATED_ENDPOINTS),
    ]
    .into_iter()
    .filter(|(applies, _)| *applies)
    .map(|(_, label)| label.to_string())
    .collect()
}

fn merge_labels<F>(labels: &[LabelSignals], field: F) -> Vec<String>
where
    F: Fn(&LabelSignals) -> &Vec<String>,
{
    dedupe(labels.iter().flat_map(|label| field(label).iter().cloned()))
}
