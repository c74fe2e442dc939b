//! Signal extraction from individual external records.
//!
//! Each extractor looks at one record in isolation and is total: absent or
//! malformed fields come back as empty sets, zero or `None`.

mod adverse_events;
mod competitors;
pub mod domain;
mod labels;
pub mod records;
mod trials;
pub mod vocabulary;

pub use adverse_events::extract_adverse_events;
pub use competitors::extract_competitors;
pub use domain::{
    AdverseEventProfile, AgeRange, BiomarkerStrategy, CompetitorClass, LabelSignals,
    ReactionCount, TrialIntelligence, TrialPhase, TrialStatus,
};
pub use labels::extract_label;
pub use records::{
    RawAdverseEventAggregate, RawCompetitorCount, RawLabelRecord, RawTermCount, RawTrialRecord,
};
pub use trials::{detect_biomarkers, extract_trial};

pub(crate) use labels::dedupe;

use records::lenient_list;
use serde::Deserialize;
use tracing::debug;

/// Raw records the orchestrator managed to fetch. Any source may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecordSet {
    #[serde(default, deserialize_with = "lenient_list")]
    pub trials: Vec<RawTrialRecord>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub labels: Vec<RawLabelRecord>,
    #[serde(default, deserialize_with = "records::lenient")]
    pub adverse_events: Option<RawAdverseEventAggregate>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub competitors: Vec<RawCompetitorCount>,
}

/// Per-record extraction results, ready for aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSignals {
    pub trials: Vec<TrialIntelligence>,
    pub labels: Vec<LabelSignals>,
    pub competitors: Vec<CompetitorClass>,
    pub adverse_events: Option<AdverseEventProfile>,
}

pub fn extract(records: &RawRecordSet, indication: &str) -> ExtractedSignals {
    let signals = ExtractedSignals {
        trials: records.trials.iter().map(extract_trial).collect(),
        labels: records.labels.iter().map(extract_label).collect(),
        competitors: extract_competitors(&records.competitors, indication),
        adverse_events: records.adverse_events.as_ref().map(extract_adverse_events),
    };

    debug!(
        trials = signals.trials.len(),
        labels = signals.labels.len(),
        competitors = signals.competitors.len(),
        adverse_events = signals.adverse_events.is_some(),
        "extracted record signals"
    );

    signals
}
