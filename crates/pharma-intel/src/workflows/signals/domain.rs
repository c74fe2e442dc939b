use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Clinical phase as recorded in the registry's design metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrialPhase {
    #[serde(rename = "EARLY_PHASE1")]
    EarlyPhase1,
    #[serde(rename = "PHASE1")]
    Phase1,
    #[serde(rename = "PHASE2")]
    Phase2,
    #[serde(rename = "PHASE3")]
    Phase3,
    #[serde(rename = "UNSPECIFIED")]
    Unspecified,
}

impl TrialPhase {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "EARLY_PHASE1" => Self::EarlyPhase1,
            "PHASE1" => Self::Phase1,
            "PHASE2" => Self::Phase2,
            "PHASE3" => Self::Phase3,
            _ => Self::Unspecified,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EarlyPhase1 => "Early Phase 1",
            Self::Phase1 => "Phase 1",
            Self::Phase2 => "Phase 2",
            Self::Phase3 => "Phase 3",
            Self::Unspecified => "Unspecified",
        }
    }
}

/// Registry recruitment status. Unrecognized codes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrialStatus {
    NotYetRecruiting,
    Recruiting,
    EnrollingByInvitation,
    ActiveNotRecruiting,
    Completed,
    Other(String),
    Unknown,
}

impl TrialStatus {
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code.map(str::trim).filter(|code| !code.is_empty()) else {
            return Self::Unknown;
        };

        match code.to_ascii_uppercase().as_str() {
            "NOT_YET_RECRUITING" => Self::NotYetRecruiting,
            "RECRUITING" => Self::Recruiting,
            "ENROLLING_BY_INVITATION" => Self::EnrollingByInvitation,
            "ACTIVE_NOT_RECRUITING" => Self::ActiveNotRecruiting,
            "COMPLETED" => Self::Completed,
            _ => Self::Other(code.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::NotYetRecruiting => "NOT_YET_RECRUITING",
            Self::Recruiting => "RECRUITING",
            Self::EnrollingByInvitation => "ENROLLING_BY_INVITATION",
            Self::ActiveNotRecruiting => "ACTIVE_NOT_RECRUITING",
            Self::Completed => "COMPLETED",
            Self::Other(code) => code,
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Only these two statuses count toward active trials.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Recruiting | Self::ActiveNotRecruiting)
    }
}

impl From<String> for TrialStatus {
    fn from(value: String) -> Self {
        Self::from_code(Some(&value))
    }
}

impl From<TrialStatus> for String {
    fn from(value: TrialStatus) -> Self {
        value.code().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Facts extracted from a single registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialIntelligence {
    pub nct_id: Option<String>,
    pub title: Option<String>,
    pub phase: TrialPhase,
    pub status: TrialStatus,
    pub enrollment: u64,
    pub primary_outcome: Option<String>,
    pub secondary_outcomes: Vec<String>,
    pub start_date: Option<String>,
    pub completion_date: Option<String>,
    pub study_type: Option<String>,
    pub intervention_type: Option<String>,
    pub countries: BTreeSet<String>,
    pub cities: Vec<String>,
    pub site_count: usize,
    pub is_first_in_human: bool,
    pub is_dose_escalation: bool,
    pub biomarkers: BTreeSet<String>,
    pub biomarker_strategy: BiomarkerStrategy,
    pub age_range: AgeRange,
}

/// How strongly a protocol leans on biomarker selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomarkerStrategy {
    BiomarkerDriven,
    BiomarkerInformed,
    AllComer,
}

impl BiomarkerStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BiomarkerDriven => "biomarker-driven patient selection",
            Self::BiomarkerInformed => "biomarker-informed development",
            Self::AllComer => "all-comer population",
        }
    }
}

/// Keyword and positioning hints mined from a label document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSignals {
    pub seo_keywords: Vec<String>,
    pub patient_friendly_terms: Vec<String>,
    pub competitive_advantages: Vec<String>,
    pub pharmacologic_classes: Vec<String>,
}

/// A drug class with enough marketed products to count as competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorClass {
    pub drug_class: String,
    pub count: u64,
    pub is_direct_competitor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCount {
    pub term: String,
    pub count: u64,
}

/// Class-level adverse-event tallies. Never a confirmed label safety profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdverseEventProfile {
    pub top_events: Vec<ReactionCount>,
    pub class_based_prediction: bool,
    pub disclaimer: String,
}
