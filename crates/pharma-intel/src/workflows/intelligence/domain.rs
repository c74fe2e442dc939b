use crate::workflows::signals::TrialPhase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller-supplied research context for one product and indication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchContext {
    pub product_name: String,
    pub generic_name: String,
    pub indication: String,
    pub line_of_therapy: Option<String>,
    pub patient_population: Vec<String>,
    pub target_markets: Vec<String>,
    pub key_biomarkers: Vec<String>,
    pub primary_endpoints: Vec<String>,
}

impl ResearchContext {
    /// Name used in professional search phrases; the generic name when known.
    pub fn compound_name(&self) -> &str {
        let generic = self.generic_name.trim();
        if generic.is_empty() {
            self.product_name.trim()
        } else {
            generic
        }
    }
}

/// Most advanced clinical phase present among the trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DevelopmentStage {
    #[serde(rename = "Pre-clinical")]
    PreClinical,
    #[serde(rename = "Early Phase 1")]
    EarlyPhase1,
    #[serde(rename = "Phase 1")]
    Phase1,
    #[serde(rename = "Phase 2")]
    Phase2,
    #[serde(rename = "Phase 3")]
    Phase3,
}

impl DevelopmentStage {
    /// Precedence is fixed: Phase 3, Phase 2, Phase 1, Early Phase 1, else
    /// pre-clinical. It is never the most common phase.
    pub fn from_breakdown(breakdown: &BTreeMap<TrialPhase, usize>) -> Self {
        let present = |phase: TrialPhase| breakdown.get(&phase).copied().unwrap_or(0) > 0;

        if present(TrialPhase::Phase3) {
            Self::Phase3
        } else if present(TrialPhase::Phase2) {
            Self::Phase2
        } else if present(TrialPhase::Phase1) {
            Self::Phase1
        } else if present(TrialPhase::EarlyPhase1) {
            Self::EarlyPhase1
        } else {
            Self::PreClinical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PreClinical => "Pre-clinical",
            Self::EarlyPhase1 => "Early Phase 1",
            Self::Phase1 => "Phase 1",
            Self::Phase2 => "Phase 2",
            Self::Phase3 => "Phase 3",
        }
    }

    /// Pre-clinical through Phase 1 share early-development messaging.
    pub const fn is_early(self) -> bool {
        matches!(self, Self::PreClinical | Self::EarlyPhase1 | Self::Phase1)
    }

    pub const fn names_phase(self) -> bool {
        !matches!(self, Self::PreClinical)
    }
}

/// Crowding of the competitive landscape by significant drug classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketPosition {
    FirstInClass,
    EarlyMarket,
    Competitive,
    CrowdedMarket,
}

impl MarketPosition {
    pub const fn from_competitor_count(count: usize) -> Self {
        match count {
            0 => Self::FirstInClass,
            1..=2 => Self::EarlyMarket,
            3..=9 => Self::Competitive,
            _ => Self::CrowdedMarket,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstInClass => "first-in-class",
            Self::EarlyMarket => "early-market",
            Self::Competitive => "competitive",
            Self::CrowdedMarket => "crowded-market",
        }
    }
}
