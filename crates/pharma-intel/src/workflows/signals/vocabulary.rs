//! Controlled vocabularies and phrase patterns used by the extractors.

use regex::Regex;
use std::sync::OnceLock;

/// Case-insensitive needle → reported biomarker code.
pub const BIOMARKER_TERMS: &[(&str, &str)] = &[
    ("pd-l1", "PD-L1"),
    ("pdl1", "PD-L1"),
    ("her2", "HER2"),
    ("egfr", "EGFR"),
    ("braf", "BRAF"),
    ("kras", "KRAS"),
    ("alk", "ALK"),
    ("ros1", "ROS1"),
    ("met", "MET"),
    ("ret", "RET"),
    ("ntrk", "NTRK"),
    ("msi", "MSI"),
    ("mmr", "MMR"),
    ("tmb", "TMB"),
    ("ctdna", "ctDNA"),
    ("cea", "CEA"),
    ("ca19-9", "CA19-9"),
];

/// Medical term found in indications text → lay equivalent.
pub const PATIENT_FRIENDLY_TERMS: &[(&str, &str)] = &[
    ("hypertension", "high blood pressure"),
    ("hyperlipidemia", "high cholesterol"),
    ("diabetes mellitus", "diabetes"),
    ("myocardial infarction", "heart attack"),
    ("cerebrovascular accident", "stroke"),
    ("neoplasm", "tumor"),
    ("malignant", "cancer"),
    ("metastatic", "spread"),
    ("adjuvant", "additional treatment"),
    ("prophylaxis", "prevention"),
];

/// Competitive-advantage label → case-insensitive pattern over study text.
pub const ADVANTAGE_PATTERNS: &[(&str, &str)] = &[
    (
        "demonstrated superiority",
        r"(?i)superior|better|improved|greater|more effective",
    ),
    ("convenient dosing", r"(?i)once.{0,10}(daily|week|month)"),
    (
        "favorable safety profile",
        r"(?i)well.{0,10}tolerated|favorable.{0,10}safety",
    ),
];

pub const MEDICAL_SUFFIX_PATTERN: &str = r"\b\w+(?:emia|itis|osis|pathy|oma|ectomy)\b";

pub const BIOMARKER_MENTION_PATTERN: &str =
    r"(?i)biomarker|mutation|expression|positive|negative|amplification";

pub const FIRST_IN_HUMAN_MARKER: &str = "first-in-human";

pub const NON_RANDOMIZED_ALLOCATION: &str = "NON_RANDOMIZED";

/// Drug classes with this many products or fewer are not treated as competitors.
pub const COMPETITOR_SIGNIFICANCE_THRESHOLD: u64 = 5;

pub const CLASS_PREDICTION_DISCLAIMER: &str =
    "Based on drug class analysis for pre-approval compounds";

static MEDICAL_SUFFIX_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static BIOMARKER_MENTION_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static ADVANTAGE_REGEXES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();

pub(crate) fn medical_suffix_regex() -> Option<&'static Regex> {
    MEDICAL_SUFFIX_REGEX
        .get_or_init(|| Regex::new(MEDICAL_SUFFIX_PATTERN).ok())
        .as_ref()
}

pub(crate) fn biomarker_mention_regex() -> Option<&'static Regex> {
    BIOMARKER_MENTION_REGEX
        .get_or_init(|| Regex::new(BIOMARKER_MENTION_PATTERN).ok())
        .as_ref()
}

/// Compiled advantage patterns in table order. Entries that fail to compile are skipped.
pub(crate) fn advantage_regexes() -> &'static [(&'static str, Regex)] {
    ADVANTAGE_REGEXES.get_or_init(|| {
        ADVANTAGE_PATTERNS
            .iter()
            .filter_map(|(label, pattern)| Regex::new(pattern).ok().map(|regex| (*label, regex)))
            .collect()
    })
}
