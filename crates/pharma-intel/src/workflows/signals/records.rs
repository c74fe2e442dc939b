//! Raw external record shapes.
//!
//! Registry and label payloads are loosely structured, so every field is
//! deserialized leniently: a value of the wrong JSON type collapses to the
//! field's default instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One study-registry record (`protocolSection` shape).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTrialRecord {
    pub protocol: ProtocolSection,
    search_text: String,
}

impl RawTrialRecord {
    pub fn from_value(value: &Value) -> Self {
        let protocol = value
            .get("protocolSection")
            .cloned()
            .and_then(|section| serde_json::from_value(section).ok())
            .unwrap_or_default();

        Self {
            protocol,
            search_text: value.to_string().to_lowercase(),
        }
    }

    /// Lower-cased serialization of the full record, used for vocabulary scans.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

impl<'de> Deserialize<'de> for RawTrialRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolSection {
    #[serde(default, deserialize_with = "lenient")]
    pub identification_module: IdentificationModule,
    #[serde(default, deserialize_with = "lenient")]
    pub status_module: StatusModule,
    #[serde(default, deserialize_with = "lenient")]
    pub design_module: DesignModule,
    #[serde(default, deserialize_with = "lenient")]
    pub outcomes_module: OutcomesModule,
    #[serde(default, deserialize_with = "lenient")]
    pub eligibility_module: EligibilityModule,
    #[serde(default, deserialize_with = "lenient")]
    pub contacts_locations_module: ContactsLocationsModule,
    #[serde(default, deserialize_with = "lenient")]
    pub arms_interventions_module: ArmsInterventionsModule,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationModule {
    #[serde(default, deserialize_with = "lenient")]
    pub nct_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub brief_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusModule {
    #[serde(default, deserialize_with = "lenient")]
    pub overall_status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub start_date_struct: DateStruct,
    #[serde(default, deserialize_with = "lenient")]
    pub completion_date_struct: DateStruct,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DateStruct {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignModule {
    #[serde(default, deserialize_with = "lenient")]
    pub phases: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub study_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub design_info: DesignInfo,
    #[serde(default, deserialize_with = "lenient")]
    pub enrollment_info: EnrollmentInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub allocation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub intervention_model: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub primary_purpose: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub masking_info: MaskingInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MaskingInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub masking: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnrollmentInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomesModule {
    #[serde(default, deserialize_with = "lenient_list")]
    pub primary_outcomes: Vec<RawOutcome>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub secondary_outcomes: Vec<RawOutcome>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOutcome {
    #[serde(default, deserialize_with = "lenient")]
    pub measure: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_frame: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityModule {
    #[serde(default, deserialize_with = "lenient")]
    pub eligibility_criteria: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub minimum_age: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub maximum_age: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactsLocationsModule {
    #[serde(default, deserialize_with = "lenient_list")]
    pub locations: Vec<RawLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub facility: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArmsInterventionsModule {
    #[serde(default, deserialize_with = "lenient_list")]
    pub interventions: Vec<RawIntervention>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawIntervention {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Regulatory label document. Text sections arrive either as a string or as
/// a list of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLabelRecord {
    #[serde(default, deserialize_with = "text_or_list")]
    pub indications_and_usage: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub clinical_pharmacology: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub description: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub clinical_studies: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub warnings: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub contraindications: String,
    #[serde(default, deserialize_with = "text_or_list")]
    pub adverse_reactions: String,
    #[serde(default, deserialize_with = "lenient")]
    pub openfda: OpenFdaSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OpenFdaSection {
    #[serde(default, deserialize_with = "lenient")]
    pub pharm_class_epc: Vec<String>,
}

/// Reaction-term tallies for a drug class.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAdverseEventAggregate {
    #[serde(default, deserialize_with = "lenient_list")]
    pub results: Vec<RawTermCount>,
}

/// `(term, count)` pair as returned by count-style registry queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTermCount {
    #[serde(default, deserialize_with = "lenient")]
    pub term: String,
    #[serde(default, deserialize_with = "lenient")]
    pub count: u64,
}

/// Competitor drug-class counts share the registry's term/count shape.
pub type RawCompetitorCount = RawTermCount;

pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the well-formed entries of a list and drops the rest.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn text_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match value {
        Value::String(text) => text,
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    };
    Ok(text)
}
