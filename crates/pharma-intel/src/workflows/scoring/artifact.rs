use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generated page content submitted for scoring. Every field is optional on
/// the wire and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentArtifact {
    pub title: String,
    pub h1: Option<String>,
    pub h2: Vec<String>,
    pub body: String,
    pub faq: Vec<QuestionAnswer>,
    pub schema_markup: Option<Value>,
    pub geo: GeoOptimization,
    pub platform_tags: Vec<String>,
}

/// Answer-engine optimization block produced alongside the page copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoOptimization {
    pub ai_summary: Option<String>,
    pub citations: Vec<String>,
    pub references: Vec<String>,
    pub author_credentials: Option<String>,
    pub schema_markup: Option<Value>,
    pub structured_data: Option<Value>,
    pub statistics: Vec<String>,
    pub voice_search_answers: Vec<QuestionAnswer>,
    pub event_tags: Vec<String>,
    pub target_platforms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

impl ContentArtifact {
    pub fn h1_text(&self) -> Option<&str> {
        self.h1.as_deref().map(str::trim).filter(|h1| !h1.is_empty())
    }

    /// Schema markup from the page and the GEO block, whichever are present.
    pub fn schema_sources(&self) -> impl Iterator<Item = &Value> {
        self.schema_markup
            .iter()
            .chain(self.geo.schema_markup.iter())
            .filter(|value| value_present(value))
    }
}

impl GeoOptimization {
    /// Lower-cased text of every evidence-bearing field.
    pub fn evidence_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.ai_summary.as_deref());
        parts.extend(self.author_credentials.as_deref());
        parts.extend(self.citations.iter().map(String::as_str));
        parts.extend(self.references.iter().map(String::as_str));
        parts.extend(self.statistics.iter().map(String::as_str));
        for entry in &self.voice_search_answers {
            parts.push(&entry.question);
            parts.push(&entry.answer);
        }
        parts.join("\n").to_lowercase()
    }
}

pub(crate) fn text_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

/// Null, blank strings and empty containers count as absent.
pub(crate) fn value_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

pub(crate) fn schema_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_artifact_deserializes_with_defaults() {
        let artifact: ContentArtifact =
            serde_json::from_value(json!({ "title": "Xelora" })).expect("artifact parses");
        assert_eq!(artifact.title, "Xelora");
        assert!(artifact.h1_text().is_none());
        assert!(artifact.geo.citations.is_empty());
        assert_eq!(artifact.schema_sources().count(), 0);
    }

    #[test]
    fn empty_schema_values_are_absent() {
        let artifact = ContentArtifact {
            schema_markup: Some(json!({})),
            geo: GeoOptimization {
                schema_markup: Some(json!({ "@type": "Drug" })),
                ..GeoOptimization::default()
            },
            ..ContentArtifact::default()
        };
        let sources: Vec<String> = artifact.schema_sources().map(schema_text).collect();
        assert_eq!(sources, vec![r#"{"@type":"Drug"}"#.to_string()]);
    }

    #[test]
    fn evidence_text_is_lower_cased() {
        let geo = GeoOptimization {
            ai_summary: Some("FDA Accepted".to_string()),
            statistics: vec!["ORR 42%".to_string()],
            ..GeoOptimization::default()
        };
        assert_eq!(geo.evidence_text(), "fda accepted\norr 42%");
    }
}
