use super::domain::LabelSignals;
use super::records::RawLabelRecord;
use super::vocabulary::{advantage_regexes, medical_suffix_regex, PATIENT_FRIENDLY_TERMS};

pub fn extract_label(label: &RawLabelRecord) -> LabelSignals {
    LabelSignals {
        seo_keywords: seo_keywords(label),
        patient_friendly_terms: patient_friendly_terms(&label.indications_and_usage),
        competitive_advantages: competitive_advantages(label),
        pharmacologic_classes: dedupe(
            label
                .openfda
                .pharm_class_epc
                .iter()
                .map(|class| class.trim().to_string())
                .filter(|class| !class.is_empty()),
        ),
    }
}

/// Medical-suffix words across indications, pharmacology and description.
fn seo_keywords(label: &RawLabelRecord) -> Vec<String> {
    let Some(regex) = medical_suffix_regex() else {
        return Vec::new();
    };

    let text = [
        label.indications_and_usage.as_str(),
        label.clinical_pharmacology.as_str(),
        label.description.as_str(),
    ]
    .join(" ")
    .to_lowercase();

    dedupe(regex.find_iter(&text).map(|found| found.as_str().to_string()))
}

fn patient_friendly_terms(indications: &str) -> Vec<String> {
    let text = indications.to_lowercase();
    PATIENT_FRIENDLY_TERMS
        .iter()
        .filter(|(medical, _)| text.contains(medical))
        .map(|(_, lay)| (*lay).to_string())
        .collect()
}

fn competitive_advantages(label: &RawLabelRecord) -> Vec<String> {
    let text = format!("{}{}", label.clinical_studies, label.clinical_pharmacology);
    advantage_regexes()
        .iter()
        .filter(|(_, regex)| regex.is_match(&text))
        .map(|(advantage, _)| (*advantage).to_string())
        .collect()
}

/// Drops repeats while keeping first-seen order.
pub(crate) fn dedupe<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn label() -> RawLabelRecord {
        serde_json::from_value(json!({
            "indications_and_usage": [
                "Indicated for adults with metastatic carcinoma and hypertension.",
                "Also for hyperlipidemia with nephropathy."
            ],
            "clinical_pharmacology": "Reduces carcinoma growth; once daily dosing.",
            "description": "Film-coated tablet.",
            "clinical_studies": "Patients showed improved survival and the drug was well tolerated.",
            "openfda": { "pharm_class_epc": ["Kinase Inhibitor [EPC]", "Kinase Inhibitor [EPC]"] }
        }))
        .expect("label deserializes")
    }

    #[test]
    fn seo_keywords_are_suffix_matches_in_first_seen_order() {
        let signals = extract_label(&label());
        assert_eq!(
            signals.seo_keywords,
            vec!["carcinoma", "hyperlipidemia", "nephropathy"]
        );
    }

    #[test]
    fn patient_terms_follow_table_order() {
        let signals = extract_label(&label());
        assert_eq!(
            signals.patient_friendly_terms,
            vec!["high blood pressure", "high cholesterol", "spread"]
        );
    }

    #[test]
    fn advantages_cover_superiority_dosing_and_safety() {
        let signals = extract_label(&label());
        assert_eq!(
            signals.competitive_advantages,
            vec![
                "demonstrated superiority",
                "convenient dosing",
                "favorable safety profile"
            ]
        );
        assert_eq!(signals.pharmacologic_classes, vec!["Kinase Inhibitor [EPC]"]);
    }

    #[test]
    fn empty_label_extracts_nothing() {
        let signals = extract_label(&RawLabelRecord::default());
        assert_eq!(signals, LabelSignals::default());
    }
}
