use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::scoring::{ContentArtifact, GeoOptimization};
use crate::workflows::submissions::domain::{ResearchSubmission, SubmissionId, SubmissionRecord};
use crate::workflows::submissions::repository::{IntelligenceRepository, RepositoryError};
use crate::workflows::submissions::{intelligence_router, IntelligenceService};

pub(super) fn submission_json() -> Value {
    json!({
        "context": {
            "product_name": "Xelora",
            "generic_name": "velitinib",
            "indication": "lung cancer",
            "target_markets": ["USA", "EU"],
            "key_biomarkers": ["KRAS G12C"],
            "primary_endpoints": []
        },
        "trials": [
            {
                "protocolSection": {
                    "identificationModule": {
                        "nctId": "NCT05012345",
                        "briefTitle": "First-in-Human Study of Velitinib in KRAS G12C Tumors"
                    },
                    "statusModule": { "overallStatus": "RECRUITING" },
                    "designModule": {
                        "phases": ["PHASE1"],
                        "designInfo": { "allocation": "NON_RANDOMIZED" },
                        "enrollmentInfo": { "count": 60 }
                    },
                    "contactsLocationsModule": {
                        "locations": [
                            { "facility": "MD Anderson", "city": "Houston", "country": "United States" },
                            { "facility": "Charite", "city": "Berlin", "country": "Germany" }
                        ]
                    }
                }
            },
            {
                "protocolSection": {
                    "identificationModule": { "nctId": "NCT05099999", "briefTitle": "Velitinib vs Docetaxel" },
                    "statusModule": { "overallStatus": "COMPLETED" },
                    "designModule": {
                        "phases": ["PHASE2"],
                        "enrollmentInfo": { "count": 140 }
                    },
                    "contactsLocationsModule": {
                        "locations": [{ "city": "Tokyo", "country": "Japan" }]
                    }
                }
            }
        ],
        "competitors": [
            { "term": "Kinase Inhibitor [EPC]", "count": 42 },
            { "term": "Lung Cancer Antibody [EPC]", "count": 9 },
            { "term": "Rare Class [EPC]", "count": 2 }
        ]
    })
}

pub(super) fn submission() -> ResearchSubmission {
    serde_json::from_value(submission_json()).expect("submission fixture parses")
}

pub(super) fn artifact() -> ContentArtifact {
    ContentArtifact {
        title: "Velitinib in lung cancer".to_string(),
        h1: Some("What is velitinib?".to_string()),
        h2: vec!["Who can enroll?".to_string()],
        body: "Could you qualify? Ask your oncologist.".to_string(),
        geo: GeoOptimization {
            ai_summary: Some("Velitinib is being studied in NCT05012345.".to_string()),
            citations: vec!["Journal of Clinical Oncology".to_string()],
            ..GeoOptimization::default()
        },
        ..ContentArtifact::default()
    }
}

pub(super) fn build_service() -> (
    Arc<IntelligenceService<MemoryRepository>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(IntelligenceService::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(
    service: Arc<IntelligenceService<MemoryRepository>>,
) -> axum::Router {
    intelligence_router(service)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<BTreeMap<SubmissionId, SubmissionRecord>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &SubmissionId) -> Option<SubmissionRecord> {
        self.records.lock().expect("lock").get(id).cloned()
    }
}

impl IntelligenceRepository for MemoryRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut records = self.records.lock().expect("lock");
        if records.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SubmissionRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("lock");
        match records.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let records = self.records.lock().expect("lock");
        Ok(records.values().rev().take(limit).cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl IntelligenceRepository for UnavailableRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SubmissionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("body is json")
}
