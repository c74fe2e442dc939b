use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use pharma_intel::workflows::scoring::{ContentArtifact, GeoOptimization};
use pharma_intel::workflows::submissions::{
    intelligence_router, IntelligenceRepository, IntelligenceService, RepositoryError,
    ResearchSubmission, SubmissionId, SubmissionRecord,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Default)]
struct SharedRepository {
    records: Mutex<BTreeMap<SubmissionId, SubmissionRecord>>,
}

impl IntelligenceRepository for SharedRepository {
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
        Ok(self
            .records
            .lock()
            .expect("lock")
            .values()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}

fn payload(product: &str) -> Value {
    json!({
        "context": {
            "product_name": product,
            "generic_name": "oravimab",
            "indication": "atopic dermatitis",
            "target_markets": ["USA", "UK"]
        },
        "trials": [
            {
                "protocolSection": {
                    "identificationModule": { "nctId": "NCT06200001", "briefTitle": "Oravimab in Moderate Atopic Dermatitis" },
                    "statusModule": { "overallStatus": "RECRUITING" },
                    "designModule": { "phases": ["PHASE3"], "enrollmentInfo": { "count": 500 } },
                    "contactsLocationsModule": {
                        "locations": [
                            { "city": "London", "country": "United Kingdom" },
                            { "city": "Chicago", "country": "United States" }
                        ]
                    }
                }
            }
        ],
        "competitors": [
            { "term": "Interleukin-13 Antagonist [EPC]", "count": 18 }
        ]
    })
}

fn artifact() -> ContentArtifact {
    ContentArtifact {
        title: "Oravimab".to_string(),
        h1: Some("How does oravimab work?".to_string()),
        body: "Living with eczema? You may qualify for NCT06200001.".to_string(),
        geo: GeoOptimization {
            citations: vec!["British Journal of Dermatology".to_string()],
            ..GeoOptimization::default()
        },
        ..ContentArtifact::default()
    }
}

fn submission(product: &str) -> ResearchSubmission {
    serde_json::from_value(payload(product)).expect("payload parses")
}

#[test]
fn submit_score_and_fetch_round_trip_through_service() {
    let repository = Arc::new(SharedRepository::default());
    let service = IntelligenceService::new(repository.clone());

    let record = service.submit(submission("Dermavia")).expect("submission stored");
    assert_eq!(record.summary.development_stage.label(), "Phase 3");
    assert_eq!(record.summary.market_position.label(), "early-market");
    assert!(record.score.is_none());

    let breakdown = service.score(&record.id, &artifact()).expect("artifact scored");
    assert!(breakdown.total_score > 0);

    let stored = service.get(&record.id).expect("record fetched");
    assert_eq!(stored.score.as_ref(), Some(&breakdown));
    assert!(stored.scored_at.is_some());
    assert_eq!(stored.view().percentage, Some(breakdown.percentage));
}

#[test]
fn recent_lists_newest_first_and_honours_limit() {
    let service = IntelligenceService::new(Arc::new(SharedRepository::default()));
    for product in ["Alpha", "Beta", "Gamma"] {
        service.submit(submission(product)).expect("submission stored");
    }

    let recent = service.recent(2).expect("recent listed");
    let products: Vec<&str> = recent
        .iter()
        .map(|record| record.context.product_name.as_str())
        .collect();
    assert_eq!(products, vec!["Gamma", "Beta"]);
}

#[test]
fn scoring_unknown_submission_is_not_found() {
    let service = IntelligenceService::new(Arc::new(SharedRepository::default()));
    let error = service
        .score(&SubmissionId("intel-999999".to_string()), &artifact())
        .expect_err("unknown id rejected");
    assert!(error.is_not_found());
}

#[tokio::test]
async fn router_submits_then_scores_over_http() {
    let service = Arc::new(IntelligenceService::new(Arc::new(SharedRepository::default())));
    let router = intelligence_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/intelligence/submissions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload("Dermavia").to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let created = read_json(response).await;
    let id = created["id"].as_str().expect("id present").to_string();

    let response = router
        .clone()
        .oneshot(
            Request::post(format!("/api/v1/intelligence/submissions/{id}/score"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_string(&artifact()).expect("artifact serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let scored = read_json(response).await;
    assert_eq!(scored["max_score"], json!(100));

    let response = router
        .oneshot(
            Request::get("/api/v1/intelligence/submissions?limit=5")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let listing = read_json(response).await;
    assert_eq!(listing[0]["id"], json!(id));
    assert_eq!(listing[0]["percentage"], scored["percentage"]);
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
