use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{IntelligenceReport, ResearchSubmission, SubmissionId, SubmissionRecord};
use super::repository::{IntelligenceRepository, RepositoryError};
use crate::workflows::scoring::{ContentArtifact, ScoreBreakdown, ScoringEngine};

/// Service composing extraction, aggregation, and scoring over a repository.
pub struct IntelligenceService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
    default_markets: Vec<String>,
    sequence: AtomicU64,
}

impl<R> IntelligenceService<R>
where
    R: IntelligenceRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_engine(repository, ScoringEngine::default())
    }

    pub fn with_engine(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
            default_markets: Vec::new(),
            sequence: AtomicU64::new(1),
        }
    }

    /// Markets assumed for submissions that name none.
    pub fn with_default_markets(mut self, markets: Vec<String>) -> Self {
        self.default_markets = markets;
        self
    }

    fn next_submission_id(&self) -> SubmissionId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        SubmissionId(format!("intel-{id:06}"))
    }

    /// Derive intelligence from the submitted records and store it.
    pub fn submit(
        &self,
        mut submission: ResearchSubmission,
    ) -> Result<SubmissionRecord, SubmissionServiceError> {
        if submission.context.target_markets.is_empty() {
            submission.context.target_markets = self.default_markets.clone();
        }
        let IntelligenceReport {
            context,
            summary,
            strategy,
        } = IntelligenceReport::from_submission(submission);

        let record = SubmissionRecord {
            id: self.next_submission_id(),
            context,
            summary,
            strategy,
            score: None,
            created_at: Utc::now(),
            scored_at: None,
        };

        let stored = self.repository.insert(record).map_err(|error| {
            warn!(%error, "failed to store intelligence submission");
            error
        })?;

        info!(
            submission_id = %stored.id,
            stage = stored.summary.development_stage.label(),
            total_trials = stored.summary.total_trials,
            "stored intelligence submission"
        );
        Ok(stored)
    }

    /// Score an artifact against a stored summary and keep the latest breakdown.
    pub fn score(
        &self,
        id: &SubmissionId,
        artifact: &ContentArtifact,
    ) -> Result<ScoreBreakdown, SubmissionServiceError> {
        let mut record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;

        let breakdown = self.engine.score(&record.summary, artifact);
        record.score = Some(breakdown.clone());
        record.scored_at = Some(Utc::now());

        self.repository.update(record).map_err(|error| {
            warn!(submission_id = %id, %error, "failed to store content score");
            error
        })?;

        info!(
            submission_id = %id,
            percentage = breakdown.percentage,
            "scored content artifact"
        );
        Ok(breakdown)
    }

    /// Fetch a stored submission for API responses.
    pub fn get(&self, id: &SubmissionId) -> Result<SubmissionRecord, SubmissionServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, SubmissionServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the intelligence service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SubmissionServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound))
    }
}
