use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::workflows::intelligence::{IntelligenceSummary, ResearchContext, SeoStrategy};
use crate::workflows::scoring::ScoreBreakdown;
use crate::workflows::signals::{self, RawRecordSet};

/// Identifier wrapper for stored research submissions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context plus whatever raw records the orchestrator managed to fetch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResearchSubmission {
    #[serde(default)]
    pub context: ResearchContext,
    #[serde(flatten)]
    pub records: RawRecordSet,
}

/// Intelligence derived from one submission before it is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntelligenceReport {
    pub context: ResearchContext,
    pub summary: IntelligenceSummary,
    pub strategy: SeoStrategy,
}

impl IntelligenceReport {
    /// Extract, aggregate, and derive the SEO strategy in one pass.
    pub fn from_submission(submission: ResearchSubmission) -> Self {
        let ResearchSubmission { context, records } = submission;
        let extracted = signals::extract(&records, &context.indication);
        let summary = IntelligenceSummary::build(&context, &extracted);
        let strategy = SeoStrategy::recommend(&summary, &context);

        Self {
            context,
            summary,
            strategy,
        }
    }
}

/// Stored intelligence for one submission, plus its latest score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub context: ResearchContext,
    pub summary: IntelligenceSummary,
    pub strategy: SeoStrategy,
    pub score: Option<ScoreBreakdown>,
    pub created_at: DateTime<Utc>,
    pub scored_at: Option<DateTime<Utc>>,
}

impl SubmissionRecord {
    pub fn view(&self) -> SubmissionView {
        SubmissionView {
            id: self.id.clone(),
            product_name: self.context.product_name.clone(),
            indication: self.context.indication.clone(),
            development_stage: self.summary.development_stage.label(),
            market_position: self.summary.market_position.label(),
            total_trials: self.summary.total_trials,
            percentage: self.score.as_ref().map(|score| score.percentage),
        }
    }
}

/// Compact listing entry for recent submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionView {
    pub id: SubmissionId,
    pub product_name: String,
    pub indication: String,
    pub development_stage: &'static str,
    pub market_position: &'static str,
    pub total_trials: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
}
