//! Persistence boundary around the pure engine: accepts fetched raw records,
//! stores the derived intelligence, and scores generated artifacts against it.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    IntelligenceReport, ResearchSubmission, SubmissionId, SubmissionRecord, SubmissionView,
};
pub use repository::{IntelligenceRepository, RepositoryError};
pub use router::intelligence_router;
pub use service::{IntelligenceService, SubmissionServiceError};
