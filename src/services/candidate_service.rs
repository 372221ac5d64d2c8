use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;

use crate::database::candidate_store::CandidateStore;
use crate::error::StoreError;
use crate::models::candidate::Candidate;
use crate::utils::validation;

pub const CREATED_MESSAGE: &str = "New candidate created successfully.";
pub const UPDATED_MESSAGE: &str = "Candidate updated successfully.";
pub const INVALID_MESSAGE: &str = "Invalid candidate information";
pub const FAILURE_MESSAGE: &str = "An error occurred while processing your request";

/// Every way a submission can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    ValidationFailed { messages: Vec<String> },
    Created { candidate: Candidate },
    Updated { candidate: Candidate },
    StorageFailed { reason: String },
}

impl SubmitOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmitOutcome::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            SubmitOutcome::Created { .. } | SubmitOutcome::Updated { .. } => StatusCode::OK,
            SubmitOutcome::StorageFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::ValidationFailed { .. } => INVALID_MESSAGE,
            SubmitOutcome::Created { .. } => CREATED_MESSAGE,
            SubmitOutcome::Updated { .. } => UPDATED_MESSAGE,
            SubmitOutcome::StorageFailed { .. } => FAILURE_MESSAGE,
        }
    }
}

/// Validates `candidate` and upserts it by email.
///
/// Storage is not touched when validation fails. The existence check and the
/// write are two separate store calls; if another submission for the same new
/// email wins the race, the store reports a conflict and this returns
/// `StorageFailed`.
pub async fn submit(candidate: Candidate, store: &dyn CandidateStore) -> SubmitOutcome {
    let messages = validation::validate(&candidate);
    if !messages.is_empty() {
        tracing::error!("{}: {}", INVALID_MESSAGE, messages.join(", "));
        return SubmitOutcome::ValidationFailed { messages };
    }

    match upsert(&candidate, store).await {
        Ok(true) => {
            tracing::info!(
                "Candidate {} with email {} updated successfully",
                candidate.full_name(),
                candidate.email
            );
            SubmitOutcome::Updated { candidate }
        }
        Ok(false) => {
            tracing::info!(
                "New candidate {} with email {} created successfully",
                candidate.full_name(),
                candidate.email
            );
            SubmitOutcome::Created { candidate }
        }
        Err(err) => {
            tracing::error!(error = %err, "Error creating or updating candidate");
            SubmitOutcome::StorageFailed {
                reason: err.to_string(),
            }
        }
    }
}

/// Returns whether an existing record was replaced.
async fn upsert(candidate: &Candidate, store: &dyn CandidateStore) -> Result<bool, StoreError> {
    if store.find_by_email(&candidate.email).await?.is_some() {
        store.replace(candidate).await?;
        Ok(true)
    } else {
        store.insert(candidate).await?;
        Ok(false)
    }
}

#[derive(Clone)]
pub struct CandidateService {
    store: Arc<dyn CandidateStore>,
    deadline: Option<Duration>,
}

impl CandidateService {
    pub fn new(store: Arc<dyn CandidateStore>) -> Self {
        Self {
            store,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// [`submit`] against the configured store, abandoned once the deadline
    /// passes.
    pub async fn submit(&self, candidate: Candidate) -> SubmitOutcome {
        let Some(deadline) = self.deadline else {
            return submit(candidate, self.store.as_ref()).await;
        };

        let email = candidate.email.clone();
        match tokio::time::timeout(deadline, submit(candidate, self.store.as_ref())).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::error!(%email, ?deadline, "Candidate submission timed out");
                SubmitOutcome::StorageFailed {
                    reason: "deadline exceeded".to_string(),
                }
            }
        }
    }
}
