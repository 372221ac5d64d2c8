use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::candidate::Candidate;
use crate::services::candidate_service::SubmitOutcome;

/// Body of a 200 answer: the stored candidate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    #[schema(example = 200)]
    pub status_code: u16,
    #[schema(example = "New candidate created successfully.")]
    pub message: String,
    pub data: Candidate,
}

/// Body of a 400 or 500 answer. `errors` is only present for 400.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[schema(example = 400)]
    pub status_code: u16,
    #[schema(example = "Invalid candidate information")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl IntoResponse for SubmitOutcome {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message().to_string();

        match self {
            SubmitOutcome::Created { candidate } | SubmitOutcome::Updated { candidate } => (
                status,
                Json(CandidateResponse {
                    status_code: status.as_u16(),
                    message,
                    data: candidate,
                }),
            )
                .into_response(),
            SubmitOutcome::ValidationFailed { messages } => (
                status,
                Json(ErrorResponse {
                    status_code: status.as_u16(),
                    message,
                    errors: Some(messages),
                }),
            )
                .into_response(),
            SubmitOutcome::StorageFailed { .. } => (
                status,
                Json(ErrorResponse {
                    status_code: status.as_u16(),
                    message,
                    errors: None,
                }),
            )
                .into_response(),
        }
    }
}
