use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    dto::candidate_dto::ErrorResponse,
    models::candidate::Candidate,
    services::candidate_service::INVALID_MESSAGE,
    AppState,
};

/// Adds a new candidate, or replaces the stored one with the same email.
#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = Candidate,
    responses(
        (status = 200, description = "Candidate created or updated", body = crate::dto::candidate_dto::CandidateResponse),
        (status = 400, description = "Invalid candidate information", body = ErrorResponse),
        (status = 500, description = "An error occurred while processing the request", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn submit_candidate(
    State(state): State<AppState>,
    payload: Result<Json<Candidate>, JsonRejection>,
) -> Response {
    let candidate = match payload {
        Ok(Json(candidate)) => candidate,
        Err(rejection) => {
            tracing::warn!("Rejected candidate payload: {}", rejection.body_text());
            let body = ErrorResponse {
                status_code: StatusCode::BAD_REQUEST.as_u16(),
                message: INVALID_MESSAGE.to_string(),
                errors: Some(vec![rejection.body_text()]),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    state.candidate_service.submit(candidate).await.into_response()
}
