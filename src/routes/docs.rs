use axum::Json;
use utoipa::OpenApi;

use crate::dto::candidate_dto::{CandidateResponse, ErrorResponse};
use crate::models::candidate::Candidate;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Candidates API",
        version = "v1",
        description = "A simple API to manage candidates"
    ),
    paths(crate::routes::candidate_routes::submit_candidate),
    components(schemas(Candidate, CandidateResponse, ErrorResponse))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
