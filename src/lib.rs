pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use crate::database::candidate_store::CandidateStore;
use crate::services::candidate_service::CandidateService;

#[derive(Clone)]
pub struct AppState {
    pub candidate_service: CandidateService,
}

impl AppState {
    pub fn new(store: Arc<dyn CandidateStore>, request_timeout: Option<Duration>) -> Self {
        let candidate_service = CandidateService::new(store).with_deadline(request_timeout);

        Self { candidate_service }
    }
}
