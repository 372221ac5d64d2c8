use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::EmailMatch;
use crate::database::candidate_store::CandidateStore;
use crate::error::StoreError;
use crate::models::candidate::Candidate;

/// Process-local store used when no database is configured.
#[derive(Clone, Default)]
pub struct MemoryCandidateStore {
    records: Arc<RwLock<HashMap<String, Candidate>>>,
    email_match: EmailMatch,
}

impl MemoryCandidateStore {
    pub fn new(email_match: EmailMatch) -> Self {
        Self {
            records: Arc::default(),
            email_match,
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError> {
        let key = self.email_match.key(email);
        Ok(self.records.read().await.get(&key).cloned())
    }

    async fn insert(&self, candidate: &Candidate) -> Result<(), StoreError> {
        let key = self.email_match.key(&candidate.email);
        let mut records = self.records.write().await;
        if records.contains_key(&key) {
            return Err(StoreError::Conflict(candidate.email.clone()));
        }
        records.insert(key, candidate.clone());
        Ok(())
    }

    async fn replace(&self, candidate: &Candidate) -> Result<(), StoreError> {
        let key = self.email_match.key(&candidate.email);
        match self.records.write().await.get_mut(&key) {
            Some(existing) => {
                *existing = candidate.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(candidate.email.clone())),
        }
    }
}
