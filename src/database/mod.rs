pub mod candidate_store;
pub mod memory_store;
pub mod pool;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use candidate_store::{CandidateStore, PgCandidateStore};
use memory_store::MemoryCandidateStore;

/// Picks the persistence backend from configuration: PostgreSQL when a
/// `DATABASE_URL` is set, otherwise an in-process map.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn CandidateStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = pool::create_pool(url, config.database_max_connections).await?;
            pool::run_migrations(&pool).await?;
            tracing::info!("Using PostgreSQL candidate store");
            Ok(Arc::new(PgCandidateStore::new(pool, config.email_match)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, candidates are kept in memory only");
            Ok(Arc::new(MemoryCandidateStore::new(config.email_match)))
        }
    }
}
