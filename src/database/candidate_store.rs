use async_trait::async_trait;
use sqlx::PgPool;

use crate::config::EmailMatch;
use crate::error::StoreError;
use crate::models::candidate::Candidate;

/// Persistence collaborator for candidates, keyed by email.
///
/// `insert` must fail with [`StoreError::Conflict`] when a record with the
/// same key already exists, and `replace` with [`StoreError::NotFound`] when
/// none does. Each call is a single write, so dropping the future never leaves
/// a half-written record behind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError>;

    async fn insert(&self, candidate: &Candidate) -> Result<(), StoreError>;

    async fn replace(&self, candidate: &Candidate) -> Result<(), StoreError>;
}

const SELECT_COLUMNS: &str = r#"
    SELECT first_name, last_name, phone_number, email, available_start_time,
           available_end_time, linkedin_profile_url, github_profile_url, comment
    FROM candidates
"#;

#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
    email_match: EmailMatch,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool, email_match: EmailMatch) -> Self {
        Self { pool, email_match }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Candidate>, StoreError> {
        let sql = format!("{} WHERE email_key = $1", SELECT_COLUMNS);
        let candidate = sqlx::query_as::<_, Candidate>(&sql)
            .bind(self.email_match.key(email))
            .fetch_optional(&self.pool)
            .await?;
        Ok(candidate)
    }

    async fn insert(&self, candidate: &Candidate) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO candidates (
                first_name, last_name, phone_number, email, available_start_time,
                available_end_time, linkedin_profile_url, github_profile_url, comment,
                email_key
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.phone_number)
        .bind(&candidate.email)
        .bind(&candidate.available_start_time)
        .bind(&candidate.available_end_time)
        .bind(&candidate.linkedin_profile_url)
        .bind(&candidate.github_profile_url)
        .bind(&candidate.comment)
        .bind(self.email_match.key(&candidate.email))
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db) = &err {
                if db.is_unique_violation() {
                    return StoreError::Conflict(candidate.email.clone());
                }
            }
            StoreError::from(err)
        })?;
        Ok(())
    }

    async fn replace(&self, candidate: &Candidate) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE candidates
            SET first_name = $1, last_name = $2, phone_number = $3, email = $4,
                available_start_time = $5, available_end_time = $6,
                linkedin_profile_url = $7, github_profile_url = $8, comment = $9
            WHERE email_key = $10
            "#,
        )
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.phone_number)
        .bind(&candidate.email)
        .bind(&candidate.available_start_time)
        .bind(&candidate.available_end_time)
        .bind(&candidate.linkedin_profile_url)
        .bind(&candidate.github_profile_url)
        .bind(&candidate.comment)
        .bind(self.email_match.key(&candidate.email))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(candidate.email.clone()));
        }
        Ok(())
    }
}
