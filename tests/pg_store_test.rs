use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use candidate_intake::{
    config::EmailMatch,
    database::{
        candidate_store::{CandidateStore, PgCandidateStore},
        pool::{create_pool, run_migrations},
    },
    error::StoreError,
    models::candidate::Candidate,
};
use sqlx::PgPool;

async fn setup_pool() -> Option<PgPool> {
    dotenvy::dotenv().ok();
    let Ok(database_url) = env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL store test");
        return None;
    };
    let pool = create_pool(&database_url, 5).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    Some(pool)
}

fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}_{}_{}@example.com", tag, std::process::id(), nanos)
}

fn candidate(email: &str, comment: &str) -> Candidate {
    Candidate {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: email.into(),
        comment: comment.into(),
        ..Default::default()
    }
}

async fn cleanup(pool: &PgPool, email: &str) {
    sqlx::query("DELETE FROM candidates WHERE email_key = lower($1)")
        .bind(email)
        .execute(pool)
        .await
        .expect("cleanup");
}

#[tokio::test]
async fn insert_of_existing_key_is_a_conflict() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let store = PgCandidateStore::new(pool.clone(), EmailMatch::Exact);
    let email = unique_email("conflict");

    store.insert(&candidate(&email, "first")).await.expect("insert");
    let err = store
        .insert(&candidate(&email, "second"))
        .await
        .expect_err("duplicate insert");
    assert!(matches!(err, StoreError::Conflict(_)));

    let stored = store.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(stored.comment, "first");

    cleanup(&pool, &email).await;
}

#[tokio::test]
async fn case_insensitive_keys_allow_one_row_per_address() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let store = PgCandidateStore::new(pool.clone(), EmailMatch::CaseInsensitive);
    let email = unique_email("casefold");
    let shouted = email.to_uppercase();

    store.insert(&candidate(&email, "first")).await.expect("insert");
    let err = store
        .insert(&candidate(&shouted, "second"))
        .await
        .expect_err("differently cased insert");
    assert!(matches!(err, StoreError::Conflict(_)));

    store
        .replace(&candidate(&shouted, "replaced"))
        .await
        .expect("replace");
    let stored = store.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(stored.email, shouted);
    assert_eq!(stored.comment, "replaced");

    let rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM candidates WHERE email_key = lower($1)")
            .bind(&email)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(rows, 1);

    cleanup(&pool, &email).await;
}

#[tokio::test]
async fn replace_of_unknown_key_is_not_found() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let store = PgCandidateStore::new(pool, EmailMatch::Exact);

    let err = store
        .replace(&candidate(&unique_email("missing"), "x"))
        .await
        .expect_err("replace without row");
    assert!(matches!(err, StoreError::NotFound(_)));
}
