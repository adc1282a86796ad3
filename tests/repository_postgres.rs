//! PostgreSQL repository integration tests.
//!
//! These run against a real database and are skipped when `DATABASE_URL` is
//! not set. Each test uses its own URL namespace and cleans up after itself.

use serial_test::serial;
use sqlx::PgPool;
use std::sync::Arc;

use link_shortener::domain::entities::UrlPair;
use link_shortener::domain::repositories::{
    ORIGINAL_URL_KEY, PutOutcome, SHORTED_URL_KEY, StoreError, UrlRepository,
};
use link_shortener::infrastructure::persistence::PgUrlRepository;

async fn try_pool() -> Option<PgPool> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping postgres repository test");
            return None;
        }
    };
    let pool = PgPool::connect(&url).await.expect("connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    Some(pool)
}

async fn cleanup(pool: &PgPool, namespace: &str) {
    sqlx::query("DELETE FROM urls WHERE original_url LIKE $1")
        .bind(format!("https://{namespace}.example/%"))
        .execute(pool)
        .await
        .unwrap();
}

fn pair(namespace: &str, path: &str, code: &str) -> UrlPair {
    UrlPair::new(format!("https://{namespace}.example/{path}"), code)
}

#[tokio::test]
#[serial]
async fn test_put_and_get_round_trip() {
    let Some(pool) = try_pool().await else { return };
    cleanup(&pool, "rt").await;
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    let outcome = repo.put_if_absent(pair("rt", "x", "it-rt-0001")).await.unwrap();
    assert!(matches!(outcome, PutOutcome::Inserted(_)));

    let by_code = repo.get_by_url(SHORTED_URL_KEY, "it-rt-0001").await.unwrap();
    assert_eq!(by_code.original, "https://rt.example/x");

    let by_original = repo
        .get_by_url(ORIGINAL_URL_KEY, "https://rt.example/x")
        .await
        .unwrap();
    assert_eq!(by_original.short_code, "it-rt-0001");

    cleanup(&pool, "rt").await;
}

#[tokio::test]
#[serial]
async fn test_put_existing_original_returns_stored_pair() {
    let Some(pool) = try_pool().await else { return };
    cleanup(&pool, "orig").await;
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    repo.put_if_absent(pair("orig", "x", "it-orig-001")).await.unwrap();

    let outcome = repo
        .put_if_absent(pair("orig", "x", "it-orig-999"))
        .await
        .unwrap();

    match outcome {
        PutOutcome::OriginalExists(stored) => {
            assert_eq!(stored.short_code, "it-orig-001");
            assert_eq!(stored.original, "https://orig.example/x");
        }
        other => panic!("expected OriginalExists, got {other:?}"),
    }

    // The losing code was not persisted.
    assert!(matches!(
        repo.get_by_url(SHORTED_URL_KEY, "it-orig-999").await,
        Err(StoreError::NotFound)
    ));

    cleanup(&pool, "orig").await;
}

#[tokio::test]
#[serial]
async fn test_put_claimed_short_code_is_rejected() {
    let Some(pool) = try_pool().await else { return };
    cleanup(&pool, "code").await;
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    repo.put_if_absent(pair("code", "x", "it-code-001")).await.unwrap();

    let outcome = repo
        .put_if_absent(pair("code", "y", "it-code-001"))
        .await
        .unwrap();
    assert_eq!(outcome, PutOutcome::ShortCodeExists);

    assert!(matches!(
        repo.get_by_url(ORIGINAL_URL_KEY, "https://code.example/y").await,
        Err(StoreError::NotFound)
    ));

    cleanup(&pool, "code").await;
}

#[tokio::test]
#[serial]
async fn test_get_unknown_key_kind() {
    let Some(pool) = try_pool().await else { return };
    let repo = PgUrlRepository::new(Arc::new(pool));

    let err = repo.get_by_url("id", "whatever").await.unwrap_err();
    assert!(matches!(err, StoreError::UnknownUrlKind(k) if k == "id"));
}

#[tokio::test]
#[serial]
async fn test_constraint_map_matches_schema() {
    let Some(pool) = try_pool().await else { return };
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.verify_constraints().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_concurrent_claims_of_same_code_insert_once() {
    let Some(pool) = try_pool().await else { return };
    cleanup(&pool, "conc").await;
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.put_if_absent(UrlPair::new(
                format!("https://conc.example/{i}"),
                "it-conc-001",
            ))
            .await
            .unwrap()
        }));
    }

    let mut inserted = 0;
    for handle in handles {
        if matches!(handle.await.unwrap(), PutOutcome::Inserted(_)) {
            inserted += 1;
        }
    }
    assert_eq!(inserted, 1);

    cleanup(&pool, "conc").await;
}
