//! End-to-end seeding tests.
//!
//! These run against a real database and verify the contracts a unit test
//! cannot: reset idempotence, phase behavior, and the article graph the
//! full pipeline commits.
//!
//! Requirements:
//! 1. A PostgreSQL database with the newsroom schema applied
//! 2. DATABASE_URL environment variable set
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p seed-data --test seed_integration`
//!
//! Without DATABASE_URL the tests skip cleanly. The scenarios share one
//! database and reset it between phases, so they run as a single test
//! function rather than racing each other in parallel.

use seed_data::config::{SeedOptions, SeedPhase};
use seed_data::db;
use seed_data::events::EventSink;
use seed_data::pipeline;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("count({table}) failed: {e}"))
}

const CONTENT_TABLES: &[&str] = &[
    "subscription_tiers",
    "industries",
    "clients",
    "authors",
    "categories",
    "tags",
    "articles",
    "article_tags",
    "media",
    "comments",
    "article_views",
    "faqs",
    "subscribers",
];

#[tokio::test]
async fn test_seed_scenarios_end_to_end() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let sink = EventSink::disabled();

    // Reset is idempotent: running it twice leaves every table empty and
    // the second pass deletes nothing.
    db::reset(&pool, &sink).await.expect("first reset");
    db::reset(&pool, &sink).await.expect("second reset");
    for table in CONTENT_TABLES {
        assert_eq!(count(&pool, table).await, 0, "{table} not empty after reset");
    }

    // Clients-only phase: exactly the requested clients, nothing else.
    let summary = pipeline::run(
        &pool,
        SeedOptions {
            phase: SeedPhase::ClientsOnly,
            client_count: Some(5),
            reset: true,
            rng_seed: Some(42),
            ..SeedOptions::default()
        },
        sink.clone(),
    )
    .await
    .expect("clients-only run");

    assert_eq!(summary.clients, 5);
    assert_eq!(summary.articles.total, 0);
    assert_eq!(count(&pool, "clients").await, 5);
    assert_eq!(count(&pool, "articles").await, 0);
    assert_eq!(count(&pool, "authors").await, 1);

    // Full phase on top of the existing clients: reset is requested but
    // must be skipped, and the five clients must be reused, not recreated.
    let summary = pipeline::run(
        &pool,
        SeedOptions {
            article_total: 10,
            reset: true,
            rng_seed: Some(7),
            ..SeedOptions::default()
        },
        sink.clone(),
    )
    .await
    .expect("full run");

    assert_eq!(summary.clients, 5);
    assert_eq!(count(&pool, "clients").await, 5);
    assert_eq!(summary.articles.total, 10);
    assert_eq!(summary.articles.published, 6);
    assert_eq!(summary.articles.draft, 4);
    assert_eq!(count(&pool, "articles").await, 10);

    // Published articles carry a timestamp inside the last 12 months;
    // drafts carry none.
    let bad_published: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM articles
        WHERE status = 'published'
          AND (published_at IS NULL
               OR published_at > NOW()
               OR published_at < NOW() - INTERVAL '366 days')
        "#,
    )
    .fetch_one(&pool)
    .await
    .expect("published window query");
    assert_eq!(bad_published, 0);

    let bad_drafts: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE status = 'draft' AND published_at IS NOT NULL")
            .fetch_one(&pool)
            .await
            .expect("draft query");
    assert_eq!(bad_drafts, 0);

    // No forward references: every article points at rows that exist.
    let orphans: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM articles a
        LEFT JOIN clients c ON c.id = a.client_id
        LEFT JOIN categories cat ON cat.id = a.category_id
        LEFT JOIN authors au ON au.id = a.author_id
        WHERE c.id IS NULL OR cat.id IS NULL OR au.id IS NULL
        "#,
    )
    .fetch_one(&pool)
    .await
    .expect("orphan query");
    assert_eq!(orphans, 0);

    // The singleton author never multiplies.
    assert_eq!(count(&pool, "authors").await, 1);

    // Re-running without reset upserts by slug instead of duplicating.
    let rerun = pipeline::run(
        &pool,
        SeedOptions {
            article_total: 10,
            reset: false,
            rng_seed: Some(7),
            ..SeedOptions::default()
        },
        sink.clone(),
    )
    .await
    .expect("rerun");

    assert_eq!(rerun.articles.total, 10);
    assert_eq!(count(&pool, "articles").await, 10);
    assert_eq!(count(&pool, "authors").await, 1);

    // Full cleanup leaves the store empty again.
    db::reset(&pool, &sink).await.expect("final reset");
    for table in CONTENT_TABLES {
        assert_eq!(count(&pool, table).await, 0, "{table} not empty after final reset");
    }
}
