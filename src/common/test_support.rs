// Shared fixtures for tests that need a live store

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use super::migrations::run_migrations;

/// In-memory database with the full schema applied
///
/// A single connection that never expires: every connection to
/// `sqlite::memory:` is its own database.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool, false).await.unwrap();
    pool
}

pub async fn insert_company(pool: &SqlitePool, code: &str, name: &str) {
    sqlx::query("INSERT INTO companies (code, name, description) VALUES (?, ?, ?)")
        .bind(code)
        .bind(name)
        .bind(format!("{} description", name))
        .execute(pool)
        .await
        .unwrap();
}

/// Returns the generated invoice id
pub async fn insert_invoice(pool: &SqlitePool, comp_code: &str, amt: f64) -> i64 {
    sqlx::query_scalar("INSERT INTO invoices (comp_code, amt) VALUES (?, ?) RETURNING id")
        .bind(comp_code)
        .bind(amt)
        .fetch_one(pool)
        .await
        .unwrap()
}
