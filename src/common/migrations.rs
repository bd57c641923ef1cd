// src/common/migrations.rs
//! Database schema management

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Create the companies and invoices tables if they do not exist
///
/// With `reset` set, both tables are dropped first. Invoices go before
/// companies so the foreign key never points at a missing table.
pub async fn run_migrations(pool: &SqlitePool, reset: bool) -> Result<(), sqlx::Error> {
    if reset {
        warn!("RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("Dropped old tables");
    } else {
        info!("Skipping table drop (RESET_DB not set). Tables will be created if they don't exist.");
    }

    create_company_tables(pool).await?;
    create_invoice_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed successfully");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in ["invoices", "companies"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn create_company_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            code TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_invoice_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // REAL affinity keeps integral amounts decodable as f64
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            comp_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
            amt REAL NOT NULL CHECK (amt >= 0),
            paid BOOLEAN NOT NULL DEFAULT 0,
            add_date DATE NOT NULL DEFAULT (date('now')),
            paid_date DATE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_invoices_comp_code ON invoices(comp_code)")
        .execute(pool)
        .await?;

    Ok(())
}
