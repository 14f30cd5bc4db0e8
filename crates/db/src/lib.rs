//! SQLite persistence layer: historical readings and user threshold
//! overrides.
//!
//! The schema is created on startup with `CREATE TABLE IF NOT EXISTS`;
//! there is no migration machinery. Repositories are zero-sized structs
//! providing async query methods that take `&DbPool` as the first argument.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL, creating the database
/// file if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create the `readings` and `thresholds` tables if they do not exist.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS readings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recorded_at DATETIME NOT NULL,
            temperature REAL,
            humidity REAL,
            co2 REAL,
            co REAL,
            pm25 REAL,
            pm10 REAL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS thresholds (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            metric TEXT NOT NULL UNIQUE,
            min_val REAL,
            max_val REAL
        )",
    )
    .execute(pool)
    .await?;

    tracing::debug!("database schema initialised");
    Ok(())
}
