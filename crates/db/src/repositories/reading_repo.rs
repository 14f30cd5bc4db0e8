//! Repository for the `readings` table (append-only time series).

use envmon_core::types::Timestamp;

use crate::models::reading::{NewReading, ReadingRow};
use crate::DbPool;

/// Column list for `readings` SELECT queries.
const COLUMNS: &str = "id, recorded_at, temperature, humidity, co2, co, pm25, pm10";

/// Column list for `readings` INSERT statements (excludes the
/// auto-generated `id`).
const INSERT_COLUMNS: &str = "recorded_at, temperature, humidity, co2, co, pm25, pm10";

/// Provides query operations for historical readings.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert a single reading snapshot.
    pub async fn insert(
        pool: &DbPool,
        recorded_at: Timestamp,
        reading: &NewReading,
    ) -> Result<ReadingRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO readings ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReadingRow>(&query)
            .bind(recorded_at)
            .bind(reading.temperature)
            .bind(reading.humidity)
            .bind(reading.co2)
            .bind(reading.co)
            .bind(reading.pm25)
            .bind(reading.pm10)
            .fetch_one(pool)
            .await
    }

    /// The most recently recorded reading, if any.
    pub async fn latest(pool: &DbPool) -> Result<Option<ReadingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM readings \
             ORDER BY recorded_at DESC, id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, ReadingRow>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Readings recorded within `[start, end]`, oldest first.
    pub async fn range(
        pool: &DbPool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<ReadingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM readings \
             WHERE recorded_at >= $1 AND recorded_at <= $2 \
             ORDER BY recorded_at, id"
        );
        sqlx::query_as::<_, ReadingRow>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}
