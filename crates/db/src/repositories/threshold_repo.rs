//! Repository for the `thresholds` table (user overrides, one row per
//! metric).

use envmon_core::metric::Metric;
use envmon_core::threshold::{Limit, ThresholdSet};

use crate::models::threshold::ThresholdRow;
use crate::DbPool;

/// Column list for `thresholds` queries.
const COLUMNS: &str = "id, metric, min_val, max_val";

/// Provides query operations for user threshold overrides.
pub struct ThresholdRepo;

impl ThresholdRepo {
    /// List all stored overrides.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<ThresholdRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM thresholds ORDER BY metric");
        sqlx::query_as::<_, ThresholdRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Load the override set as a snapshot for threshold resolution.
    ///
    /// Metric names outside the baseline vocabulary are carried as
    /// [`Metric::Other`], never dropped.
    pub async fn overrides(pool: &DbPool) -> Result<ThresholdSet, sqlx::Error> {
        let rows = Self::list_all(pool).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    Metric::parse(&row.metric),
                    Limit {
                        min: row.min_val,
                        max: row.max_val,
                    },
                )
            })
            .collect())
    }

    /// Upsert an override for one metric.
    ///
    /// Bounds absent from the new limit keep their stored value (COALESCE),
    /// mirroring the field-additive merge the resolver applies: setting only
    /// `max` for a metric never erases a previously stored `min`.
    pub async fn upsert(
        pool: &DbPool,
        metric: &Metric,
        limit: &Limit,
    ) -> Result<ThresholdRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO thresholds (metric, min_val, max_val) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (metric) DO UPDATE SET \
                min_val = COALESCE(excluded.min_val, thresholds.min_val), \
                max_val = COALESCE(excluded.max_val, thresholds.max_val) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ThresholdRow>(&query)
            .bind(metric.as_str())
            .bind(limit.min)
            .bind(limit.max)
            .fetch_one(pool)
            .await
    }
}
