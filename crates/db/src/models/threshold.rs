//! Threshold override entity model.

use serde::Serialize;
use sqlx::FromRow;

use envmon_core::types::DbId;

/// A stored user threshold override for one metric.
///
/// Either bound may be NULL; the resolver merges whatever is present onto
/// the built-in defaults field by field.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ThresholdRow {
    pub id: DbId,
    pub metric: String,
    pub min_val: Option<f64>,
    pub max_val: Option<f64>,
}
