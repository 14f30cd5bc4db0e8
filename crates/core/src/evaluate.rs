//! Threshold evaluation engine.
//!
//! Pure logic — no database access. The caller is responsible for fetching
//! the latest reading and the resolved threshold set and passing them in;
//! every call is independently reentrant.

use crate::alert::{Alert, AlertDirection};
use crate::reading::Reading;
use crate::threshold::ThresholdSet;

/// Compare a reading against a threshold set and return any violations.
///
/// Metrics are visited in the reading's canonical key order. For each metric
/// with a present value and a configured limit, a `high` alert is emitted
/// when the value is strictly above `max` and a `low` alert when it is
/// strictly below `min` — high before low for the same metric. Values
/// exactly equal to a bound never alert. Absent values and metrics without
/// a configured limit are skipped silently.
///
/// A limit whose `min` exceeds its `max` is a permitted degenerate
/// configuration: a single value can then violate both bounds and yields
/// two alerts.
pub fn evaluate(reading: &Reading, thresholds: &ThresholdSet) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for (metric, value) in reading.iter() {
        let Some(value) = value else {
            continue; // explicit no-data marker
        };
        let Some(limit) = thresholds.get(metric) else {
            continue; // unconfigured metric, never alerts
        };

        if let Some(max) = limit.max {
            if value > max {
                alerts.push(Alert {
                    metric: metric.clone(),
                    direction: AlertDirection::High,
                    observed: value,
                    limit: max,
                });
            }
        }
        if let Some(min) = limit.min {
            if value < min {
                alerts.push(Alert {
                    metric: metric.clone(),
                    direction: AlertDirection::Low,
                    observed: value,
                    limit: min,
                });
            }
        }
    }

    alerts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
