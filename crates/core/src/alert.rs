//! Alert types for threshold violations.
//!
//! An [`Alert`] is a structured record carried through the whole pipeline;
//! it is only formatted to text at the display boundary, never parsed back.

use std::fmt;

use serde::Serialize;

use crate::metric::Metric;

/// Which bound of a limit was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    /// The observed value exceeded the configured `max`.
    High,
    /// The observed value fell below the configured `min`.
    Low,
}

impl AlertDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertDirection::High => "high",
            AlertDirection::Low => "low",
        }
    }
}

/// A single threshold violation for one metric of one reading.
///
/// Created per evaluation call and consumed immediately by the tip resolver
/// or the display layer; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub metric: Metric,
    pub direction: AlertDirection,
    /// The reading value that triggered the alert.
    pub observed: f64,
    /// The bound that was violated.
    pub limit: f64,
}

impl fmt::Display for Alert {
    /// Renders e.g. `Temperature is too high: 40.00 > 35`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.direction {
            AlertDirection::High => '>',
            AlertDirection::Low => '<',
        };
        write!(
            f,
            "{} is too {}: {:.2} {} {}",
            self.metric.label(),
            self.direction.as_str(),
            self.observed,
            op,
            self.limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_alert_formats_with_greater_than() {
        let alert = Alert {
            metric: Metric::Temperature,
            direction: AlertDirection::High,
            observed: 40.0,
            limit: 35.0,
        };
        assert_eq!(alert.to_string(), "Temperature is too high: 40.00 > 35");
    }

    #[test]
    fn low_alert_formats_with_less_than() {
        let alert = Alert {
            metric: Metric::Humidity,
            direction: AlertDirection::Low,
            observed: 12.345,
            limit: 30.0,
        };
        assert_eq!(alert.to_string(), "Humidity is too low: 12.35 < 30");
    }

    #[test]
    fn fractional_limits_keep_their_precision() {
        let alert = Alert {
            metric: Metric::Pm25,
            direction: AlertDirection::High,
            observed: 13.0,
            limit: 12.5,
        };
        assert_eq!(alert.to_string(), "Pm25 is too high: 13.00 > 12.5");
    }
}
