//! A single snapshot of metric values, consumed read-only by the evaluator.

use std::collections::BTreeMap;

use crate::metric::Metric;

/// One snapshot of metric values at a point in time.
///
/// Each entry maps a metric to either a value or an explicit no-data marker
/// (`None`), which is distinct from the metric being missing entirely — a
/// sensor that reported nothing still appears in the snapshot as absent.
/// Iteration follows the canonical metric order, so evaluation output is
/// deterministic for a given snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reading {
    values: BTreeMap<Metric, Option<f64>>,
}

impl Reading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value (or explicit absence) for a metric.
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        self.values.insert(metric, value);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, metric: Metric, value: Option<f64>) -> Self {
        self.set(metric, value);
        self
    }

    /// The recorded value for a metric, `None` if absent or not recorded.
    pub fn get(&self, metric: &Metric) -> Option<f64> {
        self.values.get(metric).copied().flatten()
    }

    /// Iterate entries in canonical metric order.
    pub fn iter(&self) -> impl Iterator<Item = (&Metric, Option<f64>)> {
        self.values.iter().map(|(metric, value)| (metric, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl FromIterator<(Metric, Option<f64>)> for Reading {
    fn from_iter<I: IntoIterator<Item = (Metric, Option<f64>)>>(iter: I) -> Self {
        Reading {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_missing_are_both_none_on_get() {
        let reading = Reading::new().with(Metric::Humidity, None);
        assert_eq!(reading.get(&Metric::Humidity), None);
        assert_eq!(reading.get(&Metric::Temperature), None);
        // But the absent entry is still part of the snapshot.
        assert_eq!(reading.len(), 1);
    }

    #[test]
    fn iteration_follows_canonical_metric_order() {
        let reading = Reading::new()
            .with(Metric::Co, Some(12.0))
            .with(Metric::Temperature, Some(40.0));
        let order: Vec<&Metric> = reading.iter().map(|(m, _)| m).collect();
        assert_eq!(order, vec![&Metric::Temperature, &Metric::Co]);
    }
}
