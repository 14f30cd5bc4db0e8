//! Safety threshold configuration: per-metric limits, the built-in default
//! table, and the override resolution rule.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::metric::Metric;

/// The allowed range for one metric, expressed as optional bounds.
///
/// A limit with both bounds absent is representable but inert: it can never
/// produce an alert. The configuration surface refuses to store one (see
/// [`Limit::validated`]), but the evaluator tolerates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Limit {
    pub fn range(min: f64, max: f64) -> Self {
        Limit {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn min(min: f64) -> Self {
        Limit {
            min: Some(min),
            max: None,
        }
    }

    pub fn max(max: f64) -> Self {
        Limit {
            min: None,
            max: Some(max),
        }
    }

    /// Build a limit from user-supplied bounds, rejecting inert or
    /// non-finite input.
    pub fn validated(min: Option<f64>, max: Option<f64>) -> Result<Self, CoreError> {
        if min.is_none() && max.is_none() {
            return Err(CoreError::Validation(
                "at least one of min or max must be set".to_string(),
            ));
        }
        for bound in [min, max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(CoreError::Validation(format!(
                    "threshold bounds must be finite, got {bound}"
                )));
            }
        }
        Ok(Limit { min, max })
    }

    /// Field-level merge: bounds present in `other` replace the matching
    /// bound here, bounds absent in `other` leave it untouched.
    pub fn merge(&mut self, other: &Limit) {
        if other.min.is_some() {
            self.min = other.min;
        }
        if other.max.is_some() {
            self.max = other.max;
        }
    }
}

/// The complete per-metric limit configuration for one evaluation.
///
/// Two instances exist conceptually: the immutable built-in defaults and the
/// user override set loaded from the `thresholds` table. [`resolve`] merges
/// the latter onto the former.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdSet {
    limits: BTreeMap<Metric, Limit>,
}

impl ThresholdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: Metric, limit: Limit) {
        self.limits.insert(metric, limit);
    }

    pub fn get(&self, metric: &Metric) -> Option<&Limit> {
        self.limits.get(metric)
    }

    /// Iterate entries in canonical metric order.
    pub fn iter(&self) -> impl Iterator<Item = (&Metric, &Limit)> {
        self.limits.iter()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl FromIterator<(Metric, Limit)> for ThresholdSet {
    fn from_iter<I: IntoIterator<Item = (Metric, Limit)>>(iter: I) -> Self {
        ThresholdSet {
            limits: iter.into_iter().collect(),
        }
    }
}

/// Built-in default safety thresholds, frozen at startup and never mutated.
static DEFAULT_THRESHOLDS: LazyLock<ThresholdSet> = LazyLock::new(|| {
    ThresholdSet::from_iter([
        (Metric::Temperature, Limit::range(10.0, 35.0)),
        (Metric::Co2, Limit::max(1000.0)),
        (Metric::Co, Limit::max(9.0)),
        (Metric::Humidity, Limit::range(30.0, 60.0)),
        (Metric::Pm25, Limit::max(12.0)),
        (Metric::Pm10, Limit::max(54.0)),
    ])
});

/// The built-in default threshold table.
pub fn defaults() -> &'static ThresholdSet {
    &DEFAULT_THRESHOLDS
}

/// Merge user overrides onto the defaults.
///
/// Starts from a copy of the default table. Overrides for metrics present in
/// the defaults are merged per-field (an override supplying only `max`
/// keeps the default `min`); overrides for new metrics are inserted exactly
/// as supplied, with no default bounds fabricated. Pure and total: any
/// well-formed override set resolves without error, and resolving the same
/// input twice yields identical output.
pub fn resolve(overrides: &ThresholdSet) -> ThresholdSet {
    let mut resolved = DEFAULT_THRESHOLDS.clone();
    for (metric, limit) in overrides.iter() {
        match resolved.limits.get_mut(metric) {
            Some(existing) => existing.merge(limit),
            None => {
                resolved.limits.insert(metric.clone(), *limit);
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_cover_the_baseline_metrics() {
        let defaults = defaults();
        assert_eq!(defaults.len(), 6);
        assert_eq!(
            defaults.get(&Metric::Temperature),
            Some(&Limit::range(10.0, 35.0))
        );
        assert_eq!(defaults.get(&Metric::Co2), Some(&Limit::max(1000.0)));
        assert_eq!(defaults.get(&Metric::Co), Some(&Limit::max(9.0)));
        assert_eq!(
            defaults.get(&Metric::Humidity),
            Some(&Limit::range(30.0, 60.0))
        );
        assert_eq!(defaults.get(&Metric::Pm25), Some(&Limit::max(12.0)));
        assert_eq!(defaults.get(&Metric::Pm10), Some(&Limit::max(54.0)));
    }

    #[test]
    fn merge_is_field_additive() {
        let overrides = ThresholdSet::from_iter([(Metric::Temperature, Limit::max(40.0))]);
        let resolved = resolve(&overrides);
        // The override's max replaces the default max; the default min survives.
        assert_eq!(
            resolved.get(&Metric::Temperature),
            Some(&Limit::range(10.0, 40.0))
        );
    }

    #[test]
    fn override_for_unknown_metric_is_inserted_verbatim() {
        let ozone = Metric::Other("ozone".to_string());
        let overrides = ThresholdSet::from_iter([(ozone.clone(), Limit::max(180.0))]);
        let resolved = resolve(&overrides);
        assert_eq!(resolved.get(&ozone), Some(&Limit::max(180.0)));
        // Defaults are still all present.
        assert_eq!(resolved.len(), 7);
    }

    #[test]
    fn resolve_is_idempotent() {
        let overrides = ThresholdSet::from_iter([
            (Metric::Humidity, Limit::min(25.0)),
            (Metric::Other("ozone".to_string()), Limit::max(180.0)),
        ]);
        assert_eq!(resolve(&overrides), resolve(&overrides));
    }

    #[test]
    fn resolve_with_empty_overrides_equals_defaults() {
        assert_eq!(resolve(&ThresholdSet::new()), *defaults());
    }

    #[test]
    fn validated_rejects_inert_limits() {
        assert_matches!(Limit::validated(None, None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validated_rejects_non_finite_bounds() {
        assert_matches!(
            Limit::validated(Some(f64::NAN), None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            Limit::validated(None, Some(f64::INFINITY)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn validated_accepts_single_bounds() {
        assert_eq!(Limit::validated(None, Some(40.0)).unwrap(), Limit::max(40.0));
        assert_eq!(Limit::validated(Some(5.0), None).unwrap(), Limit::min(5.0));
    }
}
