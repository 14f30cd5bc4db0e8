//! Canonical metric vocabulary for environmental readings.
//!
//! The variant declaration order is the canonical metric order: readings and
//! threshold sets iterate in this order, which fixes the order alerts are
//! emitted in. Metrics outside the baseline vocabulary are carried as
//! [`Metric::Other`] and sort after all baseline metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named measurable environmental quantity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Metric {
    /// Degrees Celsius.
    Temperature,
    /// Relative humidity, percent.
    Humidity,
    /// Carbon dioxide, ppm.
    Co2,
    /// Carbon monoxide, ppm.
    Co,
    /// Fine particulate matter, µg/m³.
    Pm25,
    /// Coarse particulate matter, µg/m³.
    Pm10,
    /// A metric outside the baseline vocabulary (stored lowercase).
    ///
    /// Unknown metrics are tolerated everywhere: ignored in readings unless
    /// a threshold is configured for them, stored verbatim in overrides.
    Other(String),
}

/// The fixed baseline metric set covered by the default thresholds and the
/// readings table schema.
pub const BASELINE_METRICS: [Metric; 6] = [
    Metric::Temperature,
    Metric::Humidity,
    Metric::Co2,
    Metric::Co,
    Metric::Pm25,
    Metric::Pm10,
];

impl Metric {
    /// Canonical lowercase identifier, as used in the `thresholds` table and
    /// provider field mapping.
    pub fn as_str(&self) -> &str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Co2 => "co2",
            Metric::Co => "co",
            Metric::Pm25 => "pm25",
            Metric::Pm10 => "pm10",
            Metric::Other(name) => name,
        }
    }

    /// Parse an identifier, normalising case and surrounding whitespace.
    /// Never fails: unrecognised names become [`Metric::Other`].
    pub fn parse(s: &str) -> Metric {
        match s.trim().to_lowercase().as_str() {
            "temperature" => Metric::Temperature,
            "humidity" => Metric::Humidity,
            "co2" => Metric::Co2,
            "co" => Metric::Co,
            "pm25" => Metric::Pm25,
            "pm10" => Metric::Pm10,
            other => Metric::Other(other.to_string()),
        }
    }

    /// Capitalised label for alert text, e.g. `Temperature`, `Co2`.
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Measurement unit implied by the metric identity, empty for unknown
    /// metrics (units are normalised upstream by the acquisition layer).
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Co2 | Metric::Co => "ppm",
            Metric::Pm25 | Metric::Pm10 => "µg/m³",
            Metric::Other(_) => "",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Metric {
    fn from(s: String) -> Self {
        Metric::parse(&s)
    }
}

impl From<&str> for Metric {
    fn from(s: &str) -> Self {
        Metric::parse(s)
    }
}

impl From<Metric> for String {
    fn from(m: Metric) -> Self {
        m.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_baseline_metrics() {
        for metric in BASELINE_METRICS {
            assert_eq!(Metric::parse(metric.as_str()), metric);
        }
    }

    #[test]
    fn parse_normalises_case_and_whitespace() {
        assert_eq!(Metric::parse(" Temperature "), Metric::Temperature);
        assert_eq!(Metric::parse("CO2"), Metric::Co2);
    }

    #[test]
    fn unknown_names_become_other() {
        assert_eq!(Metric::parse("ozone"), Metric::Other("ozone".to_string()));
    }

    #[test]
    fn labels_are_capitalised() {
        assert_eq!(Metric::Temperature.label(), "Temperature");
        assert_eq!(Metric::Co2.label(), "Co2");
        assert_eq!(Metric::Pm25.label(), "Pm25");
        assert_eq!(Metric::Other("ozone".to_string()).label(), "Ozone");
    }

    #[test]
    fn serde_round_trips_through_identifier_strings() {
        let json = serde_json::to_string(&Metric::Co2).unwrap();
        assert_eq!(json, r#""co2""#);
        assert_eq!(serde_json::from_str::<Metric>(&json).unwrap(), Metric::Co2);

        let ozone = Metric::Other("ozone".to_string());
        let json = serde_json::to_string(&ozone).unwrap();
        assert_eq!(json, r#""ozone""#);
        assert_eq!(serde_json::from_str::<Metric>(&json).unwrap(), ozone);

        // Deserialisation normalises exactly like parse().
        assert_eq!(
            serde_json::from_str::<Metric>(r#""Temperature""#).unwrap(),
            Metric::Temperature
        );
    }

    #[test]
    fn canonical_order_follows_declaration() {
        assert!(Metric::Temperature < Metric::Co);
        assert!(Metric::Co < Metric::Pm10);
        assert!(Metric::Pm10 < Metric::Other("aqi".to_string()));
    }
}
