//! Reading entity models: one nullable column per baseline metric.

use serde::Serialize;
use sqlx::FromRow;

use envmon_core::metric::Metric;
use envmon_core::reading::Reading;
use envmon_core::types::{DbId, Timestamp};

/// A persisted reading, as stored in the `readings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadingRow {
    pub id: DbId,
    pub recorded_at: Timestamp,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub co2: Option<f64>,
    pub co: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
}

impl ReadingRow {
    /// Rebuild the core snapshot type from a stored row.
    ///
    /// NULL columns become explicit absent markers, so downstream
    /// evaluation skips them instead of treating them as zero.
    pub fn to_reading(&self) -> Reading {
        Reading::new()
            .with(Metric::Temperature, self.temperature)
            .with(Metric::Humidity, self.humidity)
            .with(Metric::Co2, self.co2)
            .with(Metric::Co, self.co)
            .with(Metric::Pm25, self.pm25)
            .with(Metric::Pm10, self.pm10)
    }
}

/// DTO for inserting a new reading row.
///
/// Only the baseline metrics have columns; values for metrics outside the
/// baseline vocabulary are not persisted.
#[derive(Debug, Clone, Default)]
pub struct NewReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub co2: Option<f64>,
    pub co: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
}

impl From<&Reading> for NewReading {
    fn from(reading: &Reading) -> Self {
        NewReading {
            temperature: reading.get(&Metric::Temperature),
            humidity: reading.get(&Metric::Humidity),
            co2: reading.get(&Metric::Co2),
            co: reading.get(&Metric::Co),
            pm25: reading.get(&Metric::Pm25),
            pm10: reading.get(&Metric::Pm10),
        }
    }
}
