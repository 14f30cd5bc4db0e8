//! Data acquisition layer: fetches current conditions from external
//! providers and normalises them into a core [`Reading`].
//!
//! Providers are **gracefully optional** — a missing API key logs a warning
//! and leaves that provider's metrics absent instead of failing the whole
//! fetch. A configured provider that errors does fail the fetch, so API
//! problems surface to the operator.

use envmon_core::metric::{Metric, BASELINE_METRICS};
use envmon_core::reading::Reading;

pub mod airvisual;
pub mod error;
pub mod openweather;

use airvisual::AirVisualClient;
use error::ProviderError;
use openweather::OpenWeatherClient;

/// Configuration for one fetch cycle.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// OpenWeatherMap API key; `None` leaves temperature and humidity absent.
    pub openweather_api_key: Option<String>,
    /// AirVisual API key; `None` leaves the particulate metrics absent.
    pub airvisual_api_key: Option<String>,
}

/// Fetch a normalised reading from the configured providers.
///
/// Every baseline metric appears in the result; metrics no provider
/// supplied carry the explicit absent marker. CO2 and CO have no external
/// provider here and are always absent unless a local sensor integration
/// fills them in upstream.
pub async fn fetch_reading(config: &FetchConfig) -> Result<Reading, ProviderError> {
    let mut reading = Reading::new();
    for metric in BASELINE_METRICS {
        reading.set(metric, None);
    }

    match &config.openweather_api_key {
        Some(key) => {
            let client = OpenWeatherClient::new(key.clone());
            let weather = client
                .current(config.latitude, config.longitude)
                .await?;
            reading.set(Metric::Temperature, weather.main.temp);
            reading.set(Metric::Humidity, weather.main.humidity);
        }
        None => {
            tracing::warn!("OPENWEATHER_API_KEY not set — weather metrics will be absent");
        }
    }

    match &config.airvisual_api_key {
        Some(key) => {
            let client = AirVisualClient::new(key.clone());
            let air = client
                .nearest_city(config.latitude, config.longitude)
                .await?;
            let pollution = air.data.current.pollution;
            reading.set(Metric::Pm25, pollution.p2);
            reading.set(Metric::Pm10, pollution.p1);
        }
        None => {
            tracing::warn!("AIRVISUAL_API_KEY not set — air quality metrics will be absent");
        }
    }

    Ok(reading)
}
