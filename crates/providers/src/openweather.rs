//! OpenWeatherMap client: current temperature and humidity.

use serde::Deserialize;

use crate::error::{parse_response, ProviderError};

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";

/// HTTP client for the OpenWeatherMap current-weather endpoint.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Response of `GET /weather` (only the fields the monitor consumes).
#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    pub main: WeatherMain,
}

#[derive(Debug, Deserialize)]
pub struct WeatherMain {
    /// Temperature in °C (the request asks for metric units).
    pub temp: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] and a custom
    /// base URL (useful for pointing at a local stub).
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Fetch current weather for a location.
    pub async fn current(&self, lat: f64, lon: f64) -> Result<WeatherResponse, ProviderError> {
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        parse_response(response).await
    }
}
