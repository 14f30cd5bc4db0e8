//! AirVisual client: particulate matter concentrations for the nearest
//! monitoring station.

use serde::Deserialize;

use crate::error::{parse_response, ProviderError};

const DEFAULT_BASE_URL: &str = "http://api.airvisual.com/v2";

/// HTTP client for the AirVisual nearest-city endpoint.
pub struct AirVisualClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Response of `GET /nearest_city` (only the fields the monitor consumes).
#[derive(Debug, Deserialize)]
pub struct AirQualityResponse {
    pub data: AirQualityData,
}

#[derive(Debug, Deserialize)]
pub struct AirQualityData {
    pub current: AirQualityCurrent,
}

#[derive(Debug, Deserialize)]
pub struct AirQualityCurrent {
    pub pollution: Pollution,
}

/// Pollution block. Concentration fields are only present on plans that
/// report raw concentrations, so both are optional.
#[derive(Debug, Deserialize)]
pub struct Pollution {
    /// PM2.5 concentration, µg/m³.
    pub p2: Option<f64>,
    /// PM10 concentration, µg/m³.
    pub p1: Option<f64>,
}

impl AirVisualClient {
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

    /// Fetch air quality for the station nearest to a location.
    pub async fn nearest_city(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<AirQualityResponse, ProviderError> {
        let response = self
            .client
            .get(format!("{}/nearest_city", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?;

        parse_response(response).await
    }
}
