//! HTTP client for the NWS points and hourly-forecast endpoints.

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{ForecastResponse, PointsResponse, WeatherReading};

const WEATHER_API_BASE: &str = "https://api.weather.gov";
const REQUEST_TIMEOUT_SECS: u64 = 10;
// NWS requires a client-identifying User-Agent on every request.
const USER_AGENT: &str = "NextBusDisplay/1.0";

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self, WeatherError> {
        Self::new_with_base_url(WEATHER_API_BASE)
    }

    /// Client pointed at an alternate base URL, for tests against a mock
    /// upstream.
    pub fn new_with_base_url(base_url: &str) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Current conditions for a coordinate pair.
    ///
    /// `lat` and `lon` are forwarded as given; the upstream rejects values
    /// it cannot resolve. Failure at either step aborts the lookup — the
    /// caller never sees (or caches) a partial result.
    #[instrument(skip(self), level = "info")]
    pub async fn current_conditions(
        &self,
        lat: &str,
        lon: &str,
    ) -> Result<WeatherReading, WeatherError> {
        let points_url = format!("{}/points/{},{}", self.base_url, lat, lon);
        let response = self.client.get(&points_url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::PointsStatus(response.status().as_u16()));
        }
        let points: PointsResponse = parse_json(&response.text().await?)?;

        let response = self
            .client
            .get(&points.properties.forecast_hourly)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(WeatherError::ForecastStatus(response.status().as_u16()));
        }
        let forecast: ForecastResponse = parse_json(&response.text().await?)?;

        let current = forecast
            .properties
            .periods
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("hourly forecast contained no periods".into()))?;

        Ok(current.into())
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, WeatherError> {
    serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))
}
