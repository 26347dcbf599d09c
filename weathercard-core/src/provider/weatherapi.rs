use async_trait::async_trait;
use reqwest::Client;

use crate::model::ForecastResponse;

use super::{DEFAULT_FORECAST_DAYS, FetchError, WeatherSource, truncate_body};

const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com";

/// Client for WeatherAPI.com `forecast.json`.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    days: u8,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            days: DEFAULT_FORECAST_DAYS,
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_days(mut self, days: u8) -> Self {
        self.days = days.max(1);
        self
    }
}

#[async_trait]
impl WeatherSource for WeatherApiClient {
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, FetchError> {
        let url = format!("{}/v1/forecast.json", self.base_url);
        let days = self.days.to_string();
        tracing::info!(location, days = self.days, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", days.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "forecast request failed");
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            name = %parsed.location.name,
            days = parsed.days().len(),
            "forecast received"
        );

        Ok(parsed)
    }
}
