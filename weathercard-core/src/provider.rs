use crate::{
    Config,
    model::ForecastResponse,
    provider::{file::FileSource, weatherapi::WeatherApiClient},
};
use async_trait::async_trait;
use std::{fmt::Debug, path::PathBuf};

pub mod file;
pub mod weatherapi;

/// Number of forecast days requested when the caller does not say otherwise.
pub const DEFAULT_FORECAST_DAYS: u8 = 7;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(
        "No WeatherAPI key configured.\nHint: run `weathercard configure` and enter your API key."
    )]
    MissingApiKey,

    #[error("Failed to send request to WeatherAPI.com: {0}")]
    Request(#[from] reqwest::Error),

    #[error("WeatherAPI request failed with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("Failed to parse weather JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
}

/// Anything that can produce a raw provider response for a location.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, FetchError>;
}

/// Source backed by a saved response file when `file` is given, otherwise by
/// the WeatherAPI client configured in `config`.
pub fn source_from_config(
    config: &Config,
    file: Option<PathBuf>,
    days: u8,
) -> Result<Box<dyn WeatherSource>, FetchError> {
    if let Some(path) = file {
        return Ok(Box::new(FileSource::new(path)));
    }

    let api_key = config.api_key().ok_or(FetchError::MissingApiKey)?;
    Ok(Box::new(WeatherApiClient::new(api_key.to_owned()).with_days(days)))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
