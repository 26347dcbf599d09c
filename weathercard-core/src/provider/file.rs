use async_trait::async_trait;
use std::path::PathBuf;

use crate::model::ForecastResponse;

use super::{FetchError, WeatherSource};

/// Reads a previously saved `forecast.json` response from disk.
///
/// The requested location is ignored; the file decides what is shown.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WeatherSource for FileSource {
    async fn forecast(&self, location: &str) -> Result<ForecastResponse, FetchError> {
        tracing::debug!(path = %self.path.display(), location, "reading saved forecast");

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Read { path: self.path.clone(), source })?;

        Ok(serde_json::from_str(&body)?)
    }
}
