use anyhow::{Context, Result, anyhow};
use chrono::Locale;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Location used when nothing is selected and no default is configured.
pub const FALLBACK_LOCATION: &str = "Саранск";

/// Locale for weekday labels when none is configured.
pub const DEFAULT_LOCALE: &str = "ru_RU";

/// Top-level configuration stored on disk.
///
/// Unit preferences are intentionally absent: they are passed per call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// WeatherAPI.com key.
    pub api_key: Option<String>,

    /// Location shown when none is given on the command line.
    pub default_location: Option<String>,

    /// Locale for weekday labels, e.g. "ru_RU" or "en_US".
    pub locale: Option<String>,
}

impl Config {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Configured weekday locale, falling back to [`DEFAULT_LOCALE`].
    pub fn locale(&self) -> Result<Locale> {
        parse_locale(self.locale.as_deref().unwrap_or(DEFAULT_LOCALE))
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathercard", "weathercard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Location to query: the explicit selection, then the configured default,
/// then [`FALLBACK_LOCATION`]. Blank names count as unset.
pub fn resolve_location<'a>(selected: Option<&'a str>, config: &'a Config) -> &'a str {
    selected
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| config.default_location.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(FALLBACK_LOCATION)
}

pub fn parse_locale(name: &str) -> Result<Locale> {
    Locale::try_from(name).map_err(|_| {
        anyhow!("Unknown locale '{name}'.\nHint: use a POSIX locale name such as ru_RU or en_US.")
    })
}
