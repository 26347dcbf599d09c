use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, Text};
use weathercard_core::{
    Config, UnitPreferences, WeatherViewModel,
    config::{DEFAULT_LOCALE, FALLBACK_LOCATION, parse_locale},
    provider::{DEFAULT_FORECAST_DAYS, source_from_config},
    resolve_location,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercard", version, about = "Current weather, next hours and daily forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key, default location and weekday locale.
    Configure,

    /// Show the weather card for a location.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Location name; defaults to the configured location.
    pub location: Option<String>,

    /// Show temperatures in °F instead of °C.
    #[arg(long)]
    pub fahrenheit: bool,

    /// Show wind speed in km/h instead of m/s.
    #[arg(long)]
    pub kmh: bool,

    /// Show pressure in mmHg instead of hPa.
    #[arg(long)]
    pub mmhg: bool,

    /// Locale for weekday names, e.g. ru_RU or en_US.
    #[arg(long)]
    pub locale: Option<String>,

    /// Number of forecast days to request.
    #[arg(long, default_value_t = DEFAULT_FORECAST_DAYS)]
    pub days: u8,

    /// Render a saved forecast.json response instead of calling the API.
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Print the view model as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    fn preferences(&self) -> UnitPreferences {
        UnitPreferences {
            use_celsius: !self.fahrenheit,
            use_km_per_hour: self.kmh,
            use_millibar: self.mmhg,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show(args) => show(args).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("WeatherAPI.com key:")
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        cfg.api_key = Some(api_key.trim().to_string());
    }

    let current_location = cfg.default_location.clone().unwrap_or_else(|| FALLBACK_LOCATION.into());
    let location = Text::new("Default location:")
        .with_default(&current_location)
        .prompt()
        .context("Failed to read default location")?;
    cfg.default_location = Some(location.trim().to_string()).filter(|s| !s.is_empty());

    let current_locale = cfg.locale.clone().unwrap_or_else(|| DEFAULT_LOCALE.into());
    let locale = Text::new("Weekday locale:")
        .with_default(&current_locale)
        .prompt()
        .context("Failed to read locale")?;
    parse_locale(locale.trim())?;
    cfg.locale = Some(locale.trim().to_string());

    let path = cfg.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

async fn show(args: ShowArgs) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let locale: chrono::Locale = match args.locale.as_deref() {
        Some(name) => parse_locale(name)?,
        None => cfg.locale()?,
    };
    let prefs = args.preferences();
    let location = resolve_location(args.location.as_deref(), &cfg);
    tracing::debug!(location, ?prefs, ?locale, "showing weather card");

    let source = source_from_config(&cfg, args.from_file.clone(), args.days)?;
    let response = source
        .forecast(location)
        .await
        .with_context(|| format!("Failed to get weather for '{location}'"))?;

    let Some(model) = WeatherViewModel::compose(Some(&response), &prefs, locale) else {
        anyhow::bail!("No weather data for '{location}'");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print!("{}", render::card(&model)?);
    }

    Ok(())
}
