//! Raw provider response, as returned by WeatherAPI.com `forecast.json`.
//!
//! All quantities stay in provider-native units. Nothing here is converted;
//! see [`crate::view`] for the display projection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

impl ForecastResponse {
    /// Hourly points of the first forecast day, if the provider sent any.
    pub fn today_hours(&self) -> Option<&[HourlyPoint]> {
        self.forecast
            .as_ref()
            .and_then(|f| f.forecastday.first())
            .map(|day| day.hour.as_slice())
    }

    pub fn days(&self) -> &[ForecastDay] {
        self.forecast.as_ref().map(|f| f.forecastday.as_slice()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Local time at the location, `YYYY-MM-DD HH:MM` (hour may be unpadded).
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

impl Condition {
    /// Icon URL with an explicit scheme; the provider sends `//cdn...`.
    pub fn icon_url(&self) -> String {
        if self.icon.starts_with("//") { format!("https:{}", self.icon) } else { self.icon.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(rename = "temp_c")]
    pub temperature_celsius: f64,
    #[serde(rename = "wind_mph")]
    pub wind_speed_mph: f64,
    pub pressure_mb: f64,
    #[serde(rename = "humidity")]
    pub humidity_pct: u8,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// `YYYY-MM-DD`
    pub date: String,
    pub day: DailySummary,
    #[serde(default)]
    pub hour: Vec<HourlyPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    #[serde(rename = "avgtemp_c")]
    pub avg_temperature_celsius: f64,
    #[serde(rename = "daily_chance_of_rain")]
    pub rain_chance_pct: u8,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub time: String,
    #[serde(rename = "temp_c")]
    pub temperature_celsius: f64,
    pub condition: Condition,
}
