//! Conversion from provider-native units (Celsius, mph, millibar) to the
//! units selected for display.
//!
//! Converters return raw `f64` values. Rounding to one decimal place happens
//! only when a quantity is formatted through its `Display` impl.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display unit preferences supplied by the caller for one transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreferences {
    pub use_celsius: bool,
    pub use_km_per_hour: bool,
    /// `true` selects mmHg display, `false` keeps hPa.
    pub use_millibar: bool,
}

impl Default for UnitPreferences {
    fn default() -> Self {
        Self { use_celsius: true, use_km_per_hour: false, use_millibar: false }
    }
}

pub const MMHG_PER_MILLIBAR: f64 = 0.7501;
pub const WIND_SPEED_FACTOR: f64 = 3.6;

#[must_use]
pub fn to_display_temperature(celsius: f64, use_celsius: bool) -> f64 {
    if use_celsius { celsius } else { celsius * 9.0 / 5.0 + 32.0 }
}

/// Applies the 3.6 factor to the provider's `wind_mph` value when km/h is
/// selected; otherwise the value is shown unchanged as m/s.
#[must_use]
pub fn to_display_wind_speed(mph: f64, use_km_per_hour: bool) -> f64 {
    if use_km_per_hour { mph * WIND_SPEED_FACTOR } else { mph }
}

#[must_use]
pub fn to_display_pressure(millibar: f64, use_millibar: bool) -> f64 {
    if use_millibar { millibar * MMHG_PER_MILLIBAR } else { millibar }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindSpeedUnit {
    KilometersPerHour,
    MetersPerSecond,
}

impl WindSpeedUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            WindSpeedUnit::KilometersPerHour => "km/h",
            WindSpeedUnit::MetersPerSecond => "m/s",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureUnit {
    MillimetersOfMercury,
    Hectopascal,
}

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::MillimetersOfMercury => "mmHg",
            PressureUnit::Hectopascal => "hPa",
        }
    }
}

/// A converted temperature together with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Temperature {
    pub fn from_celsius(celsius: f64, prefs: &UnitPreferences) -> Self {
        let unit = if prefs.use_celsius {
            TemperatureUnit::Celsius
        } else {
            TemperatureUnit::Fahrenheit
        };
        Self { value: to_display_temperature(celsius, prefs.use_celsius), unit }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{}", self.value, self.unit.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSpeed {
    pub value: f64,
    pub unit: WindSpeedUnit,
}

impl WindSpeed {
    pub fn from_provider(mph: f64, prefs: &UnitPreferences) -> Self {
        let unit = if prefs.use_km_per_hour {
            WindSpeedUnit::KilometersPerHour
        } else {
            WindSpeedUnit::MetersPerSecond
        };
        Self { value: to_display_wind_speed(mph, prefs.use_km_per_hour), unit }
    }
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.value, self.unit.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pressure {
    pub value: f64,
    pub unit: PressureUnit,
}

impl Pressure {
    pub fn from_millibar(millibar: f64, prefs: &UnitPreferences) -> Self {
        let unit = if prefs.use_millibar {
            PressureUnit::MillimetersOfMercury
        } else {
            PressureUnit::Hectopascal
        };
        Self { value: to_display_pressure(millibar, prefs.use_millibar), unit }
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.value, self.unit.symbol())
    }
}
