//! Core library for the `weathercard` CLI.
//!
//! This crate defines:
//! - The raw WeatherAPI.com forecast model
//! - Unit conversion for display preferences
//! - Selection of the next forecast hours
//! - The display-ready view model built from the two above
//! - Configuration and weather sources used by the binary
//!
//! Conversion, windowing and composition are pure: they borrow a response
//! and a set of preferences and never touch the network or the clock.

pub mod config;
pub mod model;
pub mod provider;
pub mod units;
pub mod view;
pub mod window;

pub use config::{Config, resolve_location};
pub use model::{ForecastResponse, HourlyPoint};
pub use provider::{FetchError, WeatherSource};
pub use units::UnitPreferences;
pub use view::WeatherViewModel;
