//! Display-ready projection of a provider response.

use chrono::{Locale, NaiveDate};
use serde::Serialize;

use crate::{
    model::{Condition, ForecastDay, ForecastResponse, HourlyPoint, Location},
    units::{Pressure, Temperature, UnitPreferences, WindSpeed},
    window,
};

/// Shown in place of an hourly time that cannot be split into `HH:MM`.
pub const INVALID_TIME: &str = "--:--";
/// Shown in place of a weekday whose date cannot be parsed.
pub const INVALID_WEEKDAY: &str = "--";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherViewModel {
    pub location: Location,
    pub current: ConvertedCurrent,
    pub next_hours: Vec<ConvertedHourlyPoint>,
    pub days: Vec<ConvertedDailySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedCurrent {
    pub temperature: Temperature,
    pub wind_speed: WindSpeed,
    pub pressure: Pressure,
    pub humidity_pct: u8,
    pub condition: Condition,
    /// Icon URL with an explicit `https:` scheme.
    pub condition_icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedHourlyPoint {
    /// `HH:MM`, or [`INVALID_TIME`].
    pub time: String,
    pub temperature: Temperature,
    pub condition: Condition,
    pub condition_icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedDailySummary {
    pub date: String,
    /// Short weekday name in the requested locale, or [`INVALID_WEEKDAY`].
    pub weekday: String,
    pub avg_temperature: Temperature,
    pub rain_chance_pct: u8,
    pub condition: Condition,
    pub condition_icon_url: String,
}

impl WeatherViewModel {
    /// Build the view model, or `None` while no response is available.
    ///
    /// The response is only borrowed; its provider-native values are left
    /// untouched.
    pub fn compose(
        response: Option<&ForecastResponse>,
        prefs: &UnitPreferences,
        locale: Locale,
    ) -> Option<Self> {
        let response = response?;

        let current = &response.current;
        let current = ConvertedCurrent {
            temperature: Temperature::from_celsius(current.temperature_celsius, prefs),
            wind_speed: WindSpeed::from_provider(current.wind_speed_mph, prefs),
            pressure: Pressure::from_millibar(current.pressure_mb, prefs),
            humidity_pct: current.humidity_pct,
            condition: current.condition.clone(),
            condition_icon_url: current.condition.icon_url(),
        };

        let next_hours = window::next_hours_for(response)
            .into_iter()
            .map(|point| convert_hour(point, prefs))
            .collect();

        let days = response.days().iter().map(|day| convert_day(day, prefs, locale)).collect();

        Some(Self { location: response.location.clone(), current, next_hours, days })
    }
}

fn convert_hour(point: &HourlyPoint, prefs: &UnitPreferences) -> ConvertedHourlyPoint {
    ConvertedHourlyPoint {
        time: display_time(&point.time),
        temperature: Temperature::from_celsius(point.temperature_celsius, prefs),
        condition: point.condition.clone(),
        condition_icon_url: point.condition.icon_url(),
    }
}

fn convert_day(
    day: &ForecastDay,
    prefs: &UnitPreferences,
    locale: Locale,
) -> ConvertedDailySummary {
    ConvertedDailySummary {
        date: day.date.clone(),
        weekday: weekday_label(&day.date, locale),
        avg_temperature: Temperature::from_celsius(day.day.avg_temperature_celsius, prefs),
        rain_chance_pct: day.day.rain_chance_pct,
        condition: day.day.condition.clone(),
        condition_icon_url: day.day.condition.icon_url(),
    }
}

/// The `HH:MM` part of a `YYYY-MM-DD HH:MM` timestamp.
pub fn display_time(timestamp: &str) -> String {
    match timestamp.split(' ').nth(1) {
        Some(time) if !time.is_empty() => time.to_string(),
        _ => INVALID_TIME.to_string(),
    }
}

/// Short weekday name for a `YYYY-MM-DD` date.
pub fn weekday_label(date: &str, locale: Locale) -> String {
    let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        tracing::debug!(date, "cannot derive weekday from malformed date");
        return INVALID_WEEKDAY.to_string();
    };

    date.and_time(chrono::NaiveTime::MIN).and_utc().format_localized("%a", locale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CurrentConditions, DailySummary, Forecast};
    use crate::window::tests::day_of_hours;

    fn condition(text: &str) -> Condition {
        Condition { text: text.into(), icon: format!("//cdn/{text}.png") }
    }

    fn response() -> ForecastResponse {
        let days = ["2024-05-06", "2024-05-07", "2024-05-08"]
            .iter()
            .enumerate()
            .map(|(i, date)| ForecastDay {
                date: (*date).to_string(),
                day: DailySummary {
                    avg_temperature_celsius: 10.0 + i as f64,
                    rain_chance_pct: 20 * i as u8,
                    condition: condition("Cloudy"),
                },
                hour: day_of_hours(date),
            })
            .collect();

        ForecastResponse {
            location: Location { name: "Saransk".into(), localtime: "2024-05-06 14:25".into() },
            current: CurrentConditions {
                temperature_celsius: 20.0,
                wind_speed_mph: 10.0,
                pressure_mb: 1000.0,
                humidity_pct: 55,
                condition: condition("Sunny"),
            },
            forecast: Some(Forecast { forecastday: days }),
        }
    }

    #[test]
    fn no_response_no_model() {
        let model = WeatherViewModel::compose(None, &UnitPreferences::default(), Locale::en_US);
        assert!(model.is_none());
    }

    #[test]
    fn fahrenheit_current_temperature() {
        let raw = response();
        let prefs = UnitPreferences { use_celsius: false, ..UnitPreferences::default() };
        let model = WeatherViewModel::compose(Some(&raw), &prefs, Locale::en_US).expect("model");

        assert_eq!(model.current.temperature.to_string(), "68.0°F");
        assert_eq!(model.days[0].avg_temperature.to_string(), "50.0°F");
        assert_eq!(model.next_hours[0].temperature.to_string(), "57.2°F");
    }

    #[test]
    fn converts_every_current_field() {
        let raw = response();
        let prefs = UnitPreferences {
            use_celsius: true,
            use_km_per_hour: true,
            use_millibar: true,
        };
        let model = WeatherViewModel::compose(Some(&raw), &prefs, Locale::en_US).expect("model");

        assert_eq!(model.location.name, "Saransk");
        assert_eq!(model.current.wind_speed.to_string(), "36.0 km/h");
        assert_eq!(model.current.pressure.to_string(), "750.1 mmHg");
        assert_eq!(model.current.humidity_pct, 55);
        assert_eq!(model.current.condition.text, "Sunny");
    }

    #[test]
    fn windows_first_day_relative_to_localtime() {
        let raw = response();
        let model =
            WeatherViewModel::compose(Some(&raw), &UnitPreferences::default(), Locale::en_US)
                .expect("model");

        let times: Vec<_> = model.next_hours.iter().map(|h| h.time.as_str()).collect();
        assert_eq!(times, ["14:00", "15:00", "16:00", "17:00"]);
    }

    #[test]
    fn days_keep_order_and_get_weekdays() {
        let raw = response();
        let model =
            WeatherViewModel::compose(Some(&raw), &UnitPreferences::default(), Locale::en_US)
                .expect("model");

        let weekdays: Vec<_> = model.days.iter().map(|d| d.weekday.as_str()).collect();
        assert_eq!(weekdays, ["Mon", "Tue", "Wed"]);
        assert_eq!(model.days[2].rain_chance_pct, 40);
    }

    #[test]
    fn missing_forecast_keeps_current() {
        let mut raw = response();
        raw.forecast = None;
        let model =
            WeatherViewModel::compose(Some(&raw), &UnitPreferences::default(), Locale::en_US)
                .expect("model");

        assert!(model.next_hours.is_empty());
        assert!(model.days.is_empty());
        assert_eq!(model.current.temperature.to_string(), "20.0°C");
    }

    #[test]
    fn compose_is_repeatable_and_leaves_input_untouched() {
        let raw = response();
        let snapshot = raw.clone();
        let prefs = UnitPreferences {
            use_celsius: false,
            use_km_per_hour: true,
            use_millibar: true,
        };

        let first = WeatherViewModel::compose(Some(&raw), &prefs, Locale::ru_RU);
        let second = WeatherViewModel::compose(Some(&raw), &prefs, Locale::ru_RU);

        assert_eq!(first, second);
        assert_eq!(raw, snapshot);
    }

    #[test]
    fn icon_urls_get_https_scheme() {
        let raw = response();
        let model =
            WeatherViewModel::compose(Some(&raw), &UnitPreferences::default(), Locale::en_US)
                .expect("model");

        assert_eq!(model.current.condition_icon_url, "https://cdn/Sunny.png");
        assert_eq!(model.next_hours[0].condition_icon_url, "https://cdn/14.png");
        assert_eq!(model.days[0].condition_icon_url, "https://cdn/Cloudy.png");
        assert_eq!(raw.current.condition.icon, "//cdn/Sunny.png");
    }

    #[test]
    fn display_time_takes_second_token() {
        assert_eq!(display_time("2024-05-06 14:00"), "14:00");
        assert_eq!(display_time("2024-05-06"), INVALID_TIME);
        assert_eq!(display_time("2024-05-06 "), INVALID_TIME);
        assert_eq!(display_time(""), INVALID_TIME);
    }

    #[test]
    fn weekday_label_is_localized() {
        assert_eq!(weekday_label("2024-05-06", Locale::en_US), "Mon");

        let ru = weekday_label("2024-05-06", Locale::ru_RU);
        assert!(!ru.is_empty());
        assert_ne!(ru, "Mon");
    }

    #[test]
    fn weekday_label_for_malformed_date() {
        assert_eq!(weekday_label("06.05.2024", Locale::en_US), INVALID_WEEKDAY);
    }
}
