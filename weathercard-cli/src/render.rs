use std::fmt::{self, Write};

use weathercard_core::WeatherViewModel;

/// Plain-text weather card: header, current conditions, next hours and days.
pub fn card(model: &WeatherViewModel) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_card(&mut out, model)?;
    Ok(out)
}

fn write_card(out: &mut String, model: &WeatherViewModel) -> fmt::Result {
    let current = &model.current;

    writeln!(out, "{}", model.location.name)?;
    writeln!(out, "{}", model.location.localtime)?;
    writeln!(out)?;
    writeln!(out, "  Temperature: {}  {}", current.temperature, current.condition.text)?;
    writeln!(out, "  Wind:        {}", current.wind_speed)?;
    writeln!(out, "  Pressure:    {}", current.pressure)?;
    writeln!(out, "  Humidity:    {}%", current.humidity_pct)?;
    writeln!(out, "  Icon:        {}", current.condition_icon_url)?;

    if !model.next_hours.is_empty() {
        writeln!(out)?;
        writeln!(out, "Next hours")?;
        for hour in &model.next_hours {
            writeln!(
                out,
                "  {}  {:>8}  {}  {}",
                hour.time,
                hour.temperature.to_string(),
                hour.condition.text,
                hour.condition_icon_url
            )?;
        }
    }

    if !model.days.is_empty() {
        writeln!(out)?;
        writeln!(out, "Forecast")?;
        for day in &model.days {
            writeln!(
                out,
                "  {:<3} {}  {:>8}  {:>3}% rain  {}  {}",
                day.weekday,
                day.date,
                day.avg_temperature.to_string(),
                day.rain_chance_pct,
                day.condition.text,
                day.condition_icon_url
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Locale;
    use weathercard_core::{
        ForecastResponse, UnitPreferences,
        model::{Condition, CurrentConditions, Location},
    };

    fn response() -> ForecastResponse {
        ForecastResponse {
            location: Location { name: "Saransk".into(), localtime: "2024-05-06 21:10".into() },
            current: CurrentConditions {
                temperature_celsius: 20.0,
                wind_speed_mph: 10.0,
                pressure_mb: 1000.0,
                humidity_pct: 48,
                condition: Condition { text: "Clear".into(), icon: "//cdn/113.png".into() },
            },
            forecast: None,
        }
    }

    #[test]
    fn renders_current_conditions() {
        let raw = response();
        let prefs = UnitPreferences {
            use_celsius: false,
            use_km_per_hour: true,
            use_millibar: false,
        };
        let model = WeatherViewModel::compose(Some(&raw), &prefs, Locale::en_US).expect("model");

        let text = card(&model).expect("render");
        assert!(text.starts_with("Saransk\n2024-05-06 21:10\n"));
        assert!(text.contains("Temperature: 68.0°F  Clear"));
        assert!(text.contains("Wind:        36.0 km/h"));
        assert!(text.contains("Pressure:    1000.0 hPa"));
        assert!(text.contains("Humidity:    48%"));
        assert!(text.contains("Icon:        https://cdn/113.png"));
    }

    #[test]
    fn omits_empty_sections() {
        let raw = response();
        let model =
            WeatherViewModel::compose(Some(&raw), &UnitPreferences::default(), Locale::en_US)
                .expect("model");

        let text = card(&model).expect("render");
        assert!(!text.contains("Next hours"));
        assert!(!text.contains("Forecast"));
    }
}
