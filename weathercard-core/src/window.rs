//! Selection of the upcoming hours from a day's hourly forecast.
//!
//! Hours are compared by hour-of-day only. A reference time of 22:xx selects
//! 22:00 and 23:00 and does not roll over into the next day's points.

use chrono::{NaiveDateTime, Timelike};

use crate::model::{ForecastResponse, HourlyPoint};

/// Number of hours in the forecast window, starting at the current hour.
pub const WINDOW_HOURS: u32 = 4;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a provider timestamp (`YYYY-MM-DD HH:MM`, hour may be unpadded).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).ok()
}

/// Hour-of-day of a provider timestamp.
pub fn hour_of(value: &str) -> Option<u32> {
    parse_timestamp(value).map(|ts| ts.hour())
}

/// Points whose hour lies in `[current_hour, current_hour + WINDOW_HOURS)`,
/// in input order.
pub fn window_from_hour(hours: &[HourlyPoint], current_hour: u32) -> Vec<&HourlyPoint> {
    let end = current_hour.saturating_add(WINDOW_HOURS);

    hours
        .iter()
        .filter(|point| match hour_of(&point.time) {
            Some(hour) => current_hour <= hour && hour < end,
            None => {
                tracing::debug!(time = %point.time, "skipping hourly point with malformed time");
                false
            }
        })
        .collect()
}

/// Next hours relative to `reference`, the location's local time.
///
/// A malformed reference yields an empty window.
pub fn next_hours<'a>(hours: &'a [HourlyPoint], reference: &str) -> Vec<&'a HourlyPoint> {
    match hour_of(reference) {
        Some(current_hour) => window_from_hour(hours, current_hour),
        None => {
            tracing::warn!(reference, "cannot window forecast: malformed reference time");
            Vec::new()
        }
    }
}

/// Window over the first forecast day of a response, anchored at its
/// reported local time. Empty when the response carries no hourly data.
pub fn next_hours_for(response: &ForecastResponse) -> Vec<&HourlyPoint> {
    match response.today_hours() {
        Some(hours) => next_hours(hours, &response.location.localtime),
        None => Vec::new(),
    }
}
