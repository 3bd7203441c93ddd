//! Static weather lookup
//!
//! A placeholder for a real weather service: a handful of cities with fixed
//! conditions, and a default record for everything else.

use serde::Serialize;
use tracing::debug;

use crate::response::{Report, ToolResponse};
use crate::text::{capitalize, title_case};

/// Current conditions for a city
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherRecord {
    pub condition: &'static str,
    pub temperature_celsius: f64,
}

impl WeatherRecord {
    const fn new(condition: &'static str, temperature_celsius: f64) -> Self {
        Self {
            condition,
            temperature_celsius,
        }
    }

    pub fn temperature_fahrenheit(&self) -> f64 {
        fahrenheit(self.temperature_celsius)
    }
}

/// Record returned for cities missing from the table
pub const DEFAULT_WEATHER: WeatherRecord = WeatherRecord::new("partly cloudy", 20.0);

/// Keyed by lowercase city name
const WEATHER_TABLE: &[(&str, WeatherRecord)] = &[
    ("london", WeatherRecord::new("partly cloudy", 18.5)),
    ("paris", WeatherRecord::new("sunny", 22.3)),
    ("new york", WeatherRecord::new("clear", 25.1)),
    ("tokyo", WeatherRecord::new("overcast", 19.7)),
    ("sydney", WeatherRecord::new("light rain", 16.2)),
];

/// Celsius to Fahrenheit
pub fn fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Look up a city, case-insensitively, falling back to [`DEFAULT_WEATHER`]
pub fn lookup(city: &str) -> &'static WeatherRecord {
    let key = city.trim().to_lowercase();
    match WEATHER_TABLE.iter().find(|(name, _)| *name == key) {
        Some((_, record)) => record,
        None => {
            debug!(city = %key, "No weather entry, using default");
            &DEFAULT_WEATHER
        }
    }
}

/// One-sentence report with both temperature scales
pub fn weather_report(city: &str) -> String {
    let city = city.trim();
    let record = lookup(city);
    format!(
        "The weather in {} is {} with a temperature of {:.1}°C ({:.1}°F).",
        title_case(city),
        capitalize(record.condition),
        record.temperature_celsius,
        record.temperature_fahrenheit(),
    )
}

/// `get_weather` tool body; never fails
pub fn get_weather(city: &str) -> ToolResponse<Report> {
    ToolResponse::success(Report {
        report: weather_report(city),
    })
}
