//! Weather gate for theme park tickets

use tracing::{info, warn};

use crate::response::{Notice, ToolResponse};

/// Conditions considered fine for a day outdoors
pub const SAFE_CONDITIONS: [&str; 16] = [
    "sunny",
    "clear",
    "partly cloudy",
    "mostly sunny",
    "fair",
    "light clouds",
    "few clouds",
    "scattered clouds",
    "overcast",
    "dry",
    "pleasant",
    "mild",
    "warm",
    "cool",
    "calm",
    "light wind",
];

pub const BOOKED_MESSAGE: &str =
    "Ticket booked! The weather is suitable for visiting the theme park.";
pub const DENIED_MESSAGE: &str =
    "Cannot book ticket. The weather is not ideal for outdoor activities.";

/// Whether any safe condition occurs in the report, ignoring case
pub fn is_suitable(weather_report: &str) -> bool {
    let text = weather_report.to_lowercase();
    SAFE_CONDITIONS.iter().any(|c| text.contains(c))
}

/// `book_theme_park_ticket` tool body
pub fn book_theme_park_ticket(weather_report: &str) -> ToolResponse<Notice> {
    if is_suitable(weather_report) {
        info!("Theme park ticket booked");
        ToolResponse::success(Notice {
            message: BOOKED_MESSAGE.to_string(),
        })
    } else {
        warn!(weather = weather_report, "Theme park ticket refused");
        ToolResponse::error(DENIED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rain_is_refused() {
        let response = book_theme_park_ticket("light rain");
        assert_eq!(response.status(), "error");
        assert_eq!(
            response.to_value().unwrap(),
            json!({ "status": "error", "error_message": DENIED_MESSAGE })
        );
    }

    #[test]
    fn test_sunny_is_booked() {
        let response = book_theme_park_ticket("sunny");
        assert_eq!(
            response.to_value().unwrap(),
            json!({ "status": "success", "message": BOOKED_MESSAGE })
        );
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(is_suitable("The weather in Tokyo is Overcast with a temperature of 19.7°C"));
        assert!(is_suitable("MOSTLY SUNNY"));
        assert!(!is_suitable("Thunderstorm"));
        assert!(!is_suitable(""));
    }

    #[test]
    fn test_every_safe_condition_books() {
        for condition in SAFE_CONDITIONS {
            assert!(book_theme_park_ticket(condition).is_success(), "{condition}");
        }
    }
}
