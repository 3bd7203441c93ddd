//! Weather-driven itinerary suggestions

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::response::ToolResponse;
use crate::text::title_case;

/// Destination used when the caller does not name one
pub const DEFAULT_DESTINATION: &str = "the destination";

/// Maximum number of activities in an itinerary
pub const MAX_ACTIVITIES: usize = 4;

const OUTDOOR_ACTIVITIES: &[&str] = &[
    "city walking tours",
    "outdoor sightseeing",
    "park visits",
    "outdoor dining",
];
const INDOOR_ACTIVITIES: &[&str] = &[
    "museum visits",
    "shopping centers",
    "indoor attractions",
    "spa treatments",
];
const RAINY_ACTIVITIES: &[&str] = &[
    "art galleries",
    "indoor markets",
    "cultural centers",
    "cozy cafes",
];

const OUTDOOR_EXTRAS: &[&str] = &["beach activities", "rooftop dining"];
const RAINY_EXTRAS: &[&str] = &["room service dining", "indoor entertainment"];

/// Broad class of weather an itinerary is planned around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    Outdoor,
    Rainy,
    Mixed,
    General,
}

struct Rule {
    keywords: &'static [&'static str],
    outlook: Outlook,
}

/// Evaluated in order; first rule with a matching keyword wins
const RULES: &[Rule] = &[
    Rule {
        keywords: &["sunny", "clear", "partly cloudy"],
        outlook: Outlook::Outdoor,
    },
    Rule {
        keywords: &["rain", "storm", "heavy"],
        outlook: Outlook::Rainy,
    },
    Rule {
        keywords: &["overcast", "cloudy", "mild"],
        outlook: Outlook::Mixed,
    },
];

impl Outlook {
    /// Classify free-text weather, case-insensitively
    pub fn classify(weather_report: &str) -> Self {
        let text = weather_report.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
            .map_or(Outlook::General, |rule| rule.outlook)
    }

    /// Base pool and the extras appended to it
    fn pools(self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            Outlook::Outdoor => (OUTDOOR_ACTIVITIES, OUTDOOR_EXTRAS),
            Outlook::Rainy => (RAINY_ACTIVITIES, RAINY_EXTRAS),
            Outlook::Mixed => (INDOOR_ACTIVITIES, &OUTDOOR_ACTIVITIES[..2]),
            Outlook::General => (OUTDOOR_ACTIVITIES, INDOOR_ACTIVITIES),
        }
    }

    /// Top activities for this outlook, at most [`MAX_ACTIVITIES`]
    ///
    /// Rainy extras go right after the first two base entries so
    /// "room service dining" survives the cap.
    pub fn activities(self) -> Vec<&'static str> {
        let (base, extras) = self.pools();
        let ordered: Vec<&'static str> = match self {
            Outlook::Rainy => {
                let (head, tail) = base.split_at(2);
                head.iter().chain(extras).chain(tail).copied().collect()
            }
            _ => base.iter().chain(extras).copied().collect(),
        };
        ordered.into_iter().take(MAX_ACTIVITIES).collect()
    }

    pub fn focus(self) -> &'static str {
        match self {
            Outlook::Outdoor => "outdoor exploration and leisure",
            Outlook::Rainy => "indoor comfort and relaxation",
            Outlook::Mixed => "flexible indoor/outdoor activities",
            Outlook::General => "general sightseeing",
        }
    }

    pub fn hotel_type(self) -> &'static str {
        match self {
            Outlook::Outdoor => "beachfront resort or outdoor pool hotel",
            Outlook::Rainy => "luxury spa hotel or indoor entertainment hotel",
            Outlook::Mixed => "city center hotel",
            Outlook::General => "business hotel",
        }
    }
}

/// Suggested plan for a destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub destination: String,
    pub weather_conditions: String,
    pub recommended_activities: Vec<String>,
    #[serde(rename = "itinerary_focus")]
    pub focus: String,
    pub recommended_hotel_type: String,
}

/// Payload of `create_travel_itinerary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub message: String,
    pub itinerary: Itinerary,
}

/// Build an itinerary from a weather description
pub fn build_itinerary(weather_report: &str, city: &str) -> Itinerary {
    let outlook = Outlook::classify(weather_report);
    debug!(?outlook, city, "Classified weather for itinerary");

    Itinerary {
        destination: title_case(city),
        weather_conditions: weather_report.to_string(),
        recommended_activities: outlook
            .activities()
            .into_iter()
            .map(str::to_string)
            .collect(),
        focus: outlook.focus().to_string(),
        recommended_hotel_type: outlook.hotel_type().to_string(),
    }
}

/// `create_travel_itinerary` tool body; never fails
pub fn create_travel_itinerary(weather_report: &str, city: &str) -> ToolResponse<ItineraryPlan> {
    let itinerary = build_itinerary(weather_report, city);
    ToolResponse::success(ItineraryPlan {
        message: format!("Travel itinerary created for {}!", itinerary.destination),
        itinerary,
    })
}
