//! Tool for building a weather-appropriate itinerary

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::parse_params;
use crate::itinerary::{DEFAULT_DESTINATION, create_travel_itinerary};

/// Tool wrapping [`create_travel_itinerary`]
pub struct ItineraryTool;

#[derive(Debug, Deserialize)]
struct ItineraryParams {
    weather_report: String,
    #[serde(default = "default_city")]
    city: String,
}

fn default_city() -> String {
    DEFAULT_DESTINATION.to_string()
}

#[async_trait]
impl Tool for ItineraryTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: ItineraryParams = parse_params(params)?;
        Ok(create_travel_itinerary(&params.weather_report, &params.city).to_value()?)
    }

    fn name(&self) -> &'static str {
        "create_travel_itinerary"
    }

    fn description(&self) -> &'static str {
        "Create a travel itinerary based on weather conditions. Returns up to four \
         recommended activities, the itinerary focus and a suggested hotel type."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "weather_report": schema::string("Weather description from get_weather"),
                "city": schema::string_with_default(
                    "The destination city for the travel itinerary",
                    DEFAULT_DESTINATION,
                ),
            }),
            &["weather_report"],
        )
    }
}
