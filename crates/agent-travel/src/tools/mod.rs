//! Tools exposed to the travel agents

pub mod clock;
pub mod hotel;
pub mod itinerary;
pub mod theme_park;
pub mod weather;

pub use clock::CurrentTimeTool;
pub use hotel::HotelBookingTool;
pub use itinerary::ItineraryTool;
pub use theme_park::ThemeParkTicketTool;
pub use weather::WeatherTool;

use agent_tools::{Tool, ToolRegistry};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{Result, TravelError};

/// Every function tool, in a fixed order
pub fn catalog() -> ToolRegistry {
    let tools: [Arc<dyn Tool>; 5] = [
        Arc::new(WeatherTool),
        Arc::new(ItineraryTool),
        Arc::new(HotelBookingTool),
        Arc::new(ThemeParkTicketTool),
        Arc::new(CurrentTimeTool),
    ];
    tools.into_iter().collect()
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_json::from_value(params).map_err(|e| TravelError::InvalidParameters(e.to_string()))
}
