//! Coordinator and specialist agents

use agent_runtime::LlmAgent;
use std::sync::Arc;

use super::AgentFactory;
use crate::error::Result;
use crate::prompts;
use crate::tools::{HotelBookingTool, ItineraryTool, WeatherTool};

impl AgentFactory {
    pub fn weather_specialist(&self) -> Result<LlmAgent> {
        Ok(self
            .builder(prompts::WEATHER_SPECIALIST)
            .description(prompts::WEATHER_SPECIALIST_DESCRIPTION)
            .instruction(prompts::WEATHER_SPECIALIST_INSTRUCTION)
            .tool(Arc::new(WeatherTool))
            .build()?)
    }

    pub fn itinerary_specialist(&self) -> Result<LlmAgent> {
        Ok(self
            .builder(prompts::ITINERARY_SPECIALIST)
            .description(prompts::ITINERARY_SPECIALIST_DESCRIPTION)
            .instruction(prompts::ITINERARY_SPECIALIST_INSTRUCTION)
            .tool(Arc::new(ItineraryTool))
            .build()?)
    }

    pub fn hotel_specialist(&self) -> Result<LlmAgent> {
        Ok(self
            .builder(prompts::HOTEL_SPECIALIST)
            .description(prompts::HOTEL_SPECIALIST_DESCRIPTION)
            .instruction(prompts::HOTEL_SPECIALIST_INSTRUCTION)
            .tool(Arc::new(HotelBookingTool))
            .build()?)
    }

    /// Coordinator with the three specialists as agent tools
    ///
    /// Its final answer is stored in the session under
    /// [`prompts::TRAVEL_COORDINATOR_OUTPUT_KEY`].
    pub fn travel_coordinator(&self) -> Result<LlmAgent> {
        Ok(self
            .builder(prompts::TRAVEL_COORDINATOR)
            .description(prompts::TRAVEL_COORDINATOR_DESCRIPTION)
            .instruction(prompts::TRAVEL_COORDINATOR_INSTRUCTION)
            .output_key(prompts::TRAVEL_COORDINATOR_OUTPUT_KEY)
            .sub_agent(Arc::new(self.weather_specialist()?))
            .sub_agent(Arc::new(self.itinerary_specialist()?))
            .sub_agent(Arc::new(self.hotel_specialist()?))
            .build()?)
    }
}
