//! Agents that call function tools directly

use agent_runtime::LlmAgent;
use std::sync::Arc;

use super::AgentFactory;
use crate::error::Result;
use crate::prompts;
use crate::tools::{HotelBookingTool, ItineraryTool, ThemeParkTicketTool, WeatherTool};

impl AgentFactory {
    /// Weather updates plus weather-gated theme park tickets
    pub fn weather_themepark_agent(&self) -> Result<LlmAgent> {
        Ok(self
            .builder(prompts::WEATHER_THEMEPARK_AGENT)
            .description(prompts::WEATHER_THEMEPARK_DESCRIPTION)
            .instruction(prompts::WEATHER_THEMEPARK_INSTRUCTION)
            .tool(Arc::new(WeatherTool))
            .tool(Arc::new(ThemeParkTicketTool))
            .build()?)
    }

    /// Single-agent travel planner holding all three travel tools
    pub fn travel_weather_agent(&self) -> Result<LlmAgent> {
        Ok(self
            .builder(prompts::TRAVEL_WEATHER_AGENT)
            .description(prompts::TRAVEL_WEATHER_DESCRIPTION)
            .instruction(prompts::TRAVEL_WEATHER_INSTRUCTION)
            .tool(Arc::new(WeatherTool))
            .tool(Arc::new(ItineraryTool))
            .tool(Arc::new(HotelBookingTool))
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AgentFactory, TravelConfig};
    use std::sync::Arc;

    #[test]
    fn test_weather_themepark_tools() {
        let agent = AgentFactory::new(Arc::new(TravelConfig::default()))
            .weather_themepark_agent()
            .unwrap();
        assert_eq!(agent.tools().names(), vec!["get_weather", "book_theme_park_ticket"]);
        assert!(agent.sub_agent_names().is_empty());
        assert!(agent.output_key().is_none());
    }

    #[tokio::test]
    async fn test_travel_weather_tools_run() {
        let agent = AgentFactory::new(Arc::new(TravelConfig::default()))
            .travel_weather_agent()
            .unwrap();
        assert_eq!(
            agent.tools().names(),
            vec!["get_weather", "create_travel_itinerary", "book_hotel"]
        );

        let weather = agent
            .tools()
            .execute("get_weather", serde_json::json!({ "city": "Sydney" }))
            .await
            .unwrap();
        let itinerary = agent
            .tools()
            .execute(
                "create_travel_itinerary",
                serde_json::json!({ "weather_report": weather["report"], "city": "Sydney" }),
            )
            .await
            .unwrap();
        assert_eq!(itinerary["itinerary"]["itinerary_focus"], "indoor comfort and relaxation");
    }
}
