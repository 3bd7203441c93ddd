//! Tool for booking theme park tickets

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::parse_params;
use crate::theme_park::book_theme_park_ticket;

/// Tool wrapping [`book_theme_park_ticket`]
pub struct ThemeParkTicketTool;

#[derive(Debug, Deserialize)]
struct TicketParams {
    weather_report: String,
}

#[async_trait]
impl Tool for ThemeParkTicketTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: TicketParams = parse_params(params)?;
        Ok(book_theme_park_ticket(&params.weather_report).to_value()?)
    }

    fn name(&self) -> &'static str {
        "book_theme_park_ticket"
    }

    fn description(&self) -> &'static str {
        "Book a theme park ticket only if the weather is suitable. Returns a \
         confirmation, or an error status explaining why the booking was refused."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "weather_report": schema::string("Weather description from get_weather"),
            }),
            &["weather_report"],
        )
    }
}
