//! Tool for looking up current weather

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::parse_params;
use crate::weather::get_weather;

/// Tool wrapping [`get_weather`]
pub struct WeatherTool;

#[derive(Debug, Deserialize)]
struct WeatherParams {
    city: String,
}

#[async_trait]
impl Tool for WeatherTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: WeatherParams = parse_params(params)?;
        Ok(get_weather(&params.city).to_value()?)
    }

    fn name(&self) -> &'static str {
        "get_weather"
    }

    fn description(&self) -> &'static str {
        "Get the current weather for a city. Returns a one-sentence report \
         with the conditions and the temperature in Celsius and Fahrenheit."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "city": schema::string("City name (e.g., 'London', 'New York')"),
            }),
            &["city"],
        )
    }
}
