//! Tool for reading the current UTC time

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::clock::get_current_time;

/// Tool wrapping [`get_current_time`]; ignores its parameters
pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    async fn execute(&self, _params: Value) -> AgentResult<Value> {
        Ok(get_current_time().to_value()?)
    }

    fn name(&self) -> &'static str {
        "get_current_time"
    }

    fn description(&self) -> &'static str {
        "Return the current time in UTC."
    }

    fn input_schema(&self) -> Value {
        schema::object(json!({}), &[])
    }
}
