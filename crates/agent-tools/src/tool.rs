//! Tool trait definition

use crate::definition::ToolDefinition;
use agent_core::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What sits behind a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// A plain function
    Function,
    /// Another agent exposed as a tool
    Agent,
}

/// Trait for tools that agents can execute
///
/// Tools are the uniform invocation contract of the workspace: a JSON object
/// goes in, a JSON object comes out. Plain functions and whole sub-agents both
/// implement it, so a coordinating agent can treat them alike.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Tool output as JSON value
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the model understand when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;

    /// Whether this tool is a function or a wrapped agent
    fn kind(&self) -> ToolKind {
        ToolKind::Function
    }

    /// Declaration handed to a host runtime
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
            .with_kind(self.kind())
    }
}
