//! Tool declaration types

use crate::tool::ToolKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition for a host runtime
///
/// This describes a tool that the model can call, including its name,
/// description, and input schema in JSON Schema format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match the tool in ToolRegistry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,

    /// Function or agent
    pub kind: ToolKind,
}

impl ToolDefinition {
    /// Create a new function tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            kind: ToolKind::Function,
        }
    }

    /// Override the tool kind
    pub fn with_kind(mut self, kind: ToolKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Helper module to build JSON schemas for tools
pub mod schema {
    use serde_json::{Value, json};

    /// Create a JSON schema for an object with properties
    ///
    /// # Example
    ///
    /// ```
    /// use agent_tools::schema;
    /// use serde_json::json;
    ///
    /// let schema = schema::object(
    ///     json!({
    ///         "city": schema::string("City name"),
    ///     }),
    ///     &["city"],
    /// );
    /// assert_eq!(schema["required"][0], "city");
    /// ```
    pub fn object(properties: Value, required: &[&str]) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }

    /// String property schema with a default value
    pub fn string_with_default(description: &str, default: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
            "default": default,
        })
    }
}
