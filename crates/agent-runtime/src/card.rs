//! Serializable agent declarations

use agent_tools::ToolDefinition;
use serde::{Deserialize, Serialize};

/// Everything a host needs to know to load an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCard {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instruction: String,
    pub tools: Vec<ToolDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,
}

impl AgentCard {
    /// Names of the tools that are agents themselves
    pub fn sub_agents(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|t| t.kind == agent_tools::ToolKind::Agent)
            .map(|t| t.name.as_str())
            .collect()
    }
}
