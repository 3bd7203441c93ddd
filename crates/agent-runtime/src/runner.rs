//! Seam between agent descriptors and the host runtime

use crate::agents::LlmAgent;
use agent_core::{Context, Result};
use async_trait::async_trait;

/// Host runtime that drives a model through an agent's instruction and tools
///
/// The model loop itself lives outside this workspace. A host implements this
/// trait and binds it to [`LlmAgent`]s via
/// [`LlmAgentBuilder::runner`](crate::LlmAgentBuilder::runner); the agent then
/// hands every request to it. Implementations read everything they need from
/// the agent: model identifier, instruction text and the tool registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelRunner: Send + Sync {
    /// Run one request against the agent and return its final text
    async fn run(&self, agent: &LlmAgent, input: String, context: &mut Context) -> Result<String>;
}
