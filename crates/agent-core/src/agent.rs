//! Core Agent trait definition

use crate::{Context, Result};
use async_trait::async_trait;

/// Core trait that all agents must implement
///
/// An agent takes a free-text request and produces a free-text answer. How the
/// answer is produced (a model-driven loop, a fixed function, a sub-agent) is
/// up to the implementation.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Process input and return output
    ///
    /// The input/output types are intentionally kept as String for maximum
    /// flexibility. Concrete implementations can parse/format as needed.
    async fn process(&self, input: String, context: &mut Context) -> Result<String>;

    /// Get the agent's name
    fn name(&self) -> &str;

    /// Short description shown to a coordinating agent
    fn description(&self) -> &str {
        ""
    }
}
