//! AgentTool wrapper that exposes an agent through the Tool trait

use crate::definition::schema;
use crate::tool::{Tool, ToolKind};
use agent_core::{Agent, Context, Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Wrapper that lets a coordinating agent call another agent as a tool
///
/// The wrapped agent runs with a fresh [`Context`]; its final text is returned
/// as `{"status": "success", "result": ...}`. Failures of the wrapped agent
/// propagate as errors.
pub struct AgentTool {
    agent: Arc<dyn Agent>,
}

#[derive(Debug, Deserialize)]
struct AgentToolParams {
    request: String,
}

impl AgentTool {
    /// Wrap an agent
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl Tool for AgentTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: AgentToolParams = serde_json::from_value(params)
            .map_err(|e| Error::InvalidInput(format!("Invalid parameters: {e}")))?;

        info!(agent = self.agent.name(), "Delegating to sub-agent");
        let mut context = Context::new();
        let result = self.agent.process(params.request, &mut context).await?;
        debug!(agent = self.agent.name(), len = result.len(), "Sub-agent finished");

        Ok(json!({
            "status": "success",
            "result": result,
        }))
    }

    fn name(&self) -> &str {
        self.agent.name()
    }

    fn description(&self) -> &str {
        self.agent.description()
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "request": schema::string("What the agent should do, in plain language"),
            }),
            &["request"],
        )
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ShoutAgent;

    #[async_trait]
    impl Agent for ShoutAgent {
        async fn process(&self, input: String, _context: &mut Context) -> Result<String> {
            Ok(input.to_uppercase())
        }

        fn name(&self) -> &str {
            "shout_specialist"
        }

        fn description(&self) -> &str {
            "Repeats the request loudly"
        }
    }

    struct FailingAgent;

    #[async_trait]
    impl Agent for FailingAgent {
        async fn process(&self, _input: String, _context: &mut Context) -> Result<String> {
            Err(Error::ProcessingFailed("boom".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_forwards_request() {
        let tool = AgentTool::new(Arc::new(ShoutAgent));
        let out = tool.execute(json!({ "request": "plan paris" })).await.unwrap();

        assert_eq!(out["status"], "success");
        assert_eq!(out["result"], "PLAN PARIS");
    }

    #[test]
    fn test_declaration() {
        let tool = AgentTool::new(Arc::new(ShoutAgent));
        let def = tool.definition();

        assert_eq!(def.name, "shout_specialist");
        assert_eq!(def.description, "Repeats the request loudly");
        assert_eq!(def.kind, ToolKind::Agent);
        assert_eq!(def.input_schema["required"][0], "request");
    }

    #[tokio::test]
    async fn test_missing_request() {
        let tool = AgentTool::new(Arc::new(ShoutAgent));
        let err = tool.execute(json!({ "query": "x" })).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_agent_error_propagates() {
        let tool = AgentTool::new(Arc::new(FailingAgent));
        let err = tool.execute(json!({ "request": "x" })).await.unwrap_err();
        assert!(matches!(err, Error::ProcessingFailed(_)));
    }
}
