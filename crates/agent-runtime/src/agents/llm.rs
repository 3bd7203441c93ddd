//! Model-driven agent descriptor

use crate::card::AgentCard;
use crate::runner::ModelRunner;
use agent_core::{Agent, Context, Error, Result};
use agent_tools::{AgentTool, Tool, ToolKind, ToolRegistry};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// An agent whose behaviour is defined by a model, an instruction and tools
///
/// `LlmAgent` is a declaration: it carries the name, model identifier,
/// description, instruction text and tool list a host runtime needs. Its
/// tools can be plain functions or other agents wrapped in [`AgentTool`],
/// which is how a coordinator delegates to specialists.
///
/// Processing a request requires a [`ModelRunner`] bound at build time.
/// When the agent has an output key, its final text is also written into the
/// context under that key.
///
/// # Example
///
/// ```no_run
/// use agent_runtime::LlmAgent;
/// use std::sync::Arc;
///
/// # fn example(weather_tool: Arc<dyn agent_tools::Tool>) -> agent_core::Result<()> {
/// let specialist = Arc::new(
///     LlmAgent::builder("weather_specialist")
///         .model("gemini-2.0-flash")
///         .instruction("You are a weather specialist.")
///         .tool(weather_tool)
///         .build()?,
/// );
///
/// let coordinator = LlmAgent::builder("travel_coordinator")
///     .model("gemini-2.0-flash")
///     .instruction("Coordinate the specialists.")
///     .sub_agent(specialist)
///     .output_key("travel_coordinator_output")
///     .build()?;
///
/// assert_eq!(coordinator.sub_agent_names(), vec!["weather_specialist"]);
/// # Ok(())
/// # }
/// ```
pub struct LlmAgent {
    name: String,
    model: String,
    description: String,
    instruction: String,
    tools: Arc<ToolRegistry>,
    output_key: Option<String>,
    runner: Option<Arc<dyn ModelRunner>>,
}

impl LlmAgent {
    /// Create a new builder
    pub fn builder(name: impl Into<String>) -> LlmAgentBuilder {
        LlmAgentBuilder::new(name)
    }

    /// Model identifier passed to the host
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Instruction text
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Tools available to this agent
    pub fn tools(&self) -> &Arc<ToolRegistry> {
        &self.tools
    }

    /// Session-state key the final answer is stored under
    pub fn output_key(&self) -> Option<&str> {
        self.output_key.as_deref()
    }

    /// Whether a host runner is bound
    pub fn has_runner(&self) -> bool {
        self.runner.is_some()
    }

    /// Names of the tools that wrap other agents
    pub fn sub_agent_names(&self) -> Vec<String> {
        self.tools
            .list_tools()
            .iter()
            .filter(|t| t.kind() == ToolKind::Agent)
            .map(|t| t.name().to_string())
            .collect()
    }

    /// Serializable declaration of this agent
    pub fn card(&self) -> AgentCard {
        AgentCard {
            name: self.name.clone(),
            model: self.model.clone(),
            description: self.description.clone(),
            instruction: self.instruction.clone(),
            tools: self.tools.definitions(),
            output_key: self.output_key.clone(),
        }
    }
}

impl std::fmt::Debug for LlmAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmAgent")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("tools", &self.tools.names())
            .field("output_key", &self.output_key)
            .field("has_runner", &self.runner.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Agent for LlmAgent {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        let runner = self
            .runner
            .as_ref()
            .ok_or_else(|| Error::RunnerUnavailable(self.name.clone()))?;

        info!(
            agent = %self.name,
            model = %self.model,
            session = context.session_id().unwrap_or("-"),
            "Running agent"
        );
        let output = runner.run(self, input, context).await?;

        if let Some(key) = &self.output_key {
            debug!(
                agent = %self.name,
                key = %key,
                entries = context.len() + 1,
                "Storing agent output"
            );
            context.record_output(key.clone(), output.clone());
        }

        Ok(output)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Builder for LlmAgent
pub struct LlmAgentBuilder {
    name: String,
    model: Option<String>,
    description: String,
    instruction: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
    output_key: Option<String>,
    runner: Option<Arc<dyn ModelRunner>>,
}

impl LlmAgentBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
            description: String::new(),
            instruction: None,
            tools: Vec::new(),
            output_key: None,
            runner: None,
        }
    }

    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the description shown to coordinating agents
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the instruction text
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Add a tool
    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add another agent, exposed to this one as a tool
    pub fn sub_agent(self, agent: Arc<dyn Agent>) -> Self {
        self.tool(Arc::new(AgentTool::new(agent)))
    }

    /// Store the final answer in the context under `key`
    pub fn output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    /// Bind the host runner
    pub fn runner(mut self, runner: Arc<dyn ModelRunner>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Bind the host runner if one is given
    pub fn maybe_runner(mut self, runner: Option<Arc<dyn ModelRunner>>) -> Self {
        self.runner = runner;
        self
    }

    /// Build the agent
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty
    /// - No model or instruction is set
    pub fn build(self) -> Result<LlmAgent> {
        if self.name.trim().is_empty() {
            return Err(Error::InitializationFailed(
                "Agent name must not be empty".to_string(),
            ));
        }

        let model = self.model.filter(|m| !m.is_empty()).ok_or_else(|| {
            Error::InitializationFailed(format!("Model not set for agent '{}'", self.name))
        })?;

        let instruction = self.instruction.ok_or_else(|| {
            Error::InitializationFailed(format!("Instruction not set for agent '{}'", self.name))
        })?;

        let tools: ToolRegistry = self.tools.into_iter().collect();
        debug!(agent = %self.name, tools = ?tools.names(), "Built agent");

        Ok(LlmAgent {
            name: self.name,
            model,
            description: self.description,
            instruction,
            tools: Arc::new(tools),
            output_key: self.output_key,
            runner: self.runner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MockModelRunner;
    use serde_json::{Value, json};

    struct ClockTool;

    #[async_trait]
    impl Tool for ClockTool {
        async fn execute(&self, _params: Value) -> Result<Value> {
            Ok(json!({ "status": "success", "report": "noon" }))
        }

        fn name(&self) -> &str {
            "get_current_time"
        }

        fn description(&self) -> &str {
            "Current time"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object", "properties": {} })
        }
    }

    fn specialist(runner: Option<Arc<dyn ModelRunner>>) -> LlmAgent {
        LlmAgent::builder("time_specialist")
            .model("test-model")
            .description("Tells the time")
            .instruction("Answer with the time.")
            .tool(Arc::new(ClockTool))
            .maybe_runner(runner)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_requires_model() {
        let err = LlmAgent::builder("a").instruction("x").build().unwrap_err();
        assert!(matches!(err, Error::InitializationFailed(_)));
    }

    #[test]
    fn test_build_requires_instruction() {
        let err = LlmAgent::builder("a").model("m").build().unwrap_err();
        assert!(matches!(err, Error::InitializationFailed(_)));
    }

    #[test]
    fn test_build_rejects_empty_name() {
        let err = LlmAgent::builder(" ")
            .model("m")
            .instruction("x")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InitializationFailed(_)));
    }

    #[test]
    fn test_card() {
        let agent = specialist(None);
        let card = agent.card();

        assert_eq!(card.name, "time_specialist");
        assert_eq!(card.model, "test-model");
        assert_eq!(card.tools.len(), 1);
        assert_eq!(card.tools[0].name, "get_current_time");
        assert!(card.output_key.is_none());

        let value = serde_json::to_value(&card).unwrap();
        assert!(value.get("output_key").is_none());
    }

    #[test]
    fn test_sub_agents_become_agent_tools() {
        let coordinator = LlmAgent::builder("coordinator")
            .model("test-model")
            .instruction("Delegate.")
            .sub_agent(Arc::new(specialist(None)))
            .tool(Arc::new(ClockTool))
            .output_key("coordinator_output")
            .build()
            .unwrap();

        assert_eq!(coordinator.sub_agent_names(), vec!["time_specialist"]);
        let card = coordinator.card();
        assert_eq!(card.sub_agents(), vec!["time_specialist"]);
        assert_eq!(card.tools[0].description, "Tells the time");
        assert_eq!(card.output_key.as_deref(), Some("coordinator_output"));
    }

    #[tokio::test]
    async fn test_process_without_runner() {
        let agent = specialist(None);
        let mut ctx = Context::new();

        let err = agent.process("what time?".to_string(), &mut ctx).await.unwrap_err();
        assert!(matches!(err, Error::RunnerUnavailable(name) if name == "time_specialist"));
    }

    #[tokio::test]
    async fn test_process_delegates_to_runner() {
        let mut runner = MockModelRunner::new();
        runner
            .expect_run()
            .withf(|agent, input, _ctx| agent.name() == "time_specialist" && input == "what time?")
            .times(1)
            .returning(|agent, _input, _ctx| Ok(format!("{} says noon", agent.name())));

        let agent = specialist(Some(Arc::new(runner)));
        assert!(agent.has_runner());

        let mut ctx = Context::new();
        let out = agent.process("what time?".to_string(), &mut ctx).await.unwrap();
        assert_eq!(out, "time_specialist says noon");
        assert!(ctx.is_empty());
    }

    #[tokio::test]
    async fn test_output_key_is_recorded() {
        let mut runner = MockModelRunner::new();
        runner
            .expect_run()
            .returning(|_agent, _input, _ctx| Ok("Trip planned".to_string()));

        let agent = LlmAgent::builder("coordinator")
            .model("test-model")
            .instruction("Delegate.")
            .output_key("coordinator_output")
            .runner(Arc::new(runner))
            .build()
            .unwrap();

        let mut ctx = Context::new();
        agent.process("plan".to_string(), &mut ctx).await.unwrap();
        assert_eq!(ctx.output("coordinator_output"), Some("Trip planned"));
    }

    #[tokio::test]
    async fn test_runner_can_call_tools() {
        let mut runner = MockModelRunner::new();
        runner.expect_run().returning(|agent, _input, _ctx| {
            let tools = Arc::clone(agent.tools());
            let names = tools.names().join(",");
            Ok(names)
        });

        let agent = specialist(Some(Arc::new(runner)));
        let mut ctx = Context::new();
        let out = agent.process("list".to_string(), &mut ctx).await.unwrap();
        assert_eq!(out, "get_current_time");

        let report = agent
            .tools()
            .execute("get_current_time", json!({}))
            .await
            .unwrap();
        assert_eq!(report["report"], "noon");
    }
}
