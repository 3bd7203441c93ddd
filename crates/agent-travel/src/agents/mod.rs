//! Travel agent declarations
//!
//! [`AgentFactory`] builds every agent of the workspace from a
//! [`TravelConfig`]. [`AgentFactory::root_agent`] is the entry point a host
//! loads; which agent it returns depends on the configured app and pattern.

pub mod multi;
pub mod single;

use agent_core::Agent;
use agent_runtime::{LlmAgent, ModelRunner};
use std::sync::Arc;
use tracing::info;

use crate::config::{AgentApp, AgentPattern, TravelConfig};
use crate::error::Result;

/// Builds travel agents, optionally bound to a host runner
///
/// # Example
///
/// ```
/// use agent_travel::{AgentFactory, TravelConfig};
/// use std::sync::Arc;
///
/// let factory = AgentFactory::new(Arc::new(TravelConfig::default()));
/// let root = factory.root_agent().unwrap();
/// assert_eq!(root.card().name, "travel_coordinator");
/// ```
#[derive(Clone)]
pub struct AgentFactory {
    config: Arc<TravelConfig>,
    runner: Option<Arc<dyn ModelRunner>>,
}

impl AgentFactory {
    /// Create a factory producing unbound agents
    pub fn new(config: Arc<TravelConfig>) -> Self {
        Self {
            config,
            runner: None,
        }
    }

    /// Bind every agent built from now on to `runner`
    pub fn with_runner(mut self, runner: Arc<dyn ModelRunner>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &TravelConfig {
        &self.config
    }

    /// The agent a host should load
    pub fn root_agent(&self) -> Result<LlmAgent> {
        let agent = match (self.config.app, self.config.pattern) {
            (AgentApp::ThemePark, _) => self.weather_themepark_agent()?,
            (AgentApp::Travel, AgentPattern::Single) => self.travel_weather_agent()?,
            (AgentApp::Travel, AgentPattern::Multi) => self.travel_coordinator()?,
        };
        info!(
            app = %self.config.app,
            pattern = %self.config.pattern,
            root = agent.name(),
            "Built root agent"
        );
        Ok(agent)
    }

    fn builder(&self, name: &str) -> agent_runtime::LlmAgentBuilder {
        LlmAgent::builder(name)
            .model(self.config.model.clone())
            .maybe_runner(self.runner.clone())
    }
}
