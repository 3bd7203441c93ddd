//! Configuration for the travel agents

use crate::error::{Result, TravelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENV_MODEL: &str = "TRAVEL_AGENT_MODEL";
pub const ENV_APP: &str = "TRAVEL_AGENT_APP";
pub const ENV_PATTERN: &str = "TRAVEL_AGENT_PATTERN";

/// Model identifier used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Which agent application `root_agent` returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentApp {
    /// Weather, itinerary and hotel booking
    #[default]
    Travel,
    /// Weather and theme park tickets
    ThemePark,
}

/// How the travel application is wired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentPattern {
    /// One agent holding every function tool
    Single,
    /// A coordinator delegating to specialist sub-agents
    #[default]
    Multi,
}

impl FromStr for AgentApp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "travel" => Ok(Self::Travel),
            "theme-park" | "themepark" => Ok(Self::ThemePark),
            other => Err(format!("unknown app '{other}' (expected travel or theme-park)")),
        }
    }
}

impl fmt::Display for AgentApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Travel => f.write_str("travel"),
            Self::ThemePark => f.write_str("theme-park"),
        }
    }
}

impl FromStr for AgentPattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            other => Err(format!("unknown pattern '{other}' (expected single or multi)")),
        }
    }
}

impl fmt::Display for AgentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Multi => f.write_str("multi"),
        }
    }
}

/// Configuration for the travel agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Model identifier written into every agent
    pub model: String,

    /// Application returned by `root_agent`
    pub app: AgentApp,

    /// Wiring of the travel application; the theme park app has one shape only
    pub pattern: AgentPattern,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            app: AgentApp::default(),
            pattern: AgentPattern::default(),
        }
    }
}

impl TravelConfig {
    /// Create a new configuration builder
    pub fn builder() -> TravelConfigBuilder {
        TravelConfigBuilder::default()
    }

    /// Apply `TRAVEL_AGENT_MODEL`, `TRAVEL_AGENT_APP` and `TRAVEL_AGENT_PATTERN`
    pub fn with_env(self) -> Result<Self> {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(model) = lookup(ENV_MODEL) {
            self.model = model;
        }
        if let Some(app) = lookup(ENV_APP) {
            self.app = app
                .parse()
                .map_err(|e| TravelError::ConfigError(format!("{ENV_APP}: {e}")))?;
        }
        if let Some(pattern) = lookup(ENV_PATTERN) {
            self.pattern = pattern
                .parse()
                .map_err(|e| TravelError::ConfigError(format!("{ENV_PATTERN}: {e}")))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(TravelError::ConfigError(
                "model must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for TravelConfig
#[derive(Debug, Default)]
pub struct TravelConfigBuilder {
    model: Option<String>,
    app: Option<AgentApp>,
    pattern: Option<AgentPattern>,
}

impl TravelConfigBuilder {
    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the application
    pub fn app(mut self, app: AgentApp) -> Self {
        self.app = Some(app);
        self
    }

    /// Set the wiring pattern
    pub fn pattern(mut self, pattern: AgentPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TravelConfig> {
        let defaults = TravelConfig::default();

        let config = TravelConfig {
            model: self.model.unwrap_or(defaults.model),
            app: self.app.unwrap_or(defaults.app),
            pattern: self.pattern.unwrap_or(defaults.pattern),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TravelConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.app, AgentApp::Travel);
        assert_eq!(config.pattern, AgentPattern::Multi);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = TravelConfig::builder()
            .model("local-model")
            .pattern(AgentPattern::Single)
            .build()
            .unwrap();

        assert_eq!(config.model, "local-model");
        assert_eq!(config.app, AgentApp::Travel);
        assert_eq!(config.pattern, AgentPattern::Single);
    }

    #[test]
    fn test_empty_model_rejected() {
        assert!(TravelConfig::builder().model("  ").build().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = TravelConfig::default()
            .with_lookup(lookup(&[
                (ENV_MODEL, "other-model"),
                (ENV_APP, "theme_park"),
                (ENV_PATTERN, "SINGLE"),
            ]))
            .unwrap();

        assert_eq!(config.model, "other-model");
        assert_eq!(config.app, AgentApp::ThemePark);
        assert_eq!(config.pattern, AgentPattern::Single);
    }

    #[test]
    fn test_env_bad_pattern() {
        let err = TravelConfig::default()
            .with_lookup(lookup(&[(ENV_PATTERN, "swarm")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_PATTERN));
    }

    #[test]
    fn test_display_parses_back() {
        for app in [AgentApp::Travel, AgentApp::ThemePark] {
            assert_eq!(app.to_string().parse::<AgentApp>(), Ok(app));
        }
        for pattern in [AgentPattern::Single, AgentPattern::Multi] {
            assert_eq!(pattern.to_string().parse::<AgentPattern>(), Ok(pattern));
        }
    }
}
