//! Application-wide configuration

use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the deployment environment
pub const ENV_ENVIRONMENT: &str = "AGENT_ENV";
/// Environment variable selecting the log format
pub const ENV_LOG_FORMAT: &str = "AGENT_LOG_FORMAT";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Environment (dev, prod, etc.)
    pub environment: String,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "travel-agents".to_string(),
            environment: "development".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Defaults overridden by `AGENT_ENV` and `AGENT_LOG_FORMAT`
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(environment) = lookup(ENV_ENVIRONMENT) {
            config.environment = environment;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.log_format = format
                .parse()
                .map_err(|e| anyhow::anyhow!("{ENV_LOG_FORMAT}: {e}"))?;
        }
        Ok(config)
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
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
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_ENVIRONMENT, "Production"),
            (ENV_LOG_FORMAT, "json"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_bad_log_format() {
        let err = Config::from_lookup(lookup(&[(ENV_LOG_FORMAT, "yaml")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LOG_FORMAT));
    }
}
