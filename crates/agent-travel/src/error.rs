//! Error types for the travel agents

use thiserror::Error;

/// Travel agent specific errors
///
/// Domain outcomes such as a denied ticket travel inside
/// [`ToolResponse`](crate::ToolResponse); these errors cover malformed input,
/// configuration and agent wiring.
#[derive(Debug, Error)]
pub enum TravelError {
    /// Tool parameters did not match the tool's schema
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error raised while building or running an agent
    #[error("Agent error: {0}")]
    Agent(#[from] agent_core::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for travel operations
pub type Result<T> = std::result::Result<T, TravelError>;

/// Convert TravelError to agent_core::Error
impl From<TravelError> for agent_core::Error {
    fn from(err: TravelError) -> Self {
        match err {
            TravelError::Agent(inner) => inner,
            TravelError::InvalidParameters(msg) => agent_core::Error::InvalidInput(msg),
            other => agent_core::Error::ProcessingFailed(other.to_string()),
        }
    }
}
