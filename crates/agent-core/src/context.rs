//! Session state passed to agents during execution
//!
//! Hosts use `Context` to carry a session id into an agent run, and agents
//! with an output key write their final answer back into it so later steps
//! can read it.

use serde_json::Value;
use std::collections::HashMap;

/// Key under which the host stores the session id
pub const SESSION_ID: &str = "session_id";

/// Context passed to agents during execution
///
/// # Example
///
/// ```
/// use agent_core::Context;
///
/// let mut ctx = Context::new().with_session_id("session-123");
/// ctx.record_output("travel_coordinator_output", "Trip planned");
///
/// assert_eq!(ctx.session_id(), Some("session-123"));
/// assert_eq!(ctx.output("travel_coordinator_output"), Some("Trip planned"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    state: HashMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag the context with a host session id
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.state
            .insert(SESSION_ID.to_string(), Value::String(session_id.into()));
        self
    }

    pub fn session_id(&self) -> Option<&str> {
        self.state.get(SESSION_ID).and_then(Value::as_str)
    }

    /// Store an agent's final text under its output key
    ///
    /// A later write to the same key replaces the earlier one.
    pub fn record_output(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.state.insert(key.into(), Value::String(text.into()));
    }

    /// Read back text stored with [`Context::record_output`]
    pub fn output(&self, key: &str) -> Option<&str> {
        self.state.get(key).and_then(Value::as_str)
    }

    /// Number of stored entries, session id included
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let ctx = Context::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.session_id(), None);
    }

    #[test]
    fn test_record_output_overwrites() {
        let mut ctx = Context::new().with_session_id("s-42");
        ctx.record_output("summary", "first");
        ctx.record_output("summary", "second");

        assert_eq!(ctx.output("summary"), Some("second"));
        assert_eq!(ctx.output("missing"), None);
        assert_eq!(ctx.session_id(), Some("s-42"));
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_session_id_stored_as_text() {
        let mut ctx = Context::new().with_session_id("s-1");
        ctx.record_output("travel_coordinator_output", "done");
        assert_eq!(ctx.session_id(), Some("s-1"));
        assert_eq!(ctx.output(SESSION_ID), Some("s-1"));
    }
}
