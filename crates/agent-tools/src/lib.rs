//! Tool framework for the travel agents workspace
//!
//! This crate provides the uniform invocation contract shared by plain
//! function tools and sub-agents, plus a registry and the declaration types
//! handed to a host runtime.

pub mod agent_tool;
pub mod definition;
pub mod registry;
pub mod tool;

pub use agent_tool::AgentTool;
pub use definition::{ToolDefinition, schema};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolKind};
