//! Concrete agent implementations
//!
//! - LlmAgent: model-driven agent declared by instruction and tools, run by a
//!   host-provided ModelRunner

pub mod llm;

pub use llm::{LlmAgent, LlmAgentBuilder};
