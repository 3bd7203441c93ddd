//! Agent descriptors and the host-runtime seam
//!
//! This crate provides [`LlmAgent`], the declaration a host runtime consumes
//! (model, instruction, tools, output key), the [`ModelRunner`] trait a host
//! implements to drive it, and [`AgentCard`], its serializable form.

pub mod agents;
pub mod card;
pub mod runner;

// Re-export key types
pub use agents::{LlmAgent, LlmAgentBuilder};
pub use card::AgentCard;
pub use runner::ModelRunner;
