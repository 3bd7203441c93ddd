//! Core abstractions for the travel agents workspace
//!
//! This crate defines the fundamental traits and types shared by the tool,
//! runtime and domain crates.

pub mod agent;
pub mod context;
pub mod error;

pub use agent::Agent;
pub use context::Context;
pub use error::{Error, Result};
