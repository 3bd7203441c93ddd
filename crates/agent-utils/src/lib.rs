//! Shared utilities for the travel agents workspace
//!
//! Logging setup and application-wide configuration used by the binaries.

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::{LogFormat, init_tracing, init_tracing_with};
