//! Travel and weather agents
//!
//! Toy agents for a host LLM runtime, built from fixed lookup tables:
//!
//! - Weather lookup for a handful of cities, with a default record
//! - Weather-driven itinerary suggestions
//! - Canned hotel booking with a stable confirmation code
//! - A weather gate for theme park tickets
//! - The current UTC time
//!
//! Every tool answers with a [`ToolResponse`] envelope
//! (`{"status": "success" | "error", ...}`).
//!
//! # Architecture
//!
//! The agents come in two shapes, selected by [`TravelConfig`]:
//! - single agent: `travel_weather_agent` (or `weather_themepark_agent`)
//!   holding the function tools directly
//! - multi agent: `travel_coordinator` delegating to `weather_specialist`,
//!   `itinerary_specialist` and `hotel_specialist`, each exposed to it as a
//!   tool
//!
//! # Example
//!
//! ```rust
//! use agent_travel::{AgentFactory, AgentPattern, TravelConfig};
//! use std::sync::Arc;
//!
//! let config = TravelConfig::builder()
//!     .pattern(AgentPattern::Single)
//!     .build()
//!     .unwrap();
//! let root = AgentFactory::new(Arc::new(config)).root_agent().unwrap();
//!
//! let card = root.card();
//! assert_eq!(card.name, "travel_weather_agent");
//! assert_eq!(card.tools.len(), 3);
//! ```

pub mod agents;
pub mod clock;
pub mod config;
pub mod error;
pub mod hotel;
pub mod itinerary;
pub mod prompts;
pub mod response;
pub mod text;
pub mod theme_park;
pub mod tools;
pub mod weather;

// Re-export main types for convenience
pub use agents::AgentFactory;
pub use config::{AgentApp, AgentPattern, TravelConfig};
pub use error::{Result, TravelError};
pub use response::ToolResponse;

// Tool bodies
pub use clock::get_current_time;
pub use hotel::book_hotel;
pub use itinerary::create_travel_itinerary;
pub use theme_park::book_theme_park_ticket;
pub use weather::get_weather;
