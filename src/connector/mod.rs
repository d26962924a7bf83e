//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Generation (Vertex AI Gemini over REST, plus an in-process mock)
//! - API surfaces (HTTP server, CLI routing) over a shared service container

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
