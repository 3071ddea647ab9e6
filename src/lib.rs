//! ollama-connection - Thin client for the Ollama HTTP API
//!
//! Validates a server with a liveness probe, snapshots its model listing and
//! version, and exposes one method per remote verb.

pub mod errors;
pub mod config;
pub mod connection;
pub mod cli;

// Re-export commonly used types
pub use config::ConnectionConfig;
pub use connection::{ConnectionStatus, ModelAction, OllamaConnection};
pub use errors::{ConnectionError, Result};
