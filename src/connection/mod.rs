//! Ollama connection module
//!
//! Wraps the Ollama HTTP API verbs:
//! - Liveness probe on the bare address
//! - Model info, pull, delete and load
//! - Installed and loaded model listings
//! - Non-streaming generation

pub mod client;
pub mod types;

pub use client::{endpoint_url, OllamaConnection, EXIT_CODE_INVALID_CONNECTION};
pub use types::{parse_model_names, ConnectionStatus, ModelAction, RUNNING_MARKER};
