//! Type definitions for the Ollama connection
//!
//! Request bodies, response shapes and the model action enum used by
//! [`OllamaConnection`](super::OllamaConnection).

use crate::errors::{ConnectionError, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Substring the bare address must return for the server to count as up
pub const RUNNING_MARKER: &str = "Ollama is running";

/// Model management verbs dispatched by `perform_model_action`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelAction {
    Pull,
    Delete,
    Load,
}

impl ModelAction {
    /// Remote verb path segment (appended to `api/`)
    pub fn verb(&self) -> &'static str {
        match self {
            ModelAction::Pull => "pull",
            ModelAction::Delete => "delete",
            ModelAction::Load => "load",
        }
    }

    /// HTTP method used for this action
    pub fn method(&self) -> Method {
        match self {
            ModelAction::Pull | ModelAction::Load => Method::POST,
            ModelAction::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for ModelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())
    }
}

impl FromStr for ModelAction {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pull" => Ok(ModelAction::Pull),
            "delete" => Ok(ModelAction::Delete),
            "load" => Ok(ModelAction::Load),
            _ => Err(ConnectionError::UnknownAction(s.to_string())),
        }
    }
}

/// Outcome of the liveness probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Marker found
    Valid,
    /// Unreachable or marker absent; tolerated outside strict mode
    Invalid(String),
    /// Probe failed in strict mode; must terminate the process
    Fatal(String),
}

impl ConnectionStatus {
    /// Classify a probe result under the given strictness.
    ///
    /// Any failure, unreachable server or missing marker, is fatal only in
    /// strict mode.
    pub fn classify(probe: std::result::Result<String, String>, strict: bool) -> Self {
        let reason = match probe {
            Ok(body) if body.contains(RUNNING_MARKER) => return ConnectionStatus::Valid,
            Ok(_) => format!("response does not contain \"{}\"", RUNNING_MARKER),
            Err(e) => e,
        };

        if strict {
            ConnectionStatus::Fatal(reason)
        } else {
            ConnectionStatus::Invalid(reason)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ConnectionStatus::Valid)
    }
}

/// Body for show/pull/delete/load
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ModelRequest<'a> {
    pub model: &'a str,
}

/// Body for api/generate
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// Response from api/generate (non-streaming)
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    pub response: String,
}

/// Response from api/version
#[derive(Debug, Deserialize)]
pub(crate) struct VersionResponse {
    pub version: String,
}

/// Response from api/tags and api/ps
#[derive(Debug, Deserialize)]
pub(crate) struct ModelsResponse {
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelEntry {
    pub name: String,
}

/// Extract `models[].name` from a tags/ps body, preserving order
pub fn parse_model_names(body: &str) -> Result<Vec<String>> {
    let parsed: ModelsResponse = serde_json::from_str(body)?;
    Ok(parsed.models.into_iter().map(|m| m.name).collect())
}
