//! Ollama HTTP connection
//!
//! Each public method performs exactly one round-trip against the server.
//! The tag listing and the server version are fetched once at construction
//! and kept as read-only snapshots.

use crate::connection::types::{
    parse_model_names, ConnectionStatus, GenerateRequest, GenerateResponse, ModelAction,
    ModelRequest, VersionResponse,
};
use crate::errors::{ConnectionError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

/// Exit status used when a fatal connection terminates the process
pub const EXIT_CODE_INVALID_CONNECTION: i32 = 1;

/// Build the URL for a remote verb by plain concatenation.
///
/// The base address is used verbatim, so it is expected to end with `/`.
pub fn endpoint_url(address: &str, verb: &str) -> String {
    format!("{}api/{}", address, verb)
}

/// Connection to an Ollama server
#[derive(Debug, Clone)]
pub struct OllamaConnection {
    client: Client,
    address: String,
    status: ConnectionStatus,
    raw_listing: String,
    version: String,
}

impl OllamaConnection {
    /// Connect to `address`, exiting the process on a fatal connection.
    ///
    /// Only strict mode makes a failed liveness probe fatal. All other errors
    /// are returned to the caller.
    pub async fn new(address: &str, strict: bool) -> Result<Self> {
        match Self::establish(address, strict).await {
            Err(e) if e.is_fatal() => {
                eprintln!("Ollama connection is invalid, but the connection is enabled. [{}]", e);
                eprintln!("Exiting");
                std::process::exit(EXIT_CODE_INVALID_CONNECTION);
            }
            other => other,
        }
    }

    /// Connect to `address` without terminating the process.
    ///
    /// Returns `ConnectionError::Fatal` where [`OllamaConnection::new`]
    /// would exit. In lenient mode an invalid connection is logged and the
    /// listing and version fetches still run, so an unreachable server
    /// surfaces as the `HttpError` of the listing fetch.
    pub async fn establish(address: &str, strict: bool) -> Result<Self> {
        let client = Client::builder().build()?;

        let status = probe_address(&client, address, strict).await;
        match &status {
            ConnectionStatus::Valid => debug!(address, "Ollama connection validated"),
            ConnectionStatus::Invalid(reason) => {
                warn!(address, %reason, "Ollama connection is invalid, ignoring");
            }
            ConnectionStatus::Fatal(reason) => {
                error!(address, %reason, strict, "Ollama connection is invalid");
                return Err(ConnectionError::Fatal {
                    address: address.to_string(),
                    reason: reason.clone(),
                });
            }
        }

        let mut connection = Self {
            client,
            address: address.to_string(),
            status,
            raw_listing: String::new(),
            version: String::new(),
        };
        connection.raw_listing = connection.get_model_listing().await?;
        connection.version = connection.get_version().await?;

        Ok(connection)
    }

    /// Re-run the liveness probe against the configured address
    pub async fn probe(&self, strict: bool) -> ConnectionStatus {
        probe_address(&self.client, &self.address, strict).await
    }

    /// Get full model information from api/show
    ///
    /// The body must be a JSON object and is returned as-is; interpreting
    /// its fields is left to the caller.
    pub async fn get_model_info(&self, model_name: &str) -> Result<Map<String, Value>> {
        let url = endpoint_url(&self.address, "show");
        debug!(%url, model = model_name, "Requesting model info");

        let body = self
            .client
            .post(&url)
            .json(&ModelRequest { model: model_name })
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Pull, delete or load a model, returning the raw HTTP status code
    pub async fn perform_model_action(&self, action: ModelAction, model_name: &str) -> Result<u16> {
        let url = endpoint_url(&self.address, action.verb());
        debug!(%url, %action, model = model_name, "Performing model action");

        let response = self
            .client
            .request(action.method(), &url)
            .json(&ModelRequest { model: model_name })
            .send()
            .await?;

        Ok(response.status().as_u16())
    }

    /// Query the server version from api/version
    pub async fn get_version(&self) -> Result<String> {
        let url = endpoint_url(&self.address, "version");
        debug!(%url, "Requesting server version");

        let body = self.client.get(&url).send().await?.text().await?;
        let version: VersionResponse = serde_json::from_str(&body)?;
        Ok(version.version)
    }

    async fn get_model_listing(&self) -> Result<String> {
        let url = endpoint_url(&self.address, "tags");
        debug!(%url, "Requesting model listing");

        Ok(self.client.get(&url).send().await?.text().await?)
    }

    /// Run a non-streaming generation and return the `response` text
    pub async fn get_generation_result(&self, model: &str, prompt: &str) -> Result<String> {
        let url = endpoint_url(&self.address, "generate");
        debug!(%url, model, "Requesting generation");

        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let body = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        let generated: GenerateResponse = serde_json::from_str(&body)?;
        Ok(generated.response)
    }

    /// Names of installed models, from the listing captured at construction
    pub fn list_model_names(&self) -> Result<Vec<String>> {
        parse_model_names(&self.raw_listing)
    }

    /// Names of models currently loaded in memory (live api/ps call)
    pub async fn list_loaded_model_names(&self) -> Result<Vec<String>> {
        let url = endpoint_url(&self.address, "ps");
        debug!(%url, "Requesting loaded models");

        let body = self.client.get(&url).send().await?.text().await?;
        parse_model_names(&body)
    }

    /// Base address as supplied at construction
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Liveness probe outcome recorded at construction
    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    /// Server version captured at construction
    pub fn server_version(&self) -> &str {
        &self.version
    }

    /// Raw api/tags body captured at construction
    pub fn raw_listing(&self) -> &str {
        &self.raw_listing
    }
}

async fn probe_address(client: &Client, address: &str, strict: bool) -> ConnectionStatus {
    let probe = match client.get(address).send().await {
        Ok(response) => response.text().await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    ConnectionStatus::classify(probe, strict)
}
