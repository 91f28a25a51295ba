//! Fetch stage: one GET against the source API.

use crate::error::{EtlError, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::info;

/// HTTP fetcher for the source endpoint.
///
/// Issues a single bearer-authenticated GET per run. Deliberately no
/// timeout and no retry: the run blocks until the call completes or
/// errors.
pub struct Fetcher {
    client: Client,
    endpoint_url: String,
    api_token: String,
}

impl Fetcher {
    pub fn new(endpoint_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint_url: endpoint_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Fetch the raw payload from the configured endpoint.
    ///
    /// The payload is returned unmodified. Non-success status, transport
    /// errors, and unparseable bodies all collapse into the fetch
    /// failure; no distinction is made between transient and permanent
    /// causes.
    pub async fn fetch(&self) -> Result<Value> {
        info!("Fetching data from {}", self.endpoint_url);

        let response = self
            .client
            .get(&self.endpoint_url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| EtlError::fetch(format!("request to {} failed: {}", self.endpoint_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EtlError::fetch(format!(
                "{} returned status {}",
                self.endpoint_url, status
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| EtlError::fetch(format!("response body is not valid JSON: {}", e)))?;

        info!("Data fetched successfully");
        Ok(payload)
    }
}
