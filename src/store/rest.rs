//! REST RPC Store
//!
//! Calls a named remote procedure over HTTP:
//! `POST {base_url}/rest/v1/rpc/{function}` with an empty JSON object body,
//! authenticated with a service key sent as both `apikey` and bearer token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ExpiredDataStore, StoreError};
use crate::config::Config;

/// Error body returned by the store on non-2xx responses.
#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    message: Option<String>,
}

/// Purges expired records by invoking a remote procedure.
#[derive(Clone)]
pub struct RestStore {
    client: Client,
    endpoint: String,
    service_key: String,
}

impl RestStore {
    /// Creates a store client for `function` on the store at `base_url`.
    pub fn new(
        base_url: &str,
        function: &str,
        service_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/rest/v1/rpc/{}", base_url.trim_end_matches('/'), function),
            service_key: service_key.into(),
        })
    }

    /// Creates a store client from the gateway configuration.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::new(
            &config.store_url,
            &config.purge_function,
            config.service_key.clone(),
            Duration::from_secs(config.store_timeout),
        )
    }

    /// Full URL of the purge procedure.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ExpiredDataStore for RestStore {
    async fn purge_expired(&self) -> Result<(), StoreError> {
        debug!("Calling purge procedure at {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| StoreError::Transport(transport_message(e)))?;

        let status = response.status();
        debug!("Purge procedure responded with {}", status);

        if status.is_success() {
            return Ok(());
        }

        match response.text().await {
            Ok(text) => Err(StoreError::Rejected(rejection_message(status, &text))),
            Err(err) => {
                let cause = transport_message(err);
                debug!("Failed to read purge error body: {}", cause);
                Err(StoreError::Rejected(unreadable_body_message(status, &cause)))
            }
        }
    }
}

/// Describes a reqwest failure by its cause chain, without the store URL.
fn transport_message(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn unreadable_body_message(status: reqwest::StatusCode, cause: &str) -> String {
    format!("{} (error body unreadable: {})", status, cause)
}

/// Picks the most specific message available from a failed RPC response.
fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(RpcErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<RpcErrorBody>(body)
    {
        return message;
    }

    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}
